//! The fixed initial dataset used in place of persistent storage.
//!
//! Loaded once when a snapshot is created; never written back by anything
//! in the library. Both functions return fresh owned copies.

use crate::models::{Comment, Issue, IssueCategory, IssueStatus, Location, User};

fn user(id: &str, name: &str, seed: &str, points: u32) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        avatar_url: format!("https://picsum.photos/seed/{}/40/40", seed),
        points,
    }
}

fn comment(id: &str, text: &str, author: &User, created_at: &str) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        author: author.clone(),
        created_at: created_at.to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        user("user-1", "Priya Sharma", "user1", 1250),
        user("user-2", "Rohan Joshi", "user2", 1100),
        user("user-3", "Anjali Patil", "user3", 950),
        user("user-4", "Vikram Singh", "user4", 800),
        user("user-5", "Aisha Khan", "user5", 650),
    ]
}

pub fn issues() -> Vec<Issue> {
    let users = users();

    vec![
        Issue {
            id: "issue-1".to_string(),
            title: "Massive pothole on FC Road".to_string(),
            description: "A very large and deep pothole has formed on Fergusson College Road near the main gate. It is a hazard to vehicles, especially two-wheelers at night. It has already caused issues for many commuters. Urgent repair is needed.".to_string(),
            author: users[0].clone(),
            created_at: "3 days ago".to_string(),
            location: Location {
                name: "Fergusson College Road".to_string(),
                lat: 18.521,
                lng: 73.839,
            },
            upvotes: 42,
            comments: vec![
                comment(
                    "comment-1",
                    "This has been a problem for weeks! Glad someone reported it.",
                    &users[1],
                    "2 days ago",
                ),
                comment(
                    "comment-2",
                    "I almost had an accident here yesterday. Thanks for posting.",
                    &users[2],
                    "1 day ago",
                ),
                comment(
                    "comment-3",
                    "The PMC needs to be more proactive about these things.",
                    &users[3],
                    "1 day ago",
                ),
                comment(
                    "comment-4",
                    "I've reported this through the official app too, hope this gets more attention.",
                    &users[4],
                    "12 hours ago",
                ),
            ],
            category: IssueCategory::Pothole,
            status: IssueStatus::InProgress,
            photo_url: Some("https://picsum.photos/seed/pothole-road/800/600".to_string()),
            voice_memo_url: Some("/example-audio.mp3".to_string()),
        },
        Issue {
            id: "issue-2".to_string(),
            title: "Street light out in Koregaon Park".to_string(),
            description: "The street light on Lane No. 7 in Koregaon Park has been out for over a week. It's very dark and feels unsafe to walk there at night. Please replace the bulb.".to_string(),
            author: users[1].clone(),
            created_at: "5 days ago".to_string(),
            location: Location {
                name: "Koregaon Park, Lane 7".to_string(),
                lat: 18.536,
                lng: 73.893,
            },
            upvotes: 28,
            comments: vec![comment(
                "comment-5",
                "Confirmed, it is very dark there. I avoid that street now.",
                &users[0],
                "4 days ago",
            )],
            category: IssueCategory::StreetLight,
            status: IssueStatus::Resolved,
            photo_url: Some("https://picsum.photos/seed/dark-street/800/600".to_string()),
            voice_memo_url: None,
        },
        Issue {
            id: "issue-3".to_string(),
            title: "Overflowing bins at Sarasbaug".to_string(),
            description: "The trash and recycling bins at Sarasbaug near the Ganesh temple are constantly overflowing. It is attracting pests and creating an unpleasant environment. The pickup schedule needs to be more frequent, especially on weekends.".to_string(),
            author: users[2].clone(),
            created_at: "1 day ago".to_string(),
            location: Location {
                name: "Sarasbaug".to_string(),
                lat: 18.504,
                lng: 73.852,
            },
            upvotes: 55,
            comments: vec![
                comment(
                    "comment-6",
                    "It's been like this for a while. Especially bad during evenings.",
                    &users[3],
                    "6 hours ago",
                ),
                comment("comment-7", "Agreed! The smell is awful.", &users[4], "2 hours ago"),
            ],
            category: IssueCategory::WasteManagement,
            status: IssueStatus::Open,
            photo_url: Some("https://picsum.photos/seed/overflowing-trash/800/600".to_string()),
            voice_memo_url: None,
        },
        Issue {
            id: "issue-4".to_string(),
            title: "Broken swing in Kamala Nehru Park".to_string(),
            description: "One of the main swings in the childrens play area is broken and is a safety hazard. The chain has snapped on one side. It needs to be repaired or replaced.".to_string(),
            author: users[3].clone(),
            created_at: "2 days ago".to_string(),
            location: Location {
                name: "Kamala Nehru Park".to_string(),
                lat: 18.513,
                lng: 73.824,
            },
            upvotes: 15,
            comments: vec![],
            category: IssueCategory::Other,
            status: IssueStatus::Open,
            photo_url: Some("https://picsum.photos/seed/broken-swing/800/600".to_string()),
            voice_memo_url: None,
        },
        Issue {
            id: "issue-5".to_string(),
            title: "Graffiti on public library wall".to_string(),
            description: "There is a lot of unsightly graffiti on the main wall of the city library on Bajirao Road. It should be cleaned to maintain the appearance of the historic building.".to_string(),
            author: users[4].clone(),
            created_at: "7 days ago".to_string(),
            location: Location {
                name: "City Library, Bajirao Road".to_string(),
                lat: 18.515,
                lng: 73.856,
            },
            upvotes: 12,
            comments: vec![],
            category: IssueCategory::Other,
            status: IssueStatus::Resolved,
            photo_url: Some("https://picsum.photos/seed/graffiti-wall/800/600".to_string()),
            voice_memo_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        assert_eq!(users().len(), 5);
        assert_eq!(issues().len(), 5);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let issues = issues();
        let ids: HashSet<_> = issues.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), issues.len());
    }

    #[test]
    fn test_seed_returns_fresh_copies() {
        let mut first = issues();
        first[0].title = "mutated".to_string();
        assert_eq!(issues()[0].title, "Massive pothole on FC Road");
    }

    #[test]
    fn test_seed_authors_come_from_user_roster() {
        let roster = users();
        for issue in issues() {
            assert!(roster.contains(&issue.author));
            for comment in &issue.comments {
                assert!(roster.contains(&comment.author));
            }
        }
    }

    #[test]
    fn test_comment_counts() {
        let issues = issues();
        let counts: Vec<usize> = issues.iter().map(|i| i.comments.len()).collect();
        assert_eq!(counts, vec![4, 1, 2, 0, 0]);
    }
}
