#![no_main]

//! Fuzz target for the issue store and its snapshot encoding.
//!
//! Feeds arbitrary Unicode through issue construction, store mutations,
//! draft validation, and the JSON snapshot round trip. The goal is to
//! catch panics from improper UTF-8 handling and ordering bugs in the
//! prepend contract.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use civicwatch::models::{Issue, IssueCategory, IssueStatus, Location};
use civicwatch::seed;
use civicwatch::store::IssueStore;
use civicwatch::validate::IssueDraft;

#[derive(Arbitrary, Debug)]
struct StoreInput {
    /// Issue titles - can contain any Unicode
    titles: Vec<String>,
    /// Shared description - can contain any Unicode
    description: String,
    /// Location name fed through draft validation
    location: String,
    /// (issue index, status index) pairs to apply
    status_flips: Vec<(u8, u8)>,
}

fuzz_target!(|input: StoreInput| {
    let author = seed::users().swap_remove(0);
    let mut store = IssueStore::new();

    // Limit to a reasonable collection size.
    for (index, title) in input.titles.iter().take(20).enumerate() {
        store.add_issue(Issue {
            id: format!("fuzz-{}", index),
            title: title.clone(),
            description: input.description.clone(),
            author: author.clone(),
            created_at: "just now".to_string(),
            location: Location {
                name: input.location.clone(),
                lat: 18.5204,
                lng: 73.8567,
            },
            upvotes: 0,
            comments: vec![],
            category: IssueCategory::ALL[index % IssueCategory::ALL.len()],
            status: IssueStatus::Open,
            photo_url: None,
            voice_memo_url: None,
        });
    }

    // Status flips, including ids that never match.
    for (issue_index, status_index) in input.status_flips.iter().take(40) {
        let status = IssueStatus::ALL[(*status_index as usize) % IssueStatus::ALL.len()];
        store.update_status(&format!("fuzz-{}", issue_index), status);
    }

    // Prepend contract: the last added issue is always first.
    let listed = store.list();
    if !input.titles.is_empty() {
        let added = input.titles.len().min(20);
        assert_eq!(listed[0].id, format!("fuzz-{}", added - 1));
    }

    // Snapshot round trip must preserve the collection exactly.
    let json = serde_json::to_string(&listed).unwrap();
    let parsed: Vec<Issue> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, listed);

    // Draft validation never panics, whatever the input.
    let draft = IssueDraft {
        title: input.titles.first().cloned().unwrap_or_default(),
        description: input.description.clone(),
        category: IssueCategory::Other,
        location_name: input.location.clone(),
        lat: None,
        lng: None,
        photo_url: None,
        voice_memo_url: None,
        author,
    };
    let _ = draft.into_issue();
});
