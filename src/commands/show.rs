use anyhow::{bail, Result};

use civicwatch::store::IssueStore;

pub fn run(store: &IssueStore, id: &str) -> Result<()> {
    let issue = match store.get(id) {
        Some(i) => i,
        None => bail!("Issue '{}' not found", id),
    };

    println!("Issue {}: {}", issue.id, issue.title);
    println!("Status: {}", issue.status);
    println!("Category: {} {}", issue.category.icon(), issue.category.label());
    println!("Reported by: {} ({} points)", issue.author.name, issue.author.points);
    println!("Created: {}", issue.created_at);
    println!(
        "Location: {} ({:.4}, {:.4})",
        issue.location.name, issue.location.lat, issue.location.lng
    );
    println!("Upvotes: {}", issue.upvotes);

    if let Some(photo) = &issue.photo_url {
        println!("Photo: {}", photo);
    }
    if let Some(memo) = &issue.voice_memo_url {
        println!("Voice memo: {}", memo);
    }

    println!("\nDescription:");
    for line in issue.description.lines() {
        println!("  {}", line);
    }

    if !issue.comments.is_empty() {
        println!("\nComments:");
        for comment in &issue.comments {
            println!("  [{}] {}: {}", comment.created_at, comment.author.name, comment.text);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicwatch::seed;

    #[test]
    fn test_show_known_issue() {
        let store = IssueStore::with_issues(seed::issues());
        assert!(run(&store, "issue-1").is_ok());
    }

    #[test]
    fn test_show_unknown_issue_errors() {
        let store = IssueStore::with_issues(seed::issues());
        let err = run(&store, "issue-99").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
