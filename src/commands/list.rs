use anyhow::Result;

use civicwatch::models::{Issue, IssueCategory, IssueStatus};
use civicwatch::store::IssueStore;

pub fn run(
    store: &IssueStore,
    category: Option<IssueCategory>,
    status: Option<IssueStatus>,
) -> Result<()> {
    let issues: Vec<Issue> = store
        .list()
        .into_iter()
        .filter(|i| category.map_or(true, |c| i.category == c))
        .filter(|i| status.map_or(true, |s| i.status == s))
        .collect();

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    for issue in &issues {
        println!("{}", format_row(issue));
    }

    Ok(())
}

fn format_row(issue: &Issue) -> String {
    format!(
        "{:<14} [{:<11}] {:<40} {:<12} {:>4}↑ {:>2}c  {}",
        truncate(&issue.id, 14),
        issue.status,
        truncate(&issue.title, 40),
        issue.category.short_label(),
        issue.upvotes,
        issue.comments.len(),
        issue.location.name
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}
