use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};

use civicwatch::models::{Issue, IssueStatus};
use civicwatch::store::IssueStore;

#[derive(Serialize, Deserialize)]
pub struct ExportData {
    pub version: u32,
    pub exported_at: String,
    pub issues: Vec<Issue>,
}

pub fn run_json(store: &IssueStore, output_path: Option<&str>) -> Result<()> {
    let data = ExportData {
        version: 1,
        exported_at: chrono::Utc::now().to_rfc3339(),
        issues: store.list(),
    };

    let json = serde_json::to_string_pretty(&data)?;

    match output_path {
        Some(path) => {
            fs::write(path, json).context("Failed to write export file")?;
            eprintln!("Exported {} issues to {}", data.issues.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

pub fn run_markdown(store: &IssueStore, output_path: Option<&str>) -> Result<()> {
    let issues = store.list();
    let mut md = String::new();

    md.push_str("# CivicWatch Issues Export\n\n");
    md.push_str(&format!(
        "Exported: {}\n\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for status in IssueStatus::ALL {
        let group: Vec<&Issue> = issues.iter().filter(|i| i.status == status).collect();
        if group.is_empty() {
            continue;
        }
        md.push_str(&format!("## {} Issues\n\n", status));
        for issue in group {
            write_issue_md(&mut md, issue);
        }
    }

    match output_path {
        Some(path) => {
            fs::write(path, md).context("Failed to write export file")?;
            eprintln!("Exported {} issues to {}", issues.len(), path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", md)?;
        }
    }
    Ok(())
}

fn write_issue_md(md: &mut String, issue: &Issue) {
    let checkbox = if issue.status == IssueStatus::Resolved {
        "[x]"
    } else {
        "[ ]"
    };

    md.push_str(&format!("### {} {}: {}\n\n", checkbox, issue.id, issue.title));
    md.push_str(&format!("- **Category:** {}\n", issue.category.label()));
    md.push_str(&format!("- **Status:** {}\n", issue.status));
    md.push_str(&format!(
        "- **Location:** {} ({:.4}, {:.4})\n",
        issue.location.name, issue.location.lat, issue.location.lng
    ));
    md.push_str(&format!("- **Reported by:** {}\n", issue.author.name));
    md.push_str(&format!("- **Upvotes:** {}\n", issue.upvotes));
    md.push_str(&format!("- **Created:** {}\n", issue.created_at));

    if !issue.description.is_empty() {
        md.push_str(&format!("\n{}\n", issue.description));
    }

    if !issue.comments.is_empty() {
        md.push_str("\n**Comments:**\n");
        for comment in &issue.comments {
            md.push_str(&format!(
                "- [{}] {}: {}\n",
                comment.created_at, comment.author.name, comment.text
            ));
        }
    }

    md.push_str("\n---\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicwatch::seed;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_json_to_file() {
        let store = IssueStore::with_issues(seed::issues());
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.json");
        run_json(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.version, 1);
        assert_eq!(data.issues.len(), 5);
    }

    #[test]
    fn test_run_json_empty_store() {
        let store = IssueStore::new();
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.json");
        run_json(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.issues.len(), 0);
    }

    #[test]
    fn test_run_markdown_to_file() {
        let store = IssueStore::with_issues(seed::issues());
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.md");
        run_markdown(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("# CivicWatch Issues Export"));
    }

    #[test]
    fn test_markdown_groups_by_status() {
        let store = IssueStore::with_issues(seed::issues());
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.md");
        run_markdown(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("## Open Issues"));
        assert!(content.contains("## In Progress Issues"));
        assert!(content.contains("## Resolved Issues"));
    }

    #[test]
    fn test_markdown_checkbox_only_for_resolved() {
        let store = IssueStore::with_issues(seed::issues());
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.md");
        run_markdown(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("### [x] issue-2:"));
        assert!(content.contains("### [ ] issue-1:"));
    }

    #[test]
    fn test_export_roundtrip_preserves_issues() {
        let store = IssueStore::with_issues(seed::issues());
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.json");
        run_json(&store, Some(output_path.to_str().unwrap())).unwrap();
        let content = fs::read_to_string(&output_path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();
        assert_eq!(data.issues, store.list());
    }

    proptest! {
        #[test]
        fn prop_export_never_panics(title in ".{0,60}") {
            let mut issues = seed::issues();
            issues[0].title = title;
            let store = IssueStore::with_issues(issues);
            let dir = tempdir().unwrap();
            let output_path = dir.path().join("export.json");
            prop_assert!(run_json(&store, Some(output_path.to_str().unwrap())).is_ok());
            prop_assert!(run_markdown(&store, None).is_ok());
        }
    }
}
