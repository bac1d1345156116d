use anyhow::{bail, Result};

use civicwatch::models::IssueStatus;
use civicwatch::store::IssueStore;

/// The triage action. The store treats an unknown id as a silent no-op, so
/// the command checks first and tells the operator instead of pretending
/// something changed.
pub fn run(store: &mut IssueStore, id: &str, status: IssueStatus) -> Result<()> {
    if store.get(id).is_none() {
        bail!("Issue '{}' not found", id);
    }

    store.update_status(id, status);
    println!("Issue {} marked {}", id, status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use civicwatch::seed;

    #[test]
    fn test_status_updates_existing_issue() {
        let mut store = IssueStore::with_issues(seed::issues());
        run(&mut store, "issue-3", IssueStatus::Resolved).unwrap();
        assert_eq!(store.get("issue-3").unwrap().status, IssueStatus::Resolved);
    }

    #[test]
    fn test_status_unknown_id_reports_error() {
        let mut store = IssueStore::with_issues(seed::issues());
        let before = store.list();
        let err = run(&mut store, "issue-99", IssueStatus::Resolved).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert_eq!(store.list(), before);
    }
}
