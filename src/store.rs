use tracing::debug;

use crate::models::{Issue, IssueStatus};

/// Notification delivered to subscribers after a store mutation. Carries
/// what was requested, not whether anything matched.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreChange {
    Added { id: String },
    StatusChanged { id: String, status: IssueStatus },
}

type Observer = Box<dyn FnMut(&StoreChange)>;

/// The in-memory holder of the issue collection for the current process.
///
/// A single owner constructs the store and hands out references; consumers
/// that need to react to mutations register an observer. Observers run
/// synchronously, in registration order, before the mutating call returns,
/// so nothing ever observes a half-applied change.
///
/// Mutations cannot fail: there is no storage layer behind the store.
pub struct IssueStore {
    issues: Vec<Issue>,
    observers: Vec<Observer>,
}

impl IssueStore {
    pub fn new() -> Self {
        IssueStore {
            issues: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn with_issues(issues: Vec<Issue>) -> Self {
        IssueStore {
            issues,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&StoreChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Prepends an issue: new reports appear first in every listing.
    ///
    /// Uniqueness of `issue.id` is the caller's responsibility; the
    /// submission path mints a fresh UUID per report.
    pub fn add_issue(&mut self, issue: Issue) {
        debug!(id = %issue.id, title = %issue.title, "issue added");
        let change = StoreChange::Added {
            id: issue.id.clone(),
        };
        self.issues.insert(0, issue);
        self.notify(&change);
    }

    /// Replaces the status of the issue with a matching id. An unknown id
    /// is a silent no-op, not an error. Subscribers are notified either
    /// way.
    pub fn update_status(&mut self, id: &str, status: IssueStatus) {
        if let Some(issue) = self.issues.iter_mut().find(|i| i.id == id) {
            debug!(%id, %status, "issue status updated");
            issue.status = status;
        } else {
            debug!(%id, %status, "status update for unknown id ignored");
        }
        self.notify(&StoreChange::StatusChanged {
            id: id.to_string(),
            status,
        });
    }

    /// Snapshot of the collection, most recent first. Mutating the
    /// returned vector does not affect the store.
    pub fn list(&self) -> Vec<Issue> {
        self.issues.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    fn notify(&mut self, change: &StoreChange) {
        for observer in &mut self.observers {
            observer(change);
        }
    }
}

impl Default for IssueStore {
    fn default() -> Self {
        IssueStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueCategory, Location, User};
    use crate::seed;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_issue(id: &str) -> Issue {
        Issue {
            id: id.to_string(),
            title: format!("Sample issue {}", id),
            description: "A sample issue used by store tests.".to_string(),
            author: User {
                id: "user-1".to_string(),
                name: "Priya Sharma".to_string(),
                avatar_url: "https://picsum.photos/seed/user1/40/40".to_string(),
                points: 1250,
            },
            created_at: "just now".to_string(),
            location: Location {
                name: "Fergusson College Road".to_string(),
                lat: 18.521,
                lng: 73.839,
            },
            upvotes: 0,
            comments: vec![],
            category: IssueCategory::Other,
            status: IssueStatus::Open,
            photo_url: None,
            voice_memo_url: None,
        }
    }

    #[test]
    fn test_add_issue_prepends() {
        let mut store = IssueStore::new();
        store.add_issue(sample_issue("a"));
        store.add_issue(sample_issue("b"));
        let listed = store.list();
        assert_eq!(listed[0].id, "b");
        assert_eq!(listed[1].id, "a");
    }

    #[test]
    fn test_add_to_seeded_store() {
        let mut store = IssueStore::with_issues(seed::issues());
        assert_eq!(store.len(), 5);
        store.add_issue(sample_issue("x"));
        let listed = store.list();
        assert_eq!(listed.len(), 6);
        assert_eq!(listed[0].id, "x");
    }

    #[test]
    fn test_update_status_changes_only_target() {
        let mut store = IssueStore::with_issues(seed::issues());
        let before = store.list();
        store.update_status("issue-2", IssueStatus::Open);
        let after = store.list();
        for (b, a) in before.iter().zip(after.iter()) {
            if b.id == "issue-2" {
                assert_eq!(a.status, IssueStatus::Open);
                // Everything but the status field is untouched.
                let mut reverted = a.clone();
                reverted.status = b.status;
                assert_eq!(&reverted, b);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_update_status_resolves_issue() {
        let mut store = IssueStore::with_issues(seed::issues());
        store.update_status("issue-3", IssueStatus::Resolved);
        let listed = store.list();
        let target = listed.iter().find(|i| i.id == "issue-3").unwrap();
        assert_eq!(target.status, IssueStatus::Resolved);
        let untouched = listed.iter().find(|i| i.id == "issue-1").unwrap();
        assert_eq!(untouched.status, IssueStatus::InProgress);
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let mut store = IssueStore::with_issues(seed::issues());
        let before = store.list();
        store.update_status("no-such-issue", IssueStatus::Resolved);
        let after = store.list();
        assert_eq!(before.len(), after.len());
        assert_eq!(before, after);
    }

    #[test]
    fn test_list_returns_detached_snapshot() {
        let mut store = IssueStore::new();
        store.add_issue(sample_issue("a"));
        let mut listed = store.list();
        listed.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let store = IssueStore::with_issues(seed::issues());
        assert!(store.get("issue-4").is_some());
        assert!(store.get("issue-99").is_none());
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut store = IssueStore::new();
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        store.subscribe(move |change| {
            if let StoreChange::Added { id } = change {
                first.borrow_mut().push(format!("first:{}", id));
            }
        });
        let second = Rc::clone(&log);
        store.subscribe(move |change| {
            if let StoreChange::Added { id } = change {
                second.borrow_mut().push(format!("second:{}", id));
            }
        });
        store.add_issue(sample_issue("a"));
        assert_eq!(*log.borrow(), vec!["first:a", "second:a"]);
    }

    #[test]
    fn test_noop_update_still_notifies() {
        let mut store = IssueStore::with_issues(seed::issues());
        let changes: Rc<RefCell<Vec<StoreChange>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        store.subscribe(move |change| sink.borrow_mut().push(change.clone()));
        store.update_status("no-such-issue", IssueStatus::Resolved);
        assert_eq!(
            *changes.borrow(),
            vec![StoreChange::StatusChanged {
                id: "no-such-issue".to_string(),
                status: IssueStatus::Resolved,
            }]
        );
    }

    proptest! {
        #[test]
        fn prop_last_added_is_always_first(ids in proptest::collection::vec("[a-z0-9]{1,12}", 1..20)) {
            let mut store = IssueStore::new();
            for id in &ids {
                store.add_issue(sample_issue(id));
            }
            prop_assert_eq!(&store.list()[0].id, ids.last().unwrap());
            prop_assert_eq!(store.len(), ids.len());
        }

        #[test]
        fn prop_unknown_update_never_changes_collection(id in "[a-z]{1,10}", status_idx in 0usize..3) {
            let mut store = IssueStore::with_issues(seed::issues());
            let before = store.list();
            // Seed ids all start with "issue-"; these never match.
            store.update_status(&format!("zz-{}", id), IssueStatus::ALL[status_idx]);
            prop_assert_eq!(before, store.list());
        }
    }
}
