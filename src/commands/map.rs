use anyhow::Result;

use civicwatch::store::IssueStore;
use civicwatch::validate::{DEFAULT_LAT, DEFAULT_LNG};

/// The map page's data layer: every pin with its coordinates and status
/// color. Widget integration itself lives outside this crate.
pub fn run(store: &IssueStore) -> Result<()> {
    println!("Map center: ({:.4}, {:.4})", DEFAULT_LAT, DEFAULT_LNG);

    let issues = store.list();
    if issues.is_empty() {
        println!("No issues to place.");
        return Ok(());
    }

    for issue in &issues {
        println!(
            "({:8.4}, {:8.4}) {:<6} [{:<11}] {}",
            issue.location.lat,
            issue.location.lng,
            issue.status.style(),
            issue.status,
            issue.title
        );
    }

    Ok(())
}
