use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use civicwatch::repo::{IssueRepository, JsonFileRepository};
use civicwatch::seed;

pub const STATE_DIR: &str = ".civicwatch";
pub const SNAPSHOT_FILE: &str = "issues.json";

pub fn run(path: &Path, force: bool) -> Result<()> {
    let state_dir = path.join(STATE_DIR);
    let snapshot = state_dir.join(SNAPSHOT_FILE);

    if snapshot.exists() && !force {
        println!("Already initialized at {}", path.display());
        println!("Use --force to re-seed the issue snapshot.");
        return Ok(());
    }

    fs::create_dir_all(&state_dir)
        .with_context(|| format!("Failed to create {}", state_dir.display()))?;

    let issues = seed::issues();
    let repo = JsonFileRepository::new(&snapshot);
    repo.save(&issues)?;

    println!(
        "Created {} with {} seed issues",
        snapshot.display(),
        issues.len()
    );
    Ok(())
}
