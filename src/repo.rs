//! Repository boundary for the issue collection.
//!
//! The store itself never performs I/O; a repository decides where its
//! snapshot comes from and goes to. [`MemoryRepository`] keeps the
//! tab-lifetime semantics of the original application, [`JsonFileRepository`]
//! lets consecutive CLI invocations observe each other's mutations.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::Issue;
use crate::seed;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    issues: Vec<Issue>,
}

pub trait IssueRepository {
    fn load(&self) -> Result<Vec<Issue>>;
    fn save(&self, issues: &[Issue]) -> Result<()>;
}

/// In-memory repository, seeded by default. `save` replaces the held
/// collection; nothing outlives the process.
pub struct MemoryRepository {
    issues: RefCell<Vec<Issue>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository {
            issues: RefCell::new(seed::issues()),
        }
    }

    pub fn empty() -> Self {
        MemoryRepository {
            issues: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        MemoryRepository::new()
    }
}

impl IssueRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.borrow().clone())
    }

    fn save(&self, issues: &[Issue]) -> Result<()> {
        *self.issues.borrow_mut() = issues.to_vec();
        Ok(())
    }
}

/// Pretty-printed JSON snapshot on disk, one file per state directory.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IssueRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Issue>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "Unsupported snapshot version {} in {}",
                snapshot.version,
                self.path.display()
            );
        }
        debug!(path = %self.path.display(), count = snapshot.issues.len(), "snapshot loaded");
        Ok(snapshot.issues)
    }

    fn save(&self, issues: &[Issue]) -> Result<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            issues: issues.to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = issues.len(), "snapshot saved");
        Ok(())
    }
}
