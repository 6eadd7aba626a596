//! Shared test fixtures.

use issuedb::prelude::*;
use tempfile::TempDir;

/// A tracker opened in a throwaway directory.
pub struct TestTracker {
    dir: TempDir,
    pub db: Tracker,
}

impl TestTracker {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Tracker::open(dir.path()).unwrap();
        TestTracker { dir, db }
    }

    /// Close the tracker and open a fresh one over the same files.
    pub fn reopen(self) -> Self {
        let TestTracker { dir, mut db } = self;
        db.close().unwrap();
        let db = Tracker::open(dir.path()).unwrap();
        TestTracker { dir, db }
    }
}

pub fn widget_item(description: &str) -> ChangeItem {
    ChangeItem::new("Widget", "R1", description, Priority::Medium)
}

pub fn sample_requester(name: &str) -> Requester {
    Requester::new(name, "6045550100", "user@example.com", "QA")
}
