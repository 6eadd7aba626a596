//! Release store: append-only records of product releases.

use std::path::Path;

use issuedb_core::{Release, ReleaseFilter, Result};
use issuedb_store::RecordFile;

/// Append-only store of [`Release`] records.
///
/// The product name in each record is a value-equality foreign key to the
/// product store; nothing here checks that the product exists, and release
/// id uniqueness per product is the caller's filtered-scan-then-add job.
pub struct ReleaseStore {
    file: RecordFile<Release>,
}

impl ReleaseStore {
    /// Open the release file at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ReleaseStore {
            file: RecordFile::open(path)?,
        })
    }

    /// Append a release record.
    pub fn add(&mut self, release: &Release) -> Result<()> {
        self.file.append(release)?;
        Ok(())
    }

    /// Read the next release and advance the scan cursor.
    pub fn next(&mut self) -> Result<Release> {
        self.file.scan_next()
    }

    /// Read the next release passing `filter`.
    pub fn next_where(&mut self, filter: &ReleaseFilter) -> Result<Release> {
        self.file.scan_where(|record| filter.matches(record))
    }

    /// Re-fetch the `index`-th entry of the last page of `page_size`
    /// scanned releases.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<Release> {
        self.file.select(index, page_size)
    }

    /// Move the scan cursor back to the first release.
    pub fn rewind(&mut self) -> Result<()> {
        self.file.rewind()
    }

    /// Number of stored releases.
    pub fn len(&self) -> u64 {
        self.file.len()
    }

    /// Check if no releases are stored.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    /// Flush and release the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}
