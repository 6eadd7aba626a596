//! Requester store: append-only records with store-assigned ids.

use std::path::Path;

use issuedb_core::{Error, Requester, RequesterFilter, RequesterId, Result};
use issuedb_store::RecordFile;

/// Append-only store of [`Requester`] records.
///
/// Ids are 1-based and assigned sequentially on add; there is no update
/// path. Duplicate detection (usually by email) is the caller's
/// filtered-scan-then-add job.
pub struct RequesterStore {
    file: RecordFile<Requester>,
}

impl RequesterStore {
    /// Open the requester file at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(RequesterStore {
            file: RecordFile::open(path)?,
        })
    }

    /// Append a new requester, assigning the next sequential id.
    ///
    /// The incoming id must be `None`: requesters are never updated, so a
    /// caller-supplied id is always [`Error::InvalidRecordId`].
    pub fn add(&mut self, requester: &Requester) -> Result<RequesterId> {
        let count = self.file.len();
        if let Some(id) = requester.id {
            return Err(Error::InvalidRecordId {
                id: i64::from(id.as_u32()),
                count,
            });
        }
        let assigned = RequesterId::new(count as u32 + 1);
        let mut record = requester.clone();
        record.id = Some(assigned);
        self.file.append(&record)?;
        Ok(assigned)
    }

    /// Read the next requester and advance the scan cursor.
    pub fn next(&mut self) -> Result<Requester> {
        self.file.scan_next()
    }

    /// Read the next requester passing `filter`.
    pub fn next_where(&mut self, filter: &RequesterFilter) -> Result<Requester> {
        self.file.scan_where(|record| filter.matches(record))
    }

    /// Re-fetch the `index`-th entry of the last page of `page_size`
    /// scanned requesters.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<Requester> {
        self.file.select(index, page_size)
    }

    /// Move the scan cursor back to the first requester.
    pub fn rewind(&mut self) -> Result<()> {
        self.file.rewind()
    }

    /// Number of stored requesters; also the highest assigned id.
    pub fn count(&self) -> u64 {
        self.file.len()
    }

    /// Check if no requesters are stored.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    /// Flush and release the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}
