//! Change request store: append-only, no update path.

use std::path::Path;

use issuedb_core::{ChangeRequest, RequestFilter, Result};
use issuedb_store::RecordFile;

/// Append-only store of [`ChangeRequest`] records.
///
/// One request per requester+item pair is the caller's rule: scan with
/// [`RequestFilter`] for the pair before adding.
pub struct RequestStore {
    file: RecordFile<ChangeRequest>,
}

impl RequestStore {
    /// Open the request file at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(RequestStore {
            file: RecordFile::open(path)?,
        })
    }

    /// Append a change request record.
    pub fn add(&mut self, request: &ChangeRequest) -> Result<()> {
        self.file.append(request)?;
        Ok(())
    }

    /// Read the next request and advance the scan cursor.
    pub fn next(&mut self) -> Result<ChangeRequest> {
        self.file.scan_next()
    }

    /// Read the next request passing `filter`.
    pub fn next_where(&mut self, filter: &RequestFilter) -> Result<ChangeRequest> {
        self.file.scan_where(|record| filter.matches(record))
    }

    /// Re-fetch the `index`-th entry of the last page of `page_size`
    /// scanned requests.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<ChangeRequest> {
        self.file.select(index, page_size)
    }

    /// Move the scan cursor back to the first request.
    pub fn rewind(&mut self) -> Result<()> {
        self.file.rewind()
    }

    /// Number of stored requests.
    pub fn len(&self) -> u64 {
        self.file.len()
    }

    /// Check if no requests are stored.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    /// Flush and release the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}
