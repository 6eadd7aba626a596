//! The generic fixed-record file.
//!
//! A [`RecordFile`] is a flat sequence of fixed-size binary records with no
//! header: record `n` lives at byte offset `n * R::SIZE` and the record count
//! is always `file_len / R::SIZE`. There is no magic number and no schema
//! version; the record codec is the schema.
//!
//! All operations take `&mut self`, so a store observes a strict sequential
//! history by construction. Failures leave store state unchanged: a failed
//! scan never touches the access cache, and a failed write never produces a
//! partial record.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use issuedb_core::{Error, Record, Result};
use tracing::{debug, trace};

use crate::cache::AccessCache;

/// An open file of fixed-size records with a scan cursor and access cache.
///
/// The engine exposes position-based reads and writes; entity-level rules
/// (id assignment, the terminal-state guard) belong to the typed stores.
pub struct RecordFile<R: Record> {
    path: PathBuf,
    /// `None` once closed; every operation checks this first
    handle: Option<File>,
    /// Invariant: count * R::SIZE == file length
    count: u64,
    /// Next record index a scan will read
    cursor: u64,
    cache: AccessCache,
    _record: PhantomData<R>,
}

impl<R: Record> RecordFile<R> {
    /// Open the record file at `path`, creating it empty if absent.
    ///
    /// Fails with [`Error::Corrupt`] if the existing file length is not a
    /// whole number of records.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let handle = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)?;

        let len = handle.metadata()?.len();
        let size = R::SIZE as u64;
        if len % size != 0 {
            return Err(Error::Corrupt(format!(
                "{} is {} bytes, not a multiple of the {}-byte record size",
                path.display(),
                len,
                size,
            )));
        }

        let count = len / size;
        debug!(path = %path.display(), count, "opened record store");
        Ok(RecordFile {
            path,
            handle: Some(handle),
            count,
            cursor: 0,
            cache: AccessCache::new(),
            _record: PhantomData,
        })
    }

    /// Flush and release the file handle.
    ///
    /// A second close, like any operation after close, fails with
    /// [`Error::StoreClosed`].
    pub fn close(&mut self) -> Result<()> {
        match self.handle.take() {
            Some(handle) => {
                handle.sync_all()?;
                debug!(path = %self.path.display(), "closed record store");
                Ok(())
            }
            None => Err(Error::StoreClosed),
        }
    }

    /// Number of records in the file.
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if the file holds no records.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record at the end of the file.
    ///
    /// Returns the new record's 0-based index. The record is written as one
    /// whole block; on encode failure nothing reaches the file.
    pub fn append(&mut self, record: &R) -> Result<u64> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        let index = self.count;
        let offset = index * R::SIZE as u64;

        let mut buf = vec![0u8; R::SIZE];
        record.encode(&mut buf)?;

        let handle = self.handle.as_mut().ok_or(Error::StoreClosed)?;
        handle.seek(SeekFrom::Start(offset))?;
        handle.write_all(&buf)?;

        self.count += 1;
        trace!(path = %self.path.display(), index, "appended record");
        Ok(index)
    }

    /// Read the record at a 0-based index, without touching scan state.
    pub fn read_at(&mut self, index: u64) -> Result<R> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        if index >= self.count {
            return Err(Error::InvalidRecordId {
                id: index as i64,
                count: self.count,
            });
        }
        self.read_record(index * R::SIZE as u64)
    }

    /// Overwrite the record at a 0-based index in place.
    ///
    /// The count is unchanged; this is the update half of the guarded
    /// create-or-update pattern, and only the change item store uses it.
    pub fn write_at(&mut self, index: u64, record: &R) -> Result<()> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        if index >= self.count {
            return Err(Error::InvalidRecordId {
                id: index as i64,
                count: self.count,
            });
        }
        let mut buf = vec![0u8; R::SIZE];
        record.encode(&mut buf)?;

        let handle = self.handle.as_mut().ok_or(Error::StoreClosed)?;
        handle.seek(SeekFrom::Start(index * R::SIZE as u64))?;
        handle.write_all(&buf)?;
        trace!(path = %self.path.display(), index, "overwrote record");
        Ok(())
    }

    /// Read the record at the cursor, cache its offset, advance the cursor.
    ///
    /// Fails with [`Error::EndOfData`] at exhaustion, leaving the cursor and
    /// cache untouched.
    pub fn scan_next(&mut self) -> Result<R> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        if self.cursor >= self.count {
            return Err(Error::EndOfData);
        }
        let offset = self.cursor * R::SIZE as u64;
        let record = self.read_record(offset)?;
        self.cache.record(offset);
        self.cursor += 1;
        Ok(record)
    }

    /// Scan forward for the next record matching `accept`.
    ///
    /// Non-matching records are skipped without being cached; only the
    /// match's offset enters the access cache, and the cursor is left just
    /// past the match. At exhaustion the cursor rests at end of file, the
    /// cache untouched since the last match.
    pub fn scan_where(&mut self, accept: impl Fn(&R) -> bool) -> Result<R> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        loop {
            if self.cursor >= self.count {
                return Err(Error::EndOfData);
            }
            let offset = self.cursor * R::SIZE as u64;
            let record = self.read_record(offset)?;
            self.cursor += 1;
            if accept(&record) {
                self.cache.record(offset);
                return Ok(record);
            }
        }
    }

    /// Re-fetch the `index`-th entry (1-based) of the last page of
    /// `page_size` scanned records, straight from its cached offset.
    ///
    /// Valid only immediately after the scan pass that rendered the page;
    /// see [`AccessCache`] for the staleness window. Never mutates the cache
    /// or moves the cursor.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<R> {
        let offset = self.cache.lookup(index, page_size)?;
        self.read_record(offset)
    }

    /// Move the scan cursor back to the first record.
    ///
    /// The access cache is left intact; the offsets it holds still point at
    /// the records of the last scan pass.
    pub fn rewind(&mut self) -> Result<()> {
        self.handle.as_ref().ok_or(Error::StoreClosed)?;
        self.cursor = 0;
        trace!(path = %self.path.display(), "rewound scan cursor");
        Ok(())
    }

    fn read_record(&mut self, offset: u64) -> Result<R> {
        let handle = self.handle.as_mut().ok_or(Error::StoreClosed)?;
        let mut buf = vec![0u8; R::SIZE];
        handle.seek(SeekFrom::Start(offset))?;
        handle.read_exact(&mut buf)?;
        R::decode(&buf)
    }
}

impl<R: Record> Drop for RecordFile<R> {
    fn drop(&mut self) {
        // best-effort flush for stores dropped without an explicit close
        if let Some(handle) = self.handle.take() {
            let _ = handle.sync_all();
        }
    }
}
