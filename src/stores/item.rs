//! Change item store: the one entity with assigned ids and in-place update.

use std::path::Path;

use issuedb_core::{ChangeItem, Error, ItemFilter, ItemId, Result};
use issuedb_store::RecordFile;

/// Store of [`ChangeItem`] records.
///
/// Ids are 1-based and assigned sequentially by the store; record `id` lives
/// at index `id - 1`, so the file stays ordered by id with no sort cost.
/// Updates overwrite in place and are refused once the stored status is
/// `Done` or `Cancelled`.
pub struct ItemStore {
    file: RecordFile<ChangeItem>,
}

impl ItemStore {
    /// Open the item file at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ItemStore {
            file: RecordFile::open(path)?,
        })
    }

    /// Append a new change item, assigning the next sequential id.
    ///
    /// The incoming id must be `None` or exactly the id that would be
    /// assigned (`count + 1`); anything else is [`Error::InvalidRecordId`].
    pub fn add(&mut self, item: &ChangeItem) -> Result<ItemId> {
        let count = self.file.len();
        let next = ItemId::new(count as u32 + 1);
        match item.id {
            None => {}
            Some(id) if id == next => {}
            Some(id) => {
                return Err(Error::InvalidRecordId {
                    id: i64::from(id.as_u32()),
                    count,
                });
            }
        }
        let mut record = item.clone();
        record.id = Some(next);
        self.file.append(&record)?;
        Ok(next)
    }

    /// Overwrite a stored change item in place.
    ///
    /// The item's id must be within `[1, count]`. The stored record is read
    /// first; if its status is terminal the write is rejected with
    /// [`Error::TerminalState`] and the record is left untouched.
    pub fn update(&mut self, item: &ChangeItem) -> Result<()> {
        let count = self.file.len();
        let id = match item.id {
            Some(id) => id,
            None => return Err(Error::InvalidRecordId { id: -1, count }),
        };
        let raw = u64::from(id.as_u32());
        if raw < 1 || raw > count {
            return Err(Error::InvalidRecordId {
                id: i64::from(id.as_u32()),
                count,
            });
        }

        let stored = self.file.read_at(raw - 1)?;
        if stored.status.is_terminal() {
            return Err(Error::TerminalState {
                id: id.as_u32(),
                status: stored.status,
            });
        }
        self.file.write_at(raw - 1, item)
    }

    /// Read the stored change item with the given id.
    pub fn get(&mut self, id: ItemId) -> Result<ChangeItem> {
        let raw = u64::from(id.as_u32());
        if raw < 1 || raw > self.file.len() {
            return Err(Error::InvalidRecordId {
                id: i64::from(id.as_u32()),
                count: self.file.len(),
            });
        }
        self.file.read_at(raw - 1)
    }

    /// Read the next change item and advance the scan cursor.
    pub fn next(&mut self) -> Result<ChangeItem> {
        self.file.scan_next()
    }

    /// Read the next change item passing `filter`.
    pub fn next_where(&mut self, filter: &ItemFilter) -> Result<ChangeItem> {
        self.file.scan_where(|record| filter.matches(record))
    }

    /// Re-fetch the `index`-th entry of the last page of `page_size`
    /// scanned items.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<ChangeItem> {
        self.file.select(index, page_size)
    }

    /// Move the scan cursor back to the first item.
    pub fn rewind(&mut self) -> Result<()> {
        self.file.rewind()
    }

    /// Number of stored change items; also the highest assigned id.
    pub fn count(&self) -> u64 {
        self.file.len()
    }

    /// Check if no items are stored.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    /// Flush and release the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}
