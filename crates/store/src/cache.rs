//! Bounded ring of recently-scanned record offsets.

use issuedb_core::limits::ACCESS_CACHE_SIZE;
use issuedb_core::{Error, Result};

/// Circular buffer of the byte offsets of the last [`ACCESS_CACHE_SIZE`]
/// records returned by a scan.
///
/// # Contract
///
/// A slot is only meaningful for offsets pushed by the immediately preceding
/// scan pass: once more than [`ACCESS_CACHE_SIZE`] records have been scanned
/// since the page was rendered, the ring has wrapped and older slots have
/// been overwritten. Upholding that window is the caller's job; the cache
/// itself cannot detect staleness.
#[derive(Debug, Clone)]
pub struct AccessCache {
    /// Byte offsets of recently scanned records, oldest overwritten first
    slots: [u64; ACCESS_CACHE_SIZE],
    /// Next slot to write; wraps modulo capacity
    pos: usize,
}

impl AccessCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        AccessCache {
            slots: [0; ACCESS_CACHE_SIZE],
            pos: 0,
        }
    }

    /// Record the byte offset of a record a scan just returned.
    pub fn record(&mut self, offset: u64) {
        self.slots[self.pos] = offset;
        self.pos = (self.pos + 1) % ACCESS_CACHE_SIZE;
    }

    /// Look up the offset of the `index`-th entry (1-based) of the last
    /// rendered page of `page_size` entries.
    ///
    /// With the write position just past the page's last entry, the wanted
    /// slot is `pos - 1 + index - page_size`, wrapped into the ring. Fails
    /// with [`Error::InvalidSelection`] when `index` is outside
    /// `1..=page_size` or the page could never fit in the ring.
    pub fn lookup(&self, index: usize, page_size: usize) -> Result<u64> {
        if index == 0 || index > page_size || page_size > ACCESS_CACHE_SIZE {
            return Err(Error::InvalidSelection { index, page_size });
        }
        let cap = ACCESS_CACHE_SIZE as i64;
        let slot = (self.pos as i64 - 1 + index as i64 - page_size as i64).rem_euclid(cap);
        Ok(self.slots[slot as usize])
    }

    /// Forget all recorded offsets and reset the write position.
    pub fn clear(&mut self) {
        self.slots = [0; ACCESS_CACHE_SIZE];
        self.pos = 0;
    }
}

impl Default for AccessCache {
    fn default() -> Self {
        Self::new()
    }
}
