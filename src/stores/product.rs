//! Product store: append-only records keyed by name.

use std::path::Path;

use issuedb_core::{Product, ProductFilter, Result};
use issuedb_store::RecordFile;

/// Append-only store of [`Product`] records.
///
/// Name uniqueness is the caller's responsibility: scan with
/// [`ProductFilter::with_name`] before adding.
pub struct ProductStore {
    file: RecordFile<Product>,
}

impl ProductStore {
    /// Open the product file at `path`, creating it if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ProductStore {
            file: RecordFile::open(path)?,
        })
    }

    /// Append a product record.
    pub fn add(&mut self, product: &Product) -> Result<()> {
        self.file.append(product)?;
        Ok(())
    }

    /// Read the next product and advance the scan cursor.
    pub fn next(&mut self) -> Result<Product> {
        self.file.scan_next()
    }

    /// Read the next product passing `filter`.
    pub fn next_where(&mut self, filter: &ProductFilter) -> Result<Product> {
        self.file.scan_where(|record| filter.matches(record))
    }

    /// Re-fetch the `index`-th entry of the last page of `page_size`
    /// scanned products.
    pub fn select(&mut self, index: usize, page_size: usize) -> Result<Product> {
        self.file.select(index, page_size)
    }

    /// Move the scan cursor back to the first product.
    pub fn rewind(&mut self) -> Result<()> {
        self.file.rewind()
    }

    /// Number of stored products.
    pub fn len(&self) -> u64 {
        self.file.len()
    }

    /// Check if no products are stored.
    pub fn is_empty(&self) -> bool {
        self.file.is_empty()
    }

    /// Flush and release the backing file.
    pub fn close(&mut self) -> Result<()> {
        self.file.close()
    }
}
