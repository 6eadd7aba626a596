//! Main database entry point.
//!
//! The console application initializes all five entity stores together at
//! startup and closes them together at shutdown; [`Tracker`] packages that
//! lifecycle behind one open/close pair.

use std::path::Path;

use tracing::debug;

use crate::stores::{ItemStore, ProductStore, ReleaseStore, RequestStore, RequesterStore};
use issuedb_core::Result;

/// The issue tracker database: five record stores under one directory.
///
/// Each store is an independently usable public field; `Tracker` only ties
/// their lifecycles together.
///
/// # Example
///
/// ```ignore
/// use issuedb::prelude::*;
///
/// let mut db = Tracker::open("./tracker-data")?;
/// db.products.add(&Product::new("Widget"))?;
/// db.close()?;
/// ```
pub struct Tracker {
    /// Product records
    pub products: ProductStore,
    /// Release records
    pub releases: ReleaseStore,
    /// Change item records (the one mutable store)
    pub items: ItemStore,
    /// Change request records
    pub requests: RequestStore,
    /// Requester records
    pub requesters: RequesterStore,
}

impl Tracker {
    /// Open all five stores under `dir`, creating the directory and any
    /// missing store files.
    ///
    /// File names are fixed: `product.dat`, `release.dat`, `item.dat`,
    /// `request.dat`, `requester.dat`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        debug!(dir = %dir.display(), "opening tracker");
        Ok(Tracker {
            products: ProductStore::open(dir.join("product.dat"))?,
            releases: ReleaseStore::open(dir.join("release.dat"))?,
            items: ItemStore::open(dir.join("item.dat"))?,
            requests: RequestStore::open(dir.join("request.dat"))?,
            requesters: RequesterStore::open(dir.join("requester.dat"))?,
        })
    }

    /// Close all five stores.
    ///
    /// Every store is closed even if an earlier one fails; the first failure
    /// is reported.
    pub fn close(&mut self) -> Result<()> {
        let results = [
            self.products.close(),
            self.releases.close(),
            self.items.close(),
            self.requests.close(),
            self.requesters.close(),
        ];
        results.into_iter().collect()
    }
}
