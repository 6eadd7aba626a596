//! # issuedb
//!
//! Flat-file fixed-record store for a small issue tracker.
//!
//! Five entities — products, releases, change items, change requests and
//! requesters — each persist in their own file of fixed-size binary records,
//! all driven by one generic store engine: linear filtered scanning, a
//! bounded cache of recently-scanned offsets for page-based re-fetch, and
//! guarded in-place update for the one entity with a lifecycle.
//!
//! ## Quick Start
//!
//! ```ignore
//! use issuedb::prelude::*;
//!
//! let mut db = Tracker::open("./tracker-data")?;
//!
//! db.products.add(&Product::new("Widget"))?;
//! db.releases.add(&Release::new("Widget", "R1", "2024-01-01"))?;
//!
//! let id = db.items.add(&ChangeItem::new(
//!     "Widget", "R1", "fix login crash", Priority::High,
//! ))?;
//!
//! // render a page, then materialize the user's pick without rescanning
//! let filter = ItemFilter::active("Widget");
//! let mut page = 0;
//! while let Ok(item) = db.items.next_where(&filter) {
//!     page += 1;
//! }
//! let chosen = db.items.select(1, page)?;
//!
//! db.close()?;
//! ```
//!
//! ## Scan contract
//!
//! `select(index, page_size)` is only valid immediately after the scan pass
//! that rendered the page, and for at most the last 20 scanned records; the
//! caller upholds that window, exactly as the console menus do.
//!
//! Uniqueness rules (no duplicate product name, release id, requester, or
//! request per requester+item) belong to the caller: filtered-scan first,
//! then add.

#![warn(missing_docs)]

mod database;
mod stores;

pub mod prelude;

// Re-export the main entry point
pub use database::Tracker;

// Re-export typed stores
pub use stores::{ItemStore, ProductStore, ReleaseStore, RequestStore, RequesterStore};

// Re-export the core vocabulary
pub use issuedb_core::{
    ChangeItem, ChangeRequest, Error, ItemFilter, ItemId, Priority, Product, ProductFilter,
    Release, ReleaseFilter, RequestFilter, Requester, RequesterFilter, RequesterId, Result,
    Status, StatusSet,
};
