//! Convenience re-exports for typical use.
//!
//! ```ignore
//! use issuedb::prelude::*;
//! ```

pub use crate::database::Tracker;
pub use crate::stores::{ItemStore, ProductStore, ReleaseStore, RequestStore, RequesterStore};
pub use issuedb_core::{
    ChangeItem, ChangeRequest, Error, ItemFilter, ItemId, Priority, Product, ProductFilter,
    Release, ReleaseFilter, RequestFilter, Requester, RequesterFilter, RequesterId, Result,
    Status, StatusSet,
};
