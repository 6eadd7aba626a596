//! Core types for the issuedb record store.
//!
//! This crate defines the fundamental types shared across the system:
//! - [`Error`] / [`Result`]: the closed error taxonomy for all store operations
//! - [`Record`]: the fixed-size binary codec trait every entity implements
//! - The five entity records: [`Product`], [`Release`], [`ChangeItem`],
//!   [`ChangeRequest`], [`Requester`]
//! - Per-entity filters with `Option`-based wildcard fields
//! - The [`Status`] / [`StatusSet`] model for change item lifecycle
//!
//! No I/O happens here; the file engine lives in `issuedb-store`.

pub mod error;
pub mod filter;
pub mod limits;
pub mod record;
pub mod records;
pub mod status;

pub use error::{Error, Result};
pub use filter::{ItemFilter, ProductFilter, ReleaseFilter, RequestFilter, RequesterFilter};
pub use record::Record;
pub use records::{ChangeItem, ChangeRequest, ItemId, Product, Release, Requester, RequesterId};
pub use status::{Priority, Status, StatusSet};
