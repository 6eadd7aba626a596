//! The five typed entity stores.
//!
//! Each store wraps the generic [`RecordFile`](issuedb_store::RecordFile)
//! engine with its entity's record type, id-assignment rule and, for change
//! items, the terminal-state update guard. Everything else — scanning,
//! filtering, the page re-fetch cache — is the engine, unchanged.

mod item;
mod product;
mod release;
mod request;
mod requester;

pub use item::ItemStore;
pub use product::ProductStore;
pub use release::ReleaseStore;
pub use request::RequestStore;
pub use requester::RequesterStore;
