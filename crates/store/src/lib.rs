//! Generic fixed-record file store engine.
//!
//! One [`RecordFile`] owns one backing file of fixed-size records plus the
//! scan state that goes with it: a forward cursor and a bounded ring of
//! recently-scanned offsets ([`AccessCache`]) that lets a paginated caller
//! re-fetch any entry of the last rendered page without rescanning.
//!
//! The engine knows nothing about entities. Id assignment rules and the
//! change item terminal-state guard live in the typed stores built on top.

pub mod cache;
pub mod file;

pub use cache::AccessCache;
pub use file::RecordFile;
