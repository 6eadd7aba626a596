//! Fixed field widths and store limits.
//!
//! Every text field in a record occupies exactly its maximum width on disk,
//! zero-padded. Changing any of these constants changes the file format.

/// Maximum length of a product name in bytes.
pub const MAX_PRODUCT_NAME: usize = 10;

/// Maximum length of a release identifier in bytes.
pub const MAX_RELEASE_ID: usize = 8;

/// Length of a date field (`YYYY-MM-DD`) in bytes.
pub const DATE_LEN: usize = 10;

/// Maximum length of a change item description in bytes.
pub const MAX_DESCRIPTION: usize = 30;

/// Maximum length of a requester name in bytes.
pub const MAX_REQUESTER_NAME: usize = 30;

/// Length of a requester phone number field in bytes.
pub const PHONE_LEN: usize = 11;

/// Maximum length of a requester email address in bytes.
pub const MAX_EMAIL: usize = 24;

/// Maximum length of a requester department name in bytes.
pub const MAX_DEPARTMENT: usize = 12;

/// Capacity of the recently-scanned offset cache, and therefore the largest
/// page a caller can re-fetch from with `select`.
pub const ACCESS_CACHE_SIZE: usize = 20;

/// Maximum number of entries the presentation layer renders per page.
///
/// Kept here because it bounds the `page_size` argument callers pass to
/// `select`; it must never exceed [`ACCESS_CACHE_SIZE`].
pub const PAGE_SIZE: usize = 16;
