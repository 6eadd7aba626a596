//! The five entity records and their on-disk codecs.
//!
//! Layouts are little-endian integers followed by fixed-width zero-padded
//! text, in the order the fields are declared. Sizes:
//!
//! | entity | size |
//! |---|---|
//! | [`Product`] | 10 |
//! | [`Release`] | 28 |
//! | [`ChangeItem`] | 54 |
//! | [`ChangeRequest`] | 26 |
//! | [`Requester`] | 81 |

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{Error, Result};
use crate::limits::*;
use crate::record::{get_text, put_text, Record};
use crate::status::{Priority, Status};

/// 1-based identifier of a change item, assigned by the item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u32);

impl ItemId {
    /// Wrap a raw 1-based id.
    pub const fn new(raw: u32) -> Self {
        ItemId(raw)
    }

    /// The raw 1-based id.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based identifier of a requester, assigned by the requester store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequesterId(u32);

impl RequesterId {
    /// Wrap a raw 1-based id.
    pub const fn new(raw: u32) -> Self {
        RequesterId(raw)
    }

    /// The raw 1-based id.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for RequesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decode a stored 1-based id field.
fn decode_id(raw: i32, field: &'static str) -> Result<u32> {
    u32::try_from(raw)
        .ok()
        .filter(|&id| id >= 1)
        .ok_or_else(|| Error::Corrupt(format!("field `{}` holds invalid id {}", field, raw)))
}

// ============================================================================
// Product
// ============================================================================

/// A tracked product, identified by name.
///
/// Name uniqueness is the caller's job: filtered-scan for the name before
/// adding, exactly as the console wizards do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product name, at most [`MAX_PRODUCT_NAME`] bytes
    pub name: String,
}

impl Product {
    /// Create a product record.
    pub fn new(name: impl Into<String>) -> Self {
        Product { name: name.into() }
    }
}

impl Record for Product {
    const SIZE: usize = MAX_PRODUCT_NAME;

    fn encode(&self, buf: &mut [u8]) -> Result<()> {
        put_text(&mut buf[..MAX_PRODUCT_NAME], "name", &self.name)
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        Ok(Product {
            name: get_text(&buf[..MAX_PRODUCT_NAME], "name")?,
        })
    }
}

// ============================================================================
// Release
// ============================================================================

/// A release of a product.
///
/// `product` is a value-equality foreign key to [`Product::name`], not a
/// pointer; the store does not enforce that the product exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    /// Name of the product this release belongs to
    pub product: String,
    /// Release identifier, at most [`MAX_RELEASE_ID`] bytes
    pub release_id: String,
    /// Release date, `YYYY-MM-DD`
    pub date: String,
}

impl Release {
    /// Create a release record.
    pub fn new(
        product: impl Into<String>,
        release_id: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Release {
            product: product.into(),
            release_id: release_id.into(),
            date: date.into(),
        }
    }
}

impl Record for Release {
    const SIZE: usize = MAX_PRODUCT_NAME + MAX_RELEASE_ID + DATE_LEN;

    fn encode(&self, buf: &mut [u8]) -> Result<()> {
        put_text(&mut buf[..10], "product", &self.product)?;
        put_text(&mut buf[10..18], "release_id", &self.release_id)?;
        put_text(&mut buf[18..28], "date", &self.date)
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        Ok(Release {
            product: get_text(&buf[..10], "product")?,
            release_id: get_text(&buf[10..18], "release_id")?,
            date: get_text(&buf[18..28], "date")?,
        })
    }
}

// ============================================================================
// ChangeItem
// ============================================================================

/// A change item: one unit of tracked work against a product release.
///
/// The only mutable entity. The item store assigns `id` on create; updates
/// overwrite in place and are rejected once the stored status is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeItem {
    /// Store-assigned id; `None` until first written
    pub id: Option<ItemId>,
    /// Current lifecycle state
    pub status: Status,
    /// Ordinal priority
    pub priority: Priority,
    /// Name of the affected product
    pub product: String,
    /// Target release identifier
    pub release: String,
    /// Free-text description, at most [`MAX_DESCRIPTION`] bytes
    pub description: String,
}

impl ChangeItem {
    /// Create a new, unstored change item in the `Unreviewed` state.
    pub fn new(
        product: impl Into<String>,
        release: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        ChangeItem {
            id: None,
            status: Status::Unreviewed,
            priority,
            product: product.into(),
            release: release.into(),
            description: description.into(),
        }
    }
}

impl Record for ChangeItem {
    const SIZE: usize = 4 + 1 + 1 + MAX_PRODUCT_NAME + MAX_RELEASE_ID + MAX_DESCRIPTION;

    fn encode(&self, buf: &mut [u8]) -> Result<()> {
        let raw_id = self.id.map_or(-1, |id| id.as_u32() as i32);
        LittleEndian::write_i32(&mut buf[..4], raw_id);
        buf[4] = self.status.bit();
        buf[5] = self.priority.ordinal();
        put_text(&mut buf[6..16], "product", &self.product)?;
        put_text(&mut buf[16..24], "release", &self.release)?;
        put_text(&mut buf[24..54], "description", &self.description)
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        let id = decode_id(LittleEndian::read_i32(&buf[..4]), "id")?;
        let status = Status::from_bit(buf[4])
            .ok_or_else(|| Error::Corrupt(format!("invalid status byte {}", buf[4])))?;
        let priority = Priority::from_ordinal(buf[5])
            .ok_or_else(|| Error::Corrupt(format!("invalid priority byte {}", buf[5])))?;
        Ok(ChangeItem {
            id: Some(ItemId::new(id)),
            status,
            priority,
            product: get_text(&buf[6..16], "product")?,
            release: get_text(&buf[16..24], "release")?,
            description: get_text(&buf[24..54], "description")?,
        })
    }
}

// ============================================================================
// ChangeRequest
// ============================================================================

/// A requester's report against a change item. Append-only; no update path.
///
/// One-per-requester-per-item uniqueness is enforced by the caller via a
/// filtered scan before adding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    /// The change item being requested
    pub item_id: ItemId,
    /// The requester who reported it
    pub requester_id: RequesterId,
    /// Date of the request, `YYYY-MM-DD`
    pub date: String,
    /// Release the requester saw the problem in
    pub release: String,
}

impl ChangeRequest {
    /// Create a change request record.
    pub fn new(
        item_id: ItemId,
        requester_id: RequesterId,
        date: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        ChangeRequest {
            item_id,
            requester_id,
            date: date.into(),
            release: release.into(),
        }
    }
}

impl Record for ChangeRequest {
    const SIZE: usize = 4 + 4 + DATE_LEN + MAX_RELEASE_ID;

    fn encode(&self, buf: &mut [u8]) -> Result<()> {
        LittleEndian::write_i32(&mut buf[..4], self.item_id.as_u32() as i32);
        LittleEndian::write_i32(&mut buf[4..8], self.requester_id.as_u32() as i32);
        put_text(&mut buf[8..18], "date", &self.date)?;
        put_text(&mut buf[18..26], "release", &self.release)
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        Ok(ChangeRequest {
            item_id: ItemId::new(decode_id(LittleEndian::read_i32(&buf[..4]), "item_id")?),
            requester_id: RequesterId::new(decode_id(
                LittleEndian::read_i32(&buf[4..8]),
                "requester_id",
            )?),
            date: get_text(&buf[8..18], "date")?,
            release: get_text(&buf[18..26], "release")?,
        })
    }
}

// ============================================================================
// Requester
// ============================================================================

/// A person who files change requests. Append-only; id assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    /// Store-assigned id; `None` until first written
    pub id: Option<RequesterId>,
    /// Full name, at most [`MAX_REQUESTER_NAME`] bytes
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Email address, at most [`MAX_EMAIL`] bytes
    pub email: String,
    /// Department, at most [`MAX_DEPARTMENT`] bytes; empty for external users
    pub department: String,
}

impl Requester {
    /// Create a new, unstored requester.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Requester {
            id: None,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            department: department.into(),
        }
    }
}

impl Record for Requester {
    const SIZE: usize = 4 + MAX_REQUESTER_NAME + PHONE_LEN + MAX_EMAIL + MAX_DEPARTMENT;

    fn encode(&self, buf: &mut [u8]) -> Result<()> {
        let raw_id = self.id.map_or(-1, |id| id.as_u32() as i32);
        LittleEndian::write_i32(&mut buf[..4], raw_id);
        put_text(&mut buf[4..34], "name", &self.name)?;
        put_text(&mut buf[34..45], "phone", &self.phone)?;
        put_text(&mut buf[45..69], "email", &self.email)?;
        put_text(&mut buf[69..81], "department", &self.department)
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        let id = decode_id(LittleEndian::read_i32(&buf[..4]), "id")?;
        Ok(Requester {
            id: Some(RequesterId::new(id)),
            name: get_text(&buf[4..34], "name")?,
            phone: get_text(&buf[34..45], "phone")?,
            email: get_text(&buf[45..69], "email")?,
            department: get_text(&buf[69..81], "department")?,
        })
    }
}
