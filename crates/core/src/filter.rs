//! Per-entity filter records for filtered scans.
//!
//! Every filter field is an `Option`: `None` matches anything, `Some(v)`
//! matches records whose field equals `v`. The one exception is the change
//! item status field, which takes a [`StatusSet`] so a single filter can ask
//! for "any of these states" (e.g. everything still open).
//!
//! A default-constructed filter is all-wildcard and matches every record.

use crate::records::{ChangeItem, ChangeRequest, ItemId, Product, Release, Requester, RequesterId};
use crate::status::{Priority, StatusSet};

fn text_matches(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().map_or(true, |want| want == value)
}

/// Filter for product scans.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact product name
    pub name: Option<String>,
}

impl ProductFilter {
    /// Filter on an exact product name.
    pub fn with_name(name: impl Into<String>) -> Self {
        ProductFilter {
            name: Some(name.into()),
        }
    }

    /// Check whether `record` passes this filter.
    pub fn matches(&self, record: &Product) -> bool {
        text_matches(&self.name, &record.name)
    }
}

/// Filter for release scans.
#[derive(Debug, Clone, Default)]
pub struct ReleaseFilter {
    /// Exact product name
    pub product: Option<String>,
    /// Exact release identifier
    pub release_id: Option<String>,
    /// Exact release date
    pub date: Option<String>,
}

impl ReleaseFilter {
    /// Filter on all releases of one product.
    pub fn for_product(product: impl Into<String>) -> Self {
        ReleaseFilter {
            product: Some(product.into()),
            ..Default::default()
        }
    }

    /// Check whether `record` passes this filter.
    pub fn matches(&self, record: &Release) -> bool {
        text_matches(&self.product, &record.product)
            && text_matches(&self.release_id, &record.release_id)
            && text_matches(&self.date, &record.date)
    }
}

/// Filter for change item scans.
///
/// There is no description field; descriptions are free text and are never
/// filtered on.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Exact item id
    pub id: Option<ItemId>,
    /// Acceptable statuses; `None` matches any status
    pub status: Option<StatusSet>,
    /// Exact priority
    pub priority: Option<Priority>,
    /// Exact product name
    pub product: Option<String>,
    /// Exact release identifier
    pub release: Option<String>,
}

impl ItemFilter {
    /// Filter on all items of one product.
    pub fn for_product(product: impl Into<String>) -> Self {
        ItemFilter {
            product: Some(product.into()),
            ..Default::default()
        }
    }

    /// Filter on items of one product that are not done or cancelled.
    pub fn active(product: impl Into<String>) -> Self {
        ItemFilter {
            product: Some(product.into()),
            status: Some(StatusSet::ACTIVE),
            ..Default::default()
        }
    }

    /// Check whether `record` passes this filter.
    pub fn matches(&self, record: &ChangeItem) -> bool {
        self.id.map_or(true, |want| record.id == Some(want))
            && self.status.map_or(true, |set| set.contains(record.status))
            && self.priority.map_or(true, |want| record.priority == want)
            && text_matches(&self.product, &record.product)
            && text_matches(&self.release, &record.release)
    }
}

/// Filter for change request scans.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Exact change item id
    pub item_id: Option<ItemId>,
    /// Exact requester id
    pub requester_id: Option<RequesterId>,
    /// Exact request date
    pub date: Option<String>,
    /// Exact release identifier
    pub release: Option<String>,
}

impl RequestFilter {
    /// Filter on all requests against one change item.
    pub fn for_item(item_id: ItemId) -> Self {
        RequestFilter {
            item_id: Some(item_id),
            ..Default::default()
        }
    }

    /// Check whether `record` passes this filter.
    pub fn matches(&self, record: &ChangeRequest) -> bool {
        self.item_id.map_or(true, |want| record.item_id == want)
            && self
                .requester_id
                .map_or(true, |want| record.requester_id == want)
            && text_matches(&self.date, &record.date)
            && text_matches(&self.release, &record.release)
    }
}

/// Filter for requester scans.
#[derive(Debug, Clone, Default)]
pub struct RequesterFilter {
    /// Exact requester id
    pub id: Option<RequesterId>,
    /// Exact name
    pub name: Option<String>,
    /// Exact phone number
    pub phone: Option<String>,
    /// Exact email address
    pub email: Option<String>,
    /// Exact department
    pub department: Option<String>,
}

impl RequesterFilter {
    /// Filter on an exact email address, the usual duplicate check.
    pub fn with_email(email: impl Into<String>) -> Self {
        RequesterFilter {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    /// Check whether `record` passes this filter.
    pub fn matches(&self, record: &Requester) -> bool {
        self.id.map_or(true, |want| record.id == Some(want))
            && text_matches(&self.name, &record.name)
            && text_matches(&self.phone, &record.phone)
            && text_matches(&self.email, &record.email)
            && text_matches(&self.department, &record.department)
    }
}
