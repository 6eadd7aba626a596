//! Write-then-scan round trips for every entity, plus reopen persistence.

use crate::common::*;
use issuedb::prelude::*;

#[test]
fn product_round_trips() {
    let mut t = TestTracker::new();
    let product = Product::new("Widget");
    t.db.products.add(&product).unwrap();

    t.db.products.rewind().unwrap();
    assert_eq!(t.db.products.next().unwrap(), product);
}

#[test]
fn release_round_trips() {
    let mut t = TestTracker::new();
    let release = Release::new("Widget", "R1.2", "2024-01-01");
    t.db.releases.add(&release).unwrap();

    t.db.releases.rewind().unwrap();
    assert_eq!(t.db.releases.next().unwrap(), release);
}

#[test]
fn change_item_round_trips() {
    let mut t = TestTracker::new();
    let item = widget_item("fix login crash");
    let id = t.db.items.add(&item).unwrap();

    t.db.items.rewind().unwrap();
    let stored = t.db.items.next().unwrap();
    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.status, item.status);
    assert_eq!(stored.priority, item.priority);
    assert_eq!(stored.product, item.product);
    assert_eq!(stored.release, item.release);
    assert_eq!(stored.description, item.description);
}

#[test]
fn change_request_round_trips() {
    let mut t = TestTracker::new();
    let request = ChangeRequest::new(ItemId::new(1), RequesterId::new(1), "2024-02-14", "R1");
    t.db.requests.add(&request).unwrap();

    t.db.requests.rewind().unwrap();
    assert_eq!(t.db.requests.next().unwrap(), request);
}

#[test]
fn requester_round_trips() {
    let mut t = TestTracker::new();
    let requester = sample_requester("Ada Lovelace");
    let id = t.db.requesters.add(&requester).unwrap();

    t.db.requesters.rewind().unwrap();
    let stored = t.db.requesters.next().unwrap();
    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.name, requester.name);
    assert_eq!(stored.phone, requester.phone);
    assert_eq!(stored.email, requester.email);
    assert_eq!(stored.department, requester.department);
}

#[test]
fn records_survive_reopen() {
    let mut t = TestTracker::new();
    t.db.products.add(&Product::new("Widget")).unwrap();
    t.db.items.add(&widget_item("one")).unwrap();
    t.db.items.add(&widget_item("two")).unwrap();

    let mut t = t.reopen();
    assert_eq!(t.db.products.len(), 1);
    assert_eq!(t.db.items.count(), 2);
    assert_eq!(t.db.items.next().unwrap().description, "one");
    assert_eq!(t.db.items.next().unwrap().description, "two");
}

#[test]
fn field_at_exact_width_round_trips() {
    let mut t = TestTracker::new();
    // product names are 10 bytes wide on disk
    let product = Product::new("ABCDEFGHIJ");
    t.db.products.add(&product).unwrap();
    t.db.products.rewind().unwrap();
    assert_eq!(t.db.products.next().unwrap(), product);
}

#[test]
fn oversized_field_rejected_and_nothing_stored() {
    let mut t = TestTracker::new();
    let err = t.db.products.add(&Product::new("eleven chars")).unwrap_err();
    assert!(matches!(err, Error::FieldTooLong { .. }));
    assert!(t.db.products.is_empty());
}
