//! Change item id assignment, updates, and the terminal-state guard.

use crate::common::*;
use issuedb::prelude::*;

#[test]
fn ids_assigned_sequentially_from_one() {
    let mut t = TestTracker::new();
    for expected in 1..=5u32 {
        let id = t.db.items.add(&widget_item("work")).unwrap();
        assert_eq!(id, ItemId::new(expected));
        assert_eq!(t.db.items.count(), u64::from(expected));
    }
}

#[test]
fn add_accepts_the_id_it_would_assign() {
    let mut t = TestTracker::new();
    t.db.items.add(&widget_item("first")).unwrap();

    let mut item = widget_item("second");
    item.id = Some(ItemId::new(2));
    assert_eq!(t.db.items.add(&item).unwrap(), ItemId::new(2));
}

#[test]
fn add_rejects_any_other_id() {
    let mut t = TestTracker::new();
    t.db.items.add(&widget_item("first")).unwrap();

    let mut item = widget_item("bad");
    item.id = Some(ItemId::new(1)); // already taken
    assert!(matches!(
        t.db.items.add(&item).unwrap_err(),
        Error::InvalidRecordId { id: 1, count: 1 }
    ));

    item.id = Some(ItemId::new(7)); // gap
    assert!(matches!(
        t.db.items.add(&item).unwrap_err(),
        Error::InvalidRecordId { id: 7, count: 1 }
    ));
    assert_eq!(t.db.items.count(), 1);
}

#[test]
fn update_overwrites_in_place() {
    let mut t = TestTracker::new();
    let id = t.db.items.add(&widget_item("original")).unwrap();

    let mut updated = t.db.items.get(id).unwrap();
    updated.status = Status::InProgress;
    updated.priority = Priority::Highest;
    updated.description = "revised".into();
    t.db.items.update(&updated).unwrap();

    assert_eq!(t.db.items.count(), 1);
    let stored = t.db.items.get(id).unwrap();
    assert_eq!(stored.status, Status::InProgress);
    assert_eq!(stored.priority, Priority::Highest);
    assert_eq!(stored.description, "revised");
}

#[test]
fn update_rejects_unknown_ids() {
    let mut t = TestTracker::new();
    t.db.items.add(&widget_item("only")).unwrap();

    let mut item = widget_item("ghost");
    item.id = Some(ItemId::new(9));
    assert!(matches!(
        t.db.items.update(&item).unwrap_err(),
        Error::InvalidRecordId { id: 9, count: 1 }
    ));

    item.id = None;
    assert!(matches!(
        t.db.items.update(&item).unwrap_err(),
        Error::InvalidRecordId { id: -1, .. }
    ));
}

#[test]
fn terminal_status_blocks_further_updates() {
    let mut t = TestTracker::new();
    let id = t.db.items.add(&widget_item("doomed")).unwrap();

    let mut item = t.db.items.get(id).unwrap();
    item.status = Status::Done;
    t.db.items.update(&item).unwrap();

    // any further write must fail, even one that would reopen the item
    item.status = Status::Reviewed;
    let err = t.db.items.update(&item).unwrap_err();
    assert!(err.is_terminal_state());

    // and the stored record is untouched
    assert_eq!(t.db.items.get(id).unwrap().status, Status::Done);
}

#[test]
fn cancelled_is_also_terminal() {
    let mut t = TestTracker::new();
    let id = t.db.items.add(&widget_item("dropped")).unwrap();

    let mut item = t.db.items.get(id).unwrap();
    item.status = Status::Cancelled;
    t.db.items.update(&item).unwrap();

    item.status = Status::InProgress;
    assert!(t.db.items.update(&item).unwrap_err().is_terminal_state());
    assert_eq!(t.db.items.get(id).unwrap().status, Status::Cancelled);
}

#[test]
fn non_terminal_transitions_allowed() {
    let mut t = TestTracker::new();
    let id = t.db.items.add(&widget_item("progressing")).unwrap();

    for status in [Status::Reviewed, Status::InProgress, Status::Done] {
        let mut item = t.db.items.get(id).unwrap();
        item.status = status;
        t.db.items.update(&item).unwrap();
        assert_eq!(t.db.items.get(id).unwrap().status, status);
    }
}

#[test]
fn requester_ids_assigned_sequentially() {
    let mut t = TestTracker::new();
    for expected in 1..=3u32 {
        let id = t.db.requesters.add(&sample_requester("user")).unwrap();
        assert_eq!(id, RequesterId::new(expected));
    }
    assert_eq!(t.db.requesters.count(), 3);
}

#[test]
fn requester_add_rejects_preassigned_id() {
    let mut t = TestTracker::new();
    let mut requester = sample_requester("user");
    requester.id = Some(RequesterId::new(1));
    assert!(matches!(
        t.db.requesters.add(&requester).unwrap_err(),
        Error::InvalidRecordId { id: 1, count: 0 }
    ));
    assert!(t.db.requesters.is_empty());
}
