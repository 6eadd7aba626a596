//! End-to-end scenario: the full life of one change item.

use crate::common::*;
use issuedb::prelude::*;

#[test]
fn widget_change_item_lifecycle() {
    let mut t = TestTracker::new();

    // create product and release
    t.db.products.add(&Product::new("Widget")).unwrap();
    t.db.releases
        .add(&Release::new("Widget", "R1", "2024-01-01"))
        .unwrap();

    // file a change item; first id assigned is 1
    let item = ChangeItem::new("Widget", "R1", "fix bug", Priority::Medium);
    let id = t.db.items.add(&item).unwrap();
    assert_eq!(id, ItemId::new(1));

    // a requester reports it
    let requester_id = t.db.requesters
        .add(&sample_requester("Ada Lovelace"))
        .unwrap();
    t.db.requests
        .add(&ChangeRequest::new(id, requester_id, "2024-01-05", "R1"))
        .unwrap();

    // mark it done, then try to reopen it; the second write must fail
    let mut stored = t.db.items.get(id).unwrap();
    stored.status = Status::Done;
    t.db.items.update(&stored).unwrap();

    stored.status = Status::Reviewed;
    assert!(t.db.items.update(&stored).unwrap_err().is_terminal_state());

    // a filtered scan for the product finds exactly one item, still done
    t.db.items.rewind().unwrap();
    let filter = ItemFilter::for_product("Widget");
    let found = t.db.items.next_where(&filter).unwrap();
    assert_eq!(found.id, Some(id));
    assert_eq!(found.status, Status::Done);
    assert!(t.db.items.next_where(&filter).unwrap_err().is_end_of_data());

    // and it no longer shows up in the open-items report
    t.db.items.rewind().unwrap();
    assert!(t.db.items
        .next_where(&ItemFilter::active("Widget"))
        .unwrap_err()
        .is_end_of_data());

    t.db.close().unwrap();
}
