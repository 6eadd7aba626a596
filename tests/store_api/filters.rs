//! Filtered scans: wildcards, single fields, and the status set.

use crate::common::*;
use issuedb::prelude::*;

fn seed_items(t: &mut TestTracker) {
    let mut a = ChangeItem::new("Widget", "R1", "widget r1 bug", Priority::Low);
    a.status = Status::Unreviewed;
    let mut b = ChangeItem::new("Widget", "R2", "widget r2 bug", Priority::High);
    b.status = Status::InProgress;
    let mut c = ChangeItem::new("Gadget", "G1", "gadget bug", Priority::High);
    c.status = Status::Done;
    for item in [&a, &b, &c] {
        t.db.items.add(item).unwrap();
    }
    t.db.items.rewind().unwrap();
}

fn collect_items(t: &mut TestTracker, filter: &ItemFilter) -> Vec<ChangeItem> {
    let mut found = Vec::new();
    loop {
        match t.db.items.next_where(filter) {
            Ok(item) => found.push(item),
            Err(err) => {
                assert!(err.is_end_of_data());
                return found;
            }
        }
    }
}

#[test]
fn all_wildcard_filter_matches_every_record() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let found = collect_items(&mut t, &ItemFilter::default());
    assert_eq!(found.len(), 3);
}

#[test]
fn single_field_filter_matches_only_that_value() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let found = collect_items(&mut t, &ItemFilter::for_product("Widget"));
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|item| item.product == "Widget"));
}

#[test]
fn filters_combine_as_conjunction() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let filter = ItemFilter {
        product: Some("Widget".into()),
        priority: Some(Priority::High),
        ..Default::default()
    };
    let found = collect_items(&mut t, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].release, "R2");
}

#[test]
fn active_status_set_excludes_terminal_items() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let filter = ItemFilter {
        status: Some(StatusSet::ACTIVE),
        ..Default::default()
    };
    let found = collect_items(&mut t, &filter);
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|item| !item.status.is_terminal()));
}

#[test]
fn status_set_with_one_member_is_exact_match() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let filter = ItemFilter {
        status: Some(StatusSet::of(Status::Done)),
        ..Default::default()
    };
    let found = collect_items(&mut t, &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].product, "Gadget");
}

#[test]
fn filtered_scan_resumes_past_last_match() {
    let mut t = TestTracker::new();
    seed_items(&mut t);
    let filter = ItemFilter::for_product("Widget");
    let first = t.db.items.next_where(&filter).unwrap();
    let second = t.db.items.next_where(&filter).unwrap();
    assert_eq!(first.release, "R1");
    assert_eq!(second.release, "R2");
    assert!(t.db.items.next_where(&filter).unwrap_err().is_end_of_data());
}

#[test]
fn release_filter_by_product() {
    let mut t = TestTracker::new();
    t.db.releases.add(&Release::new("Widget", "R1", "2024-01-01")).unwrap();
    t.db.releases.add(&Release::new("Widget", "R2", "2024-06-01")).unwrap();
    t.db.releases.add(&Release::new("Gadget", "G1", "2024-03-01")).unwrap();
    t.db.releases.rewind().unwrap();

    let filter = ReleaseFilter::for_product("Widget");
    assert_eq!(t.db.releases.next_where(&filter).unwrap().release_id, "R1");
    assert_eq!(t.db.releases.next_where(&filter).unwrap().release_id, "R2");
    assert!(t.db.releases.next_where(&filter).unwrap_err().is_end_of_data());
}

#[test]
fn request_filter_finds_duplicate_pair() {
    let mut t = TestTracker::new();
    let pair = ChangeRequest::new(ItemId::new(1), RequesterId::new(2), "2024-01-01", "R1");
    t.db.requests.add(&pair).unwrap();
    t.db.requests
        .add(&ChangeRequest::new(
            ItemId::new(1),
            RequesterId::new(3),
            "2024-01-02",
            "R1",
        ))
        .unwrap();
    t.db.requests.rewind().unwrap();

    // the duplicate check the wizard runs before accepting a new request
    let filter = RequestFilter {
        item_id: Some(ItemId::new(1)),
        requester_id: Some(RequesterId::new(2)),
        ..Default::default()
    };
    assert_eq!(t.db.requests.next_where(&filter).unwrap(), pair);
    assert!(t.db.requests.next_where(&filter).unwrap_err().is_end_of_data());
}

#[test]
fn requester_filter_by_email() {
    let mut t = TestTracker::new();
    t.db.requesters
        .add(&Requester::new("Ada", "6045550101", "ada@example.com", "QA"))
        .unwrap();
    t.db.requesters
        .add(&Requester::new("Grace", "6045550102", "grace@example.com", "Dev"))
        .unwrap();
    t.db.requesters.rewind().unwrap();

    let filter = RequesterFilter::with_email("grace@example.com");
    assert_eq!(t.db.requesters.next_where(&filter).unwrap().name, "Grace");
}

#[test]
fn product_filter_checks_uniqueness_before_insert() {
    let mut t = TestTracker::new();
    t.db.products.add(&Product::new("Widget")).unwrap();
    t.db.products.rewind().unwrap();

    // caller's duplicate check: a match means the name is taken
    let taken = t.db.products.next_where(&ProductFilter::with_name("Widget"));
    assert!(taken.is_ok());

    t.db.products.rewind().unwrap();
    let free = t.db.products.next_where(&ProductFilter::with_name("Gadget"));
    assert!(free.unwrap_err().is_end_of_data());
}
