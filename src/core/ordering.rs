//! Newest-first ordering for instances and entries.
//!
//! Both orders compare dates only. Equal dates are equivalent, so callers rely
//! on stable sorting and stable insertion to keep source order for ties.

use crate::domain::model::{Entry, Instance};
use std::cmp::Ordering;

/// Orders `a` before `b` when `a` is more recent.
pub fn instance_order(a: &Instance, b: &Instance) -> Ordering {
    b.date.cmp(&a.date)
}

/// Orders entries by their most recent instance, newest first.
pub fn entry_order(a: &Entry, b: &Entry) -> Ordering {
    b.latest().date.cmp(&a.latest().date)
}

/// Inserts `instance` into an already newest-first list, after every
/// instance that is at least as recent.
pub fn insert_sorted(instances: &mut Vec<Instance>, instance: Instance) {
    let index = instances
        .partition_point(|existing| instance_order(existing, &instance) != Ordering::Greater);
    instances.insert(index, instance);
}

/// Stable sort of entries, newest latest-instance first.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(entry_order);
}
