//! Filtering and sorting of pool records.
//!
//! Both the pools API and the dashboard's local store derive their lists
//! through [`apply`], so the two paths can never disagree on what a filter
//! or a sort means.

use crate::models::pool::PoolRecord;
use crate::models::query::{FilterCriteria, SortDirection, SortKey, SortSpec};
use std::cmp::Ordering;

type Comparator = fn(&PoolRecord, &PoolRecord) -> Ordering;

/// Filter `records` by `criteria`, then order them by `sort`. Without a sort
/// the filtered records keep their input order, and ties under a sort keep
/// their filtered order in both directions.
pub fn apply(
    records: &[PoolRecord],
    criteria: &FilterCriteria,
    sort: Option<&SortSpec>,
) -> Vec<PoolRecord> {
    let mut filtered: Vec<PoolRecord> = records
        .iter()
        .filter(|pool| criteria.matches(pool))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        sort_pools(&mut filtered, spec);
    }
    filtered
}

impl FilterCriteria {
    pub fn matches(&self, pool: &PoolRecord) -> bool {
        let matches_algorithm = self.algorithm().map_or(true, |a| pool.algorithm == a);
        let matches_status = self.status().map_or(true, |s| pool.status.as_str() == s);
        let matches_region = self.region().map_or(true, |r| pool.region == r);
        let matches_search = self.search().map_or(true, |search| {
            let needle = search.to_lowercase();
            pool.name.to_lowercase().contains(&needle)
                || pool.algorithm.to_lowercase().contains(&needle)
                || pool.region.to_lowercase().contains(&needle)
        });

        matches_algorithm && matches_status && matches_region && matches_search
    }
}

pub fn sort_pools(pools: &mut [PoolRecord], spec: &SortSpec) {
    let compare = comparator(spec.key);
    match spec.direction {
        SortDirection::Asc => stable_sort_by(pools, compare),
        SortDirection::Desc => stable_sort_by(pools, |a, b| compare(b, a)),
    }
}

// Comparators may report unrelated values as equal (see `Description`), so
// they are not total orders and `slice::sort_by` is free to panic on them.
// Insertion sort only moves an element past a strictly greater neighbour,
// which keeps ties in place.
fn stable_sort_by<F>(items: &mut [PoolRecord], compare: F)
where
    F: Fn(&PoolRecord, &PoolRecord) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn comparator(key: SortKey) -> Comparator {
    match key {
        SortKey::Id => |a, b| compare_text(&a.id, &b.id),
        SortKey::Name => |a, b| compare_text(&a.name, &b.name),
        SortKey::Algorithm => |a, b| compare_text(&a.algorithm, &b.algorithm),
        SortKey::Url => |a, b| compare_text(&a.url, &b.url),
        SortKey::Port => |a, b| a.port.cmp(&b.port),
        SortKey::Fee => |a, b| compare_number(a.fee, b.fee),
        SortKey::MinPayout => |a, b| compare_number(a.min_payout, b.min_payout),
        SortKey::Hashrate => |a, b| compare_number(a.hashrate, b.hashrate),
        SortKey::Workers => |a, b| a.workers.cmp(&b.workers),
        SortKey::Uptime => |a, b| compare_number(a.uptime, b.uptime),
        SortKey::LastBlock => |a, b| compare_text(&a.last_block, &b.last_block),
        SortKey::Status => |a, b| compare_text(a.status.as_str(), b.status.as_str()),
        SortKey::Region => |a, b| compare_text(&a.region, &b.region),
        SortKey::Description => |a, b| match (&a.description, &b.description) {
            (Some(a), Some(b)) => compare_text(a, b),
            // absent values do not take part in the ordering
            _ => Ordering::Equal,
        },
    }
}

/// Case-insensitive ordering; strings differing only by case put the
/// lowercase form first.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn compare_number(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Unique algorithms in first-seen order.
pub fn distinct_algorithms(records: &[PoolRecord]) -> Vec<String> {
    distinct(records.iter().map(|pool| pool.algorithm.as_str()))
}

/// Unique regions in first-seen order.
pub fn distinct_regions(records: &[PoolRecord]) -> Vec<String> {
    distinct(records.iter().map(|pool| pool.region.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
