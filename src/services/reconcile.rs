// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Merging remote records with local overrides.
//!
//! Pure functions only; the directory service feeds them from the remote API
//! and the override store.

use std::collections::{BTreeSet, HashSet};

use crate::models::{PageResult, UserRecord};

/// Build the merged set and cut out one page of it.
///
/// The merged set is every override (in stored order) followed by every
/// remote record that is neither overridden nor deleted. Deleted ids are
/// dropped from both sides. `total` and `total_pages` describe the merged
/// set, not the remote collection.
pub fn merge_page(
    remote: &[UserRecord],
    overrides: &[UserRecord],
    deleted: &BTreeSet<i64>,
    page: u32,
    per_page: u32,
) -> PageResult {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let merged = merged_set(remote, overrides, deleted);
    let total = u32::try_from(merged.len()).unwrap_or(u32::MAX);

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let data = merged
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    PageResult {
        page,
        per_page,
        total,
        total_pages: total.div_ceil(per_page),
        data,
    }
}

/// Overrides first, then surviving remote records, each id at most once.
pub fn merged_set<'a>(
    remote: &'a [UserRecord],
    overrides: &'a [UserRecord],
    deleted: &BTreeSet<i64>,
) -> Vec<&'a UserRecord> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(overrides.len() + remote.len());

    overrides
        .iter()
        .chain(remote.iter())
        .filter(|u| !deleted.contains(&u.id))
        .filter(|u| seen.insert(u.id))
        .collect()
}

/// Keep only records matching `term` (case-insensitive, name or email).
///
/// The term is matched as typed, surrounding whitespace included. An empty
/// term leaves the page untouched. Pagination fields are kept as-is.
pub fn filter_page(mut page: PageResult, term: &str) -> PageResult {
    if term.is_empty() {
        return page;
    }
    let needle = term.to_lowercase();
    page.data.retain(|u| u.matches(&needle));
    page
}
