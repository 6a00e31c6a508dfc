//! Pure transformation pipeline for list preparation.
//!
//! ```text
//! &[T]
//!   │
//!   ├─→ filter_items()   ← search query + FilterState
//!   ├─→ sort_items()     ← SortState (optional)
//!   ├─→ paginate()       ← page, page size
//!   └─→ compute_range()  ← current page, total pages
//!   │
//!   ▼
//! PageView<T>
//! ```
//!
//! Every stage is deterministic and free of I/O. Configuration arrives as
//! parameters.

use super::fields::Listable;
use super::filter::FilterState;
use super::page_range::{compute_range, PageToken};
use super::paginate::{clamp_page, paginate, total_pages};
use super::search::SearchQuery;
use super::sort::{sort_indices, sort_items, SortState};

/// Everything that decides which items a list shows and in what order.
#[derive(Debug, Clone)]
pub struct ListQuery<T: Listable> {
    pub search: SearchQuery,
    pub search_fields: Vec<T::Field>,
    pub filters: FilterState<T::Field>,
    pub sort: Option<SortState<T::Field>>,
}

impl<T: Listable> Default for ListQuery<T> {
    fn default() -> Self {
        Self {
            search: SearchQuery::default(),
            search_fields: T::default_search_fields().to_vec(),
            filters: FilterState::default(),
            sort: None,
        }
    }
}

impl<T: Listable> ListQuery<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = SearchQuery::new(query);
        self
    }

    /// Replace the searched fields; an empty list keeps the record defaults.
    pub fn with_search_fields(mut self, fields: Vec<T::Field>) -> Self {
        if !fields.is_empty() {
            self.search_fields = fields;
        }
        self
    }

    pub fn with_filters(mut self, filters: FilterState<T::Field>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortState<T::Field>) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// One rendered page of a list.
#[derive(Debug, Clone)]
pub struct PageView<'a, T> {
    pub items: Vec<&'a T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub range: Vec<PageToken>,
}

impl<T> PageView<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Keeps items passing the search query and every active filter, in input order.
pub fn filter_items<'a, T: Listable>(items: &'a [T], query: &ListQuery<T>) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| passes(*item, query))
        .collect()
}

fn passes<T: Listable>(item: &T, query: &ListQuery<T>) -> bool {
    query.search.matches(item, &query.search_fields) && query.filters.matches(item)
}

/// Indices of items passing the query, in input order.
pub fn filter_indices<T: Listable>(items: &[T], query: &ListQuery<T>) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| passes(*item, query))
        .map(|(idx, _)| idx)
        .collect()
}

/// Filters then sorts, returning indices into `items`.
pub fn prepare_indices<T: Listable>(items: &[T], query: &ListQuery<T>) -> Vec<usize> {
    let filtered = filter_indices(items, query);
    match &query.sort {
        Some(sort) => sort_indices(filtered, items, sort),
        None => filtered,
    }
}

/// Filters then sorts.
pub fn prepare_list<'a, T: Listable>(items: &'a [T], query: &ListQuery<T>) -> Vec<&'a T> {
    let filtered = filter_items(items, query);
    match &query.sort {
        Some(sort) => sort_items(filtered, sort),
        None => filtered,
    }
}

/// Builds a page view over an already prepared sequence.
///
/// `page` is clamped into range so a stale page number never renders empty
/// while earlier pages hold data.
pub fn build_page<'a, T>(prepared: &[&'a T], page: usize, page_size: usize) -> PageView<'a, T> {
    let total_items = prepared.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = clamp_page(page, total_pages);

    PageView {
        items: paginate(prepared, current_page, page_size).to_vec(),
        current_page,
        total_pages,
        total_items,
        page_size,
        range: compute_range(current_page, total_pages),
    }
}

/// Filters, sorts and paginates in one call.
pub fn prepare_page<'a, T: Listable>(
    items: &'a [T],
    query: &ListQuery<T>,
    page: usize,
    page_size: usize,
) -> PageView<'a, T> {
    let prepared = prepare_list(items, query);
    build_page(&prepared, page, page_size)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::records::testing::engineer;
    use crate::records::{Engineer, EngineerField};
    use crate::view::filter::FilterValue;
    use proptest::prelude::*;

    const SKILLS: &[&str] = &["Java", "Go", "AWS", "React", "Python"];

    fn engineers(seeds: &[(usize, usize)]) -> Vec<Engineer> {
        seeds
            .iter()
            .enumerate()
            .map(|(i, (a, b))| {
                engineer(
                    &format!("e{}", i),
                    &format!("name{}", (a * 7 + b) % 13),
                    &[SKILLS[a % SKILLS.len()], SKILLS[b % SKILLS.len()]],
                )
            })
            .collect()
    }

    proptest! {
        /// Property: filtering an already filtered list changes nothing.
        #[test]
        fn filter_is_idempotent(
            seeds in prop::collection::vec((0usize..5, 0usize..5), 0..60),
            skill in 0usize..5,
            query in "[a-z0-9]{0,3}"
        ) {
            let items = engineers(&seeds);
            let list_query: ListQuery<Engineer> = ListQuery::new()
                .with_search(query)
                .with_filters(FilterState::new().with(
                    EngineerField::Skills,
                    FilterValue::Equals(SKILLS[skill].to_string()),
                ));
            let once: Vec<Engineer> = filter_items(&items, &list_query).into_iter().cloned().collect();
            let twice: Vec<Engineer> = filter_items(&once, &list_query).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        /// Property: all pages together rebuild the filtered and sorted sequence.
        #[test]
        fn pages_rebuild_prepared_list(
            seeds in prop::collection::vec((0usize..5, 0usize..5), 0..60),
            page_size in 1usize..12
        ) {
            let items = engineers(&seeds);
            let query: ListQuery<Engineer> = ListQuery::new().with_sort(SortState::new(EngineerField::Name));
            let prepared = prepare_list(&items, &query);
            let first = build_page(&prepared, 1, page_size);
            let rebuilt: Vec<&str> = (1..=first.total_pages)
                .flat_map(|page| build_page(&prepared, page, page_size).items)
                .map(|e| e.id.as_str())
                .collect();
            let expected: Vec<&str> = prepared.iter().map(|e| e.id.as_str()).collect();
            prop_assert_eq!(rebuilt, expected);
        }
    }
}
