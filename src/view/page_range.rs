//! Page-number strip with ellipses for pagination controls.

use serde::{Serialize, Serializer};
use std::fmt;

/// Above this many pages the strip collapses runs into ellipses.
pub const MAX_UNCOLLAPSED_PAGES: usize = 7;

/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{}", n),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

// Pages serialize as numbers, ellipses as the string "ellipsis".
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Computes the pagination strip for `current` of `total` pages (pure).
///
/// The caller clamps `current` into `[1, total]`. A `total` of zero is
/// treated as a single page. Branch order matters: the leading and trailing
/// windows overlap the middle window at their boundaries.
pub fn compute_range(current: usize, total: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    let total = total.max(1);

    if total <= MAX_UNCOLLAPSED_PAGES {
        (1..=total).map(Page).collect()
    } else if current <= 3 {
        vec![
            Page(1),
            Page(2),
            Page(3),
            Page(4),
            Ellipsis,
            Page(total - 1),
            Page(total),
        ]
    } else if current >= total - 2 {
        vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(total - 3),
            Page(total - 2),
            Page(total - 1),
            Page(total),
        ]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(total),
        ]
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: identical inputs always yield identical strips.
        #[test]
        fn range_is_deterministic(total in 1usize..=50, seed in 0usize..1000) {
            let current = seed % total + 1;
            prop_assert_eq!(compute_range(current, total), compute_range(current, total));
        }

        /// Property: the strip always starts at page 1 and ends at the last page.
        #[test]
        fn range_covers_first_and_last(total in 1usize..=50, seed in 0usize..1000) {
            let current = seed % total + 1;
            let range = compute_range(current, total);
            prop_assert_eq!(range.first().copied(), Some(PageToken::Page(1)));
            prop_assert_eq!(range.last().copied(), Some(PageToken::Page(total)));
        }

        /// Property: small totals list every page with no ellipsis.
        #[test]
        fn small_ranges_have_no_ellipsis(total in 1usize..=7, seed in 0usize..1000) {
            let current = seed % total + 1;
            let range = compute_range(current, total);
            prop_assert_eq!(range.len(), total);
            prop_assert!(range.iter().all(|t| !t.is_ellipsis()));
        }

        /// Property: the current page is always visible in the strip.
        #[test]
        fn current_page_is_visible(total in 1usize..=50, seed in 0usize..1000) {
            let current = seed % total + 1;
            let range = compute_range(current, total);
            prop_assert!(range.contains(&PageToken::Page(current)));
        }

        /// Property: page numbers are strictly increasing.
        #[test]
        fn pages_strictly_increase(total in 1usize..=50, seed in 0usize..1000) {
            let current = seed % total + 1;
            let pages: Vec<usize> = compute_range(current, total)
                .iter()
                .filter_map(PageToken::page)
                .collect();
            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
