//! List-view core: filtering, sorting, pagination and the page strip.
//!
//! Everything here is pure and total. Filtering an empty collection, asking
//! for a page past the end, or sorting on a field some records lack all
//! succeed with a sensible result.
//!
//! # Examples
//!
//! ```rust,ignore
//! use staffview::view::{ListView, FilterValue};
//! use staffview::records::EngineerField;
//!
//! let mut view = ListView::new(engineers, 10);
//! view.set_filter(EngineerField::Skills, FilterValue::Equals("Java".into()));
//! view.toggle_sort(EngineerField::Name);
//! let page = view.current_page_view();
//! ```

pub mod fields;
pub mod filter;
pub mod list_state;
pub mod page_range;
pub mod paginate;
pub mod pipeline;
pub mod search;
pub mod sort;

pub use fields::{FieldKey, FieldKind, FieldValue, Listable};
pub use filter::{FilterState, FilterValue, ALL_SENTINEL};
pub use list_state::ListView;
pub use page_range::{compute_range, PageToken};
pub use paginate::{paginate, total_pages, PageState, DEFAULT_PAGE_SIZE};
pub use pipeline::{
    build_page, filter_items, prepare_indices, prepare_list, prepare_page, ListQuery, PageView,
};
pub use search::SearchQuery;
pub use sort::{collation_key, parse_rate, sort_items, SortDirection, SortState};
