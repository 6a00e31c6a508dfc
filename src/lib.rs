//! staffview: list views over staffing data.
//!
//! The [`view`] module holds the list core: free-text search, field filters,
//! a single-field sort, pagination and the page-number strip, composed by
//! [`view::ListView`]. The remaining modules load engineer, case and
//! matching-result collections, run batch matching and render pages.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod matching;
pub mod records;
pub mod view;

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, PageReport};

pub use crate::matching::{batch_match, Recommender, SkillOverlapRecommender};

pub use crate::records::{
    Case, CaseField, Engineer, EngineerField, MatchingField, MatchingResult, TenantId,
};

pub use crate::view::{
    compute_range, paginate, prepare_list, prepare_page, FilterState, FilterValue, ListQuery,
    ListView, PageToken, PageView, SortDirection, SortState,
};
