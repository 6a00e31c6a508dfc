//! `staffview list`: one page of engineers, cases or matchings.

use super::{write_report, OutputSettings};
use crate::cli::ListKind;
use crate::config::StaffviewConfig;
use crate::errors::{Error, Result};
use crate::io::{load_dataset, PageReport, TableRow};
use crate::records::TenantId;
use crate::view::fields::parse_fields;
use crate::view::{prepare_page, FieldKey, FilterState, ListQuery, Listable, SortDirection, SortState};
use anyhow::Context;
use std::path::PathBuf;

/// List parameters as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub query: Option<String>,
    pub search_fields: Vec<String>,
    pub filters: Vec<String>,
    pub date_ranges: Vec<String>,
    pub sort: Option<String>,
    pub order: Option<SortDirection>,
    pub page: usize,
    pub page_size: usize,
}

impl ListRequest {
    /// Translate wire names into a typed query for `T`.
    pub fn list_query<T: Listable>(&self) -> Result<ListQuery<T>> {
        let mut query = ListQuery::<T>::new()
            .with_search(self.query.clone().unwrap_or_default())
            .with_search_fields(parse_fields(&self.search_fields))
            .with_filters(FilterState::from_args(&self.filters, &self.date_ranges)?);

        match (&self.sort, self.order) {
            (Some(name), order) => {
                let field = T::Field::parse(name).ok_or_else(|| unknown_sort_field::<T>(name))?;
                let sort = match order {
                    Some(direction) => SortState::with_direction(field, direction),
                    None => SortState::new(field),
                };
                query = query.with_sort(sort);
            }
            (None, Some(_)) => log::warn!("--order has no effect without --sort"),
            (None, None) => {}
        }
        Ok(query)
    }
}

fn unknown_sort_field<T: Listable>(name: &str) -> Error {
    let known: Vec<&str> = T::Field::all().iter().map(|f| f.name()).collect();
    Error::invalid_argument(format!(
        "unknown sort field '{}' (expected one of: {})",
        name,
        known.join(", ")
    ))
}

/// Filter, sort and paginate `items` into a report.
pub fn build_report<T>(title: &str, items: &[T], request: &ListRequest) -> Result<PageReport>
where
    T: Listable + TableRow,
{
    if request.page_size == 0 {
        return Err(Error::invalid_argument("page size must be at least 1"));
    }
    let query = request.list_query::<T>()?;
    let view = prepare_page(items, &query, request.page, request.page_size);
    if view.current_page != request.page {
        log::debug!(
            "Requested page {} clamped to {} of {}",
            request.page,
            view.current_page,
            view.total_pages
        );
    }
    Ok(PageReport::from_page(title, &view))
}

#[derive(Debug, Clone)]
pub struct ListCommand {
    pub kind: ListKind,
    pub data: PathBuf,
    pub tenant: Option<String>,
    pub request: ListRequest,
    pub output: OutputSettings,
}

pub fn handle_list(command: ListCommand, config: &StaffviewConfig) -> anyhow::Result<()> {
    let tenant = command.tenant.as_deref().map(TenantId::new);
    let dataset = load_dataset(&command.data)
        .with_context(|| format!("Failed to load dataset {}", command.data.display()))?
        .scoped(tenant.as_ref());

    let mut request = command.request;
    if request.search_fields.is_empty() {
        request.search_fields = match command.kind {
            ListKind::Engineers => config.search.engineers.clone(),
            ListKind::Cases => config.search.cases.clone(),
            ListKind::Matchings => config.search.matchings.clone(),
        };
    }

    let report = match command.kind {
        ListKind::Engineers => build_report("Engineers", &dataset.engineers, &request)?,
        ListKind::Cases => build_report("Cases", &dataset.cases, &request)?,
        ListKind::Matchings => build_report("Matchings", &dataset.matchings, &request)?,
    };
    write_report(&report, &command.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::{engineer, matching};
    use crate::records::{Engineer, MatchingResult};
    use crate::view::PageToken;
    use pretty_assertions::assert_eq;

    fn request(page: usize, page_size: usize) -> ListRequest {
        ListRequest {
            page,
            page_size,
            ..ListRequest::default()
        }
    }

    #[test]
    fn test_report_filters_and_sorts() {
        let items = vec![
            engineer("e1", "Ueda", &["Java"]),
            engineer("e2", "Abe", &["Go"]),
            engineer("e3", "Ito", &["Java"]),
        ];
        let req = ListRequest {
            filters: vec!["skills=Java".into()],
            sort: Some("name".into()),
            ..request(1, 10)
        };
        let report = build_report("Engineers", &items, &req).unwrap();
        let ids: Vec<&str> = report.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(ids, vec!["e3", "e1"]);
        assert_eq!(report.total_items, 2);
    }

    #[test]
    fn test_explicit_order_overrides_default() {
        let items = vec![matching("a", "20%"), matching("b", "80%")];
        let req = ListRequest {
            sort: Some("matchingRate".into()),
            order: Some(SortDirection::Ascending),
            ..request(1, 10)
        };
        let report = build_report::<MatchingResult>("Matchings", &items, &req).unwrap();
        assert_eq!(report.rows[0][0], "a");
    }

    #[test]
    fn test_unknown_sort_field_is_rejected() {
        let req = ListRequest {
            sort: Some("salary".into()),
            ..request(1, 10)
        };
        let err = build_report::<Engineer>("Engineers", &[], &req).unwrap_err();
        assert!(err.to_string().contains("registeredAt"));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = build_report::<Engineer>("Engineers", &[], &request(1, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let items: Vec<_> = (0..23)
            .map(|i| engineer(&format!("e{:02}", i), "n", &[]))
            .collect();
        let report = build_report("Engineers", &items, &request(9, 5)).unwrap();
        assert_eq!(report.current_page, 5);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.range, (1..=5).map(PageToken::Page).collect::<Vec<_>>());
    }
}
