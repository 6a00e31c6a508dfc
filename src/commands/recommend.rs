//! `staffview match`: score engineers against open cases.

use super::list::{build_report, ListRequest};
use super::{write_report, OutputSettings};
use crate::config::StaffviewConfig;
use crate::io::load_dataset;
use crate::matching::{batch_match, SkillOverlapRecommender};
use crate::records::{Case, MatchingField, TenantId};
use crate::view::{FieldKey, SortDirection};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct MatchCommand {
    pub data: PathBuf,
    pub tenant: Option<String>,
    pub min_rate: Option<u32>,
    pub max_per_case: Option<usize>,
    pub page: usize,
    pub page_size: usize,
    pub output: OutputSettings,
}

pub fn handle_match(command: MatchCommand, config: &StaffviewConfig) -> Result<()> {
    let tenant = command.tenant.as_deref().map(TenantId::new);
    let dataset = load_dataset(&command.data)
        .with_context(|| format!("Failed to load dataset {}", command.data.display()))?
        .scoped(tenant.as_ref());

    let recommender = SkillOverlapRecommender::new(
        command.min_rate.unwrap_or(config.matching.min_rate),
        command.max_per_case.unwrap_or(config.matching.max_per_case),
    )?;

    let open_cases: Vec<Case> = dataset
        .cases
        .into_iter()
        .filter(|case| case.status.is_open())
        .collect();
    let results = batch_match(&open_cases, &dataset.engineers, &recommender)?;
    log::info!(
        "Matched {} engineers against {} open cases: {} results",
        dataset.engineers.len(),
        open_cases.len(),
        results.len()
    );

    let request = ListRequest {
        sort: Some(MatchingField::MatchingRate.name().to_string()),
        order: Some(SortDirection::Descending),
        page: command.page,
        page_size: command.page_size,
        ..ListRequest::default()
    };
    let report = build_report("Matchings", &results, &request)?;
    write_report(&report, &command.output)
}
