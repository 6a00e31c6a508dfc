//! Loading exported collections from disk.
//!
//! A dataset file holds up to three top-level sections, `engineers`, `cases`
//! and `matchings`, in JSON or YAML. Missing sections load as empty lists.

use crate::errors::{Error, Result};
use crate::records::{scope_to_tenant, Case, Engineer, MatchingResult, TenantId, TenantOwned};
use crate::view::Listable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some(other) => Err(Error::dataset(
                format!("unsupported extension '.{}' (expected .json, .yaml or .yml)", other),
                path,
            )),
            None => Err(Error::dataset(
                "missing file extension (expected .json, .yaml or .yml)",
                path,
            )),
        }
    }
}

/// Every collection the list views operate on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub engineers: Vec<Engineer>,
    pub cases: Vec<Case>,
    pub matchings: Vec<MatchingResult>,
}

impl Dataset {
    /// Keep active records, restricted to `tenant` when one is given.
    pub fn scoped(self, tenant: Option<&TenantId>) -> Self {
        match tenant {
            Some(tenant) => Self {
                engineers: scope_to_tenant(self.engineers, tenant),
                cases: scope_to_tenant(self.cases, tenant),
                matchings: scope_to_tenant(self.matchings, tenant),
            },
            None => Self {
                engineers: active_only(self.engineers),
                cases: active_only(self.cases),
                matchings: active_only(self.matchings),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.engineers.is_empty() && self.cases.is_empty() && self.matchings.is_empty()
    }
}

fn active_only<T: TenantOwned>(records: Vec<T>) -> Vec<T> {
    records.into_iter().filter(|r| r.is_active()).collect()
}

/// Parse dataset text in the given format.
pub fn parse_dataset(contents: &str, format: DatasetFormat) -> Result<Dataset> {
    let dataset: Dataset = match format {
        DatasetFormat::Json => serde_json::from_str(contents)?,
        DatasetFormat::Yaml => {
            if contents.trim().is_empty() {
                Dataset::default()
            } else {
                serde_yaml::from_str(contents)?
            }
        }
    };
    warn_duplicate_ids("engineers", &dataset.engineers);
    warn_duplicate_ids("cases", &dataset.cases);
    warn_duplicate_ids("matchings", &dataset.matchings);
    Ok(dataset)
}

/// Load a dataset, choosing JSON or YAML by extension.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let format = DatasetFormat::from_path(path)?;
    let contents = super::read_file(path)
        .map_err(|e| Error::dataset(format!("failed to read file: {}", e), path))?;
    let dataset =
        parse_dataset(&contents, format).map_err(|e| Error::dataset(e.to_string(), path))?;

    log::debug!(
        "Loaded {} engineers, {} cases, {} matchings from {}",
        dataset.engineers.len(),
        dataset.cases.len(),
        dataset.matchings.len(),
        path.display()
    );
    Ok(dataset)
}

fn warn_duplicate_ids<T: Listable>(section: &str, records: &[T]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            log::warn!("Duplicate id '{}' in {}", record.id(), section);
        }
    }
}
