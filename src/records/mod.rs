//! Typed records for the staffing lists.
//!
//! Records mirror the rows the hosted backend returns: camelCase keys, enum
//! values stored as their Japanese display labels, ids that may be strings or
//! numbers.

pub mod case;
pub mod engineer;
pub mod matching;
pub mod tenant;

pub use case::{Case, CaseField, CaseStatus};
pub use engineer::{Engineer, EngineerField, EngineerStatus};
pub use matching::{MatchingField, MatchingResult, MatchingStatus};
pub use tenant::{scope_to_tenant, soft_delete, TenantId, TenantOwned};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Whether a person or case belongs to the tenant itself or to a partner company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompanyType {
    #[default]
    #[serde(rename = "自社")]
    InHouse,
    #[serde(rename = "他社")]
    Partner,
}

impl CompanyType {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyType::InHouse => "自社",
            CompanyType::Partner => "他社",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Accept ids written either as strings or as integers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

pub(crate) fn default_active() -> bool {
    true
}
