//! Case ↔ engineer matching results.

use super::tenant::{TenantId, TenantOwned};
use super::{default_active, deserialize_id};
use crate::io::output::TableRow;
use crate::view::fields::{tags, text, FieldKey, FieldKind, FieldValue, Listable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Review status of a proposed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchingStatus {
    #[default]
    #[serde(rename = "未確認")]
    Unreviewed,
    #[serde(rename = "提案済")]
    Proposed,
    #[serde(rename = "面談")]
    Interview,
    #[serde(rename = "見送り")]
    Declined,
    #[serde(rename = "成約")]
    Placed,
}

impl MatchingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MatchingStatus::Unreviewed => "未確認",
            MatchingStatus::Proposed => "提案済",
            MatchingStatus::Interview => "面談",
            MatchingStatus::Declined => "見送り",
            MatchingStatus::Placed => "成約",
        }
    }
}

impl fmt::Display for MatchingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingResult {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub tenant_id: TenantId,
    #[serde(deserialize_with = "deserialize_id")]
    pub case_id: String,
    #[serde(default)]
    pub case_title: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub engineer_id: String,
    #[serde(default)]
    pub engineer_name: String,
    /// Percentage string such as `"85%"`
    pub matching_rate: String,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub status: MatchingStatus,
    pub created_at: NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchingField {
    CaseTitle,
    EngineerName,
    MatchingRate,
    MatchedSkills,
    MissingSkills,
    Status,
    CreatedAt,
}

impl FieldKey for MatchingField {
    fn all() -> &'static [Self] {
        &[
            MatchingField::CaseTitle,
            MatchingField::EngineerName,
            MatchingField::MatchingRate,
            MatchingField::MatchedSkills,
            MatchingField::MissingSkills,
            MatchingField::Status,
            MatchingField::CreatedAt,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            MatchingField::CaseTitle => "caseTitle",
            MatchingField::EngineerName => "engineerName",
            MatchingField::MatchingRate => "matchingRate",
            MatchingField::MatchedSkills => "matchedSkills",
            MatchingField::MissingSkills => "missingSkills",
            MatchingField::Status => "status",
            MatchingField::CreatedAt => "createdAt",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            MatchingField::MatchingRate => FieldKind::Rate,
            MatchingField::MatchedSkills | MatchingField::MissingSkills => FieldKind::Tags,
            MatchingField::CreatedAt => FieldKind::Date,
            MatchingField::CaseTitle | MatchingField::EngineerName | MatchingField::Status => {
                FieldKind::Text
            }
        }
    }
}

impl Listable for MatchingResult {
    type Field = MatchingField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: MatchingField) -> Option<FieldValue<'_>> {
        match field {
            MatchingField::CaseTitle => text(&self.case_title),
            MatchingField::EngineerName => text(&self.engineer_name),
            MatchingField::MatchingRate => {
                Some(FieldValue::Rate(Cow::Borrowed(self.matching_rate.as_str())))
            }
            MatchingField::MatchedSkills => tags(&self.matched_skills),
            MatchingField::MissingSkills => tags(&self.missing_skills),
            MatchingField::Status => text(self.status.label()),
            MatchingField::CreatedAt => Some(FieldValue::Date(self.created_at)),
        }
    }

    fn default_search_fields() -> &'static [MatchingField] {
        &[
            MatchingField::CaseTitle,
            MatchingField::EngineerName,
            MatchingField::MatchedSkills,
        ]
    }
}

impl TenantOwned for MatchingResult {
    fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl TableRow for MatchingResult {
    fn headers() -> &'static [&'static str] {
        &["ID", "Case", "Engineer", "Rate", "Matched", "Missing", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.case_title.clone(),
            self.engineer_name.clone(),
            self.matching_rate.clone(),
            self.matched_skills.join(", "),
            self.missing_skills.join(", "),
            self.status.label().to_string(),
        ]
    }
}
