//! Client case (project opening) records.

use super::tenant::{TenantId, TenantOwned};
use super::{default_active, deserialize_id, CompanyType};
use crate::io::output::TableRow;
use crate::view::fields::{tags, text, FieldKey, FieldKind, FieldValue, Listable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CaseStatus {
    #[default]
    #[serde(rename = "募集中")]
    Open,
    #[serde(rename = "提案中")]
    Proposing,
    #[serde(rename = "成約")]
    Closed,
    #[serde(rename = "終了")]
    Ended,
}

impl CaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Open => "募集中",
            CaseStatus::Proposing => "提案中",
            CaseStatus::Closed => "成約",
            CaseStatus::Ended => "終了",
        }
    }

    /// Whether the case still accepts candidates.
    pub fn is_open(&self) -> bool {
        matches!(self, CaseStatus::Open | CaseStatus::Proposing)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub tenant_id: TenantId,
    pub title: String,
    #[serde(default)]
    pub client_company: String,
    #[serde(default)]
    pub company_type: CompanyType,
    /// Required skills
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub manager: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseField {
    Title,
    ClientCompany,
    CompanyType,
    Skills,
    Location,
    Budget,
    Status,
    Manager,
    StartDate,
    CreatedAt,
}

impl FieldKey for CaseField {
    fn all() -> &'static [Self] {
        &[
            CaseField::Title,
            CaseField::ClientCompany,
            CaseField::CompanyType,
            CaseField::Skills,
            CaseField::Location,
            CaseField::Budget,
            CaseField::Status,
            CaseField::Manager,
            CaseField::StartDate,
            CaseField::CreatedAt,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            CaseField::Title => "title",
            CaseField::ClientCompany => "clientCompany",
            CaseField::CompanyType => "companyType",
            CaseField::Skills => "skills",
            CaseField::Location => "location",
            CaseField::Budget => "budget",
            CaseField::Status => "status",
            CaseField::Manager => "manager",
            CaseField::StartDate => "startDate",
            CaseField::CreatedAt => "createdAt",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            CaseField::Skills => FieldKind::Tags,
            CaseField::StartDate | CaseField::CreatedAt => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

impl Listable for Case {
    type Field = CaseField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: CaseField) -> Option<FieldValue<'_>> {
        match field {
            CaseField::Title => text(&self.title),
            CaseField::ClientCompany => text(&self.client_company),
            CaseField::CompanyType => text(self.company_type.label()),
            CaseField::Skills => tags(&self.skills),
            CaseField::Location => text(&self.location),
            CaseField::Budget => text(&self.budget),
            CaseField::Status => text(self.status.label()),
            CaseField::Manager => text(&self.manager),
            CaseField::StartDate => self.start_date.map(FieldValue::Date),
            CaseField::CreatedAt => Some(FieldValue::Date(self.created_at)),
        }
    }

    fn default_search_fields() -> &'static [CaseField] {
        &[
            CaseField::Title,
            CaseField::ClientCompany,
            CaseField::Skills,
            CaseField::Location,
        ]
    }
}

impl TenantOwned for Case {
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

impl TableRow for Case {
    fn headers() -> &'static [&'static str] {
        &[
            "ID", "Title", "Client", "Type", "Skills", "Location", "Budget", "Status", "Manager",
            "Start",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.client_company.clone(),
            self.company_type.label().to_string(),
            self.skills.join(", "),
            self.location.clone(),
            self.budget.clone(),
            self.status.label().to_string(),
            self.manager.clone(),
            self.start_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::case;
    use crate::view::filter::{FilterState, FilterValue};

    #[test]
    fn test_deserialize_minimal_case() {
        let c: Case = serde_yaml::from_str("id: c9\ntitle: 基幹系刷新\ncreatedAt: 2024-06-01\n").unwrap();
        assert_eq!(c.status, CaseStatus::Open);
        assert!(c.skills.is_empty());
        assert!(c.is_active);
    }

    #[test]
    fn test_status_filter_compares_label() {
        let mut closed = case("c1", "Java案件", &["Java"]);
        closed.status = CaseStatus::Closed;
        let state = FilterState::new().with(CaseField::Status, FilterValue::Equals("成約".into()));
        assert!(state.matches(&closed));
        assert!(!state.matches(&case("c2", "Go案件", &["Go"])));
    }

    #[test]
    fn test_open_statuses() {
        assert!(CaseStatus::Open.is_open());
        assert!(CaseStatus::Proposing.is_open());
        assert!(!CaseStatus::Ended.is_open());
    }

    #[test]
    fn test_missing_start_date_is_missing_field() {
        assert_eq!(case("c1", "t", &[]).field(CaseField::StartDate), None);
    }
}
