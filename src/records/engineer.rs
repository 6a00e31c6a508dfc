//! Engineer roster records.

use super::tenant::{TenantId, TenantOwned};
use super::{default_active, deserialize_id, CompanyType};
use crate::io::output::TableRow;
use crate::view::fields::{tags, text, FieldKey, FieldKind, FieldValue, Listable};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Sales status of an engineer. An engineer may carry several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineerStatus {
    #[serde(rename = "案件探し中")]
    Seeking,
    #[serde(rename = "提案中")]
    Proposing,
    #[serde(rename = "面談調整中")]
    Interviewing,
    #[serde(rename = "結果待ち")]
    AwaitingResult,
    #[serde(rename = "契約中")]
    Contracted,
}

impl EngineerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EngineerStatus::Seeking => "案件探し中",
            EngineerStatus::Proposing => "提案中",
            EngineerStatus::Interviewing => "面談調整中",
            EngineerStatus::AwaitingResult => "結果待ち",
            EngineerStatus::Contracted => "契約中",
        }
    }
}

impl fmt::Display for EngineerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub tenant_id: TenantId,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text such as `"5年"`
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub company_type: CompanyType,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub status: Vec<EngineerStatus>,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub available_from: Option<NaiveDate>,
    pub registered_at: NaiveDate,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EngineerField {
    Name,
    Skills,
    Status,
    Experience,
    CompanyType,
    CompanyName,
    Nationality,
    AvailableFrom,
    RegisteredAt,
}

impl FieldKey for EngineerField {
    fn all() -> &'static [Self] {
        &[
            EngineerField::Name,
            EngineerField::Skills,
            EngineerField::Status,
            EngineerField::Experience,
            EngineerField::CompanyType,
            EngineerField::CompanyName,
            EngineerField::Nationality,
            EngineerField::AvailableFrom,
            EngineerField::RegisteredAt,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            EngineerField::Name => "name",
            EngineerField::Skills => "skills",
            EngineerField::Status => "status",
            EngineerField::Experience => "experience",
            EngineerField::CompanyType => "companyType",
            EngineerField::CompanyName => "companyName",
            EngineerField::Nationality => "nationality",
            EngineerField::AvailableFrom => "availableFrom",
            EngineerField::RegisteredAt => "registeredAt",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            EngineerField::Skills | EngineerField::Status => FieldKind::Tags,
            EngineerField::AvailableFrom | EngineerField::RegisteredAt => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }
}

impl Listable for Engineer {
    type Field = EngineerField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: EngineerField) -> Option<FieldValue<'_>> {
        match field {
            EngineerField::Name => text(&self.name),
            EngineerField::Skills => tags(&self.skills),
            EngineerField::Status => Some(FieldValue::Tags(
                self.status
                    .iter()
                    .map(|s| Cow::Borrowed(s.label()))
                    .collect(),
            )),
            EngineerField::Experience => text(&self.experience),
            EngineerField::CompanyType => text(self.company_type.label()),
            EngineerField::CompanyName => text(&self.company_name),
            EngineerField::Nationality => text(&self.nationality),
            EngineerField::AvailableFrom => self.available_from.map(FieldValue::Date),
            EngineerField::RegisteredAt => Some(FieldValue::Date(self.registered_at)),
        }
    }

    fn default_search_fields() -> &'static [EngineerField] {
        &[
            EngineerField::Name,
            EngineerField::Skills,
            EngineerField::CompanyName,
        ]
    }
}

impl TenantOwned for Engineer {
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

impl TableRow for Engineer {
    fn headers() -> &'static [&'static str] {
        &[
            "ID",
            "Name",
            "Skills",
            "Experience",
            "Type",
            "Company",
            "Status",
            "Available",
            "Registered",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.skills.join(", "),
            self.experience.clone(),
            self.company_type.label().to_string(),
            self.company_name.clone(),
            self.status
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join(", "),
            self.available_from
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.registered_at.to_string(),
        ]
    }
}
