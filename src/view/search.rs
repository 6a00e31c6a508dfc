//! Free-text search over configured fields.

use super::fields::{FieldValue, Listable};

/// Case-insensitive substring query.
///
/// Surrounding whitespace is dropped before matching; inner whitespace is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Blank queries match everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True if any of `fields` contains the query.
    pub fn matches<T: Listable>(&self, item: &T, fields: &[T::Field]) -> bool {
        if self.is_empty() {
            return true;
        }
        fields.iter().any(|&field| {
            item.field(field)
                .is_some_and(|value| self.matches_value(&value))
        })
    }

    fn matches_value(&self, value: &FieldValue<'_>) -> bool {
        match value {
            FieldValue::Tags(tags) => tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle)),
            other => other.as_text().to_lowercase().contains(&self.needle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::testing::engineer;
    use crate::records::EngineerField;

    #[test]
    fn test_blank_query_matches_everything() {
        let e = engineer("e1", "Sato Ken", &["Java"]);
        assert!(SearchQuery::new("").matches(&e, &[EngineerField::Name]));
        assert!(SearchQuery::new("   ").matches(&e, &[]));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let e = engineer("e1", "Sato Ken", &[]);
        let query = SearchQuery::new(" ken ");
        assert_eq!(query.as_str(), " ken ");
        assert!(query.matches(&e, &[EngineerField::Name]));
        assert!(SearchQuery::new("o k").matches(&e, &[EngineerField::Name]));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let e = engineer("e1", "Sato Ken", &["TypeScript"]);
        let fields = [EngineerField::Name, EngineerField::Skills];
        assert!(SearchQuery::new("sato").matches(&e, &fields));
        assert!(SearchQuery::new("SCRIPT").matches(&e, &fields));
        assert!(!SearchQuery::new("python").matches(&e, &fields));
    }

    #[test]
    fn test_only_configured_fields_are_searched() {
        let e = engineer("e1", "Sato Ken", &["Rust"]);
        assert!(!SearchQuery::new("rust").matches(&e, &[EngineerField::Name]));
    }

    #[test]
    fn test_japanese_text() {
        let e = engineer("e1", "田中太郎", &[]);
        assert!(SearchQuery::new("太郎").matches(&e, &[EngineerField::Name]));
    }
}
