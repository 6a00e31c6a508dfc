//! Typed field access for list records.
//!
//! Each record type declares an enum of its listable fields. The enum carries
//! the field's wire name (the camelCase JSON key) and its kind, which decides
//! how the field is searched, filtered and compared.

use chrono::NaiveDate;
use std::borrow::Cow;
use std::fmt::Debug;

/// How a field's values behave in filters and comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single string value, compared with natural ordering
    Text,
    /// Sequence of strings; filters match by containment
    Tags,
    /// Percentage string such as `"85%"`, compared numerically
    Rate,
    /// Calendar date
    Date,
}

/// A key naming one listable field of a record type.
pub trait FieldKey: Copy + Ord + Debug + 'static {
    /// Every field of the record type.
    fn all() -> &'static [Self];

    /// Wire name, also accepted on the command line.
    fn name(&self) -> &'static str;

    fn kind(&self) -> FieldKind;

    /// Look a key up by its wire name.
    fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.name() == name)
    }
}

/// A field value borrowed from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Tags(Vec<Cow<'a, str>>),
    Rate(Cow<'a, str>),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    /// Text form used for searching and tag comparison.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) | FieldValue::Rate(s) => Cow::Borrowed(s.as_ref()),
            FieldValue::Tags(tags) => Cow::Owned(
                tags.iter()
                    .map(|t| t.as_ref())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            FieldValue::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A record that can be shown in a list view.
pub trait Listable {
    type Field: FieldKey;

    /// Stable identifier, unique within the collection.
    fn id(&self) -> &str;

    /// Value of `field`, or `None` when the record has no value for it.
    fn field(&self, field: Self::Field) -> Option<FieldValue<'_>>;

    /// Fields the free-text query searches when none are configured.
    fn default_search_fields() -> &'static [Self::Field];
}

/// Borrow a string as a text field value, treating empty strings as missing.
pub fn text(value: &str) -> Option<FieldValue<'_>> {
    if value.is_empty() {
        None
    } else {
        Some(FieldValue::Text(Cow::Borrowed(value)))
    }
}

/// Borrow a list of strings as a tag field value.
pub fn tags(values: &[String]) -> Option<FieldValue<'_>> {
    Some(FieldValue::Tags(
        values.iter().map(|v| Cow::Borrowed(v.as_str())).collect(),
    ))
}

/// Parse a list of wire names into keys, dropping names the record does not know.
pub fn parse_fields<K: FieldKey>(names: &[String]) -> Vec<K> {
    names
        .iter()
        .filter_map(|name| {
            let key = K::parse(name);
            if key.is_none() {
                log::warn!("Ignoring unknown field '{}'", name);
            }
            key
        })
        .collect()
}
