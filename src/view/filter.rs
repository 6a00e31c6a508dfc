//! Filter functionality for list views.
//!
//! A [`FilterState`] maps field keys to [`FilterValue`]s. Every active entry
//! is an independent predicate and an item must satisfy all of them.

use super::fields::{FieldKey, FieldKind, FieldValue, Listable};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Select-box value meaning "no constraint".
pub const ALL_SENTINEL: &str = "all";

/// Constraint placed on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    /// Equality for text and rate fields, containment for tag fields
    Equals(String),
    /// Inclusive date range; absent ends are open
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Whether this value constrains anything at all.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Equals(v) => {
                let v = v.trim();
                !v.is_empty() && v != ALL_SENTINEL
            }
            FilterValue::DateRange { from, to } => from.is_some() || to.is_some(),
        }
    }

    /// Check a field value against this constraint.
    ///
    /// A missing value fails any active constraint. A date range placed on a
    /// non-date field constrains nothing.
    pub fn matches(&self, kind: FieldKind, value: Option<&FieldValue<'_>>) -> bool {
        if !self.is_active() {
            return true;
        }
        if let FilterValue::DateRange { .. } = self {
            if kind != FieldKind::Date {
                return true;
            }
        }
        let Some(value) = value else {
            return false;
        };

        match (self, value) {
            (FilterValue::Equals(wanted), FieldValue::Tags(tags)) => {
                tags.iter().any(|t| t.as_ref() == wanted.trim())
            }
            (FilterValue::Equals(wanted), FieldValue::Text(s) | FieldValue::Rate(s)) => {
                s.as_ref() == wanted.trim()
            }
            (FilterValue::Equals(wanted), FieldValue::Date(d)) => {
                d.format("%Y-%m-%d").to_string() == wanted.trim()
            }
            (FilterValue::DateRange { from, to }, FieldValue::Date(d)) => {
                from.is_none_or(|f| *d >= f) && to.is_none_or(|t| *d <= t)
            }
            (FilterValue::DateRange { .. }, _) => true,
        }
    }

    /// Parse a `FROM..TO` date range; either side may be empty.
    pub fn parse_date_range(input: &str) -> Result<Self> {
        let (from, to) = input.split_once("..").ok_or_else(|| {
            Error::invalid_argument(format!("expected FROM..TO date range, got '{}'", input))
        })?;
        Ok(FilterValue::DateRange {
            from: parse_optional_date(from)?,
            to: parse_optional_date(to)?,
        })
    }
}

fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| Error::invalid_argument(format!("invalid date '{}': {}", input, e)))
}

/// Active filters for one list view, keyed by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<K: FieldKey> {
    entries: BTreeMap<K, FilterValue>,
}

impl<K: FieldKey> Default for FilterState<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: FieldKey> FilterState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the constraint for `key`, replacing any previous one.
    pub fn set(&mut self, key: K, value: FilterValue) {
        self.entries.insert(key, value);
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, key: K, value: FilterValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn remove(&mut self, key: K) -> Option<FilterValue> {
        self.entries.remove(&key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, key: K) -> Option<&FilterValue> {
        self.entries.get(&key)
    }

    /// Entries that actually constrain items.
    pub fn active(&self) -> impl Iterator<Item = (K, &FilterValue)> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_active())
            .map(|(key, value)| (*key, value))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Check an item against every active entry.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Listable<Field = K>,
    {
        self.active()
            .all(|(key, value)| value.matches(key.kind(), item.field(key).as_ref()))
    }

    /// Build from `KEY=VALUE` and `KEY=FROM..TO` strings as given on the command line.
    ///
    /// Keys the record type does not know are ignored with a warning.
    pub fn from_args(equals: &[String], date_ranges: &[String]) -> Result<Self> {
        let mut state = Self::new();
        for arg in equals {
            let (name, value) = split_key_value(arg)?;
            match K::parse(name) {
                Some(key) => state.set(key, FilterValue::Equals(value.to_string())),
                None => log::warn!("Ignoring filter on unknown field '{}'", name),
            }
        }
        for arg in date_ranges {
            let (name, value) = split_key_value(arg)?;
            match K::parse(name) {
                Some(key) => state.set(key, FilterValue::parse_date_range(value)?),
                None => log::warn!("Ignoring date range on unknown field '{}'", name),
            }
        }
        Ok(state)
    }
}

fn split_key_value(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .ok_or_else(|| Error::invalid_argument(format!("expected KEY=VALUE, got '{}'", arg)))
}
