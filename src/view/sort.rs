//! Sort functionality for list views.

use super::fields::{FieldKey, FieldKind, FieldValue, Listable};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Default direction when a field is first selected.
    ///
    /// Rates read best highest-first; everything else reads A-Z.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Rate => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// The single active sort field and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K: FieldKey> {
    pub field: K,
    pub direction: SortDirection,
}

impl<K: FieldKey> SortState<K> {
    /// Sort by `field` in its default direction.
    pub fn new(field: K) -> Self {
        Self {
            field,
            direction: SortDirection::default_for(field.kind()),
        }
    }

    pub fn with_direction(field: K, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Select `field`: the same field flips direction, a new field starts at its default.
    pub fn toggle(&mut self, field: K) {
        if self.field == field {
            self.direction = self.direction.reversed();
        } else {
            *self = Self::new(field);
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} ({})", self.field.name(), self.direction.display_name())
    }
}

/// Parse a percentage string such as `"85%"` into a number.
///
/// Accepts surrounding whitespace, an optional trailing `%` (ASCII or
/// full-width) and decimal values. Anything else, including thousands
/// separators, yields `None`.
pub fn parse_rate(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let number = trimmed
        .strip_suffix('%')
        .or_else(|| trimmed.strip_suffix('％'))
        .unwrap_or(trimmed)
        .trim_end();
    number.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Fold text into its collation form: lowercase, with katakana mapped onto
/// hiragana so both scripts of a reading sort together in gojūon order.
///
/// Digit runs are left intact for natural ordering.
pub fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'ァ'..='ヶ' | 'ヽ' | 'ヾ' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Precomputed comparison key for one item.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl SortKey {
    fn from_value(kind: FieldKind, value: &FieldValue<'_>) -> Option<Self> {
        match (kind, value) {
            (FieldKind::Rate, value) => parse_rate(&value.as_text()).map(SortKey::Number),
            (FieldKind::Date, FieldValue::Date(d)) => Some(SortKey::Date(*d)),
            (FieldKind::Date, _) => None,
            (FieldKind::Text | FieldKind::Tags, value) => {
                Some(SortKey::Text(collation_key(&value.as_text())))
            }
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => natord::compare(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Compare two optional keys. Missing keys rank after present ones in either
/// direction and tie with each other.
fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(a.compare(b)),
    }
}

fn key_for<T: Listable>(item: &T, sort: &SortState<T::Field>) -> Option<SortKey> {
    let kind = sort.field.kind();
    item.field(sort.field)
        .and_then(|value| SortKey::from_value(kind, &value))
}

/// Stable sort of `entries` by precomputed keys.
fn sort_keyed<E>(
    entries: Vec<E>,
    key_of: impl Fn(&E) -> Option<SortKey>,
    direction: SortDirection,
) -> Vec<E> {
    let mut keyed: Vec<(Option<SortKey>, E)> = entries
        .into_iter()
        .map(|entry| (key_of(&entry), entry))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), direction));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

/// Sort items by the active sort state (pure, stable).
///
/// Items without a usable value for the sort field do not compare equal to
/// everything else: they go after all present values in both directions and
/// keep their prior order among themselves. This keeps the comparator a total
/// order.
pub fn sort_items<'a, T: Listable>(items: Vec<&'a T>, sort: &SortState<T::Field>) -> Vec<&'a T> {
    sort_keyed(items, |item| key_for(*item, sort), sort.direction)
}

/// Sort indices into `items` by the active sort state (pure, stable).
///
/// Indices outside `items` are treated as having no value.
pub fn sort_indices<T: Listable>(
    indices: Vec<usize>,
    items: &[T],
    sort: &SortState<T::Field>,
) -> Vec<usize> {
    sort_keyed(
        indices,
        |&idx| items.get(idx).and_then(|item| key_for(item, sort)),
        sort.direction,
    )
}
