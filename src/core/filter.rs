//! # Facet Filter Engine
//!
//! Narrows a fixed record collection by a free-text query plus zero or more
//! facet constraints, and counts facet values for option lists.
//!
//! ```text
//! records ──┬── query (case-insensitive substring, any search field)
//!           ├── facet "country" = Kenya      ──►  AND  ──►  FilterResult
//!           └── facet "category" = all (no-op)               (input order kept)
//! ```
//!
//! Both [`apply`] and [`aggregate`] are pure: same inputs, same output.
//! An empty result is a normal value, not an error.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Sentinel facet value meaning "no constraint on this dimension".
pub const ALL: &str = "all";

/// An item that can be narrowed by the engine.
///
/// Implementors expose their categorical fields by name through [`Record::facet`]
/// and list the text that free-text search looks at in [`Record::search_fields`].
pub trait Record {
    /// Facet dimensions this record type carries, in display order.
    const FACETS: &'static [&'static str];

    fn title(&self) -> &str;

    fn subtitle(&self) -> Option<&str> {
        None
    }

    /// Value of a facet field, or `None` if this record type has no such field.
    fn facet(&self, field: &str) -> Option<&str>;

    fn search_fields(&self) -> Vec<&str>;

    /// Short display annotations ("45 pages", "Verified"). Never searched.
    fn meta(&self) -> Vec<String> {
        Vec::new()
    }
}

// ============================================================================
// Constraints
// ============================================================================

/// Accepted value for one facet dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FacetValue {
    #[default]
    All,
    Only(String),
}

impl FacetValue {
    /// `"all"` maps to [`FacetValue::All`]; anything else is an exact-match value.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FacetValue::All
        } else {
            FacetValue::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetValue::All => ALL,
            FacetValue::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FacetValue::All)
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::parse(value)
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one constraint per facet dimension.
///
/// Setting a dimension to `all` removes it, so an `all` set is indistinguishable
/// from one that was never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    constraints: BTreeMap<String, String>,
}

impl FacetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FacetSet::set`], handy for one-off constraint sets.
    pub fn with(mut self, dimension: &str, value: impl Into<FacetValue>) -> Self {
        self.set(dimension, value);
        self
    }

    pub fn set(&mut self, dimension: &str, value: impl Into<FacetValue>) {
        match value.into() {
            FacetValue::All => {
                self.constraints.remove(dimension);
            }
            FacetValue::Only(value) => {
                self.constraints.insert(dimension.to_string(), value);
            }
        }
    }

    pub fn get(&self, dimension: &str) -> FacetValue {
        self.constraints
            .get(dimension)
            .map(|value| FacetValue::Only(value.clone()))
            .unwrap_or_default()
    }

    /// Active (non-`all`) constraints, ordered by dimension name.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.constraints
            .iter()
            .map(|(dimension, value)| (dimension.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.constraints
            .iter()
            .all(|(dimension, value)| record.facet(dimension) == Some(value.as_str()))
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Records that passed every active constraint, in their original order.
#[derive(Debug, PartialEq)]
pub struct FilterResult<'a, R> {
    pub matches: Vec<&'a R>,
}

impl<'a, R> FilterResult<'a, R> {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a R> {
        self.matches.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.matches.iter().copied()
    }
}

impl<'a, R: Record> FilterResult<'a, R> {
    pub fn titles(&self) -> Vec<&'a str> {
        self.matches.iter().map(|record| record.title()).collect()
    }
}

/// Lowercases both sides of a comparison with the same rule.
fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

fn matches_query<R: Record + ?Sized>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .into_iter()
            .any(|field| fold_case(field).contains(needle))
}

/// Stable filter of `records` by `query` and every active facet in `facets`.
///
/// Accepts anything that yields record references, so a previous result can be
/// filtered again with `apply(result.iter(), ..)`.
pub fn apply<'a, R, I>(records: I, query: &str, facets: &FacetSet) -> FilterResult<'a, R>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let needle = fold_case(query);
    let matches = records
        .into_iter()
        .filter(|record| matches_query(*record, &needle) && facets.matches(*record))
        .collect();
    FilterResult { matches }
}

// ============================================================================
// Aggregation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Per-value counts for one facet dimension, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    pub field: String,
    /// Number of records counted, including ones without the field.
    pub total: usize,
    pub entries: Vec<FacetCount>,
}

impl FacetCounts {
    /// Count for a value; `all` yields the total.
    pub fn get(&self, value: &FacetValue) -> usize {
        match value {
            FacetValue::All => self.total,
            FacetValue::Only(value) => self
                .entries
                .iter()
                .find(|entry| &entry.value == value)
                .map_or(0, |entry| entry.count),
        }
    }

    /// `all` followed by every observed value.
    pub fn options(&self) -> Vec<FacetValue> {
        std::iter::once(FacetValue::All)
            .chain(
                self.entries
                    .iter()
                    .map(|entry| FacetValue::Only(entry.value.clone())),
            )
            .collect()
    }

    /// Next (or previous) option after `current`, wrapping around.
    ///
    /// A value not present in the option list restarts from `all`.
    pub fn cycle(&self, current: &FacetValue, forward: bool) -> FacetValue {
        let options = self.options();
        let len = options.len();
        let index = options
            .iter()
            .position(|option| option == current)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        options[next].clone()
    }
}

/// Counts records per value of `field`. Meant to run over the unfiltered
/// collection so option lists stay stable while other facets are active.
pub fn aggregate<'a, R, I>(records: I, field: &str) -> FacetCounts
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut counts = FacetCounts {
        field: field.to_string(),
        ..Default::default()
    };
    for record in records {
        counts.total += 1;
        let Some(value) = record.facet(field) else {
            continue;
        };
        match counts.entries.iter_mut().find(|entry| entry.value == value) {
            Some(entry) => entry.count += 1,
            None => counts.entries.push(FacetCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    counts
}
