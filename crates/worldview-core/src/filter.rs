// crates/worldview-core/src/filter.rs

//! # Filter/Search Engine
//!
//! Client-side narrowing of a fetched country list by region and name,
//! plus the one-line status summary shown above the results.

use crate::model::{Country, Region};
use crate::text::contains_ignore_case;
use std::fmt;

/// Countries matching `region` AND `query`.
///
/// - `region`: kept when non-empty; compared case-insensitively for equality.
/// - `query`: kept when non-empty after trimming; the trimmed text must occur
///   in the common name, ignoring case.
///
/// With neither active every entry is returned in input order. Never fails;
/// no match is an empty list.
pub fn filter_countries<'a, B>(
    countries: &'a [Country<B>],
    region: Option<&str>,
    query: Option<&str>,
) -> Vec<&'a Country<B>> {
    let region = region.map(str::trim).filter(|r| !r.is_empty());
    let query = query.map(str::trim).filter(|q| !q.is_empty());

    countries
        .iter()
        .filter(|c| region.map_or(true, |r| c.region().eq_ignore_ascii_case(r)))
        .filter(|c| query.map_or(true, |q| contains_ignore_case(c.name(), q)))
        .collect()
}

/// What the status line reports, picked by priority query > region > none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSummary {
    NoMatches { query: String },
    QueryMatches { query: String, count: usize },
    Region { region: String, count: usize },
    Global { count: usize },
}

impl StatusSummary {
    pub fn derive(count: usize, region: Option<&str>, query: Option<&str>) -> Self {
        let query = query.map(str::trim).filter(|q| !q.is_empty());
        let region = region.map(str::trim).filter(|r| !r.is_empty());
        match (query, region) {
            (Some(q), _) if count == 0 => StatusSummary::NoMatches { query: q.to_string() },
            (Some(q), _) => StatusSummary::QueryMatches {
                query: q.to_string(),
                count,
            },
            (None, Some(r)) => StatusSummary::Region {
                region: r.to_string(),
                count,
            },
            (None, None) => StatusSummary::Global { count },
        }
    }

    pub fn count(&self) -> usize {
        match self {
            StatusSummary::NoMatches { .. } => 0,
            StatusSummary::QueryMatches { count, .. }
            | StatusSummary::Region { count, .. }
            | StatusSummary::Global { count } => *count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSummary::NoMatches { query } => {
                write!(f, "NO DATA MATCHES: {}", query.to_uppercase())
            }
            StatusSummary::QueryMatches { query, count } => write!(
                f,
                "QUERY MATCH: {count} item{} FOR {}.",
                if *count == 1 { "" } else { "s" },
                query.to_uppercase()
            ),
            StatusSummary::Region { region, count } => {
                write!(f, "REGION: {} - {count} COUNTRIES.", region.to_uppercase())
            }
            StatusSummary::Global { count } => write!(f, "GLOBAL DATASET: {count} RECORDS ONLINE."),
        }
    }
}

/// Region selector plus free-text query for one catalog session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub region: Option<Region>,
    pub query: String,
}

/// Matches of one [`FilterState::apply`] call with their summary.
#[derive(Debug, Clone)]
pub struct FilterOutcome<'a, B = String> {
    pub countries: Vec<&'a Country<B>>,
    pub summary: StatusSummary,
}

impl<B> FilterOutcome<'_, B> {
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn set_region(&mut self, region: Option<Region>) {
        self.region = region;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.region.is_some() || !self.query.trim().is_empty()
    }

    pub fn apply<'a, B>(&self, countries: &'a [Country<B>]) -> FilterOutcome<'a, B> {
        let region = self.region.map(|r| r.as_str());
        let query = Some(self.query.as_str());
        let matches = filter_countries(countries, region, query);
        let summary = StatusSummary::derive(matches.len(), region, query);
        FilterOutcome {
            countries: matches,
            summary,
        }
    }
}
