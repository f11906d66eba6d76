//! Job queries.
//!
//! A [`JobQuery`] is a conjunction of field predicates plus a page window.
//! Matching is literal: both sides are lowercased and compared with a plain
//! substring check, so user input such as `C++` or `(remote` is never
//! interpreted as a pattern.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::JobRecord;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Bounds applied when turning raw request parameters into a [`JobQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Page size used when the caller gives none, or an invalid one.
    pub default_limit: usize,
    /// Largest page size a caller may ask for.
    pub max_limit: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: MAX_PAGE_SIZE,
        }
    }
}

impl QueryLimits {
    /// Clamp a raw page size into `1..=max_limit`, defaulting when missing or below 1.
    pub fn clamp_limit(&self, raw: Option<i64>) -> usize {
        match raw {
            Some(limit) if limit >= 1 => usize::try_from(limit)
                .unwrap_or(usize::MAX)
                .min(self.max_limit.max(1)),
            _ => self.default_limit.clamp(1, self.max_limit.max(1)),
        }
    }

    /// Clamp a raw 1-indexed page number; anything below 1 becomes 1.
    pub fn clamp_page(&self, raw: Option<i64>) -> usize {
        match raw {
            Some(page) if page >= 1 => usize::try_from(page).unwrap_or(usize::MAX),
            _ => 1,
        }
    }
}

/// Filter and page parameters for a job listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    /// 1-indexed page number.
    pub page: usize,
    /// Maximum records per page.
    pub limit: usize,
    /// Matched against title or company.
    pub text: String,
    pub location: String,
    pub experience: String,
    /// Exact source name.
    pub source: String,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            text: String::new(),
            location: String::new(),
            experience: String::new(),
            source: String::new(),
        }
    }
}

impl JobQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Index of the first record on the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Build the predicate set for this query, lowercasing the needles once.
    pub fn filter(&self) -> JobFilter<'_> {
        JobFilter {
            text: needle(&self.text),
            location: needle(&self.location),
            experience: needle(&self.experience),
            source: Some(self.source.as_str()).filter(|s| !s.is_empty()),
        }
    }

    /// Run the query over a snapshot, keeping snapshot order.
    pub fn apply<'a, I>(&self, jobs: I) -> JobPage
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        let filter = self.filter();
        let matching: Vec<&JobRecord> = jobs.into_iter().filter(|j| filter.matches(j)).collect();
        let total = matching.len();
        let records = matching
            .into_iter()
            .skip(self.offset())
            .take(self.limit)
            .cloned()
            .collect();

        JobPage { records, total }
    }
}

fn needle(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_lowercase())
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// The active predicates of a [`JobQuery`]. Inactive ones are `None`.
#[derive(Debug, Clone)]
pub struct JobFilter<'q> {
    text: Option<String>,
    location: Option<String>,
    experience: Option<String>,
    source: Option<&'q str>,
}

impl JobFilter<'_> {
    pub fn matches(&self, job: &JobRecord) -> bool {
        if let Some(text) = &self.text {
            if !contains_folded(&job.title, text) && !contains_folded(&job.company, text) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains_folded(&job.location, location) {
                return false;
            }
        }
        if let Some(experience) = &self.experience {
            if !contains_folded(&job.experience, experience) {
                return false;
            }
        }
        if let Some(source) = self.source {
            if job.source.as_deref() != Some(source) {
                return false;
            }
        }
        true
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPage {
    pub records: Vec<JobRecord>,
    /// Number of records matching the filters, across all pages.
    pub total: usize,
}

impl JobPage {
    /// Whether records remain after the page `query` asked for.
    pub fn has_more(&self, query: &JobQuery) -> bool {
        query.limit > 0 && query.page.saturating_mul(query.limit) < self.total
    }
}

/// Distinct field values used to populate filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub experience_levels: Vec<String>,
    pub sources: Vec<String>,
}

impl FilterOptions {
    /// Collect distinct values in first-seen order. Empty locations and
    /// empty or absent sources are skipped; experience levels are kept as-is.
    pub fn collect<'a, I>(jobs: I) -> Self
    where
        I: IntoIterator<Item = &'a JobRecord>,
    {
        let mut locations = Distinct::skipping_empty();
        let mut experience_levels = Distinct::keeping_empty();
        let mut sources = Distinct::skipping_empty();

        for job in jobs {
            locations.push(&job.location);
            experience_levels.push(&job.experience);
            if let Some(source) = job.source_name() {
                sources.push(source);
            }
        }

        Self {
            locations: locations.values,
            experience_levels: experience_levels.values,
            sources: sources.values,
        }
    }
}

struct Distinct<'a> {
    seen: HashSet<&'a str>,
    values: Vec<String>,
    keep_empty: bool,
}

impl<'a> Distinct<'a> {
    fn skipping_empty() -> Self {
        Self {
            seen: HashSet::new(),
            values: Vec::new(),
            keep_empty: false,
        }
    }

    fn keeping_empty() -> Self {
        Self {
            keep_empty: true,
            ..Self::skipping_empty()
        }
    }

    fn push(&mut self, value: &'a str) {
        if (self.keep_empty || !value.is_empty()) && self.seen.insert(value) {
            self.values.push(value.to_string());
        }
    }
}
