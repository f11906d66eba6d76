//! Job postings.
//!
//! A [`JobRecord`] is stored and returned whole. Every field except the
//! identifier may be empty, and the optional fields keep "absent" apart from
//! "empty" so a feed that publishes `tags: []` round-trips unchanged.

use serde::{Deserialize, Serialize};

use crate::JobId;

/// A single job posting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-text experience bucket, e.g. "3-5 years".
    pub experience: String,
    pub application_link: String,
    /// Rich text (HTML) body.
    pub description: String,
    /// Display string such as "2 days ago".
    pub posted_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    /// Name of the feed the posting was collected from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl JobRecord {
    /// Create an otherwise empty record with the given identifier.
    pub fn new(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// The source name, treating an empty string the same as no source.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}
