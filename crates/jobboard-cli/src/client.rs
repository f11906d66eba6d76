//! HTTP client for the job board API.

use anyhow::{Result, anyhow, bail};
use jobboard_core::{FilterOptions, JobRecord};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Parameters for `GET /api/jobs`.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub query: Option<String>,
    pub location: Option<String>,
    pub experience: Option<String>,
    pub source: Option<String>,
    pub page: u32,
    pub limit: Option<u32>,
}

impl ListParams {
    /// Query string pairs, leaving out empty filters.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("page", self.page.max(1).to_string())];
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        let filters = [
            ("query", &self.query),
            ("location", &self.location),
            ("experience", &self.experience),
            ("source", &self.source),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobList {
    pub jobs: Vec<JobRecord>,
    pub has_more: bool,
}

#[derive(Debug, Deserialize)]
struct SaveJobsResponse {
    count: usize,
}

/// Job board API client.
pub struct ApiClient {
    client: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::new(),
            base: Url::parse(api_url)?,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn job_url(&self, id: &str) -> Result<Url> {
        let mut url = self.endpoint("/api/jobs")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("API URL cannot have a path: {}", self.base))?
            .push(id);
        Ok(url)
    }

    pub async fn list_jobs(&self, params: &ListParams) -> Result<JobList> {
        let url = self.endpoint("/api/jobs")?;
        debug!(%url, "Listing jobs");
        let response = self.client.get(url).query(&params.pairs()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Fetch one job; `None` when the server has no job with that ID.
    pub async fn get_job(&self, id: &str) -> Result<Option<JobRecord>> {
        let url = self.job_url(id)?;
        debug!(%url, "Fetching job");
        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(check(response).await?.json().await?))
    }

    pub async fn filter_options(&self) -> Result<FilterOptions> {
        let url = self.endpoint("/api/filter-options")?;
        let response = self.client.get(url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// Upload a batch; returns the number of jobs the server holds afterwards.
    pub async fn save_jobs(&self, jobs: &[JobRecord]) -> Result<usize> {
        let url = self.endpoint("/api/jobs")?;
        debug!(%url, batch = jobs.len(), "Saving jobs");
        let response = self.client.post(url).json(jobs).send().await?;
        let saved: SaveJobsResponse = check(response).await?.json().await?;
        Ok(saved.count)
    }
}

/// Turn a non-success response into an error carrying the server's message.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&text)
        .ok()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(text);
    bail!("API request failed ({}): {}", status, message)
}
