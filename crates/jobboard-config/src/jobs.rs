//! Job feed parsing.
//!
//! A feed is a KDL document with one `job` node per posting:
//!
//! ```kdl
//! job "1" {
//!     title "Senior Frontend Developer"
//!     company "TechCorp"
//!     location "San Francisco, CA"
//!     experience "3-5 years"
//!     apply "https://example.com/apply/1"
//!     tags "React" "TypeScript"
//!     requirement "3+ years of experience with React"
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use jobboard_core::{JobId, JobRecord};
use kdl::{KdlDocument, KdlNode};
use uuid::Uuid;

use crate::nodes::{get_all_string_args, get_first_scalar_arg, get_first_string_arg};
use crate::{ConfigError, ConfigResult};

const DEFAULT_JOBS: &str = include_str!("../seed/jobs.kdl");

/// Parse a job feed from KDL text.
pub fn parse_jobs(kdl: &str) -> ConfigResult<Vec<JobRecord>> {
    let doc: KdlDocument = kdl.parse()?;

    let mut jobs = Vec::new();
    let mut seen = HashSet::new();

    for node in doc.nodes() {
        match node.name().value() {
            "job" => {
                let job = parse_job(node);
                if !seen.insert(job.id.clone()) {
                    return Err(ConfigError::Duplicate(format!("job '{}'", job.id)));
                }
                jobs.push(job);
            }
            _ => {} // Ignore unknown nodes
        }
    }

    Ok(jobs)
}

/// Read and parse a job feed file.
pub fn load_jobs(path: impl AsRef<Path>) -> ConfigResult<Vec<JobRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_jobs(&content)
}

/// The mock postings bundled with the server.
pub fn default_jobs() -> ConfigResult<Vec<JobRecord>> {
    parse_jobs(DEFAULT_JOBS)
}

fn parse_job(node: &KdlNode) -> JobRecord {
    let id = get_first_scalar_arg(node)
        .map(JobId::from)
        .unwrap_or_else(|| JobId::new(Uuid::now_v7().to_string()));

    let mut job = JobRecord::new(id);

    let Some(children) = node.children() else {
        return job;
    };

    for child in children.nodes() {
        let text = || get_first_string_arg(child).unwrap_or_default();
        match child.name().value() {
            "title" => job.title = text(),
            "company" => job.company = text(),
            "location" => job.location = text(),
            "experience" => job.experience = text(),
            "apply" | "application-link" => job.application_link = text(),
            "description" => job.description = text(),
            "posted" | "posted-date" => job.posted_date = text(),
            "company-description" => job.company_description = Some(text()),
            "source" => job.source = Some(text()),
            "tags" => {
                job.tags
                    .get_or_insert_with(Vec::new)
                    .extend(get_all_string_args(child));
            }
            "requirement" => {
                let requirements = job.requirements.get_or_insert_with(Vec::new);
                if let Some(req) = get_first_string_arg(child) {
                    requirements.push(req);
                }
            }
            "requirements" => {
                let requirements = job.requirements.get_or_insert_with(Vec::new);
                requirements.extend(get_all_string_args(child));
                if let Some(items) = child.children() {
                    requirements.extend(items.nodes().iter().filter_map(get_first_string_arg));
                }
            }
            _ => {}
        }
    }

    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_job() {
        let kdl = r#"
            job "1" {
                title "Senior Frontend Developer"
                company "TechCorp"
                location "San Francisco, CA"
                experience "3-5 years"
                apply "https://example.com/apply/1"
                posted "2 days ago"
                description "<p>Build user interfaces.</p>"
                company-description "TechCorp builds web apps."
                source "Mock Data"
                tags "React" "TypeScript" "Frontend"
                requirement "3+ years of experience with React"
                requirement "Strong TypeScript skills"
            }
        "#;

        let jobs = parse_jobs(kdl).unwrap();
        assert_eq!(jobs.len(), 1);

        let job = &jobs[0];
        assert_eq!(job.id, "1");
        assert_eq!(job.title, "Senior Frontend Developer");
        assert_eq!(job.company, "TechCorp");
        assert_eq!(job.location, "San Francisco, CA");
        assert_eq!(job.experience, "3-5 years");
        assert_eq!(job.application_link, "https://example.com/apply/1");
        assert_eq!(job.posted_date, "2 days ago");
        assert_eq!(job.description, "<p>Build user interfaces.</p>");
        assert_eq!(
            job.company_description.as_deref(),
            Some("TechCorp builds web apps.")
        );
        assert_eq!(job.source.as_deref(), Some("Mock Data"));
        assert_eq!(
            job.tags,
            Some(vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Frontend".to_string()
            ])
        );
        assert_eq!(job.requirements.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_absent_and_empty_lists_differ() {
        let kdl = r#"
            job "bare" {
                title "No lists"
            }

            job "empty" {
                title "Empty lists"
                tags
                requirements
            }
        "#;

        let jobs = parse_jobs(kdl).unwrap();
        assert_eq!(jobs[0].tags, None);
        assert_eq!(jobs[0].requirements, None);
        assert_eq!(jobs[1].tags, Some(vec![]));
        assert_eq!(jobs[1].requirements, Some(vec![]));
    }

    #[test]
    fn test_requirements_block() {
        let kdl = r#"
            job "1" {
                requirements {
                    - "Rust"
                    - "Tokio"
                }
            }
        "#;

        let jobs = parse_jobs(kdl).unwrap();
        assert_eq!(
            jobs[0].requirements,
            Some(vec!["Rust".to_string(), "Tokio".to_string()])
        );
    }

    #[test]
    fn test_integer_and_generated_ids() {
        let kdl = r#"
            job 7 {
                title "Numbered"
            }

            job {
                title "Anonymous"
            }
        "#;

        let jobs = parse_jobs(kdl).unwrap();
        assert_eq!(jobs[0].id, "7");
        assert!(!jobs[1].id.as_str().is_empty());
        assert!(jobs[1].id.as_str().parse::<Uuid>().is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let kdl = r#"
            job "1" { title "A"; }
            job "1" { title "B"; }
        "#;

        let result = parse_jobs(kdl);
        assert!(matches!(result.unwrap_err(), ConfigError::Duplicate(_)));
    }

    #[test]
    fn test_syntax_error() {
        let result = parse_jobs("job \"1\" {");
        assert!(matches!(result.unwrap_err(), ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_nodes_ignored() {
        let kdl = r#"
            feed "weekly"
            job "1" {
                title "Kept"
                salary "unknown field"
            }
        "#;

        let jobs = parse_jobs(kdl).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Kept");
    }

    #[test]
    fn test_default_jobs_parse() {
        let jobs = default_jobs().unwrap();
        assert!(!jobs.is_empty());
        assert_eq!(jobs[0].id, "1");
        assert_eq!(jobs[0].title, "Senior Frontend Developer");
        assert_eq!(jobs[0].company, "TechCorp");
        assert_eq!(jobs[0].source.as_deref(), Some("Mock Data"));
    }

    #[test]
    fn test_load_jobs_missing_file() {
        let result = load_jobs("/nonexistent/jobs.kdl");
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
