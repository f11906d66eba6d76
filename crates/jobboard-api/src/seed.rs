//! Startup seeding of the job store.

use jobboard_config::{ConfigResult, ServerConfig, default_jobs, load_jobs};
use jobboard_store::JobRepo;
use tracing::info;

/// Load the configured feed (or the bundled mock postings) into an empty store.
///
/// Returns the number of records loaded; 0 when the store already held data.
pub fn seed_jobs(repo: &dyn JobRepo, config: &ServerConfig) -> ConfigResult<usize> {
    if !repo.is_empty() {
        info!(jobs = repo.len(), "Job store already populated, skipping seed");
        return Ok(0);
    }

    let jobs = match &config.seed {
        Some(path) => {
            info!(path = %path.display(), "Loading seed jobs");
            load_jobs(path)?
        }
        None => default_jobs()?,
    };

    let count = jobs.len();
    if !repo.seed_if_empty(jobs) {
        return Ok(0);
    }

    info!(jobs = count, "Job store initialized with seed data");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::JobRecord;
    use jobboard_store::InMemoryJobRepo;

    #[test]
    fn test_seeds_default_jobs_into_empty_store() {
        let repo = InMemoryJobRepo::new();
        let count = seed_jobs(&repo, &ServerConfig::default()).unwrap();
        assert!(count > 0);
        assert_eq!(repo.len(), count);
        assert!(repo.get_by_id("1").is_some());
    }

    #[test]
    fn test_populated_store_is_left_alone() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(vec![JobRecord::new("existing")]);

        let count = seed_jobs(&repo, &ServerConfig::default()).unwrap();
        assert_eq!(count, 0);
        assert_eq!(repo.len(), 1);
        assert!(repo.get_by_id("1").is_none());
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let repo = InMemoryJobRepo::new();
        let config = ServerConfig {
            seed: Some("/nonexistent/seed.kdl".into()),
            ..ServerConfig::default()
        };
        assert!(seed_jobs(&repo, &config).is_err());
        assert!(repo.is_empty());
    }
}
