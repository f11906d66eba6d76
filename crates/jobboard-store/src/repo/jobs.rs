//! Job repository.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use jobboard_core::{FilterOptions, JobId, JobPage, JobQuery, JobRecord};
use tracing::debug;

/// Read and write access to the job snapshot.
///
/// Every call is synchronous and runs to completion under the store's own
/// locking; callers always receive owned copies of the records.
pub trait JobRepo: Send + Sync {
    /// Insert or wholly replace each record by identifier.
    /// Returns the number of records in the store afterwards.
    fn upsert_batch(&self, jobs: Vec<JobRecord>) -> usize;

    /// Filter the snapshot and return one page of it.
    fn query(&self, query: &JobQuery) -> JobPage;

    fn get_by_id(&self, id: &str) -> Option<JobRecord>;

    /// Distinct values for building filter controls.
    fn filter_options(&self) -> FilterOptions;

    /// Remove every record.
    fn clear(&self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load `jobs` only if the store holds nothing yet.
    /// Returns whether the records were loaded.
    fn seed_if_empty(&self, jobs: Vec<JobRecord>) -> bool;
}

/// In-memory implementation of JobRepo.
///
/// Records are kept in insertion order. Replacing a record keeps its
/// position; new identifiers are appended.
#[derive(Debug, Default)]
pub struct InMemoryJobRepo {
    jobs: Mutex<Vec<JobRecord>>,
}

impl InMemoryJobRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the full snapshot, in store order.
    pub fn snapshot(&self) -> Vec<JobRecord> {
        self.lock().clone()
    }

    // The snapshot is a plain Vec, so a panic elsewhere cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, Vec<JobRecord>> {
        self.jobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn upsert_into(store: &mut Vec<JobRecord>, batch: Vec<JobRecord>) {
    if batch.is_empty() {
        return;
    }

    let mut positions: HashMap<JobId, usize> = store
        .iter()
        .enumerate()
        .map(|(idx, job)| (job.id.clone(), idx))
        .collect();

    for job in batch {
        match positions.get(&job.id) {
            Some(&idx) => store[idx] = job,
            None => {
                positions.insert(job.id.clone(), store.len());
                store.push(job);
            }
        }
    }
}

impl JobRepo for InMemoryJobRepo {
    fn upsert_batch(&self, jobs: Vec<JobRecord>) -> usize {
        let batch_len = jobs.len();
        let mut store = self.lock();
        upsert_into(&mut store, jobs);
        debug!(batch = batch_len, total = store.len(), "Upserted job batch");
        store.len()
    }

    fn query(&self, query: &JobQuery) -> JobPage {
        let store = self.lock();
        query.apply(store.iter())
    }

    fn get_by_id(&self, id: &str) -> Option<JobRecord> {
        self.lock().iter().find(|job| job.id == id).cloned()
    }

    fn filter_options(&self) -> FilterOptions {
        FilterOptions::collect(self.lock().iter())
    }

    fn clear(&self) {
        let mut store = self.lock();
        debug!(removed = store.len(), "Clearing job store");
        store.clear();
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn seed_if_empty(&self, jobs: Vec<JobRecord>) -> bool {
        let mut store = self.lock();
        if !store.is_empty() {
            return false;
        }
        upsert_into(&mut store, jobs);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, location: &str, experience: &str, source: Option<&str>) -> JobRecord {
        JobRecord {
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: location.to_string(),
            experience: experience.to_string(),
            source: source.map(String::from),
            ..JobRecord::new(id)
        }
    }

    fn titled(id: &str, title: &str) -> JobRecord {
        JobRecord {
            title: title.to_string(),
            ..JobRecord::new(id)
        }
    }

    fn ids(page: &JobPage) -> Vec<String> {
        page.records.iter().map(|j| j.id.to_string()).collect()
    }

    fn two_city_repo() -> InMemoryJobRepo {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(vec![
            job("1", "SF", "3-5 years", Some("A")),
            job("2", "NY", "1-3 years", Some("B")),
        ]);
        repo
    }

    #[test]
    fn test_upsert_inserts_and_counts() {
        let repo = InMemoryJobRepo::new();
        assert_eq!(repo.upsert_batch(vec![]), 0);
        assert_eq!(repo.upsert_batch(vec![titled("1", "A"), titled("2", "B")]), 2);
        assert_eq!(repo.upsert_batch(vec![titled("3", "C")]), 3);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_upsert_replaces_whole_record() {
        let repo = InMemoryJobRepo::new();
        let mut first = titled("1", "X");
        first.tags = Some(vec!["rust".to_string()]);
        first.source = Some("A".to_string());
        repo.upsert_batch(vec![first]);

        assert_eq!(repo.upsert_batch(vec![titled("1", "Y")]), 1);

        let stored = repo.get_by_id("1").unwrap();
        assert_eq!(stored.title, "Y");
        assert_eq!(stored.tags, None);
        assert_eq!(stored.source, None);
    }

    #[test]
    fn test_upsert_keeps_position_of_replaced_records() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(vec![titled("1", "a"), titled("2", "b"), titled("3", "c")]);
        repo.upsert_batch(vec![titled("4", "d"), titled("2", "B")]);

        let page = repo.query(&JobQuery::new().limit(10));
        assert_eq!(ids(&page), vec!["1", "2", "3", "4"]);
        assert_eq!(page.records[1].title, "B");
    }

    #[test]
    fn test_large_batch_mixes_replacements_and_inserts() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch((0..1_000).map(|i| titled(&i.to_string(), "old")).collect());

        let batch: Vec<JobRecord> = (500..1_500)
            .map(|i| titled(&i.to_string(), "new"))
            .chain(std::iter::once(titled("1400", "newest")))
            .collect();
        assert_eq!(repo.upsert_batch(batch), 1_500);

        let snapshot = repo.snapshot();
        assert_eq!(snapshot[0].title, "old");
        assert_eq!(snapshot[499].title, "old");
        assert_eq!(snapshot[500].id, "500");
        assert_eq!(snapshot[500].title, "new");
        assert_eq!(snapshot[1_000].id, "1000");
        assert_eq!(snapshot[1_400].title, "newest");
        assert_eq!(snapshot[1_499].id, "1499");
    }

    #[test]
    fn test_duplicate_ids_in_one_batch_last_wins() {
        let repo = InMemoryJobRepo::new();
        let count = repo.upsert_batch(vec![titled("1", "first"), titled("1", "second")]);
        assert_eq!(count, 1);
        assert_eq!(repo.get_by_id("1").unwrap().title, "second");
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let batch = vec![
            job("1", "SF", "3-5 years", Some("A")),
            job("2", "NY", "1-3 years", None),
        ];
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(vec![titled("0", "existing")]);

        repo.upsert_batch(batch.clone());
        let once = repo.snapshot();
        repo.upsert_batch(batch);
        assert_eq!(repo.snapshot(), once);
    }

    #[test]
    fn test_query_all_returns_every_record_once_in_order() {
        let repo = InMemoryJobRepo::new();
        let batch: Vec<JobRecord> = ["c", "a", "b"].iter().map(|id| titled(id, id)).collect();
        repo.upsert_batch(batch);

        let page = repo.query(&JobQuery::new().limit(3));
        assert_eq!(page.total, 3);
        assert_eq!(ids(&page), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_query_location_case_insensitive() {
        let repo = two_city_repo();
        let page = repo.query(&JobQuery::new().location("sf"));
        assert_eq!(page.total, 1);
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_query_total_independent_of_page() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(
            (1..=12)
                .map(|i| job(&i.to_string(), if i % 2 == 0 { "SF" } else { "NY" }, "", None))
                .collect(),
        );

        for (page, limit) in [(1, 1), (2, 4), (9, 10), (1, 100)] {
            let result = repo.query(&JobQuery::new().location("sf").page(page).limit(limit));
            assert_eq!(result.total, 6);
        }
    }

    #[test]
    fn test_second_page_of_twelve() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch((1..=12).map(|i| titled(&i.to_string(), "t")).collect());

        let query = JobQuery::new().page(2).limit(10);
        let page = repo.query(&query);
        assert_eq!(page.records.len(), 2);
        assert!(!page.has_more(&query));
    }

    #[test]
    fn test_get_by_id_missing() {
        let repo = two_city_repo();
        assert!(repo.get_by_id("3").is_none());
        assert!(repo.get_by_id("").is_none());
    }

    #[test]
    fn test_returned_records_are_copies() {
        let repo = two_city_repo();
        let mut copy = repo.get_by_id("1").unwrap();
        copy.title = "changed".to_string();
        assert_eq!(repo.get_by_id("1").unwrap().title, "Job 1");
    }

    #[test]
    fn test_filter_options_exclude_missing_sources() {
        let repo = two_city_repo();
        repo.upsert_batch(vec![
            job("3", "SF", "3-5 years", None),
            job("4", "Remote", "5+ years", Some("")),
        ]);

        let options = repo.filter_options();
        assert_eq!(options.locations, vec!["SF", "NY", "Remote"]);
        assert_eq!(options.experience_levels, vec!["3-5 years", "1-3 years", "5+ years"]);
        assert_eq!(options.sources, vec!["A", "B"]);
        assert_eq!(repo.filter_options(), options);
    }

    #[test]
    fn test_filter_options_keep_empty_experience() {
        let repo = InMemoryJobRepo::new();
        repo.upsert_batch(vec![
            job("1", "SF", "", None),
            job("2", "", "3-5 years", None),
            job("3", "NY", "", None),
        ]);

        let options = repo.filter_options();
        assert_eq!(options.experience_levels, vec!["", "3-5 years"]);
        assert_eq!(options.locations, vec!["SF", "NY"]);
    }

    #[test]
    fn test_clear_empties_store() {
        let repo = two_city_repo();
        repo.clear();
        let page = repo.query(&JobQuery::new());
        assert_eq!(page.total, 0);
        assert!(page.records.is_empty());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_seed_if_empty() {
        let repo = InMemoryJobRepo::new();
        assert!(repo.seed_if_empty(vec![titled("seed", "Seeded")]));
        assert_eq!(repo.len(), 1);

        assert!(!repo.seed_if_empty(vec![titled("other", "Ignored")]));
        assert_eq!(repo.len(), 1);
        assert!(repo.get_by_id("other").is_none());
    }
}
