use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use talentdesk_core::{Clock, DomainError, DomainResult, Record, RecordId, SystemClock};

use super::r#trait::RecordStore;

#[derive(Debug)]
struct StoreState<R> {
    records: Vec<R>,
    /// Highest id ever held. Never decreases, so deleted ids are not reissued.
    last_id: RecordId,
}

impl<R: Record> StoreState<R> {
    fn position(&self, id: RecordId) -> DomainResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id))
    }
}

/// In-memory ordered record store.
///
/// Not optimized for performance: lookups are linear scans.
pub struct InMemoryRecordStore<R> {
    state: RwLock<StoreState<R>>,
    clock: Arc<dyn Clock>,
}

impl<R: Record> InMemoryRecordStore<R> {
    /// Empty store; the first record created gets id 1.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                records: Vec::new(),
                last_id: RecordId::new(0),
            }),
            clock: Arc::new(SystemClock),
        }
    }

    /// Store pre-populated with `seed`, kept in the given order.
    pub fn seeded(seed: Vec<R>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if !seen.insert(record.id()) {
                return Err(DomainError::DuplicateId {
                    kind: R::KIND,
                    id: record.id(),
                });
            }
        }

        let last_id = seed
            .iter()
            .map(|r| r.id())
            .max()
            .unwrap_or(RecordId::new(0));
        if last_id.next().is_none() {
            return Err(DomainError::invalid_id(format!(
                "{} seed id {last_id} leaves no room for new records",
                R::KIND
            )));
        }

        debug!(kind = R::KIND, count = seed.len(), %last_id, "record store seeded");

        Ok(Self {
            state: RwLock::new(StoreState {
                records: seed,
                last_id,
            }),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the clock used for creation timestamps.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    // Every mutation completes before its guard drops, so a poisoned lock
    // still holds a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, StoreState<R>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<R>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Record> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + core::fmt::Debug> core::fmt::Debug for InMemoryRecordStore<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("kind", &R::KIND)
            .field("state", &*self.read())
            .finish_non_exhaustive()
    }
}

impl<R: Record> RecordStore for InMemoryRecordStore<R> {
    type Record = R;

    fn list(&self) -> Vec<R> {
        self.read().records.clone()
    }

    fn get(&self, id: RecordId) -> DomainResult<R> {
        let state = self.read();
        let idx = state.position(id)?;
        Ok(state.records[idx].clone())
    }

    fn create(&self, draft: R::Draft) -> DomainResult<R> {
        let mut state = self.write();
        let id = state
            .last_id
            .next()
            .ok_or_else(|| DomainError::invalid_id(format!("{} ids exhausted", R::KIND)))?;
        let record = R::from_draft(id, self.clock.now(), draft);

        state.last_id = id;
        state.records.push(record.clone());

        debug!(kind = R::KIND, %id, "record created");
        Ok(record)
    }

    fn update(&self, id: RecordId, patch: R::Patch) -> DomainResult<R> {
        let mut state = self.write();
        let idx = state.position(id)?;

        let record = &mut state.records[idx];
        record.apply_patch(patch);

        debug!(kind = R::KIND, %id, "record updated");
        Ok(record.clone())
    }

    fn delete(&self, id: RecordId) -> DomainResult<R> {
        let mut state = self.write();
        let idx = state.position(id)?;
        let removed = state.records.remove(idx);

        debug!(kind = R::KIND, %id, "record deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use talentdesk_candidates::{Candidate, CandidatePatch, CandidateStatus, NewCandidate};
    use talentdesk_core::{Entity, FixedClock};
    use talentdesk_jobs::{Job, JobPatch, JobStatus, NewJob};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(test_time()))
    }

    fn seed_job(id: u64, title: &str) -> Job {
        Job::from_draft(
            RecordId::new(id),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            NewJob::new(title, "Acme", "Seeded opening"),
        )
    }

    fn job_store(seed: Vec<Job>) -> InMemoryRecordStore<Job> {
        InMemoryRecordStore::seeded(seed).unwrap().with_clock(clock())
    }

    #[test]
    fn create_on_empty_store_assigns_id_one() {
        let store: InMemoryRecordStore<Job> = InMemoryRecordStore::new().with_clock(clock());
        assert!(store.is_empty());

        let job = store.create(NewJob::new("A", "B", "C")).unwrap();
        assert_eq!(job.id(), RecordId::new(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn create_appends_with_next_id_and_store_timestamp() {
        let store = job_store(vec![seed_job(1, "A")]);

        let created = store
            .create(NewJob::new("B", "C", "D").with_status(JobStatus::Draft))
            .unwrap();

        assert_eq!(created.id(), RecordId::new(2));
        assert_eq!(created.title(), "B");
        assert_eq!(created.company(), "C");
        assert_eq!(created.description(), "D");
        assert_eq!(created.status(), JobStatus::Draft);
        assert_eq!(created.applicants(), 0);
        assert_eq!(created.created_at(), test_time());

        let titles: Vec<_> = store.list().iter().map(|j| j.title().to_string()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn get_after_create_returns_equal_record() {
        let store = job_store(vec![]);
        let created = store
            .create(NewJob::new("Platform Engineer", "Initech", "Kubernetes"))
            .unwrap();
        assert_eq!(store.get(created.id()).unwrap(), created);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = job_store(vec![]);
        let first = store.create(NewJob::new("A", "B", "C")).unwrap();
        assert_eq!(first.id(), RecordId::new(1));

        store.delete(first.id()).unwrap();
        let second = store.create(NewJob::new("A", "B", "C")).unwrap();
        assert_eq!(second.id(), RecordId::new(2));
    }

    #[test]
    fn deleting_highest_seed_id_does_not_recycle_it() {
        let store = job_store(vec![seed_job(1, "A"), seed_job(7, "B")]);
        store.delete(RecordId::new(7)).unwrap();
        assert_eq!(store.create(NewJob::new("C", "D", "E")).unwrap().id(), RecordId::new(8));
    }

    #[test]
    fn update_merges_status_and_keeps_everything_else() {
        let store = job_store(vec![seed_job(1, "A")]);
        let before = store.get(RecordId::new(1)).unwrap();

        let updated = store
            .update(RecordId::new(1), JobPatch::status(JobStatus::Closed))
            .unwrap();

        assert_eq!(updated.status(), JobStatus::Closed);
        assert_eq!(updated.id(), RecordId::new(1));
        assert_eq!(updated.title(), before.title());
        assert_eq!(updated.created_at(), before.created_at());
        assert_eq!(store.get(RecordId::new(1)).unwrap(), updated);
    }

    #[test]
    fn update_keeps_position_in_list() {
        let store = job_store(vec![seed_job(1, "A"), seed_job(2, "B"), seed_job(3, "C")]);
        store
            .update(
                RecordId::new(2),
                JobPatch {
                    title: Some("B2".into()),
                    ..JobPatch::default()
                },
            )
            .unwrap();

        let titles: Vec<_> = store.list().iter().map(|j| j.title().to_string()).collect();
        assert_eq!(titles, ["A", "B2", "C"]);
    }

    #[test]
    fn empty_patch_leaves_record_unchanged() {
        let store = job_store(vec![seed_job(1, "A")]);
        let before = store.get(RecordId::new(1)).unwrap();
        let after = store.update(RecordId::new(1), JobPatch::default()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_id_fails_with_not_found_and_leaves_store_unchanged() {
        let store = job_store(vec![seed_job(1, "A")]);
        let snapshot = store.list();
        let missing = RecordId::new(99);

        assert_eq!(
            store.get(missing).unwrap_err(),
            DomainError::not_found("job", missing)
        );
        assert!(store.update(missing, JobPatch::status(JobStatus::Closed)).unwrap_err().is_not_found());
        assert!(store.delete(missing).unwrap_err().is_not_found());
        assert_eq!(store.list(), snapshot);
    }

    #[test]
    fn delete_returns_removed_record() {
        let store = job_store(vec![seed_job(1, "A"), seed_job(2, "B")]);
        let removed = store.delete(RecordId::new(1)).unwrap();
        assert_eq!(removed.title(), "A");
        assert_eq!(store.len(), 1);
        assert!(store.get(RecordId::new(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn returned_records_are_detached_copies() {
        let store = job_store(vec![seed_job(1, "A")]);
        let mut copy = store.get(RecordId::new(1)).unwrap();
        copy.apply_patch(JobPatch::status(JobStatus::Closed));

        assert_eq!(store.get(RecordId::new(1)).unwrap().status(), JobStatus::Active);
    }

    #[test]
    fn seeded_rejects_duplicate_ids() {
        let err = InMemoryRecordStore::seeded(vec![seed_job(1, "A"), seed_job(1, "B")]).unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateId {
                kind: "job",
                id: RecordId::new(1)
            }
        );
    }

    #[test]
    fn seeded_rejects_top_of_id_space() {
        let err = InMemoryRecordStore::seeded(vec![seed_job(u64::MAX, "A")]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)), "{err}");

        let store = job_store(vec![seed_job(u64::MAX - 1, "A")]);
        let last = store.create(NewJob::new("B", "C", "D")).unwrap();
        assert_eq!(last.id(), RecordId::new(u64::MAX));

        let err = store.create(NewJob::new("E", "F", "G")).unwrap_err();
        assert_eq!(err, DomainError::invalid_id("job ids exhausted"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn candidate_store_stamps_applied_at() {
        let store: InMemoryRecordStore<Candidate> = InMemoryRecordStore::new().with_clock(clock());
        let c = store
            .create(NewCandidate::new("Ada", "ada@example.com", "Engineer"))
            .unwrap();
        assert_eq!(c.applied_at(), test_time());
        assert_eq!(c.status(), CandidateStatus::New);

        let hired = store
            .update(c.id(), CandidatePatch::status(CandidateStatus::Hired))
            .unwrap();
        assert_eq!(hired.applied_at(), test_time());
    }

    #[test]
    fn stores_are_independent_instances() {
        let a = job_store(vec![]);
        let b = job_store(vec![]);
        a.create(NewJob::new("A", "B", "C")).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
        assert_eq!(b.create(NewJob::new("A", "B", "C")).unwrap().id(), RecordId::new(1));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Create(String),
            Delete(usize),
            Touch(usize),
        }

        fn arb_op() -> impl Strategy<Value = Op> {
            prop_oneof![
                "[a-z]{1,8}".prop_map(Op::Create),
                (0usize..16).prop_map(Op::Delete),
                (0usize..16).prop_map(Op::Touch),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: ids are strictly increasing and never handed out twice.
            #[test]
            fn ids_strictly_increase(ops in proptest::collection::vec(arb_op(), 1..40)) {
                let store = job_store(vec![]);
                let mut issued: Vec<RecordId> = Vec::new();

                for op in ops {
                    match op {
                        Op::Create(title) => {
                            let job = store.create(NewJob::new(title, "Acme", "x")).unwrap();
                            if let Some(last) = issued.last() {
                                prop_assert!(job.id() > *last);
                            }
                            issued.push(job.id());
                        }
                        Op::Delete(pick) => {
                            let live = store.list();
                            if !live.is_empty() {
                                let id = live[pick % live.len()].id();
                                store.delete(id).unwrap();
                            }
                        }
                        Op::Touch(pick) => {
                            let live = store.list();
                            if !live.is_empty() {
                                let id = live[pick % live.len()].id();
                                store.update(id, JobPatch::default()).unwrap();
                            }
                        }
                    }
                }

                let live_ids: Vec<_> = store.list().iter().map(|j| j.id()).collect();
                let mut sorted = live_ids.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), live_ids.len());
            }

            /// Property: list is idempotent without intervening mutation.
            #[test]
            fn list_is_idempotent(titles in proptest::collection::vec("[A-Za-z]{1,12}", 0..10)) {
                let store = job_store(vec![]);
                for title in titles {
                    store.create(NewJob::new(title, "Acme", "x")).unwrap();
                }
                prop_assert_eq!(store.list(), store.list());
            }

            /// Property: unknown ids fail with NotFound and change nothing.
            #[test]
            fn unknown_ids_are_not_found(count in 0u64..8, unknown in 8u64..1000) {
                let store = job_store((1..=count).map(|i| seed_job(i, "seed")).collect());
                let before = store.list();
                let id = RecordId::new(unknown);

                prop_assert!(store.get(id).unwrap_err().is_not_found());
                prop_assert!(store.update(id, JobPatch::status(JobStatus::Closed)).unwrap_err().is_not_found());
                prop_assert!(store.delete(id).unwrap_err().is_not_found());
                prop_assert_eq!(store.list(), before);
            }
        }
    }
}
