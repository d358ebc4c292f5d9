use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use talentdesk_core::{DomainResult, Entity, Record, RecordId};

use super::latency::{LatencyPolicy, Operation};
use crate::record_store::RecordStore;

/// Draft type of a service's record.
pub type DraftOf<S> = <<S as RecordService>::Record as Record>::Draft;

/// Patch type of a service's record.
pub type PatchOf<S> = <<S as RecordService>::Record as Record>::Patch;

/// Async CRUD over one record type.
///
/// Errors are the store's errors, unchanged. No retries happen here; retrying
/// is up to the caller.
#[async_trait]
pub trait RecordService: Send + Sync {
    type Record: Record;

    async fn get_all(&self) -> DomainResult<Vec<Self::Record>>;

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Self::Record>;

    async fn create(&self, draft: <Self::Record as Record>::Draft) -> DomainResult<Self::Record>;

    async fn update(
        &self,
        id: RecordId,
        patch: <Self::Record as Record>::Patch,
    ) -> DomainResult<Self::Record>;

    async fn delete(&self, id: RecordId) -> DomainResult<Self::Record>;
}

#[async_trait]
impl<S> RecordService for Arc<S>
where
    S: RecordService + ?Sized,
{
    type Record = S::Record;

    async fn get_all(&self) -> DomainResult<Vec<Self::Record>> {
        (**self).get_all().await
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<Self::Record> {
        (**self).get_by_id(id).await
    }

    async fn create(&self, draft: <Self::Record as Record>::Draft) -> DomainResult<Self::Record> {
        (**self).create(draft).await
    }

    async fn update(
        &self,
        id: RecordId,
        patch: <Self::Record as Record>::Patch,
    ) -> DomainResult<Self::Record> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: RecordId) -> DomainResult<Self::Record> {
        (**self).delete(id).await
    }
}

/// Wraps a store so every call waits out a fixed delay first.
///
/// The delay is awaited before the store is touched, so it elapses whether the
/// operation then succeeds or fails. Concurrent calls are timed independently;
/// the store lock is never held across the wait.
#[derive(Debug, Clone)]
pub struct LatencyFacade<S> {
    store: S,
    latency: LatencyPolicy,
}

impl<S> LatencyFacade<S> {
    pub fn new(store: S, latency: LatencyPolicy) -> Self {
        Self { store, latency }
    }

    /// Facade with no artificial delay.
    pub fn immediate(store: S) -> Self {
        Self::new(store, LatencyPolicy::zero())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn latency(&self) -> LatencyPolicy {
        self.latency
    }

    async fn pause(&self, op: Operation) {
        let delay = self.latency.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

fn record_kind<S: RecordStore>() -> &'static str {
    <S::Record as Record>::KIND
}

fn trace_outcome<T>(kind: &'static str, op: Operation, id: RecordId, result: &DomainResult<T>) {
    match result {
        Ok(_) => debug!(kind, op = op.as_str(), %id, "service call completed"),
        Err(e) => warn!(kind, op = op.as_str(), %id, error = %e, "service call failed"),
    }
}

#[async_trait]
impl<S> RecordService for LatencyFacade<S>
where
    S: RecordStore,
{
    type Record = S::Record;

    async fn get_all(&self) -> DomainResult<Vec<S::Record>> {
        self.pause(Operation::List).await;
        let records = self.store.list();
        debug!(
            kind = record_kind::<S>(),
            count = records.len(),
            "service list completed"
        );
        Ok(records)
    }

    async fn get_by_id(&self, id: RecordId) -> DomainResult<S::Record> {
        self.pause(Operation::Get).await;
        let result = self.store.get(id);
        trace_outcome(record_kind::<S>(), Operation::Get, id, &result);
        result
    }

    async fn create(&self, draft: <Self::Record as Record>::Draft) -> DomainResult<S::Record> {
        self.pause(Operation::Create).await;
        let record = self.store.create(draft)?;
        debug!(
            kind = record_kind::<S>(),
            id = %record.id(),
            "service create completed"
        );
        Ok(record)
    }

    async fn update(
        &self,
        id: RecordId,
        patch: <Self::Record as Record>::Patch,
    ) -> DomainResult<S::Record> {
        self.pause(Operation::Update).await;
        let result = self.store.update(id, patch);
        trace_outcome(record_kind::<S>(), Operation::Update, id, &result);
        result
    }

    async fn delete(&self, id: RecordId) -> DomainResult<S::Record> {
        self.pause(Operation::Delete).await;
        let result = self.store.delete(id);
        trace_outcome(record_kind::<S>(), Operation::Delete, id, &result);
        result
    }
}
