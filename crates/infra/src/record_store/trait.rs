use std::sync::Arc;

use talentdesk_core::{DomainResult, Record, RecordId};

/// Synchronous CRUD over one record type.
///
/// Every record handed back is an owned copy; mutating it has no effect on
/// the store until it is passed back through [`RecordStore::update`].
///
/// `get`, `update` and `delete` fail with `DomainError::NotFound` when `id`
/// is absent, and leave the store untouched in that case.
pub trait RecordStore: Send + Sync {
    type Record: Record;

    /// Snapshot of every record, in insertion order.
    fn list(&self) -> Vec<Self::Record>;

    fn get(&self, id: RecordId) -> DomainResult<Self::Record>;

    /// Assign the next id, stamp the creation time and append.
    ///
    /// Fails with `DomainError::InvalidId` once the id space is used up.
    fn create(&self, draft: <Self::Record as Record>::Draft) -> DomainResult<Self::Record>;

    /// Merge `patch` over the stored record in place.
    fn update(
        &self,
        id: RecordId,
        patch: <Self::Record as Record>::Patch,
    ) -> DomainResult<Self::Record>;

    /// Remove the record and return it.
    fn delete(&self, id: RecordId) -> DomainResult<Self::Record>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    type Record = S::Record;

    fn list(&self) -> Vec<Self::Record> {
        (**self).list()
    }

    fn get(&self, id: RecordId) -> DomainResult<Self::Record> {
        (**self).get(id)
    }

    fn create(&self, draft: <Self::Record as Record>::Draft) -> DomainResult<Self::Record> {
        (**self).create(draft)
    }

    fn update(
        &self,
        id: RecordId,
        patch: <Self::Record as Record>::Patch,
    ) -> DomainResult<Self::Record> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: RecordId) -> DomainResult<Self::Record> {
        (**self).delete(id)
    }
}
