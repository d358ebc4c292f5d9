//! Record trait: what a store needs to know about the entities it holds.

use chrono::{DateTime, Utc};

use crate::entity::Entity;
use crate::error::DomainResult;
use crate::id::RecordId;

/// A closed status enumeration.
pub trait Status: Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// Lowercase wire name.
    fn as_str(&self) -> &'static str;
}

/// A record held by a store.
///
/// The store owns id assignment and the creation timestamp, so neither is
/// part of [`Record::Draft`] or [`Record::Patch`].
pub trait Record: Entity<Id = RecordId> + Clone + Send + Sync + 'static {
    /// Short label used in errors and logs (e.g. `"job"`).
    const KIND: &'static str;

    /// Caller-supplied fields for a new record.
    type Draft: Send + 'static;

    /// Partial update; absent fields keep their current value.
    type Patch: Send + 'static;

    type Status: Status;

    /// Build the stored record from a draft.
    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Shallow-merge `patch` over this record.
    ///
    /// Must never change `id()` or `created_at()`.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn created_at(&self) -> DateTime<Utc>;

    fn status(&self) -> Self::Status;
}

/// Free-text search over a record's text fields.
pub trait Searchable {
    /// Case-insensitive substring match. An empty (or blank) term matches.
    fn matches_search(&self, term: &str) -> bool;
}

/// Required-field checks run on drafts before they are submitted.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// Case-insensitive `haystack.contains(needle)` where `needle` is already lowercase.
pub fn contains_lowercase(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
