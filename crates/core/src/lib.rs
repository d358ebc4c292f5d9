//! Shared building blocks for the recruiting records.
//!
//! This crate contains **pure domain** primitives (no storage, no timers).

pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use record::{Record, Searchable, Status, Validate};
