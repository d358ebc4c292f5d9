//! Async record services.
//!
//! `RecordService` is what callers (page controllers) program against.
//! `LatencyFacade` implements it over any `RecordStore`, delaying every call
//! so loading states are exercised the way a remote API would exercise them.

pub mod facade;
pub mod latency;

pub use facade::{DraftOf, LatencyFacade, PatchOf, RecordService};
pub use latency::{LatencyPolicy, Operation};
