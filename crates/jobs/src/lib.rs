//! Jobs domain module (job openings).
//!
//! Pure record definitions: no storage, no timers.

pub mod job;

pub use job::{Job, JobPatch, JobStatus, NewJob};
