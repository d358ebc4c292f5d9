//! Candidates domain module (applicants moving through the hiring pipeline).

pub mod candidate;

pub use candidate::{Candidate, CandidatePatch, CandidateStatus, NewCandidate};
