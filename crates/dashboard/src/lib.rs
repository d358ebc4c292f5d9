//! Page controllers for the recruiting dashboard.
//!
//! No rendering here: a [`Board`] owns the list a page shows and the
//! load / error / retry / search / filter / save / delete flow around it.

pub mod board;

pub use board::{AfterCreate, Board, LoadState};

use std::sync::Arc;

use talentdesk_candidates::Candidate;
use talentdesk_infra::{CandidateService, JobService, RecordService};
use talentdesk_jobs::Job;

pub type JobBoard = Board<Arc<JobService>>;
pub type CandidateBoard = Board<Arc<CandidateService>>;

/// Jobs page: a newly posted job is shown first without re-fetching.
pub fn job_board<S>(service: S) -> Board<S>
where
    S: RecordService<Record = Job>,
{
    Board::new(service, AfterCreate::Prepend)
}

/// Candidates page: the full list is re-fetched after adding a candidate.
pub fn candidate_board<S>(service: S) -> Board<S>
where
    S: RecordService<Record = Candidate>,
{
    Board::new(service, AfterCreate::Reload)
}
