//! Service wiring: one store + facade per record type.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use talentdesk_candidates::Candidate;
use talentdesk_core::{Clock, DomainResult, SystemClock};
use talentdesk_jobs::Job;

use crate::config::AppConfig;
use crate::record_store::InMemoryRecordStore;
use crate::seed::{EMBEDDED_CANDIDATES, EMBEDDED_JOBS};
use crate::service::{LatencyFacade, LatencyPolicy};

pub type JobService = LatencyFacade<Arc<InMemoryRecordStore<Job>>>;
pub type CandidateService = LatencyFacade<Arc<InMemoryRecordStore<Candidate>>>;

/// The two independent record services.
#[derive(Debug, Clone)]
pub struct Services {
    pub jobs: Arc<JobService>,
    pub candidates: Arc<CandidateService>,
}

impl Services {
    /// Build both services from configured seeds and latency.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let jobs = config.jobs_seed.load::<Job>(EMBEDDED_JOBS)?;
        let candidates = config
            .candidates_seed
            .load::<Candidate>(EMBEDDED_CANDIDATES)?;

        let services = Self::build(jobs, candidates, config.latency, Arc::new(SystemClock))
            .context("invalid seed data")?;

        info!(
            jobs = services.jobs.store().len(),
            candidates = services.candidates.store().len(),
            latency = ?config.latency,
            "services ready"
        );
        Ok(services)
    }

    /// Both services over the embedded datasets.
    pub fn in_memory(latency: LatencyPolicy) -> anyhow::Result<Self> {
        Self::from_config(&AppConfig {
            latency,
            ..AppConfig::default()
        })
    }

    /// Build both services from in-memory seeds.
    pub fn build(
        jobs: Vec<Job>,
        candidates: Vec<Candidate>,
        latency: LatencyPolicy,
        clock: Arc<dyn Clock>,
    ) -> DomainResult<Self> {
        let job_store = InMemoryRecordStore::seeded(jobs)?.with_clock(clock.clone());
        let candidate_store = InMemoryRecordStore::seeded(candidates)?.with_clock(clock);

        Ok(Self {
            jobs: Arc::new(LatencyFacade::new(Arc::new(job_store), latency)),
            candidates: Arc::new(LatencyFacade::new(Arc::new(candidate_store), latency)),
        })
    }
}
