//! Drives both boards end to end against the seeded in-memory services.

use anyhow::Context;
use tracing::info;

use talentdesk_candidates::{CandidatePatch, CandidateStatus, NewCandidate};
use talentdesk_core::{Entity, Record, Status};
use talentdesk_dashboard::{candidate_board, job_board};
use talentdesk_infra::{AppConfig, Services};
use talentdesk_jobs::{JobPatch, JobStatus, NewJob};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    talentdesk_observability::init(config.log_format, &config.log_filter);

    info!(version = env!("CARGO_PKG_VERSION"), "starting talentdesk");

    let services = Services::from_config(&config)?;

    let mut jobs = job_board(services.jobs.clone());
    jobs.load().await;
    if let Some(err) = jobs.state().error() {
        anyhow::bail!("jobs failed to load: {err}");
    }
    for (status, count) in jobs.status_counts() {
        info!(status = status.as_str(), count, "jobs by status");
    }
    let open = jobs.records().iter().filter(|job| job.is_open()).count();
    info!(open, "jobs accepting applicants");

    let posted = jobs
        .create(
            NewJob::new(
                "Staff Rust Engineer",
                "TalentDesk",
                "Own the storage layer and its tooling.",
            )
            .with_status(JobStatus::Draft)
            .with_location("Remote"),
        )
        .await
        .context("posting job")?;
    info!(id = %posted.id(), title = posted.title(), "posted job");

    jobs.update(posted.id(), JobPatch::status(JobStatus::Active))
        .await
        .context("publishing job")?;

    jobs.set_search("engineer");
    info!(matches = jobs.visible().len(), "jobs matching \"engineer\"");

    jobs.delete(posted.id()).await.context("removing job")?;
    info!(remaining = jobs.records().len(), "removed posted job");

    let mut candidates = candidate_board(services.candidates.clone());
    candidates.load().await;
    if let Some(err) = candidates.state().error() {
        anyhow::bail!("candidates failed to load: {err}");
    }

    let added = candidates
        .create(NewCandidate::new(
            "Alex Morgan",
            "alex.morgan@example.com",
            "Staff Rust Engineer",
        ))
        .await
        .context("adding candidate")?;
    candidates
        .update(added.id(), CandidatePatch::status(CandidateStatus::Interviewed))
        .await
        .context("moving candidate")?;

    let in_pipeline = candidates
        .records()
        .iter()
        .filter(|c| !c.status().is_terminal())
        .count();
    info!(in_pipeline, "candidates still in the pipeline");

    candidates.set_status_filter(Some(CandidateStatus::Interviewed));
    for candidate in candidates.visible() {
        info!(id = %candidate.id(), name = candidate.name(), "interviewed");
    }

    info!(
        jobs = services.jobs.store().len(),
        candidates = services.candidates.store().len(),
        "done"
    );
    Ok(())
}
