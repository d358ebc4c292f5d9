use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentdesk_core::record::contains_lowercase;
use talentdesk_core::{
    DomainError, DomainResult, Entity, Record, RecordId, Searchable, Status, Validate,
};

/// Job posting lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Draft,
    Closed,
}

impl Status for JobStatus {
    const ALL: &'static [Self] = &[JobStatus::Active, JobStatus::Draft, JobStatus::Closed];

    fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Closed => "closed",
        }
    }
}

/// A job opening as held by the jobs store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "Id")]
    id: RecordId,
    title: String,
    company: String,
    description: String,
    status: JobStatus,
    created_at: DateTime<Utc>,
    #[serde(default)]
    applicants: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job_type: Option<String>,
}

impl Job {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn applicants(&self) -> u32 {
        self.applicants
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn required_skills(&self) -> Option<&str> {
        self.required_skills.as_deref()
    }

    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    /// Whether the posting still accepts applicants.
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Active
    }
}

impl Entity for Job {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Job {
    const KIND: &'static str = "job";

    type Draft = NewJob;
    type Patch = JobPatch;
    type Status = JobStatus;

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: NewJob) -> Self {
        Self {
            id,
            title: draft.title,
            company: draft.company,
            description: draft.description,
            status: draft.status,
            created_at,
            applicants: 0,
            location: draft.location,
            required_skills: draft.required_skills,
            job_type: draft.job_type,
        }
    }

    fn apply_patch(&mut self, patch: JobPatch) {
        let JobPatch {
            title,
            company,
            description,
            status,
            applicants,
            location,
            required_skills,
            job_type,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = company {
            self.company = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
        if let Some(v) = applicants {
            self.applicants = v;
        }
        if location.is_some() {
            self.location = location;
        }
        if required_skills.is_some() {
            self.required_skills = required_skills;
        }
        if job_type.is_some() {
            self.job_type = job_type;
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn status(&self) -> JobStatus {
        self.status
    }
}

impl Searchable for Job {
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&self.title, &self.company, &self.description]
            .into_iter()
            .any(|field| contains_lowercase(field, &needle))
            || [&self.location, &self.required_skills, &self.job_type]
                .into_iter()
                .flatten()
                .any(|field| contains_lowercase(field, &needle))
    }
}

/// Fields supplied when posting a new job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
}

impl NewJob {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            description: description.into(),
            status: JobStatus::default(),
            location: None,
            required_skills: None,
            job_type: None,
        }
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl Validate for NewJob {
    fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if self.company.trim().is_empty() {
            return Err(DomainError::validation("company cannot be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update of a job.
///
/// `id` and `createdAt` are not representable here; when a patch is decoded
/// from JSON those keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

impl JobPatch {
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
