use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use talentdesk_core::record::contains_lowercase;
use talentdesk_core::{
    DomainError, DomainResult, Entity, Record, RecordId, Searchable, Status, Validate,
};

/// Where a candidate stands in the hiring pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStatus {
    #[default]
    New,
    Interviewed,
    Hired,
    Rejected,
}

impl CandidateStatus {
    /// Hired and rejected candidates have left the pipeline.
    pub fn is_terminal(self) -> bool {
        matches!(self, CandidateStatus::Hired | CandidateStatus::Rejected)
    }
}

impl Status for CandidateStatus {
    const ALL: &'static [Self] = &[
        CandidateStatus::New,
        CandidateStatus::Interviewed,
        CandidateStatus::Hired,
        CandidateStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::New => "new",
            CandidateStatus::Interviewed => "interviewed",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
        }
    }
}

/// An applicant as held by the candidates store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(alias = "Id")]
    id: RecordId,
    name: String,
    email: String,
    position: String,
    status: CandidateStatus,
    applied_at: DateTime<Utc>,
}

impl Candidate {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }
}

impl Entity for Candidate {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Record for Candidate {
    const KIND: &'static str = "candidate";

    type Draft = NewCandidate;
    type Patch = CandidatePatch;
    type Status = CandidateStatus;

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: NewCandidate) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            position: draft.position,
            status: draft.status,
            applied_at: created_at,
        }
    }

    fn apply_patch(&mut self, patch: CandidatePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.position {
            self.position = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    fn status(&self) -> CandidateStatus {
        self.status
    }
}

impl Searchable for Candidate {
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        needle.is_empty()
            || [&self.name, &self.email, &self.position]
                .into_iter()
                .any(|field| contains_lowercase(field, &needle))
    }
}

/// Fields supplied when adding a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub position: String,
    #[serde(default)]
    pub status: CandidateStatus,
}

impl NewCandidate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
            status: CandidateStatus::default(),
        }
    }

    pub fn with_status(mut self, status: CandidateStatus) -> Self {
        self.status = status;
        self
    }
}

impl Validate for NewCandidate {
    fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email cannot be empty"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email must contain '@'"));
        }
        if self.position.trim().is_empty() {
            return Err(DomainError::validation("position cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update of a candidate. `id` and `appliedAt` cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CandidateStatus>,
}

impl CandidatePatch {
    pub fn status(status: CandidateStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}
