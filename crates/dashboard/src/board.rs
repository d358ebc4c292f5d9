use tracing::{debug, warn};

use talentdesk_core::{
    DomainResult, Entity, Record, RecordId, Searchable, Status, Validate,
};
use talentdesk_infra::RecordService;
use talentdesk_infra::service::{DraftOf, PatchOf};

type StatusOf<S> = <<S as RecordService>::Record as Record>::Status;

/// What a page currently has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<R> {
    Loading,
    Ready(Vec<R>),
    /// Terminal until the user retries.
    Failed(String),
}

impl<R> LoadState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn records(&self) -> &[R] {
        match self {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }
}

/// How the local list catches up after a successful create.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AfterCreate {
    /// Insert the returned record at the top of the list.
    Prepend,
    /// Re-fetch the whole list.
    Reload,
}

/// Controller for one list page, backed by a [`RecordService`].
pub struct Board<S: RecordService> {
    service: S,
    state: LoadState<S::Record>,
    search: String,
    status_filter: Option<StatusOf<S>>,
    after_create: AfterCreate,
}

impl<S: RecordService> Board<S> {
    /// A board starts out loading; call [`Board::load`] to fetch.
    pub fn new(service: S, after_create: AfterCreate) -> Self {
        Self {
            service,
            state: LoadState::Loading,
            search: String::new(),
            status_filter: None,
            after_create,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn state(&self) -> &LoadState<S::Record> {
        &self.state
    }

    /// Every loaded record, unfiltered. Empty unless ready.
    pub fn records(&self) -> &[S::Record] {
        self.state.records()
    }

    /// Fetch the full list, replacing whatever was shown.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        self.state = match self.service.get_all().await {
            Ok(records) => {
                debug!(kind = kind::<S>(), count = records.len(), "board loaded");
                LoadState::Ready(records)
            }
            Err(e) => {
                warn!(kind = kind::<S>(), error = %e, "board failed to load");
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Re-run the initial load after a failure.
    pub async fn retry(&mut self) {
        self.load().await;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn status_filter(&self) -> Option<StatusOf<S>> {
        self.status_filter
    }

    /// `None` shows every status.
    pub fn set_status_filter(&mut self, status: Option<StatusOf<S>>) {
        self.status_filter = status;
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.status_filter.is_some()
    }

    /// Count of loaded records per status, in the status type's declared order.
    pub fn status_counts(&self) -> Vec<(StatusOf<S>, usize)> {
        let records = self.records();
        <StatusOf<S> as Status>::ALL
            .iter()
            .map(|status| {
                let count = records.iter().filter(|r| r.status() == *status).count();
                (*status, count)
            })
            .collect()
    }

    /// Apply the returned record over the local copy with the same id.
    pub async fn update(&mut self, id: RecordId, patch: PatchOf<S>) -> DomainResult<S::Record> {
        let updated = self.service.update(id, patch).await?;
        if let LoadState::Ready(records) = &mut self.state {
            if let Some(slot) = records.iter_mut().find(|r| r.id() == id) {
                *slot = updated.clone();
            }
        }
        Ok(updated)
    }

    /// Drop the local copy once the service confirms the delete.
    pub async fn delete(&mut self, id: RecordId) -> DomainResult<S::Record> {
        let removed = self.service.delete(id).await?;
        if let LoadState::Ready(records) = &mut self.state {
            records.retain(|r| r.id() != id);
        }
        Ok(removed)
    }
}

impl<S> Board<S>
where
    S: RecordService,
    S::Record: Searchable,
{
    /// Records matching the search term and status filter, in list order.
    pub fn visible(&self) -> Vec<&S::Record> {
        self.records()
            .iter()
            .filter(|r| self.status_filter.is_none_or(|s| r.status() == s))
            .filter(|r| r.matches_search(&self.search))
            .collect()
    }

    /// Loaded, but nothing passes the current filters.
    pub fn is_empty_view(&self) -> bool {
        matches!(self.state, LoadState::Ready(_)) && self.visible().is_empty()
    }
}

impl<S> Board<S>
where
    S: RecordService,
    DraftOf<S>: Validate,
{
    /// Validate and submit a draft, then bring the local list up to date.
    ///
    /// A validation failure never reaches the service.
    pub async fn create(&mut self, draft: DraftOf<S>) -> DomainResult<S::Record> {
        draft.validate()?;
        let created = self.service.create(draft).await?;

        match self.after_create {
            AfterCreate::Prepend => {
                if let LoadState::Ready(records) = &mut self.state {
                    records.insert(0, created.clone());
                }
            }
            AfterCreate::Reload => self.load().await,
        }
        Ok(created)
    }
}

fn kind<S: RecordService>() -> &'static str {
    <S::Record as Record>::KIND
}
