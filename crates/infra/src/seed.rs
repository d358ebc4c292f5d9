//! Static seed datasets.
//!
//! A seed is a JSON array of records in their wire shape. Each store is
//! seeded once, at construction.

use std::path::PathBuf;

use anyhow::Context;
use serde::de::DeserializeOwned;

use talentdesk_core::Record;

/// Jobs dataset bundled with the crate.
pub const EMBEDDED_JOBS: &str = include_str!("../seed/jobs.json");

/// Candidates dataset bundled with the crate.
pub const EMBEDDED_CANDIDATES: &str = include_str!("../seed/candidates.json");

/// Where a store's seed records come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SeedSource {
    /// The dataset compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file on disk.
    File(PathBuf),
    /// Start empty.
    Empty,
}

impl SeedSource {
    /// Load records, falling back to `embedded` for [`SeedSource::Embedded`].
    pub fn load<R>(&self, embedded: &str) -> anyhow::Result<Vec<R>>
    where
        R: Record + DeserializeOwned,
    {
        match self {
            SeedSource::Embedded => parse_records(embedded)
                .with_context(|| format!("failed to parse embedded {} seed", R::KIND)),
            SeedSource::File(path) => {
                let text = std::fs::read_to_string(path).with_context(|| {
                    format!("failed to read {} seed file at {:?}", R::KIND, path)
                })?;
                parse_records(&text).with_context(|| {
                    format!("failed to parse {} seed file at {:?}", R::KIND, path)
                })
            }
            SeedSource::Empty => Ok(Vec::new()),
        }
    }
}

/// Parse a JSON array of records.
pub fn parse_records<R: DeserializeOwned>(json: &str) -> serde_json::Result<Vec<R>> {
    serde_json::from_str(json)
}
