//! Infrastructure layer: record storage, simulated-latency services, seeds, config.

pub mod config;
pub mod record_store;
pub mod seed;
pub mod service;
pub mod services;

pub use config::AppConfig;
pub use record_store::{InMemoryRecordStore, RecordStore};
pub use seed::SeedSource;
pub use service::{LatencyFacade, LatencyPolicy, RecordService};
pub use services::{CandidateService, JobService, Services};
