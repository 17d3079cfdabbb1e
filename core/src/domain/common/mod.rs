use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod ports;
pub mod services;

#[derive(Clone, Debug)]
pub struct SubtrackConfig {
    pub storage: StorageConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackendKind {
    File,
    Memory,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    pub data_dir: PathBuf,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Identifiers are opaque strings; freshly generated ones are UUID v7.
pub fn generate_id() -> String {
    generate_uuid_v7().to_string()
}
