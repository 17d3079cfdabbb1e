use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use subtrack_core::domain::common::{StorageBackendKind, StorageConfig, SubtrackConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "subtrack", version, about = "Device subscription tracker API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    File,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    #[arg(
        long = "storage-backend",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageBackendArg::File
    )]
    pub backend: StorageBackendArg,

    /// Directory holding one JSON file per stored key.
    #[arg(long = "data-dir", env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<StorageBackendArg> for StorageBackendKind {
    fn from(value: StorageBackendArg) -> Self {
        match value {
            StorageBackendArg::File => StorageBackendKind::File,
            StorageBackendArg::Memory => StorageBackendKind::Memory,
        }
    }
}

impl From<Args> for SubtrackConfig {
    fn from(value: Args) -> Self {
        SubtrackConfig {
            storage: StorageConfig {
                backend: value.storage.backend.into(),
                data_dir: value.storage.data_dir,
            },
        }
    }
}
