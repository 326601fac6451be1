//! Error types for the dashboard core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown period {0:?} (expected one of 7D, 30D, 90D)")]
    UnknownPeriod(String),

    #[error("failed to create export directory {path:?}")]
    CreateExportDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write export file {path:?}")]
    WriteExport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
