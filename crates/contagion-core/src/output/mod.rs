//! Output Generation
//!
//! Full agent histories, per-tick population summaries, and writing either
//! one to disk.

pub mod full;
pub mod summary;

pub use full::*;
pub use summary::*;

use contagion_specs::{AgentSpec, SummarySpec};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::write_document;

/// Result of a run. Serializes as a bare JSON array of records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SimulationOutput {
    Full(Vec<AgentSpec>),
    Summary(Vec<SummarySpec>),
}

impl SimulationOutput {
    pub fn record_count(&self) -> usize {
        match self {
            SimulationOutput::Full(agents) => agents.len(),
            SimulationOutput::Summary(records) => records.len(),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write output as pretty JSON, zstd-compressed for `.zst` paths, creating
/// parent directories as needed
pub fn write_output(path: impl AsRef<Path>, output: &SimulationOutput) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_vec_pretty(output)?;
    write_document(path, &json).map_err(io_error)?;

    tracing::info!(path = %path.display(), records = output.record_count(), "Output written");
    Ok(())
}
