//! Document Loading
//!
//! Reads the behaviour, belief and agent documents from plain JSON files.

use std::path::{Path, PathBuf};

use contagion_specs::{AgentSpec, BehaviourSpec, BeliefSpec};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::codec::read_document;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Paths to the three input documents
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub agents: PathBuf,
    pub beliefs: PathBuf,
    pub behaviours: PathBuf,
}

/// Parsed but unlinked input documents
#[derive(Debug, Clone)]
pub struct InputDocuments {
    pub behaviours: Vec<BehaviourSpec>,
    pub beliefs: Vec<BeliefSpec>,
    pub agents: Vec<AgentSpec>,
}

impl InputDocuments {
    /// Load behaviours, then beliefs, then agents
    pub fn load(paths: &InputPaths) -> Result<Self, LoadError> {
        tracing::info!("Loading behaviours");
        let behaviours = read_json(&paths.behaviours)?;
        tracing::info!("Loading beliefs");
        let beliefs = read_json(&paths.beliefs)?;
        tracing::info!("Loading agents");
        let agents = read_json(&paths.agents)?;
        Ok(Self {
            behaviours,
            beliefs,
            agents,
        })
    }
}

/// Read and deserialize one JSON document, zstd-compressed if it ends in `.zst`
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, LoadError> {
    let path = path.as_ref();
    let content = read_document(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
