//! Error taxonomy.
//!
//! `InvalidTransition` is the only condition surfaced to wizard callers; every
//! absent lookup inside the engine degrades to a documented default instead of
//! propagating. The remaining variants belong to the CLI boundary (stdin
//! request, table bundle files).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::wizard::Stage;

#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A stage guard failed. Recoverable: the message tells the user what the
    /// current stage still requires.
    #[error("cannot leave stage '{stage}': {reason}")]
    InvalidTransition { stage: Stage, reason: &'static str },

    #[error("failed to read request: {0}")]
    RequestRead(#[from] io::Error),

    #[error("failed to parse request JSON: {0}")]
    RequestParse(#[from] serde_json::Error),

    #[error("failed to read table bundle from {path}: {source}")]
    TablesRead { path: PathBuf, source: io::Error },

    #[error("failed to parse table bundle: {0}")]
    TablesParse(String),
}
