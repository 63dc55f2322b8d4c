//! CLI error types.

use std::{io, path::PathBuf};

use dicekeys_api::RequestError;
use dicekeys_core::DiceKeyError;
use thiserror::Error;

/// Errors that end a CLI invocation.
#[derive(Error, Debug)]
pub enum CliError {
    /// DiceKey could not be read.
    #[error("invalid DiceKey: {0}")]
    DiceKey(#[from] DiceKeyError),

    /// Request could not be decoded, or was not authorized.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Face reads file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Face reads file is not a JSON array of face reads.
    #[error("invalid face reads in {}: {source}", path.display())]
    FaceReads {
        /// File that failed
        path: PathBuf,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Neither or both of a DiceKey form and a face reads file were given.
    #[error("pass exactly one of a human-readable DiceKey or --face-reads")]
    AmbiguousDiceKeySource,

    /// Writing output failed.
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}
