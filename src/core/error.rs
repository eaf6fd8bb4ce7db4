use std::io;

use thiserror::Error;

/// Errors raised by the version store and the template splicer.
///
/// Commands surface these through `anyhow`, which keeps the full chain when
/// a page read or a malformed store aborts a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading or writing a page, fragment, or store file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The stored version does not split into two dot-separated integers.
    #[error("malformed version '{0}': expected MAJOR.MINOR")]
    MalformedVersion(String),

    /// A block's start marker was found but its end marker never follows,
    /// so the block boundary cannot be trusted.
    #[error("found start marker '{start}' but no end marker '{end}' after it")]
    MarkerMismatch { start: String, end: String },
}
