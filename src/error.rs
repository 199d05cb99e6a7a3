//! Error types for the gutter refresh pipeline.
//!
//! The translator itself cannot fail; everything here comes from the
//! collaborators around it (diff source, rendering surface) or from loading
//! configuration and requests.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed error coming out of a host collaborator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GutterError {
    /// The diff collaborator could not produce line sets for the document.
    #[error("diff failed for '{document}': {source}")]
    Diff {
        document: String,
        #[source]
        source: BoxError,
    },

    /// The rendering collaborator rejected a clear or draw call.
    #[error("rendering '{category}' markers failed: {source}")]
    Render {
        category: String,
        #[source]
        source: BoxError,
    },

    #[error("config file read failed for '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{path}' is not valid: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("request file open failed for '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The request stream could not be read.
    #[error("reading requests failed: {0}")]
    Input(#[from] std::io::Error),

    /// A request line on the stdio front end could not be decoded.
    #[error("malformed request: {0}")]
    Request(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GutterError>;
