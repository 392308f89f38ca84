//! Error types for store operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Store`](crate::store::Store) operations.
///
/// Every filesystem failure keeps the offending path and the underlying
/// [`io::Error`] as its source, so callers can tell a failed directory
/// creation apart from a failed rename.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("unable to find file or directory named {}", .0.display())]
  NotFound(PathBuf),

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to serialize record: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to write {}: {source}", path.display())]
  Write {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
  Rename {
    from: PathBuf,
    to: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to read {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to remove {}: {source}", path.display())]
  Remove {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to decode record {}: {source}", path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("unsupported file type at {}", path.display())]
  Unsupported { path: PathBuf },
}

impl StoreError {
  /// Returns true if the error means the collection or record does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(self, StoreError::NotFound(_))
  }
}

pub type Result<T> = std::result::Result<T, StoreError>;
