//! JSON encoding for records.
//!
//! Records are stored as tab-indented JSON followed by a single newline, so
//! files stay readable and diff cleanly.

use std::path::Path;

use serde::Serialize;
use serde::de::{DeserializeOwned, Error as _};
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, StoreError};

/// File extension of record files, without the leading dot.
pub const EXTENSION: &str = "json";

/// Suffix appended to a record path while it is being written.
pub const TEMP_SUFFIX: &str = ".tmp";

const INDENT: &[u8] = b"\t";

/// Serialize `value` into the on-disk record format.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
  let mut buf = Vec::with_capacity(128);
  let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
  value.serialize(&mut serializer).map_err(StoreError::Serialize)?;
  buf.push(b'\n');
  Ok(buf)
}

/// Deserialize record content read from `path`.
///
/// `path` is only used to label the error.
pub fn decode<T: DeserializeOwned>(content: &[u8], path: &Path) -> Result<T> {
  serde_json::from_slice(content).map_err(|source| StoreError::Decode {
    path: path.to_path_buf(),
    source,
  })
}

/// Convert raw record bytes to text. Content that is not UTF-8 cannot be a
/// JSON record, so it is reported as a decode failure.
pub fn into_text(content: Vec<u8>, path: &Path) -> Result<String> {
  String::from_utf8(content).map_err(|e| StoreError::Decode {
    path: path.to_path_buf(),
    source: serde_json::Error::custom(e),
  })
}
