//! Name validation and on-disk path resolution.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::codec::{EXTENSION, TEMP_SUFFIX};
use crate::error::{Result, StoreError};

/// Reject names that are empty or that would escape the collection directory
/// once joined into a path.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
  if name.is_empty() {
    return Err(StoreError::InvalidArgument(format!("missing {kind} name")));
  }
  if name.contains('\0') {
    return Err(StoreError::InvalidArgument(format!("{kind} name contains a NUL byte")));
  }
  if name.contains('/') || name.contains('\\') {
    return Err(StoreError::InvalidArgument(format!(
      "{kind} name '{name}' contains a path separator"
    )));
  }

  let mut components = Path::new(name).components();
  match (components.next(), components.next()) {
    (Some(Component::Normal(_)), None) => Ok(()),
    _ => Err(StoreError::InvalidArgument(format!(
      "{kind} name '{name}' is not a plain file name"
    ))),
  }
}

/// `<collection_dir>/<resource>.json`
pub fn record_path(collection_dir: &Path, resource: &str) -> PathBuf {
  collection_dir.join(format!("{resource}.{EXTENSION}"))
}

/// `<collection_dir>/<resource>.json.tmp`
pub fn temp_path(collection_dir: &Path, resource: &str) -> PathBuf {
  collection_dir.join(format!("{resource}.{EXTENSION}{TEMP_SUFFIX}"))
}

/// Returns true if `path` names a committed record file.
pub fn is_record_file(path: &Path) -> bool {
  path.extension().is_some_and(|ext| ext == EXTENSION)
}

/// Dual existence resolution: check `path` as given, then with the record
/// extension appended. Returns the path that exists together with its
/// metadata.
///
/// Symlinks are not followed, so a link is reported as-is.
pub fn resolve(path: &Path) -> Result<(PathBuf, Metadata)> {
  match stat(path)? {
    Some(meta) => Ok((path.to_path_buf(), meta)),
    None => {
      let mut with_ext = path.as_os_str().to_os_string();
      with_ext.push(".");
      with_ext.push(EXTENSION);
      let with_ext = PathBuf::from(with_ext);
      match stat(&with_ext)? {
        Some(meta) => Ok((with_ext, meta)),
        None => Err(StoreError::NotFound(path.to_path_buf())),
      }
    }
  }
}

fn stat(path: &Path) -> Result<Option<Metadata>> {
  match fs::symlink_metadata(path) {
    Ok(meta) => Ok(Some(meta)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(source) => Err(StoreError::Read {
      path: path.to_path_buf(),
      source,
    }),
  }
}
