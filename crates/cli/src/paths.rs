//! Store root resolution.
//!
//! Precedence: `--root`, then `DOCSHELF_ROOT`, then the platform data
//! directory (`$XDG_DATA_HOME/docshelf/db`, `~/.local/share/docshelf/db`, or
//! `%APPDATA%\docshelf\db`).

use std::env;
use std::path::PathBuf;

pub const APP_NAME: &str = "docshelf";

pub const ROOT_ENV: &str = "DOCSHELF_ROOT";

pub fn store_root(flag: Option<PathBuf>) -> PathBuf {
  if let Some(root) = flag {
    return root;
  }

  if let Some(root) = env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
    return PathBuf::from(root);
  }

  default_store_root()
}

pub fn default_store_root() -> PathBuf {
  data_dir().join("db")
}

/// Returns the directory for data files for the application
#[cfg(windows)]
pub fn data_dir() -> PathBuf {
  env::var_os("APPDATA")
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from("."))
    .join(APP_NAME)
}

/// Returns the directory for data files for the application
#[cfg(not(windows))]
pub fn data_dir() -> PathBuf {
  let data_home = env::var_os("XDG_DATA_HOME")
    .filter(|v| !v.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| home_dir().join(".local").join("share"));
  data_home.join(APP_NAME)
}

#[cfg(not(windows))]
fn home_dir() -> PathBuf {
  env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}
