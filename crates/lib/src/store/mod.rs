//! Collection store.
//!
//! Records live as individual JSON files, one directory per collection.
//!
//! # Layout
//!
//! ```text
//! {root}/
//! ├── users/
//! │   ├── Johan.json          # One record per file
//! │   └── Erwin.json
//! └── orders/
//!     └── 1042.json.tmp       # Only present while a write is in flight
//! ```
//!
//! Writes and deletes take the collection's exclusive lock, reads and scans
//! take it shared. Writes go to a temp sibling first and are renamed into
//! place, so readers only ever see complete records.

pub mod paths;

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::error::{Result, StoreError};
use crate::lock::{self, LockRegistry};
use crate::logger::{ConsoleLogger, Logger};

use self::paths::{is_record_file, record_path, resolve, temp_path, validate_name};

/// Options for [`Store::open`].
#[derive(Debug, Clone)]
pub struct Options {
  pub logger: Arc<dyn Logger>,
}

impl Options {
  pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
    self.logger = Arc::new(logger);
    self
  }
}

impl Default for Options {
  fn default() -> Self {
    Self {
      logger: Arc::new(ConsoleLogger::default()),
    }
  }
}

/// What a delete removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deleted {
  /// A single record file.
  Record(PathBuf),
  /// A directory and everything beneath it.
  Collection(PathBuf),
}

impl Deleted {
  pub fn path(&self) -> &Path {
    match self {
      Deleted::Record(path) | Deleted::Collection(path) => path,
    }
  }
}

/// A document store rooted at one directory.
///
/// `Store` is `Send + Sync`; share it between threads by reference or
/// through an `Arc`.
#[derive(Debug)]
pub struct Store {
  root: PathBuf,
  locks: LockRegistry,
  logger: Arc<dyn Logger>,
}

impl Store {
  /// Open the store at `root`, creating the directory if it doesn't exist.
  pub fn open(root: impl AsRef<Path>, options: Options) -> Result<Self> {
    let mut root: PathBuf = root.as_ref().components().collect();
    if root.as_os_str().is_empty() {
      root.push(".");
    }
    let logger = options.logger;

    match fs::metadata(&root) {
      Ok(meta) if meta.is_dir() => {
        logger.debug(format_args!("Using '{}' (database already exists)", root.display()));
      }
      Ok(_) => {
        return Err(StoreError::CreateDir {
          path: root,
          source: io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        });
      }
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        logger.debug(format_args!("Creating the database at '{}'...", root.display()));
        fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
          path: root.clone(),
          source,
        })?;
      }
      Err(source) => return Err(StoreError::Read { path: root, source }),
    }

    Ok(Self {
      root,
      locks: LockRegistry::new(),
      logger,
    })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn logger(&self) -> &dyn Logger {
    self.logger.as_ref()
  }

  fn collection_dir(&self, collection: &str) -> PathBuf {
    self.root.join(collection)
  }

  /// Write `record` to `<collection>/<resource>.json`, replacing any previous
  /// version atomically.
  pub fn write<T: Serialize + ?Sized>(&self, collection: &str, resource: &str, record: &T) -> Result<()> {
    validate_name("collection", collection)?;
    validate_name("resource", resource)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::write(&lock);

    let dir = self.collection_dir(collection);
    fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
      path: dir.clone(),
      source,
    })?;

    let content = codec::encode(record)?;

    // A temp file left behind by a failed write is overwritten by the next
    // write of the same record.
    let temp = temp_path(&dir, resource);
    write_synced(&temp, &content)?;

    let target = record_path(&dir, resource);
    fs::rename(&temp, &target).map_err(|source| StoreError::Rename {
      from: temp,
      to: target,
      source,
    })
  }

  /// Read and decode a record.
  ///
  /// `resource` may be given with or without the `.json` extension.
  pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T> {
    let (path, content) = self.read_record(collection, resource)?;
    codec::decode(&content, &path)
  }

  /// Read a record's raw content without decoding it.
  pub fn read_raw(&self, collection: &str, resource: &str) -> Result<String> {
    let (path, content) = self.read_record(collection, resource)?;
    codec::into_text(content, &path)
  }

  fn read_record(&self, collection: &str, resource: &str) -> Result<(PathBuf, Vec<u8>)> {
    validate_name("collection", collection)?;
    validate_name("resource", resource)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::read(&lock);

    let (path, meta) = resolve(&self.collection_dir(collection).join(resource))?;
    if !meta.is_file() {
      return Err(StoreError::Unsupported { path });
    }

    let content = read_file(&path)?;
    Ok((path, content))
  }

  /// Returns true if the record exists, checking the name with and without
  /// the `.json` extension.
  pub fn exists(&self, collection: &str, resource: &str) -> Result<bool> {
    validate_name("collection", collection)?;
    validate_name("resource", resource)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::read(&lock);

    match resolve(&self.collection_dir(collection).join(resource)) {
      Ok(_) => Ok(true),
      Err(StoreError::NotFound(_)) => Ok(false),
      Err(e) => Err(e),
    }
  }

  /// Read the raw content of every record in a collection.
  ///
  /// Order follows the directory listing and is not sorted. Any unreadable
  /// record aborts the whole scan.
  pub fn read_all(&self, collection: &str) -> Result<Vec<String>> {
    Ok(self.scan(collection)?.into_iter().map(|(_, content)| content).collect())
  }

  /// Read and decode every record in a collection.
  pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
    self
      .scan(collection)?
      .into_iter()
      .map(|(path, content)| codec::decode(content.as_bytes(), &path))
      .collect()
  }

  fn scan(&self, collection: &str) -> Result<Vec<(PathBuf, String)>> {
    validate_name("collection", collection)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::read(&lock);

    let dir = self.existing_collection_dir(collection)?;
    let mut records = Vec::new();
    for path in record_files(&dir)? {
      let content = codec::into_text(read_file(&path)?, &path)?;
      records.push((path, content));
    }
    Ok(records)
  }

  /// Sorted resource names in a collection.
  pub fn list(&self, collection: &str) -> Result<Vec<String>> {
    validate_name("collection", collection)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::read(&lock);

    let dir = self.existing_collection_dir(collection)?;
    let mut names: Vec<String> = record_files(&dir)?
      .iter()
      .filter_map(|path| path.file_stem())
      .map(|stem| stem.to_string_lossy().into_owned())
      .collect();
    names.sort();
    Ok(names)
  }

  /// Sorted names of the collections under the root.
  pub fn collections(&self) -> Result<Vec<String>> {
    let entries = fs::read_dir(&self.root).map_err(|source| StoreError::Read {
      path: self.root.clone(),
      source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
      let entry = entry.map_err(|source| StoreError::Read {
        path: self.root.clone(),
        source,
      })?;
      let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
      if is_dir && let Some(name) = entry.file_name().to_str() {
        names.push(name.to_string());
      }
    }
    names.sort();
    Ok(names)
  }

  fn existing_collection_dir(&self, collection: &str) -> Result<PathBuf> {
    let (path, meta) = resolve(&self.collection_dir(collection))?;
    if !meta.is_dir() {
      return Err(StoreError::NotFound(self.collection_dir(collection)));
    }
    Ok(path)
  }

  /// Delete whatever `<collection>/<resource>` resolves to.
  ///
  /// A record file is removed on its own; a directory is removed with
  /// everything beneath it, so an empty `resource` drops the whole
  /// collection. Prefer [`Store::delete_record`] or
  /// [`Store::delete_collection`] when the intent is known.
  pub fn delete(&self, collection: &str, resource: &str) -> Result<Deleted> {
    validate_name("collection", collection)?;
    if !resource.is_empty() {
      validate_name("resource", resource)?;
    }

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::write(&lock);

    let mut target = self.collection_dir(collection);
    if !resource.is_empty() {
      target.push(resource);
    }

    let (path, meta) = resolve(&target)?;
    let file_type = meta.file_type();
    if file_type.is_dir() {
      remove_dir(&path)?;
      Ok(Deleted::Collection(path))
    } else if file_type.is_file() {
      remove_file(&path)?;
      Ok(Deleted::Record(path))
    } else {
      Err(StoreError::Unsupported { path })
    }
  }

  /// Delete a single record.
  pub fn delete_record(&self, collection: &str, resource: &str) -> Result<Deleted> {
    validate_name("collection", collection)?;
    validate_name("resource", resource)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::write(&lock);

    let (path, meta) = resolve(&self.collection_dir(collection).join(resource))?;
    if !meta.is_file() {
      return Err(StoreError::Unsupported { path });
    }
    remove_file(&path)?;
    Ok(Deleted::Record(path))
  }

  /// Delete a collection directory and every record in it.
  pub fn delete_collection(&self, collection: &str) -> Result<Deleted> {
    validate_name("collection", collection)?;

    let lock = self.locks.get_or_create(collection);
    let _guard = lock::write(&lock);

    let (path, meta) = resolve(&self.collection_dir(collection))?;
    if !meta.is_dir() {
      return Err(StoreError::Unsupported { path });
    }
    remove_dir(&path)?;
    Ok(Deleted::Collection(path))
  }
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
  let to_err = |source| StoreError::Write {
    path: path.to_path_buf(),
    source,
  };
  let mut file = File::create(path).map_err(to_err)?;
  file.write_all(content).map_err(to_err)?;
  file.sync_all().map_err(to_err)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
  fs::read(path).map_err(|source| StoreError::Read {
    path: path.to_path_buf(),
    source,
  })
}

/// Committed record files in `dir`. Temp files and subdirectories are skipped.
fn record_files(dir: &Path) -> Result<Vec<PathBuf>> {
  let to_err = |source| StoreError::Read {
    path: dir.to_path_buf(),
    source,
  };

  let mut files = Vec::new();
  for entry in fs::read_dir(dir).map_err(to_err)? {
    let entry = entry.map_err(to_err)?;
    let path = entry.path();
    if entry.file_type().map_err(to_err)?.is_file() && is_record_file(&path) {
      files.push(path);
    }
  }
  Ok(files)
}

fn remove_file(path: &Path) -> Result<()> {
  fs::remove_file(path).map_err(|source| StoreError::Remove {
    path: path.to_path_buf(),
    source,
  })
}

fn remove_dir(path: &Path) -> Result<()> {
  fs::remove_dir_all(path).map_err(|source| StoreError::Remove {
    path: path.to_path_buf(),
    source,
  })
}
