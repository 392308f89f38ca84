use anyhow::Result;
use docshelf_lib::Store;
use serde::Serialize;

use crate::output::{OutputFormat, format_bytes, print_json, print_stat};

#[derive(Debug, Serialize)]
struct InfoOutput {
  root: String,
  collections: Vec<CollectionInfo>,
}

#[derive(Debug, Serialize)]
struct CollectionInfo {
  name: String,
  records: usize,
  bytes: u64,
}

pub fn cmd_info(store: &Store, output: OutputFormat) -> Result<()> {
  let root = dunce::canonicalize(store.root()).unwrap_or_else(|_| store.root().to_path_buf());

  let mut collections = Vec::new();
  for name in store.collections()? {
    let records = store.read_all(&name)?;
    collections.push(CollectionInfo {
      records: records.len(),
      bytes: records.iter().map(|r| r.len() as u64).sum(),
      name,
    });
  }

  if output.is_json() {
    return print_json(&InfoOutput {
      root: root.display().to_string(),
      collections,
    });
  }

  println!("Store: {}", root.display());
  println!("Collections: {}", collections.len());
  for c in &collections {
    print_stat(&c.name, &format!("{} record(s), {}", c.records, format_bytes(c.bytes)));
  }

  Ok(())
}
