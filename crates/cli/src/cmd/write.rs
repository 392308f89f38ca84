use std::io::{self, Read};

use anyhow::{Context, Result};
use docshelf_lib::Store;
use tracing::info;

use crate::output::print_success;

pub fn cmd_write(store: &Store, collection: &str, resource: &str, json: Option<String>) -> Result<()> {
  let raw = match json {
    Some(json) => json,
    None => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read record from stdin")?;
      buf
    }
  };

  let record: serde_json::Value = serde_json::from_str(&raw).context("Record is not valid JSON")?;
  store.write(collection, resource, &record)?;

  info!(collection = %collection, resource = %resource, "wrote record");
  print_success(&format!("Wrote {}/{}", collection, resource));

  Ok(())
}
