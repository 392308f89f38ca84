use anyhow::Result;
use docshelf_lib::Store;

use crate::output::{OutputFormat, print_json, print_record};

pub fn cmd_read(store: &Store, collection: &str, resource: &str, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    let record: serde_json::Value = store.read(collection, resource)?;
    print_json(&record)?;
  } else {
    print_record(&store.read_raw(collection, resource)?);
  }

  Ok(())
}

pub fn cmd_read_all(store: &Store, collection: &str, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    let records: Vec<serde_json::Value> = store.read_all_as(collection)?;
    print_json(&records)?;
  } else {
    for record in store.read_all(collection)? {
      print_record(&record);
    }
  }

  Ok(())
}
