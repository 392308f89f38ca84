use anyhow::Result;
use docshelf_lib::Store;
use tracing::info;

use crate::output::{print_info, print_success};
use crate::prompts::confirm;

pub fn cmd_delete(store: &Store, collection: &str, resource: &str) -> Result<()> {
  let deleted = store.delete_record(collection, resource)?;

  info!(path = %deleted.path().display(), "deleted record");
  print_success(&format!("Deleted {}/{}", collection, resource));

  Ok(())
}

pub fn cmd_drop(store: &Store, collection: &str, force: bool) -> Result<()> {
  let count = store.list(collection)?.len();

  if !confirm(&format!("Drop collection {} ({} record(s))?", collection, count), force)? {
    print_info("Cancelled");
    return Ok(());
  }

  let deleted = store.delete_collection(collection)?;

  info!(path = %deleted.path().display(), records = count, "dropped collection");
  print_success(&format!("Dropped {} ({} record(s))", collection, count));

  Ok(())
}
