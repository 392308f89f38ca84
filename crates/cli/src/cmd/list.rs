use anyhow::Result;
use docshelf_lib::Store;
use serde::Serialize;

use crate::output::{OutputFormat, print_info, print_json};

#[derive(Debug, Serialize)]
struct ListOutput {
  #[serde(skip_serializing_if = "Option::is_none")]
  collection: Option<String>,
  names: Vec<String>,
}

pub fn cmd_list(store: &Store, collection: Option<&str>, output: OutputFormat) -> Result<()> {
  let names = match collection {
    Some(collection) => store.list(collection)?,
    None => store.collections()?,
  };

  if output.is_json() {
    return print_json(&ListOutput {
      collection: collection.map(str::to_string),
      names,
    });
  }

  if names.is_empty() {
    match collection {
      Some(collection) => print_info(&format!("No records in {}", collection)),
      None => print_info("No collections found"),
    }
    return Ok(());
  }

  for name in &names {
    println!("{}", name);
  }

  Ok(())
}
