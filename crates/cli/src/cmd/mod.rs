mod delete;
mod demo;
mod info;
mod list;
mod read;
mod write;

use std::path::Path;

use anyhow::{Context, Result};
use docshelf_lib::{ConsoleLogger, Options, Store};
use tracing::Level;

pub use delete::{cmd_delete, cmd_drop};
pub use demo::cmd_demo;
pub use info::cmd_info;
pub use list::cmd_list;
pub use read::{cmd_read, cmd_read_all};
pub use write::cmd_write;

pub fn open_store(root: &Path, verbose: bool) -> Result<Store> {
  let level = if verbose { Level::DEBUG } else { Level::INFO };
  let options = Options::default().with_logger(ConsoleLogger::new(level));
  Store::open(root, options).with_context(|| format!("Failed to open store at {}", root.display()))
}
