//! docshelf-lib: a small document store backed by JSON files.
//!
//! Records are grouped into collections; each collection is a directory under
//! the store root and each record is one `<resource>.json` file inside it.
//!
//! - `Store`: open a root and write, read, scan and delete records
//! - `LockRegistry`: one reader-writer lock per collection
//! - `Logger`: injectable diagnostic sink
//!
//! ```no_run
//! use docshelf_lib::{Options, Store};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!   name: String,
//! }
//!
//! let store = Store::open("./db", Options::default())?;
//! store.write("users", "a", &User { name: "A".into() })?;
//! let user: User = store.read("users", "a")?;
//! # Ok::<(), docshelf_lib::StoreError>(())
//! ```

pub mod codec;
pub mod error;
pub mod lock;
pub mod logger;
pub mod store;

pub use error::{Result, StoreError};
pub use lock::LockRegistry;
pub use logger::{ConsoleLogger, Logger, NullLogger};
pub use store::{Deleted, Options, Store};
