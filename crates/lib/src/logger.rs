//! Injectable diagnostic sink.
//!
//! The store only reports through a [`Logger`], so embedding applications can
//! route its messages wherever they like. [`ConsoleLogger`] forwards to
//! `tracing`, which is what the `shelf` binary installs a subscriber for.

use std::fmt;

use tracing::Level;

/// Leveled message sink.
///
/// Messages are passed pre-formatted as [`fmt::Arguments`]; use
/// `format_args!` at the call site.
pub trait Logger: fmt::Debug + Send + Sync {
  fn fatal(&self, args: fmt::Arguments<'_>);
  fn error(&self, args: fmt::Arguments<'_>);
  fn warn(&self, args: fmt::Arguments<'_>);
  fn info(&self, args: fmt::Arguments<'_>);
  fn debug(&self, args: fmt::Arguments<'_>);
  fn trace(&self, args: fmt::Arguments<'_>);
}

/// Logger that forwards messages at or above a threshold to `tracing`.
///
/// `fatal` has no `tracing` counterpart and is emitted as an error event with
/// a `fatal = true` field.
///
/// Nothing reaches the console until the embedding program installs a
/// `tracing` subscriber (the `shelf` binary does so in `main`). Without one
/// every event is discarded, whatever the threshold.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
  max_level: Level,
}

impl ConsoleLogger {
  pub fn new(max_level: Level) -> Self {
    Self { max_level }
  }

  pub fn max_level(&self) -> Level {
    self.max_level
  }

  /// `tracing` orders levels by verbosity, so TRACE is the greatest.
  fn enabled(&self, level: Level) -> bool {
    level <= self.max_level
  }
}

impl Default for ConsoleLogger {
  fn default() -> Self {
    Self::new(Level::INFO)
  }
}

impl Logger for ConsoleLogger {
  fn fatal(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::ERROR) {
      tracing::error!(fatal = true, "{}", args);
    }
  }

  fn error(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::ERROR) {
      tracing::error!("{}", args);
    }
  }

  fn warn(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::WARN) {
      tracing::warn!("{}", args);
    }
  }

  fn info(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::INFO) {
      tracing::info!("{}", args);
    }
  }

  fn debug(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::DEBUG) {
      tracing::debug!("{}", args);
    }
  }

  fn trace(&self, args: fmt::Arguments<'_>) {
    if self.enabled(Level::TRACE) {
      tracing::trace!("{}", args);
    }
  }
}

/// Logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
  fn fatal(&self, _: fmt::Arguments<'_>) {}
  fn error(&self, _: fmt::Arguments<'_>) {}
  fn warn(&self, _: fmt::Arguments<'_>) {}
  fn info(&self, _: fmt::Arguments<'_>) {}
  fn debug(&self, _: fmt::Arguments<'_>) {}
  fn trace(&self, _: fmt::Arguments<'_>) {}
}
