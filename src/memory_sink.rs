// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! A sink that keeps every line it receives, for tests and for inspecting
//! output programmatically.
//!
//! ```rust
//! use linelog::{Decorations, Level, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::new();
//! logger.set_decorations(Decorations::SENDER | Decorations::NEWLINE);
//! logger.set_sink(Some(sink.clone()));
//!
//! linelog::log_to!(logger, "app", Level::WARN, "disk at {}%", 91);
//!
//! let records = sink.drain();
//! assert_eq!(records, vec![(Level::WARN, "app:disk at 91%\n".to_string())]);
//! ```

use crate::level::Level;
use crate::log_line::Line;
use crate::sink::Sink;
use std::sync::Mutex;

/// A sink that records `(level, line)` pairs in memory.
///
/// Lines are stored as text, with invalid UTF-8 (only possible when a message
/// was cut inside a character) replaced.
#[derive(Debug)]
pub struct MemorySink {
    records: Mutex<Vec<(Level, String)>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes
// - Default: Implemented with obvious zero-value (empty buffer)
// - Clone: NOT implemented - share through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - mutex state comparison is problematic
// - Send/Sync: Automatically implemented due to Mutex usage (required for Sink)

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// A copy of everything recorded so far.
    pub fn records(&self) -> Vec<(Level, String)> {
        self.lock().clone()
    }

    /// Takes everything recorded so far, leaving the sink empty.
    pub fn drain(&self) -> Vec<(Level, String)> {
        std::mem::take(&mut *self.lock())
    }

    /// Takes everything recorded so far as one string of concatenated lines.
    pub fn drain_text(&self) -> String {
        self.drain().into_iter().map(|(_, line)| line).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Level, String)>> {
        // a panicking test sink must not poison every later test
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, level: Level, line: Line<'_>) {
        let text = line.to_string_lossy().into_owned();
        self.lock().push((level, text));
    }
}
