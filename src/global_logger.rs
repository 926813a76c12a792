// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide logger used by the logging macros.
//!
//! The global logger is an ordinary [Logger] created on first use with the
//! default configuration: maximum level 5, [Decorations::default], writing to
//! stdout.  The functions here forward to it.
//!
//! # Thread Safety
//!
//! All functions are safe to call from any thread at any time.  Setters take
//! the configuration lock exclusively for the duration of one assignment; a
//! log call racing with a setter sees either the old or the new value, never a
//! mix within a single field.
//!
//! # Examples
//!
//! ```
//! use linelog::global_logger;
//! use linelog::{Decorations, Level, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! global_logger::set_sink(Some(sink.clone()));
//! global_logger::set_decorations(Decorations::LEVEL_TEXT | Decorations::SENDER);
//! global_logger::set_max_level(Level::INFO);
//!
//! linelog::info!("app", "ready in {} ms", 12);
//! linelog::debug!("app", "not shown");
//!
//! assert_eq!(sink.drain_text(), "I app:ready in 12 ms");
//! ```

use crate::decoration::Decorations;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::Sink;
use std::fmt;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The global logger, initialized with the default configuration on first use.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

/// Sets the maximum level of the global logger.  Not validated.
pub fn set_max_level(level: Level) {
    global_logger().set_max_level(level);
}

pub fn max_level() -> Level {
    global_logger().max_level()
}

pub fn set_decorations(decorations: Decorations) {
    global_logger().set_decorations(decorations);
}

pub fn decorations() -> Decorations {
    global_logger().decorations()
}

/// Replaces the global sink.  `None` discards lines.
pub fn set_sink(sink: Option<Arc<dyn Sink>>) {
    global_logger().set_sink(sink);
}

pub fn sink() -> Option<Arc<dyn Sink>> {
    global_logger().sink()
}

/// Whether the global logger would render a message at `level`.
pub fn is_enabled(level: Level) -> bool {
    global_logger().is_enabled(level)
}

/// Formats and dispatches one message through the global logger.
pub fn log(sender: &str, level: Level, args: fmt::Arguments<'_>) {
    global_logger().log(sender, level, args);
}

/// Level-checked convenience form of [log].
pub fn print(tag: &str, level: Level, args: fmt::Arguments<'_>) {
    global_logger().print(tag, level, args);
}
