// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.

use crate::decoration::Decorations;
use crate::level::Level;
use crate::sink::Sink;
use crate::stdout_sink::StdoutSink;
use std::fmt::Debug;
use std::sync::Arc;

/**
Everything a log call reads: the maximum level, the decorations and the sink.

```
use linelog::{Decorations, Level, LoggerConfig};

let config = LoggerConfig::default()
    .with_max_level(Level::WARN)
    .with_decorations(Decorations::TIME | Decorations::NEWLINE)
    .with_sink(None);
assert_eq!(config.max_level, Level::WARN);
assert!(config.sink.is_none());
```
*/
#[derive(Clone)]
pub struct LoggerConfig {
    /// Messages with a greater level are discarded before any work is done.
    /// Not validated; any `i32` is accepted.
    pub max_level: Level,
    pub decorations: Decorations,
    /// Where finished lines go.  `None` turns dispatch into a no-op.
    pub sink: Option<Arc<dyn Sink>>,
}

impl LoggerConfig {
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    pub fn with_decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    pub fn with_sink(mut self, sink: Option<Arc<dyn Sink>>) -> Self {
        self.sink = sink;
        self
    }
}

impl Default for LoggerConfig {
    /// Level [Level::CEILING], [Decorations::default], writing to stdout.
    fn default() -> Self {
        Self {
            max_level: Level::CEILING,
            decorations: Decorations::default(),
            sink: Some(Arc::new(StdoutSink::new())),
        }
    }
}

impl Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("max_level", &self.max_level)
            .field("decorations", &self.decorations)
            .field("sink", &self.sink.as_ref().map(|_| "dyn Sink"))
            .finish()
    }
}

/*
Boilerplate notes for LoggerConfig:

- Clone: derived; cloning shares the sink.
- Debug: manual, sinks are not Debug.
- PartialEq: not implemented, there is no sensible equality on `dyn Sink`.
*/
