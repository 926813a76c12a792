// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Level;
use crate::log_line::Line;

/**
The destination of finished lines.

A sink receives the level the line was dispatched at (which may have been
escalated from the requested level) and the line itself.  It is called on the
logging thread, synchronously, and possibly from several threads at once; a
sink writing to a shared device is responsible for serializing access to it.

Any `Fn(Level, Line<'_>) + Send + Sync` closure is a sink:

```
use linelog::{Level, Line, Logger};
use std::sync::Arc;

let logger = Logger::new();
logger.set_sink(Some(Arc::new(|level: Level, line: Line<'_>| {
    eprint!("[{}] {}", level.get(), line.to_string_lossy());
})));
```
*/
pub trait Sink: Send + Sync {
    /**
    Writes one line.

    The line borrow ends when this returns; sinks that keep the text must
    copy it.
    */
    fn write_line(&self, level: Level, line: Line<'_>);
}

impl<F> Sink for F
where
    F: Fn(Level, Line<'_>) + Send + Sync,
{
    fn write_line(&self, level: Level, line: Line<'_>) {
        self(level, line)
    }
}

/*
Boilerplate notes.

# Sink

Sink deliberately does not require Debug, unlike most traits here, so that
closures qualify.  Clone makes no sense on a trait object; sinks are shared
through Arc.
*/
