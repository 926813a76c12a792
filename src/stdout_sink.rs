// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Level;
use crate::log_line::Line;
use crate::sink::Sink;

/**
The default sink: writes each line to stdout, byte for byte.

No formatting is added; the line already carries whatever terminators the
decorations asked for.  Write errors are dropped, since there is nowhere left
to report them.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdoutSink;

// Stateless: every instance writes to the same stdout, so all of them compare
// equal. No Display, there is nothing to show.

impl StdoutSink {
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, _level: Level, line: Line<'_>) {
        use std::io::Write;
        // one lock per line keeps lines from interleaving mid-line
        let mut lock = std::io::stdout().lock();
        let _ = lock.write_all(line.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_line::LogLine;

    #[test]
    fn writes_without_panicking() {
        let mut line: LogLine = LogLine::new();
        line.push_str("stdout sink test line");
        line.finish(false, true);
        StdoutSink::new().write_line(Level::INFO, line.line());
    }

    #[test]
    fn instances_are_interchangeable() {
        assert_eq!(StdoutSink::new(), StdoutSink::default());
    }
}
