// SPDX-License-Identifier: MIT OR Apache-2.0

//! Appending the caller's message and the line terminators.

use crate::Error;
use crate::decoration::Decorations;
use crate::level::Level;
use crate::log_line::LogLine;
use std::fmt;

/// Replaces a message whose arguments failed to format.
pub const FORMAT_FAILURE_TEXT: &str = "<logging error: msg too long>";

/// What happened while a message was composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Composition {
    /// The level to dispatch with.
    pub level: Level,
    /// Final line length, excluding the NUL.
    pub len: usize,
}

/**
Expands `args` after the prefix already in `line`, then terminates the line.

A failing argument discards whatever it had already written and the message
becomes [FORMAT_FAILURE_TEXT], dispatched at [Level::ERROR] whatever the
requested level was.  Overflow is not an error; the message is cut.
*/
pub(crate) fn compose<const N: usize>(
    line: &mut LogLine<N>,
    level: Level,
    args: fmt::Arguments<'_>,
    decorations: Decorations,
) -> Composition {
    let prefix_len = line.len();
    let level = match expand(line, args) {
        Ok(()) | Err(Error::BufferCapacityExceeded) => level,
        Err(_) => {
            line.truncate(prefix_len);
            line.push_str(FORMAT_FAILURE_TEXT);
            Level::ERROR
        }
    };
    let len = line.finish(
        decorations.contains(Decorations::CR),
        decorations.contains(Decorations::NEWLINE),
    );
    Composition { level, len }
}

fn expand<const N: usize>(line: &mut LogLine<N>, args: fmt::Arguments<'_>) -> Result<(), Error> {
    let was_truncated = line.is_truncated();
    fmt::write(line, args).map_err(|_| Error::FormatExpansionFailed)?;
    if line.is_truncated() && !was_truncated {
        return Err(Error::BufferCapacityExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Display;

    struct Failing;

    impl Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    fn text<const N: usize>(line: &mut LogLine<N>) -> String {
        String::from_utf8(line.line().as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn message_follows_prefix() {
        let mut line: LogLine = LogLine::new();
        line.push_str("NET:");
        let c = compose(&mut line, Level::INFO, format_args!("conn {} ok", 7), Decorations::NEWLINE);
        assert_eq!(text(&mut line), "NET:conn 7 ok\n");
        assert_eq!(c.len, 14);
        assert_eq!(c.level, Level::INFO);
    }

    #[test]
    fn failing_argument_is_replaced_and_escalated() {
        let mut line: LogLine = LogLine::new();
        line.push_str("NET:");
        let c = compose(
            &mut line,
            Level::VERBOSE,
            format_args!("value {}", Failing),
            Decorations::empty(),
        );
        assert_eq!(text(&mut line), "NET:<logging error: msg too long>");
        assert_eq!(c.level, Level::ERROR);
    }

    #[test]
    fn escalation_applies_to_fatal_too() {
        let mut line: LogLine = LogLine::new();
        let c = compose(&mut line, Level::FATAL, format_args!("{}", Failing), Decorations::empty());
        assert_eq!(c.level, Level::ERROR);
    }

    #[test]
    fn long_message_is_cut_to_capacity() {
        let mut line: LogLine<32> = LogLine::new();
        line.push_str("tag:");
        let long = "y".repeat(100);
        let c = compose(&mut line, Level::INFO, format_args!("{long}"), Decorations::empty());
        assert_eq!(c.len, 31);
        assert_eq!(text(&mut line), format!("tag:{}", "y".repeat(27)));
        assert_eq!(c.level, Level::INFO);
    }

    #[test]
    fn long_message_keeps_its_terminators() {
        let mut line: LogLine<32> = LogLine::new();
        let long = "y".repeat(100);
        let c = compose(
            &mut line,
            Level::INFO,
            format_args!("{long}"),
            Decorations::CR | Decorations::NEWLINE,
        );
        assert_eq!(c.len, 31);
        assert_eq!(text(&mut line), format!("{}\r\n", "y".repeat(29)));
        assert_eq!(line.line().as_bytes_with_nul()[31], 0);
    }

    #[test]
    fn failure_text_is_cut_when_prefix_is_long() {
        let mut line: LogLine<16> = LogLine::new();
        line.push_str("0123456789");
        compose(&mut line, Level::INFO, format_args!("{}", Failing), Decorations::NEWLINE);
        assert_eq!(text(&mut line), "0123456789<log\n");
    }

    #[test]
    fn empty_message_stays_empty() {
        let mut line: LogLine = LogLine::new();
        let c = compose(&mut line, Level::INFO, format_args!(""), Decorations::NEWLINE);
        assert_eq!(text(&mut line), "\n");
        assert_eq!(c.len, 1);
    }

    #[test]
    fn cr_precedes_newline() {
        let mut line: LogLine = LogLine::new();
        compose(
            &mut line,
            Level::INFO,
            format_args!("x"),
            Decorations::CR | Decorations::NEWLINE,
        );
        assert_eq!(text(&mut line), "x\r\n");
    }
}
