// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger: configuration plus the line pipeline.
//!
//! A call to [Logger::log] runs entirely on the calling thread:
//!
//! 1. The level is checked against the maximum.  A filtered message costs one
//!    uncontended read lock and nothing else; the clock is not read.
//! 2. The clock is read and decoded.  If that fails the line is rendered
//!    without time fields.
//! 3. The prefix is rendered into a stack [LogLine].
//! 4. The message and terminators are appended.  A failing argument replaces
//!    the message and raises the level to [Level::ERROR].
//! 5. The line goes to the sink, if there is one.
//!
//! Logging never fails and never panics on account of its input; the worst
//! case is a cut or degraded line.
//!
//! # Thread Safety
//!
//! Configuration lives behind a read-mostly spinlock.  A log call takes a
//! snapshot (level, decorations and an `Arc` of the sink) and releases the lock
//! before formatting, so setters never wait on a slow sink and a sink may itself
//! reconfigure the logger.  Lines from different threads are not ordered with
//! respect to each other.

use crate::compose;
use crate::config::LoggerConfig;
use crate::decorate;
use crate::decoration::Decorations;
use crate::level::Level;
use crate::log_line::{DEFAULT_LINE_CAPACITY, LogLine};
use crate::sink::Sink;
use crate::spinlock::Spinlock;
use crate::thread_ids::{OsThreadIds, ThreadIds};
use crate::time::{Clock, SystemClock};
use std::fmt;
use std::sync::Arc;

/**
A configured logger.

`N` is the line capacity including the trailing NUL; lines are built on the
stack, so keep it modest.

```
use linelog::{Decorations, Level, Logger, MemorySink};
use std::sync::Arc;

let sink = Arc::new(MemorySink::new());
let logger = Logger::new();
logger.set_decorations(Decorations::LEVEL_TEXT | Decorations::SENDER | Decorations::NEWLINE);
logger.set_sink(Some(sink.clone()));

logger.log("NET", Level::INFO, format_args!("conn {} ok", 7));
logger.log("NET", Level::VERBOSE, format_args!("chatter"));
logger.set_max_level(Level::INFO);
logger.log("NET", Level::VERBOSE, format_args!("filtered"));

assert_eq!(sink.drain_text(), "I NET:conn 7 ok\nV NET:chatter\n");
```
*/
pub struct Logger<const N: usize = DEFAULT_LINE_CAPACITY> {
    config: Spinlock<LoggerConfig>,
    clock: Box<dyn Clock>,
    ids: Box<dyn ThreadIds>,
}

impl Logger {
    /// A logger with the default configuration, the system clock and OS
    /// thread ids.
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }
}

impl<const N: usize> Logger<N> {
    pub fn with_config(config: LoggerConfig) -> Self {
        Self::with_parts(config, SystemClock, OsThreadIds)
    }

    /// A logger with a custom time source and thread identity.
    pub fn with_parts(
        config: LoggerConfig,
        clock: impl Clock + 'static,
        ids: impl ThreadIds + 'static,
    ) -> Self {
        Self {
            config: Spinlock::new(config),
            clock: Box::new(clock),
            ids: Box::new(ids),
        }
    }

    /// Sets the maximum level.  Not validated.
    pub fn set_max_level(&self, level: Level) {
        self.config.write().max_level = level;
    }

    pub fn max_level(&self) -> Level {
        self.config.read().max_level
    }

    pub fn set_decorations(&self, decorations: Decorations) {
        self.config.write().decorations = decorations;
    }

    pub fn decorations(&self) -> Decorations {
        self.config.read().decorations
    }

    /// Replaces the sink.  `None` discards lines.
    pub fn set_sink(&self, sink: Option<Arc<dyn Sink>>) {
        // drop the old sink outside the lock
        let _previous = std::mem::replace(&mut self.config.write().sink, sink);
    }

    pub fn sink(&self) -> Option<Arc<dyn Sink>> {
        self.config.read().sink.clone()
    }

    /// Replaces the whole configuration at once.
    pub fn set_config(&self, config: LoggerConfig) {
        let _previous = std::mem::replace(&mut *self.config.write(), config);
    }

    /// A snapshot of the current configuration.
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Whether a message at `level` would be rendered.
    pub fn is_enabled(&self, level: Level) -> bool {
        level <= self.max_level()
    }

    /**
    Formats and dispatches one message.

    `sender` is the tag rendered by [Decorations::SENDER].
    */
    pub fn log(&self, sender: &str, level: Level, args: fmt::Arguments<'_>) {
        let (decorations, sink) = {
            let config = self.config.read();
            if level > config.max_level {
                return;
            }
            (config.decorations, config.sink.clone())
        };

        let time = self
            .clock
            .now()
            .and_then(|now| self.clock.decode(now))
            .ok();

        let mut line = LogLine::<N>::new();
        decorate::assemble(
            &mut line,
            decorations,
            level,
            sender,
            time.as_ref(),
            self.ids.as_ref(),
        );
        let composition = compose::compose(&mut line, level, args, decorations);
        debug_assert_eq!(composition.len, line.len());

        if let Some(sink) = sink {
            sink.write_line(composition.level, line.line());
        }
    }

    /// Level-checked convenience form of [Logger::log].
    pub fn print(&self, tag: &str, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.log(tag, level, args);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Logger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("line_capacity", &N)
            .field("config", &*self.config.read())
            .finish_non_exhaustive()
    }
}

/*
Boilerplate notes.

# Logger

Clone is out: two loggers sharing one clock box makes no sense, share the
Logger through Arc or a static instead.
PartialEq/Eq/Hash: the sink and clock are trait objects, no meaningful equality.
Default: Logger::new.
Send/Sync: automatic, every part is Send + Sync.
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::memory_sink::MemorySink;
    use crate::thread_ids::FixedThreadIds;
    use crate::time::{AbsoluteTime, CalendarTime, FixedClock};
    use std::fmt::Display;

    fn fixed_time() -> CalendarTime {
        CalendarTime {
            year: 2024,
            month: 2,
            day: 1,
            weekday: 5,
            hour: 7,
            minute: 5,
            second: 9,
            millis: 123,
            daylight_saving: None,
        }
    }

    fn fixture(decorations: Decorations) -> (Logger, Arc<FixedClock>, Arc<MemorySink>) {
        let clock = Arc::new(FixedClock::new(fixed_time()));
        let sink = Arc::new(MemorySink::new());
        let config = LoggerConfig::default()
            .with_decorations(decorations)
            .with_sink(Some(sink.clone()));
        let logger = Logger::with_parts(config, clock.clone(), FixedThreadIds::new(77, 88));
        (logger, clock, sink)
    }

    fn net_decorations() -> Decorations {
        Decorations::TIME | Decorations::LEVEL_TEXT | Decorations::SENDER | Decorations::NEWLINE
    }

    struct Failing;

    impl Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn renders_the_documented_line() {
        let (logger, _clock, sink) = fixture(net_decorations());
        logger.log("NET", Level::INFO, format_args!("conn {} ok", 7));
        let records = sink.drain();
        assert_eq!(records.len(), 1);
        let (level, line) = &records[0];
        assert_eq!(*level, Level::INFO);
        assert_eq!(line, "07:05:09.123 I NET:conn 7 ok\n");
        assert_eq!(line.len(), 29);
    }

    #[test]
    fn filtered_levels_do_no_work() {
        let (logger, clock, sink) = fixture(net_decorations());
        logger.set_max_level(Level::WARN);
        logger.log("NET", Level::INFO, format_args!("conn {} ok", 7));
        logger.log("NET", Level::VERBOSE, format_args!("{}", Failing));
        assert_eq!(clock.reads(), 0);
        assert!(sink.is_empty());

        logger.log("NET", Level::WARN, format_args!("kept"));
        assert_eq!(clock.reads(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn formatting_failure_escalates_to_error() {
        let (logger, _clock, sink) = fixture(Decorations::LEVEL_TEXT | Decorations::SENDER);
        logger.log("NET", Level::DEBUG, format_args!("value {}", Failing));
        let records = sink.drain();
        assert_eq!(
            records,
            vec![(Level::ERROR, "D NET:<logging error: msg too long>".to_string())]
        );
    }

    #[test]
    fn filtered_failure_is_not_dispatched() {
        let (logger, _clock, sink) = fixture(net_decorations());
        logger.set_max_level(Level::INFO);
        logger.log("NET", Level::DEBUG, format_args!("{}", Failing));
        assert!(sink.is_empty());
    }

    #[test]
    fn no_sink_is_a_no_op() {
        let (logger, clock, _sink) = fixture(net_decorations());
        logger.set_sink(None);
        assert!(logger.sink().is_none());
        logger.log("NET", Level::INFO, format_args!("dropped"));
        assert_eq!(clock.reads(), 1);
    }

    #[test]
    fn clock_failure_drops_time_fields() {
        struct Broken;
        impl Clock for Broken {
            fn now(&self) -> Result<AbsoluteTime, Error> {
                Err(Error::ClockUnavailable)
            }
        }
        let sink = Arc::new(MemorySink::new());
        let config = LoggerConfig::default()
            .with_decorations(Decorations::all())
            .with_sink(Some(sink.clone()));
        let logger: Logger = Logger::with_parts(config, Broken, FixedThreadIds::new(1, 2));
        logger.log("NET", Level::INFO, format_args!("still here"));
        assert_eq!(sink.drain_text(), "     1       2 I NET:still here\r\n");
    }

    #[test]
    fn out_of_range_max_level_is_accepted() {
        let (logger, _clock, sink) = fixture(Decorations::LEVEL_TEXT);
        logger.set_max_level(Level::new(10));
        assert_eq!(logger.max_level(), Level::new(10));
        logger.log("", Level::new(8), format_args!(" deep"));
        assert_eq!(sink.drain(), vec![(Level::new(8), "? deep".to_string())]);
    }

    #[test]
    fn print_is_level_checked() {
        let (logger, clock, sink) = fixture(Decorations::SENDER);
        logger.set_max_level(Level::ERROR);
        logger.print("db", Level::WARN, format_args!("skipped"));
        logger.print("db", Level::FATAL, format_args!("down"));
        assert_eq!(clock.reads(), 1);
        assert_eq!(sink.drain(), vec![(Level::FATAL, "db:down".to_string())]);
    }

    #[test]
    fn sink_may_reconfigure_logger() {
        let logger: Arc<Logger> = Arc::new(Logger::with_parts(
            LoggerConfig::default().with_decorations(Decorations::empty()),
            FixedClock::new(fixed_time()),
            FixedThreadIds::default(),
        ));
        let weak = Arc::downgrade(&logger);
        let captured = Arc::new(MemorySink::new());
        let inner = captured.clone();
        logger.set_sink(Some(Arc::new(move |level: Level, line: crate::Line<'_>| {
            inner.write_line(level, line);
            if let Some(logger) = weak.upgrade() {
                logger.set_max_level(Level::FATAL);
            }
        })));
        logger.log("", Level::INFO, format_args!("first"));
        logger.log("", Level::INFO, format_args!("second"));
        assert_eq!(captured.drain_text(), "first");
    }

    #[test]
    fn small_capacity_lines_stay_bounded() {
        let sink = Arc::new(MemorySink::new());
        let config = LoggerConfig::default()
            .with_decorations(net_decorations())
            .with_sink(Some(sink.clone()));
        let logger: Logger<24> =
            Logger::with_parts(config, FixedClock::new(fixed_time()), FixedThreadIds::default());
        logger.log("NET", Level::INFO, format_args!("conn {} ok", 7));
        assert_eq!(sink.drain_text(), "07:05:09.123 I NET:con\n");
    }

    #[test]
    fn config_snapshot_and_replace() {
        let (logger, _clock, _sink) = fixture(net_decorations());
        let snapshot = logger.config();
        assert_eq!(snapshot.decorations, net_decorations());
        logger.set_config(LoggerConfig::default().with_max_level(Level::ERROR).with_sink(None));
        assert_eq!(logger.max_level(), Level::ERROR);
        assert_eq!(logger.decorations(), Decorations::default());
        assert!(logger.sink().is_none());
        assert!(!logger.is_enabled(Level::WARN));
    }
}
