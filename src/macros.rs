// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging macros.
//!
//! Each macro checks the level before anything else, so the format arguments
//! are neither evaluated nor formatted when the message would be discarded:
//!
//! ```rust
//! fn expensive() -> String {
//!     panic!("never called");
//! }
//! linelog::global_logger::set_max_level(linelog::Level::WARN);
//! linelog::verbose!("app", "state: {}", expensive());
//! ```
//!
//! | Macro        | Level |
//! |--------------|-------|
//! | [fatal!]     | 0     |
//! | [error!]     | 1     |
//! | [warn!]      | 2     |
//! | [info!]      | 3     |
//! | [debug!]     | 4     |
//! | [verbose!]   | 5     |
//!
//! [log!] takes the level as an argument and [log_to!] logs through an
//! explicit [Logger](crate::Logger) instead of the global one.

/**
Logs through the global logger at an explicit level.

The level may be a [Level](crate::Level) or a bare `i32`.

```rust
linelog::log!("net", 3, "connected to {}", "10.0.0.1");
linelog::log!("net", linelog::Level::WARN, "retrying");
```
*/
#[macro_export]
macro_rules! log {
    ($sender:expr, $level:expr, $($arg:tt)+) => {{
        let __linelog_level: $crate::Level = ::core::convert::Into::into($level);
        if $crate::global_logger::is_enabled(__linelog_level) {
            $crate::global_logger::log($sender, __linelog_level, ::core::format_args!($($arg)+));
        }
    }};
}

/**
Logs through a specific [Logger](crate::Logger).

```rust
let logger = linelog::Logger::new();
logger.set_sink(None);
linelog::log_to!(logger, "db", linelog::Level::INFO, "{} rows", 12);
```
*/
#[macro_export]
macro_rules! log_to {
    ($logger:expr, $sender:expr, $level:expr, $($arg:tt)+) => {{
        let __linelog_logger = &$logger;
        let __linelog_level: $crate::Level = ::core::convert::Into::into($level);
        if __linelog_logger.is_enabled(__linelog_level) {
            __linelog_logger.log($sender, __linelog_level, ::core::format_args!($($arg)+));
        }
    }};
}

/// Logs a fatal error (level 0) through the global logger.
#[macro_export]
macro_rules! fatal {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::FATAL, $($arg)+)
    };
}

/// Logs an error (level 1) through the global logger.
#[macro_export]
macro_rules! error {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::ERROR, $($arg)+)
    };
}

/// Logs a warning (level 2) through the global logger.
#[macro_export]
macro_rules! warn {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::WARN, $($arg)+)
    };
}

/// Logs an informational message (level 3) through the global logger.
#[macro_export]
macro_rules! info {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::INFO, $($arg)+)
    };
}

/// Logs a debugging message (level 4) through the global logger.
#[macro_export]
macro_rules! debug {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::DEBUG, $($arg)+)
    };
}

/// Logs a verbose message (level 5) through the global logger.
#[macro_export]
macro_rules! verbose {
    ($sender:expr, $($arg:tt)+) => {
        $crate::log!($sender, $crate::Level::VERBOSE, $($arg)+)
    };
}
