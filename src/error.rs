// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure modes of the formatting pipeline.
//!
//! None of these ever reach a caller of the logging entry points; each one is
//! recovered where it happens and at worst produces a degraded line. They are
//! public because the time adapter and [Level::try_label](crate::Level::try_label)
//! are usable on their own.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The wall clock could not be read.
    #[error("wall clock is unavailable")]
    ClockUnavailable,
    /// A time could not be converted between absolute and calendar form.
    #[error("time is outside the representable range")]
    TimeOutOfRange,
    /// A `Display` or `Debug` implementation reported an error while the
    /// message was expanded.
    #[error("message could not be formatted")]
    FormatExpansionFailed,
    /// The line buffer filled up and output was truncated.
    #[error("log line capacity exceeded")]
    BufferCapacityExceeded,
    /// A level outside the label table.
    #[error("no label for level {0}")]
    InvalidLevelIndex(i32),
}
