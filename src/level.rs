// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log severity.
//!
//! Levels are plain ordinals: 0 is the most severe and larger numbers are
//! progressively chattier. A message is emitted when its level is less than
//! or equal to the configured maximum.

use crate::Error;
use std::fmt::Display;

/// Labels for the conventional levels, indexed by ordinal.
const LABELS: [&str; 6] = ["F", "E", "W", "I", "D", "V"];

/// Rendered in place of a label when the level has none.
pub(crate) const UNKNOWN_LABEL: &str = "?";

/**
A log severity.

This wraps an `i32` rather than being an enum because the maximum level is a
free-form integer: callers may configure values outside `0..=5`, and a level
that has no label still has to be filterable and dispatchable.

```
use linelog::Level;

assert!(Level::FATAL < Level::VERBOSE);
assert_eq!(Level::INFO.label(), "I");
assert_eq!(Level::new(9).label(), "?");
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Level(i32);

impl Level {
    /// Fatal error.
    pub const FATAL: Level = Level(0);
    /// Error.  Formatting failures are escalated to this level.
    pub const ERROR: Level = Level(1);
    /// Warning.
    pub const WARN: Level = Level(2);
    /// Informational.
    pub const INFO: Level = Level(3);
    /// Debugging.
    pub const DEBUG: Level = Level(4);
    /// Verbose.
    pub const VERBOSE: Level = Level(5);

    /// The most verbose level with a label, and the default maximum level.
    pub const CEILING: Level = Level::VERBOSE;

    pub const fn new(raw: i32) -> Self {
        Level(raw)
    }

    /// The raw ordinal.
    pub const fn get(self) -> i32 {
        self.0
    }

    /**
    The single-character label for this level.

    Returns [Error::InvalidLevelIndex] for ordinals outside the label table.
    */
    pub fn try_label(self) -> Result<&'static str, Error> {
        usize::try_from(self.0)
            .ok()
            .and_then(|index| LABELS.get(index).copied())
            .ok_or(Error::InvalidLevelIndex(self.0))
    }

    /// The single-character label for this level, or `"?"` if it has none.
    pub fn label(self) -> &'static str {
        self.try_label().unwrap_or(UNKNOWN_LABEL)
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::CEILING
    }
}

impl From<i32> for Level {
    fn from(raw: i32) -> Self {
        Level(raw)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/*
Boilerplate notes for Level:

- Copy/Clone/Eq/Ord/Hash: derived, it's an integer.
- Ord follows the ordinal, so "more severe" compares as "less".
- Default: the ceiling, matching the default maximum level.
- Display: the label, which is what ends up in a line.
- From<i32> both ways so the macros accept bare integers.
*/
