// SPDX-License-Identifier: MIT OR Apache-2.0

//! The set of optional fields rendered around each message.
//!
//! The bit values are stable so a configuration can be stored or passed around
//! as a plain `u32`.  The order of the set does not matter; the order of the
//! fields in a line is always year, date, time, thread ids, level text, sender,
//! message, terminators.

use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};

/**
A set of decoration flags.

```
use linelog::Decorations;

let d = Decorations::TIME | Decorations::SENDER | Decorations::NEWLINE;
assert!(d.contains(Decorations::SENDER));
assert!(!d.contains(Decorations::YEAR));
assert_eq!(d.bits(), 4 | 8 | 512);
```
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decorations(u32);

impl Decorations {
    /// Year, e.g. `2024`.
    pub const YEAR: Decorations = Decorations(1);
    /// Month and day, `MM-DD`.
    pub const DATE: Decorations = Decorations(2);
    /// Time of day, `HH:MM:SS.mmm`.
    pub const TIME: Decorations = Decorations(4);
    /// The sender tag followed by `:`.
    pub const SENDER: Decorations = Decorations(8);
    /// Reserved; renders nothing.
    pub const COLOR: Decorations = Decorations(16);
    /// Single-character level label.
    pub const LEVEL_TEXT: Decorations = Decorations(32);
    /// Process and thread identifiers.
    pub const THREAD_ID: Decorations = Decorations(64);
    /// Reserved; renders nothing.
    pub const THREAD_SWITCH: Decorations = Decorations(128);
    /// Carriage return after the message.
    pub const CR: Decorations = Decorations(256);
    /// Newline after the message.
    pub const NEWLINE: Decorations = Decorations(512);

    const ALL_BITS: u32 = 1023;

    pub const fn empty() -> Self {
        Decorations(0)
    }

    pub const fn all() -> Self {
        Decorations(Self::ALL_BITS)
    }

    /// Builds a set from raw bits, discarding bits that name no flag.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Decorations(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is also in `self`.
    pub const fn contains(self, other: Decorations) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Decorations) -> Self {
        Decorations(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Decorations) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Decorations) {
        self.0 &= !other.0;
    }
}

impl Default for Decorations {
    /// Date, time, sender, level text, thread ids and a trailing newline.
    fn default() -> Self {
        Decorations::DATE
            .union(Decorations::TIME)
            .union(Decorations::SENDER)
            .union(Decorations::LEVEL_TEXT)
            .union(Decorations::THREAD_ID)
            .union(Decorations::NEWLINE)
    }
}

impl BitOr for Decorations {
    type Output = Decorations;
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Decorations {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for Decorations {
    type Output = Decorations;
    fn bitand(self, rhs: Self) -> Self::Output {
        Decorations(self.0 & rhs.0)
    }
}

impl Sub for Decorations {
    type Output = Decorations;
    fn sub(self, rhs: Self) -> Self::Output {
        Decorations(self.0 & !rhs.0)
    }
}

impl From<Decorations> for u32 {
    fn from(decorations: Decorations) -> Self {
        decorations.0
    }
}
