// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wall-clock acquisition and calendar conversion.
//!
//! A log line needs the current time broken down into calendar fields.  The
//! [Clock] trait is the seam: [SystemClock] reads the real wall clock and
//! decodes it in the local timezone, [FixedClock] always reports the same
//! instant and is what you want in tests.
//!
//! ```
//! use linelog::time::{decode, encode, AbsoluteTime};
//!
//! let t = AbsoluteTime { seconds: 1_700_000_000, millis: 250 };
//! let calendar = decode(t).unwrap();
//! assert_eq!(calendar.millis, 250);
//! assert_eq!(encode(&calendar).unwrap(), t);
//! ```
//!
//! Failures here never stop a log call; the line is rendered without its
//! time fields instead.

use crate::Error;
use crate::sys;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch plus a millisecond fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AbsoluteTime {
    pub seconds: i64,
    /// 0-999.
    pub millis: u32,
}

/**
Decomposed local time.

Unlike C's `struct tm`, `year` is the actual year.  `month` is zero based.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarTime {
    pub year: i32,
    /// 0-11, zero is January.
    pub month: u32,
    /// 1-31.
    pub day: u32,
    /// 0-6, zero is Sunday.
    pub weekday: u32,
    /// 0-23.
    pub hour: u32,
    /// 0-59.
    pub minute: u32,
    /// 0-59.
    pub second: u32,
    /// 0-999.
    pub millis: u32,
    /// Whether daylight saving time was in effect, when known.  Carried
    /// through [encode] so that the repeated hour of a fall-back transition
    /// resolves to the right instant; `None` lets the platform decide.
    pub daylight_saving: Option<bool>,
}

/// Decodes `time` into calendar fields using the local timezone.
pub fn decode(time: AbsoluteTime) -> Result<CalendarTime, Error> {
    let fields = sys::local_time(time.seconds).ok_or(Error::TimeOutOfRange)?;
    let field = |value: i32| u32::try_from(value).map_err(|_| Error::TimeOutOfRange);
    Ok(CalendarTime {
        year: fields.year,
        month: field(fields.month)?,
        day: field(fields.day)?,
        weekday: field(fields.weekday)?,
        hour: field(fields.hour)?,
        minute: field(fields.minute)?,
        second: field(fields.second)?,
        millis: time.millis,
        daylight_saving: fields.daylight_saving,
    })
}

/**
Encodes calendar fields back into an absolute time using the local timezone.

`daylight_saving` picks between the two readings of an ambiguous wall time;
with `None` the platform decides from the date.  `weekday` is ignored and
`millis` is carried over unchanged.
*/
pub fn encode(calendar: &CalendarTime) -> Result<AbsoluteTime, Error> {
    let field = |value: u32| i32::try_from(value).map_err(|_| Error::TimeOutOfRange);
    let fields = sys::BrokenDown {
        year: calendar.year,
        month: field(calendar.month)?,
        day: field(calendar.day)?,
        weekday: 0,
        hour: field(calendar.hour)?,
        minute: field(calendar.minute)?,
        second: field(calendar.second)?,
        daylight_saving: calendar.daylight_saving,
    };
    let seconds = sys::make_time(&fields).ok_or(Error::TimeOutOfRange)?;
    Ok(AbsoluteTime {
        seconds,
        millis: calendar.millis,
    })
}

/**
A source of the current time.
*/
pub trait Clock: Send + Sync {
    /// Reads the current wall-clock time.
    fn now(&self) -> Result<AbsoluteTime, Error>;

    /// Decodes a time returned by [Clock::now].  Defaults to [decode].
    fn decode(&self, time: AbsoluteTime) -> Result<CalendarTime, Error> {
        decode(time)
    }
}

/// The real wall clock, decoded in the local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<AbsoluteTime, Error> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| Error::ClockUnavailable)?;
        let seconds = i64::try_from(elapsed.as_secs()).map_err(|_| Error::ClockUnavailable)?;
        Ok(AbsoluteTime {
            seconds,
            millis: elapsed.subsec_millis(),
        })
    }
}

/**
A clock stopped at a fixed calendar time.

Decoding ignores the timezone and returns the configured fields, so lines are
reproducible on any machine.  The number of reads is counted.

```
use linelog::time::{CalendarTime, Clock, FixedClock};

let clock = FixedClock::new(CalendarTime { hour: 7, minute: 5, ..Default::default() });
let now = clock.now().unwrap();
assert_eq!(clock.decode(now).unwrap().hour, 7);
assert_eq!(clock.reads(), 1);
```
*/
#[derive(Debug, Default)]
pub struct FixedClock {
    calendar: CalendarTime,
    reads: AtomicUsize,
}

impl FixedClock {
    pub fn new(calendar: CalendarTime) -> Self {
        Self {
            calendar,
            reads: AtomicUsize::new(0),
        }
    }

    /// How many times [Clock::now] has been called.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }

    pub fn calendar(&self) -> CalendarTime {
        self.calendar
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Result<AbsoluteTime, Error> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        Ok(AbsoluteTime {
            seconds: 0,
            millis: self.calendar.millis,
        })
    }

    fn decode(&self, _time: AbsoluteTime) -> Result<CalendarTime, Error> {
        Ok(self.calendar)
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Result<AbsoluteTime, Error> {
        (**self).now()
    }

    fn decode(&self, time: AbsoluteTime) -> Result<CalendarTime, Error> {
        (**self).decode(time)
    }
}
