// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform primitives: local time conversion and process/thread identity.
//!
//! On unix these go through `libc`.  Elsewhere local time comes from the `time`
//! crate's local offset and the thread id is unavailable (reported as 0).

/// Broken-down local time as the C library reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BrokenDown {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub weekday: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// `None` when unknown; on encode, the C library decides.
    pub daylight_saving: Option<bool>,
}

#[cfg(unix)]
fn from_tm(tm: &libc::tm) -> Option<BrokenDown> {
    Some(BrokenDown {
        year: tm.tm_year.checked_add(1900)?,
        month: tm.tm_mon,
        day: tm.tm_mday,
        weekday: tm.tm_wday,
        hour: tm.tm_hour,
        minute: tm.tm_min,
        second: tm.tm_sec,
        daylight_saving: (tm.tm_isdst >= 0).then_some(tm.tm_isdst > 0),
    })
}

#[cfg(unix)]
pub(crate) fn local_time(seconds: i64) -> Option<BrokenDown> {
    let t = libc::time_t::try_from(seconds).ok()?;
    // SAFETY: an all-zero `tm` is a valid value; the `tm_zone` pointer is only
    // written by localtime_r, never read by us.
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    // SAFETY: both pointers refer to live locals for the duration of the call.
    let result = unsafe { libc::localtime_r(&t, &mut tm) };
    if result.is_null() {
        return None;
    }
    from_tm(&tm)
}

#[cfg(unix)]
pub(crate) fn make_time(fields: &BrokenDown) -> Option<i64> {
    // SAFETY: see local_time.
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    tm.tm_year = fields.year.checked_sub(1900)?;
    tm.tm_mon = fields.month;
    tm.tm_mday = fields.day;
    tm.tm_hour = fields.hour;
    tm.tm_min = fields.minute;
    tm.tm_sec = fields.second;
    tm.tm_isdst = match fields.daylight_saving {
        Some(true) => 1,
        Some(false) => 0,
        None => -1,
    };
    // SAFETY: `tm` is a live, initialized local.
    let t = unsafe { libc::mktime(&mut tm) };
    if t == -1 {
        // -1 is both the error value and one second before the epoch; on
        // success mktime has normalized `tm` to exactly that instant.
        let before_epoch = local_time(-1)?;
        return (from_tm(&tm)? == before_epoch).then_some(-1);
    }
    Some(i64::from(t))
}

#[cfg(not(unix))]
fn local_offset(at: ::time::OffsetDateTime) -> ::time::UtcOffset {
    ::time::UtcOffset::local_offset_at(at).unwrap_or(::time::UtcOffset::UTC)
}

#[cfg(not(unix))]
pub(crate) fn local_time(seconds: i64) -> Option<BrokenDown> {
    let utc = ::time::OffsetDateTime::from_unix_timestamp(seconds).ok()?;
    let local = utc.to_offset(local_offset(utc));
    Some(BrokenDown {
        year: local.year(),
        month: i32::from(u8::from(local.month())) - 1,
        day: i32::from(local.day()),
        weekday: i32::from(local.weekday().number_days_from_sunday()),
        hour: i32::from(local.hour()),
        minute: i32::from(local.minute()),
        second: i32::from(local.second()),
        daylight_saving: None,
    })
}

#[cfg(not(unix))]
pub(crate) fn make_time(fields: &BrokenDown) -> Option<i64> {
    let narrow = |value: i32| u8::try_from(value).ok();
    let month = ::time::Month::try_from(narrow(fields.month.checked_add(1)?)?).ok()?;
    let date = ::time::Date::from_calendar_date(fields.year, month, narrow(fields.day)?).ok()?;
    let clock = ::time::Time::from_hms(
        narrow(fields.hour)?,
        narrow(fields.minute)?,
        narrow(fields.second)?,
    )
    .ok()?;
    let wall = ::time::PrimitiveDateTime::new(date, clock);
    // the offset in effect near that wall time; off by the DST shift only
    // inside a transition
    let offset = local_offset(wall.assume_utc());
    Some(wall.assume_offset(offset).unix_timestamp())
}

pub(crate) fn process_id() -> u64 {
    u64::from(std::process::id())
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn thread_id() -> u64 {
    // SAFETY: gettid takes no arguments and cannot fail.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    u64::try_from(tid).unwrap_or(0)
}

#[cfg(all(unix, not(any(target_os = "linux", target_os = "android"))))]
pub(crate) fn thread_id() -> u64 {
    // SAFETY: pthread_self cannot fail.
    (unsafe { libc::pthread_self() }) as usize as u64
}

#[cfg(not(unix))]
pub(crate) fn thread_id() -> u64 {
    0
}
