// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering of the line prefix.
//!
//! Fields are rendered in a fixed order, each only when its flag is set:
//!
//! | Field      | Format                        | Leading separator (if anything precedes) |
//! |------------|-------------------------------|------------------------------------------|
//! | year       | `2024`                        | none, it is always first                 |
//! | date       | `03-01`                       | `-`                                      |
//! | time       | `07:05:09.123`                | one space                                |
//! | thread ids | `  1234  567890` (pid, tid)   | two spaces                               |
//! | level text | `I`                           | one space                                |
//! | sender     | `NET:`                        | one space                                |
//!
//! Tools parse these lines by position, so every byte of punctuation matters.

use crate::decoration::Decorations;
use crate::level::Level;
use crate::log_line::LogLine;
use crate::numeric;
use crate::thread_ids::ThreadIds;
use crate::time::CalendarTime;

/// Width of the process and thread id fields.
pub(crate) const THREAD_ID_WIDTH: usize = 6;

/// Senders longer than this are cut.
pub(crate) const SENDER_WIDTH: usize = 25;

/**
Renders the prefix for a message into `line`.

`time` is `None` when the clock could not be read; the year, date and time
fields are then left out.  Thread ids are only queried when
[Decorations::THREAD_ID] is set.
*/
pub(crate) fn assemble<const N: usize>(
    line: &mut LogLine<N>,
    decorations: Decorations,
    level: Level,
    sender: &str,
    time: Option<&CalendarTime>,
    ids: &dyn ThreadIds,
) {
    if let Some(time) = time {
        if decorations.contains(Decorations::YEAR) {
            line.push_decimal(u64::try_from(time.year).unwrap_or(0), 0, b' ');
        }
        if decorations.contains(Decorations::DATE) {
            if !line.is_empty() {
                line.push_byte(b'-');
            }
            line.push_decimal(u64::from(time.month) + 1, 2, b'0');
            line.push_byte(b'-');
            line.push_decimal(u64::from(time.day), 2, b'0');
        }
        if decorations.contains(Decorations::TIME) {
            if !line.is_empty() {
                line.push_byte(b' ');
            }
            line.push_decimal(u64::from(time.hour), 2, b'0');
            line.push_byte(b':');
            line.push_decimal(u64::from(time.minute), 2, b'0');
            line.push_byte(b':');
            line.push_decimal(u64::from(time.second), 2, b'0');
            line.push_byte(b'.');
            line.push_decimal(u64::from(time.millis), 3, b'0');
        }
    }
    if decorations.contains(Decorations::THREAD_ID) {
        if !line.is_empty() {
            line.push_str("  ");
        }
        push_id(line, ids.process_id());
        line.push_str("  ");
        push_id(line, ids.thread_id());
    }
    if decorations.contains(Decorations::LEVEL_TEXT) {
        if !line.is_empty() {
            line.push_byte(b' ');
        }
        line.push_str(level.label());
    }
    if decorations.contains(Decorations::SENDER) {
        if !line.is_empty() {
            line.push_byte(b' ');
        }
        line.push_str(clip(sender, SENDER_WIDTH));
        line.push_byte(b':');
    }
}

/// Pushes `id` into a [THREAD_ID_WIDTH] field: right aligned when short, the
/// leading digits only when long.
fn push_id<const N: usize>(line: &mut LogLine<N>, id: u64) {
    let mut digits = [0u8; numeric::MAX_DIGITS];
    let len = numeric::encode(id, &mut digits);
    if len <= THREAD_ID_WIDTH {
        for _ in len..THREAD_ID_WIDTH {
            line.push_byte(b' ');
        }
        line.push_bytes(&digits[..len]);
    } else {
        line.push_bytes(&digits[..THREAD_ID_WIDTH]);
    }
}

/// At most `max` bytes of `s`, backing off to a character boundary.
fn clip(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thread_ids::FixedThreadIds;
    use proptest::prelude::*;

    const IDS: FixedThreadIds = FixedThreadIds::new(4242, 98765);

    fn sample_time() -> CalendarTime {
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

    fn prefix(decorations: Decorations, level: Level, sender: &str) -> String {
        prefix_with(decorations, level, sender, Some(&sample_time()), &IDS)
    }

    fn prefix_with(
        decorations: Decorations,
        level: Level,
        sender: &str,
        time: Option<&CalendarTime>,
        ids: &dyn ThreadIds,
    ) -> String {
        let mut line: LogLine = LogLine::new();
        assemble(&mut line, decorations, level, sender, time, ids);
        String::from_utf8(line.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn no_decorations_render_nothing() {
        assert_eq!(prefix(Decorations::empty(), Level::INFO, "NET"), "");
        assert_eq!(
            prefix(Decorations::COLOR | Decorations::THREAD_SWITCH, Level::INFO, "NET"),
            ""
        );
    }

    #[test]
    fn each_field_alone() {
        assert_eq!(prefix(Decorations::YEAR, Level::INFO, "NET"), "2024");
        assert_eq!(prefix(Decorations::DATE, Level::INFO, "NET"), "03-01");
        assert_eq!(prefix(Decorations::TIME, Level::INFO, "NET"), "07:05:09.123");
        assert_eq!(
            prefix(Decorations::THREAD_ID, Level::INFO, "NET"),
            "  4242   98765"
        );
        assert_eq!(prefix(Decorations::LEVEL_TEXT, Level::WARN, "NET"), "W");
        assert_eq!(prefix(Decorations::SENDER, Level::INFO, "NET"), "NET:");
    }

    #[test]
    fn full_prefix_order_and_punctuation() {
        let all = Decorations::all();
        assert_eq!(
            prefix(all, Level::DEBUG, "NET"),
            "2024-03-01 07:05:09.123    4242   98765 D NET:"
        );
    }

    #[test]
    fn classic_default_prefix() {
        assert_eq!(
            prefix(Decorations::default(), Level::ERROR, "db"),
            "03-01 07:05:09.123    4242   98765 E db:"
        );
    }

    #[test]
    fn separators_depend_on_what_precedes() {
        assert_eq!(
            prefix(Decorations::YEAR | Decorations::TIME, Level::INFO, ""),
            "2024 07:05:09.123"
        );
        assert_eq!(
            prefix(Decorations::LEVEL_TEXT | Decorations::SENDER, Level::INFO, "NET"),
            "I NET:"
        );
        assert_eq!(
            prefix(Decorations::TIME | Decorations::THREAD_ID, Level::INFO, "NET"),
            "07:05:09.123    4242   98765"
        );
    }

    #[test]
    fn long_ids_keep_leading_digits() {
        let ids = FixedThreadIds::new(1234567, 10);
        assert_eq!(
            prefix_with(Decorations::THREAD_ID, Level::INFO, "", None, &ids),
            "123456      10"
        );
        let ids = FixedThreadIds::new(123456, u64::MAX);
        assert_eq!(
            prefix_with(Decorations::THREAD_ID, Level::INFO, "", None, &ids),
            "123456  184467"
        );
    }

    #[test]
    fn long_sender_is_cut_to_25() {
        let sender = "x".repeat(30);
        assert_eq!(
            prefix(Decorations::SENDER, Level::INFO, &sender),
            format!("{}:", "x".repeat(25))
        );
    }

    #[test]
    fn sender_cut_respects_characters() {
        // 24 ASCII bytes then a two-byte character straddling the limit
        let sender = format!("{}é", "a".repeat(24));
        assert_eq!(
            prefix(Decorations::SENDER, Level::INFO, &sender),
            format!("{}:", "a".repeat(24))
        );
    }

    #[test]
    fn unknown_level_gets_placeholder() {
        assert_eq!(prefix(Decorations::LEVEL_TEXT, Level::new(6), ""), "?");
        assert_eq!(prefix(Decorations::LEVEL_TEXT, Level::new(-3), ""), "?");
    }

    #[test]
    fn missing_time_skips_time_fields() {
        let decorations = Decorations::YEAR | Decorations::DATE | Decorations::TIME | Decorations::SENDER;
        assert_eq!(
            prefix_with(decorations, Level::INFO, "NET", None, &IDS),
            "NET:"
        );
    }

    #[test]
    fn ids_are_not_queried_unless_requested() {
        struct Panicking;
        impl ThreadIds for Panicking {
            fn process_id(&self) -> u64 {
                panic!("process id queried")
            }
            fn thread_id(&self) -> u64 {
                panic!("thread id queried")
            }
        }
        let d = Decorations::all() - Decorations::THREAD_ID;
        let rendered = prefix_with(d, Level::INFO, "NET", Some(&sample_time()), &Panicking);
        assert_eq!(rendered, "2024-03-01 07:05:09.123 I NET:");
    }

    #[test]
    fn prefix_never_overflows_a_small_line() {
        let mut line: LogLine<16> = LogLine::new();
        assemble(
            &mut line,
            Decorations::all(),
            Level::INFO,
            "NET",
            Some(&sample_time()),
            &IDS,
        );
        assert_eq!(line.as_bytes(), b"2024-03-01 07:0");
        assert!(line.is_truncated());
    }

    proptest! {
        #[test]
        fn id_field_is_always_six_wide(pid in any::<u64>(), tid in any::<u64>()) {
            let ids = FixedThreadIds::new(pid, tid);
            let rendered = prefix_with(Decorations::THREAD_ID, Level::INFO, "", None, &ids);
            prop_assert_eq!(rendered.len(), THREAD_ID_WIDTH * 2 + 2);
            let pid_text = pid.to_string();
            let expected = if pid_text.len() > THREAD_ID_WIDTH {
                pid_text[..THREAD_ID_WIDTH].to_string()
            } else {
                format!("{pid_text:>6}")
            };
            prop_assert_eq!(&rendered[..THREAD_ID_WIDTH], expected.as_str());
        }

        #[test]
        fn fields_appear_in_fixed_order(bits in 0u32..1024) {
            let decorations = Decorations::from_bits_truncate(bits);
            let rendered = prefix(decorations, Level::INFO, "SNDR");
            let markers = [
                (Decorations::YEAR, "2024"),
                (Decorations::DATE, "03-01"),
                (Decorations::TIME, "07:05:09.123"),
                (Decorations::THREAD_ID, "4242"),
                (Decorations::LEVEL_TEXT, " I"),
                (Decorations::SENDER, "SNDR:"),
            ];
            let mut last = 0;
            for (flag, marker) in markers {
                // level text may lead the line without its separator
                let found = rendered.find(marker).or_else(|| (marker == " I" && rendered.starts_with('I')).then_some(0));
                prop_assert_eq!(found.is_some(), decorations.contains(flag));
                if let Some(at) = found {
                    prop_assert!(at >= last);
                    last = at;
                }
            }
        }
    }
}
