//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# linelog

linelog is a small, embeddable logging front-end.  A message is a sender tag, a
level and a format string; linelog renders it into one bounded line of text
with whatever decorations are configured, and hands the finished line to a
replaceable sink.

```
linelog::info!("NET", "conn {} ok", 7);
```

With the default configuration this prints something like

```text
03-01 07:05:09.123    4242   4243 I NET:conn 7 ok
```

# The line

A line is assembled in a fixed-capacity stack buffer ([LogLine], 1024 bytes by
default, including a trailing NUL).  The fields come in a fixed order, each
present only when its [Decorations] flag is set:

| Flag          | Rendered as          | Notes                                                 |
|---------------|----------------------|-------------------------------------------------------|
| `YEAR`        | `2024`               |                                                       |
| `DATE`        | `03-01`              | preceded by `-` after the year                        |
| `TIME`        | `07:05:09.123`       | preceded by a space                                   |
| `THREAD_ID`   | `  4242   4243`      | process and OS thread id, 6 columns each              |
| `LEVEL_TEXT`  | `I`                  | `F E W I D V` for levels 0-5, `?` otherwise           |
| `SENDER`      | `NET:`               | at most 25 bytes of the tag                           |
| `CR`          | `\r`                 | after the message                                     |
| `NEWLINE`     | `\n`                 | after the message                                     |

Ids wider than six digits keep their *leading* six digits.  The layout is
positional and stable, so tools can parse lines by column.

Nothing here can fail from the caller's point of view:

* a message that does not fit is cut, and the terminators still end the line;
* a `Display` impl that returns an error replaces the message with
  `<logging error: msg too long>` and raises the line to [Level::ERROR];
* if the clock cannot be read the time fields are left out.

# Levels

Levels are integers, lower meaning more severe: fatal (0), error, warn, info,
debug, verbose (5).  A message is rendered when its level is at most the
configured maximum; anything above it is discarded before the clock is read or
the arguments are evaluated.

# Configuration

There are two ways to use linelog:

* the global logger, configured through [global_logger] and used by the
  [log!], [fatal!] .. [verbose!] macros;
* an explicit [Logger] value, used through [log_to!] or [Logger::log].  This
  is also where the clock and thread-id sources can be swapped for fixed ones.

```
use linelog::time::{CalendarTime, FixedClock};
use linelog::thread_ids::FixedThreadIds;
use linelog::{Decorations, Level, Logger, LoggerConfig, MemorySink};
use std::sync::Arc;

let sink = Arc::new(MemorySink::new());
let config = LoggerConfig::default()
    .with_decorations(Decorations::TIME | Decorations::LEVEL_TEXT | Decorations::SENDER | Decorations::NEWLINE)
    .with_sink(Some(sink.clone()));
let clock = FixedClock::new(CalendarTime { hour: 7, minute: 5, second: 9, millis: 123, ..Default::default() });
let logger: Logger = Logger::with_parts(config, clock, FixedThreadIds::default());

linelog::log_to!(logger, "NET", Level::INFO, "conn {} ok", 7);
assert_eq!(sink.drain_text(), "07:05:09.123 I NET:conn 7 ok\n");
```

# Multithreading

Logging is synchronous and happens on the calling thread.  Configuration is
protected by a read-mostly spinlock; lines from one thread reach the sink in
call order, lines from different threads in no particular order.  Sinks that
write to a shared device serialize access themselves ([StdoutSink] holds the
stdout lock for each line).
*/

mod compose;
mod config;
mod decorate;
mod decoration;
mod error;
pub mod global_logger;
mod level;
mod log_line;
mod logger;
mod macros;
mod memory_sink;
pub mod numeric;
mod sink;
mod spinlock;
mod stdout_sink;
mod sys;
pub mod thread_ids;
pub mod time;

pub use compose::FORMAT_FAILURE_TEXT;
pub use config::LoggerConfig;
pub use decoration::Decorations;
pub use error::Error;
pub use level::Level;
pub use log_line::{DEFAULT_LINE_CAPACITY, Line, LogLine};
pub use logger::Logger;
pub use memory_sink::MemorySink;
pub use sink::Sink;
pub use stdout_sink::StdoutSink;
