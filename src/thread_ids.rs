// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process and thread identity for the thread-id decoration.

use crate::sys;

/// Supplies the identifiers rendered by [Decorations::THREAD_ID](crate::Decorations::THREAD_ID).
pub trait ThreadIds: Send + Sync {
    fn process_id(&self) -> u64;
    /// The OS-level id of the calling thread.
    fn thread_id(&self) -> u64;
}

/// Identifiers reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OsThreadIds;

impl ThreadIds for OsThreadIds {
    fn process_id(&self) -> u64 {
        sys::process_id()
    }

    fn thread_id(&self) -> u64 {
        sys::thread_id()
    }
}

/// Fixed identifiers, for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedThreadIds {
    pub process: u64,
    pub thread: u64,
}

impl FixedThreadIds {
    pub const fn new(process: u64, thread: u64) -> Self {
        Self { process, thread }
    }
}

impl ThreadIds for FixedThreadIds {
    fn process_id(&self) -> u64 {
        self.process
    }

    fn thread_id(&self) -> u64 {
        self.thread
    }
}
