// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A read-mostly spinlock for logger configuration.

Every log call reads the configuration and setters almost never run, so
readers share the lock and a writer takes it exclusively.  Critical sections
are a copy or an `Arc` clone long; nothing blocks while holding the lock.
*/

use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

const UNLOCKED: u8 = 0;
//we allow for 254 readers or 1 writer (val = 255)
const LOCKED_WRITE: u8 = u8::MAX;

pub(crate) struct Spinlock<T> {
    data: UnsafeCell<T>,
    state: AtomicU8,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send + Sync> Sync for Spinlock<T> {}

impl<T> Spinlock<T> {
    pub const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            state: AtomicU8::new(UNLOCKED),
        }
    }

    /// Shared access; spins while a writer holds the lock.
    pub fn read(&self) -> ReadGuard<'_, T> {
        while self
            .state
            .fetch_update(Acquire, Relaxed, |v| {
                if v < LOCKED_WRITE - 1 {
                    Some(v + 1)
                } else {
                    None
                }
            })
            .is_err()
        {
            std::hint::spin_loop();
        }
        ReadGuard { lock: self }
    }

    /// Exclusive access; spins until all readers and writers are gone.
    pub fn write(&self) -> WriteGuard<'_, T> {
        while self
            .state
            .compare_exchange_weak(UNLOCKED, LOCKED_WRITE, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        WriteGuard { lock: self }
    }
}

pub(crate) struct ReadGuard<'a, T> {
    lock: &'a Spinlock<T>,
}

impl<T> Deref for ReadGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: the reader count is held until this guard drops
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> Drop for ReadGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.state.fetch_sub(1, Release);
    }
}

pub(crate) struct WriteGuard<'a, T> {
    lock: &'a Spinlock<T>,
}

impl<T> Deref for WriteGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        // SAFETY: the write lock is held until this guard drops
        unsafe { &*self.lock.data.get() }
    }
}

impl<T> DerefMut for WriteGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: the write lock is held exclusively until this guard drops
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T> Drop for WriteGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.state.store(UNLOCKED, Release);
    }
}
