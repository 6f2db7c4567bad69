// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single-slot, last-write-wins timer.
//!
//! Arming replaces whatever was pending, so at most one task is ever waiting
//! and it carries the newest payload. Nothing runs on its own: the owner
//! calls [`Debouncer::fire`] from its event loop and gets the payload back
//! once the deadline has passed.
//!
//! Time is a `Duration` since an epoch the caller picks (`Instant` on native,
//! `performance.now()` in the browser), which also makes it trivial to drive
//! from tests.

use std::time::Duration;

use tracing::trace;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending task and schedule `payload` for `now + delay`.
    pub fn arm(&mut self, now: Duration, payload: T) {
        let deadline = now + self.delay;
        if self.pending.is_some() {
            trace!(?deadline, "debounce re-armed, previous task dropped");
        }
        self.pending = Some((deadline, payload));
    }

    /// Drop the pending task, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending task becomes due.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending payload if its deadline has passed.
    pub fn fire(&mut self, now: Duration) -> Option<T> {
        if self.deadline().is_some_and(|deadline| now >= deadline) {
            self.cancel()
        } else {
            None
        }
    }
}
