//! One-shot delayed tasks with cancellation.
//!
//! The controller schedules alert dismissal through [`Scheduler`] so tests
//! can fire timers on demand instead of waiting on the browser clock.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use std::time::Duration;

use crate::util::guard::DropGuard;

pub trait Scheduler {
    /// Run `task` once after `delay`. Dropping the returned guard before the
    /// delay elapses cancels the task.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> DropGuard;
}

/// `setTimeout`-backed scheduler for the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> DropGuard {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let timeout = gloo_timers::callback::Timeout::new(millis, task);
            DropGuard::new(move || drop(timeout))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, task);
            DropGuard::noop()
        }
    }
}
