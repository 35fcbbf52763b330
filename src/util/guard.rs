//! Run-on-drop handle used for cancellable timers and subscriptions.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Runs its release action exactly once, when dropped.
#[must_use = "dropping the guard immediately releases what it holds"]
pub struct DropGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl DropGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for DropGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropGuard").field("armed", &self.release.is_some()).finish()
    }
}
