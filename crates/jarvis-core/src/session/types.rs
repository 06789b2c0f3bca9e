//! Session concurrency guard.

use std::sync::atomic::{AtomicBool, Ordering};

use jarvis_common::ChatError;

/// Guard that clears the `pending` flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Attempt to mark a send in flight. Returns `Err` if one already is.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
