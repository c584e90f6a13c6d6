//! Thread affinity verification.
//!
//! Every preview interaction runs synchronously on the thread that owns
//! the interactive surface (the UI thread in the host environment). The
//! bridge carries no locks, so it verifies in debug builds that all of
//! its entry points are called from the thread it was created on.

use std::thread::{self, ThreadId};

/// Records the thread an object was created on so later accesses can be
/// checked against it.
///
/// ```ignore
/// struct MyController {
///     affinity: ThreadAffinity,
/// }
///
/// impl MyController {
///     fn update(&self) {
///         self.affinity.debug_assert_same_thread();
///         // ... safe to mutate single-threaded state ...
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadAffinity {
    thread_id: ThreadId,
}

impl ThreadAffinity {
    /// Captures the affinity of the current thread.
    pub fn current() -> Self {
        Self {
            thread_id: thread::current().id(),
        }
    }

    /// Returns whether the current thread matches the captured one.
    pub fn is_same_thread(&self) -> bool {
        thread::current().id() == self.thread_id
    }

    /// Panics in debug builds when called from a different thread.
    ///
    /// Compiles to nothing in release builds.
    #[track_caller]
    pub fn debug_assert_same_thread(&self) {
        debug_assert!(
            self.is_same_thread(),
            "accessed from a different thread than the one it was created on"
        );
    }
}
