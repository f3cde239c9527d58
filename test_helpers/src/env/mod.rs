//! Helpers for safely mutating environment variables in tests.
//!
//! An [`EnvSandbox`] holds a global re-entrant lock for its whole lifetime,
//! so tests that share a sandbox never observe each other's writes. The
//! first mutation of each key records its prior value; dropping the sandbox
//! restores every recorded key in reverse order.
//!
//! # Examples
//!
//! ```
//! use test_helpers::env::EnvSandbox;
//!
//! let mut sandbox = EnvSandbox::new();
//! sandbox.set("CONFIG_HOME_DEMO", "value");
//! assert_eq!(std::env::var("CONFIG_HOME_DEMO").ok().as_deref(), Some("value"));
//! drop(sandbox);
//! assert!(std::env::var_os("CONFIG_HOME_DEMO").is_none());
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Variables that steer configuration directory resolution on any platform.
pub const PLATFORM_CONFIG_VARS: [&str; 6] = [
    "XDG_CONFIG_HOME",
    "APPDATA",
    "HOME",
    "USERPROFILE",
    "SUDO_UID",
    "SUDO_USER",
];

/// Exclusive, self-restoring view of the process environment.
#[must_use = "dropping the sandbox restores the environment and releases the lock"]
pub struct EnvSandbox {
    originals: Vec<(String, Option<OsString>)>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

impl EnvSandbox {
    /// Acquires the environment lock.
    pub fn new() -> Self {
        Self {
            originals: Vec::new(),
            _lock: ENV_MUTEX.lock(),
        }
    }

    /// Acquires the lock and removes every variable in
    /// [`PLATFORM_CONFIG_VARS`].
    pub fn isolated() -> Self {
        let mut sandbox = Self::new();
        for key in PLATFORM_CONFIG_VARS {
            sandbox.remove(key);
        }
        sandbox
    }

    /// Sets `key` to `value` until the sandbox drops.
    pub fn set(&mut self, key: &str, value: impl AsRef<OsStr>) -> &mut Self {
        self.remember(key);
        // SAFETY: `ENV_MUTEX` is held for the sandbox's lifetime.
        unsafe { env::set_var(key, value.as_ref()) };
        self
    }

    /// Removes `key` until the sandbox drops.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.remember(key);
        // SAFETY: `ENV_MUTEX` is held for the sandbox's lifetime.
        unsafe { env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &str) {
        if self.originals.iter().all(|(known, _)| known != key) {
            self.originals.push((key.to_owned(), env::var_os(key)));
        }
    }
}

impl Default for EnvSandbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnvSandbox {
    fn drop(&mut self) {
        for (key, original) in self.originals.drain(..).rev() {
            // SAFETY: `ENV_MUTEX` is still held; `_lock` drops after this body.
            match original {
                Some(value) => unsafe { env::set_var(&key, value) },
                None => unsafe { env::remove_var(&key) },
            }
        }
    }
}

impl fmt::Debug for EnvSandbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSandbox")
            .field(
                "keys",
                &self.originals.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
