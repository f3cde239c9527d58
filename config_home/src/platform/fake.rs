//! In-memory [`PlatformProvider`] for deterministic tests.
//!
//! [`FakePlatform`] answers every platform query from values supplied up
//! front and keeps an in-memory record of the paths it has been asked to
//! create, so callers can assert on exactly which filesystem operations the
//! resolver performed.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::PlatformProvider;

/// Home directory reported when none was configured explicitly.
const DEFAULT_HOME: &str = "/home/tester";

/// Scriptable [`PlatformProvider`] holding all state in memory.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
/// use config_home::{FakePlatform, PlatformProvider};
///
/// let platform = FakePlatform::linux().with_env("XDG_CONFIG_HOME", "/xdg");
/// assert!(platform.is_linux());
/// platform.create_dir(Path::new("/xdg/demo")).unwrap();
/// assert!(platform.exists(Path::new("/xdg/demo")));
/// ```
#[derive(Debug)]
pub struct FakePlatform {
    linux: bool,
    macos: bool,
    windows: bool,
    env: HashMap<String, OsString>,
    elevated_user_id: Option<String>,
    home: Option<PathBuf>,
    user_homes: HashMap<String, PathBuf>,
    write_failure: Option<io::ErrorKind>,
    state: Mutex<FakeFilesystem>,
}

#[derive(Debug, Default)]
struct FakeFilesystem {
    existing: HashSet<PathBuf>,
    created_dirs: Vec<PathBuf>,
    created_files: Vec<PathBuf>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::unsupported()
    }
}

impl FakePlatform {
    /// A platform where no predicate is true.
    #[must_use]
    pub fn unsupported() -> Self {
        Self {
            linux: false,
            macos: false,
            windows: false,
            env: HashMap::new(),
            elevated_user_id: None,
            home: Some(PathBuf::from(DEFAULT_HOME)),
            user_homes: HashMap::new(),
            write_failure: None,
            state: Mutex::new(FakeFilesystem::default()),
        }
    }

    /// A Linux host.
    #[must_use]
    pub fn linux() -> Self {
        Self {
            linux: true,
            ..Self::unsupported()
        }
    }

    /// A macOS host.
    #[must_use]
    pub fn macos() -> Self {
        Self {
            macos: true,
            ..Self::unsupported()
        }
    }

    /// A Windows host.
    #[must_use]
    pub fn windows() -> Self {
        Self {
            windows: true,
            ..Self::unsupported()
        }
    }

    /// Overrides the three platform predicates.
    #[must_use]
    pub const fn with_flags(mut self, linux: bool, macos: bool, windows: bool) -> Self {
        self.linux = linux;
        self.macos = macos;
        self.windows = windows;
        self
    }

    /// Sets an environment variable visible to the resolver.
    #[must_use]
    pub fn with_env(mut self, name: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.insert(name.into(), value.into());
        self
    }

    /// Marks the process as running elevated on behalf of `user_id`.
    #[must_use]
    pub fn with_elevated_user(mut self, user_id: impl Into<String>) -> Self {
        self.elevated_user_id = Some(user_id.into());
        self
    }

    /// Sets the current user's home directory.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Removes the current user's home directory.
    #[must_use]
    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    /// Registers the home directory of another user.
    #[must_use]
    pub fn with_user_home(mut self, user_id: impl Into<String>, home: impl Into<PathBuf>) -> Self {
        self.user_homes.insert(user_id.into(), home.into());
        self
    }

    /// Seeds a path that exists before any operation runs.
    #[must_use]
    pub fn with_existing_path(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().existing.insert(path.into());
        self
    }

    /// Makes every directory and file creation fail with `kind`.
    #[must_use]
    pub const fn failing_writes(mut self, kind: io::ErrorKind) -> Self {
        self.write_failure = Some(kind);
        self
    }

    /// Directories passed to [`PlatformProvider::create_dir`], in call order.
    #[must_use]
    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.state.lock().created_dirs.clone()
    }

    /// Files passed to [`PlatformProvider::touch`], in call order.
    #[must_use]
    pub fn created_files(&self) -> Vec<PathBuf> {
        self.state.lock().created_files.clone()
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        self.write_failure.map_or(Ok(()), |kind| {
            Err(io::Error::new(
                kind,
                format!("simulated failure writing '{}'", path.display()),
            ))
        })
    }
}

impl PlatformProvider for FakePlatform {
    fn is_linux(&self) -> bool {
        self.linux
    }

    fn is_macos(&self) -> bool {
        self.macos
    }

    fn is_windows(&self) -> bool {
        self.windows
    }

    fn env_var(&self, name: &str) -> Option<OsString> {
        self.env.get(name).cloned()
    }

    fn elevated_user_id(&self) -> Option<String> {
        self.elevated_user_id.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn user_home_dir(&self, user_id: &str) -> Option<PathBuf> {
        self.user_homes.get(user_id).cloned()
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.lock().existing.contains(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        let mut state = self.state.lock();
        state.created_dirs.push(path.to_path_buf());
        state.existing.insert(path.to_path_buf());
        Ok(())
    }

    fn touch(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        let mut state = self.state.lock();
        state.created_files.push(path.to_path_buf());
        state.existing.insert(path.to_path_buf());
        Ok(())
    }
}
