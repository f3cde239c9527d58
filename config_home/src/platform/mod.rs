//! Host platform capabilities consumed by the resolver.
//!
//! The resolver never calls into the operating system directly. Platform
//! flags, environment lookup, home directories and the few filesystem
//! primitives it needs are all reached through [`PlatformProvider`], which is
//! implemented by [`RealPlatform`] for production use and [`FakePlatform`]
//! for tests.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::{ConfigHomeError, ConfigHomeResult};

mod fake;
mod real;

pub use fake::FakePlatform;
pub use real::RealPlatform;

/// Capability object giving the resolver access to the host platform.
pub trait PlatformProvider {
    /// Reports whether the host is Linux.
    fn is_linux(&self) -> bool;

    /// Reports whether the host is macOS.
    fn is_macos(&self) -> bool;

    /// Reports whether the host is Windows.
    fn is_windows(&self) -> bool;

    /// Looks up an environment variable, returning `None` when it is unset.
    fn env_var(&self, name: &str) -> Option<OsString>;

    /// Identifier of the invoking user when running under privilege
    /// elevation, or `None` when not elevated.
    fn elevated_user_id(&self) -> Option<String>;

    /// Home directory of the user running the process.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Home directory of the user identified by `user_id`.
    fn user_home_dir(&self, user_id: &str) -> Option<PathBuf>;

    /// Reports whether `path` exists. Must not have side effects.
    fn exists(&self, path: &Path) -> bool;

    /// Creates the directory at `path` along with any missing parents.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. A directory that already exists is
    /// not an error.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates an empty file at `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error. Implementations should treat a file
    /// that already exists as success.
    fn touch(&self, path: &Path) -> io::Result<()>;
}

/// Platforms with a known configuration directory convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux and its XDG base directory layout.
    Linux,
    /// macOS and `~/Library/Application Support`.
    MacOs,
    /// Windows and the roaming application data folder.
    Windows,
}

impl Platform {
    /// Derives the current platform from the provider's predicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigHomeError::UnsupportedPlatform`] when no predicate is
    /// true and [`ConfigHomeError::AmbiguousPlatform`] when several are.
    pub fn detect<P>(provider: &P) -> ConfigHomeResult<Self>
    where
        P: PlatformProvider + ?Sized,
    {
        let matched: Vec<Self> = [
            (Self::Linux, provider.is_linux()),
            (Self::MacOs, provider.is_macos()),
            (Self::Windows, provider.is_windows()),
        ]
        .into_iter()
        .filter_map(|(platform, is_current)| is_current.then_some(platform))
        .collect();

        match matched.as_slice() {
            [] => Err(ConfigHomeError::UnsupportedPlatform),
            [platform] => Ok(*platform),
            many => Err(ConfigHomeError::AmbiguousPlatform {
                matched: many
                    .iter()
                    .map(|platform| platform.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Human-readable platform name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
