//! Operating-system backed [`PlatformProvider`].

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use cap_std::ambient_authority;
use cap_std::fs::{Dir, OpenOptions};
use dirs::home_dir;

use super::PlatformProvider;

/// Environment variable `sudo` sets to the invoking user's numeric id.
const SUDO_UID: &str = "SUDO_UID";

/// [`PlatformProvider`] backed by the running process and the local
/// filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealPlatform;

impl RealPlatform {
    /// Creates the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlatformProvider for RealPlatform {
    fn is_linux(&self) -> bool {
        cfg!(target_os = "linux")
    }

    fn is_macos(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn is_windows(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn env_var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }

    fn elevated_user_id(&self) -> Option<String> {
        sudo_uid_when_root(is_effective_root(), std::env::var(SUDO_UID).ok())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home_dir()
    }

    fn user_home_dir(&self, user_id: &str) -> Option<PathBuf> {
        passwd_home(user_id)
    }

    fn exists(&self, path: &Path) -> bool {
        matches!(path.try_exists(), Ok(true))
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        Dir::create_ambient_dir_all(path, ambient_authority())
    }

    fn touch(&self, path: &Path) -> io::Result<()> {
        let (parent, name) = split_file_path(path)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        match dir.open_with(name, &options) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err),
        }
    }
}

/// `SUDO_UID` only marks elevation while the process actually runs as
/// root; a stale value inherited by an unprivileged shell is ignored.
pub(super) fn sudo_uid_when_root(is_root: bool, sudo_uid: Option<String>) -> Option<String> {
    sudo_uid.filter(|uid| is_root && !uid.trim().is_empty())
}

#[cfg(unix)]
fn is_effective_root() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
const fn is_effective_root() -> bool {
    false
}

/// Splits `path` into the directory to open and the file name to create
/// inside it. A bare file name is resolved against the working directory.
fn split_file_path(path: &Path) -> io::Result<(&Path, &OsStr)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", path.display()),
        )
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((parent, name))
}

#[cfg(unix)]
fn passwd_home(user_id: &str) -> Option<PathBuf> {
    use nix::unistd::{Uid, User};

    let uid = user_id.trim().parse::<u32>().ok()?;
    User::from_uid(Uid::from_raw(uid))
        .inspect_err(|err| tracing::debug!(uid, error = %err, "passwd lookup failed"))
        .ok()
        .flatten()
        .map(|user| user.dir)
}

#[cfg(not(unix))]
const fn passwd_home(_user_id: &str) -> Option<PathBuf> {
    None
}
