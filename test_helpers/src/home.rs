//! Throwaway home directories for filesystem-backed tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::env::EnvSandbox;

/// A temporary directory standing in for the user's home, with the platform
/// configuration variables cleared and `HOME`/`USERPROFILE` pointed at it.
///
/// The environment is restored and the directory deleted on drop.
#[derive(Debug)]
pub struct TempHome {
    env: EnvSandbox,
    dir: TempDir,
}

impl TempHome {
    /// Creates the directory and isolates the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when the temporary directory cannot be created.
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("create temporary home")?;
        let mut env = EnvSandbox::isolated();
        env.set("HOME", dir.path()).set("USERPROFILE", dir.path());
        Ok(Self { env, dir })
    }

    /// Path of the temporary home.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Joins `relative` onto the temporary home.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Environment sandbox owned by this home.
    pub const fn env(&mut self) -> &mut EnvSandbox {
        &mut self.env
    }
}
