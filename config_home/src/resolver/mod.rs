//! Configuration directory resolution and bootstrap helpers.
//!
//! [`ConfigPathResolver`] turns an application name, an optional override
//! variable and the state of a [`PlatformProvider`] into one directory path.
//! Rules are applied in strict order:
//!
//! 1. the override variable, if configured and non-blank, is returned
//!    verbatim;
//! 2. Linux uses `$XDG_CONFIG_HOME/<app>`, falling back to
//!    `<home>/.config/<app>`;
//! 3. macOS uses `<home>/Library/Application Support/<app>`;
//! 4. Windows uses `%APPDATA%\<app>`, falling back to
//!    `<home>\AppData\Roaming\<app>`.
//!
//! Resolution is recomputed on every call and never touches the filesystem.
//! Only the `create_*` helpers perform I/O.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use tracing::debug;

use crate::platform::{Platform, PlatformProvider, RealPlatform};
use crate::{ConfigHomeError, ConfigHomeResult};

mod builder;
mod home;

pub use builder::ConfigPathResolverBuilder;

const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
const APPDATA: &str = "APPDATA";

/// Rule that produced a resolved configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigDirSource {
    /// The caller-configured override variable.
    Override {
        /// Name of the variable that supplied the path.
        variable: String,
    },
    /// `$XDG_CONFIG_HOME/<app>` on Linux.
    XdgConfigHome,
    /// `<home>/.config/<app>` on Linux.
    HomeDotConfig,
    /// `<home>/Library/Application Support/<app>` on macOS.
    ApplicationSupport,
    /// `%APPDATA%\<app>` on Windows.
    AppData,
    /// `<home>\AppData\Roaming\<app>` on Windows when `APPDATA` is unset.
    ProfileAppData,
}

impl fmt::Display for ConfigDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override { variable } => write!(f, "override variable {variable}"),
            Self::XdgConfigHome => f.write_str("XDG_CONFIG_HOME"),
            Self::HomeDotConfig => f.write_str("~/.config"),
            Self::ApplicationSupport => f.write_str("~/Library/Application Support"),
            Self::AppData => f.write_str("APPDATA"),
            Self::ProfileAppData => f.write_str("~/AppData/Roaming"),
        }
    }
}

/// A configuration directory together with how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfigDir {
    /// The configuration directory.
    pub path: PathBuf,
    /// Rule that produced [`Self::path`].
    pub source: ConfigDirSource,
    /// Detected platform; `None` when the override short-circuited detection.
    pub platform: Option<Platform>,
}

/// Resolves an application's configuration directory and bootstraps files
/// inside it.
///
/// # Examples
///
/// ```rust
/// use config_home::{ConfigPathResolver, FakePlatform};
///
/// # fn main() -> config_home::ConfigHomeResult<()> {
/// let resolver = ConfigPathResolver::builder("myapp")
///     .override_var("MYAPP_CONFIG")
///     .platform(FakePlatform::linux().with_env("MYAPP_CONFIG", "/override/path"))
///     .build()?;
/// assert_eq!(resolver.find_config_dir_path()?, std::path::PathBuf::from("/override/path"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigPathResolver<P = RealPlatform> {
    app_name: String,
    override_var: Option<String>,
    platform: P,
}

impl ConfigPathResolver<RealPlatform> {
    /// Creates a resolver for `app_name` backed by the host platform.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigHomeError::InvalidAppName`] when `app_name` cannot be
    /// used as a directory name.
    pub fn new(app_name: impl Into<String>) -> ConfigHomeResult<Self> {
        Self::builder(app_name).build()
    }

    /// Creates a builder for `app_name`.
    #[must_use]
    pub fn builder(app_name: impl Into<String>) -> ConfigPathResolverBuilder<RealPlatform> {
        ConfigPathResolverBuilder::new(app_name)
    }
}

impl<P: PlatformProvider> ConfigPathResolver<P> {
    /// Application identifier used as the final path segment.
    #[must_use]
    pub const fn app_name(&self) -> &str {
        self.app_name.as_str()
    }

    /// Name of the override variable, if one was configured.
    #[must_use]
    pub fn override_var(&self) -> Option<&str> {
        self.override_var.as_deref()
    }

    /// Provider the resolver consults.
    #[must_use]
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Resolves the configuration directory and reports which rule applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigHomeError::UnsupportedPlatform`] or
    /// [`ConfigHomeError::AmbiguousPlatform`] when the provider does not name
    /// exactly one platform, and [`ConfigHomeError::HomeDirNotFound`] when a
    /// home-relative fallback is needed but no home directory is known.
    pub fn find_config_dir(&self) -> ConfigHomeResult<ResolvedConfigDir> {
        if let Some(resolved) = self.resolve_override() {
            debug!(
                app = %self.app_name,
                source = %resolved.source,
                path = %resolved.path.display(),
                "configuration directory overridden"
            );
            return Ok(resolved);
        }

        let platform = Platform::detect(&self.platform)?;
        let (path, source) = match platform {
            Platform::Linux => self.resolve_linux()?,
            Platform::MacOs => self.resolve_macos()?,
            Platform::Windows => self.resolve_windows()?,
        };
        debug!(
            app = %self.app_name,
            %platform,
            %source,
            path = %path.display(),
            "resolved configuration directory"
        );
        Ok(ResolvedConfigDir {
            path,
            source,
            platform: Some(platform),
        })
    }

    /// Returns the configuration directory path.
    ///
    /// # Errors
    ///
    /// See [`Self::find_config_dir`].
    pub fn find_config_dir_path(&self) -> ConfigHomeResult<PathBuf> {
        self.find_config_dir().map(|resolved| resolved.path)
    }

    /// Returns the configuration directory as a [`Utf8PathBuf`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigHomeError::NonUtf8Path`] when the path is not valid
    /// UTF-8, in addition to the errors of [`Self::find_config_dir`].
    pub fn find_config_dir_utf8_path(&self) -> ConfigHomeResult<Utf8PathBuf> {
        let path = self.find_config_dir_path()?;
        Utf8PathBuf::from_path_buf(path).map_err(|path| ConfigHomeError::NonUtf8Path { path })
    }

    /// Reports whether the configuration directory exists.
    ///
    /// # Errors
    ///
    /// See [`Self::find_config_dir`].
    pub fn config_dir_exists(&self) -> ConfigHomeResult<bool> {
        let dir = self.find_config_dir_path()?;
        Ok(self.platform.exists(&dir))
    }

    /// Creates the configuration directory if it is missing and returns it.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors and the provider's I/O errors unchanged.
    pub fn create_config_dir(&self) -> ConfigHomeResult<PathBuf> {
        let dir = self.find_config_dir_path()?;
        self.ensure_dir(&dir)?;
        Ok(dir)
    }

    /// Returns the path of `file_name` inside the configuration directory.
    ///
    /// Performs no I/O; the file need not exist.
    ///
    /// # Errors
    ///
    /// See [`Self::find_config_dir`].
    pub fn find_config_file(&self, file_name: impl AsRef<Path>) -> ConfigHomeResult<PathBuf> {
        Ok(self.find_config_dir_path()?.join(file_name))
    }

    /// Reports whether `file_name` exists inside the configuration directory.
    ///
    /// # Errors
    ///
    /// See [`Self::find_config_dir`].
    pub fn config_file_exists(&self, file_name: impl AsRef<Path>) -> ConfigHomeResult<bool> {
        let file = self.find_config_file(file_name)?;
        Ok(self.platform.exists(&file))
    }

    /// Ensures the configuration directory exists, then creates an empty
    /// `file_name` inside it unless the file is already present.
    ///
    /// Repeated calls perform at most one file creation. The directory may be
    /// left behind when file creation fails.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors and the provider's I/O errors unchanged.
    pub fn create_config_file(&self, file_name: impl AsRef<Path>) -> ConfigHomeResult<PathBuf> {
        let dir = self.find_config_dir_path()?;
        self.ensure_dir(&dir)?;
        let file = dir.join(file_name);
        if self.platform.exists(&file) {
            debug!(path = %file.display(), "configuration file already present");
        } else {
            self.platform.touch(&file)?;
            debug!(path = %file.display(), "created configuration file");
        }
        Ok(file)
    }

    fn ensure_dir(&self, dir: &Path) -> ConfigHomeResult<()> {
        self.platform.create_dir(dir)?;
        debug!(path = %dir.display(), "ensured configuration directory");
        Ok(())
    }

    fn resolve_override(&self) -> Option<ResolvedConfigDir> {
        let variable = self.override_var.as_deref()?;
        let value = self.non_blank_env(variable)?;
        Some(ResolvedConfigDir {
            path: PathBuf::from(value),
            source: ConfigDirSource::Override {
                variable: variable.to_owned(),
            },
            platform: None,
        })
    }

    fn resolve_linux(&self) -> ConfigHomeResult<(PathBuf, ConfigDirSource)> {
        if let Some(base) = self.non_blank_env(XDG_CONFIG_HOME).map(PathBuf::from) {
            if base.has_root() {
                return Ok((base.join(&self.app_name), ConfigDirSource::XdgConfigHome));
            }
            debug!(value = %base.display(), "ignoring relative XDG_CONFIG_HOME");
        }
        let home = home::resolve_home(&self.platform)?;
        Ok((
            home.join(".config").join(&self.app_name),
            ConfigDirSource::HomeDotConfig,
        ))
    }

    fn resolve_macos(&self) -> ConfigHomeResult<(PathBuf, ConfigDirSource)> {
        let home = home::resolve_home(&self.platform)?;
        Ok((
            home.join("Library")
                .join("Application Support")
                .join(&self.app_name),
            ConfigDirSource::ApplicationSupport,
        ))
    }

    fn resolve_windows(&self) -> ConfigHomeResult<(PathBuf, ConfigDirSource)> {
        if let Some(base) = self.non_blank_env(APPDATA) {
            return Ok((
                PathBuf::from(base).join(&self.app_name),
                ConfigDirSource::AppData,
            ));
        }
        let home = home::resolve_home(&self.platform)?;
        Ok((
            home.join("AppData").join("Roaming").join(&self.app_name),
            ConfigDirSource::ProfileAppData,
        ))
    }

    fn non_blank_env(&self, name: &str) -> Option<OsString> {
        self.platform.env_var(name).filter(|value| !is_blank(value))
    }
}

/// Empty and whitespace-only values count as unset.
fn is_blank(value: &OsStr) -> bool {
    value.to_str().is_some_and(|text| text.trim().is_empty())
}

#[cfg(test)]
mod tests;
