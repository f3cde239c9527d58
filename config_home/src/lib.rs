//! Locate and bootstrap an application's configuration directory.
//!
//! [`ConfigPathResolver`] applies the host platform's conventions to find the
//! single directory an application should keep its configuration in:
//!
//! - an explicit override variable, when one is configured and set;
//! - `$XDG_CONFIG_HOME/<app>` or `~/.config/<app>` on Linux;
//! - `~/Library/Application Support/<app>` on macOS;
//! - `%APPDATA%\<app>` on Windows.
//!
//! All platform access goes through the [`PlatformProvider`] trait so the
//! resolution rules can be exercised deterministically with
//! [`FakePlatform`].
//!
//! ```rust
//! use config_home::{ConfigPathResolver, FakePlatform};
//!
//! # fn main() -> config_home::ConfigHomeResult<()> {
//! let resolver = ConfigPathResolver::builder("myapp")
//!     .platform(FakePlatform::linux().with_env("XDG_CONFIG_HOME", "/xdg/config"))
//!     .build()?;
//! assert_eq!(
//!     resolver.find_config_dir_path()?,
//!     std::path::PathBuf::from("/xdg/config/myapp"),
//! );
//! # Ok(())
//! # }
//! ```

mod error;
pub mod platform;
mod resolver;

pub use error::{ConfigHomeError, ConfigHomeResult};
pub use platform::{FakePlatform, Platform, PlatformProvider, RealPlatform};
pub use resolver::{
    ConfigDirSource, ConfigPathResolver, ConfigPathResolverBuilder, ResolvedConfigDir,
};
