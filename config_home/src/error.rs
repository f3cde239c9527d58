//! Error types produced while resolving and bootstrapping configuration
//! directories.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving or creating configuration paths.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigHomeError {
    /// The application identifier cannot be used as a directory name.
    #[error("invalid application name '{name}': {reason}")]
    InvalidAppName {
        /// Identifier supplied by the caller.
        name: String,
        /// Why the identifier was rejected.
        reason: &'static str,
    },

    /// None of the platform predicates matched the host.
    #[error("unsupported platform: expected Linux, macOS or Windows")]
    UnsupportedPlatform,

    /// More than one platform predicate matched the host.
    #[error("ambiguous platform: {matched} all reported as current")]
    AmbiguousPlatform {
        /// Names of every platform that claimed to be current.
        matched: String,
    },

    /// No home directory could be determined for the current user.
    #[error("could not determine a home directory for the current user")]
    HomeDirNotFound,

    /// A resolved path is not valid UTF-8.
    #[error("path '{}' is not valid UTF-8", .path.display())]
    NonUtf8Path {
        /// Path that failed the conversion.
        path: PathBuf,
    },

    /// Filesystem failure reported by the platform provider.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by this crate.
pub type ConfigHomeResult<T> = Result<T, ConfigHomeError>;
