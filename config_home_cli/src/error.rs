//! Error types for `config-home`.

use thiserror::Error;

/// Errors surfaced by the `config-home` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Resolution or filesystem failure from the library.
    #[error(transparent)]
    Resolve(#[from] config_home::ConfigHomeError),

    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    /// `CONFIG_HOME_LOG` holds an unparsable filter.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
}
