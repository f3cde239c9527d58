//! Command-line interface definitions for `config-home`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Parsed CLI arguments for `config-home`.
#[derive(Debug, Parser)]
#[command(name = "config-home")]
#[command(about = "Locate and bootstrap an application's configuration directory")]
#[command(version)]
pub struct Args {
    /// Application whose configuration directory is resolved.
    #[arg(long, env = "CONFIG_HOME_APP", value_name = "name")]
    pub app: String,
    /// Environment variable that, when set, replaces normal resolution.
    #[arg(long, env = "CONFIG_HOME_OVERRIDE_VAR", value_name = "var")]
    pub override_var: Option<String>,
    /// Emit debug logs on stderr.
    #[arg(short = 'v', long = "verbose")]
    pub is_verbose: bool,
    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by `config-home`.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the configuration directory.
    Path {
        /// Also print the detected platform and the rule that applied.
        #[arg(long = "explain")]
        should_explain: bool,
    },
    /// Report whether the configuration directory exists.
    Exists,
    /// Create the configuration directory if it is missing.
    Init,
    /// Print the path of a file inside the configuration directory.
    File {
        /// File name relative to the configuration directory.
        name: PathBuf,
    },
    /// Report whether a file exists inside the configuration directory.
    Has {
        /// File name relative to the configuration directory.
        name: PathBuf,
    },
    /// Create an empty file inside the configuration directory unless it
    /// already exists.
    Touch {
        /// File name relative to the configuration directory.
        name: PathBuf,
    },
}
