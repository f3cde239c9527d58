//! CLI entrypoint for `config-home`.

mod cli;
mod error;

use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use config_home::{ConfigPathResolver, RealPlatform};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::error::CliError;

/// Environment variable holding `tracing` filter directives.
const LOG_ENV: &str = "CONFIG_HOME_LOG";

/// Exit status for `exists`/`has` when the path is missing.
const MISSING: u8 = 1;
/// Exit status for any failure.
const FAILURE: u8 = 2;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            let _unused = writeln!(io::stderr().lock(), "config-home: {err}");
            ExitCode::from(FAILURE)
        }
    }
}

fn run(args: Args) -> Result<ExitCode, CliError> {
    init_logging(args.is_verbose)?;
    let resolver = build_resolver(args.app, args.override_var)?;
    let mut out = io::stdout().lock();

    match args.command {
        Command::Path { should_explain } => {
            let resolved = resolver.find_config_dir()?;
            emit(&mut out, resolved.path.display())?;
            if should_explain {
                match resolved.platform {
                    Some(platform) => emit(&mut out, format_args!("platform: {platform}"))?,
                    None => emit(&mut out, "platform: not consulted")?,
                }
                emit(&mut out, format_args!("source: {}", resolved.source))?;
            }
        }
        Command::Exists => return report(&mut out, resolver.config_dir_exists()?),
        Command::Init => emit_path(&mut out, &resolver.create_config_dir()?)?,
        Command::File { name } => emit_path(&mut out, &resolver.find_config_file(&name)?)?,
        Command::Has { name } => return report(&mut out, resolver.config_file_exists(&name)?),
        Command::Touch { name } => emit_path(&mut out, &resolver.create_config_file(&name)?)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn build_resolver(
    app: String,
    override_var: Option<String>,
) -> Result<ConfigPathResolver<RealPlatform>, CliError> {
    let builder = ConfigPathResolver::builder(app);
    let configured = match override_var {
        Some(name) => builder.override_var(name),
        None => builder,
    };
    Ok(configured.build()?)
}

fn init_logging(is_verbose: bool) -> Result<(), CliError> {
    let filter = if is_verbose {
        EnvFilter::new("debug")
    } else {
        std::env::var(LOG_ENV).map_or_else(|_| Ok(EnvFilter::new("warn")), EnvFilter::try_new)?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn emit(out: &mut impl Write, line: impl Display) -> Result<(), CliError> {
    writeln!(out, "{line}").map_err(CliError::Output)
}

fn emit_path(out: &mut impl Write, path: &Path) -> Result<(), CliError> {
    emit(out, path.display())
}

fn report(out: &mut impl Write, is_present: bool) -> Result<ExitCode, CliError> {
    emit(out, is_present)?;
    Ok(if is_present {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(MISSING)
    })
}
