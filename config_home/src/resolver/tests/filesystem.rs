//! Existence checks and idempotent creation.

use std::io;
use std::path::PathBuf;

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::fixtures::{linux_resolver, resolver_on};
use crate::{ConfigHomeError, ConfigHomeResult, ConfigPathResolver, FakePlatform};

type Resolver = ConfigHomeResult<ConfigPathResolver<FakePlatform>>;

#[rstest]
fn config_dir_missing_on_fresh_platform(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    ensure!(!resolver.config_dir_exists()?);
    Ok(())
}

#[rstest]
fn create_config_dir_makes_directory_exist(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    let created = resolver.create_config_dir()?;
    let expected = resolver.find_config_dir_path()?;
    ensure!(created == expected);
    ensure!(resolver.config_dir_exists()?);
    ensure!(resolver.platform().created_dirs() == vec![expected]);
    Ok(())
}

#[rstest]
fn config_dir_exists_sees_pre_existing_directory() -> Result<()> {
    let resolver = resolver_on(
        FakePlatform::linux().with_existing_path("/home/tester/.config/myapp"),
    )?;
    ensure!(resolver.config_dir_exists()?);
    Ok(())
}

#[rstest]
fn find_config_file_joins_without_io(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    let file = resolver.find_config_file("config.toml")?;
    ensure!(file == PathBuf::from("/home/tester/.config/myapp/config.toml"));
    ensure!(resolver.platform().created_dirs().is_empty());
    ensure!(resolver.platform().created_files().is_empty());
    Ok(())
}

#[rstest]
fn missing_config_file_is_reported(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    ensure!(!resolver.config_file_exists("missing.conf")?);
    Ok(())
}

#[rstest]
fn create_config_file_creates_directory_and_file(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    let created = resolver.create_config_file("config.toml")?;
    let expected = resolver.find_config_file("config.toml")?;
    ensure!(created == expected);
    ensure!(resolver.config_file_exists("config.toml")?);
    ensure!(resolver.config_dir_exists()?);
    Ok(())
}

#[rstest]
fn create_config_file_touches_once(linux_resolver: Resolver) -> Result<()> {
    let resolver = linux_resolver?;
    resolver.create_config_file("config.toml")?;
    resolver.create_config_file("config.toml")?;
    let files = resolver.platform().created_files();
    ensure!(files.len() == 1, "expected one file creation, saw {files:?}");
    Ok(())
}

#[rstest]
fn create_config_file_keeps_existing_file() -> Result<()> {
    let resolver = resolver_on(
        FakePlatform::linux().with_existing_path("/home/tester/.config/myapp/config.toml"),
    )?;
    resolver.create_config_file("config.toml")?;
    ensure!(resolver.platform().created_files().is_empty());
    Ok(())
}

#[rstest]
fn io_failures_propagate_unchanged() -> Result<()> {
    let resolver =
        resolver_on(FakePlatform::linux().failing_writes(io::ErrorKind::PermissionDenied))?;
    for result in [resolver.create_config_dir(), resolver.create_config_file("config.toml")] {
        let err = result
            .err()
            .ok_or_else(|| anyhow!("expected simulated failure"))?;
        match err {
            ConfigHomeError::Io(source) => {
                ensure!(source.kind() == io::ErrorKind::PermissionDenied);
            }
            other => return Err(anyhow!("unexpected error: {other:?}")),
        }
    }
    ensure!(resolver.platform().created_files().is_empty());
    Ok(())
}

#[rstest]
fn unsupported_platform_blocks_creation() -> Result<()> {
    let resolver = resolver_on(FakePlatform::unsupported())?;
    ensure!(matches!(
        resolver.create_config_file("config.toml"),
        Err(ConfigHomeError::UnsupportedPlatform)
    ));
    ensure!(resolver.platform().created_dirs().is_empty());
    Ok(())
}
