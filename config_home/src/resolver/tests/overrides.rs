//! Override variable precedence.

use std::path::PathBuf;

use anyhow::{Result, ensure};
use rstest::rstest;

use super::fixtures::{OVERRIDE_VAR, overridable_on, resolver_on};
use crate::{ConfigDirSource, FakePlatform};

#[rstest]
#[case(FakePlatform::linux())]
#[case(FakePlatform::macos())]
#[case(FakePlatform::windows().with_env("APPDATA", "C:/Roaming"))]
fn override_is_returned_verbatim(#[case] platform: FakePlatform) -> Result<()> {
    let resolver = overridable_on(platform.with_env(OVERRIDE_VAR, "/override/path"))?;
    let resolved = resolver.find_config_dir()?;
    ensure!(resolved.path == PathBuf::from("/override/path"));
    ensure!(
        resolved.source
            == ConfigDirSource::Override {
                variable: OVERRIDE_VAR.to_owned()
            }
    );
    ensure!(resolved.platform.is_none());
    Ok(())
}

#[rstest]
fn override_wins_over_xdg_config_home() -> Result<()> {
    let resolver = overridable_on(
        FakePlatform::linux()
            .with_env("XDG_CONFIG_HOME", "/xdg/config")
            .with_env(OVERRIDE_VAR, "/override/path"),
    )?;
    ensure!(resolver.find_config_dir_path()? == PathBuf::from("/override/path"));
    Ok(())
}

#[rstest]
fn override_skips_platform_detection() -> Result<()> {
    let resolver = overridable_on(FakePlatform::unsupported().with_env(OVERRIDE_VAR, "/override"))?;
    ensure!(resolver.find_config_dir_path()? == PathBuf::from("/override"));
    Ok(())
}

#[rstest]
#[case::relative("relative/dir")]
#[case::padded("  /padded  ")]
fn override_shape_is_not_validated(#[case] value: &str) -> Result<()> {
    let resolver = overridable_on(FakePlatform::linux().with_env(OVERRIDE_VAR, value))?;
    ensure!(resolver.find_config_dir_path()? == PathBuf::from(value));
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::whitespace(" \t ")]
fn blank_override_falls_through(#[case] value: &str) -> Result<()> {
    let resolver = overridable_on(FakePlatform::linux().with_env(OVERRIDE_VAR, value))?;
    let path = resolver.find_config_dir_path()?;
    ensure!(path != PathBuf::new(), "blank override must not yield an empty path");
    ensure!(path == PathBuf::from("/home/tester/.config/myapp"));
    Ok(())
}

#[rstest]
fn override_requires_configuration() -> Result<()> {
    let resolver = resolver_on(FakePlatform::linux().with_env(OVERRIDE_VAR, "/override/path"))?;
    ensure!(resolver.override_var().is_none());
    ensure!(resolver.find_config_dir_path()? == PathBuf::from("/home/tester/.config/myapp"));
    Ok(())
}
