//! Application name validation and builder configuration.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use crate::{ConfigHomeError, ConfigPathResolver, FakePlatform};

#[rstest]
#[case::empty("")]
#[case::blank("   ")]
#[case::current(".")]
#[case::parent("..")]
#[case::slash("my/app")]
#[case::backslash("my\\app")]
fn rejects_unusable_app_names(#[case] name: &str) -> Result<()> {
    let err = ConfigPathResolver::builder(name)
        .platform(FakePlatform::linux())
        .build()
        .err()
        .ok_or_else(|| anyhow!("expected '{name}' to be rejected"))?;
    ensure!(
        matches!(err, ConfigHomeError::InvalidAppName { .. }),
        "unexpected error: {err:?}"
    );
    Ok(())
}

#[rstest]
#[case("myapp")]
#[case("My App")]
#[case(".hidden")]
fn accepts_leaf_app_names(#[case] name: &str) -> Result<()> {
    let resolver = ConfigPathResolver::builder(name)
        .platform(FakePlatform::linux())
        .build()?;
    ensure!(resolver.app_name() == name);
    Ok(())
}

#[rstest]
fn blank_override_name_means_no_override() -> Result<()> {
    let resolver = ConfigPathResolver::builder("myapp")
        .override_var("  ")
        .platform(FakePlatform::linux())
        .build()?;
    ensure!(resolver.override_var().is_none());
    Ok(())
}

#[rstest]
fn default_override_var_is_honoured() -> Result<()> {
    let resolver = ConfigPathResolver::builder("my-app")
        .default_override_var()
        .platform(FakePlatform::linux().with_env("MY_APP_CONFIG_DIR", "/etc/my-app"))
        .build()?;
    ensure!(resolver.find_config_dir_path()? == std::path::PathBuf::from("/etc/my-app"));
    Ok(())
}
