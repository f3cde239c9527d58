//! Shared fixtures for resolver tests.

use rstest::fixture;

use crate::{ConfigHomeResult, ConfigPathResolver, FakePlatform};

pub(super) const APP: &str = "myapp";
pub(super) const OVERRIDE_VAR: &str = "MYAPP_CONFIG";

/// Builds a resolver for [`APP`] on `platform` without an override variable.
pub(super) fn resolver_on(
    platform: FakePlatform,
) -> ConfigHomeResult<ConfigPathResolver<FakePlatform>> {
    ConfigPathResolver::builder(APP).platform(platform).build()
}

/// Builds a resolver for [`APP`] on `platform` honouring [`OVERRIDE_VAR`].
pub(super) fn overridable_on(
    platform: FakePlatform,
) -> ConfigHomeResult<ConfigPathResolver<FakePlatform>> {
    ConfigPathResolver::builder(APP)
        .override_var(OVERRIDE_VAR)
        .platform(platform)
        .build()
}

#[fixture]
pub(super) fn linux_resolver() -> ConfigHomeResult<ConfigPathResolver<FakePlatform>> {
    resolver_on(FakePlatform::linux())
}
