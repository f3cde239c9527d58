//! Builder for [`ConfigPathResolver`].
//!
//! The builder collects the application name, the optional override
//! variable and the platform provider, then validates the application name
//! once so every later resolution can join it without further checks.

use crate::platform::{PlatformProvider, RealPlatform};
use crate::{ConfigHomeError, ConfigHomeResult};

use super::ConfigPathResolver;

/// Builder for [`ConfigPathResolver`].
///
/// # Examples
///
/// ```rust
/// use config_home::{ConfigPathResolver, FakePlatform};
///
/// # fn main() -> config_home::ConfigHomeResult<()> {
/// let resolver = ConfigPathResolver::builder("hello-world")
///     .default_override_var()
///     .platform(FakePlatform::macos().with_home("/Users/demo"))
///     .build()?;
/// assert_eq!(resolver.override_var(), Some("HELLO_WORLD_CONFIG_DIR"));
/// assert!(resolver.find_config_dir_path()?.ends_with("Application Support/hello-world"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigPathResolverBuilder<P = RealPlatform> {
    app_name: String,
    override_var: Option<String>,
    platform: P,
}

impl ConfigPathResolverBuilder<RealPlatform> {
    /// Creates a builder for `app_name` targeting the host platform.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            override_var: None,
            platform: RealPlatform::new(),
        }
    }
}

impl<P> ConfigPathResolverBuilder<P> {
    /// Sets the environment variable whose non-blank value replaces the
    /// whole resolution algorithm.
    #[must_use]
    pub fn override_var(mut self, name: impl Into<String>) -> Self {
        self.override_var = Some(name.into());
        self
    }

    /// Uses `<APP>_CONFIG_DIR` as the override variable, derived from the
    /// application name.
    #[must_use]
    pub fn default_override_var(mut self) -> Self {
        self.override_var = Some(default_override_var_name(&self.app_name));
        self
    }

    /// Replaces the platform provider.
    #[must_use]
    pub fn platform<Q: PlatformProvider>(self, platform: Q) -> ConfigPathResolverBuilder<Q> {
        ConfigPathResolverBuilder {
            app_name: self.app_name,
            override_var: self.override_var,
            platform,
        }
    }

    /// Finalises the builder.
    ///
    /// A blank override variable name is treated as no override.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigHomeError::InvalidAppName`] when the application name
    /// is blank, is `.` or `..`, or contains a path separator.
    pub fn build(self) -> ConfigHomeResult<ConfigPathResolver<P>>
    where
        P: PlatformProvider,
    {
        validate_app_name(&self.app_name)?;
        Ok(ConfigPathResolver {
            app_name: self.app_name,
            override_var: self
                .override_var
                .filter(|name| !name.trim().is_empty()),
            platform: self.platform,
        })
    }
}

fn validate_app_name(name: &str) -> ConfigHomeResult<()> {
    let reason = if name.trim().is_empty() {
        Some("must not be empty")
    } else if matches!(name, "." | "..") {
        Some("must not be a relative directory marker")
    } else if name.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else {
        None
    };
    reason.map_or(Ok(()), |why| {
        Err(ConfigHomeError::InvalidAppName {
            name: name.to_owned(),
            reason: why,
        })
    })
}

/// Uppercases `app_name`, maps every other character to `_`, and appends
/// `_CONFIG_DIR`.
fn default_override_var_name(app_name: &str) -> String {
    let mut name: String = app_name
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    name.push_str("_CONFIG_DIR");
    name
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::default_override_var_name;

    #[rstest]
    #[case("myapp", "MYAPP_CONFIG_DIR")]
    #[case("hello-world", "HELLO_WORLD_CONFIG_DIR")]
    #[case(" spaced.app ", "SPACED_APP_CONFIG_DIR")]
    fn derives_override_variable(#[case] app: &str, #[case] expected: &str) {
        assert_eq!(default_override_var_name(app), expected);
    }
}
