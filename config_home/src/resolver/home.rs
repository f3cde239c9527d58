//! Home directory lookup that survives privilege elevation.
//!
//! Under `sudo` the process reports root's home. When the provider reports an
//! elevated user id, that user's home is used instead, falling back to the
//! process home when the lookup fails.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::platform::PlatformProvider;
use crate::{ConfigHomeError, ConfigHomeResult};

pub(super) fn resolve_home<P>(provider: &P) -> ConfigHomeResult<PathBuf>
where
    P: PlatformProvider + ?Sized,
{
    let elevated = provider
        .elevated_user_id()
        .filter(|user_id| !user_id.trim().is_empty());
    if let Some(user_id) = elevated {
        if let Some(home) = provider.user_home_dir(&user_id) {
            debug!(%user_id, home = %home.display(), "using elevated user's home");
            return Ok(home);
        }
        warn!(%user_id, "elevated user's home is unknown; using the current home");
    }
    provider.home_dir().ok_or(ConfigHomeError::HomeDirNotFound)
}
