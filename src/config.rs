//! Environment-driven configuration.

use crate::error::Result;
use anyhow::{Context, bail};
use std::borrow::Cow;
use std::path::PathBuf;

/// Catalog document path variable.
pub const CATALOG_PATH_VAR: &str = "PONCHO_CATALOG";

/// Default search result limit variable.
pub const SEARCH_LIMIT_VAR: &str = "PONCHO_SEARCH_LIMIT";

const DEFAULT_CATALOG_PATH: &str = "docs/components.json";
const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the catalog JSON document
    pub catalog_path: PathBuf,
    /// Results returned when a search request gives no limit
    pub default_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            default_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = value(CATALOG_PATH_VAR) {
            config.catalog_path = PathBuf::from(expand_tilde(path.trim()).into_owned());
        }

        if let Some(limit) = value(SEARCH_LIMIT_VAR) {
            let limit: usize = limit.trim().parse().with_context(|| {
                format!(
                    "{} must be a positive integer, got '{}'",
                    SEARCH_LIMIT_VAR, limit
                )
            })?;
            if limit == 0 {
                bail!("{} must be greater than zero", SEARCH_LIMIT_VAR);
            }
            config.default_limit = limit;
        }

        Ok(config)
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
