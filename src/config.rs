//! # Configuration
//!
//! Locates the HLR database file for the enclosing service. The path defaults
//! to osmo-hlr's stock location and can be overridden through the `HLR_DB_PATH`
//! environment variable. [`crate::reader::HlrReader::new`] also accepts any
//! path directly, so this module is a convenience, not a requirement.

use serde::Deserialize;
use std::path::PathBuf;

use crate::error::Result;

/// Stock database location used by an osmo-hlr installation.
pub const DEFAULT_DB_PATH: &str = "/var/lib/osmocom/hlr.db";

/// Configuration for reaching the HLR store.
#[derive(Debug, Clone, Deserialize)]
pub struct HlrConfig {
    /// Filesystem path of the SQLite database file.
    pub db_path: PathBuf,
}

impl HlrConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `HLR_DB_PATH`, falling back to [`DEFAULT_DB_PATH`].
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .add_source(config::Environment::with_prefix("HLR"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for HlrConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_stock_osmo_hlr_db() {
        let config = HlrConfig::default();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/osmocom/hlr.db"));
    }

    #[test]
    fn env_override_wins() {
        std::env::set_var("HLR_DB_PATH", "/tmp/test-hlr.db");
        let config = HlrConfig::from_env().expect("config should load");
        assert_eq!(config.db_path, PathBuf::from("/tmp/test-hlr.db"));
        std::env::remove_var("HLR_DB_PATH");
    }
}
