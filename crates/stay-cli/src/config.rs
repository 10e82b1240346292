//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use stay_core::{BoundaryPolicy, CalculationConfig, DEFAULT_THRESHOLD_DAYS};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Travel log read when `--log` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_log: Option<PathBuf>,

    /// How a stay that began before the window is treated.
    pub boundary_policy: BoundaryPolicy,

    /// Annual day cap used by `forecast`.
    pub threshold_days: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            travel_log: None,
            boundary_policy: BoundaryPolicy::default(),
            threshold_days: DEFAULT_THRESHOLD_DAYS,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (STAY_*)
        figment = figment.merge(Env::prefixed("STAY_"));

        figment.extract()
    }

    /// Settings handed to the core calculations.
    pub const fn calculation(&self) -> CalculationConfig {
        CalculationConfig::new(self.boundary_policy)
    }
}

/// Returns the platform-specific config directory for stay.
///
/// On Linux: `~/.config/stay`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stay"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_dirs_config_path_ends_with_stay() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "stay");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.travel_log, None);
        assert_eq!(config.boundary_policy, BoundaryPolicy::ClipFirst);
        assert_eq!(config.threshold_days, 180);
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"boundary_policy = "prepend-presence""#).unwrap();
        writeln!(file, "threshold_days = 90").unwrap();
        writeln!(file, r#"travel_log = "/tmp/i94.tsv""#).unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.boundary_policy, BoundaryPolicy::PrependPresence);
        assert_eq!(config.threshold_days, 90);
        assert_eq!(config.travel_log, Some(PathBuf::from("/tmp/i94.tsv")));
        assert_eq!(
            config.calculation(),
            CalculationConfig::new(BoundaryPolicy::PrependPresence)
        );
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"boundary_policy = "guess""#).unwrap();
        file.flush().unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }
}
