use config::{Config as ConfigBuilder, File};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::directory::DEFAULT_BATCH_PREFIX;
use crate::errors::{DirectoryError, DirectoryResult};
use crate::search::FeaturedMode;

/// Settings for the directory front end.
///
/// # Configuration Locations
///
/// Later sources override earlier ones:
/// 1. Global `$HOME/.config/eeeflix/config.yaml`
/// 2. Local `.eeeflix.yaml` in the current directory
/// 3. Custom file passed via `--config`
///
/// # Configuration Format
///
/// ```yaml
/// # Prefix prepended to avatar paths
/// asset_base: "/eeeflix"
///
/// # Roll prefix of the batch shown on the students page
/// batch_prefix: "2301"
///
/// # ranked | shuffled
/// featured_mode: "ranked"
///
/// # Defaults to 5 for ranked and 10 for shuffled
/// featured_count: 5
///
/// # Fixes contact digits, achievements and shuffle order
/// seed: 42
///
/// # Minimum gap between search runs while typing
/// search_throttle: "300ms"
///
/// # trace, debug, info, warn, error
/// log_level: "info"
/// ```
///
/// Command-line values take precedence, see [`DirectoryConfig::merge_with_cli`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub asset_base: String,

    pub batch_prefix: String,

    pub featured_mode: FeaturedMode,

    /// Falls back to the mode's own count when unset
    pub featured_count: Option<NonZeroUsize>,

    /// Seed for every random choice; fresh entropy when unset
    pub seed: Option<u64>,

    /// Human-readable duration such as "300ms" or "1s"
    pub search_throttle: String,

    pub log_level: String,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub asset_base: Option<String>,
    pub batch_prefix: Option<String>,
    pub featured_mode: Option<FeaturedMode>,
    pub featured_count: Option<NonZeroUsize>,
    pub seed: Option<u64>,
    pub search_throttle: Option<String>,
    pub log_level: Option<String>,
}

fn default_search_throttle() -> String {
    "300ms".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            asset_base: String::new(),
            batch_prefix: DEFAULT_BATCH_PREFIX.to_string(),
            featured_mode: FeaturedMode::default(),
            featured_count: None,
            seed: None,
            search_throttle: default_search_throttle(),
            log_level: default_log_level(),
        }
    }
}

impl DirectoryConfig {
    /// Loads configuration, layering `config_path` over the default locations
    pub fn load_from(config_path: Option<&Path>) -> DirectoryResult<Self> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(DirectoryError::config_error(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        let mut builder = ConfigBuilder::builder();

        let config_files = [
            dirs::config_dir().map(|p| p.join("eeeflix/config.yaml")),
            Some(PathBuf::from(".eeeflix.yaml")),
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                debug!("Reading configuration from {}", path.display());
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.search_throttle_period()?;
        Ok(config)
    }

    /// Merges CLI arguments with configuration file values.
    ///
    /// Every flag that was passed wins, even when it repeats a default.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> DirectoryResult<Self> {
        if let Some(asset_base) = cli.asset_base {
            self.asset_base = asset_base;
        }
        if let Some(batch_prefix) = cli.batch_prefix {
            self.batch_prefix = batch_prefix;
        }
        if let Some(featured_mode) = cli.featured_mode {
            self.featured_mode = featured_mode;
        }
        if cli.featured_count.is_some() {
            self.featured_count = cli.featured_count;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(search_throttle) = cli.search_throttle {
            self.search_throttle = search_throttle;
            self.search_throttle_period()?;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        Ok(self)
    }

    /// Parsed `search_throttle`
    pub fn search_throttle_period(&self) -> DirectoryResult<Duration> {
        humantime::parse_duration(&self.search_throttle).map_err(|e| {
            DirectoryError::invalid_duration(format!("{}: {}", self.search_throttle, e))
        })
    }

    /// How many featured records to show
    pub fn featured_count(&self) -> NonZeroUsize {
        self.featured_count
            .unwrap_or_else(|| self.featured_mode.default_count())
    }

    /// Random source for generation and shuffling
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        config_path
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = write_config(
            &dir,
            r#"
            asset_base: "/eeeflix"
            batch_prefix: "230105"
            featured_mode: "shuffled"
            featured_count: 3
            seed: 42
            search_throttle: "1s"
            log_level: "debug"
        "#,
        );

        let config = DirectoryConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.asset_base, "/eeeflix");
        assert_eq!(config.batch_prefix, "230105");
        assert_eq!(config.featured_mode, FeaturedMode::Shuffled);
        assert_eq!(config.featured_count, NonZeroUsize::new(3));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.search_throttle_period().unwrap(), Duration::from_secs(1));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let dir = tempdir().unwrap();
        let config_path = write_config(&dir, "seed: 1\n");

        let config = DirectoryConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.asset_base, "");
        assert_eq!(config.batch_prefix, "2301");
        assert_eq!(config.featured_mode, FeaturedMode::Ranked);
        assert_eq!(config.featured_count().get(), 5);
        assert_eq!(
            config.search_throttle_period().unwrap(),
            Duration::from_millis(300)
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_featured_count_follows_mode() {
        let config = DirectoryConfig {
            featured_mode: FeaturedMode::Shuffled,
            ..DirectoryConfig::default()
        };
        assert_eq!(config.featured_count().get(), 10);

        let config = DirectoryConfig {
            featured_count: NonZeroUsize::new(2),
            ..config
        };
        assert_eq!(config.featured_count().get(), 2);
    }

    #[test]
    fn test_merge_with_cli() {
        let config_file = DirectoryConfig {
            asset_base: "/site".to_string(),
            batch_prefix: "230105".to_string(),
            featured_mode: FeaturedMode::Shuffled,
            featured_count: NonZeroUsize::new(4),
            seed: Some(1),
            search_throttle: "500ms".to_string(),
            log_level: "info".to_string(),
        };

        let cli = CliOverrides {
            seed: Some(9),
            log_level: Some("debug".to_string()),
            ..CliOverrides::default()
        };

        let merged = config_file.merge_with_cli(cli).unwrap();
        assert_eq!(merged.asset_base, "/site"); // File value
        assert_eq!(merged.batch_prefix, "230105"); // File value
        assert_eq!(merged.featured_mode, FeaturedMode::Shuffled); // File value
        assert_eq!(merged.featured_count, NonZeroUsize::new(4)); // File value (CLI None)
        assert_eq!(merged.seed, Some(9)); // CLI value
        assert_eq!(merged.search_throttle, "500ms"); // File value
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_cli_default_values_still_override_file() {
        let config_file = DirectoryConfig {
            batch_prefix: "230106".to_string(),
            featured_mode: FeaturedMode::Shuffled,
            search_throttle: "1s".to_string(),
            log_level: "debug".to_string(),
            ..DirectoryConfig::default()
        };
        let defaults = DirectoryConfig::default();

        let cli = CliOverrides {
            asset_base: Some(defaults.asset_base.clone()),
            batch_prefix: Some(defaults.batch_prefix.clone()),
            featured_mode: Some(defaults.featured_mode),
            search_throttle: Some(defaults.search_throttle.clone()),
            log_level: Some(defaults.log_level.clone()),
            ..CliOverrides::default()
        };

        let merged = config_file.merge_with_cli(cli).unwrap();
        assert_eq!(merged, defaults);
    }

    #[test]
    fn test_merge_rejects_bad_throttle() {
        let cli = CliOverrides {
            search_throttle: Some("soon".to_string()),
            ..CliOverrides::default()
        };
        let result = DirectoryConfig::default().merge_with_cli(cli);
        assert!(matches!(result, Err(DirectoryError::InvalidDuration(_))));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use rand::Rng;
        let config = DirectoryConfig {
            seed: Some(5),
            ..DirectoryConfig::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let config_path = write_config(
            &dir,
            r#"
            featured_mode: "sideways"
            featured_count: "many"
        "#,
        );

        let result = DirectoryConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }

    #[test]
    fn test_invalid_throttle() {
        let dir = tempdir().unwrap();
        let config_path = write_config(&dir, "search_throttle: \"soon\"\n");

        let result = DirectoryConfig::load_from(Some(&config_path));
        assert!(matches!(result, Err(DirectoryError::InvalidDuration(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = DirectoryConfig::load_from(Some(Path::new("nonexistent.yaml")));
        assert!(matches!(result, Err(DirectoryError::ConfigError(_))));
    }
}
