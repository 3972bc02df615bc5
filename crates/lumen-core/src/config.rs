use crate::error::Result;
use crate::paths;
use crate::schedule::{DEFAULT_DAYS, MODULATION_PERIOD_DAYS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Contents of `lumen.yaml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_days")]
    pub days: u32,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_days() -> u32 {
    DEFAULT_DAYS
}

fn default_output() -> PathBuf {
    PathBuf::from(paths::SCHEDULE_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days: default_days(),
            output: default_output(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load `lumen.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.days == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "days must be at least 1".to_string(),
            });
        } else if f64::from(self.days) % MODULATION_PERIOD_DAYS != 0.0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "days = {} does not cover whole {MODULATION_PERIOD_DAYS}-day modulation cycles",
                    self.days
                ),
            });
        }

        if self.output.extension().and_then(|e| e.to_str()) != Some("json") {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "output '{}' does not have a .json extension",
                    self.output.display()
                ),
            });
        }

        if self.server.port == 0 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "server.port is 0; the OS will pick a port".to_string(),
            });
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.days, 30);
        assert_eq!(cfg.server.port, 5000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lumen.yaml"), "days: 60\nserver:\n  port: 8080\n").unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.days, 60);
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.output, PathBuf::from("data/mock/daily.json"));
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            days: 90,
            ..Config::default()
        };
        cfg.save(dir.path()).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), cfg);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("lumen.yaml"), "days: [not a number\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn zero_days_is_an_error() {
        let cfg = Config {
            days: 0,
            ..Config::default()
        };
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);
    }

    #[test]
    fn partial_cycle_and_odd_output_warn() {
        let cfg = Config {
            days: 45,
            output: PathBuf::from("schedule.txt"),
            server: ServerConfig {
                port: 0,
                ..ServerConfig::default()
            },
        };
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.level == WarnLevel::Warning));
    }

    #[test]
    fn output_path_resolves_against_root() {
        let cfg = Config::default();
        assert_eq!(
            cfg.output_path(Path::new("/p")),
            PathBuf::from("/p/data/mock/daily.json")
        );
    }
}
