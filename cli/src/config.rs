//! CLI Configuration

use anyhow::{anyhow, bail, Context};
use feedback_core::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const KEYS: [&str; 3] = ["api_url", "language", "timeout_secs"];

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub language: Option<Language>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load(profile: Option<&str>) -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path(profile)?)
    }

    pub fn save(&self, profile: Option<&str>) -> anyhow::Result<PathBuf> {
        let path = Self::config_path(profile)?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "api_url" => self.api_url = Some(value.trim_end_matches('/').to_string()),
            "language" => self.language = Some(value.parse()?),
            "timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| anyhow!("timeout_secs must be a whole number of seconds"))?;
                if secs == 0 {
                    bail!("timeout_secs must be at least 1");
                }
                self.timeout_secs = Some(secs);
            }
            _ => bail!("Unknown config key: {} (expected one of {})", key, KEYS.join(", ")),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(match key {
            "api_url" => self.api_url.clone(),
            "language" => self.language.map(|l| l.code().to_string()),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            _ => bail!("Unknown config key: {}", key),
        })
    }

    fn config_path(profile: Option<&str>) -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot find home directory"))?;
        let filename = match profile {
            Some(p) => format!("config.{}.toml", p),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".patient-feedback").join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("feedback-cli-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("api_url", "http://ward-7:8080/").unwrap();
        config.set("language", "AS").unwrap();
        config.set("timeout_secs", "15").unwrap();

        assert_eq!(config.get("api_url").unwrap().as_deref(), Some("http://ward-7:8080"));
        assert_eq!(config.get("language").unwrap().as_deref(), Some("as"));
        assert_eq!(config.get("timeout_secs").unwrap().as_deref(), Some("15"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("language", "fr").is_err());
        assert!(config.set("timeout_secs", "0").is_err());
        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("api_key", "x").is_err());
        assert!(config.get("api_key").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_through_toml_file() {
        let path = temp_path("config.toml");
        let config = Config {
            api_url: Some("http://localhost:9000".into()),
            language: Some(Language::Hi),
            timeout_secs: None,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_default() {
        assert_eq!(Config::load_from(&temp_path("absent.toml")).unwrap(), Config::default());
    }
}
