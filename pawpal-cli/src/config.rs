use anyhow::{Context, Result};
use pawpal_core::PriorityWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IANA timezone used to decide what "today" is.
    pub timezone: String,
    pub weights: PriorityWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            weights: PriorityWeights::default(),
        }
    }
}

/// `$PAWPAL_HOME`, falling back to `~/.pawpal`.
pub fn pawpal_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PAWPAL_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".pawpal"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(pawpal_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    if let Some(dir) = p.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pawpal-cfg-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let cfg = load_config_from(&dir.join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.weights.critical, 4.0);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: Config = toml::from_str("timezone = \"America/Chicago\"\n").unwrap();
        assert_eq!(cfg.timezone, "America/Chicago");
        assert_eq!(cfg.weights, PriorityWeights::default());

        let cfg: Config = toml::from_str("[weights]\nlow = 0.5\n").unwrap();
        assert_eq!(cfg.timezone, "UTC");
        assert_eq!(cfg.weights.low, 0.5);
        assert_eq!(cfg.weights.high, 3.0);
    }

    #[test]
    fn save_then_load() {
        let dir = scratch_dir("roundtrip");
        let p = dir.join("config.toml");
        let cfg = Config {
            timezone: "Europe/Berlin".to_string(),
            ..Config::default()
        };
        save_config_to(&cfg, &p).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
        let _ = fs::remove_dir_all(&dir);
    }
}
