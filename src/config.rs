use crate::cli::Args;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seconds between render ticks.
    #[serde(rename = "RefreshInterval")]
    pub refresh_interval: u64,

    /// Byte rate separating idle traffic from a download.
    #[serde(rename = "Threshold")]
    pub threshold_bytes: u64,

    /// Interface to watch, or "all" for the aggregate.
    #[serde(rename = "Device")]
    pub device: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: 3,
            threshold_bytes: 300_000,
            device: "all".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".dlnotify");
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(home) = dirs::home_dir() {
            self.save_to(&home.join(".dlnotify"))?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn apply_args(&mut self, args: &Args) {
        self.refresh_interval = args.refresh_interval;
        self.threshold_bytes = args.threshold;
        if let Some(device) = &args.device {
            self.device = device.clone();
        }
    }

    /// Invalid values here are fatal before monitoring begins.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.refresh_interval == 0 {
            anyhow::bail!("refresh interval must be at least 1 second");
        }
        if self.threshold_bytes == 0 {
            anyhow::bail!("download threshold must be positive");
        }
        if self.device.is_empty() {
            anyhow::bail!("device must not be empty");
        }
        Ok(())
    }
}
