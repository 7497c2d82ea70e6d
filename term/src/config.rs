//! Configuration for the demo: titles, theme, padding, and animation.

use color_eyre::eyre::{Context, Result};
use derive_builder::Builder;
use pagebar::{layout::PositionPolicy, pager::DEFAULT_SETTLE_FRACTION};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ui::colors::Theme;

pub const DEFAULT_TICK_STR: &str = "16ms";
pub const DEFAULT_TITLES: [&str; 8] = [
    "Overview",
    "Inbox",
    "Starred",
    "Sent Messages",
    "Drafts",
    "Archive",
    "Spam",
    "Trash",
];

/// Returns the default page titles as a vector of strings.
pub fn get_default_titles() -> Vec<String> {
    DEFAULT_TITLES
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<String>>()
}

/// Application configuration persisted as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: String,
    pub titles: Vec<String>,
    pub padding_left: u16,
    pub padding_right: u16,
    pub settle_fraction: f32,
    pub tick: String,
    pub position_policy: PositionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Blue.to_string(),
            titles: get_default_titles(),
            padding_left: 1,
            padding_right: 1,
            settle_fraction: DEFAULT_SETTLE_FRACTION,
            tick: DEFAULT_TICK_STR.to_string(),
            position_policy: PositionPolicy::Clamp,
        }
    }
}

impl Config {
    /// Parses the animation tick interval, e.g. "16ms".
    pub fn tick_duration(&self) -> Result<Duration> {
        humantime::parse_duration(&self.tick)
            .wrap_err_with(|| format!("invalid tick duration: {}", self.tick))
    }
}

/// Persists and retrieves the configuration from a YAML file.
#[derive(Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct ConfigManager {
    /// The path the config file
    path: String,
    #[builder(setter(skip))]
    config: Config,
}

impl ConfigManagerBuilder {
    pub fn build(&self) -> Result<ConfigManager> {
        let mut manager = self._build()?;

        let f: Result<std::fs::File, std::io::Error> =
            std::fs::File::open(&manager.path);

        match f {
            Ok(file) => {
                manager.config = match serde_yaml::from_reader(file) {
                    Ok(c) => c,
                    Err(e) => {
                        log::warn!(
                            "Failed to parse config file, using defaults: {}",
                            e
                        );
                        Config::default()
                    }
                };
                Ok(manager)
            }
            Err(_) => {
                manager.config = Config::default();
                manager.write()?;
                Ok(manager)
            }
        }
    }
}

impl ConfigManager {
    /// Returns a new instance of ConfigManagerBuilder.
    pub fn builder() -> ConfigManagerBuilder {
        ConfigManagerBuilder::default()
    }

    /// Returns a copy of the current configuration.
    pub fn get(&self) -> Config {
        self.config.clone()
    }

    /// Replaces the configuration and persists it to disk.
    pub fn update(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.write()
    }

    fn write(&mut self) -> Result<()> {
        let serialized = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
