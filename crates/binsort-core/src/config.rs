//! Configuration file (`config.toml` under the base directory)
//!
//! Holds the active category scheme and display options. A missing file, or
//! a missing `scheme.order`, means the built-in candy scheme.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::category::{CategoryOrder, Scheme};
use crate::error::{BinsortError, Result};

const CONFIG_FILE: &str = "config.toml";
const LABEL_KEY_PREFIX: &str = "scheme.labels.";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# binsort configuration file
# Location: ~/.binsort/config.toml

[scheme]
# Category priority order, first bin is emitted first.
# Identifiers must be unique; items with any other category are rejected.
order = [
    "chewing_gum",
    "lollipop",
    "gummy",
    "white_chocolate",
    "dark_chocolate",
    "fitness",
]

# Display labels (missing entries fall back to the identifier).
# Labels for categories outside `order` are kept but not shown.
[scheme.labels]
chewing_gum = "Chewing gum"
lollipop = "Lollipops"
gummy = "Gummies"
white_chocolate = "White chocolate"
dark_chocolate = "Dark chocolate"
fitness = "Fitness candy"

[display]
# Print the bucket state before the sorted result
show_buckets = true
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scheme: Scheme,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Print bucket state before flattening
    #[serde(default = "default_show_buckets")]
    pub show_buckets: bool,
}

fn default_show_buckets() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_buckets: default_show_buckets(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!("No config at {}, using built-in scheme", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| BinsortError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(
            "Loaded config from {} ({} categories)",
            path.display(),
            config.scheme.order().len()
        );
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scheme.order" => Some(format!("{:?}", self.scheme.order().as_slice())),
            "display.show_buckets" => Some(self.display.show_buckets.to_string()),
            _ => {
                let category = key.strip_prefix(LABEL_KEY_PREFIX)?;
                let labels = self.scheme.labels();
                match labels.get(category) {
                    Some(label) => Some(label.to_string()),
                    None => self
                        .scheme
                        .order()
                        .contains(category)
                        .then(|| category.to_string()),
                }
            }
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scheme.order" => {
                let order = CategoryOrder::new(parse_string_list(key, value)?)?;
                self.scheme.set_order(order);
                Ok(())
            }
            "display.show_buckets" => {
                let show_buckets = value.trim().parse::<bool>().map_err(|_| {
                    BinsortError::InvalidConfigValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    }
                })?;
                self.display.show_buckets = show_buckets;
                Ok(())
            }
            _ => match key.strip_prefix(LABEL_KEY_PREFIX) {
                Some(category) if !category.is_empty() => {
                    self.scheme.set_label(category, value.trim());
                    Ok(())
                }
                _ => Err(BinsortError::ConfigKeyNotFound {
                    key: key.to_string(),
                }),
            },
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (
                "scheme.order".to_string(),
                format!("{:?}", self.scheme.order().as_slice()),
            ),
            (
                "display.show_buckets".to_string(),
                self.display.show_buckets.to_string(),
            ),
        ];

        for (category, label) in self.scheme.entries() {
            entries.push((format!("{}{}", LABEL_KEY_PREFIX, category), label.to_string()));
        }

        // Labels waiting for their category to join the order
        let order = self.scheme.order();
        for (category, label) in self.scheme.labels().iter() {
            if !order.contains(category) {
                entries.push((format!("{}{}", LABEL_KEY_PREFIX, category), label.to_string()));
            }
        }

        entries
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(key: &str, value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();

    // Try JSON array format first: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else if trimmed.starts_with('[') || trimmed.ends_with(']') {
        return Err(BinsortError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    } else {
        trimmed
    };

    let items: Vec<String> = inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(items)
}
