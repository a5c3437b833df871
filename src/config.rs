use crate::ui::layout;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_max_visible_suggestions")]
    pub max_visible_suggestions: usize,

    #[serde(default = "default_tooltip_max_chars")]
    pub tooltip_max_chars: usize,

    #[serde(default = "default_status_preview_chars")]
    pub status_preview_chars: usize,
}

fn default_max_visible_suggestions() -> usize {
    layout::MAX_VISIBLE_SUGGESTIONS
}

fn default_tooltip_max_chars() -> usize {
    layout::TOOLTIP_MAX_CHARS
}

fn default_status_preview_chars() -> usize {
    layout::STATUS_PREVIEW_CHARS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_visible_suggestions: default_max_visible_suggestions(),
            tooltip_max_chars: default_tooltip_max_chars(),
            status_preview_chars: default_status_preview_chars(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(max_visible_suggestions: Option<usize>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".proofline.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(limit) = max_visible_suggestions {
            config.max_visible_suggestions = limit;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.max_visible_suggestions != default_max_visible_suggestions() {
            self.max_visible_suggestions = other.max_visible_suggestions;
        }
        if other.tooltip_max_chars != default_tooltip_max_chars() {
            self.tooltip_max_chars = other.tooltip_max_chars;
        }
        if other.status_preview_chars != default_status_preview_chars() {
            self.status_preview_chars = other.status_preview_chars;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "proofline").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
