// Configuration Storage Service
// Keyword lists and scoring knobs, stored as JSON with version backups

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "config.json";
const BACKUPS_TO_KEEP: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    #[serde(default = "default_proverbs")]
    pub proverbs: Vec<String>,
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    #[serde(default = "default_metaphor_markers")]
    pub metaphor_markers: Vec<String>,
    #[serde(default = "default_archaic_markers")]
    pub archaic_markers: Vec<String>,
    #[serde(default = "default_long_word_min_chars")]
    pub long_word_min_chars: usize,
    #[serde(default = "default_long_sentence_min_tokens")]
    pub long_sentence_min_tokens: usize,
    #[serde(default = "default_length_score_divisor")]
    pub length_score_divisor: f64,
    #[serde(default = "default_archaic_penalty")]
    pub archaic_penalty: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            proverbs: default_proverbs(),
            symbols: default_symbols(),
            metaphor_markers: default_metaphor_markers(),
            archaic_markers: default_archaic_markers(),
            long_word_min_chars: default_long_word_min_chars(),
            long_sentence_min_tokens: default_long_sentence_min_tokens(),
            length_score_divisor: default_length_score_divisor(),
            archaic_penalty: default_archaic_penalty(),
        }
    }
}

impl AnalysisConfig {
    /// Reject knobs that would make the scores meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.length_score_divisor.is_finite() && self.length_score_divisor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "lengthScoreDivisor",
                reason: format!("must be a positive number, got {}", self.length_score_divisor),
            });
        }
        if !self.archaic_penalty.is_finite() {
            return Err(ConfigError::Invalid {
                field: "archaicPenalty",
                reason: format!("must be finite, got {}", self.archaic_penalty),
            });
        }
        Ok(())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_proverbs() -> Vec<String> {
    strings(&[
        "slå to fluer med ét smæk",
        "oppe i skyerne",
        "at gå som katten om den varme grød",
    ])
}
fn default_symbols() -> Vec<String> {
    strings(&["blomst", "mørke", "lys", "hav", "sol", "sky"])
}
fn default_metaphor_markers() -> Vec<String> {
    strings(&["som en", "er som"])
}
fn default_archaic_markers() -> Vec<String> {
    strings(&["aa", "ae"])
}
fn default_long_word_min_chars() -> usize { 6 }
fn default_long_sentence_min_tokens() -> usize { 10 }
fn default_length_score_divisor() -> f64 { 500.0 }
fn default_archaic_penalty() -> f64 { 10.0 }

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join(CONFIG_FILE_NAME);
        Self { config_dir, config_file }
    }

    /// Store rooted at the platform config dir (`~/.config/laesbarhed` on Linux).
    pub fn open_default() -> Result<Self, ConfigError> {
        Self::default_config_dir()
            .map(Self::new)
            .ok_or(ConfigError::MissingConfigDir)
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("laesbarhed"))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_file
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }

    /// Load configuration; a missing file yields the built-in Danish defaults.
    pub fn load(&self) -> Result<AnalysisConfig, ConfigError> {
        if !self.config_file.exists() {
            debug!(path = %self.config_file.display(), "config.missing_using_defaults");
            return Ok(AnalysisConfig::default());
        }
        load_config_file(&self.config_file)
    }

    /// Save configuration to file
    pub fn save(&self, config: &AnalysisConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.ensure_dir()?;

        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_file, content)?;
        info!(path = %self.config_file.display(), "config.saved");
        Ok(())
    }

    fn create_backup(&self) -> Result<(), ConfigError> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));
        fs::copy(&self.config_file, &backup_file)?;

        self.cleanup_old_backups(&backup_dir, BACKUPS_TO_KEEP)
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &Path, keep: usize) -> Result<(), ConfigError> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // File names carry the timestamp, so name order is age order.
        entries.sort_by_key(|e| e.file_name());

        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}

/// Read a config from an explicit path (no defaults for a missing file).
pub fn load_config_file(path: &Path) -> Result<AnalysisConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AnalysisConfig = serde_json::from_str(&content)?;
    config.validate()?;
    debug!(path = %path.display(), "config.loaded");
    Ok(config)
}
