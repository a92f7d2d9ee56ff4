//! Saved defaults for the voice-agent-templates CLI.
//! Persisted in the platform-specific config directory via `directories::ProjectDirs`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::agent::AgentTemplatesConfig;

/// Environment variables that override saved settings, keyed to field names.
pub const ENV_OVERRIDES: [(&str, &str); 5] = [
    ("AGENT_INDUSTRY", "industry"),
    ("AGENT_VOICE_MODEL", "voice-model"),
    ("AGENT_VOICE_NAME", "voice-name"),
    ("AGENT_LANG", "language"),
    ("AGENT_DOCS_DIR", "docs-dir"),
];

/// CLI defaults that can be saved and loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Industry key
    pub industry: String,
    /// Text-to-speech voice model
    pub voice_model: String,
    /// Agent display name (empty to derive from the voice model)
    pub voice_name: String,
    /// Language tag
    pub language: String,
    /// Documentation directory
    pub docs_dir: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        let config = AgentTemplatesConfig::default();
        Self {
            industry: config.industry,
            voice_model: config.voice_model,
            voice_name: config.voice_name,
            language: config.language,
            docs_dir: config.docs_dir.to_string_lossy().into_owned(),
        }
    }
}

impl AppSettings {
    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "voice-agent", "voice-agent-templates")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path.
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.json"))
    }

    /// Load settings from the config file, falling back to defaults.
    pub fn load() -> Self {
        Self::settings_path()
            .map(|path| Self::load_from(path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file, falling back to defaults.
    pub fn load_from(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let defaults = Self::default();

        let mut loaded: Self = match fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
        {
            Some(settings) => settings,
            None => {
                debug!("No usable settings at {}, using defaults", path.display());
                return defaults;
            }
        };

        // Backfill fields that older or hand-edited files left blank
        if loaded.industry.is_empty() {
            loaded.industry = defaults.industry;
        }
        if loaded.voice_model.is_empty() {
            loaded.voice_model = defaults.voice_model;
        }
        if loaded.language.is_empty() {
            loaded.language = defaults.language;
        }
        if loaded.docs_dir.is_empty() {
            loaded.docs_dir = defaults.docs_dir;
        }

        loaded
    }

    /// Save settings to the config file.
    pub fn save(&self) -> Result<PathBuf, String> {
        let path = Self::settings_path().ok_or("Cannot determine config directory")?;
        self.save_to(path)
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: impl Into<PathBuf>) -> Result<PathBuf, String> {
        let path = path.into();

        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(path)
    }

    /// Set a field by its CLI name (`industry`, `voice-model`, `voice-name`,
    /// `language`, `docs-dir`). Returns false for an unknown name.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let field = match name {
            "industry" => &mut self.industry,
            "voice-model" => &mut self.voice_model,
            "voice-name" => &mut self.voice_name,
            "language" => &mut self.language,
            "docs-dir" => &mut self.docs_dir,
            _ => return false,
        };
        *field = value;
        true
    }

    /// Apply `(field, value)` overrides in order.
    pub fn apply_overrides(&mut self, overrides: &[(&str, String)]) {
        for (name, value) in overrides {
            if !self.set_field(name, value.clone()) {
                debug!("Ignoring unknown settings field {}", name);
            }
        }
    }

    /// Override fields with the `AGENT_*` environment variables that are set.
    pub fn apply_env(&mut self) {
        self.apply_vars(|var| env::var(var).ok());
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for (var, name) in ENV_OVERRIDES {
            if let Some(value) = lookup(var) {
                debug!("{} overrides {}", var, name);
                self.set_field(name, value);
            }
        }
    }

    /// Builder config seeded from these settings.
    pub fn to_templates_config(&self) -> AgentTemplatesConfig {
        AgentTemplatesConfig::default()
            .with_industry(&self.industry)
            .with_voice_model(&self.voice_model)
            .with_voice_name(&self.voice_name)
            .with_language(&self.language)
            .with_docs_dir(&self.docs_dir)
    }
}
