//! Persistent CLI preferences.
//!
//! Settings live in `settings.toml` under the platform config directory and
//! seed the display state of every new store.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

use bcfg_model::{TemplateType, ViewMode, VisualizationSettings};
use bcfg_store::{ConfiguratorState, DEFAULT_ACTIVE_PANEL};

// =============================================================================
// SETTINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    /// Initial visualization flags.
    pub display: VisualizationSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Template used by `run` when the script does not initialize one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<TemplateType>,
    pub active_panel: String,
    pub view_mode: ViewMode,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_template: None,
            active_panel: DEFAULT_ACTIVE_PANEL.to_string(),
            view_mode: ViewMode::default(),
        }
    }
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        Self::load_or_default(&path).unwrap_or_else(|error| {
            warn!(
                path = %path.display(),
                error = %format!("{error:#}"),
                "ignoring unreadable settings"
            );
            Self::default()
        })
    }

    /// Load from `path`, or defaults when no file exists there yet.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid settings TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse settings {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Write settings as pretty TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }

    /// Fresh store state seeded with these preferences.
    pub fn initial_state(&self) -> ConfiguratorState {
        ConfiguratorState::new()
            .with_visualization(self.display)
            .with_view_mode(self.general.view_mode)
            .with_active_panel(self.general.active_panel.as_str())
    }
}

/// Path of `settings.toml` in the platform config directory.
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "bcfg", "building-configurator")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Settings::parse("").expect("parse"), Settings::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let settings = Settings::parse(
            r#"
            [general]
            view_mode = "+Y"

            [display]
            show_faces = false
            "#,
        )
        .expect("parse");
        assert_eq!(settings.general.view_mode, ViewMode::Top);
        assert_eq!(settings.general.active_panel, "building");
        assert!(!settings.display.show_faces);
        assert!(settings.display.show_edges);
    }
}
