// Demo settings: the style config plus the tabs to show.
// Uses platform-native config dir: e.g. ~/Library/Application Support/tabkit/settings.json
// on macOS, ~/.config/tabkit/settings.json on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tabkit_style::StyleConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default = "default_tabs")]
    pub tabs: Vec<TabSettings>,
    #[serde(default = "default_bar_width")]
    pub bar_width: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            style: StyleConfig::default(),
            tabs: default_tabs(),
            bar_width: default_bar_width(),
        }
    }
}

/// One tab in the demo strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSettings {
    pub title: String,
    #[serde(default)]
    pub closable: bool,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub menu: Vec<String>,
}

impl TabSettings {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            closable: true,
            editable: true,
            disabled: false,
            menu: Vec::new(),
        }
    }
}

fn default_tabs() -> Vec<TabSettings> {
    let mut tabs = vec![
        TabSettings::titled("Inbox"),
        TabSettings::titled("Quarterly report (final).numbers"),
        TabSettings::titled("Notes"),
    ];
    tabs[2].menu = vec!["Rename".to_string(), "Duplicate".to_string()];
    tabs
}

fn default_bar_width() -> f32 {
    480.0
}

pub fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("tabkit").join("settings.json"))
}

pub fn load_settings() -> DemoSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => DemoSettings::default(),
    }
}

/// Read settings at `path`, falling back to defaults on any problem.
pub fn load_settings_from(path: &Path) -> DemoSettings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return DemoSettings::default(),
    };
    let settings: DemoSettings = match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            return DemoSettings::default();
        }
    };
    if let Err(e) = settings.style.validate() {
        log::warn!("Ignoring style in {}: {}", path.display(), e);
        return DemoSettings {
            style: StyleConfig::default(),
            ..settings
        };
    }
    settings
}

pub fn save_settings(settings: &DemoSettings) {
    let path = match settings_path() {
        Some(p) => p,
        None => {
            log::warn!("Cannot determine settings path");
            return;
        }
    };
    save_settings_to(settings, &path);
}

pub fn save_settings_to(settings: &DemoSettings, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create config dir {}: {}", parent.display(), e);
            return;
        }
    }

    match serde_json::to_string_pretty(settings) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to write {}: {}", path.display(), e);
            }
        }
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabkit_style::ThemePreset;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("nope.json"));
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(settings.tabs.len(), 3);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tabkit").join("settings.json");
        let mut settings = DemoSettings::default();
        settings.style.preset = ThemePreset::Safari;
        settings.bar_width = 320.0;
        save_settings_to(&settings, &path);
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn test_invalid_style_falls_back_but_keeps_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"style": {"tab_width": {"flexible": {"min": 200, "max": 100}}},
                "tabs": [{"title": "Only"}]}"#,
        )
        .unwrap();
        let settings = load_settings_from(&path);
        assert_eq!(settings.style, StyleConfig::default());
        assert_eq!(settings.tabs.len(), 1);
        assert_eq!(settings.tabs[0].title, "Only");
        assert!(!settings.tabs[0].closable);
    }

    #[test]
    fn test_garbage_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_settings_from(&path), DemoSettings::default());
    }
}
