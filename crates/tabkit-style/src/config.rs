// Style configuration read from JSON: a preset theme plus optional overrides.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tabkit_core::{Color, TextMeasure};
use thiserror::Error;

use crate::style::{CloseButtonPosition, Style, TabWidth};
use crate::styles::{ChromeStyle, DefaultStyle, SafariStyle, DEFAULT_TAB_WIDTH};
use crate::theme::{Background, Theme, ThemePreset};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid style config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("flexible tab width has min {min} above max {max}")]
    InvalidTabWidth { min: f32, max: f32 },

    #[error("title font size must be positive, got {0}")]
    InvalidFontSize(f32),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub preset: ThemePreset,
    #[serde(default)]
    pub tab_width: Option<TabWidth>,
    /// Left and right margins around the row of buttons.
    #[serde(default)]
    pub margins: Option<[f32; 2]>,
    #[serde(default)]
    pub close_button_position: Option<CloseButtonPosition>,
    #[serde(default)]
    pub overrides: ThemeOverrides,
}

/// Individual colors replacing the preset's.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default)]
    pub bar_background: Option<Color>,
    #[serde(default)]
    pub border: Option<Color>,
    #[serde(default)]
    pub tab_background: Option<Background>,
    #[serde(default)]
    pub selected_tab_background: Option<Background>,
    #[serde(default)]
    pub title: Option<Color>,
    #[serde(default)]
    pub selected_title: Option<Color>,
    #[serde(default)]
    pub title_font_size: Option<f32>,
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StyleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&data)?;
        log::debug!("Loaded style config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(TabWidth::Flexible { min, max }) = self.tab_width {
            if min > max {
                return Err(ConfigError::InvalidTabWidth { min, max });
            }
        }
        if let Some(size) = self.overrides.title_font_size {
            if size <= 0.0 {
                return Err(ConfigError::InvalidFontSize(size));
            }
        }
        Ok(())
    }

    /// The preset theme with overrides applied.
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::preset(self.preset);
        let o = &self.overrides;

        if let Some(c) = o.bar_background {
            theme.tabs_control.background_color = c;
        }
        if let Some(c) = o.border {
            theme.tabs_control.border_color = c;
            theme.tab_button.border_color = c;
            theme.selected_tab_button.border_color = c;
            theme.unselectable_tab_button.border_color = c;
        }
        if let Some(bg) = o.tab_background {
            theme.tab_button.background = bg;
            theme.unselectable_tab_button.background = bg;
        }
        if let Some(bg) = o.selected_tab_background {
            theme.selected_tab_button.background = bg;
        }
        if let Some(c) = o.title {
            theme.tab_button.title_color = c;
        }
        if let Some(c) = o.selected_title {
            theme.selected_tab_button.title_color = c;
        }
        if let Some(size) = o.title_font_size {
            theme.tab_button.title_font.size = size;
            theme.selected_tab_button.title_font.size = size;
            theme.unselectable_tab_button.title_font.size = size;
        }
        theme
    }

    /// Build the configured style. The preset picks the style family.
    pub fn build(&self, measurer: Rc<dyn TextMeasure>) -> Rc<dyn Style> {
        let mut base = DefaultStyle::new(self.theme(), measurer)
            .with_tab_button_width(self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH));
        if let Some([left, right]) = self.margins {
            base = base.with_margins(left, right);
        }
        if let Some(position) = self.close_button_position {
            base = base.with_close_button_position(position);
        } else if self.preset == ThemePreset::Chrome {
            base = base.with_close_button_position(CloseButtonPosition::Right);
        }

        match self.preset {
            ThemePreset::Default => Rc::new(base),
            ThemePreset::Safari => Rc::new(SafariStyle::with_base(base)),
            ThemePreset::Chrome => Rc::new(ChromeStyle::with_base(base)),
        }
    }
}
