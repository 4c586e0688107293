// Theme palettes: colors and fonts per tab state and per bar region.

use serde::{Deserialize, Serialize};
use tabkit_core::{Color, Font};

use crate::style::SelectionState;

/// Default title font size.
pub const TITLE_FONT_SIZE: f32 = 13.0;

/// How a button background is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Flat(Color),
    /// Vertical gradient, `top` color at the top edge.
    Gradient { top: Color, bottom: Color },
}

impl Background {
    /// The representative single color: the flat fill, or the gradient's top.
    pub fn color(&self) -> Color {
        match *self {
            Background::Flat(c) => c,
            Background::Gradient { top, .. } => top,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabButtonTheme {
    pub background: Background,
    pub border_color: Color,
    pub title_color: Color,
    pub title_font: Font,
}

impl TabButtonTheme {
    pub fn background_color(&self) -> Color {
        self.background.color()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabsControlTheme {
    pub background_color: Color,
    pub border_color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub tab_button: TabButtonTheme,
    pub selected_tab_button: TabButtonTheme,
    pub unselectable_tab_button: TabButtonTheme,
    pub tabs_control: TabsControlTheme,
}

impl Theme {
    pub fn tab_button_theme(&self, state: SelectionState) -> &TabButtonTheme {
        match state {
            SelectionState::Normal => &self.tab_button,
            SelectionState::Selected => &self.selected_tab_button,
            SelectionState::Unselectable => &self.unselectable_tab_button,
        }
    }

    pub fn preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::Default => Self::default_theme(),
            ThemePreset::Chrome => Self::chrome(),
            ThemePreset::Safari => Self::safari(),
        }
    }

    /// Light gray tabs in the manner of Numbers.app.
    pub fn default_theme() -> Self {
        let font = Font::system(TITLE_FONT_SIZE);
        let border = Color::white(0.75);
        let tab_button = TabButtonTheme {
            background: Background::Flat(Color::white(0.95)),
            border_color: border,
            title_color: Color::white(0.55),
            title_font: font.clone(),
        };
        Self {
            selected_tab_button: TabButtonTheme {
                background: Background::Flat(Color::white(0.99)),
                title_color: Color::rgb(0.20, 0.40, 0.85),
                title_font: Font::bold_system(TITLE_FONT_SIZE),
                ..tab_button.clone()
            },
            unselectable_tab_button: TabButtonTheme {
                title_color: Color::white(0.75),
                ..tab_button.clone()
            },
            tab_button,
            tabs_control: TabsControlTheme {
                background_color: Color::white(0.95),
                border_color: border,
            },
        }
    }

    /// Gradient tabs with a bright selected tab.
    pub fn chrome() -> Self {
        let font = Font::system(TITLE_FONT_SIZE - 1.0);
        let border = Color::white(0.62);
        let tab_button = TabButtonTheme {
            background: Background::Gradient {
                top: Color::white(0.88),
                bottom: Color::white(0.80),
            },
            border_color: border,
            title_color: Color::white(0.30),
            title_font: font.clone(),
        };
        Self {
            selected_tab_button: TabButtonTheme {
                background: Background::Gradient {
                    top: Color::white(0.98),
                    bottom: Color::white(0.94),
                },
                title_color: Color::BLACK,
                ..tab_button.clone()
            },
            unselectable_tab_button: TabButtonTheme {
                title_color: Color::white(0.60),
                ..tab_button.clone()
            },
            tab_button,
            tabs_control: TabsControlTheme {
                background_color: Color::white(0.80),
                border_color: border,
            },
        }
    }

    /// Flat gray tabs, selected one slightly lighter.
    pub fn safari() -> Self {
        let font = Font::system(TITLE_FONT_SIZE - 1.0);
        let border = Color::white(0.66);
        let tab_button = TabButtonTheme {
            background: Background::Flat(Color::white(0.79)),
            border_color: border,
            title_color: Color::white(0.20),
            title_font: font.clone(),
        };
        Self {
            selected_tab_button: TabButtonTheme {
                background: Background::Flat(Color::white(0.86)),
                title_color: Color::BLACK,
                ..tab_button.clone()
            },
            unselectable_tab_button: TabButtonTheme {
                title_color: Color::white(0.55),
                ..tab_button.clone()
            },
            tab_button,
            tabs_control: TabsControlTheme {
                background_color: Color::white(0.79),
                border_color: border,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Chrome,
    Safari,
}
