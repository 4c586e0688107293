use serde::{Deserialize, Serialize};
use tabkit_core::{Color, DrawingSurface, Font, Rect, Size, StyledText, TextAlignment, Vec2};

use crate::border::BorderMask;
use crate::theme::Theme;

// ──────────────────────────────────────────────
// Layout policy values
// ──────────────────────────────────────────────

/// How wide each tab button is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabWidth {
    Fixed(f32),
    Flexible { min: f32, max: f32 },
}

impl TabWidth {
    /// Width of one button when `available` is shared between `count` buttons.
    pub fn resolve(&self, available: f32, count: usize) -> f32 {
        match *self {
            TabWidth::Fixed(w) => w.max(0.0),
            TabWidth::Flexible { min, max } => {
                if count == 0 {
                    return 0.0;
                }
                (available / count as f32).clamp(min, max.max(min))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloseButtonPosition {
    #[default]
    Left,
    Right,
}

/// Where a button sits in the bar. Only used to pick border edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPosition {
    Leading,
    #[default]
    Middle,
    Trailing,
    /// The only button in the bar: both leading and trailing.
    Only,
}

impl TabPosition {
    /// Position of the button at `index` in a bar of `count` buttons.
    pub fn for_index(index: usize, count: usize) -> Self {
        if count == 1 {
            TabPosition::Only
        } else if index == 0 {
            TabPosition::Leading
        } else if index + 1 == count {
            TabPosition::Trailing
        } else {
            TabPosition::Middle
        }
    }

    pub fn is_leading(self) -> bool {
        matches!(self, TabPosition::Leading | TabPosition::Only)
    }

    pub fn is_trailing(self) -> bool {
        matches!(self, TabPosition::Trailing | TabPosition::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Normal,
    Selected,
    Unselectable,
}

impl SelectionState {
    pub fn from_flags(enabled: bool, selected: bool) -> Self {
        match (enabled, selected) {
            (false, _) => SelectionState::Unselectable,
            (true, true) => SelectionState::Selected,
            (true, false) => SelectionState::Normal,
        }
    }
}

/// Snapshot of a tab button as seen by a style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonState<'a> {
    pub title: &'a str,
    pub selected: bool,
    pub enabled: bool,
    pub dragging: bool,
    pub position: TabPosition,
}

impl<'a> ButtonState<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            selected: false,
            enabled: true,
            dragging: false,
            position: TabPosition::Middle,
        }
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState::from_flags(self.enabled, self.selected)
    }
}

/// The leading icon frame and the frame of the icon shown in place of a
/// title that does not fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrames {
    pub icon: Rect,
    pub alternative_title_icon: Rect,
}

/// How an in-place title editor is primed.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleEditorSettings {
    pub text_color: Color,
    pub font: Font,
    pub alignment: TextAlignment,
}

// ──────────────────────────────────────────────
// Trait: Style
// ──────────────────────────────────────────────

/// Everything a tab bar needs to lay out and paint its buttons.
/// Geometry methods are pure; draw methods only touch the surface.
pub trait Style {
    // Tab buttons
    fn tab_button_width(&self) -> TabWidth;

    fn tab_buttons_margin(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn close_button_position(&self) -> CloseButtonPosition {
        CloseButtonPosition::Left
    }

    fn tab_button_offset(&self, _button: &ButtonState<'_>) -> Vec2 {
        Vec2::ZERO
    }

    fn tab_button_border_mask(&self, _button: &ButtonState<'_>) -> Option<BorderMask> {
        Some(BorderMask::all())
    }

    fn tab_button_background_color(&self, button: &ButtonState<'_>) -> Color;
    fn tab_button_title_color(&self, button: &ButtonState<'_>) -> Color;

    // Titles
    fn icon_frames(&self, tab_rect: Rect) -> IconFrames {
        crate::themed::icon_frames(tab_rect)
    }

    fn title_rect(&self, title: &StyledText, bounds: Rect, showing_icon: bool) -> Rect;
    fn title_editor_settings(&self) -> TitleEditorSettings;
    fn attributed_title(&self, button: &ButtonState<'_>) -> StyledText;

    /// Rendered size of a styled string.
    fn measure(&self, text: &StyledText) -> Size;

    // Tabs control
    fn tabs_control_recommended_height(&self) -> f32;

    fn tabs_control_border_mask(&self) -> Option<BorderMask> {
        Some(BorderMask::TOP | BorderMask::BOTTOM)
    }

    // Drawing
    fn draw_tab_button_bezel(
        &self,
        surface: &mut dyn DrawingSurface,
        button: &ButtonState<'_>,
        frame: Rect,
    );
    fn draw_tabs_control_bezel(&self, surface: &mut dyn DrawingSurface, frame: Rect);
}

/// A style backed by a [`Theme`]. The `themed` module implements the
/// theme-driven parts of [`Style`] for any such style.
pub trait ThemedStyle: Style {
    fn theme(&self) -> &Theme;
}
