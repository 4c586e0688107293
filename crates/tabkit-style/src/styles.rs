// Built-in styles.

use std::fmt;
use std::rc::Rc;

use tabkit_core::{
    Color, DrawingSurface, MonospaceMeasure, Rect, Size, StyledText, TextMeasure, Vec2,
};

use crate::border::BorderMask;
use crate::style::{
    ButtonState, CloseButtonPosition, Style, TabWidth, ThemedStyle, TitleEditorSettings,
};
use crate::theme::Theme;
use crate::themed;

/// Bar height the built-in styles are designed for.
pub const RECOMMENDED_HEIGHT: f32 = 24.0;

pub const DEFAULT_TAB_WIDTH: TabWidth = TabWidth::Flexible {
    min: 50.0,
    max: 150.0,
};

// ──────────────────────────────────────────────
// DefaultStyle
// ──────────────────────────────────────────────

/// The stock style. With the default theme it looks like the Numbers.app
/// sheet tabs.
#[derive(Clone)]
pub struct DefaultStyle {
    pub theme: Theme,
    pub tab_button_width: TabWidth,
    pub tab_buttons_margin: (f32, f32),
    pub close_button_position: CloseButtonPosition,
    measurer: Rc<dyn TextMeasure>,
}

impl DefaultStyle {
    pub fn new(theme: Theme, measurer: Rc<dyn TextMeasure>) -> Self {
        Self {
            theme,
            tab_button_width: DEFAULT_TAB_WIDTH,
            tab_buttons_margin: (0.0, 0.0),
            close_button_position: CloseButtonPosition::Left,
            measurer,
        }
    }

    pub fn with_tab_button_width(mut self, width: TabWidth) -> Self {
        self.tab_button_width = width;
        self
    }

    pub fn with_margins(mut self, left: f32, right: f32) -> Self {
        self.tab_buttons_margin = (left, right);
        self
    }

    pub fn with_close_button_position(mut self, position: CloseButtonPosition) -> Self {
        self.close_button_position = position;
        self
    }

    pub fn measurer(&self) -> &dyn TextMeasure {
        self.measurer.as_ref()
    }
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self::new(Theme::default_theme(), Rc::new(MonospaceMeasure::default()))
    }
}

impl fmt::Debug for DefaultStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultStyle")
            .field("tab_button_width", &self.tab_button_width)
            .field("tab_buttons_margin", &self.tab_buttons_margin)
            .field("close_button_position", &self.close_button_position)
            .finish_non_exhaustive()
    }
}

impl ThemedStyle for DefaultStyle {
    fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Style for DefaultStyle {
    fn tab_button_width(&self) -> TabWidth {
        self.tab_button_width
    }

    fn tab_buttons_margin(&self) -> (f32, f32) {
        self.tab_buttons_margin
    }

    fn close_button_position(&self) -> CloseButtonPosition {
        self.close_button_position
    }

    fn tab_button_background_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_background_color(self, button)
    }

    fn tab_button_title_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_title_color(self, button)
    }

    fn title_rect(&self, title: &StyledText, bounds: Rect, showing_icon: bool) -> Rect {
        themed::title_rect(self, title, bounds, showing_icon)
    }

    fn title_editor_settings(&self) -> TitleEditorSettings {
        themed::title_editor_settings(self)
    }

    fn attributed_title(&self, button: &ButtonState<'_>) -> StyledText {
        themed::attributed_title(self, button)
    }

    fn measure(&self, text: &StyledText) -> Size {
        themed::measure(self.measurer(), text)
    }

    fn tabs_control_recommended_height(&self) -> f32 {
        RECOMMENDED_HEIGHT
    }

    fn draw_tab_button_bezel(
        &self,
        surface: &mut dyn DrawingSurface,
        button: &ButtonState<'_>,
        frame: Rect,
    ) {
        themed::draw_tab_button_bezel(self, surface, button, frame);
    }

    fn draw_tabs_control_bezel(&self, surface: &mut dyn DrawingSurface, frame: Rect) {
        themed::draw_tabs_control_bezel(self, surface, frame);
    }
}

// ──────────────────────────────────────────────
// SafariStyle
// ──────────────────────────────────────────────

/// Tabs separated by vertical rules, no top edge; the selected tab opens
/// onto the content below it.
#[derive(Clone, Debug)]
pub struct SafariStyle {
    base: DefaultStyle,
}

impl SafariStyle {
    pub fn new(measurer: Rc<dyn TextMeasure>) -> Self {
        Self::with_base(DefaultStyle::new(Theme::safari(), measurer))
    }

    pub fn with_base(base: DefaultStyle) -> Self {
        Self { base }
    }
}

impl ThemedStyle for SafariStyle {
    fn theme(&self) -> &Theme {
        &self.base.theme
    }
}

impl Style for SafariStyle {
    fn tab_button_width(&self) -> TabWidth {
        self.base.tab_button_width
    }

    fn tab_buttons_margin(&self) -> (f32, f32) {
        self.base.tab_buttons_margin
    }

    fn close_button_position(&self) -> CloseButtonPosition {
        self.base.close_button_position
    }

    fn tab_button_border_mask(&self, button: &ButtonState<'_>) -> Option<BorderMask> {
        let mut mask = BorderMask::LEFT;
        if button.position.is_trailing() {
            mask |= BorderMask::RIGHT;
        }
        if !button.selected {
            mask |= BorderMask::BOTTOM;
        }
        Some(mask)
    }

    fn tab_button_background_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_background_color(self, button)
    }

    fn tab_button_title_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_title_color(self, button)
    }

    fn title_rect(&self, title: &StyledText, bounds: Rect, showing_icon: bool) -> Rect {
        themed::title_rect(self, title, bounds, showing_icon)
    }

    fn title_editor_settings(&self) -> TitleEditorSettings {
        themed::title_editor_settings(self)
    }

    fn attributed_title(&self, button: &ButtonState<'_>) -> StyledText {
        themed::attributed_title(self, button)
    }

    fn measure(&self, text: &StyledText) -> Size {
        self.base.measure(text)
    }

    fn tabs_control_recommended_height(&self) -> f32 {
        RECOMMENDED_HEIGHT
    }

    fn tabs_control_border_mask(&self) -> Option<BorderMask> {
        Some(BorderMask::BOTTOM)
    }

    fn draw_tab_button_bezel(
        &self,
        surface: &mut dyn DrawingSurface,
        button: &ButtonState<'_>,
        frame: Rect,
    ) {
        themed::draw_tab_button_bezel(self, surface, button, frame);
    }

    fn draw_tabs_control_bezel(&self, surface: &mut dyn DrawingSurface, frame: Rect) {
        themed::draw_tabs_control_bezel(self, surface, frame);
    }
}

// ──────────────────────────────────────────────
// ChromeStyle
// ──────────────────────────────────────────────

/// Gradient tabs; background tabs sit one unit lower than the selected one,
/// which has no bottom edge.
#[derive(Clone, Debug)]
pub struct ChromeStyle {
    base: DefaultStyle,
}

/// Vertical drop applied to unselected Chrome tabs.
pub const CHROME_UNSELECTED_DROP: f32 = 1.0;

impl ChromeStyle {
    pub fn new(measurer: Rc<dyn TextMeasure>) -> Self {
        Self::with_base(
            DefaultStyle::new(Theme::chrome(), measurer)
                .with_close_button_position(CloseButtonPosition::Right),
        )
    }

    pub fn with_base(base: DefaultStyle) -> Self {
        Self { base }
    }
}

impl ThemedStyle for ChromeStyle {
    fn theme(&self) -> &Theme {
        &self.base.theme
    }
}

impl Style for ChromeStyle {
    fn tab_button_width(&self) -> TabWidth {
        self.base.tab_button_width
    }

    fn tab_buttons_margin(&self) -> (f32, f32) {
        self.base.tab_buttons_margin
    }

    fn close_button_position(&self) -> CloseButtonPosition {
        self.base.close_button_position
    }

    fn tab_button_offset(&self, button: &ButtonState<'_>) -> Vec2 {
        if button.selected {
            Vec2::ZERO
        } else {
            Vec2::new(0.0, CHROME_UNSELECTED_DROP)
        }
    }

    fn tab_button_border_mask(&self, button: &ButtonState<'_>) -> Option<BorderMask> {
        if button.selected {
            Some(BorderMask::TOP | BorderMask::LEFT | BorderMask::RIGHT)
        } else {
            Some(BorderMask::all())
        }
    }

    fn tab_button_background_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_background_color(self, button)
    }

    fn tab_button_title_color(&self, button: &ButtonState<'_>) -> Color {
        themed::tab_button_title_color(self, button)
    }

    fn title_rect(&self, title: &StyledText, bounds: Rect, showing_icon: bool) -> Rect {
        themed::title_rect(self, title, bounds, showing_icon)
    }

    fn title_editor_settings(&self) -> TitleEditorSettings {
        themed::title_editor_settings(self)
    }

    fn attributed_title(&self, button: &ButtonState<'_>) -> StyledText {
        themed::attributed_title(self, button)
    }

    fn measure(&self, text: &StyledText) -> Size {
        self.base.measure(text)
    }

    fn tabs_control_recommended_height(&self) -> f32 {
        RECOMMENDED_HEIGHT
    }

    fn draw_tab_button_bezel(
        &self,
        surface: &mut dyn DrawingSurface,
        button: &ButtonState<'_>,
        frame: Rect,
    ) {
        themed::draw_tab_button_bezel(self, surface, button, frame);
    }

    fn draw_tabs_control_bezel(&self, surface: &mut dyn DrawingSurface, frame: Rect) {
        themed::draw_tabs_control_bezel(self, surface, frame);
    }
}
