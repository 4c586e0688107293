// Theme-driven default behaviour for styles.
//
// Concrete styles implement `Style` by delegating here and override only
// what they change. Every function is generic over the style so that
// overridden hooks (icon frames, border masks, colors) are honoured.

use tabkit_core::{
    Color, DrawingSurface, LineBreakMode, Rect, Size, StyledText, TextAlignment, TextMeasure,
};

use crate::border::{border_strips, draw_border};
use crate::style::{ButtonState, IconFrames, Style, ThemedStyle, TitleEditorSettings};
use crate::theme::Background;

/// Space between a title and whatever sits next to it.
pub const TITLE_MARGIN: f32 = 5.0;

/// Inset of icons from the top and bottom of a tab.
pub const ICON_VERTICAL_PADDING: f32 = 5.0;

/// Inset of the leading icon from the left edge of a tab.
pub const ICON_LEADING_INSET: f32 = 10.0;

pub const TITLE_ALIGNMENT: TextAlignment = TextAlignment::Center;
pub const TITLE_LINE_BREAK: LineBreakMode = LineBreakMode::TruncatingMiddle;

pub const EDITOR_TEXT_COLOR: Color = Color::white(1.0 / 6.0);

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// Both frames are squares of side `height − 10`, 5 units from the top.
pub fn icon_frames(rect: Rect) -> IconFrames {
    let side = (rect.height - 2.0 * ICON_VERTICAL_PADDING).max(0.0);
    let y = rect.y + ICON_VERTICAL_PADDING;
    IconFrames {
        icon: Rect::new(rect.x + ICON_LEADING_INSET, y, side, side),
        alternative_title_icon: Rect::new(rect.x + rect.width / 2.0 - side / 2.0, y, side, side),
    }
}

/// Full-width rect with the title's height, centered vertically in `bounds`.
/// With an icon, it starts past the icon plus a margin.
pub fn title_rect<S: Style + ?Sized>(
    style: &S,
    title: &StyledText,
    bounds: Rect,
    showing_icon: bool,
) -> Rect {
    let title_size = style.measure(title);
    let full_width = Rect::new(
        bounds.x,
        bounds.mid_y() - title_size.height / 2.0 - 0.5,
        bounds.width,
        title_size.height,
    );
    padded_rect_for_icon(style, full_width, showing_icon)
}

/// The icon frame is taken from the title-height rect, not the whole tab.
fn padded_rect_for_icon<S: Style + ?Sized>(style: &S, rect: Rect, showing_icon: bool) -> Rect {
    if !showing_icon {
        return rect;
    }
    let icon = style.icon_frames(rect).icon;
    let pad = icon.max_x() - rect.x + TITLE_MARGIN;
    rect.offset_by(pad, 0.0).shrink_by(pad, 0.0)
}

pub fn measure(measurer: &dyn TextMeasure, text: &StyledText) -> Size {
    measurer.measure(&text.text, &text.font)
}

// ──────────────────────────────────────────────
// Colors & titles
// ──────────────────────────────────────────────

pub fn tab_button_background_color<S: ThemedStyle + ?Sized>(
    style: &S,
    button: &ButtonState<'_>,
) -> Color {
    style
        .theme()
        .tab_button_theme(button.selection_state())
        .background_color()
}

pub fn tab_button_title_color<S: ThemedStyle + ?Sized>(style: &S, button: &ButtonState<'_>) -> Color {
    style.theme().tab_button_theme(button.selection_state()).title_color
}

pub fn title_editor_settings<S: ThemedStyle + ?Sized>(style: &S) -> TitleEditorSettings {
    TitleEditorSettings {
        text_color: EDITOR_TEXT_COLOR,
        font: style.theme().tab_button.title_font.clone(),
        alignment: TITLE_ALIGNMENT,
    }
}

pub fn attributed_title<S: ThemedStyle + ?Sized>(style: &S, button: &ButtonState<'_>) -> StyledText {
    let active = style.theme().tab_button_theme(button.selection_state());
    StyledText {
        text: button.title.to_string(),
        font: active.title_font.clone(),
        color: active.title_color,
        alignment: TITLE_ALIGNMENT,
        line_break: TITLE_LINE_BREAK,
    }
}

// ──────────────────────────────────────────────
// Drawing
// ──────────────────────────────────────────────

pub fn draw_tabs_control_bezel<S: ThemedStyle + ?Sized>(
    style: &S,
    surface: &mut dyn DrawingSurface,
    frame: Rect,
) {
    let bar = &style.theme().tabs_control;
    surface.fill_rect(frame, bar.background_color);

    let border = border_strips(frame, style.tabs_control_border_mask());
    draw_border(surface, &border, bar.border_color);
}

pub fn draw_tab_button_bezel<S: ThemedStyle + ?Sized>(
    style: &S,
    surface: &mut dyn DrawingSurface,
    button: &ButtonState<'_>,
    frame: Rect,
) {
    let active = style.theme().tab_button_theme(button.selection_state());

    match active.background {
        Background::Gradient { top, bottom } => surface.fill_gradient(frame, top, bottom),
        Background::Flat(_) => surface.fill_rect(frame, style.tab_button_background_color(button)),
    }

    let border = border_strips(frame, style.tab_button_border_mask(button));
    draw_border(surface, &border, active.border_color);
}
