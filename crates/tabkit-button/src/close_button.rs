use tabkit_core::{Appearance, Asset, AssetSource, Color, DrawingSurface, Rect, Vec2};
use tabkit_style::CloseButtonPosition;

use crate::{ButtonId, CLOSE_BUTTON_INSET};

/// Square of side `height − 8`, 4 units in from the chosen edge.
pub fn close_button_frame(bounds: Rect, position: CloseButtonPosition) -> Rect {
    let side = (bounds.height - 2.0 * CLOSE_BUTTON_INSET).max(0.0);
    let x = match position {
        CloseButtonPosition::Left => bounds.x + CLOSE_BUTTON_INSET,
        CloseButtonPosition::Right => bounds.max_x() - side - CLOSE_BUTTON_INSET,
    };
    Rect::new(x, bounds.y + CLOSE_BUTTON_INSET, side, side)
}

/// Hover fill behind the close glyph: lighter on dark backgrounds, darker
/// on light ones.
pub fn highlight_color(background: Color, appearance: Appearance) -> Color {
    match appearance {
        Appearance::Dark => background.mix(Color::WHITE, 0.25),
        Appearance::Light => background.mix(Color::BLACK, 0.12),
    }
}

/// The small × inside a tab. Refers to its button by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseButton {
    owner: ButtonId,
    frame: Rect,
    visible: bool,
    hovered: bool,
}

impl CloseButton {
    pub fn new(owner: ButtonId) -> Self {
        Self {
            owner,
            frame: Rect::ZERO,
            visible: false,
            hovered: false,
        }
    }

    pub fn owner(&self) -> ButtonId {
        self.owner
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.hovered = false;
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered && self.visible;
    }

    /// Only a visible close button can be hit.
    pub fn hit(&self, point: Vec2) -> bool {
        self.visible && self.frame.contains(point)
    }

    /// `background` is the tab's background; `tint` colors the glyph.
    pub fn draw(
        &self,
        surface: &mut dyn DrawingSurface,
        assets: &dyn AssetSource,
        background: Color,
        appearance: Appearance,
        tint: Color,
    ) {
        if !self.visible {
            return;
        }
        if self.hovered {
            surface.fill_rect(self.frame, highlight_color(background, appearance));
        }
        let glyph = assets.tinted_image(Asset::Close, tint);
        let inset = Rect::new(
            self.frame.x + 1.0,
            self.frame.y + 1.0,
            self.frame.width - 2.0,
            self.frame.height - 2.0,
        )
        .clamped();
        surface.draw_image(&glyph, inset);
    }
}
