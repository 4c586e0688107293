use tabkit_core::{Asset, AssetSource, Color, DrawingSurface, Rect};

use crate::cell::TabButtonCell;

/// Tint of the popup indicator glyph.
pub const POPUP_TINT: Color = Color::DARK_GRAY;

impl TabButtonCell {
    /// Bezel, title and popup indicator. Icons and the close button belong
    /// to the owning button.
    pub fn draw(&self, surface: &mut dyn DrawingSurface, frame: Rect, assets: &dyn AssetSource) {
        let state = self.state();
        self.style().draw_tab_button_bezel(surface, &state, frame);

        if self.has_room_to_draw_full_title(frame) || !self.has_alternate_icon() {
            let title = self.style().attributed_title(&state);
            surface.draw_text(&title, self.title_rect_for_bounds(frame));
        }

        if self.shows_menu() {
            let image = assets.tinted_image(Asset::PullDown, POPUP_TINT);
            surface.draw_image(&image, self.popup_rect(frame));
        }
    }
}
