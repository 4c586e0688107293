// Title layout engine.
//
// The title rect starts from the style's rect and is reduced by a fixed
// sequence of deductions. Each one only removes space; widths stop at zero.

use tabkit_core::{Rect, Size, Vec2, PULL_DOWN_SIZE};
use tabkit_style::TITLE_MARGIN;

use crate::cell::TabButtonCell;
use crate::{CELL_CONTENT_PADDING, POPUP_RIGHT_INSET};

/// Remove `amount` from the right side of `rect`'s width.
fn deduct(rect: Rect, amount: f32, what: &str) -> Rect {
    if rect.width < amount {
        log::trace!(
            "Title rect clamped to zero width by {} ({} < {})",
            what,
            rect.width,
            amount
        );
    }
    rect.shrink_by(amount, 0.0)
}

impl TabButtonCell {
    /// Measured title width plus a margin on each side.
    pub fn required_minimum_width(&self) -> f32 {
        let title = self.style().attributed_title(&self.state());
        self.style().measure(&title).width + 2.0 * TITLE_MARGIN
    }

    /// The rect the title is drawn into.
    pub fn title_rect_for_bounds(&self, bounds: Rect) -> Rect {
        let rect = self.title_rect_before_icon(bounds);
        if !self.has_icon() {
            return rect;
        }
        let icon_width = self.style().icon_frames(bounds).icon.width;
        rect.offset_by(icon_width, 0.0).shrink_by(icon_width, 0.0)
    }

    /// Title rect with every deduction except the attached-icon one.
    fn title_rect_before_icon(&self, bounds: Rect) -> Rect {
        let style = self.style();
        let title = style.attributed_title(&self.state());
        let mut rect = style
            .title_rect(&title, bounds, self.has_icon())
            .clamped();

        rect = rect
            .offset_by(2.0 * TITLE_MARGIN, 0.0)
            .shrink_by(2.0 * TITLE_MARGIN, 0.0);

        if self.is_dragging() {
            rect = deduct(rect, 2.0 * TITLE_MARGIN, "drag");
        }
        if self.close_button_width() > 0.0 {
            rect = deduct(rect, self.close_button_width() + 2.0 * TITLE_MARGIN, "close button");
        }
        if self.shows_menu() {
            let popup = self.popup_rect(bounds);
            rect = deduct(rect, popup.width + 2.0 * TITLE_MARGIN, "popup");
        }
        rect
    }

    /// Whether the whole title fits. When it does not, the alternative
    /// icon replaces the title and the title becomes a tooltip.
    pub fn has_room_to_draw_full_title(&self, bounds: Rect) -> bool {
        self.required_minimum_width() <= self.title_rect_before_icon(bounds).width
    }

    /// Editors are placed exactly over the title.
    pub fn editing_rect(&self, bounds: Rect) -> Rect {
        self.title_rect_for_bounds(bounds)
    }

    /// Popup indicator: pinned near the right edge, vertically centered.
    pub fn popup_rect(&self, frame: Rect) -> Rect {
        let size = PULL_DOWN_SIZE;
        Rect::new(
            frame.max_x() - size.width - POPUP_RIGHT_INSET,
            frame.mid_y() - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// True when `point` lands on the popup indicator of a cell with a menu.
    pub fn popup_hit(&self, point: Vec2, frame: Rect) -> bool {
        self.shows_menu() && self.popup_rect(frame).contains(point)
    }

    /// Size that shows the whole title, plus room for the popup indicator.
    pub fn cell_size(&self, _bounds: Rect) -> Size {
        let title = self.style().attributed_title(&self.state());
        let title_size = self.style().measure(&title);
        // An empty menu shows no indicator, so it reserves no room either.
        let popup = if self.shows_menu() {
            PULL_DOWN_SIZE
        } else {
            Size::ZERO
        };
        Size::new(
            title_size.width + popup.width * 2.0 + CELL_CONTENT_PADDING,
            title_size.height.max(popup.height),
        )
    }

    /// Frame of the leading icon: right before the centered title when the
    /// title fits, right before the title rect otherwise.
    pub fn icon_frame(&self, bounds: Rect) -> Rect {
        let frames = self.style().icon_frames(bounds);
        let title_rect = self.title_rect_for_bounds(bounds);
        let title_x = if self.has_room_to_draw_full_title(bounds) {
            title_rect.x + (title_rect.width - self.required_minimum_width()) / 2.0
        } else {
            title_rect.x
        };
        Rect {
            x: title_x - frames.icon.width,
            ..frames.icon
        }
    }

    /// Frame of the icon shown in place of a title that does not fit.
    pub fn alternative_title_icon_frame(&self, bounds: Rect) -> Rect {
        self.style().icon_frames(bounds).alternative_title_icon
    }
}
