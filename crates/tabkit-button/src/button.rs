use std::rc::Rc;

use tabkit_core::{Appearance, AssetSource, DrawingSurface, Image, ItemId, Rect, Vec2};
use tabkit_style::Style;

use crate::cell::TabButtonCell;
use crate::close_button::{close_button_frame, CloseButton};
use crate::error::{Result, TabError};
use crate::ButtonId;

// ──────────────────────────────────────────────
// TabButton
// ──────────────────────────────────────────────

/// A tab: the cell plus the pieces laid out around its title (leading
/// icon, alternative title icon, close button) and the tooltip.
#[derive(Debug, Clone)]
pub struct TabButton {
    cell: TabButtonCell,
    icon: Option<Image>,
    alternative_title_icon: Option<Image>,
    close_button: Option<CloseButton>,
    /// Frames from the last `update_visuals`.
    icon_frame: Rect,
    alternative_title_icon_frame: Rect,
    alternative_title_icon_hidden: bool,
    tooltip: Option<String>,
    hovered: bool,
}

impl TabButton {
    pub fn cell(&self) -> &TabButtonCell {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut TabButtonCell {
        &mut self.cell
    }

    pub fn title(&self) -> &str {
        self.cell.title()
    }

    pub fn item(&self) -> Option<ItemId> {
        self.cell.item()
    }

    pub fn style(&self) -> &Rc<dyn Style> {
        self.cell.style()
    }

    pub fn icon(&self) -> Option<&Image> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<Image>) {
        self.cell.set_has_icon(icon.is_some());
        self.icon = icon;
    }

    pub fn alternative_title_icon(&self) -> Option<&Image> {
        self.alternative_title_icon.as_ref()
    }

    pub fn set_alternative_title_icon(&mut self, icon: Option<Image>) {
        self.cell.set_has_alternate_icon(icon.is_some());
        self.alternative_title_icon = icon;
    }

    pub fn close_button(&self) -> Option<&CloseButton> {
        self.close_button.as_ref()
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn icon_frame(&self) -> Rect {
        self.icon_frame
    }

    pub fn alternative_title_icon_frame(&self) -> Rect {
        self.alternative_title_icon_frame
    }

    pub fn is_alternative_title_icon_hidden(&self) -> bool {
        self.alternative_title_icon_hidden
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The close button only shows while the pointer is over the tab and
    /// no mouse button is held.
    pub fn mouse_entered(&mut self, buttons_pressed: bool) {
        self.hovered = true;
        if let Some(close) = self.close_button.as_mut() {
            if !buttons_pressed {
                close.set_visible(true);
            }
        }
        self.cell.set_needs_display();
    }

    pub fn mouse_exited(&mut self) {
        self.hovered = false;
        if let Some(close) = self.close_button.as_mut() {
            close.set_visible(false);
        }
        self.cell.set_needs_display();
    }

    pub fn mouse_moved(&mut self, point: Vec2) {
        if let Some(close) = self.close_button.as_mut() {
            let over = close.frame().contains(point);
            close.set_hovered(over);
        }
    }

    pub fn close_button_hit(&self, point: Vec2) -> bool {
        self.close_button.as_ref().is_some_and(|c| c.hit(point))
    }

    /// Lay out the close button and icons for `bounds` and refresh the
    /// tooltip. The close button goes first: the title rect depends on it.
    pub fn update_visuals(&mut self, bounds: Rect) {
        let position = self.cell.style().close_button_position();
        if let Some(close) = self.close_button.as_mut() {
            let frame = close_button_frame(bounds, position);
            close.set_frame(frame);
            self.cell.set_close_button_width(frame.width);
        } else {
            self.cell.set_close_button_width(0.0);
        }

        self.icon_frame = self.cell.icon_frame(bounds);
        self.alternative_title_icon_frame = self.cell.alternative_title_icon_frame(bounds);

        let has_room = self.cell.has_room_to_draw_full_title(bounds);
        self.alternative_title_icon_hidden = has_room;
        self.tooltip = if has_room {
            None
        } else {
            Some(self.cell.title().to_string())
        };
    }

    pub fn draw(&self, surface: &mut dyn DrawingSurface, frame: Rect, assets: &dyn AssetSource) {
        self.cell.draw(surface, frame, assets);

        if let Some(icon) = self.icon.as_ref() {
            surface.draw_image(icon, self.icon_frame);
        }
        if let Some(icon) = self.alternative_title_icon.as_ref() {
            if !self.alternative_title_icon_hidden {
                surface.draw_image(icon, self.alternative_title_icon_frame);
            }
        }
        if let Some(close) = self.close_button.as_ref() {
            let state = self.cell.state();
            let style = self.cell.style();
            let background = style.tab_button_background_color(&state);
            close.draw(
                surface,
                assets,
                background,
                Appearance::of_background(background),
                style.tab_button_title_color(&state),
            );
        }
    }
}

// ──────────────────────────────────────────────
// TabButtonBuilder
// ──────────────────────────────────────────────

#[derive(Default)]
pub struct TabButtonBuilder {
    title: String,
    item: Option<ItemId>,
    style: Option<Rc<dyn Style>>,
    closable: bool,
    editable: bool,
    disabled: bool,
    icon: Option<Image>,
    alternative_title_icon: Option<Image>,
    menu: Vec<String>,
}

impl TabButtonBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn item(mut self, item: ItemId) -> Self {
        self.item = Some(item);
        self
    }

    pub fn style(mut self, style: Rc<dyn Style>) -> Self {
        self.style = Some(style);
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn icon(mut self, icon: Image) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn alternative_title_icon(mut self, icon: Image) -> Self {
        self.alternative_title_icon = Some(icon);
        self
    }

    pub fn menu(mut self, items: Vec<String>) -> Self {
        self.menu = items;
        self
    }

    /// Fails with [`TabError::MissingStyle`] when no style was given.
    pub fn build(self, id: ButtonId) -> Result<TabButton> {
        let style = self.style.ok_or(TabError::MissingStyle)?;

        let mut cell = TabButtonCell::new(self.title, style);
        cell.set_item(self.item);
        cell.set_editable(self.editable);
        cell.set_enabled(!self.disabled);
        cell.set_menu(self.menu);

        let mut button = TabButton {
            cell,
            icon: None,
            alternative_title_icon: None,
            close_button: self.closable.then(|| CloseButton::new(id)),
            icon_frame: Rect::ZERO,
            alternative_title_icon_frame: Rect::ZERO,
            alternative_title_icon_hidden: true,
            tooltip: None,
            hovered: false,
        };
        button.set_icon(self.icon);
        button.set_alternative_title_icon(self.alternative_title_icon);
        Ok(button)
    }
}
