use std::fmt;
use std::rc::Rc;

use tabkit_core::ItemId;
use tabkit_style::{ButtonState, SelectionState, Style, TabPosition};

use crate::error::{Result, TabError};

// ──────────────────────────────────────────────
// TabButtonCell
// ──────────────────────────────────────────────

/// Per-button state. Everything the layout engine and the style need to
/// draw a button lives here; nothing else influences the result.
#[derive(Clone)]
pub struct TabButtonCell {
    title: String,
    item: Option<ItemId>,
    selected: bool,
    enabled: bool,
    editable: bool,
    dragging: bool,
    /// Title saved by `begin_edit`, present only while editing.
    editing: Option<String>,
    has_icon: bool,
    has_alternate_icon: bool,
    menu: Vec<String>,
    close_button_width: f32,
    position: TabPosition,
    needs_display: bool,
    style: Rc<dyn Style>,
}

impl TabButtonCell {
    pub fn new(title: impl Into<String>, style: Rc<dyn Style>) -> Self {
        Self {
            title: title.into(),
            item: None,
            selected: false,
            enabled: true,
            editable: false,
            dragging: false,
            editing: None,
            has_icon: false,
            has_alternate_icon: false,
            menu: Vec::new(),
            close_button_width: 0.0,
            position: TabPosition::Middle,
            needs_display: true,
            style,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.needs_display = true;
    }

    pub fn item(&self) -> Option<ItemId> {
        self.item
    }

    pub fn set_item(&mut self, item: Option<ItemId>) {
        self.item = item;
    }

    pub fn style(&self) -> &Rc<dyn Style> {
        &self.style
    }

    /// Point the cell at another style. The old one is dropped once no
    /// button references it.
    pub fn set_style(&mut self, style: Rc<dyn Style>) {
        self.style = style;
        self.needs_display = true;
    }

    // ── Selection ──

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Does not check `enabled`: the strip gates selection of disabled tabs.
    pub fn select(&mut self) {
        self.set_selected(true);
    }

    pub fn deselect(&mut self) {
        self.set_selected(false);
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.needs_display = true;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_display = true;
        }
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState::from_flags(self.enabled, self.selected)
    }

    // ── Dragging ──

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging != dragging {
            self.dragging = dragging;
            self.needs_display = true;
        }
    }

    // ── Editing ──

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Title as it was before the current edit began.
    pub fn title_before_edit(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Save the title and blank it so an editor can take its place.
    /// Fails without touching state on a disabled, non-editable or
    /// already-editing cell.
    pub fn begin_edit(&mut self) -> Result<()> {
        if !self.editable || !self.enabled || self.editing.is_some() {
            return Err(TabError::NotEditable);
        }
        log::debug!("Begin editing tab title {:?}", self.title);
        self.editing = Some(std::mem::take(&mut self.title));
        self.needs_display = true;
        Ok(())
    }

    pub fn end_edit(&mut self, new_title: impl Into<String>) -> Result<()> {
        let Some(previous) = self.editing.take() else {
            return Err(TabError::NotEditing);
        };
        self.title = new_title.into();
        log::debug!("End editing tab title {:?} -> {:?}", previous, self.title);
        self.needs_display = true;
        Ok(())
    }

    // ── Decorations ──

    pub fn has_icon(&self) -> bool {
        self.has_icon
    }

    pub fn set_has_icon(&mut self, has_icon: bool) {
        self.has_icon = has_icon;
        self.needs_display = true;
    }

    pub fn has_alternate_icon(&self) -> bool {
        self.has_alternate_icon
    }

    pub fn set_has_alternate_icon(&mut self, has_alternate_icon: bool) {
        self.has_alternate_icon = has_alternate_icon;
        self.needs_display = true;
    }

    pub fn menu(&self) -> &[String] {
        &self.menu
    }

    pub fn set_menu(&mut self, items: Vec<String>) {
        self.menu = items;
        self.needs_display = true;
    }

    /// A popup indicator is shown only for a non-empty menu.
    pub fn shows_menu(&self) -> bool {
        !self.menu.is_empty()
    }

    pub fn close_button_width(&self) -> f32 {
        self.close_button_width
    }

    pub fn set_close_button_width(&mut self, width: f32) {
        let width = width.max(0.0);
        if self.close_button_width != width {
            self.close_button_width = width;
            self.needs_display = true;
        }
    }

    pub fn position(&self) -> TabPosition {
        self.position
    }

    pub fn set_position(&mut self, position: TabPosition) {
        if self.position != position {
            self.position = position;
            self.needs_display = true;
        }
    }

    // ── Redraw ──

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    pub fn set_needs_display(&mut self) {
        self.needs_display = true;
    }

    /// Clear and return the redraw flag.
    pub fn take_needs_display(&mut self) -> bool {
        std::mem::replace(&mut self.needs_display, false)
    }

    /// What the style sees of this cell.
    pub fn state(&self) -> ButtonState<'_> {
        ButtonState {
            title: &self.title,
            selected: self.selected,
            enabled: self.enabled,
            dragging: self.dragging,
            position: self.position,
        }
    }
}

impl fmt::Debug for TabButtonCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabButtonCell")
            .field("title", &self.title)
            .field("item", &self.item)
            .field("selected", &self.selected)
            .field("enabled", &self.enabled)
            .field("editable", &self.editable)
            .field("dragging", &self.dragging)
            .field("editing", &self.editing)
            .field("has_icon", &self.has_icon)
            .field("has_alternate_icon", &self.has_alternate_icon)
            .field("menu", &self.menu)
            .field("close_button_width", &self.close_button_width)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
