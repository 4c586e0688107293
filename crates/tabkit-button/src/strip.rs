// Tab strip: owns a row of buttons, lays them out with the style's width
// policy and turns clicks into events for the embedding app.

use std::collections::HashMap;
use std::rc::Rc;

use tabkit_core::{AssetSource, DrawingSurface, ItemId, Rect, Vec2};
use tabkit_style::{Style, TabPosition};

use crate::button::{TabButton, TabButtonBuilder};
use crate::editing::{EditOutcome, EditSession, FieldEditor};
use crate::error::{Result, TabError};
use crate::ButtonId;

/// What the app should react to.
#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    Selected { button: ButtonId, item: Option<ItemId> },
    Close { button: ButtonId, item: Option<ItemId> },
    /// The popup indicator was clicked; show the menu at `anchor`.
    MenuRequested { button: ButtonId, item: Option<ItemId>, anchor: Vec2 },
    TitleEdited { button: ButtonId, item: Option<ItemId>, title: String },
}

pub struct TabStrip {
    style: Rc<dyn Style>,
    buttons: HashMap<ButtonId, TabButton>,
    order: Vec<ButtonId>,
    next_id: ButtonId,
    /// Frames from the last `layout`, in bar order.
    frames: Vec<(ButtonId, Rect)>,
    bar_frame: Rect,
}

impl TabStrip {
    pub fn new(style: Rc<dyn Style>) -> Self {
        Self {
            style,
            buttons: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            frames: Vec::new(),
            bar_frame: Rect::ZERO,
        }
    }

    fn alloc_id(&mut self) -> ButtonId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn style(&self) -> &Rc<dyn Style> {
        &self.style
    }

    /// Swap the style for every button. Styles are never mutated in place.
    pub fn set_style(&mut self, style: Rc<dyn Style>) {
        log::debug!("Replacing tab strip style for {} buttons", self.order.len());
        for button in self.buttons.values_mut() {
            button.cell_mut().set_style(Rc::clone(&style));
        }
        self.style = style;
        self.relayout();
    }

    pub fn recommended_height(&self) -> f32 {
        self.style.tabs_control_recommended_height()
    }

    // ── Buttons ──

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> &[ButtonId] {
        &self.order
    }

    pub fn button(&self, id: ButtonId) -> Option<&TabButton> {
        self.buttons.get(&id)
    }

    pub fn button_mut(&mut self, id: ButtonId) -> Option<&mut TabButton> {
        self.buttons.get_mut(&id)
    }

    fn get_mut(&mut self, id: ButtonId) -> Result<&mut TabButton> {
        self.buttons.get_mut(&id).ok_or(TabError::UnknownButton(id))
    }

    pub fn index_of(&self, id: ButtonId) -> Option<usize> {
        self.order.iter().position(|&b| b == id)
    }

    pub fn push(&mut self, builder: TabButtonBuilder) -> Result<ButtonId> {
        self.insert(self.order.len(), builder)
    }

    /// Insert at `index` (clamped to the end). The button always uses the
    /// strip's style.
    pub fn insert(&mut self, index: usize, builder: TabButtonBuilder) -> Result<ButtonId> {
        let id = self.alloc_id();
        let button = builder.style(Rc::clone(&self.style)).build(id)?;
        let index = index.min(self.order.len());
        self.buttons.insert(id, button);
        self.order.insert(index, id);
        log::debug!("Inserted tab {} at {}", id, index);
        self.relayout();
        Ok(id)
    }

    pub fn remove(&mut self, id: ButtonId) -> Result<TabButton> {
        let button = self.buttons.remove(&id).ok_or(TabError::UnknownButton(id))?;
        self.order.retain(|&b| b != id);
        log::debug!("Removed tab {}", id);
        self.relayout();
        Ok(button)
    }

    /// Move a button to `index`, e.g. at the end of a drag.
    pub fn move_button(&mut self, id: ButtonId, index: usize) -> Result<()> {
        let from = self.index_of(id).ok_or(TabError::UnknownButton(id))?;
        self.order.remove(from);
        let index = index.min(self.order.len());
        self.order.insert(index, id);
        self.relayout();
        Ok(())
    }

    // ── Selection & dragging ──

    pub fn selected(&self) -> Option<ButtonId> {
        self.order
            .iter()
            .copied()
            .find(|id| self.buttons[id].cell().is_selected())
    }

    /// Select one button and deselect the rest. Disabled buttons refuse.
    pub fn select(&mut self, id: ButtonId) -> Result<TabEvent> {
        let button = self.buttons.get(&id).ok_or(TabError::UnknownButton(id))?;
        if !button.cell().is_enabled() {
            return Err(TabError::Disabled(id));
        }
        for (&other, button) in self.buttons.iter_mut() {
            button.cell_mut().set_selected(other == id);
        }
        let item = self.buttons[&id].item();
        self.relayout();
        Ok(TabEvent::Selected { button: id, item })
    }

    pub fn set_dragging(&mut self, id: ButtonId, dragging: bool) -> Result<()> {
        self.get_mut(id)?.cell_mut().set_dragging(dragging);
        self.relayout();
        Ok(())
    }

    // ── Layout ──

    /// Frame of every button inside `bar`, in order. Buttons share the
    /// width between the style margins according to the width policy and
    /// are nudged by the style's per-button offset.
    pub fn layout(&mut self, bar: Rect) -> &[(ButtonId, Rect)] {
        self.bar_frame = bar;
        let (left, right) = self.style.tab_buttons_margin();
        let available = (bar.width - left - right).max(0.0);
        let count = self.order.len();
        let width = self.style.tab_button_width().resolve(available, count);

        self.frames.clear();
        let mut x = bar.x + left;
        for (index, &id) in self.order.iter().enumerate() {
            let Some(button) = self.buttons.get_mut(&id) else {
                continue;
            };
            button.cell_mut().set_position(TabPosition::for_index(index, count));
            let offset = self.style.tab_button_offset(&button.cell().state());
            let frame = Rect::new(x + offset.x, bar.y + offset.y, width, bar.height);
            button.update_visuals(frame);
            self.frames.push((id, frame));
            x += width;
        }
        &self.frames
    }

    fn relayout(&mut self) {
        let bar = self.bar_frame;
        self.layout(bar);
    }

    pub fn frames(&self) -> &[(ButtonId, Rect)] {
        &self.frames
    }

    pub fn frame_of(&self, id: ButtonId) -> Option<Rect> {
        self.frames.iter().find(|(b, _)| *b == id).map(|(_, r)| *r)
    }

    /// Button under `point`.
    pub fn button_at(&self, point: Vec2) -> Option<ButtonId> {
        self.frames
            .iter()
            .find(|(_, r)| r.contains(point))
            .map(|(id, _)| *id)
    }

    // ── Input ──

    /// Route pointer movement to hover state.
    pub fn mouse_moved(&mut self, point: Vec2, buttons_pressed: bool) {
        let hovered = self.button_at(point);
        for (&id, button) in self.buttons.iter_mut() {
            if Some(id) == hovered {
                if !button.is_hovered() {
                    button.mouse_entered(buttons_pressed);
                }
                button.mouse_moved(point);
            } else if button.is_hovered() {
                button.mouse_exited();
            }
        }
    }

    /// Close button, then popup indicator, then the tab itself.
    pub fn click(&mut self, point: Vec2) -> Option<TabEvent> {
        let id = self.button_at(point)?;
        let frame = self.frame_of(id)?;
        let button = &self.buttons[&id];

        if button.close_button_hit(point) {
            return self.close_button_pressed(id).ok();
        }
        if button.cell().popup_hit(point, frame) {
            let popup = button.cell().popup_rect(frame);
            return Some(TabEvent::MenuRequested {
                button: id,
                item: button.item(),
                anchor: Vec2::new(popup.mid_x(), popup.max_y()),
            });
        }
        match self.select(id) {
            Ok(event) => Some(event),
            Err(e) => {
                log::debug!("Click ignored: {}", e);
                None
            }
        }
    }

    /// Resolve a close button back to its tab. The tab stays in the strip
    /// until the app removes it.
    pub fn close_button_pressed(&self, owner: ButtonId) -> Result<TabEvent> {
        let button = self.buttons.get(&owner).ok_or(TabError::UnknownButton(owner))?;
        Ok(TabEvent::Close {
            button: owner,
            item: button.item(),
        })
    }

    // ── Editing ──

    /// Start editing a title in place. Needs a prior `layout` so the editor
    /// can sit over the title.
    pub fn edit_title<'a, E: FieldEditor + ?Sized>(
        &'a mut self,
        id: ButtonId,
        editor: &'a mut E,
    ) -> Result<EditSession<'a, E>> {
        if !self.buttons.contains_key(&id) {
            return Err(TabError::UnknownButton(id));
        }
        let frame = match self.frame_of(id) {
            Some(frame) if !self.bar_frame.is_empty() => frame,
            _ => {
                log::debug!("Refusing to edit tab {} before the strip is laid out", id);
                return Err(TabError::NotLaidOut(id));
            }
        };
        let button = self.get_mut(id)?;
        EditSession::begin(button.cell_mut(), editor, frame)
    }

    /// Event for a finished edit, if the title actually changed.
    pub fn title_edited(&mut self, id: ButtonId, outcome: &EditOutcome) -> Option<TabEvent> {
        self.relayout();
        if !outcome.changed() {
            return None;
        }
        let item = self.buttons.get(&id)?.item();
        Some(TabEvent::TitleEdited {
            button: id,
            item,
            title: outcome.title.clone(),
        })
    }

    // ── Drawing ──

    pub fn draw(&mut self, surface: &mut dyn DrawingSurface, assets: &dyn AssetSource) {
        self.style.draw_tabs_control_bezel(surface, self.bar_frame);
        for (id, frame) in &self.frames {
            if let Some(button) = self.buttons.get_mut(id) {
                button.draw(surface, *frame, assets);
                button.cell_mut().take_needs_display();
            }
        }
    }

    /// Buttons whose state changed since the last draw.
    pub fn dirty(&self) -> Vec<ButtonId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.buttons[id].cell().needs_display())
            .collect()
    }
}
