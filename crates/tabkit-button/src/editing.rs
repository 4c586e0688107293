// In-place title editing.

use tabkit_core::{Color, Font, Rect, TextAlignment};

use crate::cell::TabButtonCell;
use crate::error::Result;

// ──────────────────────────────────────────────
// Trait: FieldEditor
// ──────────────────────────────────────────────

/// A text-editing surface borrowed for the duration of an edit.
pub trait FieldEditor {
    fn set_frame(&mut self, frame: Rect);
    fn set_draws_background(&mut self, draws: bool);
    fn set_horizontally_resizable(&mut self, resizable: bool);
    fn set_editable(&mut self, editable: bool);
    fn set_font(&mut self, font: &Font);
    fn set_alignment(&mut self, alignment: TextAlignment);
    fn set_text_color(&mut self, color: Color);
    fn set_string(&mut self, text: &str);
    fn insert_text(&mut self, text: &str);
    fn select_all(&mut self);
    fn string(&self) -> String;
    /// Give the editor back; called exactly once per session.
    fn end_editing(&mut self);
}

/// How an edit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub original: String,
    pub title: String,
}

impl EditOutcome {
    pub fn changed(&self) -> bool {
        self.original != self.title
    }
}

// ──────────────────────────────────────────────
// EditSession
// ──────────────────────────────────────────────

/// Holds a cell in editing mode. The cell's title stays blank while the
/// editor shows the text. Committing, cancelling or dropping the session
/// releases the editor and gives the cell a title again; a dropped session
/// restores the original one.
pub struct EditSession<'a, E: FieldEditor + ?Sized> {
    cell: &'a mut TabButtonCell,
    editor: &'a mut E,
    original: String,
    finished: bool,
}

impl<'a, E: FieldEditor + ?Sized> EditSession<'a, E> {
    /// Prime `editor` over the title of `cell` laid out in `bounds`.
    /// Leaves both untouched if the cell cannot be edited.
    pub fn begin(cell: &'a mut TabButtonCell, editor: &'a mut E, bounds: Rect) -> Result<Self> {
        let frame = cell.editing_rect(bounds);
        let original = cell.title().to_string();
        cell.begin_edit()?;

        let settings = cell.style().title_editor_settings();
        editor.set_frame(frame);
        editor.set_draws_background(false);
        editor.set_horizontally_resizable(true);
        editor.set_editable(true);
        editor.set_font(&settings.font);
        editor.set_alignment(settings.alignment);
        editor.set_text_color(settings.text_color);

        // Clear first so the editor resizes to the inserted text.
        editor.set_string("");
        editor.insert_text(&original);
        editor.select_all();

        Ok(Self {
            cell,
            editor,
            original,
            finished: false,
        })
    }

    pub fn original_title(&self) -> &str {
        &self.original
    }

    pub fn editor(&mut self) -> &mut E {
        &mut *self.editor
    }

    /// Keep whatever the editor currently holds.
    pub fn commit(mut self) -> EditOutcome {
        let title = self.editor.string();
        self.finish(title)
    }

    pub fn commit_with(mut self, title: impl Into<String>) -> EditOutcome {
        self.finish(title.into())
    }

    pub fn cancel(mut self) -> EditOutcome {
        let original = self.original.clone();
        self.finish(original)
    }

    fn finish(&mut self, title: String) -> EditOutcome {
        self.finished = true;
        self.editor.end_editing();
        if let Err(e) = self.cell.end_edit(title.clone()) {
            log::warn!("Edit session finished on a cell that was not editing: {}", e);
        }
        EditOutcome {
            original: self.original.clone(),
            title,
        }
    }
}

impl<E: FieldEditor + ?Sized> Drop for EditSession<'_, E> {
    fn drop(&mut self) {
        if !self.finished {
            log::debug!("Edit session dropped, restoring {:?}", self.original);
            let original = self.original.clone();
            self.finish(original);
        }
    }
}
