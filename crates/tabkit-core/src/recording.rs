use crate::{Color, DrawingSurface, Image, Rect, StyledText};

/// One primitive issued against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Color },
    Gradient { rect: Rect, top: Color, bottom: Color },
    Image { image: Image, rect: Rect },
    Text { text: StyledText, rect: Rect },
}

/// A surface that keeps every draw call instead of rasterizing it.
/// Zero-area primitives are dropped, matching a real surface where they
/// touch no pixels.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// All text strings drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All solid fills of the given color.
    pub fn fills_of(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn fill_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Gradient { rect, top, bottom });
    }

    fn draw_image(&mut self, image: &Image, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            rect,
        });
    }

    fn draw_text(&mut self, text: &StyledText, rect: Rect) {
        if rect.is_empty() || text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.clone(),
            rect,
        });
    }
}
