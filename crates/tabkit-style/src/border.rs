use bitflags::bitflags;
use tabkit_core::{Color, DrawingSurface, Rect};

/// Border line thickness.
pub const BORDER_WIDTH: f32 = 1.0;

bitflags! {
    /// Edges of a rect that get a border line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BorderMask: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Left,
    Right,
    Bottom,
}

/// Slice `amount` off one edge of `rect`. Returns `(slice, remainder)`.
/// The slice never exceeds the rect's extent along the cut axis.
pub fn divide(rect: Rect, amount: f32, edge: Edge) -> (Rect, Rect) {
    let rect = rect.clamped();
    match edge {
        Edge::Top => {
            let a = amount.clamp(0.0, rect.height);
            (
                Rect::new(rect.x, rect.y, rect.width, a),
                Rect::new(rect.x, rect.y + a, rect.width, rect.height - a),
            )
        }
        Edge::Bottom => {
            let a = amount.clamp(0.0, rect.height);
            (
                Rect::new(rect.x, rect.max_y() - a, rect.width, a),
                Rect::new(rect.x, rect.y, rect.width, rect.height - a),
            )
        }
        Edge::Left => {
            let a = amount.clamp(0.0, rect.width);
            (
                Rect::new(rect.x, rect.y, a, rect.height),
                Rect::new(rect.x + a, rect.y, rect.width - a, rect.height),
            )
        }
        Edge::Right => {
            let a = amount.clamp(0.0, rect.width);
            (
                Rect::new(rect.max_x() - a, rect.y, a, rect.height),
                Rect::new(rect.x, rect.y, rect.width - a, rect.height),
            )
        }
    }
}

/// Border strips carved off a rect, in top, left, right, bottom order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderDrawing {
    Empty,
    Draw { rects: [Rect; 4], count: usize },
}

impl BorderDrawing {
    pub fn rects(&self) -> &[Rect] {
        match self {
            BorderDrawing::Empty => &[],
            BorderDrawing::Draw { rects, count } => &rects[..*count],
        }
    }

    pub fn count(&self) -> usize {
        self.rects().len()
    }
}

/// Every strip is cut from the full source rect, so strips on adjacent edges
/// overlap at the corners and each spans the whole edge.
pub fn border_strips(rect: Rect, mask: Option<BorderMask>) -> BorderDrawing {
    let Some(mask) = mask else {
        return BorderDrawing::Empty;
    };

    let mut rects = [Rect::ZERO; 4];
    let mut count = 0;
    for (flag, edge) in [
        (BorderMask::TOP, Edge::Top),
        (BorderMask::LEFT, Edge::Left),
        (BorderMask::RIGHT, Edge::Right),
        (BorderMask::BOTTOM, Edge::Bottom),
    ] {
        if mask.contains(flag) {
            rects[count] = divide(rect, BORDER_WIDTH, edge).0;
            count += 1;
        }
    }

    if count == 0 {
        return BorderDrawing::Empty;
    }
    BorderDrawing::Draw { rects, count }
}

pub fn draw_border(surface: &mut dyn DrawingSurface, border: &BorderDrawing, color: Color) {
    for rect in border.rects() {
        surface.fill_rect(*rect, color);
    }
}
