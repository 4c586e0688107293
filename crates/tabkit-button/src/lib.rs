// Tab buttons: per-button state, the title layout engine, in-place title
// editing, the close button and the strip that owns a row of buttons.

mod button;
mod cell;
mod close_button;
mod draw;
mod editing;
mod error;
mod layout;
mod strip;
mod tests;

pub use button::{TabButton, TabButtonBuilder};
pub use cell::TabButtonCell;
pub use close_button::{close_button_frame, highlight_color, CloseButton};
pub use editing::{EditOutcome, EditSession, FieldEditor};
pub use error::{Result, TabError};
pub use strip::{TabEvent, TabStrip};

/// Identity of a button inside a [`TabStrip`].
pub type ButtonId = u64;

/// Inset of the close button from the button edges.
pub const CLOSE_BUTTON_INSET: f32 = 4.0;

/// Distance between the popup indicator and the right edge.
pub const POPUP_RIGHT_INSET: f32 = 8.0;

/// Fixed width added to the title when sizing a button to its content.
pub const CELL_CONTENT_PADDING: f32 = 36.0;
