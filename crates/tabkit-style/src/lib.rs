// Visual styling for tab bars: theme palettes, border masks, the `Style`
// contract and the built-in styles that implement it.

pub mod border;
pub mod config;
pub mod style;
pub mod styles;
pub mod theme;
pub mod themed;

pub use border::{border_strips, divide, draw_border, BorderDrawing, BorderMask, Edge};
pub use config::{ConfigError, StyleConfig, ThemeOverrides};
pub use style::{
    ButtonState, CloseButtonPosition, IconFrames, SelectionState, Style, TabPosition, TabWidth,
    ThemedStyle, TitleEditorSettings,
};
pub use styles::{ChromeStyle, DefaultStyle, SafariStyle, RECOMMENDED_HEIGHT};
pub use theme::{Background, TabButtonTheme, TabsControlTheme, Theme, ThemePreset};
pub use themed::TITLE_MARGIN;
