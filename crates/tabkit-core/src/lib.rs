// Core types and traits shared by every tabkit crate.
// Geometry is y-down: `y` is the top edge, `y + height` the bottom edge.

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// A rect with no area draws nothing.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Move the origin, keeping the size.
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Reduce the size, keeping the origin. Never goes below zero.
    pub fn shrink_by(self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.x,
            self.y,
            (self.width - dx).max(0.0),
            (self.height - dy).max(0.0),
        )
    }

    /// Clamp negative extents to zero.
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ──────────────────────────────────────────────
// Identity
// ──────────────────────────────────────────────

/// Opaque token the embedding app attaches to a tab. Never inspected,
/// only handed back in events.
pub type ItemId = u64;

// ──────────────────────────────────────────────
// Colors
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Gray level, like a calibrated-white color.
    pub const fn white(level: f32) -> Self {
        Self::rgb(level, level, level)
    }

    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const DARK_GRAY: Self = Self::white(1.0 / 3.0);

    /// Perceived brightness (Rec. 601 weights).
    pub fn luminance(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    pub fn is_dark(&self) -> bool {
        self.luminance() < 0.5
    }

    /// Linear blend towards `other`; `t` is clamped to `0..=1`.
    pub fn mix(&self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }
}

/// Light or dark rendering context. Passed explicitly wherever a color
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    /// The appearance a surface of this color implies.
    pub fn of_background(color: Color) -> Self {
        if color.is_dark() {
            Appearance::Dark
        } else {
            Appearance::Light
        }
    }
}

// ──────────────────────────────────────────────
// Text Styling
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            family: "system".to_string(),
            size,
            bold: false,
        }
    }

    pub fn bold_system(size: f32) -> Self {
        Self {
            bold: true,
            ..Self::system(size)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreakMode {
    TruncatingHead,
    #[default]
    TruncatingMiddle,
    TruncatingTail,
}

/// A string with everything needed to measure and draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledText {
    pub text: String,
    pub font: Font,
    pub color: Color,
    pub alignment: TextAlignment,
    pub line_break: LineBreakMode,
}

impl StyledText {
    pub fn new(text: impl Into<String>, font: Font, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            alignment: TextAlignment::default(),
            line_break: LineBreakMode::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

// ──────────────────────────────────────────────
// Images
// ──────────────────────────────────────────────

/// Glyphs bundled with the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    PullDown,
    Close,
}

/// An image handle: a bundled asset or an app-supplied image, optionally tinted.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub source: ImageSource,
    pub size: Size,
    pub tint: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Bundled(Asset),
    Named(String),
}

impl Image {
    pub fn named(name: impl Into<String>, size: Size) -> Self {
        Self {
            source: ImageSource::Named(name.into()),
            size,
            tint: None,
        }
    }

    pub fn tinted(&self, tint: Color) -> Self {
        Self {
            tint: Some(tint),
            ..self.clone()
        }
    }
}

// ──────────────────────────────────────────────
// Trait: DrawingSurface
// ──────────────────────────────────────────────

/// Where tabs are painted. All visual output goes through this trait.
pub trait DrawingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Vertical gradient, `top` at `rect.y` and `bottom` at `rect.max_y()`.
    fn fill_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
    fn draw_image(&mut self, image: &Image, rect: Rect);
    fn draw_text(&mut self, text: &StyledText, rect: Rect);
}

// ──────────────────────────────────────────────
// Trait: TextMeasure
// ──────────────────────────────────────────────

pub trait TextMeasure {
    /// Rendered size of `text` set in `font`, on a single line.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Fixed-advance measurement: every display column is `advance × font.size`
/// wide and a line is `line_height × font.size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(0.6, 1.25)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font: &Font) -> Size {
        let columns = UnicodeWidthStr::width(text) as f32;
        Size::new(
            columns * self.advance * font.size,
            self.line_height * font.size,
        )
    }
}

// ──────────────────────────────────────────────
// Trait: AssetSource
// ──────────────────────────────────────────────

/// Bundled image lookup.
pub trait AssetSource {
    fn image(&self, asset: Asset) -> Image;

    fn tinted_image(&self, asset: Asset, tint: Color) -> Image {
        self.image(asset).tinted(tint)
    }
}

/// Intrinsic sizes of the glyphs shipped with the control.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledAssets;

pub const PULL_DOWN_SIZE: Size = Size::new(8.0, 6.0);
pub const CLOSE_GLYPH_SIZE: Size = Size::new(12.0, 12.0);

impl AssetSource for BundledAssets {
    fn image(&self, asset: Asset) -> Image {
        let size = match asset {
            Asset::PullDown => PULL_DOWN_SIZE,
            Asset::Close => CLOSE_GLYPH_SIZE,
        };
        Image {
            source: ImageSource::Bundled(asset),
            size,
            tint: None,
        }
    }
}
