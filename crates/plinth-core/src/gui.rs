//! Editor-related traits.
//!
//! The framework does not draw anything itself. An editor describes its
//! window constraints and a static [`View`]; the format layer renders it.

use crate::types::Size;

/// Size constraints for the editor window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConstraints {
    /// Minimum size.
    pub min: Size,
    /// Maximum size.
    pub max: Size,
    /// Whether the editor is resizable.
    pub resizable: bool,
}

impl Default for EditorConstraints {
    fn default() -> Self {
        Self {
            min: Size::new(400, 300),
            max: Size::new(1600, 1200),
            resizable: true,
        }
    }
}

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// White.
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Dark grey.
    pub const DARK_GREY: Color = Color::rgb(0x55, 0x55, 0x55);

    /// Create a colour from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single text label centred in the editor bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    /// Text to draw.
    pub text: &'static str,
    /// Text colour.
    pub color: Color,
    /// Font height in points.
    pub font_size: f32,
}

/// Static description of what the editor shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// Fill colour for the whole editor area.
    pub background: Color,
    /// Optional centred label.
    pub label: Option<Label>,
}

/// Trait for plugin editor callbacks.
///
/// Implement this trait to provide editor configuration and lifecycle hooks.
pub trait EditorDelegate: Send {
    /// Get the current editor size.
    fn size(&self) -> Size;

    /// Get the editor size constraints.
    fn constraints(&self) -> EditorConstraints {
        EditorConstraints::default()
    }

    /// What the editor shows.
    fn view(&self) -> View;

    /// Called when the host resizes the editor.
    ///
    /// Returns the size actually applied after the constraints.
    fn resized(&mut self, new_size: Size) -> Size {
        let constraints = self.constraints();
        if !constraints.resizable {
            return self.size();
        }
        let applied = new_size.clamp(constraints.min, constraints.max);
        self.set_size(applied);
        applied
    }

    /// Store a size that already satisfies the constraints.
    fn set_size(&mut self, size: Size);
}
