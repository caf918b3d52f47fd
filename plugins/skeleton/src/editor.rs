//! Placeholder editor: a grey panel with one centred label.

use plinth::prelude::*;

/// Size the editor opens with.
pub const INITIAL_SIZE: Size = Size::new(400, 300);
/// Largest size the host may resize the editor to.
pub const MAX_SIZE: Size = Size::new(800, 600);

const VIEW: View = View {
    background: Color::DARK_GREY,
    label: Some(Label {
        text: "Wassup Bro",
        color: Color::WHITE,
        font_size: 14.0,
    }),
};

/// The skeleton's editor. Holds nothing but its current size.
#[derive(Debug)]
pub struct SkeletonEditor {
    size: Size,
}

impl SkeletonEditor {
    pub fn new() -> Self {
        Self { size: INITIAL_SIZE }
    }
}

impl Default for SkeletonEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorDelegate for SkeletonEditor {
    fn size(&self) -> Size {
        self.size
    }

    fn constraints(&self) -> EditorConstraints {
        EditorConstraints {
            min: INITIAL_SIZE,
            max: MAX_SIZE,
            resizable: true,
        }
    }

    fn view(&self) -> View {
        VIEW
    }

    fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view() {
        let editor = SkeletonEditor::new();
        assert_eq!(editor.size(), Size::new(400, 300));

        let view = editor.view();
        assert_eq!(view.background, Color::DARK_GREY);
        let label = view.label.unwrap();
        assert_eq!(label.text, "Wassup Bro");
        assert_eq!(label.color, Color::WHITE);
        assert_eq!(label.font_size, 14.0);
    }

    #[test]
    fn test_resize_is_clamped() {
        let mut editor = SkeletonEditor::new();
        assert_eq!(editor.resized(Size::new(600, 450)), Size::new(600, 450));
        assert_eq!(editor.resized(Size::new(2000, 100)), Size::new(800, 300));
        assert_eq!(editor.size(), Size::new(800, 300));
    }
}
