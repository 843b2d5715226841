use eframe::egui::{Color32, RichText};

/// Eye icons for visibility toggles, in two sizes. Passed to the panel
/// rather than looked up globally so embedders can supply their own.
pub trait VisibilityIcons {
    fn big(&self, visible: bool) -> RichText;
    fn small(&self, visible: bool) -> RichText;
    fn tooltip(&self, visible: bool) -> &str {
        if visible { "Visible" } else { "Not Visible" }
    }
}

/// Text glyphs; needs no image assets.
#[derive(Debug, Clone, Copy)]
pub struct GlyphIcons {
    pub visible: Color32,
    pub hidden: Color32,
}

impl Default for GlyphIcons {
    fn default() -> Self {
        Self {
            visible: Color32::from_rgb(52, 91, 146),
            hidden: Color32::GRAY,
        }
    }
}

impl GlyphIcons {
    fn glyph(&self, visible: bool) -> (&'static str, Color32) {
        if visible {
            ("👁", self.visible)
        } else {
            ("⊘", self.hidden)
        }
    }
}

impl VisibilityIcons for GlyphIcons {
    fn big(&self, visible: bool) -> RichText {
        let (glyph, color) = self.glyph(visible);
        RichText::new(glyph).size(20.0).color(color)
    }

    fn small(&self, visible: bool) -> RichText {
        let (glyph, color) = self.glyph(visible);
        RichText::new(glyph).size(12.0).color(color)
    }
}
