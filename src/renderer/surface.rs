//! Immediate-mode 2D drawing surface
//!
//! Mirrors the subset of a canvas 2D context the game needs. Coordinates are
//! pixels with the origin at the top-left corner.

/// Horizontal anchoring for `fill_text`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A 2D rectangle/text drawing target
pub trait Surface {
    /// Erase a region back to the background color
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Color used by subsequent `fill_rect`/`fill_text` calls
    fn set_fill_color(&mut self, color: [f32; 4]);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Text cap height in pixels
    fn set_font_size(&mut self, size: f32);

    fn set_text_align(&mut self, align: TextAlign);

    /// Draw `text` with its baseline at `y`
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}
