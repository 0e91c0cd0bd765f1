//! CPU-side triangle batch implementing `Surface`
//!
//! Every draw call becomes two triangles in pixel coordinates. The batch is
//! uploaded once per frame by `RenderState::render`.

use super::glyphs;
use super::surface::{Surface, TextAlign};
use super::vertex::{Vertex, colors};

/// Accumulates colored quads for one frame
#[derive(Debug, Clone)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
    width: f32,
    height: f32,
    fill_color: [f32; 4],
    font_size: f32,
    text_align: TextAlign,
}

impl QuadBatch {
    /// Create an empty batch for a surface of the given pixel size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
            width,
            height,
            fill_color: colors::FOREGROUND,
            font_size: 10.0,
            text_align: TextAlign::Left,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Surface size in pixels
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn push_quad(&mut self, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let (x2, y2) = (x + w, y + h);
        self.vertices.extend_from_slice(&[
            Vertex::new(x, y, color),
            Vertex::new(x, y2, color),
            Vertex::new(x2, y, color),
            Vertex::new(x2, y, color),
            Vertex::new(x, y2, color),
            Vertex::new(x2, y2, color),
        ]);
    }
}

impl Surface for QuadBatch {
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        // Whole-surface clears drop everything queued so far
        if x <= 0.0 && y <= 0.0 && x + width >= self.width && y + height >= self.height {
            self.vertices.clear();
        }
        self.push_quad(x, y, width, height, colors::BACKGROUND);
    }

    fn set_fill_color(&mut self, color: [f32; 4]) {
        self.fill_color = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push_quad(x, y, width, height, self.fill_color);
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        let width = glyphs::text_width(text, self.font_size);
        let left = match self.text_align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        for [cx, cy, cw, ch] in glyphs::layout(text, left, y, self.font_size) {
            self.push_quad(cx, cy, cw, ch, self.fill_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_produces_two_triangles() {
        let mut batch = QuadBatch::new(100.0, 100.0);
        batch.fill_rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(batch.vertex_count(), 6);

        let xs: Vec<f32> = batch.vertices().iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = batch.vertices().iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_fill_uses_current_color() {
        let red = [1.0, 0.0, 0.0, 1.0];
        let mut batch = QuadBatch::new(100.0, 100.0);
        batch.set_fill_color(red);
        batch.fill_rect(0.0, 0.0, 1.0, 1.0);
        assert!(batch.vertices().iter().all(|v| v.color == red));
    }

    #[test]
    fn test_empty_rect_is_skipped() {
        let mut batch = QuadBatch::new(100.0, 100.0);
        batch.fill_rect(0.0, 0.0, 0.0, 10.0);
        batch.fill_rect(0.0, 0.0, 10.0, -1.0);
        assert_eq!(batch.vertex_count(), 0);
    }

    #[test]
    fn test_full_clear_drops_queued_geometry() {
        let mut batch = QuadBatch::new(100.0, 100.0);
        batch.fill_rect(0.0, 0.0, 10.0, 10.0);
        batch.fill_rect(20.0, 20.0, 10.0, 10.0);
        batch.clear(0.0, 0.0, 100.0, 100.0);
        // Only the background quad remains
        assert_eq!(batch.vertex_count(), 6);
        assert!(batch.vertices().iter().all(|v| v.color == colors::BACKGROUND));
    }

    #[test]
    fn test_partial_clear_keeps_geometry() {
        let mut batch = QuadBatch::new(100.0, 100.0);
        batch.fill_rect(0.0, 0.0, 10.0, 10.0);
        batch.clear(0.0, 0.0, 5.0, 5.0);
        assert_eq!(batch.vertex_count(), 12);
    }

    #[test]
    fn test_text_alignment() {
        let mut left = QuadBatch::new(200.0, 100.0);
        left.set_font_size(50.0);
        left.fill_text("1", 100.0, 50.0);

        let mut centered = QuadBatch::new(200.0, 100.0);
        centered.set_font_size(50.0);
        centered.set_text_align(TextAlign::Center);
        centered.fill_text("1", 100.0, 50.0);

        let mut right = QuadBatch::new(200.0, 100.0);
        right.set_font_size(50.0);
        right.set_text_align(TextAlign::Right);
        right.fill_text("1", 100.0, 50.0);

        let min_x = |b: &QuadBatch| {
            b.vertices()
                .iter()
                .map(|v| v.position[0])
                .fold(f32::MAX, f32::min)
        };
        // "1" is 30px wide at this size; its leftmost lit column is cell 0 (bottom bar)
        assert!((min_x(&left) - 100.0).abs() < 0.001);
        assert!((min_x(&centered) - 85.0).abs() < 0.001);
        assert!((min_x(&right) - 70.0).abs() < 0.001);
    }
}
