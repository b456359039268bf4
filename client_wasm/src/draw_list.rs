//! Immediate-mode draw list: filled rectangles and text, in logical pixels

use crate::glyphs::{self, GLYPH_WIDTH};

pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Size of one font cell in logical pixels
pub const TEXT_SCALE: f32 = 2.0;

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub rect: [f32; 4], // x, y, width, height (top-left origin)
    pub tint: [f32; 4], // rgba
}

#[derive(Debug, Default)]
pub struct DrawList {
    rects: Vec<InstanceData>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.rects.push(InstanceData {
            rect: [x, y, w, h],
            tint: color,
        });
    }

    /// Draw `text` with its top-left corner at (x, y). Unknown characters leave a gap.
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let advance = (GLYPH_WIDTH + 1) as f32 * TEXT_SCALE;
        for (i, c) in text.chars().enumerate() {
            let Some(rows) = glyphs::glyph(c) else {
                continue;
            };
            let origin_x = x + i as f32 * advance;
            for (col, row) in glyphs::cells(rows) {
                self.fill_rect(
                    origin_x + col as f32 * TEXT_SCALE,
                    y + row as f32 * TEXT_SCALE,
                    TEXT_SCALE,
                    TEXT_SCALE,
                    color,
                );
            }
        }
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
