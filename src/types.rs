// Core pixel-buffer type shared by the camera, the whiteboard, and the
// window code.

/// Packed-RGB image; each entry is 0x00RRGGBB, ready to push to minifb.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the buffer is (pixels)
    pub height: usize,     // how tall the buffer is (pixels)
    pub pixels: Vec<u32>,  // length = width * height
}

impl FrameBuffer {
    /// A buffer uniformly filled with one color (e.g. an all-white canvas).
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Pixel at (x, y). Callers pass in-bounds coordinates.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }
}

/// Pack 8-bit channels as 0x00RRGGBB.
pub fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

pub const WHITE: u32 = 0x00FF_FFFF;
pub const BLACK: u32 = 0x0000_0000;
