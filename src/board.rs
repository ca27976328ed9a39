// The persistent drawing surface and its pen state machine.
//
// One `update` per frame. Writing and Erasing connect the current anchor
// point to the previous frame's point with a thick segment; Idle drops the
// previous point, so the next stroke starts fresh instead of joining
// wherever the pen last was. That single Option is the whole state machine.

use crate::config::CanvasConfig;
use crate::draw::draw_segment;
use crate::gesture::Gesture;
use crate::types::{rgb, FrameBuffer, WHITE};

pub struct Whiteboard {
    canvas: FrameBuffer,
    prev_point: Option<(i32, i32)>,
    pen_color: u32,
    pen_thickness: u32,
    eraser_thickness: u32,
}

impl Whiteboard {
    /// A fresh all-white board.
    pub fn new(config: &CanvasConfig) -> Self {
        let [r, g, b] = config.pen_color;
        Self {
            canvas: FrameBuffer::filled(config.width, config.height, WHITE),
            prev_point: None,
            pen_color: rgb(r, g, b),
            pen_thickness: config.pen_thickness,
            eraser_thickness: config.eraser_thickness,
        }
    }

    /// Read-only view for compositing onto the screen.
    pub fn canvas(&self) -> &FrameBuffer {
        &self.canvas
    }

    /// Consume one frame's (gesture, anchor point) sample.
    pub fn update(&mut self, gesture: Gesture, point: (i32, i32)) {
        match gesture {
            Gesture::Writing => {
                if let Some(prev) = self.prev_point {
                    draw_segment(&mut self.canvas, prev, point, self.pen_thickness, self.pen_color);
                }
                self.prev_point = Some(point);
            }
            Gesture::Erasing => {
                // Erasing is drawing in white with a fatter tip, not an area
                // fill; fast motion between frames can leave thin un-erased
                // streaks along the path.
                if let Some(prev) = self.prev_point {
                    draw_segment(
                        &mut self.canvas,
                        prev,
                        point,
                        self.eraser_thickness,
                        WHITE,
                    );
                }
                self.prev_point = Some(point);
            }
            Gesture::Idle => {
                self.prev_point = None;
            }
        }
    }

    /// Wipe the whole board back to white. Pen state is untouched.
    pub fn clear(&mut self) {
        for px in &mut self.canvas.pixels {
            *px = WHITE;
        }
    }
}
