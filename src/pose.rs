// Hand landmarks as delivered by a perception backend, plus the seam
// (`HandTracker`) the frame loop talks to.
//
// Landmark indices follow the MediaPipe hand topology: 21 points, wrist
// first, then four joints per finger from base to tip.

use crate::error::Error;
use crate::types::FrameBuffer;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// One landmark, normalized to [0,1] of the camera frame. Backends may emit
/// slightly out-of-range values when a point leaves the frame; anchor
/// derivation clamps before any pixel is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

/// All 21 landmarks of one tracked hand, for exactly one frame.
#[derive(Debug, Clone)]
pub struct HandPose {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandPose {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn wrist(&self) -> Landmark {
        self.landmark(WRIST)
    }

    pub fn thumb_tip(&self) -> Landmark {
        self.landmark(THUMB_TIP)
    }

    pub fn index_tip(&self) -> Landmark {
        self.landmark(INDEX_TIP)
    }

    pub fn middle_tip(&self) -> Landmark {
        self.landmark(MIDDLE_TIP)
    }

    pub fn ring_tip(&self) -> Landmark {
        self.landmark(RING_TIP)
    }

    pub fn pinky_tip(&self) -> Landmark {
        self.landmark(PINKY_TIP)
    }

    /// Index-tip position in canvas pixels, clamped to the buffer bounds.
    /// With `mirror` the x axis is flipped so on-screen motion matches a
    /// mirror view of the hand.
    pub fn anchor(&self, width: usize, height: usize, mirror: bool) -> (i32, i32) {
        let tip = self.index_tip();
        let nx = if mirror { 1.0 - tip.x } else { tip.x };
        let x = (nx * width as f32) as i32;
        let y = (tip.y * height as f32) as i32;
        (x.clamp(0, width as i32 - 1), y.clamp(0, height as i32 - 1))
    }
}

/// The perception seam: anything that can turn a camera frame into a hand
/// pose. A real landmark model plugs in here; `tracker::PointerTracker` is
/// the built-in debug backend. Constructed once, injected into the frame
/// loop, reused for the whole run.
pub trait HandTracker {
    /// `Ok(None)` means "no hand this frame": the caller skips the board
    /// update entirely and leaves the pen state as-is.
    fn detect(&mut self, frame: &FrameBuffer) -> Result<Option<HandPose>, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_with_index_tip(x: f32, y: f32) -> HandPose {
        let mut points = [Landmark { x: 0.5, y: 0.5 }; LANDMARK_COUNT];
        points[INDEX_TIP] = Landmark { x, y };
        HandPose::new(points)
    }

    #[test]
    fn anchor_scales_to_canvas_pixels() {
        let pose = pose_with_index_tip(0.25, 0.5);
        assert_eq!(pose.anchor(1280, 720, false), (320, 360));
    }

    #[test]
    fn anchor_mirrors_x() {
        let pose = pose_with_index_tip(0.25, 0.5);
        assert_eq!(pose.anchor(1280, 720, true), (960, 360));
    }

    #[test]
    fn anchor_clamps_out_of_range_landmarks() {
        let pose = pose_with_index_tip(1.2, -0.3);
        assert_eq!(pose.anchor(1280, 720, false), (1279, 0));

        let pose = pose_with_index_tip(-0.1, 1.5);
        assert_eq!(pose.anchor(1280, 720, false), (0, 719));
    }
}
