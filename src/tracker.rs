// Debug perception backend: synthesizes a full 21-landmark pose from the
// mouse, so the classifier and board run end-to-end without a landmark
// model. The poses are built to satisfy the classifier's actual geometry,
// not to bypass it.
//
//   hold left button  -> "index finger down" writing pose at the cursor
//   hold right button -> "open palm, thumb out" erasing pose at the cursor
//   neither           -> a relaxed fist (classifies as Idle)

use crate::draw::Drawer;
use crate::error::Error;
use crate::pose::{
    HandPose, HandTracker, Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP,
    THUMB_TIP, WRIST,
};
use crate::types::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerMode {
    Write,
    Erase,
    Rest,
}

pub struct PointerTracker {
    /// Cursor position normalized to [0,1] of the window, if known.
    pointer: Option<(f32, f32)>,
    mode: PointerMode,
    mirror: bool,
}

impl PointerTracker {
    pub fn new(mirror: bool) -> Self {
        Self {
            pointer: None,
            mode: PointerMode::Rest,
            mirror,
        }
    }

    /// Fed once per frame from the window, before `detect`.
    pub fn set_input(&mut self, drawer: &Drawer, width: usize, height: usize) {
        self.pointer = drawer
            .mouse_pos()
            .map(|(x, y)| (x as f32 / width as f32, y as f32 / height as f32));
        self.mode = if drawer.left_mouse_down() {
            PointerMode::Write
        } else if drawer.right_mouse_down() {
            PointerMode::Erase
        } else {
            PointerMode::Rest
        };
    }
}

impl HandTracker for PointerTracker {
    fn detect(&mut self, _frame: &FrameBuffer) -> Result<Option<HandPose>, Error> {
        let Some((x, y)) = self.pointer else {
            return Ok(None);
        };
        // Anchor derivation flips x when mirroring is on; pre-flip here so
        // the synthesized pose lands back under the cursor either way.
        let x = if self.mirror { 1.0 - x } else { x };
        Ok(Some(synthesize(self.mode, x, y)))
    }
}

/// Build a pose whose index tip sits at (x, y) and whose shape matches the
/// requested mode under the default thresholds. The wrist may land outside
/// [0,1] near the frame edges; that mimics a real backend and the anchor
/// clamp handles it.
fn synthesize(mode: PointerMode, x: f32, y: f32) -> HandPose {
    let mut points = [Landmark { x, y }; LANDMARK_COUNT];
    match mode {
        PointerMode::Write => {
            // Index below the writing line, the other three tips well above.
            let wrist_y = y * 0.8;
            points[WRIST] = Landmark { x, y: wrist_y };
            points[THUMB_TIP] = Landmark { x, y: wrist_y };
            let curled = Landmark { x, y: wrist_y * 0.5 };
            points[MIDDLE_TIP] = curled;
            points[RING_TIP] = curled;
            points[PINKY_TIP] = curled;
        }
        PointerMode::Erase => {
            // All four tips above the erasing line, thumb swung out.
            let wrist_y = y * 1.2 + 0.05;
            points[WRIST] = Landmark { x, y: wrist_y };
            points[THUMB_TIP] = Landmark { x: x - 0.3, y: wrist_y };
        }
        PointerMode::Rest => {
            // Everything at the cursor: a fist, neither rule fires.
        }
    }
    points[INDEX_TIP] = Landmark { x, y };
    HandPose::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GestureConfig;
    use crate::gesture::{Gesture, GestureClassifier};

    fn classify(mode: PointerMode, x: f32, y: f32) -> Gesture {
        let classifier = GestureClassifier::new(&GestureConfig::default());
        classifier.classify(&synthesize(mode, x, y))
    }

    #[test]
    fn write_pose_classifies_as_writing() {
        assert_eq!(classify(PointerMode::Write, 0.5, 0.5), Gesture::Writing);
        assert_eq!(classify(PointerMode::Write, 0.1, 0.9), Gesture::Writing);
    }

    #[test]
    fn erase_pose_classifies_as_erasing() {
        assert_eq!(classify(PointerMode::Erase, 0.5, 0.5), Gesture::Erasing);
        assert_eq!(classify(PointerMode::Erase, 0.9, 0.1), Gesture::Erasing);
    }

    #[test]
    fn rest_pose_classifies_as_idle() {
        assert_eq!(classify(PointerMode::Rest, 0.5, 0.5), Gesture::Idle);
        assert_eq!(classify(PointerMode::Rest, 0.0, 0.0), Gesture::Idle);
    }

    #[test]
    fn synthesized_index_tip_tracks_the_cursor() {
        let pose = synthesize(PointerMode::Write, 0.25, 0.5);
        assert_eq!(pose.anchor(1280, 720, false), (320, 360));
    }
}
