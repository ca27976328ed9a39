// Gesture classification: one frame's landmark geometry becomes Writing,
// Erasing, or Idle. Pure and stateless; both thresholds derive from the
// current wrist position, so the same rules hold at any hand distance from
// the camera (at the cost of being sensitive to per-frame wrist jitter).

use crate::config::GestureConfig;
use crate::pose::HandPose;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Writing,
    Erasing,
    Idle,
}

pub struct GestureClassifier {
    writing_mul: f32,
    erasing_mul: f32,
    thumb_margin: f32,
}

impl GestureClassifier {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            writing_mul: config.writing_mul,
            erasing_mul: config.erasing_mul,
            thumb_margin: config.thumb_margin,
        }
    }

    /// First match wins: Writing, then Erasing, then Idle. The order matters
    /// for poses sitting right on a threshold line.
    pub fn classify(&self, pose: &HandPose) -> Gesture {
        let wrist = pose.wrist();
        // Image coordinates grow downward, so "tip.y > threshold" means the
        // tip hangs *below* the threshold line on screen.
        let writing_threshold = wrist.y * self.writing_mul;
        let erasing_threshold = wrist.y * self.erasing_mul;

        let index = pose.index_tip().y;
        let middle = pose.middle_tip().y;
        let ring = pose.ring_tip().y;
        let pinky = pose.pinky_tip().y;

        // Index finger extended downward while the other three stay curled
        // above the line.
        if index > writing_threshold
            && middle < writing_threshold
            && ring < writing_threshold
            && pinky < writing_threshold
        {
            return Gesture::Writing;
        }

        // Open palm raised with the thumb swung outward: all four tips above
        // the stricter erasing line, plus the sideways thumb offset to tell
        // a wave apart from a plain raised hand.
        if index < erasing_threshold
            && middle < erasing_threshold
            && ring < erasing_threshold
            && pinky < erasing_threshold
            && pose.thumb_tip().x < wrist.x - self.thumb_margin
        {
            return Gesture::Erasing;
        }

        Gesture::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{
        Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
    };

    fn classifier() -> GestureClassifier {
        GestureClassifier::new(&GestureConfig::default())
    }

    /// Pose builder: wrist plus the five y values/positions the classifier
    /// actually reads; every other landmark sits at the wrist.
    fn pose(
        wrist: (f32, f32),
        thumb_x: f32,
        index_y: f32,
        middle_y: f32,
        ring_y: f32,
        pinky_y: f32,
    ) -> HandPose {
        let mut points = [Landmark { x: wrist.0, y: wrist.1 }; LANDMARK_COUNT];
        points[WRIST] = Landmark { x: wrist.0, y: wrist.1 };
        points[THUMB_TIP] = Landmark { x: thumb_x, y: wrist.1 };
        points[INDEX_TIP] = Landmark { x: wrist.0, y: index_y };
        points[MIDDLE_TIP] = Landmark { x: wrist.0, y: middle_y };
        points[RING_TIP] = Landmark { x: wrist.0, y: ring_y };
        points[PINKY_TIP] = Landmark { x: wrist.0, y: pinky_y };
        HandPose::new(points)
    }

    #[test]
    fn index_down_others_curled_is_writing() {
        // wrist at y=0.5: writing threshold 0.55, erasing threshold 0.45
        let p = pose((0.5, 0.5), 0.5, 0.6, 0.3, 0.3, 0.3);
        assert_eq!(classifier().classify(&p), Gesture::Writing);
    }

    #[test]
    fn writing_ignores_thumb_position() {
        // Same writing shape with the thumb swung far out: still Writing.
        let p = pose((0.5, 0.5), 0.1, 0.6, 0.3, 0.3, 0.3);
        assert_eq!(classifier().classify(&p), Gesture::Writing);
    }

    #[test]
    fn open_palm_with_thumb_out_is_erasing() {
        // All four tips above 0.45, thumb x below 0.5 - 0.2.
        let p = pose((0.5, 0.5), 0.25, 0.3, 0.3, 0.3, 0.3);
        assert_eq!(classifier().classify(&p), Gesture::Erasing);
    }

    #[test]
    fn raised_hand_without_thumb_offset_is_idle() {
        // The threshold bundle for erasing holds, but the thumb stays in;
        // this must fall through to Idle, not Writing.
        let p = pose((0.5, 0.5), 0.45, 0.3, 0.3, 0.3, 0.3);
        assert_eq!(classifier().classify(&p), Gesture::Idle);
    }

    #[test]
    fn relaxed_hand_is_idle() {
        // All tips near the wrist line: neither rule fires.
        let p = pose((0.5, 0.5), 0.5, 0.5, 0.5, 0.5, 0.5);
        assert_eq!(classifier().classify(&p), Gesture::Idle);
    }

    #[test]
    fn tips_between_thresholds_are_idle() {
        // Tips below the writing line but above the erasing line.
        let p = pose((0.5, 0.5), 0.25, 0.48, 0.48, 0.48, 0.48);
        assert_eq!(classifier().classify(&p), Gesture::Idle);
    }

    #[test]
    fn writing_wins_when_both_rules_match() {
        // Only satisfiable with out-of-range landmark values (negative y),
        // which backends can emit when the hand leaves the frame. With the
        // wrist at y=-0.5, thresholds are -0.55 (writing) and -0.45
        // (erasing); index at -0.5 and the others at -0.6 satisfy both
        // bundles at once. Writing is checked first and must win.
        let p = pose((0.5, -0.5), 0.1, -0.5, -0.6, -0.6, -0.6);
        assert_eq!(classifier().classify(&p), Gesture::Writing);
    }
}
