//! Scroll controller for the page scroll area.
//!
//! Owns the anchor registry (section id -> on-screen position) and the
//! smooth-scroll animation toward a requested offset. Scroll requests are
//! fire-and-forget: issuing a new target while a previous animation is in
//! flight simply retargets it.

use std::collections::HashMap;

/// Easing rate for the exponential approach toward the scroll target.
const SMOOTH_RATE: f32 = 8.0;

/// Distance below which the animation snaps to the target and stops.
const SNAP_EPSILON: f32 = 0.5;

/// Capabilities the navigation click handler needs from the page: anchor
/// lookup and scroll-to-position. Implemented by `ScrollController`; tests
/// substitute a fake.
pub trait ScrollHost {
    /// Viewport-relative top of the element registered under `id`, if the
    /// element is currently mounted.
    fn anchor_top(&self, id: &str) -> Option<f32>;

    /// Current scroll offset of the page.
    fn scroll_offset(&self) -> f32;

    /// Request a smooth scroll to the given offset. Does not block; the
    /// animation plays out over subsequent frames.
    fn scroll_to(&mut self, y: f32);
}

/// Tracks the live scroll offset, pending scroll target, and the anchors
/// registered by the page that is currently rendered.
#[derive(Debug, Default)]
pub struct ScrollController {
    offset: f32,
    target: Option<f32>,
    anchors: HashMap<String, f32>,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the on-screen top of a section heading. Pages re-register
    /// their anchors every frame, so positions stay fresh under zoom and
    /// window resizes.
    pub fn register_anchor(&mut self, id: &str, top: f32) {
        self.anchors.insert(id.to_string(), top);
    }

    /// Forget all anchors. Called on route changes so clicks against a page
    /// that has not rendered yet fall back to the no-op path.
    pub fn clear_anchors(&mut self) {
        self.anchors.clear();
    }

    /// Adopt the offset reported by the scroll area after user scrolling.
    pub fn sync_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Jump to an offset without animating (route changes land at the top).
    pub fn jump(&mut self, y: f32) {
        self.offset = y.max(0.0);
        self.target = Some(self.offset);
    }

    /// Advance the animation by `dt` seconds. Returns the offset to apply
    /// this frame, or None when no animation is active.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        let target = self.target?;
        let delta = target - self.offset;
        if delta.abs() <= SNAP_EPSILON {
            self.offset = target;
            self.target = None;
            return Some(target);
        }
        let step = 1.0 - (-dt * SMOOTH_RATE).exp();
        self.offset += delta * step;
        Some(self.offset)
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

impl ScrollHost for ScrollController {
    fn anchor_top(&self, id: &str) -> Option<f32> {
        self.anchors.get(id).copied()
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scroll_to(&mut self, y: f32) {
        // The scroll area clamps the upper bound; only negative targets need
        // correcting here.
        self.target = Some(y.max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_settled(ctrl: &mut ScrollController) -> u32 {
        let mut frames = 0;
        while ctrl.is_animating() {
            ctrl.tick(1.0 / 60.0);
            frames += 1;
            assert!(frames < 1_000, "animation failed to settle");
        }
        frames
    }

    #[test]
    fn test_anchor_registry_roundtrip() {
        let mut ctrl = ScrollController::new();
        ctrl.register_anchor("problem", 640.0);
        assert_eq!(ctrl.anchor_top("problem"), Some(640.0));
        assert_eq!(ctrl.anchor_top("overview"), None);

        ctrl.clear_anchors();
        assert_eq!(ctrl.anchor_top("problem"), None);
    }

    #[test]
    fn test_scroll_to_animates_toward_target() {
        let mut ctrl = ScrollController::new();
        ctrl.scroll_to(300.0);
        assert!(ctrl.is_animating());

        let first = ctrl.tick(1.0 / 60.0).expect("active animation");
        assert!(first > 0.0 && first < 300.0);

        run_until_settled(&mut ctrl);
        assert_eq!(ctrl.scroll_offset(), 300.0);
        assert!(!ctrl.is_animating());
        assert!(ctrl.tick(1.0 / 60.0).is_none());
    }

    #[test]
    fn test_approach_is_monotonic() {
        let mut ctrl = ScrollController::new();
        ctrl.sync_offset(500.0);
        ctrl.scroll_to(100.0);

        let mut prev = 500.0;
        while let Some(offset) = ctrl.tick(1.0 / 60.0) {
            assert!(offset <= prev, "offset moved away from the target");
            prev = offset;
        }
        assert_eq!(ctrl.scroll_offset(), 100.0);
    }

    #[test]
    fn test_new_target_supersedes_previous() {
        let mut ctrl = ScrollController::new();
        ctrl.scroll_to(300.0);
        ctrl.tick(1.0 / 60.0);
        ctrl.scroll_to(50.0);

        run_until_settled(&mut ctrl);
        assert_eq!(ctrl.scroll_offset(), 50.0);
    }

    #[test]
    fn test_negative_target_clamps_to_zero() {
        let mut ctrl = ScrollController::new();
        ctrl.sync_offset(10.0);
        ctrl.scroll_to(-120.0);
        run_until_settled(&mut ctrl);
        assert_eq!(ctrl.scroll_offset(), 0.0);
    }

    #[test]
    fn test_jump_applies_in_one_frame() {
        let mut ctrl = ScrollController::new();
        ctrl.sync_offset(800.0);
        ctrl.jump(0.0);
        assert_eq!(ctrl.tick(1.0 / 60.0), Some(0.0));
        assert!(!ctrl.is_animating());
    }

    #[test]
    fn test_sync_offset_tracks_user_scrolling() {
        let mut ctrl = ScrollController::new();
        ctrl.sync_offset(42.0);
        assert_eq!(ctrl.scroll_offset(), 42.0);
        assert!(!ctrl.is_animating());
    }
}
