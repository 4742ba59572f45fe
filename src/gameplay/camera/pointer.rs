use glam::Vec2;
use serde::{Deserialize, Serialize};
use winit::event::MouseScrollDelta;

/// Pixel deltas are much larger than line deltas, scale them down to lines.
const PIXEL_SCROLL_SCALE: f32 = 0.01;

/// Which pointer events drive the camera's look input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookSource {
    /// Relative device motion, unaffected by the window edges.
    #[default]
    RawMotion,
    /// Differences between consecutive absolute cursor positions.
    CursorPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDesc {
    pub look_source: LookSource,
}

/// Turns absolute cursor positions into look deltas for the camera.
///
/// The returned y component is already flipped (previous y minus current y)
/// so that moving the pointer toward the top of the screen raises the view.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `None` for the first sample after creation or a reset, so a
    /// cursor entering the window does not snap the view.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Option<Vec2> {
        let current = Vec2::new(x as f32, y as f32);
        let last = self.last_pos.replace(current)?;
        Some(Vec2::new(current.x - last.x, last.y - current.y))
    }

    /// Forgets the last position, e.g. after the cursor leaves the window.
    pub fn reset(&mut self) {
        self.last_pos = None;
    }
}

/// Converts a relative raw mouse motion (positive y pointing down) to a look delta.
pub fn look_delta_from_motion(delta: (f64, f64)) -> Vec2 {
    Vec2::new(delta.0 as f32, -(delta.1 as f32))
}

/// Converts a wheel event into a scroll offset in lines.
pub fn scroll_offset(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * PIXEL_SCROLL_SCALE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_first_sample_yields_no_delta() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.on_cursor_moved(400.0, 300.0), None);
        assert_eq!(
            tracker.on_cursor_moved(410.0, 290.0),
            Some(Vec2::new(10.0, 10.0))
        );
    }

    #[test]
    fn test_moving_pointer_down_gives_negative_y() {
        let mut tracker = PointerTracker::new();
        tracker.on_cursor_moved(0.0, 0.0);
        assert_eq!(
            tracker.on_cursor_moved(-5.0, 20.0),
            Some(Vec2::new(-5.0, -20.0))
        );
    }

    #[test]
    fn test_reset_suppresses_next_delta() {
        let mut tracker = PointerTracker::new();
        tracker.on_cursor_moved(0.0, 0.0);
        tracker.reset();
        assert_eq!(tracker.on_cursor_moved(500.0, 500.0), None);
    }

    #[test]
    fn test_raw_motion_flips_y() {
        assert_eq!(look_delta_from_motion((3.0, 4.0)), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(&MouseScrollDelta::LineDelta(0.0, 2.0)), 2.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -300.0));
        assert!((scroll_offset(&pixels) - -3.0).abs() < 1e-6);
    }
}
