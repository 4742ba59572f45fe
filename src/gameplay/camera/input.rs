use super::{
    look_delta_from_motion, CameraMovement, InputDesc, LookSource, MovementState, PointerTracker,
};
use glam::Vec2;
use winit::{event::ElementState, keyboard::KeyCode};

/// Decides which window input reaches the camera.
///
/// Look and movement input only count while the cursor is captured. Key
/// releases always count so a key held across a capture toggle can't stick.
#[derive(Debug, Default)]
pub struct CameraInput {
    movement_state: MovementState,
    pointer: PointerTracker,
    look_source: LookSource,
}

impl CameraInput {
    pub fn new(desc: &InputDesc) -> Self {
        Self {
            movement_state: MovementState::new(),
            pointer: PointerTracker::new(),
            look_source: desc.look_source,
        }
    }

    /// Returns true if the key maps to a movement direction and was applied.
    pub fn on_key(
        &mut self,
        code: KeyCode,
        state: ElementState,
        repeat: bool,
        captured: bool,
    ) -> bool {
        if repeat {
            return false;
        }
        if !captured && state == ElementState::Pressed {
            return false;
        }
        self.movement_state.set_key(code, state)
    }

    /// Clears held keys and the pointer history, e.g. on focus loss or when
    /// cursor capture is toggled.
    pub fn reset(&mut self) {
        self.movement_state.reset();
        self.pointer.reset();
    }

    pub fn on_cursor_left(&mut self) {
        self.pointer.reset();
    }

    /// Look delta from an absolute cursor position, if cursor positions drive
    /// the look input.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64, captured: bool) -> Option<Vec2> {
        // keep tracking so the first captured move doesn't jump
        let delta = self.pointer.on_cursor_moved(x, y);
        if self.look_source != LookSource::CursorPosition || !captured {
            return None;
        }
        delta
    }

    /// Look delta from relative device motion, if raw motion drives the look
    /// input.
    pub fn on_raw_motion(&self, delta: (f64, f64), captured: bool) -> Option<Vec2> {
        if self.look_source != LookSource::RawMotion || !captured {
            return None;
        }
        Some(look_delta_from_motion(delta))
    }

    pub fn held_directions(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        self.movement_state.held_directions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(input: &CameraInput) -> Vec<CameraMovement> {
        input.held_directions().collect()
    }

    #[test]
    fn test_presses_ignored_while_not_captured() {
        let mut input = CameraInput::default();
        assert!(!input.on_key(KeyCode::KeyW, ElementState::Pressed, false, false));
        assert!(held(&input).is_empty());

        assert!(input.on_key(KeyCode::KeyW, ElementState::Pressed, false, true));
        assert_eq!(held(&input), vec![CameraMovement::Forward]);
    }

    #[test]
    fn test_release_applies_while_not_captured() {
        let mut input = CameraInput::default();
        input.on_key(KeyCode::KeyA, ElementState::Pressed, false, true);
        assert!(input.on_key(KeyCode::KeyA, ElementState::Released, false, false));
        assert!(held(&input).is_empty());
    }

    #[test]
    fn test_repeats_are_ignored() {
        let mut input = CameraInput::default();
        assert!(!input.on_key(KeyCode::KeyS, ElementState::Pressed, true, true));
        assert!(held(&input).is_empty());
    }

    #[test]
    fn test_reset_releases_keys_and_pointer() {
        let mut input = CameraInput::new(&InputDesc {
            look_source: LookSource::CursorPosition,
        });
        input.on_key(KeyCode::KeyD, ElementState::Pressed, false, true);
        input.on_cursor_moved(100.0, 100.0, true);

        input.reset();
        assert!(held(&input).is_empty());
        assert_eq!(input.on_cursor_moved(150.0, 150.0, true), None);
    }

    #[test]
    fn test_cursor_position_source() {
        let mut input = CameraInput::new(&InputDesc {
            look_source: LookSource::CursorPosition,
        });
        assert_eq!(input.on_cursor_moved(10.0, 10.0, true), None);
        assert_eq!(
            input.on_cursor_moved(20.0, 5.0, true),
            Some(Vec2::new(10.0, 5.0))
        );
        assert_eq!(input.on_raw_motion((3.0, 3.0), true), None);

        // moves while released are tracked but not applied
        assert_eq!(input.on_cursor_moved(40.0, 5.0, false), None);
        assert_eq!(
            input.on_cursor_moved(41.0, 5.0, true),
            Some(Vec2::new(1.0, 0.0))
        );
    }

    #[test]
    fn test_raw_motion_source() {
        let mut input = CameraInput::new(&InputDesc {
            look_source: LookSource::RawMotion,
        });
        assert_eq!(
            input.on_raw_motion((4.0, 2.0), true),
            Some(Vec2::new(4.0, -2.0))
        );
        assert_eq!(input.on_raw_motion((4.0, 2.0), false), None);

        input.on_cursor_moved(0.0, 0.0, true);
        assert_eq!(input.on_cursor_moved(5.0, 5.0, true), None);
    }

    #[test]
    fn test_cursor_left_suppresses_next_delta() {
        let mut input = CameraInput::new(&InputDesc {
            look_source: LookSource::CursorPosition,
        });
        input.on_cursor_moved(0.0, 0.0, true);
        input.on_cursor_left();
        assert_eq!(input.on_cursor_moved(300.0, 0.0, true), None);
    }
}
