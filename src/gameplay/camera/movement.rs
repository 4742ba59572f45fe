use winit::{event::ElementState, keyboard::KeyCode};

/// Discrete translation commands understood by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 6] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
    ];

    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(Self::Forward),
            KeyCode::KeyS => Some(Self::Backward),
            KeyCode::KeyA => Some(Self::Left),
            KeyCode::KeyD => Some(Self::Right),
            KeyCode::Space => Some(Self::Up),
            KeyCode::ControlLeft => Some(Self::Down),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AxesState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl AxesState {
    fn axis_mut(&mut self, direction: CameraMovement) -> &mut bool {
        match direction {
            CameraMovement::Forward => &mut self.forward,
            CameraMovement::Backward => &mut self.backward,
            CameraMovement::Left => &mut self.left,
            CameraMovement::Right => &mut self.right,
            CameraMovement::Up => &mut self.up,
            CameraMovement::Down => &mut self.down,
        }
    }

    fn is_held(&self, direction: CameraMovement) -> bool {
        match direction {
            CameraMovement::Forward => self.forward,
            CameraMovement::Backward => self.backward,
            CameraMovement::Left => self.left,
            CameraMovement::Right => self.right,
            CameraMovement::Up => self.up,
            CameraMovement::Down => self.down,
        }
    }
}

/// Tracks which movement keys are held between frames.
#[derive(Debug, Default)]
pub struct MovementState {
    pub axes: AxesState,
}

impl MovementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key maps to a movement direction.
    pub fn set_key(&mut self, code: KeyCode, state: ElementState) -> bool {
        let Some(direction) = CameraMovement::from_key_code(code) else {
            return false;
        };
        *self.axes.axis_mut(direction) = state == ElementState::Pressed;
        true
    }

    /// Directions whose keys are currently held, in a fixed order.
    pub fn held_directions(&self) -> impl Iterator<Item = CameraMovement> + '_ {
        CameraMovement::ALL
            .into_iter()
            .filter(|direction| self.axes.is_held(*direction))
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        self.axes = AxesState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_tracks_held_keys() {
        let mut state = MovementState::new();
        assert!(state.set_key(KeyCode::KeyW, ElementState::Pressed));
        assert!(state.set_key(KeyCode::KeyD, ElementState::Pressed));
        assert!(state.set_key(KeyCode::Space, ElementState::Pressed));
        assert_eq!(
            state.held_directions().collect::<Vec<_>>(),
            vec![
                CameraMovement::Forward,
                CameraMovement::Right,
                CameraMovement::Up
            ]
        );

        assert!(state.set_key(KeyCode::KeyW, ElementState::Released));
        assert_eq!(
            state.held_directions().collect::<Vec<_>>(),
            vec![CameraMovement::Right, CameraMovement::Up]
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut state = MovementState::new();
        assert!(!state.set_key(KeyCode::KeyQ, ElementState::Pressed));
        assert_eq!(state.held_directions().count(), 0);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut state = MovementState::new();
        for code in [KeyCode::KeyA, KeyCode::KeyS, KeyCode::ControlLeft] {
            state.set_key(code, ElementState::Pressed);
        }
        state.reset();
        assert_eq!(state.axes, AxesState::default());
    }
}
