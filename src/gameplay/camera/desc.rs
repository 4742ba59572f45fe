use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CameraVectors, MAX_PITCH, MAX_ZOOM, MIN_PITCH, MIN_ZOOM};

/// How far a normalized `world_up` may stray from +y per component.
const WORLD_UP_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Error, PartialEq)]
pub enum CameraDescError {
    #[error("movement_speed must be greater than 0, got {0}")]
    MovementSpeed(f32),
    #[error("mouse_sensitivity must be greater than 0, got {0}")]
    MouseSensitivity(f32),
    #[error("zoom must be in the range [1, 45], got {0}")]
    Zoom(f32),
    #[error("pitch must be in the range [-89, 89], got {0}")]
    Pitch(f32),
    #[error("world_up must be a finite vector pointing along +y, got {0}")]
    WorldUp(Vec3),
    #[error("clip planes must satisfy 0 < z_near < z_far, got near {z_near} far {z_far}")]
    ClipPlanes { z_near: f32, z_far: f32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraMovementDesc {
    /// Translation speed in world units per second.
    pub movement_speed: f32,
    /// Degrees of rotation per raw pointer unit.
    pub mouse_sensitivity: f32,
}

impl Default for CameraMovementDesc {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProjectionDesc {
    /// Initial vertical field of view in degrees.
    pub zoom: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for CameraProjectionDesc {
    fn default() -> Self {
        Self {
            zoom: MAX_ZOOM,
            z_near: 0.1,
            z_far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Initial yaw in degrees. -90 looks down the negative z axis.
    pub yaw: f32,
    /// Initial pitch in degrees.
    pub pitch: f32,
    pub movement: CameraMovementDesc,
    pub projection: CameraProjectionDesc,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: CameraVectors::DEFAULT_WORLD_UP,
            yaw: -90.0,
            pitch: 0.0,
            movement: CameraMovementDesc::default(),
            projection: CameraProjectionDesc::default(),
        }
    }
}

impl CameraDesc {
    pub fn validate(&self) -> Result<(), CameraDescError> {
        let movement = &self.movement;
        if !(movement.movement_speed > 0.0) {
            return Err(CameraDescError::MovementSpeed(movement.movement_speed));
        }
        if !(movement.mouse_sensitivity > 0.0) {
            return Err(CameraDescError::MouseSensitivity(
                movement.mouse_sensitivity,
            ));
        }

        let projection = &self.projection;
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&projection.zoom) {
            return Err(CameraDescError::Zoom(projection.zoom));
        }
        if !(projection.z_near > 0.0 && projection.z_far > projection.z_near) {
            return Err(CameraDescError::ClipPlanes {
                z_near: projection.z_near,
                z_far: projection.z_far,
            });
        }

        if !(MIN_PITCH..=MAX_PITCH).contains(&self.pitch) {
            return Err(CameraDescError::Pitch(self.pitch));
        }
        // the pitch clamp keeps front away from +y only, any other up axis
        // can end up parallel to front and collapse the basis
        let is_vertical = self.world_up.try_normalize().is_some_and(|up| {
            up.abs_diff_eq(CameraVectors::DEFAULT_WORLD_UP, WORLD_UP_TOLERANCE)
        });
        if !is_vertical {
            return Err(CameraDescError::WorldUp(self.world_up));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_desc_is_valid() {
        assert_eq!(CameraDesc::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut desc = CameraDesc::default();
        desc.pitch = 90.0;
        assert_eq!(desc.validate(), Err(CameraDescError::Pitch(90.0)));

        let mut desc = CameraDesc::default();
        desc.projection.zoom = 0.5;
        assert_eq!(desc.validate(), Err(CameraDescError::Zoom(0.5)));

        let mut desc = CameraDesc::default();
        desc.movement.movement_speed = 0.0;
        assert_eq!(desc.validate(), Err(CameraDescError::MovementSpeed(0.0)));

        let mut desc = CameraDesc::default();
        desc.movement.mouse_sensitivity = f32::NAN;
        assert!(matches!(
            desc.validate(),
            Err(CameraDescError::MouseSensitivity(_))
        ));

        let mut desc = CameraDesc::default();
        desc.world_up = Vec3::ZERO;
        assert_eq!(desc.validate(), Err(CameraDescError::WorldUp(Vec3::ZERO)));

        let mut desc = CameraDesc::default();
        desc.world_up = Vec3::new(0.0, f32::INFINITY, 0.0);
        assert!(matches!(desc.validate(), Err(CameraDescError::WorldUp(_))));

        let mut desc = CameraDesc::default();
        desc.projection.z_far = desc.projection.z_near;
        assert!(matches!(
            desc.validate(),
            Err(CameraDescError::ClipPlanes { .. })
        ));
    }

    #[test]
    fn test_rejects_world_up_parallel_to_front() {
        // yaw 0 looks along +x, so an x-up world would leave no right vector
        let mut desc = CameraDesc::default();
        desc.yaw = 0.0;
        desc.world_up = Vec3::X;
        assert_eq!(desc.validate(), Err(CameraDescError::WorldUp(Vec3::X)));

        let mut desc = CameraDesc::default();
        desc.world_up = Vec3::new(0.0, 1.0, 0.1);
        assert!(matches!(desc.validate(), Err(CameraDescError::WorldUp(_))));
    }

    #[test]
    fn test_accepts_scaled_vertical_world_up() {
        let mut desc = CameraDesc::default();
        desc.world_up = Vec3::new(0.0, 4.0, 0.0);
        assert_eq!(desc.validate(), Ok(()));

        desc.world_up = Vec3::NEG_Y;
        assert!(desc.validate().is_err());
    }
}
