use glam::Vec3;

/// Orthonormal front/right/up triad of the camera.
///
/// Always rebuilt from yaw and pitch, never rotated incrementally, so the
/// basis cannot drift away from orthogonality over many updates.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraVectors {
    pub front: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl CameraVectors {
    pub const DEFAULT_WORLD_UP: Vec3 = Vec3::Y;

    pub fn new() -> Self {
        Self {
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
        }
    }

    /// Updates the front, right, and up vectors from yaw and pitch in degrees.
    pub fn update(&mut self, yaw_deg: f32, pitch_deg: f32, world_up: Vec3) {
        let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for CameraVectors {
    fn default() -> Self {
        Self::new()
    }
}
