use super::{
    movement::CameraMovement, vectors::CameraVectors, CameraDesc, CameraDescError,
};
use glam::{Mat4, Vec3};

pub const MIN_PITCH: f32 = -89.0;
pub const MAX_PITCH: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// First-person fly camera driven by yaw/pitch Euler angles.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,

    /// Yaw in degrees, unbounded.
    yaw: f32,

    /// Pitch in degrees, always within [MIN_PITCH, MAX_PITCH].
    pitch: f32,

    vectors: CameraVectors,

    movement_speed: f32,
    mouse_sensitivity: f32,

    /// Vertical field of view in degrees, always within [MIN_ZOOM, MAX_ZOOM].
    zoom: f32,
}

impl Camera {
    /// Creates a camera at `position` with the default orientation and tuning.
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let defaults = CameraDesc::default();
        let mut camera = Self {
            position,
            world_up,
            yaw: defaults.yaw,
            pitch: defaults.pitch,
            vectors: CameraVectors::new(),
            movement_speed: defaults.movement.movement_speed,
            mouse_sensitivity: defaults.movement.mouse_sensitivity,
            zoom: defaults.projection.zoom,
        };
        camera.update_camera_vectors();
        camera
    }

    pub fn from_desc(desc: &CameraDesc) -> Result<Self, CameraDescError> {
        desc.validate()?;

        let mut camera = Self {
            position: desc.position,
            world_up: desc.world_up.normalize(),
            yaw: desc.yaw,
            pitch: desc.pitch,
            vectors: CameraVectors::new(),
            movement_speed: desc.movement.movement_speed,
            mouse_sensitivity: desc.movement.mouse_sensitivity,
            zoom: desc.projection.zoom,
        };
        camera.update_camera_vectors();
        Ok(camera)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.vectors.front
    }

    #[allow(dead_code)]
    pub fn vectors(&self) -> &CameraVectors {
        &self.vectors
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The current vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[allow(dead_code)]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    #[allow(dead_code)]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.vectors.front,
            self.vectors.up,
        )
    }

    /// Translates the camera along one direction for `delta_time` seconds.
    ///
    /// Vertical movement follows the world up axis rather than the camera's
    /// own up vector.
    pub fn process_movement(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.vectors.front * velocity,
            CameraMovement::Backward => self.position -= self.vectors.front * velocity,
            CameraMovement::Left => self.position -= self.vectors.right * velocity,
            CameraMovement::Right => self.position += self.vectors.right * velocity,
            CameraMovement::Up => self.position += self.world_up * velocity,
            CameraMovement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Rotates the camera by raw pointer deltas.
    ///
    /// A positive `y_offset` raises the view; the caller is responsible for
    /// flipping screen-space y before calling this.
    pub fn process_look(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        self.clamp_pitch();
        self.update_camera_vectors();
    }

    /// Scrolling forward narrows the field of view.
    pub fn process_zoom(&mut self, scroll_offset: f32) {
        self.zoom = (self.zoom - scroll_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Clamps the pitch to prevent the camera from flipping over the poles.
    fn clamp_pitch(&mut self) {
        self.pitch = self.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    fn update_camera_vectors(&mut self) {
        self.vectors.update(self.yaw, self.pitch, self.world_up);
    }
}

impl Default for Camera {
    fn default() -> Self {
        let desc = CameraDesc::default();
        Camera::new(desc.position, desc.world_up)
    }
}
