use crate::gameplay::{Camera, CameraProjectionDesc};
use glam::{Mat4, Vec3, Vec4};

/// Per-frame camera data a renderer reads, built without mutating the camera.
///
/// Aspect ratio and clip planes belong to the renderer, only the field of
/// view comes from the camera's zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInfo {
    pub camera_pos: Vec4,
    pub view_mat: Mat4,
    #[allow(dead_code)]
    pub view_mat_inv: Mat4,
    pub proj_mat: Mat4,
    #[allow(dead_code)]
    pub proj_mat_inv: Mat4,
    pub view_proj_mat: Mat4,
    #[allow(dead_code)]
    pub view_proj_mat_inv: Mat4,
}

impl CameraInfo {
    pub fn from_camera(camera: &Camera, projection: &CameraProjectionDesc, aspect_ratio: f32) -> Self {
        let view_mat = camera.view_matrix();
        let proj_mat = calculate_proj_mat(
            camera.zoom(),
            aspect_ratio,
            projection.z_near,
            projection.z_far,
        );
        let view_proj_mat = proj_mat * view_mat;
        Self {
            camera_pos: camera.position().extend(1.0),
            view_mat,
            view_mat_inv: view_mat.inverse(),
            proj_mat,
            proj_mat_inv: proj_mat.inverse(),
            view_proj_mat,
            view_proj_mat_inv: view_proj_mat.inverse(),
        }
    }

    /// World-space eye position, used for specular lighting.
    pub fn eye(&self) -> Vec3 {
        self.camera_pos.truncate()
    }
}

/// OpenGL-style perspective with depth mapped to [-1, 1].
pub fn calculate_proj_mat(v_fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Mat4 {
    Mat4::perspective_rh_gl(v_fov.to_radians(), aspect_ratio, z_near, z_far)
}
