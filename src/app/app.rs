use crate::config::AppConfig;
use crate::gameplay::{scroll_offset, Camera, CameraInput, CameraProjectionDesc};
use crate::renderer::CameraInfo;
use crate::util::TimeInfo;
use crate::window::{WindowState, WindowStateDesc};
use anyhow::{Context, Result};
use winit::{
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

/// The running sandbox: owns the window, the camera and everything that
/// feeds it input each frame.
pub struct App {
    window_state: WindowState,
    time_info: TimeInfo,
    shown_fps: f32,

    camera: Camera,
    projection: CameraProjectionDesc,
    input: CameraInput,
}

impl App {
    pub fn new(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self> {
        let camera = Camera::from_desc(&config.camera).context("invalid camera settings")?;
        let window_state = Self::create_window_state(event_loop, &config.window)?;

        log::info!(
            "Camera starts at {} looking along {}",
            camera.position(),
            camera.front()
        );

        Ok(Self {
            window_state,
            time_info: TimeInfo::default(),
            shown_fps: -1.0,
            camera,
            projection: config.camera.projection.clone(),
            input: CameraInput::new(&config.input),
        })
    }

    fn create_window_state(
        event_loop: &ActiveEventLoop,
        desc: &WindowStateDesc,
    ) -> Result<WindowState> {
        WindowState::new(event_loop, desc)
    }

    pub fn on_terminate(&mut self, event_loop: &ActiveEventLoop) {
        log::info!("Shutting down, camera ended at {}", self.camera.position());
        event_loop.exit();
    }

    pub fn on_window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.on_terminate(event_loop);
            }

            WindowEvent::Resized(size) => {
                log::debug!("Window resized to {}x{}", size.width, size.height);
            }

            WindowEvent::Focused(false) => {
                self.input.reset();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                if pressed && event.physical_key == KeyCode::Escape {
                    self.on_terminate(event_loop);
                    return;
                }

                if pressed && !event.repeat && event.physical_key == KeyCode::KeyE {
                    self.window_state.toggle_cursor_capture();
                    self.input.reset();
                    return;
                }

                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.on_key(
                        code,
                        event.state,
                        event.repeat,
                        self.window_state.is_cursor_captured(),
                    );
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let captured = self.window_state.is_cursor_captured();
                if let Some(delta) = self.input.on_cursor_moved(position.x, position.y, captured) {
                    self.camera.process_look(delta.x, delta.y);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.on_cursor_left();
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_zoom(scroll_offset(&delta));
            }

            WindowEvent::RedrawRequested => {
                if self.window_state.is_minimized() {
                    return;
                }
                self.on_frame();
            }
            _ => (),
        }
    }

    pub fn on_device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            let captured = self.window_state.is_cursor_captured();
            if let Some(delta) = self.input.on_raw_motion(delta, captured) {
                self.camera.process_look(delta.x, delta.y);
            }
        }
    }

    pub fn on_about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.window_state.is_minimized() {
            self.window_state.window().request_redraw();
        }
    }

    fn on_frame(&mut self) {
        self.time_info.update();
        let dt = self.time_info.delta_time();
        for direction in self.input.held_directions() {
            self.camera.process_movement(direction, dt);
        }

        let camera_info = CameraInfo::from_camera(
            &self.camera,
            &self.projection,
            self.window_state.aspect_ratio(),
        );
        log::trace!(
            "eye {} yaw {:.2} pitch {:.2} fov {:.1}",
            camera_info.eye(),
            self.camera.yaw(),
            self.camera.pitch(),
            self.camera.zoom()
        );

        if self.time_info.display_fps() != self.shown_fps {
            self.shown_fps = self.time_info.display_fps();
            self.window_state.set_title(&frame_title(
                &self.camera,
                &camera_info,
                self.shown_fps,
            ));
        }
    }
}

fn frame_title(camera: &Camera, camera_info: &CameraInfo, fps: f32) -> String {
    let eye = camera_info.eye();
    format!(
        "flycam | fps: {:.0} | pos: ({:.2}, {:.2}, {:.2}) | fov: {:.1}",
        fps,
        eye.x,
        eye.y,
        eye.z,
        camera.zoom()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_title_reports_pose() {
        let camera = Camera::default();
        let info = CameraInfo::from_camera(&camera, &CameraProjectionDesc::default(), 1.0);
        assert_eq!(
            frame_title(&camera, &info, 59.6),
            "flycam | fps: 60 | pos: (0.00, 0.00, 3.00) | fov: 45.0"
        );
    }
}
