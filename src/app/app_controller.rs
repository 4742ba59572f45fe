use super::app::App;
use crate::config::AppConfig;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::ActiveEventLoop,
    window::WindowId,
};

/// Defers building the [`App`] until the event loop hands out a window.
pub struct AppController {
    config: AppConfig,
    initialized: Option<App>,
    init_error: Option<anyhow::Error>,
}

impl AppController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            initialized: None,
            init_error: None,
        }
    }

    /// The error that stopped initialization, if any.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }
}

impl ApplicationHandler for AppController {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.initialized.is_some() {
            return;
        }
        match App::new(event_loop, &self.config) {
            Ok(app) => self.initialized = Some(app),
            Err(e) => {
                log::error!("Failed to initialize app: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        if let Some(initialized) = &mut self.initialized {
            initialized.on_window_event(event_loop, id, event);
        }
    }

    fn device_event(&mut self, event_loop: &ActiveEventLoop, device_id: DeviceId, event: DeviceEvent) {
        if let Some(initialized) = &mut self.initialized {
            initialized.on_device_event(event_loop, device_id, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(initialized) = &mut self.initialized {
            initialized.on_about_to_wait(event_loop);
        }
    }
}
