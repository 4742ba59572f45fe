use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use winit::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window},
};

/// Defines the way a window
/// is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    Windowed,
    BorderlessFullscreen,
}

/// Describes the information
/// needed for creating the
/// sandbox window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowStateDesc {
    /// The requested logical
    /// width of the client
    /// area.
    pub width: f32,

    /// The requested logical
    /// height of the client
    /// area.
    pub height: f32,

    /// The position on the
    /// screen of the window's
    /// top-left corner, the
    /// platform picks one
    /// when `None`.
    pub position: Option<[f32; 2]>,

    pub title: String,

    pub resizable: bool,

    /// Whether the cursor is
    /// shown while the window
    /// has focus.
    pub cursor_visible: bool,

    /// Whether the cursor is
    /// captured by the window,
    /// camera look input is
    /// only applied while it is.
    pub cursor_locked: bool,

    pub window_mode: WindowMode,
}

impl Default for WindowStateDesc {
    fn default() -> Self {
        WindowStateDesc {
            title: "flycam".to_string(),
            width: 800.0,
            height: 600.0,
            position: None,
            resizable: true,
            cursor_locked: true,
            cursor_visible: false,
            window_mode: WindowMode::Windowed,
        }
    }
}

/// winit::window::Window does
/// not remember the cursor
/// state we requested, so we
/// wrap it to keep track.
pub struct WindowState {
    window: Arc<Window>,
    window_descriptor: WindowStateDesc,
}

impl WindowState {
    pub fn new(event_loop: &ActiveEventLoop, window_descriptor: &WindowStateDesc) -> Result<Self> {
        let mut winit_window_attributes = Window::default_attributes();

        winit_window_attributes = match window_descriptor.window_mode {
            WindowMode::BorderlessFullscreen => winit_window_attributes
                .with_fullscreen(Some(Fullscreen::Borderless(event_loop.primary_monitor()))),
            WindowMode::Windowed => {
                let WindowStateDesc {
                    width,
                    height,
                    position,
                    ..
                } = *window_descriptor;

                if let Some(position) = position {
                    winit_window_attributes = winit_window_attributes.with_position(
                        LogicalPosition::new(position[0] as f64, position[1] as f64),
                    );
                }
                winit_window_attributes.with_inner_size(LogicalSize::new(width, height))
            }
        }
        // stay invisible until the cursor state is applied to avoid flickering
        .with_visible(false)
        .with_resizable(window_descriptor.resizable)
        .with_title(&window_descriptor.title);

        let window = event_loop
            .create_window(winit_window_attributes)
            .context("failed to create window")?;

        let mut state = Self {
            window: Arc::new(window),
            window_descriptor: window_descriptor.clone(),
        };
        state.set_cursor_grab(window_descriptor.cursor_locked);
        state.set_cursor_visibility(window_descriptor.cursor_visible);
        state.window.set_visible(true);

        log::info!(
            "Created window \"{}\" ({}x{})",
            window_descriptor.title,
            window_descriptor.width,
            window_descriptor.height
        );
        Ok(state)
    }

    pub fn window(&self) -> Arc<Window> {
        self.window.clone()
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    /// Captures the cursor for
    /// camera control, or
    /// releases it, keeping
    /// grab and visibility in
    /// sync.
    pub fn toggle_cursor_capture(&mut self) {
        let captured = !self.is_cursor_captured();
        self.set_cursor_grab(captured);
        self.set_cursor_visibility(!captured);
        log::debug!("Cursor captured: {}", captured);
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.window_descriptor.cursor_locked && !self.window_descriptor.cursor_visible
    }

    /// Sets the cursor
    /// visibility, do not
    /// change it on the winit
    /// window directly or the
    /// tracked state goes out
    /// of sync.
    pub fn set_cursor_visibility(&mut self, cursor_visible: bool) {
        self.window_descriptor.cursor_visible = cursor_visible;
        self.window.set_cursor_visible(cursor_visible);
    }

    /// Sets the cursor grab,
    /// same rules as the
    /// visibility setter.
    pub fn set_cursor_grab(&mut self, cursor_locked: bool) {
        self.window_descriptor.cursor_locked = cursor_locked;
        if let Err(e) = self
            .window
            .set_cursor_grab(Self::get_cursor_grab_mode(cursor_locked))
        {
            log::warn!("Failed to grab cursor: {:?}", e);
        }
    }

    /// Size of the physical
    /// window, in (width,
    /// height).
    pub fn window_size(&self) -> [u32; 2] {
        let size = self.window.inner_size();
        [size.width, size.height]
    }

    pub fn is_minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or(false)
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.window_size())
    }

    /// Returns the cursor
    /// grab mode that works
    /// on the current
    /// platform.
    fn get_cursor_grab_mode(locked: bool) -> CursorGrabMode {
        if !locked {
            return CursorGrabMode::None;
        }
        if cfg!(target_os = "macos") {
            CursorGrabMode::Locked
        } else {
            CursorGrabMode::Confined
        }
    }
}

/// Width over height, a zero
/// height (minimized window)
/// is treated as one pixel.
pub fn aspect_ratio(size: [u32; 2]) -> f32 {
    size[0] as f32 / size[1].max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio([800, 600]), 800.0 / 600.0);
        assert_eq!(aspect_ratio([640, 0]), 640.0);
    }

    #[test]
    fn test_desc_parses_partial_toml() {
        let desc: WindowStateDesc =
            toml::from_str("title = \"cubes\"\nwindow_mode = \"borderless_fullscreen\"").unwrap();
        assert_eq!(desc.title, "cubes");
        assert_eq!(desc.window_mode, WindowMode::BorderlessFullscreen);
        assert_eq!(desc.width, WindowStateDesc::default().width);
    }
}
