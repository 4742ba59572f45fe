pub mod app;
pub mod config;
pub mod gameplay;
pub mod renderer;
pub mod util;
pub mod window;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::AppController;
use config::AppConfig;
use winit::event_loop::EventLoop;

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::resolve(std::env::args_os().nth(1).map(PathBuf::from))
        .context("failed to load configuration")?;

    let event_loop = EventLoop::builder()
        .build()
        .context("failed to create event loop")?;
    let mut controller = AppController::new(config);
    event_loop
        .run_app(&mut controller)
        .context("event loop exited with an error")?;

    if let Some(e) = controller.take_error() {
        return Err(e);
    }
    log::info!("Application exited successfully");
    Ok(())
}
