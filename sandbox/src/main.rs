//! Sandbox application
//!
//! Opens the XenC window, forwards resizes to the renderer and the window
//! geometry, closes on Escape and runs the frame loop until the window is
//! asked to close.
//!
//! Window settings are read from `sandbox.toml` in the working directory when
//! present.

mod renderer;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use thiserror::Error;
use xen_window::prelude::*;

use crate::renderer::Renderer;

const CONFIG_PATH: &str = "sandbox.toml";

/// Sandbox errors
#[derive(Error, Debug)]
enum SandboxError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),
}

fn load_config() -> Result<WindowConfig, SandboxError> {
    let config = if Path::new(CONFIG_PATH).exists() {
        log::info!("Loading window configuration from {CONFIG_PATH}");
        WindowConfig::load_from_file(CONFIG_PATH)?
    } else {
        WindowConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn run() -> Result<(), SandboxError> {
    let config = load_config()?;
    let mut window = Window::create(&config)?;

    window.set_dimensions(1280, 720);

    let renderer = Rc::new(RefCell::new(Renderer::new()));

    let resize_target = Rc::clone(&renderer);
    window.set_resize_callback(move |window, event| {
        // Minimized windows report a zero-sized client area
        if event.width == 0 || event.height == 0 {
            return;
        }
        resize_target.borrow_mut().resize(event.width, event.height);
        window.set_dimensions(event.width, event.height);
    });

    window.set_key_callback(|window, event| {
        if event.key == KeyCode::Escape && event.action == Action::Press {
            window.set_should_close(true);
        }
    });

    renderer.borrow_mut().initialize(window.width(), window.height());

    log::info!("Starting main loop...");
    while !window.should_close() {
        {
            let mut renderer = renderer.borrow_mut();
            renderer.frame_begin();
            // Render stuff
            renderer.frame_end();
        }

        window.poll_events();
        window.swap_buffers();
    }

    renderer.borrow_mut().shutdown();
    window.destroy();

    Ok(())
}

fn main() {
    xen_window::foundation::logging::init_with_level(log::LevelFilter::Info);

    log::info!("Starting XenC sandbox");

    if let Err(e) = run() {
        log::error!("Sandbox failed: {e}");
        std::process::exit(1);
    }

    log::info!("Sandbox exited cleanly");
}
