//! Minimal windowed application driving the binding's event loop.
//!
//! Opens a window from `window_demo.toml` (or defaults), logs the
//! interesting events, and exits on Escape or window close.

use std::path::Path;

use rust_glfw::prelude::*;

const CONFIG_PATH: &str = "window_demo.toml";

struct DemoApp {
    frames: u64,
}

impl Application for DemoApp {
    fn initialize(&mut self, window: &mut Window) -> Result<(), AppError> {
        let (width, height) = window.size();
        let (fb_width, fb_height) = window.framebuffer_size();
        log::info!(
            "window {}x{} (framebuffer {}x{})",
            width,
            height,
            fb_width,
            fb_height
        );

        let (major, minor, rev) = rust_glfw::version();
        log::info!("running against glfw {}.{}.{}", major, minor, rev);

        for monitor in rust_glfw::monitor::monitors() {
            if let Some(mode) = monitor.video_mode() {
                log::info!(
                    "monitor {:?}: {}x{} @ {} Hz",
                    monitor.name().unwrap_or_default(),
                    mode.width,
                    mode.height,
                    mode.refresh_rate
                );
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, window: &mut Window, event: &WindowEvent) -> Result<(), AppError> {
        match event {
            WindowEvent::Key {
                key: Key::Escape,
                action: Action::Press,
                ..
            } => {
                log::info!("escape pressed, closing");
                window.set_should_close(true);
            }
            WindowEvent::Key { key, action, mods, .. } => {
                log::debug!("key {:?} {:?} (mods {:?})", key, action, mods);
            }
            WindowEvent::MouseButton { button, action, .. } => {
                log::debug!("mouse {:?} {:?}", button, action);
            }
            WindowEvent::FramebufferSize(width, height) => {
                log::info!("framebuffer resized to {}x{}", width, height);
            }
            WindowEvent::FileDrop(paths) => {
                for path in paths {
                    log::info!("dropped {}", path.display());
                }
            }
            WindowEvent::Close => {
                log::info!("close requested");
            }
            _ => {}
        }
        Ok(())
    }

    fn frame(&mut self, _window: &mut Window, _delta_time: f64) -> Result<(), AppError> {
        self.frames += 1;
        Ok(())
    }

    fn cleanup(&mut self, _window: &mut Window) {
        log::info!("shutting down after {} frames", self.frames);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = if Path::new(CONFIG_PATH).exists() {
        AppConfig::load_from_file(CONFIG_PATH)?
    } else {
        log::info!("no {} found, using defaults", CONFIG_PATH);
        AppConfig::default()
    };

    log::info!("starting window demo: {:?}", config);

    let mut app = DemoApp { frames: 0 };
    match run(&config, &mut app) {
        Ok(()) => {
            log::info!("window demo finished");
            Ok(())
        }
        Err(e) => {
            log::error!("window demo failed: {}", e);
            Err(e.into())
        }
    }
}
