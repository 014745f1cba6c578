//! Application trait and lifecycle management.
//!
//! [`run`] owns the whole native lifecycle: initialize the library,
//! apply creation hints from an [`AppConfig`], create the window, and
//! drive the frame loop until the close flag is set. Applications
//! implement [`Application`] and receive the drained window events
//! each iteration.

use thiserror::Error;

use crate::config::{AppConfig, ConfigError};
use crate::error::Error as GlfwError;
use crate::event::{self, WindowEvent};
use crate::window::{self, Window, WindowHint};
use crate::{context, init, monitor, terminate, time};

/// Application lifecycle trait.
///
/// Implement this to drive a window through [`run`].
pub trait Application {
    /// Called once after the window is created and its context made
    /// current. Load resources and set initial state here.
    fn initialize(&mut self, window: &mut Window) -> Result<(), AppError>;

    /// Called once per frame, before buffers are swapped.
    ///
    /// # Arguments
    /// * `window` - The application window
    /// * `delta_time` - Seconds since the previous frame
    fn frame(&mut self, window: &mut Window, delta_time: f64) -> Result<(), AppError>;

    /// Called for each window event drained at the top of a frame.
    fn handle_event(&mut self, window: &mut Window, event: &WindowEvent) -> Result<(), AppError> {
        let _ = (window, event);
        Ok(())
    }

    /// Called once when the loop exits, before the window is
    /// destroyed.
    fn cleanup(&mut self, window: &mut Window) {
        let _ = window;
    }
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Native library error propagated to application level
    #[error("glfw error: {0}")]
    Glfw(#[from] GlfwError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("application error: {0}")]
    Custom(String),
}

/// Initialize the library, run `app` against a window described by
/// `config`, and terminate. The library is terminated on every exit
/// path, including errors.
pub fn run(config: &AppConfig, app: &mut dyn Application) -> Result<(), AppError> {
    init()?;
    let result = run_with_window(config, app);
    terminate();
    result
}

fn run_with_window(config: &AppConfig, app: &mut dyn Application) -> Result<(), AppError> {
    window::default_hints();
    window::hint(WindowHint::Resizable(config.resizable));

    let mut window = if config.fullscreen {
        match monitor::primary() {
            Some(primary) => {
                Window::create_fullscreen(&config.title, config.width, config.height, &primary)?
            }
            None => {
                log::warn!("no primary monitor reported, falling back to windowed mode");
                Window::create(&config.title, config.width, config.height)?
            }
        }
    } else {
        Window::create(&config.title, config.width, config.height)?
    };

    window.make_context_current();
    context::swap_interval(config.swap_interval);

    app.initialize(&mut window)?;

    let result = frame_loop(&mut window, app);
    app.cleanup(&mut window);
    result
}

fn frame_loop(window: &mut Window, app: &mut dyn Application) -> Result<(), AppError> {
    let mut last_frame = time::time();

    while !window.should_close() {
        // Queue filled by the pump at the end of the previous iteration
        let events: Vec<(f64, WindowEvent)> = window.events().collect();
        for (_, event) in &events {
            app.handle_event(window, event)?;
        }

        let now = time::time();
        let delta_time = now - last_frame;
        last_frame = now;

        app.frame(window, delta_time)?;

        window.swap_buffers();
        event::poll_events();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_wraps_glfw_error() {
        let source = GlfwError::new(crate::ErrorKind::PlatformError, "boom");
        let error: AppError = source.into();
        assert_eq!(format!("{error}"), "glfw error: boom (PlatformError)");
    }

    #[test]
    fn test_app_error_wraps_config_error() {
        let source = ConfigError::Parse("bad toml".to_string());
        let error: AppError = source.into();
        assert_eq!(format!("{error}"), "config error: Parse error: bad toml");
    }
}
