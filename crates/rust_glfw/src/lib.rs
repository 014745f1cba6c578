//! # rust_glfw
//!
//! GLFW 3.4 bindings for Rust: a raw FFI layer mirroring the C ABI
//! function for function, plus a safe wrapper that turns the native
//! library's callback pointers into Rust-native events.
//!
//! ## Layers
//!
//! - [`ffi`]: the complete constant and function table of `glfw3.h`,
//!   for code that wants the C API as-is
//! - Safe modules ([`window`], [`monitor`], [`input`], [`joystick`],
//!   [`context`], [`time`]): one forwarding call per native function,
//!   with string, array and struct marshaling at the boundary
//! - [`application`]: a small lifecycle trait and frame loop for
//!   programs that just want a window and its events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_glfw::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     rust_glfw::init()?;
//!
//!     let mut window = Window::create("Hello", 800, 600)?;
//!     window.make_context_current();
//!
//!     while !window.should_close() {
//!         for (_, event) in window.events() {
//!             if let WindowEvent::Key { key: Key::Escape, .. } = event {
//!                 println!("bye");
//!             }
//!         }
//!         window.swap_buffers();
//!         rust_glfw::event::poll_events();
//!     }
//!
//!     drop(window);
//!     rust_glfw::terminate();
//!     Ok(())
//! }
//! ```
//!
//! ## Threading
//!
//! The native library is main-thread bound: initialization, window
//! creation and the event pump must all happen on the thread that
//! called [`init`]. [`window::Window`] is deliberately neither `Send`
//! nor `Sync`.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

pub mod ffi;

pub mod application;
pub mod config;
pub mod context;
pub mod event;
pub mod input;
pub mod joystick;
pub mod monitor;
pub mod time;
pub mod window;

mod error;
mod init;

pub use error::{get_error, last_error, Error, ErrorKind};
pub use init::{
    init, init_hint, terminate, version, version_string, AnglePlatform, InitHint, Platform,
    WaylandLibdecor,
};

/// Common imports for binding users
pub mod prelude {
    pub use crate::application::{run, AppError, Application};
    pub use crate::config::AppConfig;
    pub use crate::event::WindowEvent;
    pub use crate::input::{Action, CursorMode, Key, Modifiers, MouseButton};
    pub use crate::monitor::{Monitor, VideoMode};
    pub use crate::window::{Window, WindowHint};
    pub use crate::{Error, ErrorKind};
}
