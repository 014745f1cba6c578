//! Window lifecycle, creation hints and per-window operations.
//!
//! [`Window`] owns a native window handle together with the event
//! queue that the callback trampolines in [`crate::event`] feed. The
//! queue lives in a heap box whose address is stashed behind the
//! native user pointer, so it stays valid however the `Window` value
//! itself moves. Every other method is a direct forwarding call to the
//! native library, marshaling strings and arrays at the boundary.

use std::collections::VecDeque;
use std::ffi::CStr;

use libc::{c_int, c_void};

use crate::error::{self, Error, ErrorKind};
use crate::event::{self, WindowEvent};
use crate::ffi;
use crate::input::{self, Action, Cursor, CursorMode, InputMode, Key, MouseButton};
use crate::monitor::Monitor;

/// Creation hints applied to the next [`Window::create`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHint {
    /// Whether the window can be resized by the user
    Resizable(bool),
    /// Whether the window starts visible
    Visible(bool),
    /// Whether the window has decorations
    Decorated(bool),
    /// Whether the window starts focused
    Focused(bool),
    /// Whether a fullscreen window iconifies on focus loss
    AutoIconify(bool),
    /// Whether the window floats above other windows
    Floating(bool),
    /// Whether the window starts maximized
    Maximized(bool),
    /// Whether the cursor is centered on a fullscreen window
    CenterCursor(bool),
    /// Whether the framebuffer should be transparent
    TransparentFramebuffer(bool),
    /// Whether showing the window also gives it focus
    FocusOnShow(bool),
    /// Whether the window passes mouse input through
    MousePassthrough(bool),
    /// Whether the window size is scaled by the monitor content scale
    ScaleToMonitor(bool),
    /// Initial x position, or `None` for the platform default
    PositionX(Option<i32>),
    /// Initial y position, or `None` for the platform default
    PositionY(Option<i32>),
    /// Red channel bit depth, `None` for don't-care
    RedBits(Option<u32>),
    /// Green channel bit depth, `None` for don't-care
    GreenBits(Option<u32>),
    /// Blue channel bit depth, `None` for don't-care
    BlueBits(Option<u32>),
    /// Alpha channel bit depth, `None` for don't-care
    AlphaBits(Option<u32>),
    /// Depth buffer bit depth, `None` for don't-care
    DepthBits(Option<u32>),
    /// Stencil buffer bit depth, `None` for don't-care
    StencilBits(Option<u32>),
    /// Whether to request a stereo framebuffer
    Stereo(bool),
    /// MSAA sample count, `None` for don't-care
    Samples(Option<u32>),
    /// Whether the framebuffer should be sRGB capable
    SrgbCapable(bool),
    /// Fullscreen refresh rate, `None` for don't-care
    RefreshRate(Option<u32>),
    /// Whether to use double buffering
    DoubleBuffer(bool),
    /// Which client API to create a context for
    ClientApi(ClientApi),
    /// Context version to request, as `(major, minor)`
    ContextVersion(u32, u32),
    /// Context robustness strategy
    ContextRobustness(ContextRobustness),
    /// Whether the OpenGL context is forward compatible
    OpenGlForwardCompat(bool),
    /// Whether to create a debug context
    ContextDebug(bool),
    /// OpenGL profile to request
    OpenGlProfile(OpenGlProfile),
    /// Context release behavior on makeCurrent
    ContextReleaseBehavior(ContextReleaseBehavior),
    /// Whether context errors are suppressed
    ContextNoError(bool),
    /// API used to create the context
    ContextCreationApi(ContextCreationApi),
    /// macOS: use full-resolution framebuffers on Retina displays
    CocoaRetinaFramebuffer(bool),
    /// macOS: allow automatic graphics switching
    CocoaGraphicsSwitching(bool),
    /// Windows: allow access to the window menu via the keyboard
    Win32KeyboardMenu(bool),
}

/// Client API requested for a window's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ClientApi {
    NoApi,
    OpenGl,
    OpenGlEs,
}

/// OpenGL profile requested for a window's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum OpenGlProfile {
    Any,
    Core,
    Compat,
}

/// Context robustness strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ContextRobustness {
    NoRobustness,
    NoResetNotification,
    LoseContextOnReset,
}

/// Context release behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ContextReleaseBehavior {
    Any,
    Flush,
    None,
}

/// Context creation APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ContextCreationApi {
    Native,
    Egl,
    OsMesa,
}

/// String-valued creation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringHint {
    /// macOS: frame autosave name
    CocoaFrameName,
    /// X11: WM_CLASS class name
    X11ClassName,
    /// X11: WM_CLASS instance name
    X11InstanceName,
    /// Wayland: app_id of the window
    WaylandAppId,
}

fn bool_value(value: bool) -> c_int {
    if value {
        ffi::GLFW_TRUE
    } else {
        ffi::GLFW_FALSE
    }
}

fn dont_care(value: Option<u32>) -> c_int {
    value.map_or(ffi::GLFW_DONT_CARE, |v| v as c_int)
}

/// Reset all creation hints to their defaults.
pub fn default_hints() {
    unsafe { ffi::glfwDefaultWindowHints() };
}

/// Set a creation hint for the next window created.
pub fn hint(hint: WindowHint) {
    // ContextVersion covers two native hints; everything else is one
    if let WindowHint::ContextVersion(major, minor) = hint {
        unsafe {
            ffi::glfwWindowHint(ffi::GLFW_CONTEXT_VERSION_MAJOR, major as c_int);
            ffi::glfwWindowHint(ffi::GLFW_CONTEXT_VERSION_MINOR, minor as c_int);
        }
        return;
    }

    let (name, value) = match hint {
        WindowHint::Resizable(on) => (ffi::GLFW_RESIZABLE, bool_value(on)),
        WindowHint::Visible(on) => (ffi::GLFW_VISIBLE, bool_value(on)),
        WindowHint::Decorated(on) => (ffi::GLFW_DECORATED, bool_value(on)),
        WindowHint::Focused(on) => (ffi::GLFW_FOCUSED, bool_value(on)),
        WindowHint::AutoIconify(on) => (ffi::GLFW_AUTO_ICONIFY, bool_value(on)),
        WindowHint::Floating(on) => (ffi::GLFW_FLOATING, bool_value(on)),
        WindowHint::Maximized(on) => (ffi::GLFW_MAXIMIZED, bool_value(on)),
        WindowHint::CenterCursor(on) => (ffi::GLFW_CENTER_CURSOR, bool_value(on)),
        WindowHint::TransparentFramebuffer(on) => {
            (ffi::GLFW_TRANSPARENT_FRAMEBUFFER, bool_value(on))
        }
        WindowHint::FocusOnShow(on) => (ffi::GLFW_FOCUS_ON_SHOW, bool_value(on)),
        WindowHint::MousePassthrough(on) => (ffi::GLFW_MOUSE_PASSTHROUGH, bool_value(on)),
        WindowHint::ScaleToMonitor(on) => (ffi::GLFW_SCALE_TO_MONITOR, bool_value(on)),
        WindowHint::PositionX(pos) => (
            ffi::GLFW_POSITION_X,
            pos.unwrap_or(ffi::GLFW_ANY_POSITION as c_int),
        ),
        WindowHint::PositionY(pos) => (
            ffi::GLFW_POSITION_Y,
            pos.unwrap_or(ffi::GLFW_ANY_POSITION as c_int),
        ),
        WindowHint::RedBits(bits) => (ffi::GLFW_RED_BITS, dont_care(bits)),
        WindowHint::GreenBits(bits) => (ffi::GLFW_GREEN_BITS, dont_care(bits)),
        WindowHint::BlueBits(bits) => (ffi::GLFW_BLUE_BITS, dont_care(bits)),
        WindowHint::AlphaBits(bits) => (ffi::GLFW_ALPHA_BITS, dont_care(bits)),
        WindowHint::DepthBits(bits) => (ffi::GLFW_DEPTH_BITS, dont_care(bits)),
        WindowHint::StencilBits(bits) => (ffi::GLFW_STENCIL_BITS, dont_care(bits)),
        WindowHint::Stereo(on) => (ffi::GLFW_STEREO, bool_value(on)),
        WindowHint::Samples(samples) => (ffi::GLFW_SAMPLES, dont_care(samples)),
        WindowHint::SrgbCapable(on) => (ffi::GLFW_SRGB_CAPABLE, bool_value(on)),
        WindowHint::RefreshRate(rate) => (ffi::GLFW_REFRESH_RATE, dont_care(rate)),
        WindowHint::DoubleBuffer(on) => (ffi::GLFW_DOUBLEBUFFER, bool_value(on)),
        WindowHint::ClientApi(api) => (
            ffi::GLFW_CLIENT_API,
            match api {
                ClientApi::NoApi => ffi::GLFW_NO_API,
                ClientApi::OpenGl => ffi::GLFW_OPENGL_API,
                ClientApi::OpenGlEs => ffi::GLFW_OPENGL_ES_API,
            },
        ),
        WindowHint::ContextVersion(..) => unreachable!(),
        WindowHint::ContextRobustness(strategy) => (
            ffi::GLFW_CONTEXT_ROBUSTNESS,
            match strategy {
                ContextRobustness::NoRobustness => ffi::GLFW_NO_ROBUSTNESS,
                ContextRobustness::NoResetNotification => ffi::GLFW_NO_RESET_NOTIFICATION,
                ContextRobustness::LoseContextOnReset => ffi::GLFW_LOSE_CONTEXT_ON_RESET,
            },
        ),
        WindowHint::OpenGlForwardCompat(on) => (ffi::GLFW_OPENGL_FORWARD_COMPAT, bool_value(on)),
        WindowHint::ContextDebug(on) => (ffi::GLFW_CONTEXT_DEBUG, bool_value(on)),
        WindowHint::OpenGlProfile(profile) => (
            ffi::GLFW_OPENGL_PROFILE,
            match profile {
                OpenGlProfile::Any => ffi::GLFW_OPENGL_ANY_PROFILE,
                OpenGlProfile::Core => ffi::GLFW_OPENGL_CORE_PROFILE,
                OpenGlProfile::Compat => ffi::GLFW_OPENGL_COMPAT_PROFILE,
            },
        ),
        WindowHint::ContextReleaseBehavior(behavior) => (
            ffi::GLFW_CONTEXT_RELEASE_BEHAVIOR,
            match behavior {
                ContextReleaseBehavior::Any => ffi::GLFW_ANY_RELEASE_BEHAVIOR,
                ContextReleaseBehavior::Flush => ffi::GLFW_RELEASE_BEHAVIOR_FLUSH,
                ContextReleaseBehavior::None => ffi::GLFW_RELEASE_BEHAVIOR_NONE,
            },
        ),
        WindowHint::ContextNoError(on) => (ffi::GLFW_CONTEXT_NO_ERROR, bool_value(on)),
        WindowHint::ContextCreationApi(api) => (
            ffi::GLFW_CONTEXT_CREATION_API,
            match api {
                ContextCreationApi::Native => ffi::GLFW_NATIVE_CONTEXT_API,
                ContextCreationApi::Egl => ffi::GLFW_EGL_CONTEXT_API,
                ContextCreationApi::OsMesa => ffi::GLFW_OSMESA_CONTEXT_API,
            },
        ),
        WindowHint::CocoaRetinaFramebuffer(on) => {
            (ffi::GLFW_COCOA_RETINA_FRAMEBUFFER, bool_value(on))
        }
        WindowHint::CocoaGraphicsSwitching(on) => {
            (ffi::GLFW_COCOA_GRAPHICS_SWITCHING, bool_value(on))
        }
        WindowHint::Win32KeyboardMenu(on) => (ffi::GLFW_WIN32_KEYBOARD_MENU, bool_value(on)),
    };

    unsafe { ffi::glfwWindowHint(name, value) };
}

/// Set a string-valued creation hint for the next window created.
pub fn hint_string(hint: StringHint, value: &str) -> Result<(), Error> {
    let name = match hint {
        StringHint::CocoaFrameName => ffi::GLFW_COCOA_FRAME_NAME,
        StringHint::X11ClassName => ffi::GLFW_X11_CLASS_NAME,
        StringHint::X11InstanceName => ffi::GLFW_X11_INSTANCE_NAME,
        StringHint::WaylandAppId => ffi::GLFW_WAYLAND_APP_ID,
    };
    let value = input::to_c_string(value, "window hint string")?;
    unsafe { ffi::glfwWindowHintString(name, value.as_ptr()) };
    Ok(())
}

/// An RGBA8 image used for window icons and custom cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap pixel data, left-to-right, top-to-bottom, four bytes per
    /// pixel. Fails when the buffer does not match the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, Error> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::new(
                ErrorKind::InvalidValue,
                format!(
                    "image pixel buffer holds {} bytes, {}x{} RGBA needs {}",
                    pixels.len(),
                    width,
                    height,
                    expected
                ),
            ));
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            pixels,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Borrow as the native struct. The native library copies the
    /// pixels before returning from any call taking the struct.
    pub(crate) fn as_raw(&self) -> ffi::GLFWimage {
        ffi::GLFWimage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.as_ptr().cast_mut(),
        }
    }
}

/// Event queue shared between a [`Window`] and the callback
/// trampolines, reached through the native window user pointer.
pub(crate) struct WindowState {
    pub(crate) events: VecDeque<(f64, WindowEvent)>,
}

/// A native window plus its adapted event stream.
///
/// Dropping the window destroys the native handle. The window is bound
/// to the thread that initialized the library and is deliberately
/// neither `Send` nor `Sync`.
pub struct Window {
    ptr: *mut ffi::GLFWwindow,
    // Heap slot referenced by the native user pointer; must outlive ptr
    state: Box<WindowState>,
}

impl Window {
    /// Create a windowed-mode window with the current creation hints.
    pub fn create(title: &str, width: u32, height: u32) -> Result<Self, Error> {
        Self::create_with(title, width, height, None)
    }

    /// Create a fullscreen window on the given monitor, using the
    /// current creation hints for video mode selection.
    pub fn create_fullscreen(
        title: &str,
        width: u32,
        height: u32,
        monitor: &Monitor,
    ) -> Result<Self, Error> {
        Self::create_with(title, width, height, Some(monitor))
    }

    fn create_with(
        title: &str,
        width: u32,
        height: u32,
        monitor: Option<&Monitor>,
    ) -> Result<Self, Error> {
        let title = input::to_c_string(title, "window title")?;
        let monitor = monitor.map_or(std::ptr::null_mut(), |m| m.as_ptr());

        let ptr = unsafe {
            ffi::glfwCreateWindow(
                width as c_int,
                height as c_int,
                title.as_ptr(),
                monitor,
                std::ptr::null_mut(),
            )
        };
        if ptr.is_null() {
            return Err(error::take_last_error("glfwCreateWindow failed"));
        }

        let mut state = Box::new(WindowState {
            events: VecDeque::new(),
        });

        unsafe {
            ffi::glfwSetWindowUserPointer(ptr, (&mut *state as *mut WindowState).cast::<c_void>());

            ffi::glfwSetWindowPosCallback(ptr, Some(event::window_pos_callback));
            ffi::glfwSetWindowSizeCallback(ptr, Some(event::window_size_callback));
            ffi::glfwSetWindowCloseCallback(ptr, Some(event::window_close_callback));
            ffi::glfwSetWindowRefreshCallback(ptr, Some(event::window_refresh_callback));
            ffi::glfwSetWindowFocusCallback(ptr, Some(event::window_focus_callback));
            ffi::glfwSetWindowIconifyCallback(ptr, Some(event::window_iconify_callback));
            ffi::glfwSetWindowMaximizeCallback(ptr, Some(event::window_maximize_callback));
            ffi::glfwSetFramebufferSizeCallback(ptr, Some(event::framebuffer_size_callback));
            ffi::glfwSetWindowContentScaleCallback(ptr, Some(event::window_content_scale_callback));
            ffi::glfwSetKeyCallback(ptr, Some(event::key_callback));
            ffi::glfwSetCharCallback(ptr, Some(event::char_callback));
            ffi::glfwSetCharModsCallback(ptr, Some(event::char_mods_callback));
            ffi::glfwSetMouseButtonCallback(ptr, Some(event::mouse_button_callback));
            ffi::glfwSetCursorPosCallback(ptr, Some(event::cursor_pos_callback));
            ffi::glfwSetCursorEnterCallback(ptr, Some(event::cursor_enter_callback));
            ffi::glfwSetScrollCallback(ptr, Some(event::scroll_callback));
            ffi::glfwSetDropCallback(ptr, Some(event::drop_callback));
        }

        log::debug!("created {}x{} window", width, height);
        Ok(Self { ptr, state })
    }

    /// The raw native handle.
    pub fn as_ptr(&self) -> *mut ffi::GLFWwindow {
        self.ptr
    }

    /// Drain the events gathered since the last pump, oldest first,
    /// each paired with the native timestamp of its arrival.
    pub fn events(&mut self) -> impl Iterator<Item = (f64, WindowEvent)> + '_ {
        self.state.events.drain(..)
    }

    /// Whether the close flag is set.
    pub fn should_close(&self) -> bool {
        (unsafe { ffi::glfwWindowShouldClose(self.ptr) }) == ffi::GLFW_TRUE
    }

    /// Set or clear the close flag.
    pub fn set_should_close(&mut self, value: bool) {
        unsafe { ffi::glfwSetWindowShouldClose(self.ptr, bool_value(value)) };
    }

    /// Change the window title.
    pub fn set_title(&mut self, title: &str) -> Result<(), Error> {
        let title = input::to_c_string(title, "window title")?;
        unsafe { ffi::glfwSetWindowTitle(self.ptr, title.as_ptr()) };
        Ok(())
    }

    /// Set the window icon, best size chosen by the system. An empty
    /// slice reverts to the default icon.
    pub fn set_icon(&mut self, images: &[Image]) {
        let raw: Vec<ffi::GLFWimage> = images.iter().map(Image::as_raw).collect();
        unsafe { ffi::glfwSetWindowIcon(self.ptr, raw.len() as c_int, raw.as_ptr()) };
    }

    /// Position of the window's upper-left corner in screen coordinates.
    pub fn position(&self) -> (i32, i32) {
        let mut x = 0;
        let mut y = 0;
        unsafe { ffi::glfwGetWindowPos(self.ptr, &mut x, &mut y) };
        (x, y)
    }

    /// Move the window.
    pub fn set_position(&mut self, x: i32, y: i32) {
        unsafe { ffi::glfwSetWindowPos(self.ptr, x, y) };
    }

    /// Size of the content area in screen coordinates.
    pub fn size(&self) -> (i32, i32) {
        let mut width = 0;
        let mut height = 0;
        unsafe { ffi::glfwGetWindowSize(self.ptr, &mut width, &mut height) };
        (width, height)
    }

    /// Resize the content area.
    pub fn set_size(&mut self, width: u32, height: u32) {
        unsafe { ffi::glfwSetWindowSize(self.ptr, width as c_int, height as c_int) };
    }

    /// Constrain the content area size; `None` means unconstrained on
    /// that edge.
    pub fn set_size_limits(
        &mut self,
        min: (Option<u32>, Option<u32>),
        max: (Option<u32>, Option<u32>),
    ) {
        unsafe {
            ffi::glfwSetWindowSizeLimits(
                self.ptr,
                dont_care(min.0),
                dont_care(min.1),
                dont_care(max.0),
                dont_care(max.1),
            );
        }
    }

    /// Force a fixed aspect ratio, or `None` to release it.
    pub fn set_aspect_ratio(&mut self, ratio: Option<(u32, u32)>) {
        let (numer, denom) = match ratio {
            Some((n, d)) => (n as c_int, d as c_int),
            None => (ffi::GLFW_DONT_CARE, ffi::GLFW_DONT_CARE),
        };
        unsafe { ffi::glfwSetWindowAspectRatio(self.ptr, numer, denom) };
    }

    /// Size of the framebuffer in pixels.
    pub fn framebuffer_size(&self) -> (i32, i32) {
        let mut width = 0;
        let mut height = 0;
        unsafe { ffi::glfwGetFramebufferSize(self.ptr, &mut width, &mut height) };
        (width, height)
    }

    /// Size of the window frame on each edge, as
    /// `(left, top, right, bottom)` in screen coordinates.
    pub fn frame_size(&self) -> (i32, i32, i32, i32) {
        let mut left = 0;
        let mut top = 0;
        let mut right = 0;
        let mut bottom = 0;
        unsafe {
            ffi::glfwGetWindowFrameSize(self.ptr, &mut left, &mut top, &mut right, &mut bottom);
        }
        (left, top, right, bottom)
    }

    /// Content scale of the window.
    pub fn content_scale(&self) -> (f32, f32) {
        let mut xscale = 0.0;
        let mut yscale = 0.0;
        unsafe { ffi::glfwGetWindowContentScale(self.ptr, &mut xscale, &mut yscale) };
        (xscale, yscale)
    }

    /// Opacity of the whole window, `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        unsafe { ffi::glfwGetWindowOpacity(self.ptr) }
    }

    /// Set the opacity of the whole window.
    pub fn set_opacity(&mut self, opacity: f32) {
        unsafe { ffi::glfwSetWindowOpacity(self.ptr, opacity) };
    }

    /// Iconify (minimize) the window.
    pub fn iconify(&mut self) {
        unsafe { ffi::glfwIconifyWindow(self.ptr) };
    }

    /// Restore the window from iconified or maximized state.
    pub fn restore(&mut self) {
        unsafe { ffi::glfwRestoreWindow(self.ptr) };
    }

    /// Maximize the window.
    pub fn maximize(&mut self) {
        unsafe { ffi::glfwMaximizeWindow(self.ptr) };
    }

    /// Make the window visible.
    pub fn show(&mut self) {
        unsafe { ffi::glfwShowWindow(self.ptr) };
    }

    /// Hide the window.
    pub fn hide(&mut self) {
        unsafe { ffi::glfwHideWindow(self.ptr) };
    }

    /// Bring the window to front and give it input focus.
    pub fn focus(&mut self) {
        unsafe { ffi::glfwFocusWindow(self.ptr) };
    }

    /// Request user attention on the window.
    pub fn request_attention(&mut self) {
        unsafe { ffi::glfwRequestWindowAttention(self.ptr) };
    }

    /// The monitor a fullscreen window sits on, `None` when windowed.
    pub fn monitor(&self) -> Option<Monitor> {
        let ptr = unsafe { ffi::glfwGetWindowMonitor(self.ptr) };
        if ptr.is_null() {
            return None;
        }
        Some(Monitor::from_raw(ptr))
    }

    /// Switch between fullscreen and windowed mode. With a monitor the
    /// window goes fullscreen at `width`x`height`; without one it
    /// becomes windowed at the given position and size.
    pub fn set_monitor(
        &mut self,
        monitor: Option<&Monitor>,
        position: (i32, i32),
        size: (u32, u32),
        refresh_rate: Option<u32>,
    ) {
        unsafe {
            ffi::glfwSetWindowMonitor(
                self.ptr,
                monitor.map_or(std::ptr::null_mut(), |m| m.as_ptr()),
                position.0,
                position.1,
                size.0 as c_int,
                size.1 as c_int,
                dont_care(refresh_rate),
            );
        }
    }

    /// Read a window attribute by its raw constant (`ffi::GLFW_*`).
    pub fn attrib(&self, attrib: c_int) -> i32 {
        unsafe { ffi::glfwGetWindowAttrib(self.ptr, attrib) }
    }

    /// Set a writable window attribute by its raw constant.
    pub fn set_attrib(&mut self, attrib: c_int, value: i32) {
        unsafe { ffi::glfwSetWindowAttrib(self.ptr, attrib, value) };
    }

    /// Whether the window currently has input focus.
    pub fn is_focused(&self) -> bool {
        self.attrib(ffi::GLFW_FOCUSED) == ffi::GLFW_TRUE
    }

    /// Whether the window is iconified.
    pub fn is_iconified(&self) -> bool {
        self.attrib(ffi::GLFW_ICONIFIED) == ffi::GLFW_TRUE
    }

    /// Whether the window is maximized.
    pub fn is_maximized(&self) -> bool {
        self.attrib(ffi::GLFW_MAXIMIZED) == ffi::GLFW_TRUE
    }

    /// Whether the window is visible.
    pub fn is_visible(&self) -> bool {
        self.attrib(ffi::GLFW_VISIBLE) == ffi::GLFW_TRUE
    }

    /// Whether the cursor is currently over the content area.
    pub fn is_hovered(&self) -> bool {
        self.attrib(ffi::GLFW_HOVERED) == ffi::GLFW_TRUE
    }

    /// Swap the front and back buffers.
    pub fn swap_buffers(&mut self) {
        unsafe { ffi::glfwSwapBuffers(self.ptr) };
    }

    /// Make the window's context current on the calling thread.
    pub fn make_context_current(&mut self) {
        unsafe { ffi::glfwMakeContextCurrent(self.ptr) };
    }

    /// System clipboard contents, if they form a convertible string.
    pub fn clipboard(&self) -> Option<String> {
        let ptr = unsafe { ffi::glfwGetClipboardString(self.ptr) };
        if ptr.is_null() {
            return None;
        }
        Some(
            unsafe { CStr::from_ptr(ptr) }
                .to_string_lossy()
                .into_owned(),
        )
    }

    /// Replace the system clipboard contents.
    pub fn set_clipboard(&mut self, contents: &str) -> Result<(), Error> {
        let contents = input::to_c_string(contents, "clipboard string")?;
        unsafe { ffi::glfwSetClipboardString(self.ptr, contents.as_ptr()) };
        Ok(())
    }

    /// Cursor position relative to the content area.
    pub fn cursor_position(&self) -> (f64, f64) {
        let mut x = 0.0;
        let mut y = 0.0;
        unsafe { ffi::glfwGetCursorPos(self.ptr, &mut x, &mut y) };
        (x, y)
    }

    /// Move the cursor within the content area. The window must be
    /// focused.
    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        unsafe { ffi::glfwSetCursorPos(self.ptr, x, y) };
    }

    /// Use a custom cursor over the window, or `None` for the default
    /// arrow. The cursor must outlive its use by the window.
    pub fn set_cursor(&mut self, cursor: Option<&Cursor>) {
        let ptr = cursor.map_or(std::ptr::null_mut(), Cursor::as_ptr);
        unsafe { ffi::glfwSetCursor(self.ptr, ptr) };
    }

    /// Current cursor behavior for this window.
    pub fn cursor_mode(&self) -> CursorMode {
        CursorMode::from_raw(unsafe { ffi::glfwGetInputMode(self.ptr, ffi::GLFW_CURSOR) })
    }

    /// Change cursor behavior for this window.
    pub fn set_cursor_mode(&mut self, mode: CursorMode) {
        unsafe { ffi::glfwSetInputMode(self.ptr, ffi::GLFW_CURSOR, mode.to_raw()) };
    }

    /// Read a boolean input mode.
    pub fn input_mode(&self, mode: InputMode) -> bool {
        (unsafe { ffi::glfwGetInputMode(self.ptr, mode.to_raw()) }) == ffi::GLFW_TRUE
    }

    /// Set a boolean input mode.
    pub fn set_input_mode(&mut self, mode: InputMode, value: bool) {
        unsafe { ffi::glfwSetInputMode(self.ptr, mode.to_raw(), bool_value(value)) };
    }

    /// Last reported state of a keyboard key.
    pub fn key(&self, key: Key) -> Action {
        Action::from_raw(unsafe { ffi::glfwGetKey(self.ptr, key.to_raw()) })
    }

    /// Last reported state of a mouse button.
    pub fn mouse_button(&self, button: MouseButton) -> Action {
        Action::from_raw(unsafe { ffi::glfwGetMouseButton(self.ptr, button.to_raw()) })
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        // Detach the queue before the native window goes away so a
        // callback firing mid-destroy cannot reach freed state.
        unsafe {
            ffi::glfwSetWindowUserPointer(self.ptr, std::ptr::null_mut());
            ffi::glfwDestroyWindow(self.ptr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_validates_buffer_length() {
        assert!(Image::new(2, 2, vec![0; 16]).is_ok());
        assert!(Image::new(2, 2, vec![0; 15]).is_err());
        assert!(Image::new(0, 0, Vec::new()).is_ok());
    }

    #[test]
    fn test_image_as_raw_reflects_dimensions() {
        let image = Image::new(4, 2, vec![0xAB; 32]).unwrap();
        let raw = image.as_raw();
        assert_eq!(raw.width, 4);
        assert_eq!(raw.height, 2);
        assert!(!raw.pixels.is_null());
    }

    #[test]
    fn test_dont_care_mapping() {
        assert_eq!(dont_care(None), ffi::GLFW_DONT_CARE);
        assert_eq!(dont_care(Some(60)), 60);
    }

    #[test]
    fn test_bool_value_mapping() {
        assert_eq!(bool_value(true), ffi::GLFW_TRUE);
        assert_eq!(bool_value(false), ffi::GLFW_FALSE);
    }
}
