//! Window event model and the callback trampolines that feed it.
//!
//! The native library notifies through registered C function pointers.
//! Each window installs the trampolines below at creation time; they
//! recover the window's event queue from the native user pointer,
//! translate the raw C arguments into [`WindowEvent`] values and push
//! them with the current native timestamp. Applications drain the
//! queue with [`crate::window::Window::events`] after pumping.
//!
//! Translation from raw arguments to events is kept in plain functions
//! so it can be exercised without the native library.

use std::ffi::CStr;
use std::path::PathBuf;

use libc::{c_char, c_double, c_float, c_int, c_uint};

use crate::ffi;
use crate::input::{Action, Key, Modifiers, MouseButton};
use crate::window::WindowState;

/// An event delivered to a window.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowEvent {
    /// The window was moved; screen coordinates of the upper-left corner
    Pos(i32, i32),
    /// The window was resized; new size in screen coordinates
    Size(i32, i32),
    /// The user requested that the window close
    Close,
    /// The window contents need to be redrawn
    Refresh,
    /// The window gained (`true`) or lost input focus
    Focus(bool),
    /// The window was iconified (`true`) or restored
    Iconify(bool),
    /// The window was maximized (`true`) or restored
    Maximize(bool),
    /// The framebuffer was resized; new size in pixels
    FramebufferSize(i32, i32),
    /// The content scale of the window changed
    ContentScale(f32, f32),
    /// A key was pressed, repeated or released
    Key {
        /// The key involved
        key: Key,
        /// Platform scancode of the key
        scancode: i32,
        /// Press, repeat or release
        action: Action,
        /// Modifier keys held at the time
        mods: Modifiers,
    },
    /// A Unicode character was input
    Char(char),
    /// A Unicode character was input together with modifier state
    CharModifiers(char, Modifiers),
    /// A mouse button was pressed or released
    MouseButton {
        /// The button involved
        button: MouseButton,
        /// Press or release
        action: Action,
        /// Modifier keys held at the time
        mods: Modifiers,
    },
    /// The cursor moved; content-area coordinates
    CursorPos(f64, f64),
    /// The cursor entered (`true`) or left the content area
    CursorEnter(bool),
    /// A scroll device moved
    Scroll(f64, f64),
    /// Files or directories were dropped onto the window
    FileDrop(Vec<PathBuf>),
}

/// Pump: process pending events and return immediately.
pub fn poll_events() {
    unsafe { ffi::glfwPollEvents() };
}

/// Pump: block until at least one event arrives, then process.
pub fn wait_events() {
    unsafe { ffi::glfwWaitEvents() };
}

/// Pump: block until an event arrives or `timeout` seconds pass.
pub fn wait_events_timeout(timeout: f64) {
    unsafe { ffi::glfwWaitEventsTimeout(timeout) };
}

/// Wake a [`wait_events`] call on another iteration of the loop.
pub fn post_empty_event() {
    unsafe { ffi::glfwPostEmptyEvent() };
}

// --- raw argument translation ------------------------------------------

pub(crate) fn key_event(key: c_int, scancode: c_int, action: c_int, mods: c_int) -> WindowEvent {
    WindowEvent::Key {
        key: Key::from_raw(key),
        scancode,
        action: Action::from_raw(action),
        mods: Modifiers::from_bits_truncate(mods),
    }
}

pub(crate) fn mouse_button_event(button: c_int, action: c_int, mods: c_int) -> Option<WindowEvent> {
    Some(WindowEvent::MouseButton {
        button: MouseButton::from_raw(button)?,
        action: Action::from_raw(action),
        mods: Modifiers::from_bits_truncate(mods),
    })
}

pub(crate) fn char_event(codepoint: c_uint) -> Option<WindowEvent> {
    char::from_u32(codepoint).map(WindowEvent::Char)
}

pub(crate) fn char_mods_event(codepoint: c_uint, mods: c_int) -> Option<WindowEvent> {
    char::from_u32(codepoint)
        .map(|ch| WindowEvent::CharModifiers(ch, Modifiers::from_bits_truncate(mods)))
}

/// Copy a native array of C path strings into owned paths.
///
/// # Safety
/// `paths` must point to `path_count` valid NUL-terminated strings, or
/// be null.
pub(crate) unsafe fn file_drop_event(
    path_count: c_int,
    paths: *const *const c_char,
) -> WindowEvent {
    let mut collected = Vec::new();

    if !paths.is_null() {
        for i in 0..path_count.max(0) as usize {
            let path = *paths.add(i);
            if path.is_null() {
                continue;
            }
            let path = CStr::from_ptr(path).to_string_lossy().into_owned();
            collected.push(PathBuf::from(path));
        }
    }

    WindowEvent::FileDrop(collected)
}

// --- trampolines -------------------------------------------------------

/// Push an event onto the queue stashed behind the window user pointer.
///
/// # Safety
/// Must only be called from a native callback for a window created by
/// this crate, which guarantees the user pointer is a live
/// `WindowState`.
unsafe fn push(window: *mut ffi::GLFWwindow, event: WindowEvent) {
    let state = ffi::glfwGetWindowUserPointer(window).cast::<WindowState>();
    if state.is_null() {
        return;
    }
    let timestamp = ffi::glfwGetTime();
    (*state).events.push_back((timestamp, event));
}

pub(crate) unsafe extern "C" fn window_pos_callback(
    window: *mut ffi::GLFWwindow,
    xpos: c_int,
    ypos: c_int,
) {
    push(window, WindowEvent::Pos(xpos, ypos));
}

pub(crate) unsafe extern "C" fn window_size_callback(
    window: *mut ffi::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    push(window, WindowEvent::Size(width, height));
}

pub(crate) unsafe extern "C" fn window_close_callback(window: *mut ffi::GLFWwindow) {
    push(window, WindowEvent::Close);
}

pub(crate) unsafe extern "C" fn window_refresh_callback(window: *mut ffi::GLFWwindow) {
    push(window, WindowEvent::Refresh);
}

pub(crate) unsafe extern "C" fn window_focus_callback(window: *mut ffi::GLFWwindow, focused: c_int) {
    push(window, WindowEvent::Focus(focused == ffi::GLFW_TRUE));
}

pub(crate) unsafe extern "C" fn window_iconify_callback(
    window: *mut ffi::GLFWwindow,
    iconified: c_int,
) {
    push(window, WindowEvent::Iconify(iconified == ffi::GLFW_TRUE));
}

pub(crate) unsafe extern "C" fn window_maximize_callback(
    window: *mut ffi::GLFWwindow,
    maximized: c_int,
) {
    push(window, WindowEvent::Maximize(maximized == ffi::GLFW_TRUE));
}

pub(crate) unsafe extern "C" fn framebuffer_size_callback(
    window: *mut ffi::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    push(window, WindowEvent::FramebufferSize(width, height));
}

pub(crate) unsafe extern "C" fn window_content_scale_callback(
    window: *mut ffi::GLFWwindow,
    xscale: c_float,
    yscale: c_float,
) {
    push(window, WindowEvent::ContentScale(xscale, yscale));
}

pub(crate) unsafe extern "C" fn key_callback(
    window: *mut ffi::GLFWwindow,
    key: c_int,
    scancode: c_int,
    action: c_int,
    mods: c_int,
) {
    push(window, key_event(key, scancode, action, mods));
}

pub(crate) unsafe extern "C" fn char_callback(window: *mut ffi::GLFWwindow, codepoint: c_uint) {
    if let Some(event) = char_event(codepoint) {
        push(window, event);
    }
}

pub(crate) unsafe extern "C" fn char_mods_callback(
    window: *mut ffi::GLFWwindow,
    codepoint: c_uint,
    mods: c_int,
) {
    if let Some(event) = char_mods_event(codepoint, mods) {
        push(window, event);
    }
}

pub(crate) unsafe extern "C" fn mouse_button_callback(
    window: *mut ffi::GLFWwindow,
    button: c_int,
    action: c_int,
    mods: c_int,
) {
    if let Some(event) = mouse_button_event(button, action, mods) {
        push(window, event);
    }
}

pub(crate) unsafe extern "C" fn cursor_pos_callback(
    window: *mut ffi::GLFWwindow,
    xpos: c_double,
    ypos: c_double,
) {
    push(window, WindowEvent::CursorPos(xpos, ypos));
}

pub(crate) unsafe extern "C" fn cursor_enter_callback(
    window: *mut ffi::GLFWwindow,
    entered: c_int,
) {
    push(window, WindowEvent::CursorEnter(entered == ffi::GLFW_TRUE));
}

pub(crate) unsafe extern "C" fn scroll_callback(
    window: *mut ffi::GLFWwindow,
    xoffset: c_double,
    yoffset: c_double,
) {
    push(window, WindowEvent::Scroll(xoffset, yoffset));
}

pub(crate) unsafe extern "C" fn drop_callback(
    window: *mut ffi::GLFWwindow,
    path_count: c_int,
    paths: *const *const c_char,
) {
    let event = file_drop_event(path_count, paths);
    push(window, event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_key_event_translation() {
        let event = key_event(
            ffi::GLFW_KEY_ESCAPE,
            9,
            ffi::GLFW_PRESS,
            ffi::GLFW_MOD_SHIFT | ffi::GLFW_MOD_ALT,
        );
        assert_eq!(
            event,
            WindowEvent::Key {
                key: Key::Escape,
                scancode: 9,
                action: Action::Press,
                mods: Modifiers::SHIFT | Modifiers::ALT,
            }
        );
    }

    #[test]
    fn test_unknown_key_still_delivered() {
        let event = key_event(-1, 255, ffi::GLFW_RELEASE, 0);
        assert_eq!(
            event,
            WindowEvent::Key {
                key: Key::Unknown,
                scancode: 255,
                action: Action::Release,
                mods: Modifiers::empty(),
            }
        );
    }

    #[test]
    fn test_mouse_button_event_translation() {
        let event = mouse_button_event(ffi::GLFW_MOUSE_BUTTON_RIGHT, ffi::GLFW_PRESS, 0);
        assert_eq!(
            event,
            Some(WindowEvent::MouseButton {
                button: MouseButton::RIGHT,
                action: Action::Press,
                mods: Modifiers::empty(),
            })
        );
        // Out-of-range button codes are dropped, not mistranslated
        assert_eq!(mouse_button_event(42, ffi::GLFW_PRESS, 0), None);
    }

    #[test]
    fn test_char_event_translation() {
        assert_eq!(char_event(0x61), Some(WindowEvent::Char('a')));
        assert_eq!(char_event(0x1F980), Some(WindowEvent::Char('\u{1F980}')));
        // Surrogates are not scalar values
        assert_eq!(char_event(0xD800), None);
    }

    #[test]
    fn test_char_mods_event_translation() {
        assert_eq!(
            char_mods_event(0x41, ffi::GLFW_MOD_SHIFT),
            Some(WindowEvent::CharModifiers('A', Modifiers::SHIFT))
        );
    }

    #[test]
    fn test_file_drop_marshaling() {
        let owned: Vec<CString> = ["/tmp/a.txt", "/tmp/b.txt"]
            .iter()
            .map(|p| CString::new(*p).unwrap())
            .collect();
        let pointers: Vec<*const c_char> = owned.iter().map(|p| p.as_ptr()).collect();

        let event = unsafe { file_drop_event(pointers.len() as c_int, pointers.as_ptr()) };
        assert_eq!(
            event,
            WindowEvent::FileDrop(vec![PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")])
        );
    }

    #[test]
    fn test_file_drop_null_array() {
        let event = unsafe { file_drop_event(3, std::ptr::null()) };
        assert_eq!(event, WindowEvent::FileDrop(Vec::new()));
    }
}
