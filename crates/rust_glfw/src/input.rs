//! Keyboard, mouse and cursor vocabulary.
//!
//! Raw integer codes from the native library are lifted into enums at
//! the callback boundary and lowered back for polling calls. Codes the
//! binding does not recognize become [`Key::Unknown`] rather than
//! being dropped.

use std::ffi::{CStr, CString};

use bitflags::bitflags;
use libc::c_int;

use crate::error::{self, Error};
use crate::ffi;
use crate::window::Image;

/// Keyboard keys, named after their US layout engraving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(i32)]
pub enum Key {
    Unknown = ffi::GLFW_KEY_UNKNOWN,
    Space = ffi::GLFW_KEY_SPACE,
    Apostrophe = ffi::GLFW_KEY_APOSTROPHE,
    Comma = ffi::GLFW_KEY_COMMA,
    Minus = ffi::GLFW_KEY_MINUS,
    Period = ffi::GLFW_KEY_PERIOD,
    Slash = ffi::GLFW_KEY_SLASH,
    Num0 = ffi::GLFW_KEY_0,
    Num1 = ffi::GLFW_KEY_1,
    Num2 = ffi::GLFW_KEY_2,
    Num3 = ffi::GLFW_KEY_3,
    Num4 = ffi::GLFW_KEY_4,
    Num5 = ffi::GLFW_KEY_5,
    Num6 = ffi::GLFW_KEY_6,
    Num7 = ffi::GLFW_KEY_7,
    Num8 = ffi::GLFW_KEY_8,
    Num9 = ffi::GLFW_KEY_9,
    Semicolon = ffi::GLFW_KEY_SEMICOLON,
    Equal = ffi::GLFW_KEY_EQUAL,
    A = ffi::GLFW_KEY_A,
    B = ffi::GLFW_KEY_B,
    C = ffi::GLFW_KEY_C,
    D = ffi::GLFW_KEY_D,
    E = ffi::GLFW_KEY_E,
    F = ffi::GLFW_KEY_F,
    G = ffi::GLFW_KEY_G,
    H = ffi::GLFW_KEY_H,
    I = ffi::GLFW_KEY_I,
    J = ffi::GLFW_KEY_J,
    K = ffi::GLFW_KEY_K,
    L = ffi::GLFW_KEY_L,
    M = ffi::GLFW_KEY_M,
    N = ffi::GLFW_KEY_N,
    O = ffi::GLFW_KEY_O,
    P = ffi::GLFW_KEY_P,
    Q = ffi::GLFW_KEY_Q,
    R = ffi::GLFW_KEY_R,
    S = ffi::GLFW_KEY_S,
    T = ffi::GLFW_KEY_T,
    U = ffi::GLFW_KEY_U,
    V = ffi::GLFW_KEY_V,
    W = ffi::GLFW_KEY_W,
    X = ffi::GLFW_KEY_X,
    Y = ffi::GLFW_KEY_Y,
    Z = ffi::GLFW_KEY_Z,
    LeftBracket = ffi::GLFW_KEY_LEFT_BRACKET,
    Backslash = ffi::GLFW_KEY_BACKSLASH,
    RightBracket = ffi::GLFW_KEY_RIGHT_BRACKET,
    GraveAccent = ffi::GLFW_KEY_GRAVE_ACCENT,
    World1 = ffi::GLFW_KEY_WORLD_1,
    World2 = ffi::GLFW_KEY_WORLD_2,
    Escape = ffi::GLFW_KEY_ESCAPE,
    Enter = ffi::GLFW_KEY_ENTER,
    Tab = ffi::GLFW_KEY_TAB,
    Backspace = ffi::GLFW_KEY_BACKSPACE,
    Insert = ffi::GLFW_KEY_INSERT,
    Delete = ffi::GLFW_KEY_DELETE,
    Right = ffi::GLFW_KEY_RIGHT,
    Left = ffi::GLFW_KEY_LEFT,
    Down = ffi::GLFW_KEY_DOWN,
    Up = ffi::GLFW_KEY_UP,
    PageUp = ffi::GLFW_KEY_PAGE_UP,
    PageDown = ffi::GLFW_KEY_PAGE_DOWN,
    Home = ffi::GLFW_KEY_HOME,
    End = ffi::GLFW_KEY_END,
    CapsLock = ffi::GLFW_KEY_CAPS_LOCK,
    ScrollLock = ffi::GLFW_KEY_SCROLL_LOCK,
    NumLock = ffi::GLFW_KEY_NUM_LOCK,
    PrintScreen = ffi::GLFW_KEY_PRINT_SCREEN,
    Pause = ffi::GLFW_KEY_PAUSE,
    F1 = ffi::GLFW_KEY_F1,
    F2 = ffi::GLFW_KEY_F2,
    F3 = ffi::GLFW_KEY_F3,
    F4 = ffi::GLFW_KEY_F4,
    F5 = ffi::GLFW_KEY_F5,
    F6 = ffi::GLFW_KEY_F6,
    F7 = ffi::GLFW_KEY_F7,
    F8 = ffi::GLFW_KEY_F8,
    F9 = ffi::GLFW_KEY_F9,
    F10 = ffi::GLFW_KEY_F10,
    F11 = ffi::GLFW_KEY_F11,
    F12 = ffi::GLFW_KEY_F12,
    F13 = ffi::GLFW_KEY_F13,
    F14 = ffi::GLFW_KEY_F14,
    F15 = ffi::GLFW_KEY_F15,
    F16 = ffi::GLFW_KEY_F16,
    F17 = ffi::GLFW_KEY_F17,
    F18 = ffi::GLFW_KEY_F18,
    F19 = ffi::GLFW_KEY_F19,
    F20 = ffi::GLFW_KEY_F20,
    F21 = ffi::GLFW_KEY_F21,
    F22 = ffi::GLFW_KEY_F22,
    F23 = ffi::GLFW_KEY_F23,
    F24 = ffi::GLFW_KEY_F24,
    F25 = ffi::GLFW_KEY_F25,
    Kp0 = ffi::GLFW_KEY_KP_0,
    Kp1 = ffi::GLFW_KEY_KP_1,
    Kp2 = ffi::GLFW_KEY_KP_2,
    Kp3 = ffi::GLFW_KEY_KP_3,
    Kp4 = ffi::GLFW_KEY_KP_4,
    Kp5 = ffi::GLFW_KEY_KP_5,
    Kp6 = ffi::GLFW_KEY_KP_6,
    Kp7 = ffi::GLFW_KEY_KP_7,
    Kp8 = ffi::GLFW_KEY_KP_8,
    Kp9 = ffi::GLFW_KEY_KP_9,
    KpDecimal = ffi::GLFW_KEY_KP_DECIMAL,
    KpDivide = ffi::GLFW_KEY_KP_DIVIDE,
    KpMultiply = ffi::GLFW_KEY_KP_MULTIPLY,
    KpSubtract = ffi::GLFW_KEY_KP_SUBTRACT,
    KpAdd = ffi::GLFW_KEY_KP_ADD,
    KpEnter = ffi::GLFW_KEY_KP_ENTER,
    KpEqual = ffi::GLFW_KEY_KP_EQUAL,
    LeftShift = ffi::GLFW_KEY_LEFT_SHIFT,
    LeftControl = ffi::GLFW_KEY_LEFT_CONTROL,
    LeftAlt = ffi::GLFW_KEY_LEFT_ALT,
    LeftSuper = ffi::GLFW_KEY_LEFT_SUPER,
    RightShift = ffi::GLFW_KEY_RIGHT_SHIFT,
    RightControl = ffi::GLFW_KEY_RIGHT_CONTROL,
    RightAlt = ffi::GLFW_KEY_RIGHT_ALT,
    RightSuper = ffi::GLFW_KEY_RIGHT_SUPER,
    Menu = ffi::GLFW_KEY_MENU,
}

impl Key {
    /// Lift a raw key code; codes outside the key table become
    /// [`Key::Unknown`].
    pub fn from_raw(key: c_int) -> Self {
        match key {
            ffi::GLFW_KEY_SPACE => Self::Space,
            ffi::GLFW_KEY_APOSTROPHE => Self::Apostrophe,
            ffi::GLFW_KEY_COMMA => Self::Comma,
            ffi::GLFW_KEY_MINUS => Self::Minus,
            ffi::GLFW_KEY_PERIOD => Self::Period,
            ffi::GLFW_KEY_SLASH => Self::Slash,
            ffi::GLFW_KEY_0 => Self::Num0,
            ffi::GLFW_KEY_1 => Self::Num1,
            ffi::GLFW_KEY_2 => Self::Num2,
            ffi::GLFW_KEY_3 => Self::Num3,
            ffi::GLFW_KEY_4 => Self::Num4,
            ffi::GLFW_KEY_5 => Self::Num5,
            ffi::GLFW_KEY_6 => Self::Num6,
            ffi::GLFW_KEY_7 => Self::Num7,
            ffi::GLFW_KEY_8 => Self::Num8,
            ffi::GLFW_KEY_9 => Self::Num9,
            ffi::GLFW_KEY_SEMICOLON => Self::Semicolon,
            ffi::GLFW_KEY_EQUAL => Self::Equal,
            ffi::GLFW_KEY_A => Self::A,
            ffi::GLFW_KEY_B => Self::B,
            ffi::GLFW_KEY_C => Self::C,
            ffi::GLFW_KEY_D => Self::D,
            ffi::GLFW_KEY_E => Self::E,
            ffi::GLFW_KEY_F => Self::F,
            ffi::GLFW_KEY_G => Self::G,
            ffi::GLFW_KEY_H => Self::H,
            ffi::GLFW_KEY_I => Self::I,
            ffi::GLFW_KEY_J => Self::J,
            ffi::GLFW_KEY_K => Self::K,
            ffi::GLFW_KEY_L => Self::L,
            ffi::GLFW_KEY_M => Self::M,
            ffi::GLFW_KEY_N => Self::N,
            ffi::GLFW_KEY_O => Self::O,
            ffi::GLFW_KEY_P => Self::P,
            ffi::GLFW_KEY_Q => Self::Q,
            ffi::GLFW_KEY_R => Self::R,
            ffi::GLFW_KEY_S => Self::S,
            ffi::GLFW_KEY_T => Self::T,
            ffi::GLFW_KEY_U => Self::U,
            ffi::GLFW_KEY_V => Self::V,
            ffi::GLFW_KEY_W => Self::W,
            ffi::GLFW_KEY_X => Self::X,
            ffi::GLFW_KEY_Y => Self::Y,
            ffi::GLFW_KEY_Z => Self::Z,
            ffi::GLFW_KEY_LEFT_BRACKET => Self::LeftBracket,
            ffi::GLFW_KEY_BACKSLASH => Self::Backslash,
            ffi::GLFW_KEY_RIGHT_BRACKET => Self::RightBracket,
            ffi::GLFW_KEY_GRAVE_ACCENT => Self::GraveAccent,
            ffi::GLFW_KEY_WORLD_1 => Self::World1,
            ffi::GLFW_KEY_WORLD_2 => Self::World2,
            ffi::GLFW_KEY_ESCAPE => Self::Escape,
            ffi::GLFW_KEY_ENTER => Self::Enter,
            ffi::GLFW_KEY_TAB => Self::Tab,
            ffi::GLFW_KEY_BACKSPACE => Self::Backspace,
            ffi::GLFW_KEY_INSERT => Self::Insert,
            ffi::GLFW_KEY_DELETE => Self::Delete,
            ffi::GLFW_KEY_RIGHT => Self::Right,
            ffi::GLFW_KEY_LEFT => Self::Left,
            ffi::GLFW_KEY_DOWN => Self::Down,
            ffi::GLFW_KEY_UP => Self::Up,
            ffi::GLFW_KEY_PAGE_UP => Self::PageUp,
            ffi::GLFW_KEY_PAGE_DOWN => Self::PageDown,
            ffi::GLFW_KEY_HOME => Self::Home,
            ffi::GLFW_KEY_END => Self::End,
            ffi::GLFW_KEY_CAPS_LOCK => Self::CapsLock,
            ffi::GLFW_KEY_SCROLL_LOCK => Self::ScrollLock,
            ffi::GLFW_KEY_NUM_LOCK => Self::NumLock,
            ffi::GLFW_KEY_PRINT_SCREEN => Self::PrintScreen,
            ffi::GLFW_KEY_PAUSE => Self::Pause,
            ffi::GLFW_KEY_F1 => Self::F1,
            ffi::GLFW_KEY_F2 => Self::F2,
            ffi::GLFW_KEY_F3 => Self::F3,
            ffi::GLFW_KEY_F4 => Self::F4,
            ffi::GLFW_KEY_F5 => Self::F5,
            ffi::GLFW_KEY_F6 => Self::F6,
            ffi::GLFW_KEY_F7 => Self::F7,
            ffi::GLFW_KEY_F8 => Self::F8,
            ffi::GLFW_KEY_F9 => Self::F9,
            ffi::GLFW_KEY_F10 => Self::F10,
            ffi::GLFW_KEY_F11 => Self::F11,
            ffi::GLFW_KEY_F12 => Self::F12,
            ffi::GLFW_KEY_F13 => Self::F13,
            ffi::GLFW_KEY_F14 => Self::F14,
            ffi::GLFW_KEY_F15 => Self::F15,
            ffi::GLFW_KEY_F16 => Self::F16,
            ffi::GLFW_KEY_F17 => Self::F17,
            ffi::GLFW_KEY_F18 => Self::F18,
            ffi::GLFW_KEY_F19 => Self::F19,
            ffi::GLFW_KEY_F20 => Self::F20,
            ffi::GLFW_KEY_F21 => Self::F21,
            ffi::GLFW_KEY_F22 => Self::F22,
            ffi::GLFW_KEY_F23 => Self::F23,
            ffi::GLFW_KEY_F24 => Self::F24,
            ffi::GLFW_KEY_F25 => Self::F25,
            ffi::GLFW_KEY_KP_0 => Self::Kp0,
            ffi::GLFW_KEY_KP_1 => Self::Kp1,
            ffi::GLFW_KEY_KP_2 => Self::Kp2,
            ffi::GLFW_KEY_KP_3 => Self::Kp3,
            ffi::GLFW_KEY_KP_4 => Self::Kp4,
            ffi::GLFW_KEY_KP_5 => Self::Kp5,
            ffi::GLFW_KEY_KP_6 => Self::Kp6,
            ffi::GLFW_KEY_KP_7 => Self::Kp7,
            ffi::GLFW_KEY_KP_8 => Self::Kp8,
            ffi::GLFW_KEY_KP_9 => Self::Kp9,
            ffi::GLFW_KEY_KP_DECIMAL => Self::KpDecimal,
            ffi::GLFW_KEY_KP_DIVIDE => Self::KpDivide,
            ffi::GLFW_KEY_KP_MULTIPLY => Self::KpMultiply,
            ffi::GLFW_KEY_KP_SUBTRACT => Self::KpSubtract,
            ffi::GLFW_KEY_KP_ADD => Self::KpAdd,
            ffi::GLFW_KEY_KP_ENTER => Self::KpEnter,
            ffi::GLFW_KEY_KP_EQUAL => Self::KpEqual,
            ffi::GLFW_KEY_LEFT_SHIFT => Self::LeftShift,
            ffi::GLFW_KEY_LEFT_CONTROL => Self::LeftControl,
            ffi::GLFW_KEY_LEFT_ALT => Self::LeftAlt,
            ffi::GLFW_KEY_LEFT_SUPER => Self::LeftSuper,
            ffi::GLFW_KEY_RIGHT_SHIFT => Self::RightShift,
            ffi::GLFW_KEY_RIGHT_CONTROL => Self::RightControl,
            ffi::GLFW_KEY_RIGHT_ALT => Self::RightAlt,
            ffi::GLFW_KEY_RIGHT_SUPER => Self::RightSuper,
            ffi::GLFW_KEY_MENU => Self::Menu,
            _ => Self::Unknown,
        }
    }

    /// Lower back to the raw key code.
    pub fn to_raw(self) -> c_int {
        self as c_int
    }

    /// Layout-specific name of a printable key, if the native library
    /// knows one. Pass [`Key::Unknown`] to look up by scancode.
    pub fn name(self, scancode: i32) -> Option<String> {
        let ptr = unsafe { ffi::glfwGetKeyName(self.to_raw(), scancode) };
        if ptr.is_null() {
            return None;
        }
        Some(
            unsafe { CStr::from_ptr(ptr) }
                .to_string_lossy()
                .into_owned(),
        )
    }

    /// Platform scancode of this key, or `None` when the key has no
    /// scancode on this platform.
    pub fn scancode(self) -> Option<i32> {
        let scancode = unsafe { ffi::glfwGetKeyScancode(self.to_raw()) };
        (scancode >= 0).then_some(scancode)
    }
}

/// State transition reported for a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The key or button was released
    Release,
    /// The key or button was pressed
    Press,
    /// The key was held down until it repeated
    Repeat,
}

impl Action {
    /// Lift a raw action code. The native library only ever reports
    /// the three known values; anything else is treated as a release.
    pub fn from_raw(action: c_int) -> Self {
        match action {
            ffi::GLFW_PRESS => Self::Press,
            ffi::GLFW_REPEAT => Self::Repeat,
            _ => Self::Release,
        }
    }

    /// Lower back to the raw action code.
    pub fn to_raw(self) -> c_int {
        match self {
            Self::Release => ffi::GLFW_RELEASE,
            Self::Press => ffi::GLFW_PRESS,
            Self::Repeat => ffi::GLFW_REPEAT,
        }
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(i32)]
pub enum MouseButton {
    Button1 = ffi::GLFW_MOUSE_BUTTON_1,
    Button2 = ffi::GLFW_MOUSE_BUTTON_2,
    Button3 = ffi::GLFW_MOUSE_BUTTON_3,
    Button4 = ffi::GLFW_MOUSE_BUTTON_4,
    Button5 = ffi::GLFW_MOUSE_BUTTON_5,
    Button6 = ffi::GLFW_MOUSE_BUTTON_6,
    Button7 = ffi::GLFW_MOUSE_BUTTON_7,
    Button8 = ffi::GLFW_MOUSE_BUTTON_8,
}

impl MouseButton {
    /// Left mouse button
    pub const LEFT: Self = Self::Button1;
    /// Right mouse button
    pub const RIGHT: Self = Self::Button2;
    /// Middle mouse button
    pub const MIDDLE: Self = Self::Button3;

    /// Lift a raw button code; out-of-range codes map to `None`.
    pub fn from_raw(button: c_int) -> Option<Self> {
        match button {
            ffi::GLFW_MOUSE_BUTTON_1 => Some(Self::Button1),
            ffi::GLFW_MOUSE_BUTTON_2 => Some(Self::Button2),
            ffi::GLFW_MOUSE_BUTTON_3 => Some(Self::Button3),
            ffi::GLFW_MOUSE_BUTTON_4 => Some(Self::Button4),
            ffi::GLFW_MOUSE_BUTTON_5 => Some(Self::Button5),
            ffi::GLFW_MOUSE_BUTTON_6 => Some(Self::Button6),
            ffi::GLFW_MOUSE_BUTTON_7 => Some(Self::Button7),
            ffi::GLFW_MOUSE_BUTTON_8 => Some(Self::Button8),
            _ => None,
        }
    }

    /// Lower back to the raw button code.
    pub fn to_raw(self) -> c_int {
        self as c_int
    }
}

bitflags! {
    /// Modifier key state delivered with key and mouse button events.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: i32 {
        /// One or more Shift keys held
        const SHIFT = ffi::GLFW_MOD_SHIFT;
        /// One or more Control keys held
        const CONTROL = ffi::GLFW_MOD_CONTROL;
        /// One or more Alt keys held
        const ALT = ffi::GLFW_MOD_ALT;
        /// One or more Super keys held
        const SUPER = ffi::GLFW_MOD_SUPER;
        /// Caps Lock enabled (only with the lock-key-mods input mode)
        const CAPS_LOCK = ffi::GLFW_MOD_CAPS_LOCK;
        /// Num Lock enabled (only with the lock-key-mods input mode)
        const NUM_LOCK = ffi::GLFW_MOD_NUM_LOCK;
    }
}

/// Cursor behavior over a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Cursor visible and free to leave the window
    Normal,
    /// Cursor hidden while over the window content area
    Hidden,
    /// Cursor hidden and locked to the window, providing virtual and
    /// unlimited movement
    Disabled,
    /// Cursor visible but confined to the window content area
    Captured,
}

impl CursorMode {
    pub(crate) fn from_raw(mode: c_int) -> Self {
        match mode {
            ffi::GLFW_CURSOR_HIDDEN => Self::Hidden,
            ffi::GLFW_CURSOR_DISABLED => Self::Disabled,
            ffi::GLFW_CURSOR_CAPTURED => Self::Captured,
            _ => Self::Normal,
        }
    }

    pub(crate) fn to_raw(self) -> c_int {
        match self {
            Self::Normal => ffi::GLFW_CURSOR_NORMAL,
            Self::Hidden => ffi::GLFW_CURSOR_HIDDEN,
            Self::Disabled => ffi::GLFW_CURSOR_DISABLED,
            Self::Captured => ffi::GLFW_CURSOR_CAPTURED,
        }
    }
}

/// Boolean per-window input modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keep keys reported pressed until polled at least once
    StickyKeys,
    /// Keep mouse buttons reported pressed until polled at least once
    StickyMouseButtons,
    /// Include lock key state in event modifier bits
    LockKeyMods,
    /// Use raw (unscaled, unaccelerated) motion while the cursor is
    /// disabled
    RawMouseMotion,
}

impl InputMode {
    pub(crate) fn to_raw(self) -> c_int {
        match self {
            Self::StickyKeys => ffi::GLFW_STICKY_KEYS,
            Self::StickyMouseButtons => ffi::GLFW_STICKY_MOUSE_BUTTONS,
            Self::LockKeyMods => ffi::GLFW_LOCK_KEY_MODS,
            Self::RawMouseMotion => ffi::GLFW_RAW_MOUSE_MOTION,
        }
    }
}

/// Whether raw mouse motion is supported on this machine.
pub fn raw_mouse_motion_supported() -> bool {
    (unsafe { ffi::glfwRawMouseMotionSupported() }) == ffi::GLFW_TRUE
}

/// Standard system cursor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum StandardCursor {
    Arrow,
    IBeam,
    Crosshair,
    PointingHand,
    ResizeEw,
    ResizeNs,
    ResizeNwse,
    ResizeNesw,
    ResizeAll,
    NotAllowed,
}

impl StandardCursor {
    pub(crate) fn to_raw(self) -> c_int {
        match self {
            Self::Arrow => ffi::GLFW_ARROW_CURSOR,
            Self::IBeam => ffi::GLFW_IBEAM_CURSOR,
            Self::Crosshair => ffi::GLFW_CROSSHAIR_CURSOR,
            Self::PointingHand => ffi::GLFW_POINTING_HAND_CURSOR,
            Self::ResizeEw => ffi::GLFW_RESIZE_EW_CURSOR,
            Self::ResizeNs => ffi::GLFW_RESIZE_NS_CURSOR,
            Self::ResizeNwse => ffi::GLFW_RESIZE_NWSE_CURSOR,
            Self::ResizeNesw => ffi::GLFW_RESIZE_NESW_CURSOR,
            Self::ResizeAll => ffi::GLFW_RESIZE_ALL_CURSOR,
            Self::NotAllowed => ffi::GLFW_NOT_ALLOWED_CURSOR,
        }
    }
}

/// A native cursor object, destroyed when dropped.
#[derive(Debug)]
pub struct Cursor {
    ptr: *mut ffi::GLFWcursor,
}

impl Cursor {
    /// Create a custom cursor from an RGBA image with the given hotspot.
    pub fn create(image: &Image, xhot: i32, yhot: i32) -> Result<Self, Error> {
        let raw = image.as_raw();
        let ptr = unsafe { ffi::glfwCreateCursor(&raw, xhot, yhot) };
        if ptr.is_null() {
            return Err(error::take_last_error("glfwCreateCursor failed"));
        }
        Ok(Self { ptr })
    }

    /// Create one of the standard system cursors.
    pub fn standard(shape: StandardCursor) -> Result<Self, Error> {
        let ptr = unsafe { ffi::glfwCreateStandardCursor(shape.to_raw()) };
        if ptr.is_null() {
            return Err(error::take_last_error("glfwCreateStandardCursor failed"));
        }
        Ok(Self { ptr })
    }

    pub(crate) fn as_ptr(&self) -> *mut ffi::GLFWcursor {
        self.ptr
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        unsafe { ffi::glfwDestroyCursor(self.ptr) };
    }
}

pub(crate) fn to_c_string(value: &str, what: &str) -> Result<CString, Error> {
    CString::new(value).map_err(|_| Error::invalid_string(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for key in [
            Key::Space,
            Key::A,
            Key::Z,
            Key::Num0,
            Key::Escape,
            Key::F25,
            Key::Kp9,
            Key::LeftShift,
            Key::Menu,
        ] {
            assert_eq!(Key::from_raw(key.to_raw()), key);
        }
    }

    #[test]
    fn test_unknown_key_codes() {
        assert_eq!(Key::from_raw(ffi::GLFW_KEY_UNKNOWN), Key::Unknown);
        assert_eq!(Key::from_raw(31), Key::Unknown);
        assert_eq!(Key::from_raw(9999), Key::Unknown);
    }

    #[test]
    fn test_action_round_trip() {
        assert_eq!(Action::from_raw(ffi::GLFW_RELEASE), Action::Release);
        assert_eq!(Action::from_raw(ffi::GLFW_PRESS), Action::Press);
        assert_eq!(Action::from_raw(ffi::GLFW_REPEAT), Action::Repeat);
        assert_eq!(Action::Repeat.to_raw(), ffi::GLFW_REPEAT);
    }

    #[test]
    fn test_mouse_button_aliases() {
        assert_eq!(MouseButton::LEFT, MouseButton::Button1);
        assert_eq!(MouseButton::RIGHT, MouseButton::Button2);
        assert_eq!(MouseButton::MIDDLE, MouseButton::Button3);
        assert_eq!(MouseButton::from_raw(ffi::GLFW_MOUSE_BUTTON_LEFT), Some(MouseButton::LEFT));
        assert_eq!(MouseButton::from_raw(8), None);
    }

    #[test]
    fn test_modifier_composition() {
        let mods = Modifiers::from_bits_truncate(
            ffi::GLFW_MOD_SHIFT | ffi::GLFW_MOD_CONTROL | 0x1000,
        );
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(mods.contains(Modifiers::CONTROL));
        assert!(!mods.contains(Modifiers::ALT));
        assert_eq!(mods.bits(), ffi::GLFW_MOD_SHIFT | ffi::GLFW_MOD_CONTROL);
    }

    #[test]
    fn test_cursor_mode_round_trip() {
        for mode in [
            CursorMode::Normal,
            CursorMode::Hidden,
            CursorMode::Disabled,
            CursorMode::Captured,
        ] {
            assert_eq!(CursorMode::from_raw(mode.to_raw()), mode);
        }
    }

    #[test]
    fn test_nul_in_string_rejected() {
        assert!(to_c_string("with\0nul", "title").is_err());
        assert!(to_c_string("clean", "title").is_ok());
    }
}
