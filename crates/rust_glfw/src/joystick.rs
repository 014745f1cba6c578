//! Joystick and gamepad queries.
//!
//! Joysticks are addressed by slot index; all state is polled, with
//! connection changes delivered through a registered handler the same
//! way monitor changes are. Gamepad state adds the SDL mapping layer
//! the native library provides on top of raw joystick input.

use std::ffi::CStr;
use std::sync::Mutex;

use bitflags::bitflags;
use libc::{c_int, c_void};

use crate::error::{self, Error};
use crate::ffi;
use crate::input::{self, Action};
use crate::monitor::Connection;

/// One of the sixteen joystick slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Joystick {
    jid: c_int,
}

impl Joystick {
    /// Joystick in slot `index` (`0..16`), `None` out of range.
    pub fn from_index(index: u32) -> Option<Self> {
        (index <= ffi::GLFW_JOYSTICK_LAST as u32).then(|| Self {
            jid: index as c_int,
        })
    }

    /// All sixteen joystick slots.
    pub fn all() -> impl Iterator<Item = Self> {
        (ffi::GLFW_JOYSTICK_1..=ffi::GLFW_JOYSTICK_LAST).map(|jid| Self { jid })
    }

    pub(crate) fn from_raw(jid: c_int) -> Self {
        Self { jid }
    }

    /// Slot index of this joystick.
    pub fn index(self) -> u32 {
        self.jid as u32
    }

    /// Whether a joystick is present in this slot.
    pub fn is_present(self) -> bool {
        (unsafe { ffi::glfwJoystickPresent(self.jid) }) == ffi::GLFW_TRUE
    }

    /// Axis values, each in `-1.0..=1.0`. Empty when absent.
    pub fn axes(self) -> Vec<f32> {
        let mut count = 0;
        let ptr = unsafe { ffi::glfwGetJoystickAxes(self.jid, &mut count) };
        if ptr.is_null() || count <= 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(ptr, count as usize) }.to_vec()
    }

    /// Button states. Empty when absent.
    pub fn buttons(self) -> Vec<Action> {
        let mut count = 0;
        let ptr = unsafe { ffi::glfwGetJoystickButtons(self.jid, &mut count) };
        if ptr.is_null() || count <= 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(ptr, count as usize) }
            .iter()
            .map(|&state| Action::from_raw(c_int::from(state)))
            .collect()
    }

    /// Hat states. Empty when absent.
    pub fn hats(self) -> Vec<HatState> {
        let mut count = 0;
        let ptr = unsafe { ffi::glfwGetJoystickHats(self.jid, &mut count) };
        if ptr.is_null() || count <= 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(ptr, count as usize) }
            .iter()
            .map(|&state| HatState::from_bits_truncate(state))
            .collect()
    }

    /// Name of the joystick, if present.
    pub fn name(self) -> Option<String> {
        copy_string(unsafe { ffi::glfwGetJoystickName(self.jid) })
    }

    /// SDL-compatible GUID of the joystick, if present.
    pub fn guid(self) -> Option<String> {
        copy_string(unsafe { ffi::glfwGetJoystickGUID(self.jid) })
    }

    /// Attach an arbitrary pointer to the joystick slot.
    pub fn set_user_pointer(self, pointer: *mut c_void) {
        unsafe { ffi::glfwSetJoystickUserPointer(self.jid, pointer) };
    }

    /// The pointer previously attached with [`Self::set_user_pointer`].
    pub fn user_pointer(self) -> *mut c_void {
        unsafe { ffi::glfwGetJoystickUserPointer(self.jid) }
    }

    /// Whether the joystick is present and has a gamepad mapping.
    pub fn is_gamepad(self) -> bool {
        (unsafe { ffi::glfwJoystickIsGamepad(self.jid) }) == ffi::GLFW_TRUE
    }

    /// Human-readable name from the gamepad mapping, if any.
    pub fn gamepad_name(self) -> Option<String> {
        copy_string(unsafe { ffi::glfwGetGamepadName(self.jid) })
    }

    /// Mapped gamepad state, `None` when the joystick is absent or has
    /// no mapping.
    pub fn gamepad_state(self) -> Option<GamepadState> {
        let mut raw = ffi::GLFWgamepadstate {
            buttons: [0; 15],
            axes: [0.0; 6],
        };
        if unsafe { ffi::glfwGetGamepadState(self.jid, &mut raw) } == ffi::GLFW_TRUE {
            Some(GamepadState::from_raw(&raw))
        } else {
            None
        }
    }
}

fn copy_string(ptr: *const libc::c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(
        unsafe { CStr::from_ptr(ptr) }
            .to_string_lossy()
            .into_owned(),
    )
}

bitflags! {
    /// Position of a joystick hat switch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct HatState: u8 {
        /// Hat pressed up
        const UP = ffi::GLFW_HAT_UP as u8;
        /// Hat pressed right
        const RIGHT = ffi::GLFW_HAT_RIGHT as u8;
        /// Hat pressed down
        const DOWN = ffi::GLFW_HAT_DOWN as u8;
        /// Hat pressed left
        const LEFT = ffi::GLFW_HAT_LEFT as u8;
    }
}

impl HatState {
    /// Hat at rest.
    pub const CENTERED: Self = Self::empty();
    /// Diagonal up-right.
    pub const RIGHT_UP: Self = Self::RIGHT.union(Self::UP);
    /// Diagonal down-right.
    pub const RIGHT_DOWN: Self = Self::RIGHT.union(Self::DOWN);
    /// Diagonal up-left.
    pub const LEFT_UP: Self = Self::LEFT.union(Self::UP);
    /// Diagonal down-left.
    pub const LEFT_DOWN: Self = Self::LEFT.union(Self::DOWN);
}

/// Buttons of a mapped gamepad, in Xbox-style naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(i32)]
pub enum GamepadButton {
    A = ffi::GLFW_GAMEPAD_BUTTON_A,
    B = ffi::GLFW_GAMEPAD_BUTTON_B,
    X = ffi::GLFW_GAMEPAD_BUTTON_X,
    Y = ffi::GLFW_GAMEPAD_BUTTON_Y,
    LeftBumper = ffi::GLFW_GAMEPAD_BUTTON_LEFT_BUMPER,
    RightBumper = ffi::GLFW_GAMEPAD_BUTTON_RIGHT_BUMPER,
    Back = ffi::GLFW_GAMEPAD_BUTTON_BACK,
    Start = ffi::GLFW_GAMEPAD_BUTTON_START,
    Guide = ffi::GLFW_GAMEPAD_BUTTON_GUIDE,
    LeftThumb = ffi::GLFW_GAMEPAD_BUTTON_LEFT_THUMB,
    RightThumb = ffi::GLFW_GAMEPAD_BUTTON_RIGHT_THUMB,
    DpadUp = ffi::GLFW_GAMEPAD_BUTTON_DPAD_UP,
    DpadRight = ffi::GLFW_GAMEPAD_BUTTON_DPAD_RIGHT,
    DpadDown = ffi::GLFW_GAMEPAD_BUTTON_DPAD_DOWN,
    DpadLeft = ffi::GLFW_GAMEPAD_BUTTON_DPAD_LEFT,
}

impl GamepadButton {
    /// PlayStation-style alias for [`Self::A`].
    pub const CROSS: Self = Self::A;
    /// PlayStation-style alias for [`Self::B`].
    pub const CIRCLE: Self = Self::B;
    /// PlayStation-style alias for [`Self::X`].
    pub const SQUARE: Self = Self::X;
    /// PlayStation-style alias for [`Self::Y`].
    pub const TRIANGLE: Self = Self::Y;
}

/// Axes of a mapped gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(i32)]
pub enum GamepadAxis {
    LeftX = ffi::GLFW_GAMEPAD_AXIS_LEFT_X,
    LeftY = ffi::GLFW_GAMEPAD_AXIS_LEFT_Y,
    RightX = ffi::GLFW_GAMEPAD_AXIS_RIGHT_X,
    RightY = ffi::GLFW_GAMEPAD_AXIS_RIGHT_Y,
    LeftTrigger = ffi::GLFW_GAMEPAD_AXIS_LEFT_TRIGGER,
    RightTrigger = ffi::GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER,
}

/// Snapshot of a mapped gamepad's input state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamepadState {
    buttons: [Action; 15],
    axes: [f32; 6],
}

impl GamepadState {
    pub(crate) fn from_raw(raw: &ffi::GLFWgamepadstate) -> Self {
        let mut buttons = [Action::Release; 15];
        for (slot, &state) in buttons.iter_mut().zip(raw.buttons.iter()) {
            *slot = Action::from_raw(c_int::from(state));
        }
        Self {
            buttons,
            axes: raw.axes,
        }
    }

    /// State of a gamepad button.
    pub fn button(&self, button: GamepadButton) -> Action {
        self.buttons[button as usize]
    }

    /// Whether a gamepad button is held.
    pub fn is_pressed(&self, button: GamepadButton) -> bool {
        self.button(button) == Action::Press
    }

    /// Value of a gamepad axis. Sticks are `-1.0..=1.0`, triggers
    /// `-1.0` (released) to `1.0` (fully pressed).
    pub fn axis(&self, axis: GamepadAxis) -> f32 {
        self.axes[axis as usize]
    }
}

/// Add SDL_GameControllerDB-format mappings to the gamepad database.
pub fn update_gamepad_mappings(mappings: &str) -> Result<(), Error> {
    let mappings = input::to_c_string(mappings, "gamepad mappings")?;
    if unsafe { ffi::glfwUpdateGamepadMappings(mappings.as_ptr()) } == ffi::GLFW_TRUE {
        Ok(())
    } else {
        Err(error::take_last_error("glfwUpdateGamepadMappings failed"))
    }
}

/// Handler invoked from the event pump when a joystick is connected or
/// disconnected.
pub type ConnectionCallback = fn(Joystick, Connection);

static CONNECTION_CALLBACK: Mutex<Option<ConnectionCallback>> = Mutex::new(None);

unsafe extern "C" fn joystick_trampoline(jid: c_int, event: c_int) {
    let callback = CONNECTION_CALLBACK.lock().ok().and_then(|slot| *slot);
    if let Some(callback) = callback {
        callback(Joystick::from_raw(jid), Connection::from_raw(event));
    }
}

/// Register a handler for joystick connection changes, replacing any
/// previous one. Pass `None` to unregister.
pub fn set_connection_callback(callback: Option<ConnectionCallback>) {
    if let Ok(mut slot) = CONNECTION_CALLBACK.lock() {
        *slot = callback;
    }
    let native: ffi::GLFWjoystickfun = if callback.is_some() {
        Some(joystick_trampoline)
    } else {
        None
    };
    unsafe { ffi::glfwSetJoystickCallback(native) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joystick_slot_bounds() {
        assert_eq!(Joystick::from_index(0).map(Joystick::index), Some(0));
        assert_eq!(Joystick::from_index(15).map(Joystick::index), Some(15));
        assert!(Joystick::from_index(16).is_none());
        assert_eq!(Joystick::all().count(), 16);
    }

    #[test]
    fn test_hat_state_diagonals() {
        assert_eq!(
            HatState::from_bits_truncate(ffi::GLFW_HAT_RIGHT_UP as u8),
            HatState::RIGHT_UP
        );
        assert_eq!(
            HatState::from_bits_truncate(ffi::GLFW_HAT_CENTERED as u8),
            HatState::CENTERED
        );
        assert!(HatState::LEFT_DOWN.contains(HatState::LEFT));
        assert!(HatState::LEFT_DOWN.contains(HatState::DOWN));
    }

    #[test]
    fn test_gamepad_state_conversion() {
        let mut raw = ffi::GLFWgamepadstate {
            buttons: [0; 15],
            axes: [0.0; 6],
        };
        raw.buttons[ffi::GLFW_GAMEPAD_BUTTON_START as usize] = ffi::GLFW_PRESS as u8;
        raw.axes[ffi::GLFW_GAMEPAD_AXIS_LEFT_X as usize] = -0.5;
        raw.axes[ffi::GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER as usize] = 1.0;

        let state = GamepadState::from_raw(&raw);
        assert!(state.is_pressed(GamepadButton::Start));
        assert!(!state.is_pressed(GamepadButton::A));
        assert_eq!(state.axis(GamepadAxis::LeftX), -0.5);
        assert_eq!(state.axis(GamepadAxis::RightTrigger), 1.0);
    }

    #[test]
    fn test_gamepad_button_aliases() {
        assert_eq!(GamepadButton::CROSS, GamepadButton::A);
        assert_eq!(GamepadButton::TRIANGLE, GamepadButton::Y);
    }
}
