//! Raw declarations for the GLFW 3.4 C ABI.
//!
//! Everything in this module mirrors `glfw3.h` byte for byte: opaque
//! handle types, `#[repr(C)]` value structs, callback typedefs, the
//! constant table and the extern function table. Nothing here
//! allocates or interprets; the safe layers in the rest of the crate
//! own all marshaling.
//!
//! Linking is handled by the build script (`glfw` on unix, `glfw3` on
//! Windows, overridable through `GLFW_LIB_DIR` / `GLFW_STATIC`).

#![allow(non_camel_case_types, non_snake_case, missing_docs)]

pub use libc::{
    c_char, c_double, c_float, c_int, c_uchar, c_uint, c_ushort, c_void,
};

mod constants;
pub use constants::*;

/// Opaque window handle, only ever used behind a pointer.
pub enum GLFWwindow {}
/// Opaque monitor handle, only ever used behind a pointer.
pub enum GLFWmonitor {}
/// Opaque cursor handle, only ever used behind a pointer.
pub enum GLFWcursor {}

pub type GLFWglproc = Option<unsafe extern "C" fn()>;
pub type GLFWvkproc = Option<unsafe extern "C" fn()>;

pub type GLFWerrorfun =
    Option<unsafe extern "C" fn(error_code: c_int, description: *const c_char)>;
pub type GLFWwindowposfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xpos: c_int, ypos: c_int)>;
pub type GLFWwindowsizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, width: c_int, height: c_int)>;
pub type GLFWwindowclosefun = Option<unsafe extern "C" fn(window: *mut GLFWwindow)>;
pub type GLFWwindowrefreshfun = Option<unsafe extern "C" fn(window: *mut GLFWwindow)>;
pub type GLFWwindowfocusfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, focused: c_int)>;
pub type GLFWwindowiconifyfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, iconified: c_int)>;
pub type GLFWwindowmaximizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, maximized: c_int)>;
pub type GLFWframebuffersizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, width: c_int, height: c_int)>;
pub type GLFWwindowcontentscalefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xscale: c_float, yscale: c_float)>;
pub type GLFWmousebuttonfun = Option<
    unsafe extern "C" fn(window: *mut GLFWwindow, button: c_int, action: c_int, mods: c_int),
>;
pub type GLFWcursorposfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xpos: c_double, ypos: c_double)>;
pub type GLFWcursorenterfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, entered: c_int)>;
pub type GLFWscrollfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xoffset: c_double, yoffset: c_double)>;
pub type GLFWkeyfun = Option<
    unsafe extern "C" fn(
        window: *mut GLFWwindow,
        key: c_int,
        scancode: c_int,
        action: c_int,
        mods: c_int,
    ),
>;
pub type GLFWcharfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, codepoint: c_uint)>;
pub type GLFWcharmodsfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, codepoint: c_uint, mods: c_int)>;
pub type GLFWdropfun = Option<
    unsafe extern "C" fn(window: *mut GLFWwindow, path_count: c_int, paths: *const *const c_char),
>;
pub type GLFWmonitorfun =
    Option<unsafe extern "C" fn(monitor: *mut GLFWmonitor, event: c_int)>;
pub type GLFWjoystickfun = Option<unsafe extern "C" fn(jid: c_int, event: c_int)>;

/// Video mode of a monitor, as laid out by the native library.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GLFWvidmode {
    pub width: c_int,
    pub height: c_int,
    pub redBits: c_int,
    pub greenBits: c_int,
    pub blueBits: c_int,
    pub refreshRate: c_int,
}

/// Gamma ramp of a monitor. The three channel arrays are owned by the
/// native library on read and by the caller on write; `size` counts
/// the elements of each array.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWgammaramp {
    pub red: *mut c_ushort,
    pub green: *mut c_ushort,
    pub blue: *mut c_ushort,
    pub size: c_uint,
}

/// Image data, 8 bits per channel RGBA, rows packed top to bottom.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWimage {
    pub width: c_int,
    pub height: c_int,
    pub pixels: *mut c_uchar,
}

/// Input state of a gamepad.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct GLFWgamepadstate {
    pub buttons: [c_uchar; 15],
    pub axes: [c_float; 6],
}

extern "C" {
    pub fn glfwInit() -> c_int;
    pub fn glfwTerminate();
    pub fn glfwInitHint(hint: c_int, value: c_int);
    pub fn glfwGetVersion(major: *mut c_int, minor: *mut c_int, rev: *mut c_int);
    pub fn glfwGetVersionString() -> *const c_char;
    pub fn glfwGetError(description: *mut *const c_char) -> c_int;
    pub fn glfwSetErrorCallback(callback: GLFWerrorfun) -> GLFWerrorfun;

    pub fn glfwGetMonitors(count: *mut c_int) -> *mut *mut GLFWmonitor;
    pub fn glfwGetPrimaryMonitor() -> *mut GLFWmonitor;
    pub fn glfwGetMonitorPos(monitor: *mut GLFWmonitor, xpos: *mut c_int, ypos: *mut c_int);
    pub fn glfwGetMonitorWorkarea(
        monitor: *mut GLFWmonitor,
        xpos: *mut c_int,
        ypos: *mut c_int,
        width: *mut c_int,
        height: *mut c_int,
    );
    pub fn glfwGetMonitorPhysicalSize(
        monitor: *mut GLFWmonitor,
        widthMM: *mut c_int,
        heightMM: *mut c_int,
    );
    pub fn glfwGetMonitorContentScale(
        monitor: *mut GLFWmonitor,
        xscale: *mut c_float,
        yscale: *mut c_float,
    );
    pub fn glfwGetMonitorName(monitor: *mut GLFWmonitor) -> *const c_char;
    pub fn glfwSetMonitorUserPointer(monitor: *mut GLFWmonitor, pointer: *mut c_void);
    pub fn glfwGetMonitorUserPointer(monitor: *mut GLFWmonitor) -> *mut c_void;
    pub fn glfwSetMonitorCallback(callback: GLFWmonitorfun) -> GLFWmonitorfun;
    pub fn glfwGetVideoModes(monitor: *mut GLFWmonitor, count: *mut c_int) -> *const GLFWvidmode;
    pub fn glfwGetVideoMode(monitor: *mut GLFWmonitor) -> *const GLFWvidmode;
    pub fn glfwSetGamma(monitor: *mut GLFWmonitor, gamma: c_float);
    pub fn glfwGetGammaRamp(monitor: *mut GLFWmonitor) -> *const GLFWgammaramp;
    pub fn glfwSetGammaRamp(monitor: *mut GLFWmonitor, ramp: *const GLFWgammaramp);

    pub fn glfwDefaultWindowHints();
    pub fn glfwWindowHint(hint: c_int, value: c_int);
    pub fn glfwWindowHintString(hint: c_int, value: *const c_char);
    pub fn glfwCreateWindow(
        width: c_int,
        height: c_int,
        title: *const c_char,
        monitor: *mut GLFWmonitor,
        share: *mut GLFWwindow,
    ) -> *mut GLFWwindow;
    pub fn glfwDestroyWindow(window: *mut GLFWwindow);
    pub fn glfwWindowShouldClose(window: *mut GLFWwindow) -> c_int;
    pub fn glfwSetWindowShouldClose(window: *mut GLFWwindow, value: c_int);
    pub fn glfwSetWindowTitle(window: *mut GLFWwindow, title: *const c_char);
    pub fn glfwSetWindowIcon(window: *mut GLFWwindow, count: c_int, images: *const GLFWimage);
    pub fn glfwGetWindowPos(window: *mut GLFWwindow, xpos: *mut c_int, ypos: *mut c_int);
    pub fn glfwSetWindowPos(window: *mut GLFWwindow, xpos: c_int, ypos: c_int);
    pub fn glfwGetWindowSize(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int);
    pub fn glfwSetWindowSizeLimits(
        window: *mut GLFWwindow,
        minwidth: c_int,
        minheight: c_int,
        maxwidth: c_int,
        maxheight: c_int,
    );
    pub fn glfwSetWindowAspectRatio(window: *mut GLFWwindow, numer: c_int, denom: c_int);
    pub fn glfwSetWindowSize(window: *mut GLFWwindow, width: c_int, height: c_int);
    pub fn glfwGetFramebufferSize(window: *mut GLFWwindow, width: *mut c_int, height: *mut c_int);
    pub fn glfwGetWindowFrameSize(
        window: *mut GLFWwindow,
        left: *mut c_int,
        top: *mut c_int,
        right: *mut c_int,
        bottom: *mut c_int,
    );
    pub fn glfwGetWindowContentScale(
        window: *mut GLFWwindow,
        xscale: *mut c_float,
        yscale: *mut c_float,
    );
    pub fn glfwGetWindowOpacity(window: *mut GLFWwindow) -> c_float;
    pub fn glfwSetWindowOpacity(window: *mut GLFWwindow, opacity: c_float);
    pub fn glfwIconifyWindow(window: *mut GLFWwindow);
    pub fn glfwRestoreWindow(window: *mut GLFWwindow);
    pub fn glfwMaximizeWindow(window: *mut GLFWwindow);
    pub fn glfwShowWindow(window: *mut GLFWwindow);
    pub fn glfwHideWindow(window: *mut GLFWwindow);
    pub fn glfwFocusWindow(window: *mut GLFWwindow);
    pub fn glfwRequestWindowAttention(window: *mut GLFWwindow);
    pub fn glfwGetWindowMonitor(window: *mut GLFWwindow) -> *mut GLFWmonitor;
    pub fn glfwSetWindowMonitor(
        window: *mut GLFWwindow,
        monitor: *mut GLFWmonitor,
        xpos: c_int,
        ypos: c_int,
        width: c_int,
        height: c_int,
        refreshRate: c_int,
    );
    pub fn glfwGetWindowAttrib(window: *mut GLFWwindow, attrib: c_int) -> c_int;
    pub fn glfwSetWindowAttrib(window: *mut GLFWwindow, attrib: c_int, value: c_int);
    pub fn glfwSetWindowUserPointer(window: *mut GLFWwindow, pointer: *mut c_void);
    pub fn glfwGetWindowUserPointer(window: *mut GLFWwindow) -> *mut c_void;
    pub fn glfwSetWindowPosCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowposfun,
    ) -> GLFWwindowposfun;
    pub fn glfwSetWindowSizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowsizefun,
    ) -> GLFWwindowsizefun;
    pub fn glfwSetWindowCloseCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowclosefun,
    ) -> GLFWwindowclosefun;
    pub fn glfwSetWindowRefreshCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowrefreshfun,
    ) -> GLFWwindowrefreshfun;
    pub fn glfwSetWindowFocusCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowfocusfun,
    ) -> GLFWwindowfocusfun;
    pub fn glfwSetWindowIconifyCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowiconifyfun,
    ) -> GLFWwindowiconifyfun;
    pub fn glfwSetWindowMaximizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowmaximizefun,
    ) -> GLFWwindowmaximizefun;
    pub fn glfwSetFramebufferSizeCallback(
        window: *mut GLFWwindow,
        callback: GLFWframebuffersizefun,
    ) -> GLFWframebuffersizefun;
    pub fn glfwSetWindowContentScaleCallback(
        window: *mut GLFWwindow,
        callback: GLFWwindowcontentscalefun,
    ) -> GLFWwindowcontentscalefun;

    pub fn glfwPollEvents();
    pub fn glfwWaitEvents();
    pub fn glfwWaitEventsTimeout(timeout: c_double);
    pub fn glfwPostEmptyEvent();

    pub fn glfwGetInputMode(window: *mut GLFWwindow, mode: c_int) -> c_int;
    pub fn glfwSetInputMode(window: *mut GLFWwindow, mode: c_int, value: c_int);
    pub fn glfwRawMouseMotionSupported() -> c_int;
    pub fn glfwGetKeyName(key: c_int, scancode: c_int) -> *const c_char;
    pub fn glfwGetKeyScancode(key: c_int) -> c_int;
    pub fn glfwGetKey(window: *mut GLFWwindow, key: c_int) -> c_int;
    pub fn glfwGetMouseButton(window: *mut GLFWwindow, button: c_int) -> c_int;
    pub fn glfwGetCursorPos(window: *mut GLFWwindow, xpos: *mut c_double, ypos: *mut c_double);
    pub fn glfwSetCursorPos(window: *mut GLFWwindow, xpos: c_double, ypos: c_double);
    pub fn glfwCreateCursor(image: *const GLFWimage, xhot: c_int, yhot: c_int) -> *mut GLFWcursor;
    pub fn glfwCreateStandardCursor(shape: c_int) -> *mut GLFWcursor;
    pub fn glfwDestroyCursor(cursor: *mut GLFWcursor);
    pub fn glfwSetCursor(window: *mut GLFWwindow, cursor: *mut GLFWcursor);
    pub fn glfwSetKeyCallback(window: *mut GLFWwindow, callback: GLFWkeyfun) -> GLFWkeyfun;
    pub fn glfwSetCharCallback(window: *mut GLFWwindow, callback: GLFWcharfun) -> GLFWcharfun;
    pub fn glfwSetCharModsCallback(
        window: *mut GLFWwindow,
        callback: GLFWcharmodsfun,
    ) -> GLFWcharmodsfun;
    pub fn glfwSetMouseButtonCallback(
        window: *mut GLFWwindow,
        callback: GLFWmousebuttonfun,
    ) -> GLFWmousebuttonfun;
    pub fn glfwSetCursorPosCallback(
        window: *mut GLFWwindow,
        callback: GLFWcursorposfun,
    ) -> GLFWcursorposfun;
    pub fn glfwSetCursorEnterCallback(
        window: *mut GLFWwindow,
        callback: GLFWcursorenterfun,
    ) -> GLFWcursorenterfun;
    pub fn glfwSetScrollCallback(
        window: *mut GLFWwindow,
        callback: GLFWscrollfun,
    ) -> GLFWscrollfun;
    pub fn glfwSetDropCallback(window: *mut GLFWwindow, callback: GLFWdropfun) -> GLFWdropfun;

    pub fn glfwJoystickPresent(jid: c_int) -> c_int;
    pub fn glfwGetJoystickAxes(jid: c_int, count: *mut c_int) -> *const c_float;
    pub fn glfwGetJoystickButtons(jid: c_int, count: *mut c_int) -> *const c_uchar;
    pub fn glfwGetJoystickHats(jid: c_int, count: *mut c_int) -> *const c_uchar;
    pub fn glfwGetJoystickName(jid: c_int) -> *const c_char;
    pub fn glfwGetJoystickGUID(jid: c_int) -> *const c_char;
    pub fn glfwSetJoystickUserPointer(jid: c_int, pointer: *mut c_void);
    pub fn glfwGetJoystickUserPointer(jid: c_int) -> *mut c_void;
    pub fn glfwJoystickIsGamepad(jid: c_int) -> c_int;
    pub fn glfwSetJoystickCallback(callback: GLFWjoystickfun) -> GLFWjoystickfun;
    pub fn glfwUpdateGamepadMappings(string: *const c_char) -> c_int;
    pub fn glfwGetGamepadName(jid: c_int) -> *const c_char;
    pub fn glfwGetGamepadState(jid: c_int, state: *mut GLFWgamepadstate) -> c_int;

    pub fn glfwSetClipboardString(window: *mut GLFWwindow, string: *const c_char);
    pub fn glfwGetClipboardString(window: *mut GLFWwindow) -> *const c_char;

    pub fn glfwGetTime() -> c_double;
    pub fn glfwSetTime(time: c_double);
    pub fn glfwGetTimerValue() -> u64;
    pub fn glfwGetTimerFrequency() -> u64;

    pub fn glfwMakeContextCurrent(window: *mut GLFWwindow);
    pub fn glfwGetCurrentContext() -> *mut GLFWwindow;
    pub fn glfwSwapBuffers(window: *mut GLFWwindow);
    pub fn glfwSwapInterval(interval: c_int);
    pub fn glfwExtensionSupported(extension: *const c_char) -> c_int;
    pub fn glfwGetProcAddress(procname: *const c_char) -> GLFWglproc;
    pub fn glfwVulkanSupported() -> c_int;
    pub fn glfwGetRequiredInstanceExtensions(count: *mut u32) -> *const *const c_char;
    pub fn glfwGetInstanceProcAddress(
        instance: *mut c_void,
        procname: *const c_char,
    ) -> GLFWvkproc;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_vidmode_layout_matches_native() {
        // Six consecutive ints, no padding
        assert_eq!(mem::size_of::<GLFWvidmode>(), 6 * mem::size_of::<c_int>());
    }

    #[test]
    fn test_gamepadstate_layout_matches_native() {
        // 15 bytes of buttons padded to float alignment, then 6 floats
        assert_eq!(mem::size_of::<GLFWgamepadstate>(), 16 + 6 * 4);
        assert_eq!(mem::align_of::<GLFWgamepadstate>(), mem::align_of::<c_float>());
    }

    #[test]
    fn test_cursor_aliases() {
        assert_eq!(GLFW_HRESIZE_CURSOR, GLFW_RESIZE_EW_CURSOR);
        assert_eq!(GLFW_VRESIZE_CURSOR, GLFW_RESIZE_NS_CURSOR);
        assert_eq!(GLFW_HAND_CURSOR, GLFW_POINTING_HAND_CURSOR);
    }
}
