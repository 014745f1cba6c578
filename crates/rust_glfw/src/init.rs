//! Library lifecycle: initialization, termination, init hints and
//! version queries.

use std::ffi::CStr;

use libc::c_int;

use crate::error::{self, Error};
use crate::ffi;

/// Hints that must be set before [`init`] to take effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitHint {
    /// Expose joystick hats as buttons, for compatibility with older
    /// versions of the native library
    JoystickHatButtons(bool),
    /// Rendering backend to request when using ANGLE
    AnglePlatformType(AnglePlatform),
    /// Platform to initialize for
    Platform(Platform),
    /// macOS: change directory to the bundle's Resources on init
    CocoaChdirResources(bool),
    /// macOS: create the menu bar and dock icon on init
    CocoaMenubar(bool),
    /// X11: prefer `VK_KHR_xcb_surface` over `VK_KHR_xlib_surface`
    X11XcbVulkanSurface(bool),
    /// Wayland: libdecor decoration policy
    WaylandLibdecor(WaylandLibdecor),
}

/// ANGLE rendering backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum AnglePlatform {
    None,
    OpenGl,
    OpenGlEs,
    D3D9,
    D3D11,
    Vulkan,
    Metal,
}

/// Platform selection for initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Platform {
    Any,
    Win32,
    Cocoa,
    Wayland,
    X11,
    Null,
}

/// Wayland libdecor decoration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum WaylandLibdecor {
    Prefer,
    Disable,
}

fn bool_value(value: bool) -> c_int {
    if value {
        ffi::GLFW_TRUE
    } else {
        ffi::GLFW_FALSE
    }
}

/// Set an init hint. Only affects [`init`] calls made afterwards.
pub fn init_hint(hint: InitHint) {
    let (name, value) = match hint {
        InitHint::JoystickHatButtons(on) => (ffi::GLFW_JOYSTICK_HAT_BUTTONS, bool_value(on)),
        InitHint::AnglePlatformType(platform) => (
            ffi::GLFW_ANGLE_PLATFORM_TYPE,
            match platform {
                AnglePlatform::None => ffi::GLFW_ANGLE_PLATFORM_TYPE_NONE,
                AnglePlatform::OpenGl => ffi::GLFW_ANGLE_PLATFORM_TYPE_OPENGL,
                AnglePlatform::OpenGlEs => ffi::GLFW_ANGLE_PLATFORM_TYPE_OPENGLES,
                AnglePlatform::D3D9 => ffi::GLFW_ANGLE_PLATFORM_TYPE_D3D9,
                AnglePlatform::D3D11 => ffi::GLFW_ANGLE_PLATFORM_TYPE_D3D11,
                AnglePlatform::Vulkan => ffi::GLFW_ANGLE_PLATFORM_TYPE_VULKAN,
                AnglePlatform::Metal => ffi::GLFW_ANGLE_PLATFORM_TYPE_METAL,
            },
        ),
        InitHint::Platform(platform) => (
            ffi::GLFW_PLATFORM,
            match platform {
                Platform::Any => ffi::GLFW_ANY_PLATFORM,
                Platform::Win32 => ffi::GLFW_PLATFORM_WIN32,
                Platform::Cocoa => ffi::GLFW_PLATFORM_COCOA,
                Platform::Wayland => ffi::GLFW_PLATFORM_WAYLAND,
                Platform::X11 => ffi::GLFW_PLATFORM_X11,
                Platform::Null => ffi::GLFW_PLATFORM_NULL,
            },
        ),
        InitHint::CocoaChdirResources(on) => (ffi::GLFW_COCOA_CHDIR_RESOURCES, bool_value(on)),
        InitHint::CocoaMenubar(on) => (ffi::GLFW_COCOA_MENUBAR, bool_value(on)),
        InitHint::X11XcbVulkanSurface(on) => (ffi::GLFW_X11_XCB_VULKAN_SURFACE, bool_value(on)),
        InitHint::WaylandLibdecor(policy) => (
            ffi::GLFW_WAYLAND_LIBDECOR,
            match policy {
                WaylandLibdecor::Prefer => ffi::GLFW_WAYLAND_PREFER_LIBDECOR,
                WaylandLibdecor::Disable => ffi::GLFW_WAYLAND_DISABLE_LIBDECOR,
            },
        ),
    };

    unsafe { ffi::glfwInitHint(name, value) };
}

/// Initialize the native library.
///
/// Installs the crate's error callback first so that initialization
/// failures are recorded and logged. Must be called from the main
/// thread before any other operation; pair with [`terminate`].
pub fn init() -> Result<(), Error> {
    unsafe {
        ffi::glfwSetErrorCallback(Some(error::error_callback));
    }

    if unsafe { ffi::glfwInit() } == ffi::GLFW_TRUE {
        log::debug!("glfw {} initialized", version_string());
        Ok(())
    } else {
        Err(error::take_last_error("glfwInit failed"))
    }
}

/// Terminate the native library, destroying any remaining windows and
/// cursors. All handles are invalid afterwards.
pub fn terminate() {
    unsafe { ffi::glfwTerminate() };
}

/// Compile-time-independent version of the loaded native library as
/// `(major, minor, revision)`.
pub fn version() -> (i32, i32, i32) {
    let mut major = 0;
    let mut minor = 0;
    let mut rev = 0;
    unsafe { ffi::glfwGetVersion(&mut major, &mut minor, &mut rev) };
    (major, minor, rev)
}

/// Compile-time configuration string of the loaded native library.
pub fn version_string() -> String {
    let ptr = unsafe { ffi::glfwGetVersionString() };
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned()
}
