//! OpenGL and Vulkan context plumbing: current-context control, swap
//! interval, extension queries and proc address lookup.

use std::ffi::CStr;

use libc::c_void;

use crate::error::Error;
use crate::ffi;
use crate::input;

/// Detach the calling thread's current context.
///
/// The per-window counterpart is
/// [`crate::window::Window::make_context_current`].
pub fn detach_current_context() {
    unsafe { ffi::glfwMakeContextCurrent(std::ptr::null_mut()) };
}

/// Raw handle of the window whose context is current on the calling
/// thread, null when none is.
pub fn current_context() -> *mut ffi::GLFWwindow {
    unsafe { ffi::glfwGetCurrentContext() }
}

/// Number of screen updates to wait between buffer swaps on the
/// current context. 1 enables vsync, 0 disables it; negative values
/// need the relevant late-swap extensions.
pub fn swap_interval(interval: i32) {
    unsafe { ffi::glfwSwapInterval(interval) };
}

/// Whether the named API extension is supported by the current
/// context.
pub fn extension_supported(extension: &str) -> Result<bool, Error> {
    let extension = input::to_c_string(extension, "extension name")?;
    Ok(unsafe { ffi::glfwExtensionSupported(extension.as_ptr()) } == ffi::GLFW_TRUE)
}

/// Address of a client API function, for loading OpenGL past what the
/// platform links directly. Requires a current context.
pub fn get_proc_address(procname: &str) -> Result<ffi::GLFWglproc, Error> {
    let procname = input::to_c_string(procname, "proc name")?;
    Ok(unsafe { ffi::glfwGetProcAddress(procname.as_ptr()) })
}

/// Whether the Vulkan loader and at least a minimally functional ICD
/// were found.
pub fn vulkan_supported() -> bool {
    (unsafe { ffi::glfwVulkanSupported() }) == ffi::GLFW_TRUE
}

/// Instance extensions required to create Vulkan surfaces for
/// windows, `None` when Vulkan is unavailable or surface creation is
/// unsupported.
pub fn required_instance_extensions() -> Option<Vec<String>> {
    let mut count: u32 = 0;
    let ptr = unsafe { ffi::glfwGetRequiredInstanceExtensions(&mut count) };
    if ptr.is_null() || count == 0 {
        return None;
    }

    let mut extensions = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        let name = unsafe { *ptr.add(i) };
        if name.is_null() {
            continue;
        }
        extensions.push(
            unsafe { CStr::from_ptr(name) }
                .to_string_lossy()
                .into_owned(),
        );
    }
    Some(extensions)
}

/// Address of a Vulkan API function for the given `VkInstance`
/// (nullable for the loader/preinstance functions).
pub fn get_instance_proc_address(
    instance: *mut c_void,
    procname: &str,
) -> Result<ffi::GLFWvkproc, Error> {
    let procname = input::to_c_string(procname, "proc name")?;
    Ok(unsafe { ffi::glfwGetInstanceProcAddress(instance, procname.as_ptr()) })
}
