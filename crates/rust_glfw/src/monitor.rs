//! Monitor enumeration, video mode queries and gamma control.

use std::ffi::CStr;
use std::sync::Mutex;

use libc::{c_int, c_uint, c_void};

use crate::error::{Error, ErrorKind};
use crate::ffi;

/// A connected monitor. Copyable opaque handle; the native library
/// owns the monitor for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monitor {
    ptr: *mut ffi::GLFWmonitor,
}

impl Monitor {
    pub(crate) fn from_raw(ptr: *mut ffi::GLFWmonitor) -> Self {
        Self { ptr }
    }

    /// The raw native handle.
    pub fn as_ptr(self) -> *mut ffi::GLFWmonitor {
        self.ptr
    }

    /// Position of the monitor's viewport on the virtual screen.
    pub fn position(self) -> (i32, i32) {
        let mut x = 0;
        let mut y = 0;
        unsafe { ffi::glfwGetMonitorPos(self.ptr, &mut x, &mut y) };
        (x, y)
    }

    /// Work area not occupied by global task bars or menu bars, as
    /// `(x, y, width, height)` in screen coordinates.
    pub fn workarea(self) -> (i32, i32, i32, i32) {
        let mut x = 0;
        let mut y = 0;
        let mut width = 0;
        let mut height = 0;
        unsafe { ffi::glfwGetMonitorWorkarea(self.ptr, &mut x, &mut y, &mut width, &mut height) };
        (x, y, width, height)
    }

    /// Physical size of the display in millimetres.
    pub fn physical_size(self) -> (i32, i32) {
        let mut width = 0;
        let mut height = 0;
        unsafe { ffi::glfwGetMonitorPhysicalSize(self.ptr, &mut width, &mut height) };
        (width, height)
    }

    /// Ratio between current DPI and the platform's default DPI.
    pub fn content_scale(self) -> (f32, f32) {
        let mut xscale = 0.0;
        let mut yscale = 0.0;
        unsafe { ffi::glfwGetMonitorContentScale(self.ptr, &mut xscale, &mut yscale) };
        (xscale, yscale)
    }

    /// Human-readable monitor name, if the platform provides one.
    pub fn name(self) -> Option<String> {
        let ptr = unsafe { ffi::glfwGetMonitorName(self.ptr) };
        if ptr.is_null() {
            return None;
        }
        Some(
            unsafe { CStr::from_ptr(ptr) }
                .to_string_lossy()
                .into_owned(),
        )
    }

    /// Attach an arbitrary pointer to the monitor.
    pub fn set_user_pointer(self, pointer: *mut c_void) {
        unsafe { ffi::glfwSetMonitorUserPointer(self.ptr, pointer) };
    }

    /// The pointer previously attached with [`Self::set_user_pointer`].
    pub fn user_pointer(self) -> *mut c_void {
        unsafe { ffi::glfwGetMonitorUserPointer(self.ptr) }
    }

    /// All video modes supported by the monitor, sorted by the native
    /// library.
    pub fn video_modes(self) -> Vec<VideoMode> {
        let mut count = 0;
        let ptr = unsafe { ffi::glfwGetVideoModes(self.ptr, &mut count) };
        if ptr.is_null() || count <= 0 {
            return Vec::new();
        }

        let raw = unsafe { std::slice::from_raw_parts(ptr, count as usize) };
        raw.iter().map(VideoMode::from_raw).collect()
    }

    /// The monitor's current video mode.
    pub fn video_mode(self) -> Option<VideoMode> {
        let ptr = unsafe { ffi::glfwGetVideoMode(self.ptr) };
        if ptr.is_null() {
            return None;
        }
        Some(VideoMode::from_raw(unsafe { &*ptr }))
    }

    /// Generate and set a gamma ramp from a single exponent.
    pub fn set_gamma(self, gamma: f32) {
        unsafe { ffi::glfwSetGamma(self.ptr, gamma) };
    }

    /// The monitor's current gamma ramp, copied into owned storage.
    pub fn gamma_ramp(self) -> Option<GammaRamp> {
        let ptr = unsafe { ffi::glfwGetGammaRamp(self.ptr) };
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { GammaRamp::from_raw(&*ptr) })
    }

    /// Set the monitor's gamma ramp. All three channels must have the
    /// same length.
    pub fn set_gamma_ramp(self, ramp: &GammaRamp) -> Result<(), Error> {
        let raw = ramp.as_raw()?;
        unsafe { ffi::glfwSetGammaRamp(self.ptr, &raw) };
        Ok(())
    }
}

/// Every currently connected monitor, primary first.
pub fn monitors() -> Vec<Monitor> {
    let mut count = 0;
    let ptr = unsafe { ffi::glfwGetMonitors(&mut count) };
    if ptr.is_null() || count <= 0 {
        return Vec::new();
    }

    (0..count as usize)
        .map(|i| Monitor::from_raw(unsafe { *ptr.add(i) }))
        .collect()
}

/// The user's primary monitor.
pub fn primary() -> Option<Monitor> {
    let ptr = unsafe { ffi::glfwGetPrimaryMonitor() };
    if ptr.is_null() {
        return None;
    }
    Some(Monitor::from_raw(ptr))
}

/// A single video mode of a monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Width in screen coordinates
    pub width: i32,
    /// Height in screen coordinates
    pub height: i32,
    /// Bit depth of the red channel
    pub red_bits: i32,
    /// Bit depth of the green channel
    pub green_bits: i32,
    /// Bit depth of the blue channel
    pub blue_bits: i32,
    /// Refresh rate in Hz
    pub refresh_rate: i32,
}

impl VideoMode {
    pub(crate) fn from_raw(raw: &ffi::GLFWvidmode) -> Self {
        Self {
            width: raw.width,
            height: raw.height,
            red_bits: raw.redBits,
            green_bits: raw.greenBits,
            blue_bits: raw.blueBits,
            refresh_rate: raw.refreshRate,
        }
    }
}

/// An owned copy of a monitor gamma ramp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GammaRamp {
    /// Response of the red channel
    pub red: Vec<u16>,
    /// Response of the green channel
    pub green: Vec<u16>,
    /// Response of the blue channel
    pub blue: Vec<u16>,
}

impl GammaRamp {
    /// Copy a native gamma ramp into owned storage.
    ///
    /// # Safety
    /// The channel pointers must each reference `raw.size` elements.
    pub(crate) unsafe fn from_raw(raw: &ffi::GLFWgammaramp) -> Self {
        unsafe fn copy_channel(ptr: *mut u16, size: usize) -> Vec<u16> {
            if ptr.is_null() || size == 0 {
                Vec::new()
            } else {
                std::slice::from_raw_parts(ptr, size).to_vec()
            }
        }

        let size = raw.size as usize;
        Self {
            red: copy_channel(raw.red, size),
            green: copy_channel(raw.green, size),
            blue: copy_channel(raw.blue, size),
        }
    }

    /// Borrow as the native struct for a set call. The native library
    /// copies the arrays before returning, so the borrow only needs to
    /// survive the call.
    pub(crate) fn as_raw(&self) -> Result<ffi::GLFWgammaramp, Error> {
        if self.red.len() != self.green.len() || self.green.len() != self.blue.len() {
            return Err(Error::new(
                ErrorKind::InvalidValue,
                "gamma ramp channels must have equal lengths",
            ));
        }

        Ok(ffi::GLFWgammaramp {
            red: self.red.as_ptr().cast_mut(),
            green: self.green.as_ptr().cast_mut(),
            blue: self.blue.as_ptr().cast_mut(),
            size: self.red.len() as c_uint,
        })
    }
}

/// Monitor configuration change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// The device was connected
    Connected,
    /// The device was disconnected
    Disconnected,
}

impl Connection {
    pub(crate) fn from_raw(event: c_int) -> Self {
        if event == ffi::GLFW_CONNECTED {
            Self::Connected
        } else {
            Self::Disconnected
        }
    }
}

/// Handler invoked from the event pump when a monitor is connected or
/// disconnected.
pub type ConnectionCallback = fn(Monitor, Connection);

static CONNECTION_CALLBACK: Mutex<Option<ConnectionCallback>> = Mutex::new(None);

unsafe extern "C" fn monitor_trampoline(monitor: *mut ffi::GLFWmonitor, event: c_int) {
    let callback = CONNECTION_CALLBACK.lock().ok().and_then(|slot| *slot);
    if let Some(callback) = callback {
        callback(Monitor::from_raw(monitor), Connection::from_raw(event));
    }
}

/// Register a handler for monitor connection changes, replacing any
/// previous one. Pass `None` to unregister.
pub fn set_connection_callback(callback: Option<ConnectionCallback>) {
    if let Ok(mut slot) = CONNECTION_CALLBACK.lock() {
        *slot = callback;
    }
    let native: ffi::GLFWmonitorfun = if callback.is_some() {
        Some(monitor_trampoline)
    } else {
        None
    };
    unsafe { ffi::glfwSetMonitorCallback(native) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_mode_from_raw() {
        let raw = ffi::GLFWvidmode {
            width: 2560,
            height: 1440,
            redBits: 8,
            greenBits: 8,
            blueBits: 8,
            refreshRate: 144,
        };
        let mode = VideoMode::from_raw(&raw);
        assert_eq!(mode.width, 2560);
        assert_eq!(mode.height, 1440);
        assert_eq!(mode.refresh_rate, 144);
    }

    #[test]
    fn test_gamma_ramp_round_trip() {
        let ramp = GammaRamp {
            red: vec![0, 32768, 65535],
            green: vec![1, 2, 3],
            blue: vec![65535, 32768, 0],
        };

        let raw = ramp.as_raw().unwrap();
        assert_eq!(raw.size, 3);

        let copied = unsafe { GammaRamp::from_raw(&raw) };
        assert_eq!(copied, ramp);
    }

    #[test]
    fn test_gamma_ramp_rejects_uneven_channels() {
        let ramp = GammaRamp {
            red: vec![0, 1],
            green: vec![0],
            blue: vec![0, 1],
        };
        let error = ramp.as_raw().unwrap_err();
        assert_eq!(error.kind, ErrorKind::InvalidValue);
    }

    #[test]
    fn test_connection_from_raw() {
        assert_eq!(Connection::from_raw(ffi::GLFW_CONNECTED), Connection::Connected);
        assert_eq!(
            Connection::from_raw(ffi::GLFW_DISCONNECTED),
            Connection::Disconnected
        );
    }
}
