//! Error surfacing for the binding layer.
//!
//! GLFW reports failures through integer error codes plus a
//! human-readable description, delivered either by `glfwGetError` or
//! through the process-wide error callback. The binding maps the codes
//! onto [`ErrorKind`] and keeps the most recent callback-reported
//! error in a crate-global slot so that constructors returning null
//! handles can surface the cause.

use std::ffi::CStr;
use std::sync::Mutex;

use libc::{c_char, c_int};
use thiserror::Error;

use crate::ffi;

/// Classification of a native error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// GLFW has not been initialized
    NotInitialized,
    /// No OpenGL/OpenGL ES context is current on this thread
    NoCurrentContext,
    /// An invalid enum value was passed to a native function
    InvalidEnum,
    /// An invalid value was passed to a native function
    InvalidValue,
    /// A memory allocation failed inside the native library
    OutOfMemory,
    /// The requested client API is unavailable
    ApiUnavailable,
    /// The requested client API version is unavailable
    VersionUnavailable,
    /// A platform-specific error occurred
    PlatformError,
    /// The requested pixel format is unavailable
    FormatUnavailable,
    /// The window has no OpenGL/OpenGL ES context
    NoWindowContext,
    /// The requested cursor shape is unavailable
    CursorUnavailable,
    /// The requested feature is unavailable on this platform
    FeatureUnavailable,
    /// The requested feature is not yet implemented for this platform
    FeatureUnimplemented,
    /// The requested platform is unavailable
    PlatformUnavailable,
    /// An error code this binding does not recognize
    Unrecognized(i32),
}

impl ErrorKind {
    /// Map a raw native error code onto its classification.
    pub fn from_raw(code: c_int) -> Self {
        match code {
            ffi::GLFW_NOT_INITIALIZED => Self::NotInitialized,
            ffi::GLFW_NO_CURRENT_CONTEXT => Self::NoCurrentContext,
            ffi::GLFW_INVALID_ENUM => Self::InvalidEnum,
            ffi::GLFW_INVALID_VALUE => Self::InvalidValue,
            ffi::GLFW_OUT_OF_MEMORY => Self::OutOfMemory,
            ffi::GLFW_API_UNAVAILABLE => Self::ApiUnavailable,
            ffi::GLFW_VERSION_UNAVAILABLE => Self::VersionUnavailable,
            ffi::GLFW_PLATFORM_ERROR => Self::PlatformError,
            ffi::GLFW_FORMAT_UNAVAILABLE => Self::FormatUnavailable,
            ffi::GLFW_NO_WINDOW_CONTEXT => Self::NoWindowContext,
            ffi::GLFW_CURSOR_UNAVAILABLE => Self::CursorUnavailable,
            ffi::GLFW_FEATURE_UNAVAILABLE => Self::FeatureUnavailable,
            ffi::GLFW_FEATURE_UNIMPLEMENTED => Self::FeatureUnimplemented,
            ffi::GLFW_PLATFORM_UNAVAILABLE => Self::PlatformUnavailable,
            other => Self::Unrecognized(other),
        }
    }

    /// The raw native error code for this classification.
    pub fn code(self) -> i32 {
        match self {
            Self::NotInitialized => ffi::GLFW_NOT_INITIALIZED,
            Self::NoCurrentContext => ffi::GLFW_NO_CURRENT_CONTEXT,
            Self::InvalidEnum => ffi::GLFW_INVALID_ENUM,
            Self::InvalidValue => ffi::GLFW_INVALID_VALUE,
            Self::OutOfMemory => ffi::GLFW_OUT_OF_MEMORY,
            Self::ApiUnavailable => ffi::GLFW_API_UNAVAILABLE,
            Self::VersionUnavailable => ffi::GLFW_VERSION_UNAVAILABLE,
            Self::PlatformError => ffi::GLFW_PLATFORM_ERROR,
            Self::FormatUnavailable => ffi::GLFW_FORMAT_UNAVAILABLE,
            Self::NoWindowContext => ffi::GLFW_NO_WINDOW_CONTEXT,
            Self::CursorUnavailable => ffi::GLFW_CURSOR_UNAVAILABLE,
            Self::FeatureUnavailable => ffi::GLFW_FEATURE_UNAVAILABLE,
            Self::FeatureUnimplemented => ffi::GLFW_FEATURE_UNIMPLEMENTED,
            Self::PlatformUnavailable => ffi::GLFW_PLATFORM_UNAVAILABLE,
            Self::Unrecognized(code) => code,
        }
    }
}

/// A native library error, carrying the code classification and the
/// description string reported alongside it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{description} ({kind:?})")]
pub struct Error {
    /// Classification of the native error code
    pub kind: ErrorKind,
    /// Description reported by the native library
    pub description: String,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Error for a Rust string that cannot cross the boundary because
    /// it contains an interior NUL byte.
    pub(crate) fn invalid_string(what: &str) -> Self {
        Self::new(
            ErrorKind::InvalidValue,
            format!("{what} contains an interior NUL byte"),
        )
    }
}

// Most recent error delivered through the error callback. Single slot,
// matching the native library's own most-recent-error semantics.
static LAST_ERROR: Mutex<Option<Error>> = Mutex::new(None);

/// Error callback installed by [`crate::init`]. Records the error and
/// reports it through the `log` facade.
pub(crate) unsafe extern "C" fn error_callback(code: c_int, description: *const c_char) {
    let description = if description.is_null() {
        String::new()
    } else {
        CStr::from_ptr(description).to_string_lossy().into_owned()
    };

    let error = Error::new(ErrorKind::from_raw(code), description);
    log::error!("glfw: {error}");

    if let Ok(mut slot) = LAST_ERROR.lock() {
        *slot = Some(error);
    }
}

/// Take the most recent error recorded by the error callback, if any.
pub fn last_error() -> Option<Error> {
    LAST_ERROR.lock().ok().and_then(|mut slot| slot.take())
}

/// Read and clear the calling thread's error state.
///
/// Wraps `glfwGetError`; the description is copied out before the
/// native library invalidates it.
pub fn get_error() -> Option<Error> {
    let mut description: *const c_char = std::ptr::null();
    let code = unsafe { ffi::glfwGetError(&mut description) };

    if code == ffi::GLFW_NO_ERROR {
        return None;
    }

    let description = if description.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(description) }
            .to_string_lossy()
            .into_owned()
    };

    Some(Error::new(ErrorKind::from_raw(code), description))
}

/// Best available explanation for a native call that just failed.
///
/// Prefers the callback-recorded error, falls back to the thread error
/// state, and as a last resort synthesizes one from `fallback`.
pub(crate) fn take_last_error(fallback: &str) -> Error {
    last_error()
        .or_else(get_error)
        .unwrap_or_else(|| Error::new(ErrorKind::PlatformError, fallback.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_round_trip() {
        let codes = [
            ffi::GLFW_NOT_INITIALIZED,
            ffi::GLFW_NO_CURRENT_CONTEXT,
            ffi::GLFW_INVALID_ENUM,
            ffi::GLFW_INVALID_VALUE,
            ffi::GLFW_OUT_OF_MEMORY,
            ffi::GLFW_API_UNAVAILABLE,
            ffi::GLFW_VERSION_UNAVAILABLE,
            ffi::GLFW_PLATFORM_ERROR,
            ffi::GLFW_FORMAT_UNAVAILABLE,
            ffi::GLFW_NO_WINDOW_CONTEXT,
            ffi::GLFW_CURSOR_UNAVAILABLE,
            ffi::GLFW_FEATURE_UNAVAILABLE,
            ffi::GLFW_FEATURE_UNIMPLEMENTED,
            ffi::GLFW_PLATFORM_UNAVAILABLE,
        ];

        for code in codes {
            assert_eq!(ErrorKind::from_raw(code).code(), code);
        }
    }

    #[test]
    fn test_unrecognized_code_preserved() {
        let kind = ErrorKind::from_raw(0x0001_00FF);
        assert_eq!(kind, ErrorKind::Unrecognized(0x0001_00FF));
        assert_eq!(kind.code(), 0x0001_00FF);
    }

    #[test]
    fn test_error_display_includes_description() {
        let error = Error::new(ErrorKind::OutOfMemory, "allocation failed");
        assert_eq!(format!("{error}"), "allocation failed (OutOfMemory)");
    }
}
