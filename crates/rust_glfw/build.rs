// build.rs
// Build script for locating and linking the system GLFW library

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=GLFW_LIB_DIR");
    println!("cargo:rerun-if-env-changed=GLFW_STATIC");

    // Allow pointing the linker at a non-standard GLFW install
    if let Ok(dir) = env::var("GLFW_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    } else {
        eprintln!("info: GLFW_LIB_DIR not set, using system library paths");
    }

    let kind = if env::var("GLFW_STATIC").is_ok() {
        "static"
    } else {
        "dylib"
    };

    // Upstream ships the DLL as glfw3 on Windows and libglfw elsewhere
    let name = if cfg!(target_os = "windows") {
        "glfw3"
    } else {
        "glfw"
    };

    println!("cargo:rustc-link-lib={}={}", kind, name);
}
