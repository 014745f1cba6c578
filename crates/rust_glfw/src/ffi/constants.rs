//! The complete GLFW 3.4 constant table, values matching `glfw3.h`.

use libc::{c_int, c_uint};

pub const GLFW_VERSION_MAJOR: c_int = 3;
pub const GLFW_VERSION_MINOR: c_int = 4;
pub const GLFW_VERSION_REVISION: c_int = 0;

pub const GLFW_TRUE: c_int = 1;
pub const GLFW_FALSE: c_int = 0;

pub const GLFW_RELEASE: c_int = 0;
pub const GLFW_PRESS: c_int = 1;
pub const GLFW_REPEAT: c_int = 2;

pub const GLFW_HAT_CENTERED: c_int = 0;
pub const GLFW_HAT_UP: c_int = 1;
pub const GLFW_HAT_RIGHT: c_int = 2;
pub const GLFW_HAT_DOWN: c_int = 4;
pub const GLFW_HAT_LEFT: c_int = 8;
pub const GLFW_HAT_RIGHT_UP: c_int = GLFW_HAT_RIGHT | GLFW_HAT_UP;
pub const GLFW_HAT_RIGHT_DOWN: c_int = GLFW_HAT_RIGHT | GLFW_HAT_DOWN;
pub const GLFW_HAT_LEFT_UP: c_int = GLFW_HAT_LEFT | GLFW_HAT_UP;
pub const GLFW_HAT_LEFT_DOWN: c_int = GLFW_HAT_LEFT | GLFW_HAT_DOWN;

pub const GLFW_KEY_UNKNOWN: c_int = -1;
pub const GLFW_KEY_SPACE: c_int = 32;
pub const GLFW_KEY_APOSTROPHE: c_int = 39;
pub const GLFW_KEY_COMMA: c_int = 44;
pub const GLFW_KEY_MINUS: c_int = 45;
pub const GLFW_KEY_PERIOD: c_int = 46;
pub const GLFW_KEY_SLASH: c_int = 47;
pub const GLFW_KEY_0: c_int = 48;
pub const GLFW_KEY_1: c_int = 49;
pub const GLFW_KEY_2: c_int = 50;
pub const GLFW_KEY_3: c_int = 51;
pub const GLFW_KEY_4: c_int = 52;
pub const GLFW_KEY_5: c_int = 53;
pub const GLFW_KEY_6: c_int = 54;
pub const GLFW_KEY_7: c_int = 55;
pub const GLFW_KEY_8: c_int = 56;
pub const GLFW_KEY_9: c_int = 57;
pub const GLFW_KEY_SEMICOLON: c_int = 59;
pub const GLFW_KEY_EQUAL: c_int = 61;
pub const GLFW_KEY_A: c_int = 65;
pub const GLFW_KEY_B: c_int = 66;
pub const GLFW_KEY_C: c_int = 67;
pub const GLFW_KEY_D: c_int = 68;
pub const GLFW_KEY_E: c_int = 69;
pub const GLFW_KEY_F: c_int = 70;
pub const GLFW_KEY_G: c_int = 71;
pub const GLFW_KEY_H: c_int = 72;
pub const GLFW_KEY_I: c_int = 73;
pub const GLFW_KEY_J: c_int = 74;
pub const GLFW_KEY_K: c_int = 75;
pub const GLFW_KEY_L: c_int = 76;
pub const GLFW_KEY_M: c_int = 77;
pub const GLFW_KEY_N: c_int = 78;
pub const GLFW_KEY_O: c_int = 79;
pub const GLFW_KEY_P: c_int = 80;
pub const GLFW_KEY_Q: c_int = 81;
pub const GLFW_KEY_R: c_int = 82;
pub const GLFW_KEY_S: c_int = 83;
pub const GLFW_KEY_T: c_int = 84;
pub const GLFW_KEY_U: c_int = 85;
pub const GLFW_KEY_V: c_int = 86;
pub const GLFW_KEY_W: c_int = 87;
pub const GLFW_KEY_X: c_int = 88;
pub const GLFW_KEY_Y: c_int = 89;
pub const GLFW_KEY_Z: c_int = 90;
pub const GLFW_KEY_LEFT_BRACKET: c_int = 91;
pub const GLFW_KEY_BACKSLASH: c_int = 92;
pub const GLFW_KEY_RIGHT_BRACKET: c_int = 93;
pub const GLFW_KEY_GRAVE_ACCENT: c_int = 96;
pub const GLFW_KEY_WORLD_1: c_int = 161;
pub const GLFW_KEY_WORLD_2: c_int = 162;
pub const GLFW_KEY_ESCAPE: c_int = 256;
pub const GLFW_KEY_ENTER: c_int = 257;
pub const GLFW_KEY_TAB: c_int = 258;
pub const GLFW_KEY_BACKSPACE: c_int = 259;
pub const GLFW_KEY_INSERT: c_int = 260;
pub const GLFW_KEY_DELETE: c_int = 261;
pub const GLFW_KEY_RIGHT: c_int = 262;
pub const GLFW_KEY_LEFT: c_int = 263;
pub const GLFW_KEY_DOWN: c_int = 264;
pub const GLFW_KEY_UP: c_int = 265;
pub const GLFW_KEY_PAGE_UP: c_int = 266;
pub const GLFW_KEY_PAGE_DOWN: c_int = 267;
pub const GLFW_KEY_HOME: c_int = 268;
pub const GLFW_KEY_END: c_int = 269;
pub const GLFW_KEY_CAPS_LOCK: c_int = 280;
pub const GLFW_KEY_SCROLL_LOCK: c_int = 281;
pub const GLFW_KEY_NUM_LOCK: c_int = 282;
pub const GLFW_KEY_PRINT_SCREEN: c_int = 283;
pub const GLFW_KEY_PAUSE: c_int = 284;
pub const GLFW_KEY_F1: c_int = 290;
pub const GLFW_KEY_F2: c_int = 291;
pub const GLFW_KEY_F3: c_int = 292;
pub const GLFW_KEY_F4: c_int = 293;
pub const GLFW_KEY_F5: c_int = 294;
pub const GLFW_KEY_F6: c_int = 295;
pub const GLFW_KEY_F7: c_int = 296;
pub const GLFW_KEY_F8: c_int = 297;
pub const GLFW_KEY_F9: c_int = 298;
pub const GLFW_KEY_F10: c_int = 299;
pub const GLFW_KEY_F11: c_int = 300;
pub const GLFW_KEY_F12: c_int = 301;
pub const GLFW_KEY_F13: c_int = 302;
pub const GLFW_KEY_F14: c_int = 303;
pub const GLFW_KEY_F15: c_int = 304;
pub const GLFW_KEY_F16: c_int = 305;
pub const GLFW_KEY_F17: c_int = 306;
pub const GLFW_KEY_F18: c_int = 307;
pub const GLFW_KEY_F19: c_int = 308;
pub const GLFW_KEY_F20: c_int = 309;
pub const GLFW_KEY_F21: c_int = 310;
pub const GLFW_KEY_F22: c_int = 311;
pub const GLFW_KEY_F23: c_int = 312;
pub const GLFW_KEY_F24: c_int = 313;
pub const GLFW_KEY_F25: c_int = 314;
pub const GLFW_KEY_KP_0: c_int = 320;
pub const GLFW_KEY_KP_1: c_int = 321;
pub const GLFW_KEY_KP_2: c_int = 322;
pub const GLFW_KEY_KP_3: c_int = 323;
pub const GLFW_KEY_KP_4: c_int = 324;
pub const GLFW_KEY_KP_5: c_int = 325;
pub const GLFW_KEY_KP_6: c_int = 326;
pub const GLFW_KEY_KP_7: c_int = 327;
pub const GLFW_KEY_KP_8: c_int = 328;
pub const GLFW_KEY_KP_9: c_int = 329;
pub const GLFW_KEY_KP_DECIMAL: c_int = 330;
pub const GLFW_KEY_KP_DIVIDE: c_int = 331;
pub const GLFW_KEY_KP_MULTIPLY: c_int = 332;
pub const GLFW_KEY_KP_SUBTRACT: c_int = 333;
pub const GLFW_KEY_KP_ADD: c_int = 334;
pub const GLFW_KEY_KP_ENTER: c_int = 335;
pub const GLFW_KEY_KP_EQUAL: c_int = 336;
pub const GLFW_KEY_LEFT_SHIFT: c_int = 340;
pub const GLFW_KEY_LEFT_CONTROL: c_int = 341;
pub const GLFW_KEY_LEFT_ALT: c_int = 342;
pub const GLFW_KEY_LEFT_SUPER: c_int = 343;
pub const GLFW_KEY_RIGHT_SHIFT: c_int = 344;
pub const GLFW_KEY_RIGHT_CONTROL: c_int = 345;
pub const GLFW_KEY_RIGHT_ALT: c_int = 346;
pub const GLFW_KEY_RIGHT_SUPER: c_int = 347;
pub const GLFW_KEY_MENU: c_int = 348;
pub const GLFW_KEY_LAST: c_int = GLFW_KEY_MENU;

pub const GLFW_MOD_SHIFT: c_int = 0x0001;
pub const GLFW_MOD_CONTROL: c_int = 0x0002;
pub const GLFW_MOD_ALT: c_int = 0x0004;
pub const GLFW_MOD_SUPER: c_int = 0x0008;
pub const GLFW_MOD_CAPS_LOCK: c_int = 0x0010;
pub const GLFW_MOD_NUM_LOCK: c_int = 0x0020;

pub const GLFW_MOUSE_BUTTON_1: c_int = 0;
pub const GLFW_MOUSE_BUTTON_2: c_int = 1;
pub const GLFW_MOUSE_BUTTON_3: c_int = 2;
pub const GLFW_MOUSE_BUTTON_4: c_int = 3;
pub const GLFW_MOUSE_BUTTON_5: c_int = 4;
pub const GLFW_MOUSE_BUTTON_6: c_int = 5;
pub const GLFW_MOUSE_BUTTON_7: c_int = 6;
pub const GLFW_MOUSE_BUTTON_8: c_int = 7;
pub const GLFW_MOUSE_BUTTON_LAST: c_int = GLFW_MOUSE_BUTTON_8;
pub const GLFW_MOUSE_BUTTON_LEFT: c_int = GLFW_MOUSE_BUTTON_1;
pub const GLFW_MOUSE_BUTTON_RIGHT: c_int = GLFW_MOUSE_BUTTON_2;
pub const GLFW_MOUSE_BUTTON_MIDDLE: c_int = GLFW_MOUSE_BUTTON_3;

pub const GLFW_JOYSTICK_1: c_int = 0;
pub const GLFW_JOYSTICK_2: c_int = 1;
pub const GLFW_JOYSTICK_3: c_int = 2;
pub const GLFW_JOYSTICK_4: c_int = 3;
pub const GLFW_JOYSTICK_5: c_int = 4;
pub const GLFW_JOYSTICK_6: c_int = 5;
pub const GLFW_JOYSTICK_7: c_int = 6;
pub const GLFW_JOYSTICK_8: c_int = 7;
pub const GLFW_JOYSTICK_9: c_int = 8;
pub const GLFW_JOYSTICK_10: c_int = 9;
pub const GLFW_JOYSTICK_11: c_int = 10;
pub const GLFW_JOYSTICK_12: c_int = 11;
pub const GLFW_JOYSTICK_13: c_int = 12;
pub const GLFW_JOYSTICK_14: c_int = 13;
pub const GLFW_JOYSTICK_15: c_int = 14;
pub const GLFW_JOYSTICK_16: c_int = 15;
pub const GLFW_JOYSTICK_LAST: c_int = GLFW_JOYSTICK_16;

pub const GLFW_GAMEPAD_BUTTON_A: c_int = 0;
pub const GLFW_GAMEPAD_BUTTON_B: c_int = 1;
pub const GLFW_GAMEPAD_BUTTON_X: c_int = 2;
pub const GLFW_GAMEPAD_BUTTON_Y: c_int = 3;
pub const GLFW_GAMEPAD_BUTTON_LEFT_BUMPER: c_int = 4;
pub const GLFW_GAMEPAD_BUTTON_RIGHT_BUMPER: c_int = 5;
pub const GLFW_GAMEPAD_BUTTON_BACK: c_int = 6;
pub const GLFW_GAMEPAD_BUTTON_START: c_int = 7;
pub const GLFW_GAMEPAD_BUTTON_GUIDE: c_int = 8;
pub const GLFW_GAMEPAD_BUTTON_LEFT_THUMB: c_int = 9;
pub const GLFW_GAMEPAD_BUTTON_RIGHT_THUMB: c_int = 10;
pub const GLFW_GAMEPAD_BUTTON_DPAD_UP: c_int = 11;
pub const GLFW_GAMEPAD_BUTTON_DPAD_RIGHT: c_int = 12;
pub const GLFW_GAMEPAD_BUTTON_DPAD_DOWN: c_int = 13;
pub const GLFW_GAMEPAD_BUTTON_DPAD_LEFT: c_int = 14;
pub const GLFW_GAMEPAD_BUTTON_LAST: c_int = GLFW_GAMEPAD_BUTTON_DPAD_LEFT;
pub const GLFW_GAMEPAD_BUTTON_CROSS: c_int = GLFW_GAMEPAD_BUTTON_A;
pub const GLFW_GAMEPAD_BUTTON_CIRCLE: c_int = GLFW_GAMEPAD_BUTTON_B;
pub const GLFW_GAMEPAD_BUTTON_SQUARE: c_int = GLFW_GAMEPAD_BUTTON_X;
pub const GLFW_GAMEPAD_BUTTON_TRIANGLE: c_int = GLFW_GAMEPAD_BUTTON_Y;

pub const GLFW_GAMEPAD_AXIS_LEFT_X: c_int = 0;
pub const GLFW_GAMEPAD_AXIS_LEFT_Y: c_int = 1;
pub const GLFW_GAMEPAD_AXIS_RIGHT_X: c_int = 2;
pub const GLFW_GAMEPAD_AXIS_RIGHT_Y: c_int = 3;
pub const GLFW_GAMEPAD_AXIS_LEFT_TRIGGER: c_int = 4;
pub const GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER: c_int = 5;
pub const GLFW_GAMEPAD_AXIS_LAST: c_int = GLFW_GAMEPAD_AXIS_RIGHT_TRIGGER;

pub const GLFW_NO_ERROR: c_int = 0;
pub const GLFW_NOT_INITIALIZED: c_int = 0x0001_0001;
pub const GLFW_NO_CURRENT_CONTEXT: c_int = 0x0001_0002;
pub const GLFW_INVALID_ENUM: c_int = 0x0001_0003;
pub const GLFW_INVALID_VALUE: c_int = 0x0001_0004;
pub const GLFW_OUT_OF_MEMORY: c_int = 0x0001_0005;
pub const GLFW_API_UNAVAILABLE: c_int = 0x0001_0006;
pub const GLFW_VERSION_UNAVAILABLE: c_int = 0x0001_0007;
pub const GLFW_PLATFORM_ERROR: c_int = 0x0001_0008;
pub const GLFW_FORMAT_UNAVAILABLE: c_int = 0x0001_0009;
pub const GLFW_NO_WINDOW_CONTEXT: c_int = 0x0001_000A;
pub const GLFW_CURSOR_UNAVAILABLE: c_int = 0x0001_000B;
pub const GLFW_FEATURE_UNAVAILABLE: c_int = 0x0001_000C;
pub const GLFW_FEATURE_UNIMPLEMENTED: c_int = 0x0001_000D;
pub const GLFW_PLATFORM_UNAVAILABLE: c_int = 0x0001_000E;

pub const GLFW_FOCUSED: c_int = 0x0002_0001;
pub const GLFW_ICONIFIED: c_int = 0x0002_0002;
pub const GLFW_RESIZABLE: c_int = 0x0002_0003;
pub const GLFW_VISIBLE: c_int = 0x0002_0004;
pub const GLFW_DECORATED: c_int = 0x0002_0005;
pub const GLFW_AUTO_ICONIFY: c_int = 0x0002_0006;
pub const GLFW_FLOATING: c_int = 0x0002_0007;
pub const GLFW_MAXIMIZED: c_int = 0x0002_0008;
pub const GLFW_CENTER_CURSOR: c_int = 0x0002_0009;
pub const GLFW_TRANSPARENT_FRAMEBUFFER: c_int = 0x0002_000A;
pub const GLFW_HOVERED: c_int = 0x0002_000B;
pub const GLFW_FOCUS_ON_SHOW: c_int = 0x0002_000C;
pub const GLFW_MOUSE_PASSTHROUGH: c_int = 0x0002_000D;
pub const GLFW_POSITION_X: c_int = 0x0002_000E;
pub const GLFW_POSITION_Y: c_int = 0x0002_000F;

pub const GLFW_RED_BITS: c_int = 0x0002_1001;
pub const GLFW_GREEN_BITS: c_int = 0x0002_1002;
pub const GLFW_BLUE_BITS: c_int = 0x0002_1003;
pub const GLFW_ALPHA_BITS: c_int = 0x0002_1004;
pub const GLFW_DEPTH_BITS: c_int = 0x0002_1005;
pub const GLFW_STENCIL_BITS: c_int = 0x0002_1006;
pub const GLFW_ACCUM_RED_BITS: c_int = 0x0002_1007;
pub const GLFW_ACCUM_GREEN_BITS: c_int = 0x0002_1008;
pub const GLFW_ACCUM_BLUE_BITS: c_int = 0x0002_1009;
pub const GLFW_ACCUM_ALPHA_BITS: c_int = 0x0002_100A;
pub const GLFW_AUX_BUFFERS: c_int = 0x0002_100B;
pub const GLFW_STEREO: c_int = 0x0002_100C;
pub const GLFW_SAMPLES: c_int = 0x0002_100D;
pub const GLFW_SRGB_CAPABLE: c_int = 0x0002_100E;
pub const GLFW_REFRESH_RATE: c_int = 0x0002_100F;
pub const GLFW_DOUBLEBUFFER: c_int = 0x0002_1010;

pub const GLFW_CLIENT_API: c_int = 0x0002_2001;
pub const GLFW_CONTEXT_VERSION_MAJOR: c_int = 0x0002_2002;
pub const GLFW_CONTEXT_VERSION_MINOR: c_int = 0x0002_2003;
pub const GLFW_CONTEXT_REVISION: c_int = 0x0002_2004;
pub const GLFW_CONTEXT_ROBUSTNESS: c_int = 0x0002_2005;
pub const GLFW_OPENGL_FORWARD_COMPAT: c_int = 0x0002_2006;
pub const GLFW_CONTEXT_DEBUG: c_int = 0x0002_2007;
pub const GLFW_OPENGL_DEBUG_CONTEXT: c_int = GLFW_CONTEXT_DEBUG;
pub const GLFW_OPENGL_PROFILE: c_int = 0x0002_2008;
pub const GLFW_CONTEXT_RELEASE_BEHAVIOR: c_int = 0x0002_2009;
pub const GLFW_CONTEXT_NO_ERROR: c_int = 0x0002_200A;
pub const GLFW_CONTEXT_CREATION_API: c_int = 0x0002_200B;
pub const GLFW_SCALE_TO_MONITOR: c_int = 0x0002_200C;

pub const GLFW_COCOA_RETINA_FRAMEBUFFER: c_int = 0x0002_3001;
pub const GLFW_COCOA_FRAME_NAME: c_int = 0x0002_3002;
pub const GLFW_COCOA_GRAPHICS_SWITCHING: c_int = 0x0002_3003;
pub const GLFW_X11_CLASS_NAME: c_int = 0x0002_4001;
pub const GLFW_X11_INSTANCE_NAME: c_int = 0x0002_4002;
pub const GLFW_WIN32_KEYBOARD_MENU: c_int = 0x0002_5001;
pub const GLFW_WAYLAND_APP_ID: c_int = 0x0002_6001;

pub const GLFW_NO_API: c_int = 0;
pub const GLFW_OPENGL_API: c_int = 0x0003_0001;
pub const GLFW_OPENGL_ES_API: c_int = 0x0003_0002;

pub const GLFW_NO_ROBUSTNESS: c_int = 0;
pub const GLFW_NO_RESET_NOTIFICATION: c_int = 0x0003_1001;
pub const GLFW_LOSE_CONTEXT_ON_RESET: c_int = 0x0003_1002;

pub const GLFW_OPENGL_ANY_PROFILE: c_int = 0;
pub const GLFW_OPENGL_CORE_PROFILE: c_int = 0x0003_2001;
pub const GLFW_OPENGL_COMPAT_PROFILE: c_int = 0x0003_2002;

pub const GLFW_CURSOR: c_int = 0x0003_3001;
pub const GLFW_STICKY_KEYS: c_int = 0x0003_3002;
pub const GLFW_STICKY_MOUSE_BUTTONS: c_int = 0x0003_3003;
pub const GLFW_LOCK_KEY_MODS: c_int = 0x0003_3004;
pub const GLFW_RAW_MOUSE_MOTION: c_int = 0x0003_3005;

pub const GLFW_CURSOR_NORMAL: c_int = 0x0003_4001;
pub const GLFW_CURSOR_HIDDEN: c_int = 0x0003_4002;
pub const GLFW_CURSOR_DISABLED: c_int = 0x0003_4003;
pub const GLFW_CURSOR_CAPTURED: c_int = 0x0003_4004;

pub const GLFW_ANY_RELEASE_BEHAVIOR: c_int = 0;
pub const GLFW_RELEASE_BEHAVIOR_FLUSH: c_int = 0x0003_5001;
pub const GLFW_RELEASE_BEHAVIOR_NONE: c_int = 0x0003_5002;

pub const GLFW_NATIVE_CONTEXT_API: c_int = 0x0003_6001;
pub const GLFW_EGL_CONTEXT_API: c_int = 0x0003_6002;
pub const GLFW_OSMESA_CONTEXT_API: c_int = 0x0003_6003;

pub const GLFW_ANGLE_PLATFORM_TYPE_NONE: c_int = 0x0003_7001;
pub const GLFW_ANGLE_PLATFORM_TYPE_OPENGL: c_int = 0x0003_7002;
pub const GLFW_ANGLE_PLATFORM_TYPE_OPENGLES: c_int = 0x0003_7003;
pub const GLFW_ANGLE_PLATFORM_TYPE_D3D9: c_int = 0x0003_7004;
pub const GLFW_ANGLE_PLATFORM_TYPE_D3D11: c_int = 0x0003_7005;
pub const GLFW_ANGLE_PLATFORM_TYPE_VULKAN: c_int = 0x0003_7007;
pub const GLFW_ANGLE_PLATFORM_TYPE_METAL: c_int = 0x0003_7008;

pub const GLFW_WAYLAND_PREFER_LIBDECOR: c_int = 0x0003_8001;
pub const GLFW_WAYLAND_DISABLE_LIBDECOR: c_int = 0x0003_8002;

pub const GLFW_ANY_POSITION: c_uint = 0x8000_0000;

// Cursor shapes share the 0x36xxx range with the context-creation-API
// values above; the two sets are consumed by different functions.
pub const GLFW_ARROW_CURSOR: c_int = 0x0003_6001;
pub const GLFW_IBEAM_CURSOR: c_int = 0x0003_6002;
pub const GLFW_CROSSHAIR_CURSOR: c_int = 0x0003_6003;
pub const GLFW_POINTING_HAND_CURSOR: c_int = 0x0003_6004;
pub const GLFW_RESIZE_EW_CURSOR: c_int = 0x0003_6005;
pub const GLFW_RESIZE_NS_CURSOR: c_int = 0x0003_6006;
pub const GLFW_RESIZE_NWSE_CURSOR: c_int = 0x0003_6007;
pub const GLFW_RESIZE_NESW_CURSOR: c_int = 0x0003_6008;
pub const GLFW_RESIZE_ALL_CURSOR: c_int = 0x0003_6009;
pub const GLFW_NOT_ALLOWED_CURSOR: c_int = 0x0003_600A;
pub const GLFW_HRESIZE_CURSOR: c_int = GLFW_RESIZE_EW_CURSOR;
pub const GLFW_VRESIZE_CURSOR: c_int = GLFW_RESIZE_NS_CURSOR;
pub const GLFW_HAND_CURSOR: c_int = GLFW_POINTING_HAND_CURSOR;

pub const GLFW_CONNECTED: c_int = 0x0004_0001;
pub const GLFW_DISCONNECTED: c_int = 0x0004_0002;

pub const GLFW_JOYSTICK_HAT_BUTTONS: c_int = 0x0005_0001;
pub const GLFW_ANGLE_PLATFORM_TYPE: c_int = 0x0005_0002;
pub const GLFW_PLATFORM: c_int = 0x0005_0003;
pub const GLFW_COCOA_CHDIR_RESOURCES: c_int = 0x0005_1001;
pub const GLFW_COCOA_MENUBAR: c_int = 0x0005_1002;
pub const GLFW_X11_XCB_VULKAN_SURFACE: c_int = 0x0005_2001;
pub const GLFW_WAYLAND_LIBDECOR: c_int = 0x0005_3001;

pub const GLFW_ANY_PLATFORM: c_int = 0x0006_0000;
pub const GLFW_PLATFORM_WIN32: c_int = 0x0006_0001;
pub const GLFW_PLATFORM_COCOA: c_int = 0x0006_0002;
pub const GLFW_PLATFORM_WAYLAND: c_int = 0x0006_0003;
pub const GLFW_PLATFORM_X11: c_int = 0x0006_0004;
pub const GLFW_PLATFORM_NULL: c_int = 0x0006_0005;

pub const GLFW_DONT_CARE: c_int = -1;
