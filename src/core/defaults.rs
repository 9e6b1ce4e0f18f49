//! Fixed toolchain invocations used by the build steps.

/// Configure the emulator build directory with Emscripten's cmake wrapper.
/// The Qt/SDL desktop frontend and the OpenGL renderer are not buildable for
/// wasm, so both stay off.
pub const CMAKE_CONFIGURE_ARGS: &[&str] = &[
    "emcmake",
    "cmake",
    "-B",
    "build",
    "-DBUILD_QT_SDL=OFF",
    "-DENABLE_OGLRENDERER=OFF",
];

/// Build the wasm emulator target through Emscripten's make wrapper.
pub const WASM_MAKE_ARGS: &[&str] = &["emmake", "make", "wasmemulator"];

/// Build outputs expected under the build root after a wasm build.
pub const EMULATOR_WASM: &str = "wasmemulator.wasm";
pub const EMULATOR_JS: &str = "wasmemulator.js";

/// SDK files copied into the frontend before an npm build.
pub const SDK_TYPES_FILE: &str = "webmelon.d.ts";
pub const SDK_JS_FILE: &str = "webmelon.js";
