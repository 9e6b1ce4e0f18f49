//! Wasm emulator build via emmake, plus artifact fan-out.

use std::time::Instant;

use crate::defaults::{EMULATOR_JS, EMULATOR_WASM, WASM_MAKE_ARGS};
use crate::executor::Invocation;
use crate::output;
use crate::paths::Layout;
use crate::pipeline::{elapsed_secs, BuildStep};
use crate::utils::fs;

/// Build the wasm emulator target and copy the outputs into the SDK and
/// frontend static directories.
pub fn build(layout: &Layout) -> bool {
    let start = Instant::now();

    if !layout.emulator_root().exists() {
        output::error("Please run this in the root directory of DS Anywhere!");
        return false;
    }

    let build_root = layout.build_root();
    if !build_root.exists() {
        output::error("Build directories do not appear to exist, did you use emcmake yet?");
        return false;
    }

    let invocation = Invocation::new(WASM_MAKE_ARGS.iter().copied(), &build_root);
    match crate::toolchain::run_streamed(&invocation) {
        Some(0) => {}
        Some(code) => {
            output::error(&format!("emmake returned with error {}, aborting", code));
            return false;
        }
        None => return false,
    }

    let wasm_path = build_root.join(EMULATOR_WASM);
    let js_path = build_root.join(EMULATOR_JS);
    if !wasm_path.exists() || !js_path.exists() {
        output::error("Emulator WASM files not detected after build, something likely went wrong.");
        return false;
    }

    for dest_dir in [layout.sdk_root(), layout.frontend_static()] {
        if !dest_dir.exists() {
            output::warn(&format!(
                "Could not copy output to {} because it does not exist, skipping...",
                dest_dir.display()
            ));
            continue;
        }
        crate::log_status!("wasm", "Copying emulator output to {}", dest_dir.display());
        let copies = [
            (&wasm_path, dest_dir.join(EMULATOR_WASM)),
            (&js_path, dest_dir.join(EMULATOR_JS)),
        ];
        for (from, to) in copies {
            if let Err(err) = fs::copy_file(from, &to, "copy emulator output") {
                output::error(&format!("Failed to copy {}: {}", from.display(), err));
                return false;
            }
        }
    }

    output::info(&format!(
        "Successfully built in {}s!",
        elapsed_secs(start.elapsed())
    ));
    true
}

pub fn step(layout: &Layout) -> BuildStep {
    let layout = layout.clone();
    BuildStep::new("build wasm emulator", move || build(&layout))
}
