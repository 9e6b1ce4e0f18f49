//! Frontend build: SDK glue staging plus the npm bundler run.

use std::time::Instant;

use crate::defaults::{SDK_JS_FILE, SDK_TYPES_FILE};
use crate::executor::Invocation;
use crate::output;
use crate::paths::Layout;
use crate::pipeline::{elapsed_secs, BuildStep};
use crate::utils::fs;

/// Copy the SDK glue files into the frontend and run the npm build.
/// Dependency installation is skipped unless `install_deps` is set.
pub fn build(layout: &Layout, install_deps: bool) -> bool {
    let start = Instant::now();

    let sdk_root = layout.sdk_root();
    let frontend_root = layout.frontend_root();
    if !sdk_root.exists() || !frontend_root.exists() {
        output::error("Please run this in the root directory of DS Anywhere!");
        return false;
    }

    if !layout.frontend_src().exists() {
        output::error("no source directory at frontend? this shouldn't happen.");
        return false;
    }

    let types_file = sdk_root.join(SDK_TYPES_FILE);
    if !types_file.exists() {
        output::error(&format!(
            "typescript definition file missing at webmelon-sdk/{}!",
            SDK_TYPES_FILE
        ));
        return false;
    }

    let copies = [
        (types_file, layout.frontend_src().join(SDK_TYPES_FILE)),
        (
            sdk_root.join(SDK_JS_FILE),
            layout.frontend_static().join(SDK_JS_FILE),
        ),
    ];
    for (from, to) in copies {
        if let Err(err) = fs::copy_file(&from, &to, "stage sdk file") {
            output::error(&format!("Failed to copy {}: {}", from.display(), err));
            return false;
        }
    }

    if install_deps {
        output::info("Prepared directory, installing dependencies (this may take a minute)...");
        let install = Invocation::new(["npm", "install"], &frontend_root);
        match crate::toolchain::run_streamed(&install) {
            Some(0) => {}
            Some(code) => {
                output::error(&format!(
                    "dependency install returned with error {}, aborting",
                    code
                ));
                return false;
            }
            None => return false,
        }
    } else {
        output::info("Skipping dependency installs, to install dependencies pass --install-deps");
    }

    output::info("Building frontend...");
    let bundle = Invocation::new(["npm", "run", "build"], &frontend_root);
    match crate::toolchain::run_streamed(&bundle) {
        Some(0) => {}
        Some(code) => {
            output::error(&format!("build returned with fatal error {}", code));
            return false;
        }
        None => return false,
    }

    output::info(&format!(
        "Successfully built in {}s!",
        elapsed_secs(start.elapsed())
    ));
    true
}

pub fn step(layout: &Layout, install_deps: bool) -> BuildStep {
    let layout = layout.clone();
    BuildStep::new("build frontend", move || build(&layout, install_deps))
}
