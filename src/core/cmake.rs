//! Emulator build-directory configuration via emcmake.

use crate::defaults::CMAKE_CONFIGURE_ARGS;
use crate::executor::Invocation;
use crate::output;
use crate::paths::Layout;
use crate::pipeline::BuildStep;
use crate::utils::fs;

/// Initialize the cmake build directory inside the emulator checkout.
///
/// An existing build directory is only replaced when `overwrite` is set;
/// otherwise the step refuses and points at the flag.
pub fn configure(layout: &Layout, overwrite: bool) -> bool {
    if !layout.emulator_root().exists() {
        output::error("Please run this in the root directory of DS Anywhere!");
        return false;
    }

    let build_root = layout.build_root();
    if build_root.exists() {
        if !overwrite {
            output::error("The cmake build directory already exists, are you sure you want to do this?");
            output::warn("If you would like to overwrite, run this command again with the --overwrite flag");
            return false;
        }
        output::warn("Overwriting existing build root...");
        if let Err(err) = fs::remove_tree(&build_root, "remove build root") {
            output::error(&format!("Could not remove old build root: {}", err));
            return false;
        }
    }

    let invocation = Invocation::new(CMAKE_CONFIGURE_ARGS.iter().copied(), layout.emulator_root());
    match crate::toolchain::run_streamed(&invocation) {
        Some(0) => true,
        Some(_) => {
            output::error("Failed to run cmake!");
            false
        }
        None => false,
    }
}

pub fn step(layout: &Layout, overwrite: bool) -> BuildStep {
    let layout = layout.clone();
    BuildStep::new("configure cmake build directory", move || {
        configure(&layout, overwrite)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    #[test]
    fn fails_outside_repository_root() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::from_root(dir.path());
        assert!(!configure(&layout, false));
    }

    #[test]
    fn refuses_existing_build_dir_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::from_root(dir.path());
        stdfs::create_dir_all(layout.build_root()).unwrap();
        assert!(!configure(&layout, false));
        // untouched
        assert!(layout.build_root().exists());
    }

    #[test]
    fn step_is_labelled() {
        let layout = Layout::from_root("/repo");
        assert_eq!(
            step(&layout, false).label(),
            "configure cmake build directory"
        );
    }
}
