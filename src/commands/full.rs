use clap::Args;
use dsbuild::pipeline::{self, elapsed_secs};
use dsbuild::{cmake, frontend, output, wasm};

#[derive(Args)]
pub struct FullBuildArgs {
    /// Replace an existing cmake build directory
    #[arg(long)]
    pub overwrite: bool,

    /// Run `npm install` before the frontend build
    #[arg(long)]
    pub install_deps: bool,
}

/// Complete build from scratch: configure, wasm build, frontend build.
/// Stops at the first failing step.
pub fn run(args: FullBuildArgs) -> bool {
    let Some(layout) = crate::commands::discover_layout() else {
        return false;
    };

    let report = pipeline::run(vec![
        cmake::step(&layout, args.overwrite),
        wasm::step(&layout),
        frontend::step(&layout, args.install_deps),
    ]);

    if report.succeeded() {
        output::info(&format!(
            "Successfully performed full build in {}s",
            elapsed_secs(report.elapsed)
        ));
    }
    report.succeeded()
}
