use clap::Args;
use dsbuild::cmake;

#[derive(Args)]
pub struct BuildCmakeArgs {
    /// Replace an existing cmake build directory
    #[arg(long)]
    pub overwrite: bool,
}

pub fn run(args: BuildCmakeArgs) -> bool {
    let Some(layout) = crate::commands::discover_layout() else {
        return false;
    };
    cmake::configure(&layout, args.overwrite)
}
