use clap::Args;
use dsbuild::frontend;

#[derive(Args)]
pub struct BuildFrontendArgs {
    /// Run `npm install` before building
    #[arg(long)]
    pub install_deps: bool,
}

pub fn run(args: BuildFrontendArgs) -> bool {
    let Some(layout) = crate::commands::discover_layout() else {
        return false;
    };
    frontend::build(&layout, args.install_deps)
}
