use clap::{CommandFactory, Parser, Subcommand};

mod commands;

use commands::{artifact, cmake, frontend, full, wasm};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "dsbuild")]
#[command(version = VERSION)]
#[command(about = "Build orchestration for the DS Anywhere web emulator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

// The command table is declared here once; aliases and descriptions live on
// the variants rather than in any mutable registry.
#[derive(Subcommand)]
enum Commands {
    /// Build the cmake build directory used by the build-wasm command
    #[command(name = "build-cmake")]
    BuildCmake(cmake::BuildCmakeArgs),
    /// Build the frontend files
    #[command(name = "build-fe", visible_alias = "build-frontend")]
    BuildFe(frontend::BuildFrontendArgs),
    /// Rebuild all wasm files and place them in the correct directory
    #[command(name = "build-wasm", visible_alias = "build-webasm")]
    BuildWasm,
    /// Perform a complete build of all components from scratch
    #[command(name = "full-build")]
    FullBuild(full::FullBuildArgs),
    /// Prepare all artifacts (intended for GitHub Actions only)
    #[command(visible_alias = "prepare-artifacts")]
    Artifact,
    /// List available commands (alias for --help)
    List,
}

fn main() {
    let cli = Cli::parse();

    let ok = match cli.command {
        None | Some(Commands::List) => {
            let _ = Cli::command().print_help();
            true
        }
        Some(Commands::BuildCmake(args)) => cmake::run(args),
        Some(Commands::BuildFe(args)) => frontend::run(args),
        Some(Commands::BuildWasm) => wasm::run(),
        Some(Commands::FullBuild(args)) => full::run(args),
        Some(Commands::Artifact) => artifact::run(),
    };

    std::process::exit(if ok { 0 } else { 1 });
}
