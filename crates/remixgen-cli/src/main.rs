//! remixgen CLI - compiles the Remix Icon set into a React component library
//!
//! This binary locates the installed `remixicon` asset package, validates
//! and converts every icon into a memoized React component, and bundles the
//! result into a distributable module.

use clap::Parser;
use std::process::ExitCode;

// Use modules from the library crate
use remixgen_cli::commands;

/// remixgen - Remix Icon React component generator
#[derive(Parser)]
#[command(name = "remixgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory of icon SVG files (default: icons/ inside the installed remixicon package)
    #[arg(long)]
    icons_dir: Option<String>,

    /// Root directory for build/ and dist/ outputs
    #[arg(long)]
    out_root: Option<String>,

    /// Write build/index.tsx but skip the bundler step
    #[arg(long)]
    no_bundle: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = commands::generate::run(
        cli.icons_dir.as_deref(),
        cli.out_root.as_deref(),
        cli.no_bundle,
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
