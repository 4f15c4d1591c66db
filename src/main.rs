//! moostrap CLI - stand up a LambdaMOO serving environment
//!
//! A bare invocation runs the whole pipeline in the current directory:
//! prerequisite check, source resolution, FileIO header patch, build,
//! publish. Exit code 0 on full success; on any fatal stage failure a
//! one-line diagnostic goes to stderr and the process exits non-zero.

use clap::Parser;

use moostrap::{run_pipeline, BootstrapEnv};

/// Bootstrap and build orchestrator for a LambdaMOO serving environment
#[derive(Parser, Debug)]
#[command(name = "moostrap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print each stage as it runs
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let env = match BootstrapEnv::from_current_dir() {
        Ok(env) => env,
        Err(err) => {
            eprintln!("error: cannot determine working directory: {err}");
            std::process::exit(1);
        }
    };

    match run_pipeline(&env, cli.verbose > 0) {
        Ok(report) => {
            println!(
                "Bootstrap complete: {} -> {}",
                report.entry_point.display(),
                report.link_target.display()
            );
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}
