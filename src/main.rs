use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use gradebook_navigator::core::{dirs::resolve_dataset_path, print_error, JsonRepository, Result};
use gradebook_navigator::menu::Session;
use std::env;

#[derive(Parser)]
#[command(name = "gradebook-navigator")]
#[command(about = "An interactive text-menu navigator for academic records")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Path to the dataset file (falls back to GRADEBOOK_DATA, then the
    /// platform data directory)
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli.data) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(data_flag: Option<PathBuf>) -> Result<()> {
    // Connectivity errors abort here, before the run loop is entered
    let path = resolve_dataset_path(data_flag)?;
    let repo = JsonRepository::open(&path)?;
    log::info!("Connected to dataset at {}", path.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(Box::new(repo), stdin.lock(), stdout.lock())
}

fn run_session<R: BufRead + 'static, W: Write + 'static>(
    repo: Box<dyn gradebook_navigator::core::Repository>,
    input: R,
    out: W,
) -> Result<()> {
    let mut session = Session::new(repo, input, out);
    session.run()
    // Session (and with it the repository) is released here
}
