//! Draughtsman CLI - Extract UML class models from parsed requirement text

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    let app = cli::DraughtsmanApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
