// ===== readalign/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit the report as JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Batch(cmd::batch::BatchArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, cli.json),
        Commands::Batch(args) => cmd::batch::run(args, cli.json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
