use crate::reports; // This stays 'crate'
use clap::Args;
use readalign::api;
use readalign::config::Config;
use readalign::error::RaResult;
use readalign::loader;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Plain-text file with the reference passage.
    #[arg(short, long)]
    pub reference: String,

    /// JSON transcript of the recorded reading.
    #[arg(short, long)]
    pub transcript: String,
}

pub fn run(args: AnalyzeArgs, json: bool) -> RaResult<()> {
    info!("📖 Loading reference: {}", args.reference);
    let reference = loader::load_reference(&args.reference)?;

    info!("🎙️  Loading transcript: {}", args.transcript);
    let spoken = loader::load_transcript(&args.transcript)?;

    let report = api::analyze(&reference, &spoken, &args.config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reports::print_alignment_table(&report);
        reports::print_error_report(&report);
        reports::print_summary(&report);
    }
    Ok(())
}
