use crate::reports;
use clap::Args;
use readalign::api;
use readalign::config::Config;
use readalign::error::{RaResult, ReadAlignError};
use readalign::loader;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Plain-text file with the reference passage.
    #[arg(short, long)]
    pub reference: String,

    /// Directory of JSON transcripts, one reading each.
    #[arg(short, long)]
    pub transcripts: String,
}

pub fn run(args: BatchArgs, json: bool) -> RaResult<()> {
    info!("📖 Loading reference: {}", args.reference);
    let reference = loader::load_reference(&args.reference)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(&args.transcripts)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(ReadAlignError::Validation(format!(
            "No .json transcripts found in '{}'",
            args.transcripts
        )));
    }
    info!("🎙️  Found {} transcripts", paths.len());

    let mut names = Vec::with_capacity(paths.len());
    let mut transcripts = Vec::with_capacity(paths.len());
    for path in &paths {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match loader::load_transcript(&path.display().to_string()) {
            Ok(words) => {
                names.push(name);
                transcripts.push(words);
            }
            Err(e) => warn!("⚠️  Skipping '{}': {}", path.display(), e),
        }
    }

    let results = api::analyze_batch(&reference, &transcripts, &args.config);

    if json {
        let tagged: Vec<serde_json::Value> = names
            .iter()
            .zip(&results)
            .map(|(name, report)| {
                serde_json::json!({ "transcript": name, "report": report })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tagged)?);
    } else {
        let rows: Vec<(String, &readalign::align::AnalysisReport)> = names
            .iter()
            .cloned()
            .zip(results.iter())
            .collect();
        reports::print_batch_table(&rows);
    }
    Ok(())
}
