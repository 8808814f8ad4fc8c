use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use vital_alert::loader::output_path_for;
use vital_alert::{ScoringConfig, ScoringSummary, score_directory_parallel, score_files_async};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// Score vital-sign series and append health score, trend score and alert color
#[derive(Debug, Parser)]
#[command(name = "vital-alert", version, about)]
struct Cli {
    /// Input CSV/Parquet file(s), or a single directory of series files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (single input file) or output directory
    #[arg(short, long)]
    output: PathBuf,

    /// JSON file overriding the default scoring configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write per-series summaries as JSON to this file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Derive MAP_mmHg from systolic and diastolic pressure when the column is missing
    #[arg(long)]
    derive_map: bool,

    /// Worker threads for directory scoring
    #[arg(long)]
    threads: Option<usize>,
}

impl Cli {
    fn scoring_config(&self) -> anyhow::Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::from_json_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        config.derive_map_from_diastolic |= self.derive_map;
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.scoring_config()?;
    let start = Instant::now();

    let summaries = match cli.inputs.as_slice() {
        [dir] if dir.is_dir() => score_directory_parallel(dir, &cli.output, &config)
            .with_context(|| format!("Failed to score series in {}", dir.display()))?,
        [file] if !cli.output.is_dir() => {
            score_files_async(vec![(file.clone(), cli.output.clone())], &config).await?
        }
        files => {
            if files.iter().any(|f| f.is_dir()) {
                bail!("Directories cannot be combined with other inputs");
            }
            std::fs::create_dir_all(&cli.output)
                .with_context(|| format!("Failed to create {}", cli.output.display()))?;
            let jobs = files
                .iter()
                .map(|f| (f.clone(), output_path_for(f, &cli.output)))
                .collect();
            score_files_async(jobs, &config).await?
        }
    };

    for summary in &summaries {
        log_summary(summary);
    }
    if let Some(path) = &cli.summary {
        write_summaries(path, &summaries)?;
    }

    info!(
        "Scored {} series in {:?}",
        summaries.len(),
        start.elapsed()
    );
    Ok(())
}

fn log_summary(summary: &ScoringSummary) {
    let source = summary
        .source
        .as_deref()
        .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string());
    info!(
        "{source}: {} rows, current alert {}, peak {} (risk {:.1}) first at row {}",
        summary.rows,
        summary.current_alert,
        summary.peak_alert,
        summary.peak_risk,
        summary.first_peak_row
    );
}

fn write_summaries(path: &Path, summaries: &[ScoringSummary]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summaries)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary {}", path.display()))?;
    info!("Wrote summaries to {}", path.display());
    Ok(())
}
