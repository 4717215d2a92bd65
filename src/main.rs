use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use childes_clean::{
    clean_corpus, default_output_name, find_transcript_files, format_summary, write_lines,
    CleanerConfig, CHILD_SPEAKER,
};

#[derive(Parser)]
#[command(name = "childes-clean")]
#[command(author, version, about = "Normalize CHILDES XML transcripts into plain utterance lines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean a transcript file or corpus directory into one utterance per line
    Clean {
        /// Input transcript file or directory of XML transcripts
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file (defaults to <input name>.utterances.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Speaker role to keep (e.g. CHI or MOT)
        #[arg(short, long, default_value = CHILD_SPEAKER)]
        speaker: String,

        /// Output file for the JSON run report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Fail on compound or shortening fragments with no text
        #[arg(long)]
        strict: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Report what cleaning would keep and drop, without writing lines
    Analyze {
        /// Input transcript file or directory of XML transcripts
        #[arg(short, long)]
        input: PathBuf,

        /// Speaker role to keep (e.g. CHI or MOT)
        #[arg(short, long, default_value = CHILD_SPEAKER)]
        speaker: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Clean {
            input,
            output,
            speaker,
            report,
            strict,
            verbose,
        } => {
            setup_logging(verbose);
            let config = CleanerConfig {
                target_speaker: speaker,
                strict,
            };
            clean(&input, output, report.as_deref(), &config)
        }
        Commands::Analyze {
            input,
            speaker,
            verbose,
        } => {
            setup_logging(verbose);
            analyze(&input, &CleanerConfig::for_speaker(speaker))
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn clean(
    input: &Path,
    output: Option<PathBuf>,
    report: Option<&Path>,
    config: &CleanerConfig,
) -> Result<()> {
    let files = find_transcript_files(input)
        .with_context(|| format!("Failed to list transcripts in {:?}", input))?;
    info!("Cleaning {} transcript(s) for speaker {}", files.len(), config.target_speaker);

    let result = clean_corpus(&files, config)?;

    let output = output.unwrap_or_else(|| {
        let corpus = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "corpus".to_string());
        PathBuf::from(default_output_name(&corpus, &config.target_speaker))
    });
    write_lines(&output, &result.lines)?;
    info!("Wrote {} utterances to {:?}", result.lines.len(), output);

    if let Some(path) = report {
        result.report.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    let totals = &result.report.totals;
    info!(
        "Complete: {} emitted, {} dropped, {} suppressed of {} utterances",
        totals.emitted,
        totals.total_dropped(),
        totals.suppressed,
        totals.utterances_seen
    );

    Ok(())
}

fn analyze(input: &Path, config: &CleanerConfig) -> Result<()> {
    info!("Analyzing transcripts from {:?}", input);
    let files = find_transcript_files(input)
        .with_context(|| format!("Failed to list transcripts in {:?}", input))?;

    let result = clean_corpus(&files, config)?;
    print!("{}", format_summary(&result.report));

    Ok(())
}
