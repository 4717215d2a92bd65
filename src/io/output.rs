use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::cleaner::{CorpusReport, CHILD_SPEAKER};
use crate::models::CleanStats;

/// Write one utterance per line
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = std::io::BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

impl CorpusReport {
    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Output file name for a corpus, e.g. `Nina.utterances.txt` or
/// `Nina-mot.utterances.txt` when cleaning the mother's speech
pub fn default_output_name(corpus: &str, speaker: &str) -> String {
    if speaker == CHILD_SPEAKER {
        format!("{}.utterances.txt", corpus)
    } else {
        format!("{}-{}.utterances.txt", corpus, speaker.to_lowercase())
    }
}

/// Format the report as human-readable text
pub fn format_summary(report: &CorpusReport) -> String {
    let mut output = String::new();

    output.push_str("Corpus Summary\n");
    output.push_str("==============\n");
    output.push_str(&format!("Speaker: {}\n", report.speaker));
    output.push_str(&format!("Files: {}\n", report.files.len()));
    output.push_str(&format_stats(&report.totals));

    if report.files.len() > 1 {
        output.push_str("\nPer File\n");
        output.push_str("--------\n");
        for file in &report.files {
            output.push_str(&format!(
                "{}: {} emitted, {} dropped, {} suppressed\n",
                file.path.display(),
                file.stats.emitted,
                file.stats.total_dropped(),
                file.stats.suppressed
            ));
        }
    }

    output
}

fn format_stats(stats: &CleanStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("Utterances: {}\n", stats.utterances_seen));
    output.push_str(&format!("Other speakers: {}\n", stats.other_speaker));
    output.push_str(&format!("Emitted: {}\n", stats.emitted));
    output.push_str(&format!("Suppressed: {}\n", stats.suppressed));
    output.push_str(&format!("Dropped: {}\n", stats.total_dropped()));
    for (reason, count) in &stats.dropped {
        output.push_str(&format!("  {:?}: {}\n", reason, count));
    }
    output
}
