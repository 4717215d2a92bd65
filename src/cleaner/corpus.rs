use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::io::parse_transcript_file;
use crate::models::CleanStats;

use super::stream::clean_document;
use super::CleanerConfig;

/// Counters for one transcript file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub stats: CleanStats,
}

/// Run-level report over a corpus
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// Speaker role that was kept
    pub speaker: String,
    pub files: Vec<FileReport>,
    /// Counters summed over all files
    pub totals: CleanStats,
}

/// Cleaned lines of a corpus plus its report
#[derive(Debug)]
pub struct CorpusResult {
    pub lines: Vec<String>,
    pub report: CorpusReport,
}

/// Clean every transcript file in order, concatenating their lines.
///
/// A file that cannot be read or parsed aborts the run.
pub fn clean_corpus(files: &[PathBuf], config: &CleanerConfig) -> Result<CorpusResult> {
    let mut lines = Vec::new();
    let mut reports = Vec::with_capacity(files.len());
    let mut totals = CleanStats::default();

    for path in files {
        let document = parse_transcript_file(path)?;
        let cleaned = clean_document(&document, config)
            .with_context(|| format!("Failed to clean transcript: {:?}", path))?;

        info!(
            "{:?}: {} lines, {} dropped, {} suppressed",
            path,
            cleaned.stats.emitted,
            cleaned.stats.total_dropped(),
            cleaned.stats.suppressed
        );

        totals.merge(&cleaned.stats);
        lines.extend(cleaned.lines);
        reports.push(FileReport {
            path: path.clone(),
            stats: cleaned.stats,
        });
    }

    Ok(CorpusResult {
        lines,
        report: CorpusReport {
            speaker: config.target_speaker.clone(),
            files: reports,
            totals,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CHAT xmlns="http://www.talkbank.org/ns/talkbank">
  <u who="CHI" uID="u0"><w>hi</w><t type="p"/></u>
  <u who="MOT" uID="u1"><w>hello</w><t type="p"/></u>
</CHAT>"#;

    const SECOND: &str = r#"<CHAT>
  <u who="CHI" uID="u0"><w>bye</w><t type="e"/></u>
  <u who="CHI" uID="u1"><g><w>a</w></g><t type="p"/></u>
</CHAT>"#;

    #[test]
    fn test_clean_corpus_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("01.xml");
        let second = dir.path().join("02.xml");
        std::fs::write(&first, FIRST).unwrap();
        std::fs::write(&second, SECOND).unwrap();

        let result = clean_corpus(&[first, second], &CleanerConfig::default()).unwrap();

        assert_eq!(result.lines, vec!["hi .", "bye !"]);
        assert_eq!(result.report.files.len(), 2);
        assert_eq!(result.report.totals.utterances_seen, 4);
        assert_eq!(result.report.totals.other_speaker, 1);
        assert_eq!(result.report.totals.total_dropped(), 1);
    }

    #[test]
    fn test_malformed_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.xml");
        std::fs::write(&bad, "<CHAT><u who=\"CHI\"></CHAT>").unwrap();

        assert!(clean_corpus(&[bad], &CleanerConfig::default()).is_err());
    }
}
