pub mod cleaner;
pub mod error;
pub mod io;
pub mod models;

pub use cleaner::{
    build_utterance, classify, clean_corpus, clean_document, resolve_word, CleanedDocument,
    CleanerConfig, CorpusReport, CorpusResult, NodeKind, UtteranceStream, CHILD_SPEAKER,
};
pub use error::CleanError;
pub use io::{
    default_output_name, find_transcript_files, format_summary, parse_transcript_file,
    parse_transcript_xml, write_lines,
};
pub use models::{CleanStats, Document, DropReason, Element, Node, Resolution};
