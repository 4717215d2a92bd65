pub mod classify;
pub mod corpus;
pub mod stream;
pub mod utterance;
pub mod word;

pub use classify::*;
pub use corpus::*;
pub use stream::*;
pub use utterance::*;
pub use word::*;

/// Speaker role of the target child in CHILDES transcripts
pub const CHILD_SPEAKER: &str = "CHI";

/// Configuration for transcript cleaning
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Speaker role (`who` attribute) whose utterances are kept
    pub target_speaker: String,
    /// Treat fragments with nothing to concatenate as fatal input errors
    pub strict: bool,
}

impl CleanerConfig {
    pub fn for_speaker(speaker: impl Into<String>) -> Self {
        Self {
            target_speaker: speaker.into(),
            ..Default::default()
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            target_speaker: CHILD_SPEAKER.to_string(),
            strict: false,
        }
    }
}
