use thiserror::Error;

/// Errors raised while loading or cleaning a transcript
#[derive(Error, Debug)]
pub enum CleanError {
    /// The transcript could not be parsed as XML
    #[error("Malformed transcript XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A fragment that reads text from a sibling had nothing to read (strict mode)
    #[error("{fragment} in word {word:?} has no text to concatenate")]
    MissingFragmentText {
        /// Kind of fragment (`compound` or `shortening`)
        fragment: &'static str,
        /// Base text of the word collected so far
        word: String,
    },
}
