use tracing::debug;

use crate::error::CleanError;
use crate::models::{DropReason, Element, Resolution};

use super::classify::{classify, terminal_punctuation, NodeKind};
use super::word::resolve_word;
use super::CleanerConfig;

/// Build the normalized text of one utterance.
///
/// Only words, pauses, terminal markers and groups are examined; all other
/// children are skipped. A group or an unclean word drops the whole
/// utterance, never leaving partial output.
pub fn build_utterance(
    utterance: &Element,
    config: &CleanerConfig,
) -> Result<Resolution, CleanError> {
    let mut text = String::new();

    for child in utterance.child_elements() {
        let Some(kind) = classify(child) else {
            continue;
        };

        let fragment = match kind {
            NodeKind::Pause => ",".to_string(),
            NodeKind::Terminal => terminal_punctuation(child).to_string(),
            NodeKind::Grouped => {
                debug!("Dropping utterance {:?}: grouped tokens", utterance.attr("uID"));
                return Ok(Resolution::Dropped(DropReason::GroupedToken));
            }
            NodeKind::Word => match resolve_word(child, config)? {
                Resolution::Emitted(word) => word,
                Resolution::Dropped(reason) => {
                    debug!("Dropping utterance {:?}: {:?} word", utterance.attr("uID"), reason);
                    return Ok(Resolution::Dropped(reason));
                }
            },
        };

        text.push_str(&fragment);
        text.push(' ');
    }

    Ok(Resolution::Emitted(text.trim().to_string()))
}
