use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::CleanError;
use crate::models::{DropReason, Element, Node, Resolution};

use super::classify::{classify_word_part, is_retracing, is_untranscribed, WordPart};
use super::CleanerConfig;

/// Underscore joiners, optionally preceded by a run of `z`
static UNDERSCORE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("z*_").expect("Invalid underscore regex"));

/// Resolve the surface text of a word element.
///
/// Disqualifying attributes short-circuit to [`Resolution::Dropped`]. A
/// replacement replaces the whole word; otherwise the leading text is
/// extended by compound, drawl and shortening fragments in document order.
pub fn resolve_word(word: &Element, config: &CleanerConfig) -> Result<Resolution, CleanError> {
    if is_retracing(word) {
        return Ok(Resolution::Dropped(DropReason::Retracing));
    }
    if is_untranscribed(word) {
        return Ok(Resolution::Dropped(DropReason::Untranscribed));
    }

    if let Some(replacement) = word.first_child_named("replacement") {
        return match replacement.first_child_named("w") {
            Some(alternative) => resolve_word(alternative, config),
            None => Ok(Resolution::Emitted(String::new())),
        };
    }

    let children = &word.children;
    let mut text = children
        .first()
        .and_then(Node::as_text)
        .unwrap_or_default()
        .to_string();

    for (i, child) in children.iter().enumerate() {
        let next = children.get(i + 1);
        match classify_word_part(child) {
            WordPart::Compound => match next {
                Some(sibling) => text.push_str(&sibling.text_content()),
                None => missing_fragment("compound", &text, config)?,
            },
            WordPart::Drawl => {
                if let Some(sibling) = next {
                    text.push_str(&sibling.text_content());
                }
            }
            WordPart::Shortening => match shortening_text(child) {
                Some(omitted) => text.push_str(&omitted),
                None => missing_fragment("shortening", &text, config)?,
            },
            WordPart::Text if i > 0 => {
                if classify_word_part(&children[i - 1]) == WordPart::Shortening {
                    text.push_str(&child.text_content());
                }
            }
            _ => {}
        }
    }

    Ok(Resolution::Emitted(clean_text(&text)))
}

/// Collapse `z*_` runs to a space and trim
pub fn clean_text(text: &str) -> String {
    UNDERSCORE_RUN.replace_all(text, " ").trim().to_string()
}

/// Text of the first child of a shortening that carries any
fn shortening_text(shortening: &Node) -> Option<String> {
    shortening
        .as_element()?
        .children
        .iter()
        .map(Node::text_content)
        .find(|text| !text.is_empty())
}

fn missing_fragment(
    fragment: &'static str,
    word: &str,
    config: &CleanerConfig,
) -> Result<(), CleanError> {
    if config.strict {
        return Err(CleanError::MissingFragmentText {
            fragment,
            word: word.to_string(),
        });
    }
    warn!("{} fragment in word {:?} has no text, skipping", fragment, word);
    Ok(())
}
