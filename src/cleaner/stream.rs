use tracing::debug;

use crate::error::CleanError;
use crate::models::{CleanStats, Document, Element, Resolution};

use super::utterance::build_utterance;
use super::CleanerConfig;

/// Lazily yields one normalized line per retained utterance of a document.
///
/// Utterances from other speakers, dropped utterances, and results that are
/// empty or a bare period are skipped. Each utterance is visited once, in
/// document order.
pub struct UtteranceStream<'a> {
    utterances: std::vec::IntoIter<&'a Element>,
    config: &'a CleanerConfig,
    stats: CleanStats,
}

impl<'a> UtteranceStream<'a> {
    pub fn new(document: &'a Document, config: &'a CleanerConfig) -> Self {
        Self {
            utterances: document.utterances().into_iter(),
            config,
            stats: CleanStats::default(),
        }
    }

    /// Counters for the utterances visited so far
    pub fn stats(&self) -> &CleanStats {
        &self.stats
    }

    pub fn into_stats(self) -> CleanStats {
        self.stats
    }
}

impl Iterator for UtteranceStream<'_> {
    type Item = Result<String, CleanError>;

    fn next(&mut self) -> Option<Self::Item> {
        for utterance in self.utterances.by_ref() {
            self.stats.utterances_seen += 1;

            if utterance.attr("who") != Some(self.config.target_speaker.as_str()) {
                self.stats.other_speaker += 1;
                continue;
            }

            match build_utterance(utterance, self.config) {
                Err(e) => return Some(Err(e)),
                Ok(Resolution::Dropped(reason)) => self.stats.record_drop(reason),
                Ok(Resolution::Emitted(text)) if is_suppressed(&text) => {
                    debug!("Suppressing utterance {:?}: {:?}", utterance.attr("uID"), text);
                    self.stats.suppressed += 1;
                }
                Ok(Resolution::Emitted(text)) => {
                    self.stats.emitted += 1;
                    return Some(Ok(text));
                }
            }
        }
        None
    }
}

/// Lines with no content beyond a lone period are not emitted
fn is_suppressed(text: &str) -> bool {
    text.is_empty() || text == "."
}

/// All lines and counters for one document
#[derive(Debug, Clone)]
pub struct CleanedDocument {
    pub lines: Vec<String>,
    pub stats: CleanStats,
}

/// Drain an [`UtteranceStream`] over the whole document
pub fn clean_document(
    document: &Document,
    config: &CleanerConfig,
) -> Result<CleanedDocument, CleanError> {
    let mut stream = UtteranceStream::new(document, config);
    let lines = stream.by_ref().collect::<Result<Vec<_>, _>>()?;

    Ok(CleanedDocument {
        lines,
        stats: stream.into_stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DropReason;

    fn u(who: &str) -> Element {
        Element::new("u").with_attr("who", who)
    }

    fn w(text: &str) -> Element {
        Element::new("w").with_text(text)
    }

    fn t(kind: &str) -> Element {
        Element::new("t").with_attr("type", kind)
    }

    fn document(utterances: Vec<Element>) -> Document {
        let root = utterances
            .into_iter()
            .fold(Element::new("CHAT"), Element::with_child);
        Document::new(root)
    }

    #[test]
    fn test_filters_by_speaker() {
        let doc = document(vec![
            u("MOT").with_child(w("what")).with_child(t("q")),
            u("CHI").with_child(w("ball")).with_child(t("p")),
            u("MOT").with_child(w("yes")).with_child(t("p")),
        ]);

        let config = CleanerConfig::default();
        let lines: Vec<_> = UtteranceStream::new(&doc, &config)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["ball ."]);

        let config = CleanerConfig::for_speaker("MOT");
        let lines: Vec<_> = UtteranceStream::new(&doc, &config)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["what ?", "yes ."]);
    }

    #[test]
    fn test_missing_speaker_never_matches() {
        let doc = document(vec![Element::new("u").with_child(w("hi"))]);
        let result = clean_document(&doc, &CleanerConfig::default()).unwrap();

        assert!(result.lines.is_empty());
        assert_eq!(result.stats.other_speaker, 1);
    }

    #[test]
    fn test_bare_period_and_empty_are_suppressed() {
        let doc = document(vec![
            u("CHI").with_child(t("p")),
            u("CHI").with_child(Element::new("a").with_text("gestures")),
            u("CHI").with_child(w("hi")).with_child(t("p")),
        ]);

        let result = clean_document(&doc, &CleanerConfig::default()).unwrap();

        assert_eq!(result.lines, vec!["hi ."]);
        assert_eq!(result.stats.suppressed, 2);
        assert_eq!(result.stats.emitted, 1);
    }

    #[test]
    fn test_dropped_utterances_are_counted() {
        let doc = document(vec![
            u("CHI")
                .with_child(Element::new("g").with_child(w("a")))
                .with_child(t("p")),
            u("CHI")
                .with_child(w("I"))
                .with_child(Element::new("w").with_attr("type", "retracing").with_text("I"))
                .with_child(t("p")),
            u("CHI").with_child(w("more")).with_child(t("e")),
        ]);

        let result = clean_document(&doc, &CleanerConfig::default()).unwrap();

        assert_eq!(result.lines, vec!["more !"]);
        assert_eq!(result.stats.utterances_seen, 3);
        assert_eq!(result.stats.dropped[&DropReason::GroupedToken], 1);
        assert_eq!(result.stats.dropped[&DropReason::Retracing], 1);
    }

    #[test]
    fn test_stream_is_lazy() {
        let doc = document(vec![
            u("CHI").with_child(w("one")),
            u("CHI").with_child(w("two")),
        ]);
        let config = CleanerConfig::default();
        let mut stream = UtteranceStream::new(&doc, &config);

        assert_eq!(stream.next().unwrap().unwrap(), "one");
        assert_eq!(stream.stats().utterances_seen, 1);
        assert_eq!(stream.next().unwrap().unwrap(), "two");
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_end_to_end_from_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<CHAT xmlns="http://www.talkbank.org/ns/talkbank" Lang="eng" Corpus="Suppes">
  <Participants>
    <participant id="CHI" name="Nina" role="Target_Child"/>
  </Participants>
  <u who="CHI" uID="u0"><w>hi</w><t type="p"/></u>
  <u who="CHI" uID="u1"><t type="p"/></u>
  <u who="CHI" uID="u2"><w>wha<shortening>t</shortening>'s</w><w>that</w><t type="q"/></u>
  <u who="CHI" uID="u3"><w>I</w><g><w>want</w><w>need</w></g><w>it</w><t type="p"/></u>
  <u who="CHI" uID="u4"><w>the</w><w untranscribed="unintelligible">xxx</w><t type="p"/></u>
  <u who="MOT" uID="u5"><w>good</w><t type="e"/></u>
  <u who="CHI" uID="u6"><w>ice<wk type="cmp"/>cream</w><pause symbolic-length="simple"/><w>peanut_butter</w><t type="e"/></u>
  <u who="CHI" uID="u7"><w>gonna<replacement><w>going</w><w>to</w></replacement></w><w>go</w><t type="p"/></u>
</CHAT>"#;

        let doc = crate::io::parse_transcript_xml(xml).unwrap();
        let result = clean_document(&doc, &CleanerConfig::default()).unwrap();

        assert_eq!(
            result.lines,
            vec![
                "hi .",
                "what's that ?",
                "icecream , peanut butter !",
                "going go .",
            ]
        );
        assert_eq!(result.stats.suppressed, 1);
        assert_eq!(result.stats.other_speaker, 1);
        assert_eq!(result.stats.dropped[&DropReason::GroupedToken], 1);
        assert_eq!(result.stats.dropped[&DropReason::Untranscribed], 1);
    }

    #[test]
    fn test_strict_error_surfaces() {
        let word = Element::new("w")
            .with_text("pop")
            .with_child(Element::new("wk").with_attr("type", "cmp"));
        let doc = document(vec![u("CHI").with_child(word)]);
        let config = CleanerConfig {
            strict: true,
            ..Default::default()
        };

        assert!(clean_document(&doc, &config).is_err());
    }
}
