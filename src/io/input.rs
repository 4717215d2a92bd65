use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::error::CleanError;
use crate::models::{Document, Element, Node};

/// Parse a transcript XML file into a Document
pub fn parse_transcript_file(path: &Path) -> Result<Document> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_transcript_xml(&content).with_context(|| format!("Failed to parse transcript: {:?}", path))
}

/// Parse transcript XML text into a Document
pub fn parse_transcript_xml(xml: &str) -> Result<Document, CleanError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let tree = roxmltree::Document::parse_with_options(xml, options)?;
    Ok(Document::new(materialize(tree.root_element())))
}

/// Copy an element and its subtree out of the borrowed parse tree.
///
/// Names are stored without namespace; comments and processing
/// instructions are left out.
fn materialize(node: roxmltree::Node) -> Element {
    let mut element = Element::new(node.tag_name().name());

    for attr in node.attributes() {
        element
            .attributes
            .insert(attr.name().to_string(), attr.value().to_string());
    }

    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(materialize(child)));
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            element.children.push(Node::Text(text.to_string()));
        }
    }

    element
}

/// List the transcript files under a path.
///
/// A file is returned as-is; a directory is walked recursively for `.xml`
/// files, sorted by path.
pub fn find_transcript_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.context("Failed to read directory entry")?;
        let entry_path = entry.path();

        let is_xml = entry_path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("xml"));
        if entry_path.is_file() && is_xml {
            files.push(entry_path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
