//! Article body parsing
//!
//! Article bodies are free text with a few markdown-like markers. This
//! module splits a body into display blocks.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMPHASIS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*|__").expect("emphasis pattern is valid"));

/// Deepest heading level recognised
const MAX_HEADING_LEVEL: usize = 6;

/// One display block of an article body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading { level: usize, text: String },
    ListItem { text: String },
    Quote { text: String },
    Paragraph { text: String },
}

impl ContentBlock {
    /// Markdown form of the block
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Heading { level, text } => format!("{} {text}", "#".repeat(*level)),
            Self::ListItem { text } => format!("- {text}"),
            Self::Quote { text } => format!("> {text}"),
            Self::Paragraph { text } => text.clone(),
        }
    }

    /// Text of the block without markers
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. }
            | Self::ListItem { text }
            | Self::Quote { text }
            | Self::Paragraph { text } => text,
        }
    }
}

/// Remove `**` and `__` emphasis markers
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS_REGEX.replace_all(text, "").into_owned()
}

/// Split an article body into blocks
///
/// Consecutive plain lines join into one paragraph; blank lines end it.
pub fn parse_blocks(content: &str) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(block) = marker_block(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(block);
        } else {
            paragraph.push(line);
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn marker_block(line: &str) -> Option<ContentBlock> {
    if line.starts_with('#') {
        let level = line.chars().take_while(|&c| c == '#').count();
        let rest = &line[level..];
        if level <= MAX_HEADING_LEVEL && (rest.is_empty() || rest.starts_with(' ')) {
            return Some(ContentBlock::Heading {
                level,
                text: strip_emphasis(rest.trim()),
            });
        }
        return None;
    }

    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(ContentBlock::ListItem {
            text: strip_emphasis(rest.trim()),
        });
    }

    line.strip_prefix('>').map(|rest| ContentBlock::Quote {
        text: strip_emphasis(rest.trim()),
    })
}

fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<ContentBlock>) {
    if paragraph.is_empty() {
        return;
    }
    blocks.push(ContentBlock::Paragraph {
        text: strip_emphasis(&paragraph.join(" ")),
    });
    paragraph.clear();
}
