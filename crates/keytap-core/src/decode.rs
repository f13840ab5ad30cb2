//! Decode formatting: candidate lookup, width-limited chunking, and
//! column-aligned grid rendering.
//!
//! Rendering assumes monospaced output. Blank fillers are sized in display
//! columns, so the grid only lines up in a fixed-width terminal.

use unicode_width::UnicodeWidthStr;

use crate::index::CodeIndex;

/// A code token carrying something other than digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid character {0:?} in code (digits only)")]
    InvalidCharacter(char),
}

/// Candidates for one code token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub token: String,
    pub options: Vec<String>,
}

impl Translation {
    /// Number of candidate words.
    pub fn count(&self) -> usize {
        self.options.len()
    }
}

/// Look up candidates for each token, in order.
///
/// Tokens must be pure digit strings. An unknown code yields an empty
/// option list; that is expected data, not an error.
pub fn translations(
    index: &CodeIndex,
    tokens: &[String],
) -> Result<Vec<Translation>, DecodeError> {
    let mut result = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(bad) = token.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DecodeError::InvalidCharacter(bad));
        }
        result.push(Translation {
            token: token.clone(),
            options: index.lookup(token).to_vec(),
        });
    }
    Ok(result)
}

/// Tokens that have no known translation.
pub fn missing(translations: &[Translation]) -> Vec<&str> {
    translations
        .iter()
        .filter(|t| t.options.is_empty())
        .map(|t| t.token.as_str())
        .collect()
}

/// Greedy single-pass chunking by summed token display width.
///
/// A token joins the current chunk unless that would push the sum past
/// `line_width`; then the chunk closes and the token opens the next one.
/// A token wider than `line_width` still gets a chunk of its own, and
/// token order never changes.
pub fn chunk(translations: &[Translation], line_width: usize) -> Vec<&[Translation]> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut width = 0;
    for (i, t) in translations.iter().enumerate() {
        let w = UnicodeWidthStr::width(t.token.as_str());
        if width + w > line_width && i > start {
            chunks.push(&translations[start..i]);
            start = i;
            width = 0;
        }
        width += w;
    }
    if start < translations.len() {
        chunks.push(&translations[start..]);
    }
    chunks
}

/// Render one chunk: a header row of tokens, then one row per candidate
/// rank. A token that is out of candidates at a rank renders as a blank
/// filler as wide as the token.
pub fn render_chunk(chunk: &[Translation]) -> Vec<String> {
    let mut rows = Vec::new();
    rows.push(
        chunk
            .iter()
            .map(|t| t.token.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    );

    let max_options = chunk.iter().map(Translation::count).max().unwrap_or(0);
    for row in 0..max_options {
        let cells: Vec<String> = chunk
            .iter()
            .map(|t| match t.options.get(row) {
                Some(word) => word.clone(),
                None => " ".repeat(UnicodeWidthStr::width(t.token.as_str())),
            })
            .collect();
        rows.push(cells.join(" "));
    }
    rows
}

/// Full grid for a token sequence: chunks separated by blank lines.
pub fn format_grid(translations: &[Translation], line_width: usize) -> String {
    let mut out = String::new();
    for (i, group) in chunk(translations, line_width).iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for row in render_chunk(group) {
            out.push_str(&row);
            out.push('\n');
        }
    }
    out
}
