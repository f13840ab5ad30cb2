//! Operator input normalization.
//!
//! Raw prompt input arrives with arbitrary case and punctuation. The fixed
//! contract: strip the punctuation set below, treat hyphens as separators,
//! lowercase, split on whitespace. Validation of what remains (digits for
//! codes, letters for words) happens at the point of use.

/// Punctuation stripped from operator input.
const STRIPPED: &str = "'\"~!@#$%^&*()_+{}|:<>?/,.;";

/// Normalize raw input into tokens.
pub fn tokens(raw: &str) -> Vec<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| !STRIPPED.contains(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Normalize a single-word answer: as [`tokens`], except whitespace and
/// hyphens are dropped instead of splitting.
pub fn word(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && !STRIPPED.contains(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tokens("He said: 'Hi!'"), vec!["he", "said", "hi"]);
    }

    #[test]
    fn hyphens_split_tokens() {
        assert_eq!(tokens("727-2 364"), vec!["727", "2", "364"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokens("").is_empty());
        assert!(tokens("  ,,  ").is_empty());
    }

    #[test]
    fn word_drops_inner_whitespace() {
        assert_eq!(word(" can dy "), "candy");
        assert_eq!(word("don't"), "dont");
        assert_eq!(word("week-end"), "weekend");
    }
}
