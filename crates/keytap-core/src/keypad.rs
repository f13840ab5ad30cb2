//! Telephone keypad letter↔digit mapping.
//!
//! The fixed layout: 2=abc, 3=def, 4=ghi, 5=jkl, 6=mno, 7=pqrs, 8=tuv,
//! 9=wxyz. Every lowercase letter maps to exactly one digit; keys 0 and 1
//! carry no letters.

/// Keypad layout as (digit, letters) pairs, in digit order.
pub static KEYS: &[(char, &str)] = &[
    ('2', "abc"),
    ('3', "def"),
    ('4', "ghi"),
    ('5', "jkl"),
    ('6', "mno"),
    ('7', "pqrs"),
    ('8', "tuv"),
    ('9', "wxyz"),
];

/// A character outside `a-z` where a keypad letter was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid character {0:?} (letters a-z only)")]
pub struct InvalidCharacter(pub char);

/// Digit key carrying `letter`, or `None` for anything outside `a-z`.
pub fn digit_for(letter: char) -> Option<char> {
    KEYS.iter()
        .find(|&&(_, letters)| letters.contains(letter))
        .map(|&(digit, _)| digit)
}

/// Letters printed on `digit`, or `None` for keys without letters.
pub fn letters_for(digit: char) -> Option<&'static str> {
    KEYS.iter()
        .find(|&&(d, _)| d == digit)
        .map(|&(_, letters)| letters)
}

/// Encode a word as its digit code.
///
/// The code has the same length as the word and consists of digits 2-9.
pub fn word_to_code(word: &str) -> Result<String, InvalidCharacter> {
    word.chars()
        .map(|c| digit_for(c).ok_or(InvalidCharacter(c)))
        .collect()
}

/// Encode free text character by character.
///
/// Letters of either case map to their digit; everything else passes
/// through unchanged.
pub fn encode_text(text: &str) -> String {
    text.chars()
        .map(|c| digit_for(c.to_ascii_lowercase()).unwrap_or(c))
        .collect()
}
