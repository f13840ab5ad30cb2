use super::builder::{build, SkippedWord, WordPartition};
use super::*;

fn partition(label: &str, words: &[&str]) -> WordPartition {
    WordPartition {
        label: label.to_string(),
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

#[test]
fn new_index_is_seeded_with_digit_letter_sets() {
    let index = CodeIndex::new();
    assert_eq!(index.len(), 8);
    assert_eq!(index.lookup("2"), ["a", "b", "c"]);
    assert_eq!(index.lookup("7"), ["p", "q", "r", "s"]);
    assert!(!index.is_dirty());
}

#[test]
fn lookup_unknown_code_is_empty() {
    let index = CodeIndex::new();
    assert!(index.lookup("364").is_empty());
    assert!(index.lookup("0").is_empty());
}

#[test]
fn add_word_computes_code_and_marks_dirty() {
    let mut index = CodeIndex::new();
    assert_eq!(index.add_word("dog").unwrap(), "364");
    assert_eq!(index.lookup("364"), ["dog"]);
    assert!(index.is_dirty());
}

#[test]
fn add_word_twice_is_a_reported_no_op() {
    let mut index = CodeIndex::new();
    index.add_word("dog").unwrap();
    let words_before = index.word_count();
    assert_eq!(index.add_word("dog"), Err(EditError::DuplicateWord));
    assert_eq!(index.lookup("364"), ["dog"]);
    assert_eq!(index.word_count(), words_before);
}

#[test]
fn add_word_rejects_non_letters_without_mutating() {
    let mut index = CodeIndex::new();
    assert_eq!(
        index.add_word("c4b"),
        Err(EditError::InvalidCharacter('4'))
    );
    assert_eq!(index.word_count(), CodeIndex::new().word_count());
    assert!(!index.is_dirty());
}

#[test]
fn add_translation_requires_matching_code() {
    let mut index = CodeIndex::new();
    assert_eq!(
        index.add_translation("727", "pars"),
        Err(EditError::CodeMismatch {
            expected: "727".to_string(),
            actual: "7277".to_string(),
        })
    );
    assert!(index.lookup("727").is_empty());
    assert!(!index.is_dirty());
}

#[test]
fn add_translation_appends_on_match() {
    let mut index = CodeIndex::new();
    index.add_translation("364", "dog").unwrap();
    index.add_translation("364", "fog").unwrap();
    assert_eq!(index.lookup("364"), ["dog", "fog"]);
    assert_eq!(
        index.add_translation("364", "dog"),
        Err(EditError::DuplicateWord)
    );
}

#[test]
fn json_round_trip_preserves_keys_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("word_list.json");

    let mut index = CodeIndex::new();
    // All three encode to 227; order must survive the round trip.
    index.add_word("bar").unwrap();
    index.add_word("car").unwrap();
    index.add_word("cap").unwrap();
    index.save(&path).unwrap();
    assert!(!index.is_dirty());

    let loaded = CodeIndex::load(&path).unwrap();
    let mut expected: Vec<&str> = index.codes().collect();
    let mut actual: Vec<&str> = loaded.codes().collect();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
    assert_eq!(loaded.lookup("227"), ["bar", "car", "cap"]);
    assert_eq!(loaded.lookup("2"), ["a", "b", "c"]);
    assert!(!loaded.is_dirty());
}

#[test]
fn load_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CodeIndex::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, IndexError::Io(_)));
}

#[test]
fn load_malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("word_list.json");
    std::fs::write(&path, b"{not json").unwrap();
    let err = CodeIndex::load(&path).unwrap_err();
    assert!(matches!(err, IndexError::Json(_)));
}

#[test]
fn build_merges_disjoint_partitions_without_loss() {
    let outcome = build(&[
        partition("3-letter-words.json", &["cab"]),
        partition("3-letter-words-b.json", &["dog"]),
    ]);
    assert!(outcome.skipped.is_empty());
    // Two corpus codes plus the eight seeded digit entries.
    assert_eq!(outcome.index.len(), 10);
    assert_eq!(outcome.index.lookup("222"), ["cab"]);
    assert_eq!(outcome.index.lookup("364"), ["dog"]);
}

#[test]
fn build_concatenates_on_code_collision() {
    // "dog" and "fog" both encode to 364 but sit in different partitions.
    let outcome = build(&[partition("a", &["dog"]), partition("b", &["fog"])]);
    assert_eq!(outcome.index.lookup("364"), ["dog", "fog"]);
}

#[test]
fn build_preserves_within_partition_order() {
    let outcome = build(&[partition("3-letter-words.json", &["bar", "car", "cap"])]);
    assert_eq!(outcome.index.lookup("227"), ["bar", "car", "cap"]);
}

#[test]
fn build_skips_and_reports_unmappable_words() {
    let outcome = build(&[partition("3-letter-words.json", &["cab", "c4b", "dog"])]);
    assert_eq!(
        outcome.skipped,
        [SkippedWord {
            partition: "3-letter-words.json".to_string(),
            word: "c4b".to_string(),
        }]
    );
    assert_eq!(outcome.index.lookup("222"), ["cab"]);
    assert_eq!(outcome.index.lookup("364"), ["dog"]);
}

#[test]
fn build_does_not_duplicate_seeded_letters() {
    let outcome = build(&[partition("1-letter-words.json", &["a"])]);
    assert_eq!(outcome.index.lookup("2"), ["a", "b", "c"]);
}

#[test]
fn build_with_no_partitions_yields_seeds_only() {
    let outcome = build(&[]);
    assert_eq!(outcome.index.len(), 8);
    assert!(outcome.skipped.is_empty());
}
