use std::path::Path;
use std::process;

use keytap_core::index::{CodeIndex, EditError};
use keytap_core::normalize;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn add_word(index_file: &str, word: &str) {
    let path = Path::new(index_file);
    let mut index = die!(CodeIndex::load(path), "Error loading index: {}");

    let word = normalize::word(word);
    if word.is_empty() {
        eprintln!("Error: nothing left of the word after normalization");
        process::exit(1);
    }
    match index.add_word(&word) {
        Ok(code) => {
            die!(index.save(path), "Error saving index: {}");
            println!("Added: {word} → {code}");
        }
        Err(EditError::DuplicateWord) => println!("Already known: {word}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

pub fn add_translation(index_file: &str, code: &str, word: &str) {
    let path = Path::new(index_file);
    let mut index = die!(CodeIndex::load(path), "Error loading index: {}");

    let word = normalize::word(word);
    if word.is_empty() {
        eprintln!("Error: nothing left of the word after normalization");
        process::exit(1);
    }
    match index.add_translation(code, &word) {
        Ok(()) => {
            die!(index.save(path), "Error saving index: {}");
            println!("Added: {code} → {word}");
        }
        Err(EditError::DuplicateWord) => println!("Already known: {code} → {word}"),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
