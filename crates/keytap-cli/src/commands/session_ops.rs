//! Interactive encode/decode session.
//!
//! Mirrors the one-shot `decode` command but keeps the index in memory,
//! offers to fill in missing translations and extra corpus words, and
//! persists once at session end if anything changed.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use tracing::info;

use keytap_core::decode;
use keytap_core::index::CodeIndex;
use keytap_core::keypad;
use keytap_core::normalize;
use keytap_core::settings::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn session(index_file: &str) {
    let path = Path::new(index_file);
    let mut index = die!(CodeIndex::load(path), "Error loading index: {}");
    info!(
        codes = index.len(),
        words = index.word_count(),
        "session started"
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run(&mut input, &mut index);

    if index.is_dirty() {
        die!(index.save(path), "Error saving index: {}");
        println!("Index saved.");
    }
}

fn run(input: &mut dyn BufRead, index: &mut CodeIndex) {
    loop {
        let Some(mode) = prompt(input, "\nSelect mode: [e]ncode, [d]ecode, [q]uit: ") else {
            break;
        };
        match mode.trim() {
            "e" | "encode" => encode_once(input),
            "d" | "decode" => decode_once(input, index),
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown mode {other:?}."),
        }
    }
}

fn prompt(input: &mut dyn BufRead, text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn confirm(input: &mut dyn BufRead, text: &str) -> bool {
    prompt(input, text).is_some_and(|line| line.trim().eq_ignore_ascii_case("y"))
}

fn encode_once(input: &mut dyn BufRead) {
    let Some(text) = prompt(input, "Enter text: ") else {
        return;
    };
    println!();
    println!("Encoded text: {}", keypad::encode_text(&text));
}

fn decode_once(input: &mut dyn BufRead, index: &mut CodeIndex) {
    let Some(raw) = prompt(input, "Enter code: ") else {
        return;
    };
    let tokens = normalize::tokens(&raw);
    if tokens.is_empty() {
        println!("Nothing to decode.");
        return;
    }

    let translations = match decode::translations(index, &tokens) {
        Ok(t) => t,
        Err(e) => {
            println!("Invalid input ({e}). Digits and punctuation only please.");
            return;
        }
    };

    println!();
    print!(
        "{}",
        decode::format_grid(&translations, settings().display.line_width)
    );

    let missing: Vec<String> = decode::missing(&translations)
        .into_iter()
        .map(str::to_string)
        .collect();
    offer_missing(input, index, &missing);
    offer_new_words(input, index);
}

fn offer_missing(input: &mut dyn BufRead, index: &mut CodeIndex, missing: &[String]) {
    if missing.is_empty() {
        return;
    }
    println!();
    println!("{} code(s) have no known translation.", missing.len());
    if !confirm(input, "Provide translations for them? [y/n]: ") {
        return;
    }
    for code in missing {
        let text = format!("Translation for \"{code}\" (blank to skip): ");
        let Some(raw) = prompt(input, &text) else {
            return;
        };
        let word = normalize::word(&raw);
        if word.is_empty() {
            continue;
        }
        match index.add_translation(code, &word) {
            Ok(()) => println!("Added: {code} → {word}"),
            Err(e) => println!("Skipped: {e}"),
        }
    }
}

fn offer_new_words(input: &mut dyn BufRead, index: &mut CodeIndex) {
    if !confirm(input, "\nAdd more words to the corpus? [y/n]: ") {
        return;
    }
    loop {
        let Some(raw) = prompt(input, "Enter word (blank to stop): ") else {
            return;
        };
        let word = normalize::word(&raw);
        if word.is_empty() {
            return;
        }
        match index.add_word(&word) {
            Ok(code) => println!("Added: {word} → {code}"),
            Err(e) => println!("Skipped: {e}"),
        }
    }
}
