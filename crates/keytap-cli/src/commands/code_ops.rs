use std::path::Path;
use std::process;

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

pub fn encode(text: &str) {
    println!("{}", keypad::encode_text(text));
}

pub fn decode(index_file: &str, input: &str, width: Option<usize>) {
    let index = die!(
        CodeIndex::load(Path::new(index_file)),
        "Error loading index: {}"
    );

    let tokens = normalize::tokens(input);
    if tokens.is_empty() {
        eprintln!("Error: no code tokens in input");
        process::exit(1);
    }

    let translations = die!(decode::translations(&index, &tokens), "Error: {}");
    let width = width.unwrap_or(settings().display.line_width);
    print!("{}", decode::format_grid(&translations, width));

    let missing = decode::missing(&translations);
    if !missing.is_empty() {
        println!();
        println!("{} code(s) with no known translation:", missing.len());
        for token in missing {
            println!("  {token}");
        }
    }
}

pub fn lookup(index_file: &str, code: &str) {
    let index = die!(
        CodeIndex::load(Path::new(index_file)),
        "Error loading index: {}"
    );
    let words = index.lookup(code);
    if words.is_empty() {
        println!("(no translations)");
    } else {
        for word in words {
            println!("{word}");
        }
        println!("---");
        println!("{} translation(s)", words.len());
    }
}

pub fn info(index_file: &str) {
    let index = die!(
        CodeIndex::load(Path::new(index_file)),
        "Error loading index: {}"
    );
    println!("Codes: {}", index.len());
    println!("Words: {}", index.word_count());
}
