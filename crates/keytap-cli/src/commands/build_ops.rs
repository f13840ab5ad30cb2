use std::path::Path;
use std::process;

use keytap_core::index::builder;

use crate::word_source;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn build(words_dir: &str, output_file: &str, strict: bool) {
    let dir = Path::new(words_dir);
    if !dir.is_dir() {
        eprintln!("Error: {words_dir} is not a directory");
        process::exit(1);
    }

    let (partitions, failures) = word_source::load_corpus(dir);
    for failure in &failures {
        eprintln!("Error loading {}: {}", failure.label, failure.error);
    }
    if strict && !failures.is_empty() {
        eprintln!("Aborting: {} partition(s) failed to load", failures.len());
        process::exit(1);
    }
    if partitions.is_empty() {
        eprintln!("Error: no partitions loaded from {words_dir}");
        process::exit(1);
    }

    let word_total: usize = partitions.iter().map(|p| p.words.len()).sum();
    eprintln!(
        "Encoding {word_total} words from {} partition(s)...",
        partitions.len()
    );

    let outcome = builder::build(&partitions);
    for skip in &outcome.skipped {
        eprintln!("  skipped {:?} ({})", skip.word, skip.partition);
    }

    let mut index = outcome.index;
    die!(index.save(Path::new(output_file)), "Error writing index: {}");
    eprintln!(
        "Wrote {output_file} ({} codes, {} words)",
        index.len(),
        index.word_count()
    );
}
