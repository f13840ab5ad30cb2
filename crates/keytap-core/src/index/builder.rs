//! Batch index construction from corpus partitions.
//!
//! One worker thread per partition computes a local code → words map;
//! workers share nothing and each runs its partition end-to-end. After the
//! join barrier the local maps merge in partition order into a seeded
//! `CodeIndex`. Colliding codes concatenate — overwriting would silently
//! drop words.
//!
//! Words that fail to encode are skipped, logged, and reported in
//! `BuildOutcome::skipped`; callers see exactly how degraded the build is.

use std::collections::HashMap;
use std::thread;

use tracing::{debug, warn};

use crate::index::CodeIndex;
use crate::keypad;

/// One unit of parallel work: the words of a single corpus partition.
pub struct WordPartition {
    /// Partition name used in logs and skip reports (usually the file name).
    pub label: String,
    pub words: Vec<String>,
}

/// A word dropped from the build because it failed to encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedWord {
    pub partition: String,
    pub word: String,
}

/// Result of a batch build.
pub struct BuildOutcome {
    pub index: CodeIndex,
    pub skipped: Vec<SkippedWord>,
}

/// Build a seeded index from `partitions`.
pub fn build(partitions: &[WordPartition]) -> BuildOutcome {
    let locals: Vec<(HashMap<String, Vec<String>>, Vec<SkippedWord>)> = thread::scope(|scope| {
        let handles: Vec<_> = partitions
            .iter()
            .map(|partition| scope.spawn(move || encode_partition(partition)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("partition worker panicked"))
            .collect()
    });

    let mut index = CodeIndex::new();
    let mut skipped = Vec::new();
    for (local, local_skipped) in locals {
        index.merge(local);
        skipped.extend(local_skipped);
    }

    debug!(
        codes = index.len(),
        words = index.word_count(),
        skipped = skipped.len(),
        "merged partition maps"
    );
    BuildOutcome { index, skipped }
}

fn encode_partition(partition: &WordPartition) -> (HashMap<String, Vec<String>>, Vec<SkippedWord>) {
    debug!(
        partition = %partition.label,
        words = partition.words.len(),
        "encoding partition"
    );

    let mut local: HashMap<String, Vec<String>> = HashMap::new();
    let mut skipped = Vec::new();
    for word in &partition.words {
        match keypad::word_to_code(word) {
            Ok(code) => local.entry(code).or_default().push(word.clone()),
            Err(e) => {
                warn!(partition = %partition.label, word = %word, "skipping word: {e}");
                skipped.push(SkippedWord {
                    partition: partition.label.clone(),
                    word: word.clone(),
                });
            }
        }
    }
    (local, skipped)
}
