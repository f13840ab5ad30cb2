//! Corpus partition loading.
//!
//! A corpus directory holds one JSON file per word length
//! (`2-letter-words.json` … `15-letter-words.json`, per settings). Each
//! file is an array of records carrying at least a `"word"` field; all
//! other fields are ignored. Partitions load independently, so failures
//! are reported per file and the caller decides between aborting and
//! building a degraded index.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use keytap_core::index::builder::WordPartition;
use keytap_core::settings::settings;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A partition that could not be loaded.
#[derive(Debug)]
pub struct PartitionFailure {
    pub label: String,
    pub error: SourceError,
}

/// One record of a partition file. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct WordRecord {
    word: String,
}

/// Load one partition file, preserving word order.
pub fn load_partition(path: &Path) -> Result<Vec<String>, SourceError> {
    let bytes = fs::read(path)?;
    let records: Vec<WordRecord> = serde_json::from_slice(&bytes)?;
    Ok(records.into_iter().map(|r| r.word).collect())
}

/// Load every partition in `dir` for the configured length range.
///
/// Returns the partitions that loaded plus the per-file failures.
pub fn load_corpus(dir: &Path) -> (Vec<WordPartition>, Vec<PartitionFailure>) {
    let corpus = &settings().corpus;
    let mut partitions = Vec::new();
    let mut failures = Vec::new();
    for len in corpus.min_word_len..=corpus.max_word_len {
        let label = corpus.partition_file(len);
        match load_partition(&dir.join(&label)) {
            Ok(words) => {
                debug!(partition = %label, words = words.len(), "loaded partition");
                partitions.push(WordPartition { label, words });
            }
            Err(error) => failures.push(PartitionFailure { label, error }),
        }
    }
    (partitions, failures)
}
