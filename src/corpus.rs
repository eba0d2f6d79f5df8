//! JSONL corpus loading.
//!
//! Reads `{"url": ..., "text": ...}` records line by line, assigns dense
//! document ids in file order, and feeds each record to a
//! [`BooleanIndex`]. Records with empty text are skipped without
//! consuming an id, so ids stay dense and map back to urls through
//! [`Corpus::keys`]. The index is finalized before returning.

use crate::index::boolean::BooleanIndex;
use crate::index::types::{CorpusConfig, DocId, Document};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// One line of the corpus file.
#[derive(Debug, Deserialize)]
struct CorpusRecord {
    url: String,
    text: String,
}

/// A finalized index together with its id → key side table.
#[derive(Debug)]
pub struct Corpus {
    pub index: BooleanIndex,
    pub keys: Vec<String>,
}

impl Corpus {
    /// Resolve a document id back to its key.
    pub fn key(&self, id: DocId) -> Option<&str> {
        self.keys.get(id as usize).map(String::as_str)
    }
}

/// Load and index a JSONL corpus file.
pub fn load_jsonl(path: &Path, config: &CorpusConfig) -> Result<Corpus> {
    let file =
        File::open(path).with_context(|| format!("cannot open corpus {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut index = BooleanIndex::with_table_capacity(config.table_capacity);
    let mut keys: Vec<String> = Vec::new();
    let started = Instant::now();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("read error in {} at line {}", path.display(), line_no + 1)
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record: CorpusRecord = serde_json::from_str(&line).with_context(|| {
            format!("bad corpus record in {} at line {}", path.display(), line_no + 1)
        })?;
        if record.text.is_empty() {
            continue;
        }

        let doc = Document {
            id: keys.len() as DocId,
            key: record.url,
            text: record.text,
        };
        index.add_document(&doc);
        keys.push(doc.key);

        if config.progress_interval > 0 && keys.len() % config.progress_interval == 0 {
            eprint!("indexed {} documents\r", keys.len());
        }
        if config.limit > 0 && keys.len() >= config.limit {
            break;
        }
    }

    index.finalize();

    let elapsed = started.elapsed().as_secs_f64();
    let rate = if elapsed > 0.0 {
        keys.len() as f64 / elapsed
    } else {
        0.0
    };
    eprintln!(
        "indexed {} documents, {} terms in {:.2}s ({:.0} docs/sec)",
        keys.len(),
        index.terms_count(),
        elapsed,
        rate
    );

    Ok(Corpus { index, keys })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_assigns_dense_ids() {
        let file = write_corpus(&[
            r#"{"url": "http://a", "text": "нефть"}"#,
            r#"{"url": "http://b", "text": "газ"}"#,
        ]);
        let corpus = load_jsonl(file.path(), &CorpusConfig::default()).unwrap();

        assert_eq!(corpus.keys, vec!["http://a", "http://b"]);
        assert_eq!(corpus.index.docs_count(), 2);
        assert_eq!(corpus.key(0), Some("http://a"));
        assert_eq!(corpus.key(5), None);
    }

    #[test]
    fn test_empty_text_skipped_without_id() {
        let file = write_corpus(&[
            r#"{"url": "http://a", "text": "нефть"}"#,
            r#"{"url": "http://empty", "text": ""}"#,
            r#"{"url": "http://b", "text": "газ"}"#,
        ]);
        let corpus = load_jsonl(file.path(), &CorpusConfig::default()).unwrap();

        assert_eq!(corpus.keys, vec!["http://a", "http://b"]);
        assert_eq!(corpus.index.all_docs(), &[0, 1]);
    }

    #[test]
    fn test_limit_stops_early() {
        let file = write_corpus(&[
            r#"{"url": "http://a", "text": "нефть"}"#,
            r#"{"url": "http://b", "text": "газ"}"#,
            r#"{"url": "http://c", "text": "уголь"}"#,
        ]);
        let config = CorpusConfig {
            limit: 2,
            ..CorpusConfig::default()
        };
        let corpus = load_jsonl(file.path(), &config).unwrap();
        assert_eq!(corpus.keys.len(), 2);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let file = write_corpus(&[
            r#"{"url": "http://a", "text": "нефть"}"#,
            "",
            r#"{"url": "http://b", "text": "газ"}"#,
        ]);
        let corpus = load_jsonl(file.path(), &CorpusConfig::default()).unwrap();
        assert_eq!(corpus.keys.len(), 2);
    }

    #[test]
    fn test_malformed_record_is_an_error() {
        let file = write_corpus(&[r#"{"url": "http://a""#]);
        let err = load_jsonl(file.path(), &CorpusConfig::default()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/corpus.jsonl");
        assert!(load_jsonl(missing, &CorpusConfig::default()).is_err());
    }
}
