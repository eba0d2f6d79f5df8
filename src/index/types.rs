use serde::{Deserialize, Serialize};

/// Unique identifier for a document in the index.
pub type DocId = u32;

/// An input record: a caller-assigned dense id, an opaque key (typically
/// a URL) used to present results, and the UTF-8 text to index.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub key: String,
    pub text: String,
}

/// Configuration for corpus loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Stop after this many indexed documents (0 = no limit).
    pub limit: usize,
    /// Initial hash-table capacity, rounded up to a power of two.
    /// Web-scale corpora benefit from large pre-sizing.
    pub table_capacity: usize,
    /// Emit a progress line every this many documents (0 disables).
    pub progress_interval: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            limit: 0,
            table_capacity: 1 << 20,
            progress_interval: 2000,
        }
    }
}
