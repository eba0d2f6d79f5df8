//! In-memory boolean inverted index.
//!
//! Maps each stem to the sorted list of documents containing it, alongside
//! a universe list of every indexed id. Building appends in arrival order;
//! [`BooleanIndex::finalize`] sorts and de-duplicates everything, after
//! which the index is read-only and queries may run against it.

use crate::index::hash_table::HashTable;
use crate::index::types::{DocId, Document};
use crate::utils::{stem, tokenize};

#[derive(Debug)]
pub struct BooleanIndex {
    docs_count: usize,
    all_docs: Vec<DocId>,
    table: HashTable,
}

impl BooleanIndex {
    pub fn new() -> Self {
        Self {
            docs_count: 0,
            all_docs: Vec::new(),
            table: HashTable::new(),
        }
    }

    /// Pre-size the term table for a known corpus scale.
    pub fn with_table_capacity(capacity: usize) -> Self {
        Self {
            docs_count: 0,
            all_docs: Vec::new(),
            table: HashTable::with_capacity(capacity),
        }
    }

    /// Index one document. The id joins the universe even when the text
    /// yields no terms, so NOT queries can still select the document.
    pub fn add_document(&mut self, doc: &Document) {
        self.docs_count = self.docs_count.max(doc.id as usize + 1);
        self.all_docs.push(doc.id);

        let mut terms: Vec<String> = Vec::new();
        for token in tokenize(&doc.text) {
            let term = stem(&token);
            if term.len() < 2 {
                continue;
            }
            terms.push(term);
        }
        terms.sort_unstable();
        terms.dedup();

        for term in &terms {
            self.table.get_or_insert(term).push(doc.id);
        }
    }

    /// Sort and de-duplicate the universe and every posting list. Must run
    /// before queries; running it again is a no-op.
    pub fn finalize(&mut self) {
        self.all_docs.sort_unstable();
        self.all_docs.dedup();
        self.table.for_each_mut(|_, postings| {
            postings.sort_unstable();
            postings.dedup();
        });
    }

    /// Posting list for `term`; empty when the term is unknown.
    pub fn postings(&self, term: &str) -> &[DocId] {
        self.table.find(term).unwrap_or(&[])
    }

    /// Every id ever indexed, ascending. The NOT operand.
    pub fn all_docs(&self) -> &[DocId] {
        &self.all_docs
    }

    /// High-water mark over ids: `max(id) + 1`. A sizing hint, not the
    /// universe size.
    pub fn docs_count(&self) -> usize {
        self.docs_count
    }

    /// Number of distinct terms.
    pub fn terms_count(&self) -> usize {
        self.table.len()
    }
}

impl Default for BooleanIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: DocId, text: &str) -> Document {
        Document {
            id,
            key: format!("u{}", id),
            text: text.to_string(),
        }
    }

    fn is_strictly_ascending(ids: &[DocId]) -> bool {
        ids.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_postings_sorted_and_unique() {
        let mut index = BooleanIndex::new();
        // Repeated words within one document index the id once.
        index.add_document(&doc(2, "газ газ газ"));
        index.add_document(&doc(0, "газ нефть"));
        index.add_document(&doc(1, "газ"));
        index.finalize();

        let postings = index.postings(&stem("газ"));
        assert_eq!(postings, &[0, 1, 2]);
        assert!(is_strictly_ascending(postings));
    }

    #[test]
    fn test_unknown_term_is_empty() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(0, "нефть"));
        index.finalize();
        assert!(index.postings("квазар").is_empty());
    }

    #[test]
    fn test_termless_document_stays_in_universe() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(0, "нефть"));
        index.add_document(&doc(1, "!!! ... ???"));
        index.finalize();

        assert_eq!(index.all_docs(), &[0, 1]);
        assert_eq!(index.docs_count(), 2);
    }

    #[test]
    fn test_docs_count_is_high_water_mark() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(7, "газ"));
        index.add_document(&doc(3, "нефть"));
        index.finalize();
        assert_eq!(index.docs_count(), 8);
        assert_eq!(index.all_docs(), &[3, 7]);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(1, "газ нефть"));
        index.add_document(&doc(0, "газ"));
        index.finalize();
        let first: Vec<DocId> = index.postings(&stem("газ")).to_vec();
        index.finalize();
        assert_eq!(index.postings(&stem("газ")), first.as_slice());
    }

    #[test]
    fn test_inflected_forms_share_postings() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(0, "машины машина мотор"));
        index.finalize();

        assert_eq!(index.postings(&stem("машина")), &[0]);
        assert_eq!(index.postings(&stem("машину")), &[0]);
    }

    #[test]
    fn test_universe_is_union_of_postings_support() {
        let mut index = BooleanIndex::new();
        index.add_document(&doc(0, "нефть и газ европа"));
        index.add_document(&doc(1, "газ россия"));
        index.add_document(&doc(2, "нефть санкции европа"));
        index.finalize();

        let mut support: Vec<DocId> = Vec::new();
        for word in ["нефть", "газ", "европа", "россия", "санкции"] {
            support.extend_from_slice(index.postings(&stem(word)));
        }
        support.sort_unstable();
        support.dedup();
        assert_eq!(support.as_slice(), index.all_docs());
    }
}
