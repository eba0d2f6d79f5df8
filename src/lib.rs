//! # bix - Boolean retrieval over mixed Cyrillic/Latin text
//!
//! bix is a compact, in-memory boolean search engine. It tokenizes and
//! stems UTF-8 documents, builds an inverted index of sorted posting
//! lists, and evaluates `AND`/`OR`/`NOT` queries with parentheses and
//! implicit AND over them.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`utils`] - Tokenizer and stemmer shared by indexing and queries
//! - [`index`] - The inverted index: term table, posting lists, universe
//! - [`query`] - Query lexing, postfix conversion, and evaluation
//! - [`corpus`] - JSONL corpus loading
//! - [`output`] - Result formatting
//!
//! ## Quick Start
//!
//! ```ignore
//! use bix::index::{BooleanIndex, Document};
//! use bix::query::BooleanSearch;
//!
//! let mut index = BooleanIndex::new();
//! index.add_document(&Document {
//!     id: 0,
//!     key: "http://example.ru/0".into(),
//!     text: "нефть и газ".into(),
//! });
//! index.finalize();
//!
//! let search = BooleanSearch::new(&index);
//! let hits = search.search("нефть AND NOT газ");
//! ```
//!
//! Queries are case-insensitive on operators, and bare words go through
//! the same normalization pipeline as document text, so `Машины` matches
//! documents containing `машина`.

pub mod corpus;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;
