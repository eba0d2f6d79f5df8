//! Postfix query evaluation over sorted posting lists.
//!
//! Every operator is a linear merge of two strictly ascending id lists,
//! so evaluation is linear in the posting sizes it touches. Malformed
//! postfix never fails: operand underflow contributes an empty list.

use crate::index::boolean::BooleanIndex;
use crate::index::types::DocId;
use crate::query::parser::{parse, QueryToken};
use std::cmp::Ordering;

/// Executes boolean queries against a finalized [`BooleanIndex`].
pub struct BooleanSearch<'a> {
    index: &'a BooleanIndex,
}

impl<'a> BooleanSearch<'a> {
    pub fn new(index: &'a BooleanIndex) -> Self {
        Self { index }
    }

    /// Evaluate a query, returning matching ids in ascending order.
    pub fn search(&self, query: &str) -> Vec<DocId> {
        self.eval_postfix(parse(query))
    }

    fn eval_postfix(&self, postfix: Vec<QueryToken>) -> Vec<DocId> {
        let mut stack: Vec<Vec<DocId>> = Vec::new();
        for tok in postfix {
            match tok {
                QueryToken::Term(term) => stack.push(self.index.postings(&term).to_vec()),
                QueryToken::Not => {
                    let a = stack.pop().unwrap_or_default();
                    stack.push(difference(self.index.all_docs(), &a));
                }
                QueryToken::And => {
                    if stack.len() < 2 {
                        stack.push(Vec::new());
                    } else if let (Some(b), Some(a)) = (stack.pop(), stack.pop()) {
                        stack.push(intersect(&a, &b));
                    }
                }
                QueryToken::Or => {
                    if stack.len() < 2 {
                        stack.push(Vec::new());
                    } else if let (Some(b), Some(a)) = (stack.pop(), stack.pop()) {
                        stack.push(union(&a, &b));
                    }
                }
                QueryToken::LParen | QueryToken::RParen => {}
            }
        }
        stack.pop().unwrap_or_default()
    }
}

/// Intersection of two strictly ascending id lists.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    out
}

/// Union of two strictly ascending id lists; ties collapse to one entry.
pub fn union(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        if j == b.len() || (i < a.len() && a[i] < b[j]) {
            out.push(a[i]);
            i += 1;
        } else if i == a.len() || b[j] < a[i] {
            out.push(b[j]);
            j += 1;
        } else {
            out.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    out
}

/// Elements of `universe` absent from `b`; both strictly ascending.
pub fn difference(universe: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(universe.len());
    let (mut i, mut j) = (0, 0);
    while i < universe.len() {
        if j == b.len() || universe[i] < b[j] {
            out.push(universe[i]);
            i += 1;
        } else if universe[i] == b[j] {
            i += 1;
            j += 1;
        } else {
            j += 1;
        }
    }
    out
}
