//! Boolean query parsing.
//!
//! Lexes a query into terms, operators, and parentheses, inserts the
//! implicit AND between adjacent operands, and converts the stream to
//! postfix form by operator precedence. Bare words go through the same
//! tokenize-and-stem pipeline as document text, so one source word may
//! expand into several term tokens.

use crate::utils::{stem, tokenize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Term(String),
    And,
    Or,
    Not,
    LParen,
    RParen,
}

impl QueryToken {
    fn is_operator(&self) -> bool {
        matches!(self, QueryToken::And | QueryToken::Or | QueryToken::Not)
    }

    /// NOT binds tightest, OR loosest.
    fn precedence(&self) -> u8 {
        match self {
            QueryToken::Not => 3,
            QueryToken::And => 2,
            QueryToken::Or => 1,
            _ => 0,
        }
    }
}

fn flush_word(buf: &mut String, out: &mut Vec<QueryToken>) {
    if buf.is_empty() {
        return;
    }
    if buf.chars().all(|c| c.is_ascii_alphabetic()) {
        let op = match buf.to_ascii_uppercase().as_str() {
            "AND" => Some(QueryToken::And),
            "OR" => Some(QueryToken::Or),
            "NOT" => Some(QueryToken::Not),
            _ => None,
        };
        if let Some(op) = op {
            out.push(op);
            buf.clear();
            return;
        }
    }
    for token in tokenize(buf) {
        let term = stem(&token);
        if !term.is_empty() {
            out.push(QueryToken::Term(term));
        }
    }
    buf.clear();
}

/// Synthesize AND between a `TERM|RPAREN` on the left and a
/// `TERM|LPAREN|NOT` on the right.
fn insert_implicit_and(raw: Vec<QueryToken>) -> Vec<QueryToken> {
    let mut out = Vec::with_capacity(raw.len() * 2);
    let mut iter = raw.into_iter().peekable();
    while let Some(tok) = iter.next() {
        let left = matches!(tok, QueryToken::Term(_) | QueryToken::RParen);
        out.push(tok);
        if let Some(next) = iter.peek() {
            let right = matches!(
                next,
                QueryToken::Term(_) | QueryToken::LParen | QueryToken::Not
            );
            if left && right {
                out.push(QueryToken::And);
            }
        }
    }
    out
}

/// Lex a query into tokens with implicit ANDs already inserted.
pub fn lex(query: &str) -> Vec<QueryToken> {
    let mut raw = Vec::new();
    let mut buf = String::new();
    for ch in query.chars() {
        match ch {
            '(' => {
                flush_word(&mut buf, &mut raw);
                raw.push(QueryToken::LParen);
            }
            ')' => {
                flush_word(&mut buf, &mut raw);
                raw.push(QueryToken::RParen);
            }
            c if c.is_whitespace() => flush_word(&mut buf, &mut raw),
            c => buf.push(c),
        }
    }
    flush_word(&mut buf, &mut raw);
    insert_implicit_and(raw)
}

/// Shunting-yard conversion to postfix. Equal precedence pops only for
/// the left-associative operators, keeping NOT right-associative.
/// Unmatched opens are discarded; unmatched closes drain the stack.
pub fn to_postfix(tokens: Vec<QueryToken>) -> Vec<QueryToken> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut stack: Vec<QueryToken> = Vec::new();

    for tok in tokens {
        match tok {
            QueryToken::Term(_) => out.push(tok),
            QueryToken::And | QueryToken::Or | QueryToken::Not => {
                let prec = tok.precedence();
                while let Some(top) = stack.last() {
                    if !top.is_operator() {
                        break;
                    }
                    let pop = top.precedence() > prec
                        || (top.precedence() == prec && tok != QueryToken::Not);
                    if !pop {
                        break;
                    }
                    if let Some(op) = stack.pop() {
                        out.push(op);
                    }
                }
                stack.push(tok);
            }
            QueryToken::LParen => stack.push(tok),
            QueryToken::RParen => {
                while let Some(top) = stack.pop() {
                    if top == QueryToken::LParen {
                        break;
                    }
                    out.push(top);
                }
            }
        }
    }
    while let Some(top) = stack.pop() {
        if top != QueryToken::LParen {
            out.push(top);
        }
    }
    out
}

/// Compile a query string to postfix form.
pub fn parse(query: &str) -> Vec<QueryToken> {
    to_postfix(lex(query))
}
