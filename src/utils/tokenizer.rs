//! Unicode-aware tokenizer for mixed Cyrillic/Latin text.
//!
//! Segments a UTF-8 string into normalized surface forms: ASCII letters are
//! lowercased, Cyrillic uppercase folds to lowercase, and ё becomes е.
//! A hyphen or apostrophe flanked by word characters keeps a compound
//! together; each compound additionally yields a joiner-free form and its
//! individual parts. Runs that look like URLs or email addresses are
//! skipped up to the next whitespace.

use ahash::AHashSet;

/// Length bounds in characters for a compound token or a sub-part.
const MIN_CHARS: usize = 2;
const MAX_CHARS: usize = 50;

/// Byte-length bounds applied during the final de-duplication pass.
const MIN_BYTES: usize = 2;
const MAX_BYTES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CpClass {
    /// ASCII alphanumeric or Cyrillic letter.
    Word,
    /// Hyphen or apostrophe, ASCII or typographic.
    Joiner,
    /// Everything else acts as a separator.
    Other,
}

/// One classified code point of the input.
#[derive(Debug, Clone, Copy)]
struct Cp {
    class: CpClass,
    /// Normalized form: lowercased, ё→е, dashes→`-`, right quote→`'`.
    folded: char,
    /// Bytes consumed in the input.
    len: usize,
}

fn read_cp(rest: &str) -> Cp {
    let ch = match rest.chars().next() {
        Some(c) => c,
        None => {
            return Cp {
                class: CpClass::Other,
                folded: '\0',
                len: 1,
            }
        }
    };
    let len = ch.len_utf8();
    let (class, folded) = match ch {
        '-' | '\u{2013}' | '\u{2014}' => (CpClass::Joiner, '-'),
        '\'' | '\u{2019}' => (CpClass::Joiner, '\''),
        'a'..='z' | '0'..='9' => (CpClass::Word, ch),
        'A'..='Z' => (CpClass::Word, ch.to_ascii_lowercase()),
        'а'..='я' => (CpClass::Word, ch),
        // А..Я and а..я sit 0x20 apart in the BMP
        'А'..='Я' => (
            CpClass::Word,
            char::from_u32(ch as u32 + 0x20).unwrap_or(ch),
        ),
        'Ё' | 'ё' => (CpClass::Word, 'е'),
        _ => (CpClass::Other, ch),
    };
    Cp { class, folded, len }
}

fn is_url_start(text: &str, i: usize) -> bool {
    let rest = &text.as_bytes()[i..];
    rest.starts_with(b"http://") || rest.starts_with(b"https://") || rest.starts_with(b"www.")
}

fn skip_to_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// In-flight compound token: the joined form, the joiner-free form, and
/// the parts between joiners, with character counts tracked separately
/// from byte lengths.
#[derive(Default)]
struct Compound {
    token: String,
    flat: String,
    parts: Vec<String>,
    part: String,
    token_chars: usize,
    part_chars: usize,
    too_long: bool,
    has_any: bool,
}

impl Compound {
    fn push_word(&mut self, ch: char) {
        self.has_any = true;
        if !self.too_long {
            self.token.push(ch);
            self.flat.push(ch);
        }
        self.part.push(ch);
        self.token_chars += 1;
        self.part_chars += 1;
        if self.token_chars > MAX_CHARS {
            self.too_long = true;
        }
    }

    fn push_joiner(&mut self, ch: char) {
        if !self.too_long {
            self.token.push(ch);
        }
        self.flush_part();
        self.token_chars += 1;
        if self.token_chars > MAX_CHARS {
            self.too_long = true;
        }
    }

    fn flush_part(&mut self) {
        if self.part_chars >= MIN_CHARS && self.part_chars <= MAX_CHARS {
            self.parts.push(std::mem::take(&mut self.part));
        } else {
            self.part.clear();
        }
        self.part_chars = 0;
    }

    /// Drop the in-flight compound without emitting anything. Used when an
    /// elided URL/email run swallows the token under assembly.
    fn discard(&mut self) {
        self.token.clear();
        self.flat.clear();
        self.parts.clear();
        self.part.clear();
        self.token_chars = 0;
        self.part_chars = 0;
        self.too_long = false;
        self.has_any = false;
    }

    /// Emit the finished compound: joined form, then the flat form when it
    /// differs, then the parts left to right. An over-long compound
    /// suppresses the joined and flat forms but still emits its parts.
    fn flush_token(&mut self, out: &mut Vec<String>) {
        if !self.has_any {
            return;
        }
        self.flush_part();

        let emit_joined =
            !self.too_long && self.token_chars >= MIN_CHARS && self.token_chars <= MAX_CHARS;
        let emit_flat = !self.too_long && self.flat != self.token && self.flat.len() >= MIN_BYTES;

        if emit_joined {
            out.push(self.token.clone());
        }
        if emit_flat {
            out.push(std::mem::take(&mut self.flat));
        }
        out.append(&mut self.parts);

        self.token.clear();
        self.flat.clear();
        self.has_any = false;
        self.token_chars = 0;
        self.too_long = false;
    }
}

/// Split `text` into normalized surface forms, first occurrence kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut out: Vec<String> = Vec::with_capacity(64);
    let mut acc = Compound::default();

    let mut i = 0;
    while i < bytes.len() {
        if is_url_start(text, i) || bytes[i] == b'@' {
            acc.discard();
            i = skip_to_whitespace(bytes, i);
            continue;
        }

        let cp = read_cp(&text[i..]);
        match cp.class {
            CpClass::Word => acc.push_word(cp.folded),
            CpClass::Joiner => {
                // Keep the joiner only when a word character follows and a
                // part is already open; otherwise it delimits.
                let j = i + cp.len;
                let next_is_word = j < bytes.len()
                    && !is_url_start(text, j)
                    && bytes[j] != b'@'
                    && read_cp(&text[j..]).class == CpClass::Word;
                if acc.has_any && acc.part_chars > 0 && next_is_word {
                    acc.push_joiner(cp.folded);
                } else {
                    acc.flush_token(&mut out);
                }
            }
            CpClass::Other => acc.flush_token(&mut out),
        }
        i += cp.len;
    }
    acc.flush_token(&mut out);

    // First-occurrence de-dup with byte-length bounds.
    let keep: Vec<bool> = {
        let mut seen: AHashSet<&str> = AHashSet::with_capacity(out.len());
        out.iter()
            .map(|t| t.len() >= MIN_BYTES && t.len() <= MAX_BYTES && seen.insert(t.as_str()))
            .collect()
    };
    let mut flags = keep.into_iter();
    out.retain(|_| flags.next().unwrap_or(false));
    out
}
