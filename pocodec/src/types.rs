//! The PO catalog model.
//! The parser fills these types line by line; the writer only reads them.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    comment::{Comment, CommentKind},
    escape::unescape,
};

lazy_static! {
    static ref NPLURALS_REGEX: Regex = Regex::new(r"nplurals\s*=\s*(\d+)").unwrap();
}

/// A parsed PO file: the header block followed by its entries in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    pub header: Header,

    #[serde(default)]
    pub entries: Vec<Entry>,

    #[serde(default)]
    pub layout: Layout,
}

/// Line terminator of a catalog file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Byte-level conventions of the file a catalog was read from. The writer
/// reproduces them so untouched lines come back byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Layout {
    pub line_ending: LineEnding,
    /// Whether the last line was terminated.
    pub final_newline: bool,
    /// Whether the text started with a byte-order mark.
    pub bom: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            line_ending: LineEnding::Lf,
            final_newline: true,
            bom: false,
        }
    }
}

impl Layout {
    /// Detects the conventions of `text`. Any `\r\n` makes the whole file
    /// CRLF.
    pub fn detect(text: &str) -> Self {
        Layout {
            line_ending: if text.contains("\r\n") {
                LineEnding::CrLf
            } else {
                LineEnding::Lf
            },
            final_newline: text.is_empty() || text.ends_with('\n'),
            bom: text.starts_with('\u{feff}'),
        }
    }
}

impl Catalog {
    /// Finds the first entry with the given msgid and no context.
    pub fn find_entry(&self, msgid: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.msgid == msgid && e.msgctxt.is_empty())
    }

    /// Finds the first entry with the given context and msgid.
    pub fn find_entry_with_context(&self, msgctxt: &str, msgid: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.msgid == msgid && e.msgctxt == msgctxt)
    }

    /// Entries the writer will send to the translator.
    pub fn pending_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_message() && e.needs_translation())
    }

    /// Counts messages by translation state. Blocks without a msgid are skipped.
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();
        for entry in self.entries.iter().filter(|e| e.is_message()) {
            stats.total += 1;
            if entry.is_plural() {
                stats.plural += 1;
            }
            if entry.is_fuzzy {
                stats.fuzzy += 1;
            } else if entry.is_translated() {
                stats.translated += 1;
            } else {
                stats.untranslated += 1;
            }
        }
        stats
    }
}

/// Message counts of a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub translated: usize,
    pub untranslated: usize,
    pub fuzzy: usize,
    pub plural: usize,
}

impl CatalogStats {
    /// Share of translated messages, in percent. An empty catalog is complete.
    pub fn completion(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.translated as f64) * 100.0 / (self.total as f64)
        }
    }
}

/// The header block: everything up to and including the blank line that ends
/// the `msgid ""` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Header {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// `Key: value` pairs from the header msgstr. Informational only; output
    /// always comes from `raw_lines`.
    #[serde(default)]
    pub metadata: HashMap<String, String>,

    pub raw_lines: Vec<String>,
}

impl Header {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// The `Language` header value, if present and non-empty.
    pub fn language(&self) -> Option<&str> {
        self.get("Language").filter(|lang| !lang.is_empty())
    }

    /// The `nplurals` count declared in `Plural-Forms`.
    pub fn nplurals(&self) -> Option<usize> {
        let forms = self.get("Plural-Forms")?;
        NPLURALS_REGEX
            .captures(forms)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

/// One catalog record with its verbatim source lines.
///
/// Field values are stored exactly as written between the quotes, escapes
/// included; continuation lines are concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// `msgctxt`; empty when the entry has no context.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub msgctxt: String,

    pub msgid: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub msgid_plural: String,

    /// Empty means not yet translated.
    pub msgstr: String,

    /// `msgstr[N]` values in encounter order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub msgstr_plural: Vec<String>,

    pub is_fuzzy: bool,

    /// Source lines of this entry, including the blank separator line that
    /// precedes it (every entry but the first starts with one).
    pub raw_lines: Vec<String>,
}

impl Entry {
    /// Whether the writer will translate anything in this entry. A plural
    /// entry is pending when it is fuzzy or any of its forms is empty; its
    /// singular `msgstr` is not consulted.
    pub fn needs_translation(&self) -> bool {
        if self.is_fuzzy {
            return true;
        }
        if self.msgstr_plural.is_empty() {
            self.msgstr.is_empty()
        } else {
            self.msgstr_plural.iter().any(String::is_empty)
        }
    }

    /// Whether the plural form in encounter slot `slot` will be translated.
    pub fn slot_needs_translation(&self, slot: usize) -> bool {
        self.is_fuzzy || self.msgstr_plural.get(slot).is_none_or(String::is_empty)
    }

    pub fn is_plural(&self) -> bool {
        !self.msgid_plural.is_empty() || !self.msgstr_plural.is_empty()
    }

    /// Whether the block carries a source string at all. Trailing comment-only
    /// blocks do not.
    pub fn is_message(&self) -> bool {
        !self.msgid.is_empty() || !self.msgid_plural.is_empty()
    }

    /// Translated and not fuzzy. Plural entries need every form filled in.
    pub fn is_translated(&self) -> bool {
        if self.is_fuzzy {
            return false;
        }
        if self.is_plural() {
            !self.msgstr_plural.is_empty() && self.msgstr_plural.iter().all(|s| !s.is_empty())
        } else {
            !self.msgstr.is_empty()
        }
    }

    /// All flags from the entry's flag comments, in order.
    pub fn flags(&self) -> Vec<&str> {
        self.comments.iter().flat_map(Comment::flags).collect()
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags().contains(&flag)
    }

    /// Comments of one kind, in order.
    pub fn comments_of(&self, kind: CommentKind) -> impl Iterator<Item = &Comment> {
        self.comments.iter().filter(move |c| c.kind == kind)
    }

    /// `msgid` with escape sequences resolved.
    pub fn msgid_text(&self) -> String {
        unescape(&self.msgid)
    }

    /// `msgid_plural` with escape sequences resolved.
    pub fn msgid_plural_text(&self) -> String {
        unescape(&self.msgid_plural)
    }
}
