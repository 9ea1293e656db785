//! Line-oriented PO catalog parser.
//!
//! Parsing happens in two phases over the raw lines: the header block is cut
//! off first, then the remainder is segmented into entries at blank lines.
//! Nothing here fails: lines that fit no rule stay in the entry's raw lines
//! and are otherwise ignored.

use crate::{
    comment::Comment,
    error::Error,
    traits::Parser,
    types::{Catalog, Entry, Header, Layout},
};

/// The line that opens the header entry.
const HEADER_MARKER: &str = "msgid \"\"";

/// Which entry field a `msg*` line starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Context,
    Id,
    IdPlural,
    Str,
    StrPlural,
}

impl FieldKind {
    /// Classifies a field-start line by its most specific keyword. Leading
    /// whitespace is ignored.
    pub fn of(line: &str) -> Option<FieldKind> {
        let line = line.trim_start();
        if line.starts_with("msgctxt") {
            Some(FieldKind::Context)
        } else if line.starts_with("msgid_plural") {
            Some(FieldKind::IdPlural)
        } else if line.starts_with("msgid") {
            Some(FieldKind::Id)
        } else if line.starts_with("msgstr[") {
            Some(FieldKind::StrPlural)
        } else if line.starts_with("msgstr") {
            Some(FieldKind::Str)
        } else {
            None
        }
    }

    /// Whether the field holds a translation rather than source text.
    pub fn is_translation(&self) -> bool {
        matches!(self, FieldKind::Str | FieldKind::StrPlural)
    }

    /// Replaces the field with `value`, or opens a new plural slot.
    fn start(&self, entry: &mut Entry, value: &str) {
        match self {
            FieldKind::Context => entry.msgctxt = value.to_string(),
            FieldKind::Id => entry.msgid = value.to_string(),
            FieldKind::IdPlural => entry.msgid_plural = value.to_string(),
            FieldKind::Str => entry.msgstr = value.to_string(),
            FieldKind::StrPlural => entry.msgstr_plural.push(value.to_string()),
        }
    }

    /// Appends a continuation payload to the field.
    fn extend(&self, entry: &mut Entry, value: &str) {
        match self {
            FieldKind::Context => entry.msgctxt.push_str(value),
            FieldKind::Id => entry.msgid.push_str(value),
            FieldKind::IdPlural => entry.msgid_plural.push_str(value),
            FieldKind::Str => entry.msgstr.push_str(value),
            FieldKind::StrPlural => {
                if let Some(last) = entry.msgstr_plural.last_mut() {
                    last.push_str(value);
                }
            }
        }
    }
}

/// Whether a line is entirely whitespace.
pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether a line is a bare quoted continuation of the previous field.
pub(crate) fn is_continuation(line: &str) -> bool {
    line.trim_start().starts_with('"')
}

/// Returns the text between the first and the last double quote of a line,
/// or an empty string when there is no such pair.
pub fn extract_quoted(line: &str) -> &str {
    match (line.find('"'), line.rfind('"')) {
        (Some(start), Some(end)) if end > start => &line[start + 1..end],
        _ => "",
    }
}

/// Splits a header metadata line on its first colon.
///
/// Both sides are trimmed of whitespace and enclosing quotes; a trailing `\n`
/// escape is dropped from the value.
fn parse_metadata(content: &str) -> Option<(String, String)> {
    let (key, value) = content.split_once(':')?;
    let key = key.trim().trim_matches('"');
    let value = value.trim().trim_matches('"');
    let value = value.strip_suffix("\\n").unwrap_or(value).trim_end();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Phase 1: extracts the header block. Returns the index of the first line
/// after it.
///
/// Without a `msgid ""` line there is no header and every line is left for
/// the entry phase.
pub fn parse_header(lines: &[String]) -> (Header, usize) {
    let mut header = Header::default();

    let Some(marker) = lines
        .iter()
        .position(|line| line.trim_end() == HEADER_MARKER)
    else {
        return (header, 0);
    };

    let end = lines[marker..]
        .iter()
        .position(|line| is_blank(line))
        .map(|offset| marker + offset + 1)
        .unwrap_or(lines.len());

    header.raw_lines = lines[..end].to_vec();

    let mut in_msgstr = false;
    for line in &header.raw_lines {
        if line.starts_with('#') {
            header.comments.push(Comment::parse(line));
        } else if line.starts_with("msgstr") {
            in_msgstr = true;
        } else if in_msgstr && line.starts_with('"') {
            if let Some((key, value)) = parse_metadata(extract_quoted(line)) {
                header.metadata.insert(key, value);
            }
        }
    }

    (header, end)
}

/// Phase 2: segments the lines after the header into entries.
pub fn parse_entries(lines: &[String]) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut current = Entry::default();
    let mut raw_lines: Vec<String> = Vec::new();
    let mut field: Option<FieldKind> = None;

    for line in lines {
        if is_blank(line) {
            if !raw_lines.is_empty() {
                current.raw_lines = std::mem::take(&mut raw_lines);
                entries.push(std::mem::take(&mut current));
                field = None;
            }
            // The separator opens the next entry's block.
            raw_lines.push(line.clone());
            continue;
        }

        raw_lines.push(line.clone());
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            let comment = Comment::parse(trimmed);
            if comment.marks_fuzzy() {
                current.is_fuzzy = true;
            }
            current.comments.push(comment);
            continue;
        }

        if let Some(kind) = FieldKind::of(trimmed) {
            kind.start(&mut current, extract_quoted(trimmed));
            field = Some(kind);
        } else if is_continuation(trimmed) {
            if let Some(kind) = field {
                kind.extend(&mut current, extract_quoted(trimmed));
            }
        }
    }

    if !raw_lines.is_empty() {
        current.raw_lines = raw_lines;
        entries.push(current);
    }

    entries
}

impl Parser for Catalog {
    fn from_lines(lines: Vec<String>) -> Self {
        let (header, end) = parse_header(&lines);
        let entries = parse_entries(&lines[end..]);
        Catalog {
            header,
            entries,
            layout: Layout::default(),
        }
    }

    /// Records the line ending, final newline and BOM of `s` alongside the
    /// parsed lines.
    fn from_str(s: &str) -> Result<Self, Error> {
        let layout = Layout::detect(s);
        let body = s.strip_prefix('\u{feff}').unwrap_or(s);
        let mut catalog = Self::from_lines(body.lines().map(str::to_string).collect());
        catalog.layout = layout;
        Ok(catalog)
    }
}
