//! Rewrites a parsed catalog, translating only the fields that need it.
//!
//! The header and every line that is not a translation target are replayed
//! from the raw lines exactly as read. Fuzzy markers are dropped from flag
//! comments, and `msgstr` lines of untranslated or fuzzy entries are replaced
//! by freshly translated, re-wrapped strings.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::{debug, warn};

use crate::{
    error::Error,
    escape::escape,
    parser::{FieldKind, is_blank, is_continuation},
    segment::{LINE_WIDTH, split_into_chunks},
    traits::Translator,
    types::{Catalog, Entry},
};

/// Counts of translation calls made while writing a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Fields replaced with a translation.
    pub translated: usize,
    /// Fields where the translator failed and the source text was kept.
    pub failed: usize,
}

/// Outcome of rewriting a `#,` flag line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagLine {
    /// No `fuzzy` flag; emit the line as read.
    Unchanged,
    /// `fuzzy` removed, other flags kept.
    Rewritten(String),
    /// `fuzzy` was the only flag; the line disappears.
    Removed,
}

/// Drops the `fuzzy` flag from a `#,` comment line.
pub fn strip_fuzzy(line: &str) -> FlagLine {
    let indent = leading_indent(line);
    let payload = line.trim_start().strip_prefix("#,").unwrap_or_default();

    let flags: Vec<&str> = payload.split(',').map(str::trim).collect();
    let kept: Vec<&str> = flags.iter().copied().filter(|f| *f != "fuzzy").collect();

    if kept.len() == flags.len() {
        FlagLine::Unchanged
    } else if kept.is_empty() {
        FlagLine::Removed
    } else {
        FlagLine::Rewritten(format!("{}#, {}", indent, kept.join(", ")))
    }
}

/// Formats `prefix` and `text` as one or more PO string lines.
///
/// Text whose escaped form fits in [`LINE_WIDTH`] characters stays on the
/// field line. Longer text starts with an empty string and continues with
/// one quoted line per chunk of at most [`LINE_WIDTH`] characters, broken
/// after spaces and newlines. The continuations concatenate to `text`.
pub fn write_multiline(prefix: &str, text: &str, indent: &str) -> Vec<String> {
    let escaped = escape(text);
    if escaped.chars().count() <= LINE_WIDTH {
        return vec![format!("{}{} \"{}\"", indent, prefix, escaped)];
    }

    let mut lines = vec![format!("{}{} \"\"", indent, prefix)];
    lines.extend(
        split_into_chunks(text, LINE_WIDTH)
            .iter()
            .map(|chunk| format!("{}\"{}\"", indent, escape(chunk))),
    );
    lines
}

/// Leading spaces and tabs of a line.
fn leading_indent(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(0);
    &line[..end]
}

/// The `[N]` label of a `msgstr[N]` line.
fn plural_label(line: &str) -> Option<&str> {
    let start = line.find('[')?;
    let end = line.find(']')?;
    (end > start).then(|| &line[start..=end])
}

/// Writes catalogs through a translation capability.
///
/// # Example
///
/// ```rust
/// use pocodec::{CatalogWriter, Catalog, Error, traits::Parser};
///
/// let catalog = Catalog::from_str("msgid \"Hello\"\nmsgstr \"\"\n")?;
/// let translator = |text: &str, _from: &str, _to: &str| -> Result<String, Error> {
///     Ok(text.to_uppercase())
/// };
/// let writer = CatalogWriter::new(&translator, "en", "fr");
/// let (lines, report) = writer.write_lines(&catalog);
/// assert_eq!(lines, vec!["msgid \"Hello\"", "msgstr \"HELLO\""]);
/// assert_eq!(report.translated, 1);
/// # Ok::<(), Error>(())
/// ```
pub struct CatalogWriter<'a, T: Translator> {
    translator: &'a T,
    source_lang: String,
    target_lang: String,
}

impl<'a, T: Translator> CatalogWriter<'a, T> {
    pub fn new(
        translator: &'a T,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        CatalogWriter {
            translator,
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }

    /// Produces the rewritten catalog as lines without terminators.
    pub fn write_lines(&self, catalog: &Catalog) -> (Vec<String>, WriteReport) {
        let mut out = catalog.header.raw_lines.clone();
        let mut report = WriteReport::default();
        for entry in &catalog.entries {
            self.write_entry(entry, &mut out, &mut report);
        }
        (out, report)
    }

    /// Writes the rewritten catalog and flushes the writer.
    ///
    /// Lines are joined with the catalog's own line ending; the BOM and the
    /// final newline are written only if the source had them.
    pub fn to_writer<W: Write>(
        &self,
        catalog: &Catalog,
        mut writer: W,
    ) -> Result<WriteReport, Error> {
        let (lines, report) = self.write_lines(catalog);
        let layout = &catalog.layout;
        let eol = layout.line_ending.as_str().as_bytes();

        if layout.bom {
            writer.write_all("\u{feff}".as_bytes())?;
        }
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                writer.write_all(eol)?;
            }
            writer.write_all(line.as_bytes())?;
        }
        if layout.final_newline && !lines.is_empty() {
            writer.write_all(eol)?;
        }
        writer.flush()?;
        Ok(report)
    }

    /// Creates (or truncates) `path` and writes the rewritten catalog to it.
    pub fn write_to<P: AsRef<Path>>(
        &self,
        catalog: &Catalog,
        path: P,
    ) -> Result<WriteReport, Error> {
        let file = File::create(path)?;
        self.to_writer(catalog, BufWriter::new(file))
    }

    fn write_entry(&self, entry: &Entry, out: &mut Vec<String>, report: &mut WriteReport) {
        let mut skip_next_blank = false;
        // Set on each field line: whether that field was replaced, in which
        // case its continuation lines are dropped.
        let mut replaced_field = false;
        let mut plural_slot = 0;

        for line in &entry.raw_lines {
            if skip_next_blank && is_blank(line) {
                skip_next_blank = false;
                continue;
            }

            let trimmed = line.trim_start();
            if trimmed.starts_with("#,") {
                match strip_fuzzy(line) {
                    FlagLine::Unchanged => out.push(line.clone()),
                    FlagLine::Rewritten(rewritten) => out.push(rewritten),
                    FlagLine::Removed => skip_next_blank = true,
                }
                continue;
            }
            if trimmed.starts_with('#') {
                out.push(line.clone());
                continue;
            }

            match FieldKind::of(trimmed) {
                Some(FieldKind::Str) => {
                    replaced_field = entry.needs_translation() && !entry.msgid.is_empty();
                    if replaced_field {
                        let text = self.translate_field(&entry.msgid_text(), report);
                        out.extend(write_multiline("msgstr", &text, leading_indent(line)));
                    } else {
                        out.push(line.clone());
                    }
                }
                Some(FieldKind::StrPlural) => {
                    let slot = plural_slot;
                    plural_slot += 1;
                    let has_source = !entry.msgid.is_empty() || !entry.msgid_plural.is_empty();
                    let label = plural_label(trimmed);
                    replaced_field =
                        entry.slot_needs_translation(slot) && has_source && label.is_some();
                    match label {
                        Some(label) if replaced_field => {
                            let source = if slot == 0 {
                                entry.msgid_text()
                            } else {
                                entry.msgid_plural_text()
                            };
                            let text = self.translate_field(&source, report);
                            let prefix = format!("msgstr{}", label);
                            out.extend(write_multiline(&prefix, &text, leading_indent(line)));
                        }
                        _ => out.push(line.clone()),
                    }
                }
                Some(_) => {
                    replaced_field = false;
                    out.push(line.clone());
                }
                None if replaced_field && is_continuation(trimmed) => {}
                None => out.push(line.clone()),
            }
        }
    }

    /// Translates one field, falling back to the source text on failure.
    fn translate_field(&self, source: &str, report: &mut WriteReport) -> String {
        match self
            .translator
            .translate(source, &self.source_lang, &self.target_lang)
        {
            Ok(translated) => {
                debug!(source, translated = %translated, target = %self.target_lang, "translated field");
                report.translated += 1;
                translated
            }
            Err(err) => {
                warn!("keeping source text {:?}: {}", source, err);
                report.failed += 1;
                source.to_string()
            }
        }
    }
}
