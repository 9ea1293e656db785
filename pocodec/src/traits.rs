//! Traits shared by the parser, the writer and translation backends.

use std::{
    fs,
    io::{BufRead, Read},
    path::Path,
};

use crate::error::Error;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A trait for parsing a catalog from one file or any other text source.
///
/// # Example
///
/// ```rust,no_run
/// use pocodec::{Catalog, traits::Parser};
/// let catalog = Catalog::read_from("locale/fr.po")?;
/// println!("{} entries", catalog.entries.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from an ordered sequence of raw lines (without line terminators).
    fn from_lines(lines: Vec<String>) -> Self
    where
        Self: Sized;

    /// Parse from any reader.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_str(&text)
    }

    /// Parse from file path.
    ///
    /// The file is decoded with BOM detection, so UTF-16 catalogs read the same
    /// as UTF-8 ones. A UTF-8 BOM stays at the start of the decoded text.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let bytes = fs::read(path)?;
        let mut decoded = String::new();
        if bytes.starts_with(UTF8_BOM) {
            decoded.push('\u{feff}');
        }
        encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(bytes.as_slice())
            .read_to_string(&mut decoded)?;
        Self::from_str(&decoded)
    }

    /// Parse from a string. `\n` and `\r\n` both end a line.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Ok(Self::from_lines(s.lines().map(str::to_string).collect()))
    }
}

/// The translation capability consumed by the writer.
///
/// Implementations receive plain (unescaped) text and return plain text.
pub trait Translator {
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
    -> Result<String, Error>;
}

impl<F> Translator for F
where
    F: Fn(&str, &str, &str) -> Result<String, Error>,
{
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        self(text, source_lang, target_lang)
    }
}
