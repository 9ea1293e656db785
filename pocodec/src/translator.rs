//! Adapters around the [`Translator`] capability.

use crate::{
    error::Error,
    segment::{split_into_paragraphs, split_into_sentences},
    traits::Translator,
};

/// Request size, in bytes, accepted by typical machine translation services.
pub const DEFAULT_MAX_LEN: usize = 9000;

/// Splits oversized requests before handing them to the inner translator.
///
/// Text over `max_len` bytes is translated paragraph by paragraph; a paragraph
/// still over the limit is translated sentence by sentence. A single sentence
/// over the limit is an error.
#[derive(Debug, Clone)]
pub struct Chunked<T> {
    inner: T,
    max_len: usize,
}

impl<T: Translator> Chunked<T> {
    pub fn new(inner: T) -> Self {
        Chunked {
            inner,
            max_len: DEFAULT_MAX_LEN,
        }
    }

    pub fn with_max_len(inner: T, max_len: usize) -> Result<Self, Error> {
        if max_len == 0 {
            return Err(Error::InvalidInput(
                "chunk length must be positive".to_string(),
            ));
        }
        Ok(Chunked { inner, max_len })
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn translate_paragraph(
        &self,
        paragraph: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        if paragraph.len() <= self.max_len {
            return self.inner.translate(paragraph, source_lang, target_lang);
        }

        let mut translated = Vec::new();
        for sentence in split_into_sentences(paragraph) {
            if sentence.len() > self.max_len {
                return Err(Error::translation_error(
                    format!(
                        "sentence of {} bytes exceeds the {} byte request limit",
                        sentence.len(),
                        self.max_len
                    ),
                    None,
                ));
            }
            translated.push(self.inner.translate(&sentence, source_lang, target_lang)?);
        }
        Ok(translated.join(" "))
    }
}

impl<T: Translator> Translator for Chunked<T> {
    fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, Error> {
        if text.len() <= self.max_len {
            return self.inner.translate(text, source_lang, target_lang);
        }

        let mut translated = Vec::new();
        for paragraph in split_into_paragraphs(text) {
            if paragraph.is_empty() {
                translated.push(String::new());
                continue;
            }
            translated.push(self.translate_paragraph(paragraph, source_lang, target_lang)?);
        }
        Ok(translated.join("\n\n"))
    }
}
