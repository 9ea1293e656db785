#![forbid(unsafe_code)]
//! Round-trip gettext PO catalog toolkit for Rust.
//!
//! Parses `.po` files into a [`Catalog`] that keeps every source line, then
//! rewrites the catalog through a [`Translator`], replacing only the
//! `msgstr` fields that are empty or fuzzy. Everything else is reproduced
//! byte for byte.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pocodec::{Catalog, CatalogWriter, Error, traits::Parser};
//!
//! let catalog = Catalog::read_from("locale/fr.po")?;
//! let translator = |text: &str, _from: &str, _to: &str| -> Result<String, Error> {
//!     Ok(text.to_string())
//! };
//! let report = CatalogWriter::new(&translator, "en", "fr")
//!     .write_to(&catalog, "locale/fr_output.po")?;
//! println!("{} fields translated", report.translated);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod comment;
pub mod error;
pub mod escape;
pub mod parser;
pub mod segment;
pub mod traits;
pub mod translator;
pub mod types;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    comment::{Comment, CommentKind},
    error::Error,
    parser::FieldKind,
    traits::{Parser, Translator},
    translator::Chunked,
    types::{Catalog, CatalogStats, Entry, Header, Layout, LineEnding},
    writer::{CatalogWriter, WriteReport},
};
