//! CLI library for testing purposes

pub mod backend;
pub mod config;
pub mod process;
pub mod validation;

pub use config::{Config, FileConfig};
pub use pocodec::Catalog;
