//! Per-file translation jobs.

use pocodec::{Catalog, CatalogWriter, Parser, Translator, WriteReport};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::FileConfig;

/// Where the translated copy of `path` is written: `<dir>/<stem>_output.po`.
pub fn output_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    path.with_file_name(format!("{}_output.po", stem))
}

/// Parses one catalog, translates it and writes the sibling output file.
pub fn process_file<T: Translator>(
    file: &FileConfig,
    translator: &T,
    source_lang: &str,
) -> Result<WriteReport, String> {
    info!("processing {} ({} -> {})", file.path, source_lang, file.lang);

    let catalog = Catalog::read_from(&file.path)
        .map_err(|e| format!("Error reading PO file {}: {}", file.path, e))?;
    let output = output_path(&file.path);

    let report = CatalogWriter::new(translator, source_lang, file.lang.as_str())
        .write_to(&catalog, &output)
        .map_err(|e| format!("Error writing PO file {}: {}", output.display(), e))?;

    info!(
        "wrote {} ({} translated, {} failed)",
        output.display(),
        report.translated,
        report.failed
    );
    Ok(report)
}

/// Replaces the original catalog with its translated output.
pub fn rewrite_main_file(file: &FileConfig) -> Result<(), String> {
    let output = output_path(&file.path);
    fs::rename(&output, &file.path).map_err(|e| {
        format!(
            "Error replacing {} with {}: {}",
            file.path,
            output.display(),
            e
        )
    })
}

/// Outcome of a whole batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Processes every file in order. A failing file is recorded and the batch
/// moves on.
pub fn process_all<T: Translator>(
    files: &[FileConfig],
    translator: &T,
    source_lang: &str,
    rewrite: bool,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for file in files {
        let result = process_file(file, translator, source_lang).and_then(|report| {
            if rewrite {
                rewrite_main_file(file)?;
            }
            Ok(report)
        });

        match result {
            Ok(report) => {
                println!(
                    "✅ Processed {} ({} translated, {} kept as source)",
                    file.path, report.translated, report.failed
                );
                summary.succeeded.push(file.path.clone());
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                summary.failed.push((file.path.clone(), e));
            }
        }
    }

    summary
}
