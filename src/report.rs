//! Resúmenes de archivo y comparación antes/después de una limpieza.

use crate::category::{FileCategory, mime_type};
use crate::config::EraserConfig;
use crate::hashing::file_hash;
use crate::reader::read_metadata_with;
use crate::record::MetadataRecord;
use crate::stripper::StrippedFile;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const UNITS: [&str; 5] = ["bytes", "KiB", "MiB", "GiB", "TiB"];

#[derive(Clone, Debug, Serialize)]
pub struct FileSummary {
    pub path: PathBuf,
    pub category: Option<FileCategory>,
    pub mime_type: Option<String>,
    pub size: String,
    pub modified: String,
    pub sha256: String,
}

impl FileSummary {
    pub fn of(path: &Path) -> Self {
        let metadata = fs::metadata(path).ok();
        Self {
            path: path.to_path_buf(),
            category: FileCategory::detect(path),
            mime_type: mime_type(path),
            size: metadata
                .as_ref()
                .map(|meta| format_size(meta.len()))
                .unwrap_or_else(|| "No disponible".to_string()),
            modified: metadata
                .and_then(|meta| meta.modified().ok())
                .map(|time| {
                    DateTime::<Local>::from(time)
                        .format("%Y-%m-%d %H:%M:%S %Z")
                        .to_string()
                })
                .unwrap_or_else(|| "No disponible".to_string()),
            sha256: file_hash(path),
        }
    }
}

/// Lo que muestra `inspect`.
#[derive(Clone, Debug, Serialize)]
pub struct InspectionReport {
    pub file: FileSummary,
    pub metadata: MetadataRecord,
}

impl InspectionReport {
    pub fn build(path: &Path, config: &EraserConfig) -> Self {
        Self {
            file: FileSummary::of(path),
            metadata: read_metadata_with(path, config),
        }
    }
}

/// Metadata antes y después de limpiar un archivo.
#[derive(Clone, Debug, Serialize)]
pub struct ErasureReport {
    pub source: FileSummary,
    pub cleaned: FileSummary,
    pub before: MetadataRecord,
    pub after: MetadataRecord,
}

impl ErasureReport {
    /// `before` se pasa leído de antemano; `after` se lee de la salida.
    pub fn build(stripped: &StrippedFile, before: MetadataRecord, config: &EraserConfig) -> Self {
        Self {
            source: FileSummary::of(&stripped.input),
            cleaned: FileSummary::of(&stripped.output),
            before,
            after: read_metadata_with(&stripped.output, config),
        }
    }

    /// Campos presentes antes y ausentes en la copia limpia.
    pub fn removed_fields(&self) -> Vec<&str> {
        if self.before.is_sentinel() {
            return Vec::new();
        }
        self.before
            .iter()
            .map(|field| field.name.as_str())
            .filter(|name| !self.after.contains(name))
            .collect()
    }

    /// Campos de metadata real que siguen en la copia limpia.
    pub fn remaining_fields(&self) -> Vec<&str> {
        if self.after.is_sentinel() {
            return Vec::new();
        }
        self.after.iter().map(|field| field.name.as_str()).collect()
    }
}

pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{bytes} bytes"),
        _ => format!("{value:.2} {} ({bytes} bytes)", UNITS[unit]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestResult, write_pdf};
    use tempfile::tempdir;

    #[test]
    fn sizes_switch_units_past_1024() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KiB (2048 bytes)");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MiB (5242880 bytes)");
    }

    #[test]
    fn erasure_report_lists_removed_fields() -> TestResult {
        let dir = tempdir()?;
        let source = dir.path().join("report.pdf");
        write_pdf(&source, 1, &[("Title", "Informe"), ("Author", "Ana")])?;
        let config = EraserConfig {
            output_root: Some(dir.path().to_path_buf()),
            ..EraserConfig::default()
        };

        let before = read_metadata_with(&source, &config);
        let stripped = crate::stripper::strip_metadata_with(&source, &config)?;
        let report = ErasureReport::build(&stripped, before, &config);

        assert_eq!(report.removed_fields(), ["Title", "Author"]);
        assert!(report.remaining_fields().is_empty());
        assert_eq!(report.cleaned.category, Some(FileCategory::Pdf));
        assert_ne!(report.source.sha256, report.cleaned.sha256);
        Ok(())
    }
}
