//! Exportación de la comparación antes/después en distintos formatos.

use crate::error::{EraserError, Result};
use crate::record::MetadataRecord;
use crate::report::ErasureReport;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Json,
    Txt,
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "txt" | "text" => Some(ExportFormat::Txt),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }

    /// Formato implícito en la extensión de `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .ok_or_else(|| EraserError::InvalidPath {
                path: path.to_path_buf(),
                reason: "la extensión debe ser json, txt o csv".to_string(),
            })
    }
}

pub fn export_report(report: &ErasureReport, format: ExportFormat, path: &Path) -> Result<()> {
    match format {
        ExportFormat::Json => export_json(report, path),
        ExportFormat::Txt => export_txt(report, path),
        ExportFormat::Csv => export_csv(report, path),
    }
}

fn export_json(report: &ErasureReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

fn export_txt(report: &ErasureReport, path: &Path) -> Result<()> {
    let mut output = String::new();
    output.push_str("Reporte de limpieza de metadata\n");
    output.push_str("===============================\n\n");
    output.push_str(&format!("Original: {}\n", report.source.path.display()));
    output.push_str(&format!("Limpio:   {}\n\n", report.cleaned.path.display()));

    append_txt_section(&mut output, "Metadata antes", &report.before);
    append_txt_section(&mut output, "Metadata después", &report.after);

    fs::write(path, output)?;
    Ok(())
}

fn append_txt_section(output: &mut String, title: &str, record: &MetadataRecord) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count()));
    output.push('\n');

    for field in record.iter() {
        output.push_str(&format!("- {}: {}\n", field.name, field.value));
    }
    output.push('\n');
}

fn export_csv(report: &ErasureReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer
        .write_record(["etapa", "campo", "valor"])
        .map_err(csv_error)?;

    for (stage, record) in [("antes", &report.before), ("despues", &report.after)] {
        for field in record.iter() {
            writer
                .write_record([stage, field.name.as_str(), field.value.as_str()])
                .map_err(csv_error)?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn csv_error(error: csv::Error) -> EraserError {
    match error.into_kind() {
        csv::ErrorKind::Io(error) => EraserError::Io(error),
        other => EraserError::Io(std::io::Error::other(format!("{other:?}"))),
    }
}
