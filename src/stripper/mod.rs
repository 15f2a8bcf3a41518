//! Eliminación de metadata según la categoría del archivo.

mod image;
mod output;
mod pdf;
mod video;

use crate::category::FileCategory;
use crate::config::EraserConfig;
use crate::error::{EraserError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use self::image::verify_image_metadata_clean;
pub use self::output::output_path_for;
pub use self::pdf::verify_pdf_metadata_clean;

/// Resultado de una limpieza exitosa.
#[derive(Clone, Debug, Serialize)]
pub struct StrippedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub category: FileCategory,
}

/// Limpia `path` con la configuración por defecto.
pub fn strip_metadata(path: &Path) -> Result<StrippedFile> {
    strip_metadata_with(path, &EraserConfig::default())
}

/// Escribe una copia sin metadata en `CleanedFiles/<nombre>_cleaned<.ext>`.
///
/// El archivo final solo aparece si la operación completa tuvo éxito; una
/// segunda llamada sobre la misma entrada sobrescribe la misma salida.
pub fn strip_metadata_with(path: &Path, config: &EraserConfig) -> Result<StrippedFile> {
    if !path.is_file() {
        return Err(EraserError::InvalidPath {
            path: path.to_path_buf(),
            reason: "no es un archivo legible".to_string(),
        });
    }

    let category = FileCategory::detect(path).ok_or_else(|| EraserError::UnsupportedFile {
        path: path.to_path_buf(),
    })?;

    let output = output::output_path_for(path, config)?;
    let scratch = output::scratch_path_for(&output);
    log::debug!(
        "Limpiando `{}` ({category}) hacia `{}`",
        path.display(),
        output.display()
    );

    let result = match category {
        FileCategory::Image => image::strip_image(path, &scratch, config),
        FileCategory::Pdf => pdf::strip_pdf(path, &scratch),
        FileCategory::Video => video::strip_video(path, &scratch, config),
    };
    output::commit_scratch(&scratch, &output, result)?;

    log::info!("Metadata eliminada: `{}`", output.display());
    Ok(StrippedFile {
        input: path.to_path_buf(),
        output,
        category,
    })
}
