//! Errores de la biblioteca.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EraserError>;

#[derive(Error, Debug)]
pub enum EraserError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de imagen: {0}")]
    Image(#[from] image::ImageError),
    #[error("Error leyendo EXIF: {0}")]
    Exif(#[from] exif::Error),
    #[error("Error leyendo PNG: {0}")]
    Png(#[from] png::DecodingError),
    #[error("Error de PDF: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Error de JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Ruta inválida `{}`: {reason}", path.display())]
    InvalidPath { path: PathBuf, reason: String },
    #[error("Formato no soportado para eliminación de metadata: `{}`", path.display())]
    UnsupportedFile { path: PathBuf },
    #[error("No se encontró el ejecutable `{tool}`")]
    ToolMissing { tool: String },
    /// La herramienta externa terminó con un estado distinto de cero.
    #[error("`{tool}` terminó con error ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },
    /// La limpieza no produjo una copia válida.
    #[error("La limpieza con `{tool}` falló ({status}): {stderr}")]
    StripFailed {
        tool: String,
        status: String,
        stderr: String,
    },
    #[error("La metadata sigue presente en `{}`", path.display())]
    MetadataSurvived { path: PathBuf },
}

impl EraserError {
    /// Reclasifica el fallo de una herramienta externa como fallo de limpieza.
    pub fn into_strip_failure(self) -> Self {
        match self {
            Self::ToolFailed {
                tool,
                status,
                stderr,
            } => Self::StripFailed {
                tool,
                status,
                stderr,
            },
            other => other,
        }
    }
}
