//! Detección del tipo MIME y de la categoría de archivo.

use infer::Infer;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Categorías de archivo sobre las que se sabe leer y eliminar metadata.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Pdf,
    Video,
}

impl FileCategory {
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime == "application/pdf" {
            Some(Self::Pdf)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Categoría del archivo según su tipo MIME, o `None` si no es reconocible.
    pub fn detect(path: &Path) -> Option<Self> {
        mime_type(path).and_then(|mime| Self::from_mime(&mime))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Imagen",
            Self::Pdf => "PDF",
            Self::Video => "Video",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Adivina el tipo MIME a partir de la extensión y, si no la reconoce,
/// del contenido del archivo.
pub fn mime_type(path: &Path) -> Option<String> {
    mime_from_extension(path)
        .map(str::to_string)
        .or_else(|| sniff_mime(path))
}

fn mime_from_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_lowercase();
    let mime = match extension.as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "mp4" | "m4v" => "video/mp4",
        "mov" | "qt" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "mpeg" | "mpg" => "video/mpeg",
        "txt" => "text/plain",
        "json" => "application/json",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(mime)
}

fn sniff_mime(path: &Path) -> Option<String> {
    let infer = Infer::new();
    infer
        .get_from_path(path)
        .ok()
        .flatten()
        .map(|kind| kind.mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn extension_decides_category() {
        assert_eq!(
            FileCategory::detect(Path::new("photo.JPG")),
            Some(FileCategory::Image)
        );
        assert_eq!(
            FileCategory::detect(Path::new("docs/report.pdf")),
            Some(FileCategory::Pdf)
        );
        assert_eq!(
            FileCategory::detect(Path::new("clip.mkv")),
            Some(FileCategory::Video)
        );
        assert_eq!(FileCategory::detect(Path::new("notes.txt")), None);
    }

    #[test]
    fn unknown_extension_falls_back_to_content() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("sin_extension");
        std::fs::write(&path, b"%PDF-1.5\n%\xE2\xE3\xCF\xD3\n")?;

        assert_eq!(mime_type(&path).as_deref(), Some("application/pdf"));
        assert_eq!(FileCategory::detect(&path), Some(FileCategory::Pdf));
        Ok(())
    }

    #[test]
    fn missing_file_without_extension_has_no_category() {
        assert_eq!(FileCategory::detect(Path::new("/no/existe/archivo")), None);
    }
}
