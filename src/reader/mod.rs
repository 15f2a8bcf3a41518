//! Lectura de metadata según la categoría del archivo.

mod image;
mod pdf;
mod video;

use crate::category::FileCategory;
use crate::config::EraserConfig;
use crate::record::MetadataRecord;
use std::path::Path;

pub use self::image::exif_record;
pub use self::pdf::NO_PDF_METADATA;
pub(crate) use self::pdf::info_dictionary;
pub use self::video::{NO_VIDEO_METADATA, tags_from_probe_json};

/// Lee la metadata de `path` con la configuración por defecto.
pub fn read_metadata(path: &Path) -> MetadataRecord {
    read_metadata_with(path, &EraserConfig::default())
}

/// Devuelve la metadata encontrada o una entrada centinela (`info`/`error`).
/// Nunca falla.
pub fn read_metadata_with(path: &Path, config: &EraserConfig) -> MetadataRecord {
    let category = FileCategory::detect(path);
    log::debug!("Leyendo `{}` como {:?}", path.display(), category);

    let record = match category {
        Some(FileCategory::Image) => image::read_image_metadata(path),
        Some(FileCategory::Pdf) => pdf::read_pdf_metadata(path),
        Some(FileCategory::Video) => video::read_video_metadata(path, config),
        None => MetadataRecord::new(),
    };

    record.or_no_metadata()
}
