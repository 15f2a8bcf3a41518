//! Reconstrucción de imágenes a partir de sus píxeles.

use crate::config::EraserConfig;
use crate::error::{EraserError, Result};
use crate::reader::exif_record;
use image::codecs::jpeg::JpegEncoder;
use image::{GenericImageView, ImageEncoder, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decodifica `source` y escribe en `target` solo el búfer de píxeles, con
/// el mismo tipo de color y dimensiones. Perfiles ICC y fragmentos
/// auxiliares se pierden junto con el EXIF.
pub fn strip_image(source: &Path, target: &Path, config: &EraserConfig) -> Result<()> {
    let reader = ImageReader::open(source)?.with_guessed_format()?;
    let source_format = reader.format();
    let img = reader.decode()?;

    let format = ImageFormat::from_path(target)
        .ok()
        .or(source_format)
        .ok_or_else(|| EraserError::UnsupportedFile {
            path: source.to_path_buf(),
        })?;

    let (width, height) = img.dimensions();
    let color = img.color();
    let pixels = img.as_bytes();
    log::debug!(
        "Reconstruyendo {width}x{height} {color:?} como {format:?} en `{}`",
        target.display()
    );

    let mut file = BufWriter::new(File::create(target)?);
    match format {
        ImageFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut file, config.jpeg_quality).write_image(
                pixels,
                width,
                height,
                color.into(),
            )?;
        }
        _ => image::write_buffer_with_format(&mut file, pixels, width, height, color, format)?,
    }
    file.flush()?;

    if !verify_image_metadata_clean(target)? {
        return Err(EraserError::MetadataSurvived {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

/// Comprueba que la imagen carece de campos EXIF residuales.
pub fn verify_image_metadata_clean(path: &Path) -> Result<bool> {
    Ok(exif_record(path)?.is_empty())
}
