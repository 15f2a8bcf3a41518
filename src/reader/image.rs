//! Lectura de metadata EXIF y de fragmentos de texto PNG.

use crate::error::{EraserError, Result};
use crate::record::MetadataRecord;
use exif::{Context, Exif, Field, In, Tag, Value};
use image::{ImageFormat, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Etiquetas que solo describen la disposición de los píxeles en un
/// contenedor TIFF. En un TIFF el IFD0 es la propia imagen y cualquier
/// codificador las vuelve a escribir; dentro de un bloque EXIF (JPEG, PNG,
/// WebP) sí son metadata y se reportan.
const STRUCTURAL_TAGS: [Tag; 20] = [
    Tag::ImageWidth,
    Tag::ImageLength,
    Tag::BitsPerSample,
    Tag::Compression,
    Tag::PhotometricInterpretation,
    Tag::StripOffsets,
    Tag::SamplesPerPixel,
    Tag::RowsPerStrip,
    Tag::StripByteCounts,
    Tag::XResolution,
    Tag::YResolution,
    Tag::PlanarConfiguration,
    Tag::ResolutionUnit,
    Tag(Context::Tiff, 317), // Predictor
    Tag(Context::Tiff, 322), // TileWidth
    Tag(Context::Tiff, 323), // TileLength
    Tag(Context::Tiff, 324), // TileOffsets
    Tag(Context::Tiff, 325), // TileByteCounts
    Tag(Context::Tiff, 338), // ExtraSamples
    Tag(Context::Tiff, 339), // SampleFormat
];

/// Metadata de una imagen: campos EXIF y, para PNG, fragmentos de texto.
///
/// Cualquier fallo se reduce a una entrada `error`.
pub fn read_image_metadata(path: &Path) -> MetadataRecord {
    match collect_image_metadata(path) {
        Ok(record) => record,
        Err(error) => {
            log::warn!("No se pudo leer `{}`: {error}", path.display());
            MetadataRecord::error(error.to_string())
        }
    }
}

fn collect_image_metadata(path: &Path) -> Result<MetadataRecord> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    // Leer la cabecera descarta archivos que no son imágenes válidas.
    reader.into_dimensions()?;
    let Some(format) = format else {
        return Err(EraserError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    };

    let mut record = exif_record(path)?;
    if format == ImageFormat::Png {
        record.extend(png_text_chunks(path)?);
    }
    Ok(record)
}

/// Campos EXIF de la imagen principal, con el nombre estándar de cada
/// etiqueta. Las etiquetas desconocidas conservan su número.
///
/// En contenedores TIFF se omiten las etiquetas de disposición de píxeles.
pub fn exif_record(path: &Path) -> Result<MetadataRecord> {
    let tiff_container = is_tiff_container(path)?;
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_))
        | Err(exif::Error::BlankValue(_))
        | Err(exif::Error::InvalidFormat(_)) => return Ok(MetadataRecord::new()),
        Err(error) => return Err(error.into()),
    };

    Ok(exif
        .fields()
        .filter(|field| field.ifd_num == In::PRIMARY)
        .filter(|field| !(tiff_container && STRUCTURAL_TAGS.contains(&field.tag)))
        .map(|field| (tag_name(field.tag), field_value(field, &exif)))
        .collect())
}

fn is_tiff_container(path: &Path) -> Result<bool> {
    let format = ImageReader::open(path)?.with_guessed_format()?.format();
    Ok(format == Some(ImageFormat::Tiff))
}

fn tag_name(tag: Tag) -> String {
    if tag.description().is_some() {
        tag.to_string()
    } else {
        tag.number().to_string()
    }
}

fn field_value(field: &Field, exif: &Exif) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .iter()
            .map(|part| {
                String::from_utf8_lossy(part)
                    .trim_end_matches('\0')
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}

/// Fragmentos `tEXt`, `zTXt` e `iTXt` previos a los datos de imagen.
fn png_text_chunks(path: &Path) -> Result<MetadataRecord> {
    let file = BufReader::new(File::open(path)?);
    let mut decoder = png::Decoder::new(file);
    decoder.set_ignore_text_chunk(false);
    let reader = decoder.read_info()?;
    let info = reader.info();

    let mut record = MetadataRecord::new();
    for chunk in &info.uncompressed_latin1_text {
        record.insert(chunk.keyword.clone(), chunk.text.clone());
    }
    for chunk in &info.compressed_latin1_text {
        match chunk.get_text() {
            Ok(text) => record.insert(chunk.keyword.clone(), text),
            Err(error) => log::warn!("zTXt `{}` ilegible: {error}", chunk.keyword),
        }
    }
    for chunk in &info.utf8_text {
        match chunk.get_text() {
            Ok(text) => record.insert(chunk.keyword.clone(), text),
            Err(error) => log::warn!("iTXt `{}` ilegible: {error}", chunk.keyword),
        }
    }
    Ok(record)
}
