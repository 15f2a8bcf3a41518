//! Archivos de prueba generados al vuelo.

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use image::{ImageFormat, Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8])
    })
}

pub fn ascii_field(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

pub fn rational_field(tag: Tag, num: u32, denom: u32) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![Rational { num, denom }]),
    }
}

fn short_field(tag: Tag, values: Vec<u16>) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Short(values),
    }
}

/// Escribe un TIFF RGB de 8x8 sin compresión cuyo IFD0 lleva además `fields`.
pub fn write_tiff_with_tags(path: &Path, fields: &[Field]) -> TestResult {
    let image = gradient(8, 8);
    let (width, height) = (image.width() as u16, image.height() as u16);
    let layout = [
        short_field(Tag::ImageWidth, vec![width]),
        short_field(Tag::ImageLength, vec![height]),
        short_field(Tag::BitsPerSample, vec![8, 8, 8]),
        short_field(Tag::Compression, vec![1]),
        short_field(Tag::PhotometricInterpretation, vec![2]),
        short_field(Tag::SamplesPerPixel, vec![3]),
        short_field(Tag::RowsPerStrip, vec![height]),
        short_field(Tag::PlanarConfiguration, vec![1]),
    ];
    let strips = [image.as_raw().as_slice()];

    let mut writer = Writer::new();
    for field in layout.iter().chain(fields) {
        writer.push_field(field);
    }
    writer.set_strips(&strips, In::PRIMARY);
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false)?;
    fs::write(path, tiff.into_inner())?;
    Ok(())
}

/// Escribe un JPEG con un segmento APP1 que contiene `fields` como EXIF.
pub fn write_jpeg_with_exif(path: &Path, fields: &[Field]) -> TestResult {
    let mut jpeg = Vec::new();
    gradient(16, 16).write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)?;

    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false)?;
    let tiff = tiff.into_inner();

    let length = u16::try_from(2 + 6 + tiff.len())?;
    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&length.to_be_bytes());
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(&tiff);

    let mut output = jpeg[..2].to_vec();
    output.extend_from_slice(&segment);
    output.extend_from_slice(&jpeg[2..]);
    fs::write(path, output)?;
    Ok(())
}

/// Escribe un PNG RGB con fragmentos `tEXt` e `iTXt`.
pub fn write_png_with_text(path: &Path, texts: &[(&str, &str)]) -> TestResult {
    let image = gradient(8, 8);
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = png::Encoder::new(file, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    for (index, (keyword, text)) in texts.iter().enumerate() {
        if index % 2 == 0 {
            encoder.add_text_chunk(keyword.to_string(), text.to_string())?;
        } else {
            encoder.add_itxt_chunk(keyword.to_string(), text.to_string())?;
        }
    }
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    writer.finish()?;
    Ok(())
}

/// Escribe un PDF de `pages` páginas con el diccionario Info indicado.
pub fn write_pdf(path: &Path, pages: usize, info: &[(&str, &str)]) -> TestResult {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for number in 1..=pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new(
                    "Tj",
                    vec![Object::string_literal(format!("Pagina {number}"))],
                ),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    if !info.is_empty() {
        let mut dict = lopdf::Dictionary::new();
        for (key, value) in info {
            dict.set(key.as_bytes().to_vec(), Object::string_literal(*value));
        }
        let info_id = doc.add_object(dict);
        doc.trailer.set("Info", info_id);
    }

    doc.save(path)?;
    Ok(())
}
