//! Lectura del diccionario Info de un PDF.

use crate::record::MetadataRecord;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

pub const NO_PDF_METADATA: &str = "No PDF metadata found.";

const MAX_REFERENCE_DEPTH: usize = 8;

pub fn read_pdf_metadata(path: &Path) -> MetadataRecord {
    let doc = match Document::load(path) {
        Ok(doc) => doc,
        Err(error) => {
            log::warn!("No se pudo abrir el PDF `{}`: {error}", path.display());
            return MetadataRecord::info(NO_PDF_METADATA);
        }
    };

    let Some(info) = info_dictionary(&doc) else {
        return MetadataRecord::info(NO_PDF_METADATA);
    };

    info.iter()
        .filter_map(|(key, value)| {
            object_to_string(&doc, value, 0)
                .map(|text| (String::from_utf8_lossy(key).into_owned(), text))
        })
        .collect()
}

/// Diccionario Info referenciado desde el trailer, si existe.
pub(crate) fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

fn object_to_string(doc: &Document, obj: &Object, depth: usize) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(value) => Some(value.to_string()),
        Object::Real(value) => Some(value.to_string()),
        Object::Boolean(value) => Some(value.to_string()),
        Object::Array(items) => Some(
            items
                .iter()
                .filter_map(|item| object_to_string(doc, item, depth + 1))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Object::Reference(reference) if depth < MAX_REFERENCE_DEPTH => doc
            .get_object(*reference)
            .ok()
            .and_then(|inner| object_to_string(doc, inner, depth + 1)),
        _ => None,
    }
}

/// Decodifica una cadena de texto PDF: UTF-16BE con BOM, UTF-8 con BOM o,
/// en otro caso, PDFDocEncoding tratado como Latin-1.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        String::from_utf8_lossy(rest).into_owned()
    } else {
        bytes.iter().map(|&byte| char::from(byte)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf16_strings() {
        let bytes = [0xFE, 0xFF, 0x00, 0x41, 0x00, 0xF1, 0x00, 0x6F];
        assert_eq!(decode_text_string(&bytes), "Año");
    }

    #[test]
    fn decodes_latin1_strings() {
        assert_eq!(decode_text_string(b"Caf\xE9"), "Café");
    }
}
