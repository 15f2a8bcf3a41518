//! Vaciado del diccionario Info de un PDF.

use crate::error::{EraserError, Result};
use crate::reader::info_dictionary;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// Conserva páginas y recursos, reemplaza `/Info` por un diccionario vacío
/// y descarta el anterior. Los flujos XMP del catálogo no se tocan.
pub fn strip_pdf(source: &Path, target: &Path) -> Result<()> {
    let mut doc = Document::load(source)?;
    let page_count = doc.get_pages().len();

    let previous = doc
        .trailer
        .get(b"Info")
        .ok()
        .and_then(|info| info.as_reference().ok());

    let empty_info = doc.add_object(Dictionary::new());
    doc.trailer.set("Info", Object::Reference(empty_info));
    if let Some(id) = previous {
        doc.objects.remove(&id);
    }
    doc.prune_objects();

    log::debug!(
        "Guardando PDF de {page_count} páginas sin Info en `{}`",
        target.display()
    );
    doc.save(target)?;

    if !verify_pdf_metadata_clean(target)? {
        return Err(EraserError::MetadataSurvived {
            path: target.to_path_buf(),
        });
    }
    Ok(())
}

/// Verdadero si el PDF no tiene diccionario Info o este está vacío.
pub fn verify_pdf_metadata_clean(path: &Path) -> Result<bool> {
    let doc = Document::load(path)?;
    Ok(info_dictionary(&doc).is_none_or(|info| info.is_empty()))
}
