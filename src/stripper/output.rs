//! Rutas de salida y archivos temporales de la limpieza.

use crate::config::EraserConfig;
use crate::error::{EraserError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

/// `<salida>/<nombre>_cleaned<.ext>` para `path`. Crea la carpeta si falta.
pub fn output_path_for(path: &Path, config: &EraserConfig) -> Result<PathBuf> {
    let stem = path.file_stem().ok_or_else(|| EraserError::InvalidPath {
        path: path.to_path_buf(),
        reason: "no tiene nombre de archivo".to_string(),
    })?;

    let mut name = OsString::from(stem);
    name.push(&config.suffix);
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }

    let dir = config.output_dir()?;
    fs::create_dir_all(&dir)?;
    Ok(dir.join(name))
}

/// Nombre temporal oculto junto a `output`, único por proceso e instante.
/// Conserva la extensión porque los codificadores eligen formato con ella.
pub fn scratch_path_for(output: &Path) -> PathBuf {
    let parent = output.parent().unwrap_or_else(|| Path::new("."));
    let stem = output.file_stem().unwrap_or_default().to_string_lossy();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    let mut name = format!(".{}_temp_{}_{}", stem, process::id(), nanos);
    if let Some(extension) = output.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }
    parent.join(name)
}

/// Mueve el temporal a su destino; si algo falla, lo elimina.
pub fn commit_scratch(scratch: &Path, output: &Path, result: Result<()>) -> Result<()> {
    if let Err(error) = result {
        discard(scratch);
        return Err(error);
    }

    fs::rename(scratch, output).map_err(|error| {
        discard(scratch);
        EraserError::Io(error)
    })
}

fn discard(scratch: &Path) {
    if scratch.exists()
        && let Err(error) = fs::remove_file(scratch)
    {
        log::warn!(
            "No se pudo eliminar el temporal `{}`: {error}",
            scratch.display()
        );
    }
}
