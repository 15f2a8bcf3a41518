//! Copia de flujos sin metadata con `ffmpeg`.

use crate::config::EraserConfig;
use crate::error::{EraserError, Result};
use crate::tools::run_tool;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// `ffmpeg -i <source> -map_metadata -1 -c copy <target>`, sin recodificar.
/// `+bitexact` evita que el muxer escriba su propia etiqueta `encoder`.
pub fn strip_video(source: &Path, target: &Path, config: &EraserConfig) -> Result<()> {
    let args = [
        OsStr::new("-nostdin"),
        OsStr::new("-y"),
        OsStr::new("-v"),
        OsStr::new("error"),
        OsStr::new("-i"),
        source.as_os_str(),
        OsStr::new("-map_metadata"),
        OsStr::new("-1"),
        OsStr::new("-c"),
        OsStr::new("copy"),
        OsStr::new("-fflags"),
        OsStr::new("+bitexact"),
        target.as_os_str(),
    ];
    run_tool(&config.ffmpeg, args).map_err(EraserError::into_strip_failure)?;

    let written = fs::metadata(target).map(|meta| meta.len()).unwrap_or(0);
    if written == 0 {
        return Err(EraserError::StripFailed {
            tool: config.ffmpeg.clone(),
            status: "sin salida".to_string(),
            stderr: format!("`{}` quedó vacío", target.display()),
        });
    }
    Ok(())
}
