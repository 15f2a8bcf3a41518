//! Opciones de lectura y limpieza, cargables desde un archivo JSON.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_DIR: &str = "CleanedFiles";
pub const DEFAULT_SUFFIX: &str = "_cleaned";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EraserConfig {
    /// Directorio base donde se crea la carpeta de salida. Por defecto, el
    /// directorio de trabajo actual.
    pub output_root: Option<PathBuf>,
    pub output_dir_name: String,
    pub suffix: String,
    pub jpeg_quality: u8,
    pub ffmpeg: String,
    pub ffprobe: String,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            output_root: None,
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            jpeg_quality: 95,
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }
}

impl EraserConfig {
    /// Lee la configuración desde `path`. Sin ruta, o si el archivo no existe,
    /// devuelve los valores por defecto.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!(
                "Configuración `{}` inexistente, se usan valores por defecto",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Carpeta donde se escriben los archivos limpios.
    pub fn output_dir(&self) -> Result<PathBuf> {
        let root = match &self.output_root {
            Some(root) => root.clone(),
            None => env::current_dir()?,
        };
        Ok(root.join(&self.output_dir_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_file_keeps_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "ffmpeg": "/opt/ffmpeg/bin/ffmpeg", "jpeg_quality": 80 }"#)?;

        let config = EraserConfig::load(Some(&path))?;
        assert_eq!(config.ffmpeg, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.ffprobe, "ffprobe");
        assert_eq!(config.output_dir_name, DEFAULT_OUTPUT_DIR);
        Ok(())
    }

    #[test]
    fn missing_file_uses_defaults() -> Result<()> {
        let config = EraserConfig::load(Some(Path::new("/no/existe/config.json")))?;
        assert_eq!(config.suffix, DEFAULT_SUFFIX);
        assert!(config.output_root.is_none());
        Ok(())
    }

    #[test]
    fn output_dir_joins_root() -> Result<()> {
        let config = EraserConfig {
            output_root: Some(PathBuf::from("/tmp/trabajo")),
            ..EraserConfig::default()
        };
        assert_eq!(
            config.output_dir()?,
            PathBuf::from("/tmp/trabajo/CleanedFiles")
        );
        Ok(())
    }
}
