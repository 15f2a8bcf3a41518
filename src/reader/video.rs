//! Etiquetas de contenedor de video vía `ffprobe`.

use crate::config::EraserConfig;
use crate::error::Result;
use crate::record::MetadataRecord;
use crate::tools::run_tool;
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;

pub const NO_VIDEO_METADATA: &str = "No video metadata found.";

pub fn read_video_metadata(path: &Path, config: &EraserConfig) -> MetadataRecord {
    match probe_tags(path, config) {
        Ok(record) => record,
        Err(error) => {
            log::warn!("`{}` no pudo sondear `{}`: {error}", config.ffprobe, path.display());
            MetadataRecord::info(NO_VIDEO_METADATA)
        }
    }
}

fn probe_tags(path: &Path, config: &EraserConfig) -> Result<MetadataRecord> {
    let args = [
        OsStr::new("-v"),
        OsStr::new("quiet"),
        OsStr::new("-print_format"),
        OsStr::new("json"),
        OsStr::new("-show_format"),
        path.as_os_str(),
    ];
    let output = run_tool(&config.ffprobe, args)?;
    tags_from_probe_json(&String::from_utf8_lossy(&output.stdout))
}

/// Extrae `format.tags` de la salida JSON de `ffprobe`.
pub fn tags_from_probe_json(json: &str) -> Result<MetadataRecord> {
    let parsed: Value = serde_json::from_str(json)?;
    let Some(tags) = parsed
        .get("format")
        .and_then(|format| format.get("tags"))
        .and_then(Value::as_object)
    else {
        return Ok(MetadataRecord::new());
    };

    Ok(tags
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBE_OUTPUT: &str = r#"{
        "format": {
            "filename": "clip.mp4",
            "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
            "tags": {
                "major_brand": "isom",
                "creation_time": "2024-05-01T10:00:00.000000Z",
                "encoder": "Lavf60.3.100",
                "track": 3
            }
        }
    }"#;

    #[test]
    fn keeps_tag_order_and_stringifies_values() -> Result<()> {
        let record = tags_from_probe_json(PROBE_OUTPUT)?;
        let names: Vec<_> = record.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, ["major_brand", "creation_time", "encoder", "track"]);
        assert_eq!(record.get("track"), Some("3"));
        assert_eq!(record.get("encoder"), Some("Lavf60.3.100"));
        Ok(())
    }

    #[test]
    fn format_without_tags_is_empty() -> Result<()> {
        let record = tags_from_probe_json(r#"{"format": {"duration": "1.0"}}"#)?;
        assert!(record.is_empty());
        Ok(())
    }

    #[test]
    fn garbage_output_is_an_error() {
        assert!(tags_from_probe_json("").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn failing_probe_tool_yields_sentinel() {
        let config = EraserConfig {
            ffprobe: "false".to_string(),
            ..EraserConfig::default()
        };
        assert!(matches!(
            probe_tags(Path::new("clip.mp4"), &config),
            Err(crate::error::EraserError::ToolFailed { ref tool, .. }) if tool == "false"
        ));
        let record = read_video_metadata(Path::new("clip.mp4"), &config);
        assert_eq!(record, MetadataRecord::info(NO_VIDEO_METADATA));
    }

    #[test]
    fn missing_probe_tool_yields_sentinel() {
        let config = EraserConfig {
            ffprobe: "ffprobe-inexistente-12345".to_string(),
            ..EraserConfig::default()
        };
        let record = read_video_metadata(Path::new("clip.mp4"), &config);
        assert_eq!(record, MetadataRecord::info(NO_VIDEO_METADATA));
    }
}
