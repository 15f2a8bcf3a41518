//! Invocación de herramientas externas (`ffprobe`, `ffmpeg`).

use crate::error::{EraserError, Result};
use std::ffi::OsStr;
use std::io;
use std::process::{Command, Output, Stdio};

const STDERR_TAIL_LINES: usize = 8;

/// Ejecuta `program` con `args` y captura su salida.
///
/// Un ejecutable inexistente se reporta como `ToolMissing`; un estado de
/// salida distinto de cero como `ToolFailed`.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<_> = args.into_iter().map(|arg| arg.as_ref().to_owned()).collect();
    log::debug!("Ejecutando `{program}` {:?}", args);

    let output = Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .output()
        .map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => EraserError::ToolMissing {
                tool: program.to_string(),
            },
            _ => EraserError::Io(error),
        })?;

    if !output.status.success() {
        let status = output
            .status
            .code()
            .map(|code| format!("código {code}"))
            .unwrap_or_else(|| "terminado por señal".to_string());
        return Err(EraserError::ToolFailed {
            tool: program.to_string(),
            status,
            stderr: stderr_tail(&output.stderr),
        });
    }

    Ok(output)
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}
