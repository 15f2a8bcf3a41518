use crate::ui;
use console::style;
use metadata_eraser::EraserConfig;
use metadata_eraser::report::{ErasureReport, InspectionReport};
use metadata_eraser::strip_metadata_with;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Bucle interactivo: pide una ruta, muestra su metadata y ofrece limpiarla.
pub fn run(config: &EraserConfig) -> Result<(), String> {
    let current_dir = env::current_dir()
        .map_err(|error| format!("No se pudo obtener el directorio actual: {error}"))?;

    ui::render_header();
    ui::render_intro();

    let mut input = String::new();
    loop {
        match read_user_input(&mut input, "Ruta") {
            Ok(None) => {
                println!("\n{}", style("Fin de la entrada. ¡Hasta luego!").dim());
                break;
            }
            Ok(Some(line)) => {
                if line.is_empty() {
                    continue;
                }

                if matches_command(&line, &["exit", "salir"]) {
                    println!("{}", style("Hasta luego!").dim());
                    break;
                }

                let path = resolve_path(&current_dir, &line);
                match handle_file(&path, config, &mut input) {
                    Ok(()) => println!(),
                    Err(message) => eprintln!("{}", style(message).red()),
                }
            }
            Err(error) => {
                eprintln!("Error al leer la entrada: {error}");
            }
        }
    }

    Ok(())
}

fn handle_file(path: &Path, config: &EraserConfig, buffer: &mut String) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("`{}` no es un archivo accesible.", path.display()));
    }

    let inspection = InspectionReport::build(path, config);
    ui::render_summary("Archivo", &inspection.file);
    ui::render_record("Metadata actual", &inspection.metadata);

    if inspection.file.category.is_none() {
        println!(
            "{}",
            style("Solo se pueden limpiar imágenes, PDFs y videos.").yellow()
        );
        return Ok(());
    }

    if !confirm(buffer, "¿Eliminar la metadata? [s/N]")? {
        println!("{}", style("Operación cancelada.").dim());
        return Ok(());
    }

    let stripped = strip_metadata_with(path, config).map_err(|error| error.to_string())?;
    let report = ErasureReport::build(&stripped, inspection.metadata, config);
    ui::render_erasure(&report);
    Ok(())
}

fn confirm(buffer: &mut String, question: &str) -> Result<bool, String> {
    let answer = read_user_input(buffer, question)
        .map_err(|error| format!("Error al leer la entrada: {error}"))?;
    Ok(answer.is_some_and(|line| matches_command(&line, &["s", "si", "sí", "y", "yes"])))
}

fn resolve_path(current_dir: &Path, input: &str) -> PathBuf {
    let candidate = Path::new(input);
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        current_dir.join(candidate)
    }
}

fn matches_command(input: &str, aliases: &[&str]) -> bool {
    aliases
        .iter()
        .any(|alias| input.to_lowercase() == alias.to_lowercase())
}

fn read_user_input(buffer: &mut String, prompt: &str) -> io::Result<Option<String>> {
    print!("{} ", style(prompt).bold().cyan());
    print!("{} ", style("›").cyan());
    io::stdout().flush()?;

    buffer.clear();
    let bytes_read = io::stdin().read_line(buffer)?;
    if bytes_read == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_ignore_case() {
        assert!(matches_command("SALIR", &["exit", "salir"]));
        assert!(matches_command("Sí", &["s", "sí"]));
        assert!(!matches_command("salida", &["exit", "salir"]));
    }

    #[cfg(unix)]
    #[test]
    fn relative_paths_join_the_current_dir() {
        let base = Path::new("/tmp/trabajo");
        assert_eq!(
            resolve_path(base, "foto.jpg"),
            PathBuf::from("/tmp/trabajo/foto.jpg")
        );
        assert_eq!(resolve_path(base, "/abs/clip.mp4"), PathBuf::from("/abs/clip.mp4"));
    }
}
