mod app;
mod ui;

use clap::{Parser, Subcommand};
use console::style;
use metadata_eraser::export::{ExportFormat, export_report};
use metadata_eraser::report::{ErasureReport, InspectionReport};
use metadata_eraser::{EraserConfig, read_metadata_with, strip_metadata_with};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "metadata-eraser",
    version,
    about = "Inspecciona y elimina la metadata de imágenes, PDFs y videos"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Archivo de configuración JSON
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Salida detallada
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Muestra la metadata de un archivo sin modificarlo
    Inspect {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Imprime el reporte como JSON
        #[arg(long)]
        json: bool,
    },
    /// Escribe una copia sin metadata en la carpeta de salida
    Strip {
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Directorio base de la carpeta de salida
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Imprime el reporte como JSON
        #[arg(long)]
        json: bool,

        /// Exporta la comparación antes/después (json, txt o csv)
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", style(message).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = EraserConfig::load(cli.config.as_deref())
        .map_err(|error| format!("No se pudo cargar la configuración: {error}"))?;

    match cli.command {
        None => app::run(&config),
        Some(Command::Inspect { path, json }) => inspect(&path, &config, json),
        Some(Command::Strip {
            path,
            output_dir,
            json,
            export,
        }) => {
            if let Some(dir) = output_dir {
                config.output_root = Some(dir);
            }
            strip(&path, &config, json, export.as_deref())
        }
    }
}

fn inspect(path: &Path, config: &EraserConfig, json: bool) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("La ruta `{}` no existe.", path.display()));
    }

    let report = InspectionReport::build(path, config);
    if json {
        return print_json(&report);
    }

    ui::render_header();
    ui::render_summary("Archivo", &report.file);
    ui::render_record("Metadata", &report.metadata);
    Ok(())
}

fn strip(
    path: &Path,
    config: &EraserConfig,
    json: bool,
    export: Option<&Path>,
) -> Result<(), String> {
    let export_format = export
        .map(ExportFormat::from_path)
        .transpose()
        .map_err(|error| error.to_string())?;

    let before = read_metadata_with(path, config);
    if !json {
        ui::render_header();
        ui::render_record("Metadata antes", &before);
    }

    let stripped = strip_metadata_with(path, config).map_err(|error| error.to_string())?;
    let report = ErasureReport::build(&stripped, before, config);

    if let (Some(target), Some(format)) = (export, export_format) {
        export_report(&report, format, target)
            .map_err(|error| format!("No se pudo exportar el reporte: {error}"))?;
        log::info!("Reporte exportado en {}", target.display());
    }

    if json {
        return print_json(&report);
    }

    ui::render_erasure(&report);
    if let Some(target) = export {
        println!(
            "{}",
            style(format!("Reporte exportado en {}", target.display())).dim()
        );
    }
    Ok(())
}

fn print_json<T: Serialize>(report: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|error| format!("No se pudo serializar el reporte: {error}"))?;
    println!("{json}");
    Ok(())
}
