use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Row, Table};
use console::style;
use metadata_eraser::MetadataRecord;
use metadata_eraser::record::{ERROR_KEY, INFO_KEY};
use metadata_eraser::report::{ErasureReport, FileSummary};

pub fn render_header() {
    let title = format!("Metadata Eraser {}", env!("CARGO_PKG_VERSION"));
    let subtitle = "Lectura y limpieza de metadata en imágenes, PDF y video";
    let rule = "━".repeat(subtitle.chars().count() + 4);

    println!("\n{}", style(&rule).cyan());
    println!("  {}", style(title).cyan().bold());
    println!("  {}", style(subtitle).dim());
    println!("{}\n", style(&rule).cyan());
}

pub fn render_intro() {
    let hint_lines = [
        "┌─ Escribe la ruta de una imagen, un PDF o un video:",
        "│   • Un nombre con extensión (ej. foto.jpg)",
        "│   • Una ruta relativa (ej. ./docs/informe.pdf)",
        "│   • Una ruta absoluta (ej. /Users/usuario/clip.mp4)",
        "└─ Escribe 'salir' o 'exit' para terminar.",
    ];

    for line in hint_lines.iter() {
        println!("{}", style(line).cyan().dim());
    }

    println!();
}

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
        .add_attribute(Attribute::Underlined)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).fg(Color::Rgb {
        r: 160,
        g: 196,
        b: 255,
    })
}

pub fn render_summary(title: &str, summary: &FileSummary) {
    let mut table = base_table();
    table.set_header(vec![header_cell("Propiedad"), header_cell("Valor")]);

    let category = summary
        .category
        .map(|category| category.label().to_string())
        .unwrap_or_else(|| "No reconocida".to_string());
    let mime = summary
        .mime_type
        .clone()
        .unwrap_or_else(|| "Desconocido".to_string());

    table.add_row(Row::from(vec![
        label_cell("Ruta"),
        Cell::new(summary.path.display()),
    ]));
    table.add_row(Row::from(vec![label_cell("Categoría"), Cell::new(category)]));
    table.add_row(Row::from(vec![label_cell("Tipo MIME"), Cell::new(mime)]));
    table.add_row(Row::from(vec![label_cell("Tamaño"), Cell::new(&summary.size)]));
    table.add_row(Row::from(vec![
        label_cell("Última modificación"),
        Cell::new(&summary.modified),
    ]));
    table.add_row(Row::from(vec![
        label_cell("SHA-256"),
        Cell::new(&summary.sha256),
    ]));

    println!("\n{}", style(format!("━━━ {title} ━━━")).cyan().bold());
    println!("{table}");
}

pub fn render_record(title: &str, record: &MetadataRecord) {
    println!("\n{}", style(format!("━━━ {title} ━━━")).cyan().bold());

    if record.is_sentinel() {
        for field in record.iter() {
            let message = format!("  {}", field.value);
            match field.name.as_str() {
                ERROR_KEY => println!("{}", style(message).red()),
                INFO_KEY => println!("{}", style(message).dim()),
                _ => println!("{message}"),
            }
        }
        return;
    }

    let mut table = base_table();
    table.set_header(vec![header_cell("Campo"), header_cell("Valor")]);
    for field in record.iter() {
        table.add_row(Row::from(vec![
            label_cell(&field.name),
            Cell::new(&field.value).fg(Color::White),
        ]));
    }
    println!("{table}");
    println!(
        "{}",
        style(format!("  {} campos encontrados", record.len())).dim()
    );
}

pub fn render_erasure(report: &ErasureReport) {
    render_record("Metadata después", &report.after);
    render_summary("Archivo limpio", &report.cleaned);

    let removed = report.removed_fields();
    let remaining = report.remaining_fields();

    if remaining.is_empty() {
        println!("\n{}", style("┌─ Metadata Eliminada Exitosamente ─").green());
        println!(
            "{}",
            style(format!("│ Archivo: {}", report.cleaned.path.display()))
                .green()
                .bold()
        );
        if !removed.is_empty() {
            println!(
                "{}",
                style(format!("│ Se eliminaron: {}", removed.join(", "))).green()
            );
        }
        println!("{}", style("└─").green());
    } else {
        println!("\n{}", style("┌─ Metadata residual ─").yellow());
        println!(
            "{}",
            style(format!("│ Archivo: {}", report.cleaned.path.display()))
                .yellow()
                .bold()
        );
        println!(
            "{}",
            style(format!("│ Campos que persisten: {}", remaining.join(", "))).yellow()
        );
        println!("{}", style("└─").yellow());
    }
}
