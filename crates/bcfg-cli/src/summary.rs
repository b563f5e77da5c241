use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bcfg_cli::replay::ReplayReport;
use bcfg_model::{BuildingConfig, ColorSlot, resolve_color};

pub fn print_report(report: &ReplayReport) {
    match report.selected_template {
        Some(template) => println!("Template: {template}"),
        None => println!("Template: -"),
    }
    println!(
        "Actions: {} ({} applied, {} skipped)",
        report.total,
        report.applied,
        report.skipped.len()
    );
    match report.history_index {
        Some(index) => println!("History: {} of {}", index + 1, report.history_len),
        None => println!("History: empty"),
    }
    println!("View: {} | Panel: {}", report.view_mode, display_panel(&report.active_panel));

    match &report.building {
        Some(config) => println!("{}", building_table(config)),
        None => println!("No building configured."),
    }
    if !report.skipped.is_empty() {
        println!("{}", skipped_table(report));
    }
}

fn display_panel(panel: &str) -> &str {
    if panel.is_empty() { "-" } else { panel }
}

fn building_table(config: &BuildingConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);

    let dims = &config.dimensions;
    let mut roof = format!("{} {}", config.roof.roof_type.label(), config.roof.slope);
    if let Some(orientation) = config.roof.orientation {
        roof.push_str(&format!(" ({orientation})"));
    }
    table.add_row(vec![Cell::new("Width"), Cell::new(format!("{} m", dims.width))]);
    table.add_row(vec![Cell::new("Length"), Cell::new(format!("{} m", dims.length))]);
    table.add_row(vec![Cell::new("Bays"), Cell::new(&dims.bays_pattern)]);
    table.add_row(vec![
        Cell::new("Eave height"),
        Cell::new(format!("{} m", dims.eave_height)),
    ]);
    table.add_row(vec![Cell::new("Frame"), Cell::new(&config.frame_type)]);
    table.add_row(vec![Cell::new("Roof"), Cell::new(roof)]);
    table.add_row(vec![
        Cell::new("Crane"),
        match config.crane {
            Some(crane) => Cell::new(format!("{} t", crane.capacity)),
            None => dim_cell("none"),
        },
    ]);
    for slot in ColorSlot::ALL {
        let value = config.colors.get(slot);
        let color = resolve_color(value);
        table.add_row(vec![
            Cell::new(slot.label()),
            Cell::new(format!("{value} ({})", color.name)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Openings"),
        count_cell(config.openings.len()),
    ]);
    table.add_row(vec![
        Cell::new("Accessories"),
        count_cell(config.accessories.len()),
    ]);
    table
}

fn skipped_table(report: &ReplayReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Skipped action"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for skipped in &report.skipped {
        table.add_row(vec![
            dim_cell(skipped.index),
            Cell::new(skipped.action),
            Cell::new(skipped.reason).fg(Color::Yellow),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
