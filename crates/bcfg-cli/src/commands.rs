use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use serde::Serialize;
use tracing::{info, info_span, warn};

use bcfg_cli::replay::{ReplayReport, load_script, replay};
use bcfg_cli::settings::{Settings, config_path};
use bcfg_cli::views::PanelViews;
use bcfg_model::{BUILDING_TEMPLATES, RAL_COLORS, frame_type};
use bcfg_panels::Configurator;
use bcfg_store::ConfiguratorStore;

use crate::cli::{RunArgs, SettingsArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_templates() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Name"),
        header_cell("Width (m)"),
        header_cell("Bays"),
        header_cell("Eave (m)"),
        header_cell("Frame"),
        header_cell("Roof"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for template in &BUILDING_TEMPLATES {
        let frame = frame_type(template.frame_type).map_or(template.frame_type, |ft| ft.name);
        table.add_row(vec![
            Cell::new(template.template_type.as_str()),
            Cell::new(template.name),
            Cell::new(format!(
                "{} ({}-{})",
                template.width, template.min_width, template.max_width
            )),
            Cell::new(template.bays_pattern()),
            Cell::new(template.eave_height),
            Cell::new(frame),
            Cell::new(format!("{} {}", template.roof_type.label(), template.slope)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_palette() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Hex"),
    ]);
    apply_table_style(&mut table);
    for color in &RAL_COLORS {
        table.add_row(vec![
            Cell::new(color.code),
            Cell::new(color.name),
            dim_cell(color.hex),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// A missing settings file means defaults. An explicit path that exists must
/// parse; the default path falls back silently.
pub fn resolve_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => Settings::load_or_default(path),
        None => Ok(Settings::load()),
    }
}

pub fn run_script(args: &RunArgs, settings: &Settings) -> Result<ReplayOutput> {
    let span = info_span!("run", script = %args.script.display());
    let _guard = span.enter();

    let actions = load_script(&args.script)?;
    info!(actions = actions.len(), "script loaded");

    let mut store = ConfiguratorStore::with_state(settings.initial_state());
    if let Some(template) = args.template.or(settings.general.default_template) {
        info!(template = template.as_str(), "initializing from template");
        store.initialize_building(template);
    }

    let report = replay(&mut store, actions);
    if !report.skipped.is_empty() {
        warn!(skipped = report.skipped.len(), "some actions were skipped");
    }
    let views = args
        .views
        .then(|| PanelViews::capture(&Configurator::new(store)));
    Ok(ReplayOutput { report, views })
}

/// What `run` prints with `--json`.
#[derive(Serialize)]
pub struct ReplayOutput {
    pub report: ReplayReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<PanelViews>,
}

impl ReplayOutput {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize report")
    }
}

pub fn run_settings(
    args: &SettingsArgs,
    explicit: Option<&Path>,
    settings: &Settings,
) -> Result<()> {
    let path = explicit.map_or_else(config_path, Path::to_path_buf);
    println!("Settings: {}", path.display());
    if args.write {
        settings.save_to(&path)?;
        info!(path = %path.display(), "settings written");
        println!("Written.");
    } else {
        print!("{}", settings.to_toml()?);
    }
    Ok(())
}
