//! Action scripts.
//!
//! A script is a JSON array of store actions in their tagged form:
//!
//! ```json
//! [
//!   { "action": "initialize_building", "template": "warehouse" },
//!   { "action": "update_dimensions", "width": 30.0 },
//!   { "action": "undo" }
//! ]
//! ```
//!
//! Replaying a script dispatches every action in order. Skipped actions are
//! collected rather than treated as errors.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info, info_span};

use bcfg_model::{BuildingConfig, TemplateType, ViewMode};
use bcfg_store::{Action, ConfiguratorStore, Outcome};

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub total: usize,
    pub applied: usize,
    pub skipped: Vec<SkippedAction>,
    pub history_len: usize,
    /// `None` when the history is empty.
    pub history_index: Option<usize>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub selected_template: Option<TemplateType>,
    pub active_panel: String,
    pub view_mode: ViewMode,
    pub building: Option<BuildingConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedAction {
    /// Zero-based position in the script.
    pub index: usize,
    pub action: &'static str,
    pub reason: &'static str,
}

impl ReplayReport {
    fn from_store(store: &ConfiguratorStore, total: usize, skipped: Vec<SkippedAction>) -> Self {
        let state = store.state();
        Self {
            total,
            applied: total - skipped.len(),
            skipped,
            history_len: state.history_len(),
            history_index: state.history_index(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            selected_template: state.selected_template(),
            active_panel: state.active_panel().to_string(),
            view_mode: state.view_mode(),
            building: state.building_config().cloned(),
        }
    }
}

/// Parse a script from JSON text.
///
/// # Errors
///
/// Returns an error naming the offending position when the text is not an
/// array of known actions.
pub fn parse_script(content: &str) -> anyhow::Result<Vec<Action>> {
    serde_json::from_str(content).context("script must be a JSON array of actions")
}

/// Read and parse a script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_script(path: &Path) -> anyhow::Result<Vec<Action>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("parse script {}", path.display()))
}

/// Dispatch every action to `store` in order.
pub fn replay(store: &mut ConfiguratorStore, actions: Vec<Action>) -> ReplayReport {
    let span = info_span!("replay", actions = actions.len());
    let _guard = span.enter();

    let total = actions.len();
    let mut skipped = Vec::new();
    for (index, action) in actions.into_iter().enumerate() {
        let name = action.name();
        match store.dispatch(action) {
            Outcome::Applied => {}
            Outcome::Skipped(reason) => {
                debug!(index, action = name, reason = reason.as_str(), "script action skipped");
                skipped.push(SkippedAction {
                    index,
                    action: name,
                    reason: reason.as_str(),
                });
            }
        }
    }

    let report = ReplayReport::from_store(store, total, skipped);
    info!(
        applied = report.applied,
        skipped = report.skipped.len(),
        history_len = report.history_len,
        "replay finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_is_valid() {
        assert!(parse_script("[]").expect("parse").is_empty());
    }

    #[test]
    fn object_is_not_a_script() {
        let error = parse_script(r#"{ "action": "undo" }"#).expect_err("not an array");
        assert!(format!("{error:#}").contains("JSON array"));
    }

    #[test]
    fn unknown_action_rejected() {
        assert!(parse_script(r#"[{ "action": "paint_it_black" }]"#).is_err());
    }
}
