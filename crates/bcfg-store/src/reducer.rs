//! Pure state transitions.
//!
//! `reduce` never fails: an action that cannot apply (no configuration yet,
//! undo at the oldest snapshot, redo at the newest) leaves the state untouched
//! and reports why through [`Outcome::Skipped`].

use std::sync::Arc;

use bcfg_model::{BuildingConfig, Crane, TemplateType, create_default_building_config};

use crate::action::Action;
use crate::state::ConfiguratorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No building configuration has been initialized.
    NotInitialized,
    AtOldest,
    AtNewest,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotInitialized => "not_initialized",
            SkipReason::AtOldest => "at_oldest",
            SkipReason::AtNewest => "at_newest",
        }
    }
}

/// Apply `action` to `state`, returning the next state.
pub fn reduce(mut state: ConfiguratorState, action: Action) -> (ConfiguratorState, Outcome) {
    let outcome = apply(&mut state, action);
    (state, outcome)
}

fn apply(state: &mut ConfiguratorState, action: Action) -> Outcome {
    match action {
        Action::InitializeBuilding { template } => {
            initialize_building(state, template);
            Outcome::Applied
        }
        Action::SetSelectedTemplate { template } => {
            state.selected_template = Some(template);
            Outcome::Applied
        }
        Action::UpdateDimensions(patch) => {
            update_building(state, |config| patch.apply_to(&mut config.dimensions))
        }
        Action::UpdateRoof(patch) => {
            update_building(state, |config| patch.apply_to(&mut config.roof))
        }
        Action::UpdateColors(patch) => {
            update_building(state, |config| patch.apply_to(&mut config.colors))
        }
        Action::UpdateFrameType { frame_type } => {
            update_building(state, |config| config.frame_type = frame_type)
        }
        Action::UpdateCrane { capacity } => update_building(state, |config| {
            config.crane = (capacity > 0.0).then_some(Crane { capacity });
        }),
        Action::AddOpening(opening) => {
            update_building(state, |config| config.openings.push(opening))
        }
        Action::RemoveOpening { id } => {
            update_building(state, |config| config.openings.retain(|o| o.id != id))
        }
        Action::AddAccessory(accessory) => {
            update_building(state, |config| config.accessories.push(accessory))
        }
        Action::RemoveAccessory { id } => {
            update_building(state, |config| config.accessories.retain(|a| a.id != id))
        }
        Action::SetVisualization(patch) => {
            patch.apply_to(&mut state.visualization);
            Outcome::Applied
        }
        Action::SetActivePanel { panel } => {
            state.active_panel = panel;
            Outcome::Applied
        }
        Action::SetViewMode { mode } => {
            state.view_mode = mode;
            Outcome::Applied
        }
        Action::Undo => match state.history.undo() {
            Some(snapshot) => {
                state.building = Some(snapshot);
                Outcome::Applied
            }
            None if state.history.is_empty() => Outcome::Skipped(SkipReason::NotInitialized),
            None => Outcome::Skipped(SkipReason::AtOldest),
        },
        Action::Redo => match state.history.redo() {
            Some(snapshot) => {
                state.building = Some(snapshot);
                Outcome::Applied
            }
            None if state.history.is_empty() => Outcome::Skipped(SkipReason::NotInitialized),
            None => Outcome::Skipped(SkipReason::AtNewest),
        },
        Action::ResetConfig => {
            state.building = None;
            state.selected_template = None;
            state.history.clear();
            Outcome::Applied
        }
    }
}

fn initialize_building(state: &mut ConfiguratorState, template: TemplateType) {
    let config = Arc::new(create_default_building_config(template));
    state.history.reset(Arc::clone(&config));
    state.building = Some(config);
    state.selected_template = Some(template);
}

/// Copy the current configuration, edit the copy, and record it.
fn update_building(
    state: &mut ConfiguratorState,
    edit: impl FnOnce(&mut BuildingConfig),
) -> Outcome {
    let Some(current) = state.building.as_deref() else {
        return Outcome::Skipped(SkipReason::NotInitialized);
    };
    let mut next = current.clone();
    edit(&mut next);
    let next = Arc::new(next);
    state.history.record(Arc::clone(&next));
    state.building = Some(next);
    Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcfg_model::DimensionsPatch;

    fn initialized() -> ConfiguratorState {
        let (state, _) = reduce(
            ConfiguratorState::new(),
            Action::InitializeBuilding {
                template: TemplateType::Workshop,
            },
        );
        state
    }

    #[test]
    fn update_without_configuration_is_skipped() {
        let (state, outcome) = reduce(
            ConfiguratorState::new(),
            Action::UpdateDimensions(DimensionsPatch::default().width(20.0)),
        );
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NotInitialized));
        assert!(state.building_config().is_none());
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn update_leaves_previous_snapshot_untouched() {
        let state = initialized();
        let before = Arc::clone(state.building_snapshot().expect("initialized"));
        let (state, outcome) = reduce(
            state,
            Action::UpdateDimensions(DimensionsPatch::default().width(20.0)),
        );

        assert!(outcome.is_applied());
        assert_eq!(before.dimensions.width, 12.0);
        assert_eq!(state.building_config().map(|c| c.dimensions.width), Some(20.0));
        assert!(Arc::ptr_eq(
            state.history().get(0).expect("first snapshot"),
            &before
        ));
    }

    #[test]
    fn current_config_is_the_indexed_snapshot() {
        let state = initialized();
        let (state, _) = reduce(state, Action::UpdateCrane { capacity: 3.0 });
        let (state, _) = reduce(state, Action::Undo);

        let current = state.building_snapshot().expect("config");
        let indexed = state.history().current().expect("indexed snapshot");
        assert!(Arc::ptr_eq(current, indexed));
    }

    #[test]
    fn undo_reasons() {
        let (state, outcome) = reduce(ConfiguratorState::new(), Action::Undo);
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NotInitialized));

        let (state, _) = reduce(
            state,
            Action::InitializeBuilding {
                template: TemplateType::Hangar,
            },
        );
        let (state, outcome) = reduce(state, Action::Undo);
        assert_eq!(outcome, Outcome::Skipped(SkipReason::AtOldest));
        let (_, outcome) = reduce(state, Action::Redo);
        assert_eq!(outcome, Outcome::Skipped(SkipReason::AtNewest));
    }

    #[test]
    fn non_positive_crane_capacity_clears_crane() {
        let state = initialized();
        let (state, _) = reduce(state, Action::UpdateCrane { capacity: 10.0 });
        assert_eq!(
            state.building_config().and_then(|c| c.crane),
            Some(Crane { capacity: 10.0 })
        );
        let (state, _) = reduce(state, Action::UpdateCrane { capacity: -1.0 });
        assert!(state.building_config().and_then(|c| c.crane).is_none());
    }
}
