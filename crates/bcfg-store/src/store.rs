//! The store owning configurator state.
//!
//! Every mutation goes through [`ConfiguratorStore::dispatch`], which runs the
//! pure reducer and then notifies subscribers when the action applied.
//! Skipped actions do not notify.

use std::fmt;

use tracing::{debug, trace};

use bcfg_model::{
    Accessory, BuildingConfig, ColorsPatch, DimensionsPatch, Opening, RoofPatch, TemplateType,
    ViewMode, VisualizationPatch,
};

use crate::action::Action;
use crate::reducer::{Outcome, reduce};
use crate::state::ConfiguratorState;

type Listener = Box<dyn FnMut(&ConfiguratorState)>;

/// Handle returned by [`ConfiguratorStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct ConfiguratorStore {
    state: ConfiguratorState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for ConfiguratorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguratorStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ConfiguratorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ConfiguratorState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ConfiguratorState {
        &self.state
    }

    /// Apply one action and notify subscribers if it changed anything.
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let name = action.name();
        let records_history = action.records_history();

        let (next, outcome) = reduce(std::mem::take(&mut self.state), action);
        self.state = next;

        match outcome {
            Outcome::Applied => {
                debug!(
                    action = name,
                    history_len = self.state.history_len(),
                    history_index = ?self.state.history_index(),
                    "action applied"
                );
                if records_history {
                    trace!(
                        action = name,
                        history_len = self.state.history_len(),
                        "history snapshot recorded"
                    );
                }
                self.notify();
            }
            Outcome::Skipped(reason) => {
                debug!(action = name, reason = reason.as_str(), "action skipped");
            }
        }
        outcome
    }

    /// Register a listener called after every applied action.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&ConfiguratorState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }

    pub fn building_config(&self) -> Option<&BuildingConfig> {
        self.state.building_config()
    }

    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    // Named operations, one per action.

    pub fn initialize_building(&mut self, template: TemplateType) -> Outcome {
        self.dispatch(Action::InitializeBuilding { template })
    }

    pub fn set_selected_template(&mut self, template: TemplateType) -> Outcome {
        self.dispatch(Action::SetSelectedTemplate { template })
    }

    pub fn update_dimensions(&mut self, patch: DimensionsPatch) -> Outcome {
        self.dispatch(Action::UpdateDimensions(patch))
    }

    pub fn update_roof(&mut self, patch: RoofPatch) -> Outcome {
        self.dispatch(Action::UpdateRoof(patch))
    }

    pub fn update_colors(&mut self, patch: ColorsPatch) -> Outcome {
        self.dispatch(Action::UpdateColors(patch))
    }

    pub fn update_frame_type(&mut self, frame_type: impl Into<String>) -> Outcome {
        self.dispatch(Action::UpdateFrameType {
            frame_type: frame_type.into(),
        })
    }

    pub fn update_crane(&mut self, capacity: f64) -> Outcome {
        self.dispatch(Action::UpdateCrane { capacity })
    }

    pub fn add_opening(&mut self, opening: Opening) -> Outcome {
        self.dispatch(Action::AddOpening(opening))
    }

    pub fn remove_opening(&mut self, id: impl Into<String>) -> Outcome {
        self.dispatch(Action::RemoveOpening { id: id.into() })
    }

    pub fn add_accessory(&mut self, accessory: Accessory) -> Outcome {
        self.dispatch(Action::AddAccessory(accessory))
    }

    pub fn remove_accessory(&mut self, id: impl Into<String>) -> Outcome {
        self.dispatch(Action::RemoveAccessory { id: id.into() })
    }

    pub fn set_visualization(&mut self, patch: VisualizationPatch) -> Outcome {
        self.dispatch(Action::SetVisualization(patch))
    }

    pub fn set_active_panel(&mut self, panel: impl Into<String>) -> Outcome {
        self.dispatch(Action::SetActivePanel {
            panel: panel.into(),
        })
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> Outcome {
        self.dispatch(Action::SetViewMode { mode })
    }

    pub fn undo(&mut self) -> Outcome {
        self.dispatch(Action::Undo)
    }

    pub fn redo(&mut self) -> Outcome {
        self.dispatch(Action::Redo)
    }

    pub fn reset_config(&mut self) -> Outcome {
        self.dispatch(Action::ResetConfig)
    }
}
