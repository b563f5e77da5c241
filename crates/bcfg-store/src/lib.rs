//! Building configuration store.
//!
//! Holds the current [`bcfg_model::BuildingConfig`], the viewport preferences
//! and a bounded undo/redo history of configuration snapshots.
//!
//! - [`reduce`] is the pure transition function.
//! - [`ConfiguratorStore`] owns a state, exposes one method per action and
//!   notifies subscribers after applied actions.

pub mod action;
pub mod history;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use history::{HISTORY_LIMIT, History};
pub use reducer::{Outcome, SkipReason, reduce};
pub use state::{ConfiguratorState, DEFAULT_ACTIVE_PANEL};
pub use store::{ConfiguratorStore, SubscriptionId};
