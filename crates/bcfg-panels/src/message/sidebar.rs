//! Right sidebar messages.

use bcfg_model::VisualizationFlag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMessage {
    /// Switch or checkbox for one visualization flag changed.
    FlagToggled(VisualizationFlag, bool),

    /// "Visualization" collapsible header clicked
    VisualizationSectionToggled,

    /// "Main Parts" collapsible header clicked
    PartsSectionToggled,
}
