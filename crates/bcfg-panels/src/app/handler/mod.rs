//! Message handlers organized by panel.
//!
//! - `navigation` - accordion and building/crane form fields
//! - `color_picker` - popover state and colour choices
//! - `sidebar` - visualization toggles and collapsibles
//! - `top_bar` - view mode, undo/redo and inert actions
//! - `quote` - inquiry draft

mod color_picker;
mod navigation;
mod quote;
mod sidebar;
mod top_bar;
