//! Panel controllers driven through messages.

use std::cell::Cell;
use std::rc::Rc;

use bcfg_model::{
    ColorSlot, Opening, OpeningType, ReferralSource, RoofOrientation, RoofType, TemplateType,
    ViewMode, VisualizationFlag, Wall,
};
use bcfg_panels::view::RenderMode;
use bcfg_panels::{
    ColorPickerMessage, Configurator, Message, NavigationMessage, PanelId, QuoteMessage,
    SidebarMessage, TopBarMessage,
};

fn configurator(template: TemplateType) -> Configurator {
    let mut app = Configurator::default();
    app.update(Message::TemplateChosen(template));
    app
}

fn nav(app: &mut Configurator, msg: NavigationMessage) {
    app.update(Message::Navigation(msg));
}

#[test]
fn navigation_absent_without_configuration() {
    let app = Configurator::default();
    assert!(app.left_navigation().is_none());
    assert!(!app.top_control_bar().can_undo);
}

#[test]
fn sections_listed_in_order_with_default_expanded() {
    let app = configurator(TemplateType::IndustrialHall);
    let view = app.left_navigation().expect("navigation");
    let labels: Vec<&str> = view.sections.iter().map(|s| s.label).collect();
    insta::assert_snapshot!(
        labels.join(" | "),
        @"BUILDING | BAYS | SHEETING | OPENINGS | ACCESSORY | STRUCTURE | QUOTE"
    );
    assert_eq!(view.active, Some(PanelId::Building));
}

#[test]
fn clicking_sections_selects_and_collapses() {
    let mut app = configurator(TemplateType::IndustrialHall);

    nav(&mut app, NavigationMessage::SectionClicked(PanelId::Openings));
    assert_eq!(app.state().active_panel(), "openings");

    nav(&mut app, NavigationMessage::SectionClicked(PanelId::Openings));
    assert_eq!(app.state().active_panel(), "");
    let view = app.left_navigation().expect("navigation");
    assert_eq!(view.active, None);
    assert!(view.sections.iter().all(|s| !s.expanded));
    assert_eq!(app.state().history_len(), 1);
}

#[test]
fn numeric_fields_fall_back() {
    let mut app = configurator(TemplateType::Hangar);

    nav(&mut app, NavigationMessage::WidthChanged("abc".to_string()));
    nav(&mut app, NavigationMessage::EaveHeightChanged("0".to_string()));
    nav(&mut app, NavigationMessage::CraneCapacityChanged(String::new()));

    let config = app.state().building_config().expect("config");
    assert_eq!(config.dimensions.width, 12.0);
    assert_eq!(config.dimensions.eave_height, 6.0);
    assert!(config.crane.is_none());
    assert_eq!(app.state().history_len(), 4);
}

#[test]
fn building_form_updates_store() {
    let mut app = configurator(TemplateType::Warehouse);

    nav(&mut app, NavigationMessage::WidthChanged("42.5".to_string()));
    nav(&mut app, NavigationMessage::BaysPatternChanged("10*6".to_string()));
    nav(&mut app, NavigationMessage::FrameTypeSelected("lean_to".to_string()));
    nav(&mut app, NavigationMessage::SlopeSelected("1:15".to_string()));
    nav(&mut app, NavigationMessage::CraneCapacityChanged("7.5".to_string()));

    let view = app.left_navigation().expect("navigation");
    assert_eq!(view.building.width, 42.5);
    assert_eq!(view.building.frame_type, "lean_to");
    assert_eq!(view.building.slope, "1:15");
    assert_eq!(view.bays.bay_count, "10");
    assert_eq!(view.bays.bay_spacing, "6");
    assert_eq!(view.accessory.crane_capacity, 7.5);
    assert_eq!(view.building.width_bounds.min, 12.0);
    assert_eq!(view.building.width_bounds.max, Some(80.0));
    assert_eq!(view.building.eave_bounds.max, Some(15.0));
}

#[test]
fn orientation_only_for_single_slope() {
    let mut app = configurator(TemplateType::IndustrialHall);
    assert_eq!(app.left_navigation().expect("nav").building.orientation, None);

    nav(&mut app, NavigationMessage::RoofTypeSelected(RoofType::SingleSlope));
    // No orientation stored yet; the select still shows "right".
    assert_eq!(
        app.state().building_config().and_then(|c| c.roof.orientation),
        None
    );
    assert_eq!(
        app.left_navigation().expect("nav").building.orientation,
        Some(RoofOrientation::Right)
    );

    nav(
        &mut app,
        NavigationMessage::RoofOrientationSelected(RoofOrientation::Left),
    );
    assert_eq!(
        app.left_navigation().expect("nav").building.orientation,
        Some(RoofOrientation::Left)
    );
}

#[test]
fn color_picker_opens_chooses_and_closes() {
    let mut app = configurator(TemplateType::Workshop);

    app.update(ColorPickerMessage::Toggled(ColorSlot::RoofPanels).into());
    assert_eq!(app.ui().open_picker, Some(ColorSlot::RoofPanels));
    let view = app.left_navigation().expect("navigation");
    assert!(view.sheeting.roof_panels.open);
    assert!(!view.sheeting.wall_panels.open);

    app.update(
        ColorPickerMessage::Chosen {
            slot: ColorSlot::RoofPanels,
            code: "RAL 3000".to_string(),
        }
        .into(),
    );
    assert_eq!(app.ui().open_picker, None);
    let view = app.left_navigation().expect("navigation");
    assert_eq!(view.sheeting.roof_panels.selected.name, "Flame Red");
    assert_eq!(view.sheeting.roof_panels.display_name(), "Flame Red");
    assert_eq!(view.sheeting.wall_panels.value, "RAL 9002");

    app.update(ColorPickerMessage::Toggled(ColorSlot::Flashing).into());
    app.update(ColorPickerMessage::Dismissed.into());
    assert_eq!(app.ui().open_picker, None);
}

#[test]
fn openings_section_lists_current_openings() {
    let mut app = configurator(TemplateType::IndustrialHall);
    app.store_mut()
        .add_opening(Opening::new("rd-1", OpeningType::RollDoor, Wall::Back));

    let view = app.left_navigation().expect("navigation");
    assert_eq!(view.openings.available_types.len(), 5);
    assert_eq!(view.openings.openings.len(), 1);
    assert_eq!(view.openings.openings[0].type_label, "Roll door");
    assert_eq!(view.openings.openings[0].wall, Wall::Back);
    // Display-only pickers resolve unknown names to the first palette entry.
    assert_eq!(view.openings.color_previews[0].selected.code, "RAL 9002");
    assert_eq!(view.openings.color_previews[2].selected.code, "RAL 9006");
    assert!(view.openings.color_previews.iter().all(|p| p.slot.is_none()));
}

#[test]
fn sidebar_toggles_visualization_without_history() {
    let mut app = configurator(TemplateType::Agricultural);

    app.update(SidebarMessage::FlagToggled(VisualizationFlag::Faces, false).into());
    app.update(SidebarMessage::FlagToggled(VisualizationFlag::Purlins, true).into());
    app.update(SidebarMessage::PartsSectionToggled.into());

    let view = app.right_sidebar();
    assert!(!view.parts_open);
    assert!(view.visualization_open);
    assert_eq!(view.switches.len(), 2);
    assert_eq!(view.parts.len(), 11);
    assert_eq!(view.stats.mode, RenderMode::Wireframe);
    insta::assert_json_snapshot!(view.stats, @r#"
    {
      "visible": 11,
      "total": 13,
      "mode": "Wireframe"
    }
    "#);
    assert_eq!(app.state().history_len(), 1);
}

#[test]
fn top_bar_view_modes_and_undo() {
    let mut app = configurator(TemplateType::Workshop);
    nav(&mut app, NavigationMessage::WidthChanged("20".to_string()));

    app.update(TopBarMessage::ViewModeClicked(ViewMode::Right).into());
    let bar = app.top_control_bar();
    let active: Vec<&str> = bar
        .view_buttons
        .iter()
        .filter(|b| b.active)
        .map(|b| b.tooltip)
        .collect();
    assert_eq!(active, vec!["Right Side"]);
    assert!(bar.can_undo);
    assert!(!bar.can_redo);

    app.update(TopBarMessage::UndoClicked.into());
    assert_eq!(
        app.state().building_config().map(|c| c.dimensions.width),
        Some(12.0)
    );
    let bar = app.top_control_bar();
    assert!(!bar.can_undo);
    assert!(bar.can_redo);

    app.update(TopBarMessage::RedoClicked.into());
    assert_eq!(
        app.state().building_config().map(|c| c.dimensions.width),
        Some(20.0)
    );
}

#[test]
fn inert_buttons_change_nothing() {
    let mut app = configurator(TemplateType::Workshop);
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    app.store_mut()
        .subscribe(move |_| counter.set(counter.get() + 1));

    for msg in [
        TopBarMessage::HelpClicked,
        TopBarMessage::SaveClicked,
        TopBarMessage::ShareClicked,
    ] {
        app.update(msg.into());
    }
    app.update(Message::Noop);
    assert_eq!(notified.get(), 0);
}

#[test]
fn quote_draft_stays_local() {
    let mut app = configurator(TemplateType::Hangar);
    let draft = app.left_navigation().expect("navigation").quote.draft;
    assert_eq!(draft.sector, "Industrial");
    assert_eq!(draft.application, "Plants/Factories");
    assert_eq!(draft.realization_year, 2025);

    app.update(QuoteMessage::SectorSelected("Logistics".to_string()).into());
    app.update(QuoteMessage::RealizationYearSelected(2027).into());
    app.update(QuoteMessage::ReferralSelected(ReferralSource::Exhibition).into());
    app.update(QuoteMessage::NotesChanged("Two cranes".to_string()).into());
    app.update(QuoteMessage::SendClicked.into());

    let quote = &app.ui().quote;
    assert_eq!(quote.sector, "Logistics");
    assert_eq!(quote.realization_year, 2027);
    assert_eq!(quote.referral, Some(ReferralSource::Exhibition));
    assert_eq!(quote.notes, "Two cranes");
    assert_eq!(app.state().history_len(), 1);
}

#[test]
fn reset_hides_navigation() {
    let mut app = configurator(TemplateType::Workshop);
    app.update(ColorPickerMessage::Toggled(ColorSlot::BasePlate).into());
    app.update(Message::ResetRequested);

    assert!(app.left_navigation().is_none());
    assert_eq!(app.ui().open_picker, None);
    assert_eq!(app.state().history_index(), None);
}
