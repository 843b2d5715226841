use crate::index::IndexMapper;
use crate::model::{ConverterSetup, SourceHandle, ViewerState, VisibilityModel};

use super::{ALL_GROUP_NAME, ControlError, ControlPanel, SourceChangeListener, Tab};

fn add(
    model: &mut ViewerState,
    panel: &mut ControlPanel,
    name: &str,
    pixel_type: Option<&str>,
) -> SourceHandle {
    let source = SourceHandle::new(name, pixel_type.map(str::to_string));
    let setup = ConverterSetup::new(0.0, 255.0);
    model.add_source(source.clone(), setup.clone()).unwrap();
    panel.source_added(model, &source, &setup).unwrap();
    source
}

fn fresh() -> (ViewerState, ControlPanel) {
    let mut model = ViewerState::new();
    let panel = ControlPanel::new(&mut model, 1000).unwrap();
    model.drain_events();
    (model, panel)
}

#[test]
fn panel_replaces_groups_with_active_all_group() {
    let mut model = ViewerState::new();
    model
        .add_group(crate::model::GroupHandle::new("old"), "old")
        .unwrap();
    let panel = ControlPanel::new(&mut model, 1000).unwrap();

    assert_eq!(model.groups().len(), 1);
    assert_eq!(model.groups()[0].name, ALL_GROUP_NAME);
    assert_eq!(model.current_group().as_ref(), Some(panel.all_group()));
    assert_eq!(model.is_group_active(panel.all_group()), Ok(true));
}

#[test]
fn added_sources_get_unique_names_and_join_all() {
    let (mut model, mut panel) = fresh();
    let first = add(&mut model, &mut panel, "beads", Some("UnsignedShortType"));
    let second = add(&mut model, &mut panel, "beads", None);

    let names = panel
        .source_tab()
        .entries(&model, panel.names())
        .into_iter()
        .map(|entry| entry.name)
        .collect::<Vec<_>>();
    assert_eq!(names, ["beads", "0_beads"]);

    let all = panel.all_group().clone();
    assert!(model.contains(&all, &first));
    assert!(model.contains(&all, &second));
    assert_eq!(panel.source_tab().selected(), Some(&first));
    assert_eq!(panel.source_tab().type_label(), "UnsignedShortType");
}

#[test]
fn placeholder_source_shows_na_type() {
    let (mut model, mut panel) = fresh();
    let source = SourceHandle::placeholder("empty");
    let setup = ConverterSetup::new(0.0, 1.0);
    model.add_source(source.clone(), setup.clone()).unwrap();
    panel.source_added(&mut model, &source, &setup).unwrap();
    assert_eq!(panel.source_tab().type_label(), "N/A");
}

#[test]
fn duplicate_registration_is_rejected() {
    let (mut model, mut panel) = fresh();
    let source = add(&mut model, &mut panel, "a", None);
    let setup = ConverterSetup::new(0.0, 1.0);
    assert!(matches!(
        panel.source_added(&mut model, &source, &setup),
        Err(ControlError::Name(_))
    ));
}

#[test]
fn selecting_and_hiding_a_source_updates_the_model() {
    let (mut model, mut panel) = fresh();
    add(&mut model, &mut panel, "a", None);
    let b = add(&mut model, &mut panel, "b", None);

    panel.source_tab_mut().select_source(&mut model, &b).unwrap();
    assert_eq!(model.current_source(), Some(b.clone()));

    let visible = panel.source_tab_mut().toggle_visibility(&mut model).unwrap();
    assert!(!visible);
    assert_eq!(model.is_source_active(&b), Ok(false));
}

#[test]
fn single_source_mode_turns_fusion_off() {
    let (mut model, mut panel) = fresh();
    panel
        .source_tab_mut()
        .set_single_source_mode(&mut model, true)
        .unwrap();
    assert!(!model.is_fused_enabled());

    model.set_fused_enabled(true);
    panel.handle_events(&mut model);
    assert!(!panel.source_tab().single_source_mode());
}

#[test]
fn color_writes_through_to_the_setup() {
    let (mut model, mut panel) = fresh();
    let source = SourceHandle::new("c", None);
    let setup = ConverterSetup::with_color(0.0, 1.0, 0xff00ff00);
    model.add_source(source.clone(), setup.clone()).unwrap();
    panel.source_added(&mut model, &source, &setup).unwrap();

    assert_eq!(panel.source_tab_mut().set_color(0x000000ff), Ok(true));
    assert_eq!(setup.color(), Some(0xff0000ff));
    assert_eq!(panel.source_tab().color(), Some(0xff0000ff));

    let plain = add(&mut model, &mut panel, "plain", None);
    panel.source_tab_mut().select_source(&mut model, &plain).unwrap();
    assert_eq!(panel.source_tab_mut().set_color(0xffffffff), Ok(false));
    assert_eq!(panel.source_tab().color(), None);
}

#[test]
fn create_group_validates_names() {
    let (mut model, mut panel) = fresh();
    let tab = panel.group_tab_mut();
    assert_eq!(
        tab.create_group(&mut model, "  "),
        Err(ControlError::EmptyGroupName)
    );
    assert_eq!(
        tab.create_group(&mut model, ALL_GROUP_NAME),
        Err(ControlError::GroupAlreadyExists(ALL_GROUP_NAME.to_string()))
    );

    let group = tab.create_group(&mut model, "left").unwrap();
    assert_eq!(model.current_group(), Some(group.clone()));
    assert_eq!(tab.selected(), Some(&group));
    assert!(tab.can_remove_selected());
    assert!(tab.membership().selected.is_empty());
}

#[test]
fn all_group_is_protected() {
    let (mut model, mut panel) = fresh();
    let all = panel.all_group().clone();
    assert!(!panel.group_tab().can_remove_selected());
    assert!(matches!(
        panel.group_tab_mut().remove_group(&mut model, &all),
        Err(ControlError::ProtectedGroup(_))
    ));
    assert_eq!(model.groups().len(), 1);
}

#[test]
fn toggling_membership_moves_sources_between_lists() {
    let (mut model, mut panel) = fresh();
    let a = add(&mut model, &mut panel, "a", None);
    let b = add(&mut model, &mut panel, "b", None);
    panel.group_tab_mut().create_group(&mut model, "g").unwrap();

    assert_eq!(panel.group_tab().membership().remaining, [a.clone(), b.clone()]);
    assert!(panel.group_tab_mut().toggle_membership(&mut model, &b).unwrap());
    assert_eq!(panel.group_tab().membership().selected, [b.clone()]);
    assert_eq!(panel.group_tab().membership().remaining, [a.clone()]);

    assert!(!panel.group_tab_mut().toggle_membership(&mut model, &b).unwrap());
    assert!(panel.group_tab().membership().selected.is_empty());
}

#[test]
fn membership_follows_source_removal() {
    let (mut model, mut panel) = fresh();
    let a = add(&mut model, &mut panel, "a", None);
    let b = add(&mut model, &mut panel, "b", None);

    model.remove_source(&a);
    panel.source_removed(&mut model, &a).unwrap();
    panel.handle_events(&mut model);

    assert_eq!(panel.group_tab().membership().selected, [b.clone()]);
    assert!(!panel.names().contains(&a));
    assert_eq!(panel.source_tab().selected(), Some(&b));
}

#[test]
fn group_visibility_toggle_and_event_refresh() {
    let (mut model, mut panel) = fresh();
    assert!(panel.group_tab().is_visible());
    assert!(!panel.group_tab_mut().toggle_visibility(&mut model).unwrap());

    let all = panel.all_group().clone();
    model.set_group_active(&all, true).unwrap();
    panel.handle_events(&mut model);
    assert!(panel.group_tab().is_visible());
}

#[test]
fn display_mode_change_switches_tab() {
    let (mut model, mut panel) = fresh();
    panel.select_tab(&mut model, Tab::Groups);
    assert!(model.is_grouping_enabled());

    model.set_grouping_enabled(false);
    let handled = panel.handle_events(&mut model);
    assert!(handled >= 1);
    assert_eq!(panel.active_tab(), Tab::Sources);
}

#[test]
fn manual_transform_locks_both_tabs() {
    let (mut model, mut panel) = fresh();
    let a = add(&mut model, &mut panel, "a", None);
    panel.set_manual_transform_active(true);

    assert_eq!(
        panel.source_tab_mut().select_source(&mut model, &a),
        Err(ControlError::Disabled)
    );
    assert_eq!(
        panel.group_tab_mut().create_group(&mut model, "x"),
        Err(ControlError::Disabled)
    );
    assert!(!panel.source_tab().intensity().sync().is_enabled());

    panel.set_manual_transform_active(false);
    assert!(panel.source_tab_mut().select_source(&mut model, &a).is_ok());
}
