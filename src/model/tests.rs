use std::collections::{BTreeSet, HashSet};

use super::{
    AffineTransform3D, ConverterSetup, DisplayMode, GroupHandle, ModelError, SourceHandle,
    ViewerState, VisibilityEvent, VisibilityModel,
};

fn state_with_sources(names: &[&str]) -> (ViewerState, Vec<SourceHandle>) {
    let mut state = ViewerState::new();
    let handles = names
        .iter()
        .map(|name| SourceHandle::new(*name, Some("u16".to_string())))
        .collect::<Vec<_>>();
    for handle in &handles {
        state
            .add_source(handle.clone(), ConverterSetup::new(0.0, 1.0))
            .expect("add source");
    }
    state.drain_events();
    (state, handles)
}

#[test]
fn handles_compare_by_identity() {
    let first = SourceHandle::new("ch0", None);
    let second = SourceHandle::new("ch0", None);
    assert_ne!(first, second);
    assert_eq!(first, first.clone());

    let set = [first.clone(), second, first].into_iter().collect::<HashSet<_>>();
    assert_eq!(set.len(), 2);
}

#[test]
fn converter_setup_clones_share_display_range() {
    let setup = ConverterSetup::new(0.0, 255.0);
    let view = setup.clone();
    view.set_display_range(10.0, 20.0);
    assert_eq!(setup.display_range(), (10.0, 20.0));
    assert!(setup.shares_settings_with(&view));
    assert!(!setup.supports_color());

    setup.set_color(0x0012_3456);
    assert_eq!(view.color(), Some(0xff12_3456));
}

#[test]
fn adding_the_same_source_twice_is_rejected() {
    let (mut state, handles) = state_with_sources(&["a"]);
    let error = state
        .add_source(handles[0].clone(), ConverterSetup::new(0.0, 1.0))
        .expect_err("duplicate");
    assert_eq!(error, ModelError::SourceAlreadyPresent("a".to_string()));
}

#[test]
fn removing_a_source_renumbers_group_members() {
    let (mut state, handles) = state_with_sources(&["a", "b", "c"]);
    let group = GroupHandle::new("g");
    let g = state.add_group(group, "g").expect("group");
    state.add_source_to_group_at(0, g).expect("a");
    state.add_source_to_group_at(2, g).expect("c");
    state.drain_events();

    assert_eq!(state.remove_source(&handles[1]), Some(1));
    assert_eq!(
        state.groups()[g].members,
        [0, 1].into_iter().collect::<BTreeSet<_>>()
    );
    assert_eq!(state.sources()[1].handle, handles[2]);

    state.remove_source(&handles[0]);
    assert_eq!(
        state.groups()[g].members,
        [0].into_iter().collect::<BTreeSet<_>>()
    );
    let events = state.drain_events();
    assert!(events.contains(&VisibilityEvent::SourceToGroupAssignmentChanged));
    assert!(events.contains(&VisibilityEvent::NumSourcesChanged));
}

#[test]
fn current_source_follows_removals() {
    let (mut state, handles) = state_with_sources(&["a", "b", "c"]);
    state.set_current_source_index(2).expect("current");
    state.remove_source(&handles[0]);
    assert_eq!(state.current_source_index(), 1);
    assert_eq!(state.sources()[1].handle, handles[2]);

    state.remove_source(&handles[2]);
    assert_eq!(state.current_source_index(), 0);
    state.remove_source(&handles[1]);
    assert!(state.sources().is_empty());
}

#[test]
fn setters_reject_out_of_bounds_positions() {
    let (mut state, _) = state_with_sources(&["a"]);
    assert_eq!(
        state.set_current_source_index(3),
        Err(ModelError::SourceIndexOutOfBounds { index: 3, len: 1 })
    );
    assert_eq!(
        state.set_group_active_at(0, true),
        Err(ModelError::GroupIndexOutOfBounds { index: 0, len: 0 })
    );
}

#[test]
fn events_are_only_queued_for_real_changes() {
    let (mut state, _) = state_with_sources(&["a", "b"]);
    state.set_current_source_index(0).expect("same index");
    state.set_source_active_at(0, true).expect("already active");
    assert!(!state.has_pending_events());

    state.set_source_active_at(0, false).expect("deactivate");
    state.set_grouping_enabled(true);
    assert_eq!(
        state.drain_events(),
        vec![
            VisibilityEvent::SourceActivityChanged,
            VisibilityEvent::DisplayModeChanged
        ]
    );
}

#[test]
fn display_mode_flags_combine() {
    let mut state = ViewerState::new();
    assert_eq!(state.display_mode(), DisplayMode::Fused);
    state.set_grouping_enabled(true);
    assert_eq!(state.display_mode(), DisplayMode::FusedGroup);
    state.set_fused_enabled(false);
    assert_eq!(state.display_mode(), DisplayMode::Group);
    state.set_grouping_enabled(false);
    assert_eq!(state.display_mode(), DisplayMode::Single);
}

#[test]
fn affine_concatenation_applies_right_operand_first() {
    let shift = AffineTransform3D::translation(1.0, 2.0, 3.0);
    let mut scale = AffineTransform3D::identity();
    scale.rows[0][0] = 2.0;
    scale.rows[1][1] = 2.0;
    scale.rows[2][2] = 2.0;

    let combined = scale.concatenate(&shift);
    assert_eq!(combined.apply([0.0, 0.0, 0.0]), [2.0, 4.0, 6.0]);
    assert!(AffineTransform3D::default().is_identity());
}
