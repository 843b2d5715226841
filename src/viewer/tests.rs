use crate::controls::ControlError;
use crate::index::IndexMapper;
use crate::model::{AffineTransform3D, DisplayMode, VisibilityModel};

use super::ViewerHandle;

#[test]
fn new_viewer_has_only_the_all_group() {
    let viewer = ViewerHandle::new(1000).unwrap();
    assert_eq!(viewer.state().groups().len(), 1);
    assert!(!viewer.state().has_pending_events());
}

#[test]
fn add_source_notifies_panel_and_transforms() {
    let mut viewer = ViewerHandle::new(1000).unwrap();
    let source = viewer
        .add_source("nuclei", Some("UnsignedByteType".to_string()), (0.0, 255.0))
        .unwrap();

    assert_eq!(viewer.state().current_source(), Some(source.clone()));
    assert_eq!(viewer.panel().names().name_of(&source).as_deref(), Some("nuclei"));
    assert!(viewer.transforms().saved_transformation(&source).is_some());
    assert!(
        viewer
            .state()
            .contains(viewer.panel().all_group(), &source)
    );
    let sync = viewer.panel().source_tab().intensity().sync();
    assert_eq!((sync.lower_bound(), sync.upper_bound()), (0.0, 255.0));
    assert!(!viewer.state().has_pending_events());
}

#[test]
fn remove_source_undoes_add() {
    let mut viewer = ViewerHandle::new(1000).unwrap();
    let first = viewer.add_source("a", None, (0.0, 1.0)).unwrap();
    let second = viewer.add_source("a", None, (0.0, 1.0)).unwrap();
    assert_eq!(viewer.panel().names().name_of(&second).as_deref(), Some("0_a"));

    assert_eq!(viewer.remove_source(&first), Ok(true));
    assert_eq!(viewer.remove_source(&first), Ok(false));
    assert!(viewer.panel().names().name_of(&first).is_none());
    assert!(viewer.transforms().saved_transformation(&first).is_none());
    assert_eq!(viewer.panel().source_tab().selected(), Some(&second));
    assert_eq!(
        viewer.panel().group_tab().membership().selected,
        [second.clone()]
    );
}

#[test]
fn intensity_edits_reach_the_source_display_range() {
    let mut viewer = ViewerHandle::new(1000).unwrap();
    viewer.add_source("a", None, (0.0, 100.0)).unwrap();
    viewer
        .panel_mut()
        .source_tab_mut()
        .intensity_mut()
        .sync_mut()
        .slider_moved(100, 500);
    assert_eq!(
        viewer.state().sources()[0].setup.display_range(),
        (10.0, 50.0)
    );
}

#[test]
fn manual_mode_locks_the_panel_until_saved() {
    let mut viewer = ViewerHandle::new(1000).unwrap();
    let source = viewer.add_source("a", Some("f32".to_string()), (0.0, 1.0)).unwrap();
    viewer.set_manual_transform_active(true).unwrap();

    let (state, panel, _) = viewer.parts_mut();
    assert_eq!(
        panel.source_tab_mut().select_source(state, &source),
        Err(ControlError::Disabled)
    );

    let step = AffineTransform3D::translation(0.0, 2.0, 0.0);
    assert_eq!(viewer.apply_manual_step(&step), Ok(true));
    viewer.set_manual_transform_active(false).unwrap();
    assert!(viewer.panel().is_enabled());
    assert_eq!(viewer.transforms().saved_transformation(&source), Some(&step));
}

#[test]
fn group_tab_selection_switches_display_mode() {
    let mut viewer = ViewerHandle::new(1000).unwrap();
    let (state, panel, _) = viewer.parts_mut();
    panel.select_tab(state, crate::controls::Tab::Groups);
    viewer.pump_events();
    assert_eq!(viewer.state().display_mode(), DisplayMode::FusedGroup);
}
