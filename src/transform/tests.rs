use crate::controls::SourceChangeListener;
use crate::index::IndexMapper;
use crate::model::{
    AffineTransform3D, ConverterSetup, GroupHandle, SourceHandle, ViewerState, VisibilityModel,
};

use super::TransformationModel;

fn viewer(names: &[&str]) -> (ViewerState, TransformationModel, Vec<SourceHandle>) {
    let mut model = ViewerState::new();
    let mut transforms = TransformationModel::new();
    let handles = names
        .iter()
        .map(|name| SourceHandle::new(*name, Some("f32".to_string())))
        .collect::<Vec<_>>();
    for handle in &handles {
        let setup = ConverterSetup::new(0.0, 1.0);
        model.add_source(handle.clone(), setup.clone()).unwrap();
        transforms
            .source_added(&mut model, handle, &setup)
            .unwrap();
    }
    (model, transforms, handles)
}

fn shift(x: f64) -> AffineTransform3D {
    AffineTransform3D::translation(x, 0.0, 0.0)
}

#[test]
fn added_sources_start_with_their_fixed_transform() {
    let (_, transforms, handles) = viewer(&["a"]);
    assert_eq!(
        transforms.saved_transformation(&handles[0]),
        Some(&AffineTransform3D::identity())
    );
}

#[test]
fn steps_are_ignored_outside_manual_mode() {
    let (mut model, mut transforms, _) = viewer(&["a"]);
    assert_eq!(transforms.apply_manual_step(&mut model, &shift(1.0)), Ok(false));
    assert!(model.sources()[0].incremental_transform.is_identity());
}

#[test]
fn leaving_manual_mode_saves_the_current_source() {
    let (mut model, mut transforms, handles) = viewer(&["a", "b"]);
    transforms.set_manual_transform_active(&mut model, true).unwrap();
    transforms.apply_manual_step(&mut model, &shift(2.0)).unwrap();
    transforms.apply_manual_step(&mut model, &shift(3.0)).unwrap();
    transforms.set_manual_transform_active(&mut model, false).unwrap();

    assert_eq!(model.sources()[0].fixed_transform, shift(5.0));
    assert!(model.sources()[0].incremental_transform.is_identity());
    assert_eq!(transforms.saved_transformation(&handles[0]), Some(&shift(5.0)));
    assert_eq!(
        transforms.saved_transformation(&handles[1]),
        Some(&AffineTransform3D::identity())
    );
}

#[test]
fn grouping_mode_saves_every_member_of_the_current_group() {
    let (mut model, mut transforms, handles) = viewer(&["a", "b", "c"]);
    let group = GroupHandle::new("pair");
    model.add_group(group.clone(), "pair").unwrap();
    model.set_current_group(&group).unwrap();
    model.add_source_to_group(&handles[0], &group).unwrap();
    model.add_source_to_group(&handles[2], &group).unwrap();
    model.set_grouping_enabled(true);

    transforms.set_manual_transform_active(&mut model, true).unwrap();
    transforms.apply_manual_step(&mut model, &shift(1.5)).unwrap();
    transforms.set_manual_transform_active(&mut model, false).unwrap();

    assert_eq!(transforms.saved_transformation(&handles[0]), Some(&shift(1.5)));
    assert_eq!(transforms.saved_transformation(&handles[2]), Some(&shift(1.5)));
    assert!(model.sources()[1].fixed_transform.is_identity());
}

#[test]
fn single_reset_discards_the_pending_edit() {
    let (mut model, mut transforms, _) = viewer(&["a"]);
    transforms.set_manual_transform_active(&mut model, true).unwrap();
    transforms.apply_manual_step(&mut model, &shift(4.0)).unwrap();
    transforms.reset(&mut model, true).unwrap();
    assert!(model.sources()[0].incremental_transform.is_identity());
    assert!(model.sources()[0].fixed_transform.is_identity());
}

#[test]
fn full_reset_restores_saved_transformations() {
    let (mut model, mut transforms, _) = viewer(&["a", "b"]);
    transforms.set_manual_transform_active(&mut model, true).unwrap();
    transforms.apply_manual_step(&mut model, &shift(7.0)).unwrap();
    transforms.set_manual_transform_active(&mut model, false).unwrap();

    transforms.reset(&mut model, false).unwrap();
    assert!(model.sources()[0].fixed_transform.is_identity());
    assert_eq!(model.sources()[0].incremental_transform, shift(7.0));
    assert!(model.sources()[1].incremental_transform.is_identity());
}

#[test]
fn reset_skips_placeholder_sources() {
    let mut model = ViewerState::new();
    let mut transforms = TransformationModel::new();
    let placeholder = SourceHandle::placeholder("pending");
    model
        .add_source(placeholder.clone(), ConverterSetup::new(0.0, 1.0))
        .unwrap();
    model.source_state_mut(0).unwrap().incremental_transform = shift(1.0);

    transforms.reset(&mut model, true).unwrap();
    assert_eq!(model.sources()[0].incremental_transform, shift(1.0));
}

#[test]
fn removed_sources_forget_their_transformation() {
    let (mut model, mut transforms, handles) = viewer(&["a"]);
    model.remove_source(&handles[0]);
    transforms.source_removed(&mut model, &handles[0]).unwrap();
    assert_eq!(transforms.saved_transformation(&handles[0]), None);
}

#[test]
fn behaviour_blocks_toggle() {
    let mut transforms = TransformationModel::new();
    assert!(transforms.blocked_behaviours().is_empty());

    transforms.enable_rotation(false);
    assert!(!transforms.is_rotation_enabled());
    assert!(transforms.is_blocked("drag rotate"));
    assert!(!transforms.is_blocked("drag translate"));

    transforms.enable_translation(false);
    assert_eq!(transforms.blocked_behaviours().len(), 18);

    transforms.enable_rotation(true);
    assert!(transforms.is_rotation_enabled());
    assert_eq!(
        transforms.blocked_behaviours(),
        ["drag translate", "2d drag translate"]
    );
}
