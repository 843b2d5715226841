//! Property tests for the panel invariants:
//!
//! 1. Handle lookups always report the handle's current list position
//! 2. Registered names are pairwise distinct
//! 3. Both directions of the name registry agree
//! 4. Bounds and values stay ordered under any stimulus sequence
//! 5. Slider positions survive a value round trip

use std::collections::HashSet;

use proptest::prelude::*;
use viewer_panel_rs::index::IndexMapper;
use viewer_panel_rs::model::{ConverterSetup, SourceHandle, ViewerState};
use viewer_panel_rs::names::NameRegistry;
use viewer_panel_rs::range::{Range, RangeSync, SliderMapping, SourceRange};

#[derive(Debug, Clone)]
enum ListOp {
    Add(usize),
    Remove(usize),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        (0usize..4).prop_map(ListOp::Add),
        (0usize..16).prop_map(ListOp::Remove),
    ]
}

const NAMES: [&str; 4] = ["ch0", "ch1", "0_ch0", "dapi"];

#[derive(Debug, Clone)]
enum Stimulus {
    Slider(u32, u32),
    CommitMin(f64),
    CommitMax(f64),
    Garbage,
    MinStep(f64),
    MaxStep(f64),
    Shrink,
}

fn stimulus(length: u32) -> impl Strategy<Value = Stimulus> {
    prop_oneof![
        (0..=length, 0..=length).prop_map(|(a, b)| Stimulus::Slider(a.min(b), a.max(b))),
        (-1000.0f64..1000.0).prop_map(Stimulus::CommitMin),
        (-1000.0f64..1000.0).prop_map(Stimulus::CommitMax),
        Just(Stimulus::Garbage),
        (-1000.0f64..1000.0).prop_map(Stimulus::MinStep),
        (-1000.0f64..1000.0).prop_map(Stimulus::MaxStep),
        Just(Stimulus::Shrink),
        prop_oneof![Just(f64::MAX), Just(1e308), Just(-1e308), Just(-f64::MAX)]
            .prop_map(Stimulus::CommitMax),
        prop_oneof![Just(f64::MAX), Just(1e308), Just(-1e308), Just(-f64::MAX)]
            .prop_map(Stimulus::CommitMin),
    ]
}

proptest! {
    #[test]
    fn handle_positions_track_the_source_list(ops in prop::collection::vec(list_op(), 1..40)) {
        let mut state = ViewerState::new();
        let mut shadow: Vec<SourceHandle> = Vec::new();
        let mut removed: Vec<SourceHandle> = Vec::new();

        for op in ops {
            match op {
                ListOp::Add(name) => {
                    let handle = SourceHandle::new(NAMES[name], None);
                    state.add_source(handle.clone(), ConverterSetup::new(0.0, 1.0)).unwrap();
                    shadow.push(handle);
                }
                ListOp::Remove(pick) if !shadow.is_empty() => {
                    let handle = shadow.remove(pick % shadow.len());
                    prop_assert!(state.remove_source(&handle).is_some());
                    removed.push(handle);
                }
                ListOp::Remove(_) => {}
            }

            for (position, handle) in shadow.iter().enumerate() {
                prop_assert_eq!(state.source_index(handle), Some(position));
            }
            for handle in &removed {
                prop_assert_eq!(state.source_index(handle), None);
                prop_assert!(state.is_source_active(handle).is_err());
            }
        }
    }

    #[test]
    fn registered_names_stay_unique_and_consistent(ops in prop::collection::vec(list_op(), 1..60)) {
        let registry = NameRegistry::new();
        let mut live: Vec<SourceHandle> = Vec::new();

        for op in ops {
            match op {
                ListOp::Add(name) => {
                    let handle = SourceHandle::new(NAMES[name], None);
                    registry.add(&handle).unwrap();
                    live.push(handle);
                }
                ListOp::Remove(pick) if !live.is_empty() => {
                    let handle = live.remove(pick % live.len());
                    prop_assert!(registry.remove(&handle).is_some());
                    prop_assert!(!registry.contains(&handle));
                }
                ListOp::Remove(_) => {}
            }

            let names = live
                .iter()
                .map(|handle| registry.name_of(handle).unwrap())
                .collect::<Vec<_>>();
            prop_assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
            for (handle, name) in live.iter().zip(&names) {
                let back = registry.source_of(name).unwrap();
                prop_assert_eq!(&back, handle);
                let back_name = registry.name_of(&back);
                prop_assert_eq!(back_name.as_ref(), Some(name));
            }
            prop_assert_eq!(registry.len(), live.len());
        }
    }

    #[test]
    fn range_stays_ordered_under_any_stimuli(
        length in 1u32..5000,
        ops in prop::collection::vec(stimulus(1000), 1..50),
    ) {
        let setup = ConverterSetup::new(0.0, 1.0);
        let mut sync = RangeSync::new(length);
        sync.set_range(Some(SourceRange::new(setup.clone())));

        for op in ops {
            match op {
                Stimulus::Slider(lower, upper) => sync.slider_moved(lower, upper),
                Stimulus::CommitMin(value) => sync.commit_min_text(&value.to_string()),
                Stimulus::CommitMax(value) => sync.commit_max_text(&value.to_string()),
                Stimulus::Garbage => sync.commit_max_text("not a number"),
                Stimulus::MinStep(value) => sync.min_spinner_changed(value),
                Stimulus::MaxStep(value) => sync.max_spinner_changed(value),
                Stimulus::Shrink => sync.shrink(),
            }

            prop_assert!(sync.lower_bound() <= sync.lower_value());
            prop_assert!(sync.lower_value() <= sync.upper_value());
            prop_assert!(sync.upper_value() <= sync.upper_bound());
            prop_assert!(sync.lower_position() <= sync.upper_position());
            prop_assert!(sync.upper_position() <= length);

            let range = sync.range().unwrap();
            prop_assert_eq!(range.lower_bound(), sync.lower_bound());
            prop_assert_eq!(range.upper_bound(), sync.upper_bound());
            prop_assert_eq!(setup.display_range(), (sync.lower_value(), sync.upper_value()));
        }
    }

    #[test]
    fn slider_positions_round_trip(
        lower in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 1u32..20_000,
        fraction in 0.0f64..=1.0,
    ) {
        let mapping = SliderMapping::new(lower, lower + span, length);
        let pos = (fraction * f64::from(length)).round() as u32;
        let back = mapping.value_to_pos(mapping.pos_to_value(pos)).unwrap();
        prop_assert!(back.abs_diff(pos) <= 1);
    }
}
