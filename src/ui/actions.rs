use std::path::PathBuf;

use tracing::warn;

use crate::controls::{ControlError, Tab};
use crate::model::{AffineTransform3D, GroupHandle, SourceHandle};
use crate::session::{PanelSnapshot, load_session, save_snapshot};
use crate::viewer::ViewerHandle;

/// Everything a frame can ask of the viewer. Collected while drawing and
/// applied once the frame's borrows are released.
#[derive(Debug, Clone)]
pub enum UiAction {
    OpenSession(PathBuf),
    SaveSnapshot(PathBuf),
    SelectTab(Tab),
    SelectSource(SourceHandle),
    ToggleSourceVisibility,
    SingleSourceMode(bool),
    SetColor(u32),
    SelectGroup(GroupHandle),
    CreateGroup(String),
    RemoveGroup(GroupHandle),
    ToggleMembership(SourceHandle),
    ToggleGroupVisibility,
    SingleGroupMode(bool),
    SliderMoved { lower: u32, upper: u32 },
    CommitMin(String),
    CommitMax(String),
    MinStep(f64),
    MaxStep(f64),
    Shrink,
    ToggleInterpolation,
    ManualTransform(bool),
    Nudge([f64; 3]),
    Reset { single: bool },
    EnableRotation(bool),
    EnableTranslation(bool),
}

/// Applies one action and returns a status line for the window footer.
pub fn apply_action(viewer: &mut ViewerHandle, action: UiAction) -> Result<String, String> {
    let result = apply(viewer, action);
    viewer.pump_events();
    result.map_err(|error| {
        warn!(%error, "panel action failed");
        error
    })
}

fn apply(viewer: &mut ViewerHandle, action: UiAction) -> Result<String, String> {
    let describe = |error: ControlError| error.to_string();
    let (state, panel, _) = viewer.parts_mut();
    match action {
        UiAction::OpenSession(path) => {
            let session = load_session(&path).map_err(|error| error.to_string())?;
            *viewer = session.open().map_err(|error| error.to_string())?;
            Ok(format!("Opened {}", path.display()))
        }
        UiAction::SaveSnapshot(path) => {
            save_snapshot(&path, &PanelSnapshot::capture(viewer))
                .map_err(|error| error.to_string())?;
            Ok(format!("Saved {}", path.display()))
        }
        UiAction::SelectTab(tab) => {
            panel.select_tab(state, tab);
            Ok(format!("{tab:?} tab"))
        }
        UiAction::SelectSource(source) => {
            panel
                .source_tab_mut()
                .select_source(state, &source)
                .map_err(describe)?;
            Ok(format!("Selected {}", panel.names().display_name(&source)))
        }
        UiAction::ToggleSourceVisibility => {
            let visible = panel
                .source_tab_mut()
                .toggle_visibility(state)
                .map_err(describe)?;
            Ok(visibility_status("Source", visible))
        }
        UiAction::SingleSourceMode(single) => {
            panel
                .source_tab_mut()
                .set_single_source_mode(state, single)
                .map_err(describe)?;
            Ok(mode_status("Single source", single))
        }
        UiAction::SetColor(argb) => {
            if panel.source_tab_mut().set_color(argb).map_err(describe)? {
                Ok(format!("Color #{:06x}", argb & 0x00ff_ffff))
            } else {
                Ok("Source has no color".to_string())
            }
        }
        UiAction::SelectGroup(group) => {
            panel
                .group_tab_mut()
                .select_group(state, &group)
                .map_err(describe)?;
            Ok(format!("Selected group {}", group.label()))
        }
        UiAction::CreateGroup(name) => {
            let group = panel
                .group_tab_mut()
                .create_group(state, &name)
                .map_err(describe)?;
            Ok(format!("Created group {}", group.label()))
        }
        UiAction::RemoveGroup(group) => {
            panel
                .group_tab_mut()
                .remove_group(state, &group)
                .map_err(describe)?;
            Ok(format!("Removed group {}", group.label()))
        }
        UiAction::ToggleMembership(source) => {
            let member = panel
                .group_tab_mut()
                .toggle_membership(state, &source)
                .map_err(describe)?;
            let name = panel.names().display_name(&source);
            Ok(if member {
                format!("{name} added to group")
            } else {
                format!("{name} removed from group")
            })
        }
        UiAction::ToggleGroupVisibility => {
            let visible = panel
                .group_tab_mut()
                .toggle_visibility(state)
                .map_err(describe)?;
            Ok(visibility_status("Group", visible))
        }
        UiAction::SingleGroupMode(single) => {
            panel
                .group_tab_mut()
                .set_single_group_mode(state, single)
                .map_err(describe)?;
            Ok(mode_status("Single group", single))
        }
        UiAction::SliderMoved { lower, upper } => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.slider_moved(lower, upper);
            Ok(range_status(sync.lower_value(), sync.upper_value()))
        }
        UiAction::CommitMin(text) => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.commit_min_text(&text);
            Ok(range_status(sync.lower_value(), sync.upper_value()))
        }
        UiAction::CommitMax(text) => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.commit_max_text(&text);
            Ok(range_status(sync.lower_value(), sync.upper_value()))
        }
        UiAction::MinStep(value) => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.min_spinner_changed(value);
            Ok(range_status(sync.lower_value(), sync.upper_value()))
        }
        UiAction::MaxStep(value) => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.max_spinner_changed(value);
            Ok(range_status(sync.lower_value(), sync.upper_value()))
        }
        UiAction::Shrink => {
            let sync = panel.source_tab_mut().intensity_mut().sync_mut();
            sync.shrink();
            Ok(format!(
                "Bounds [{}, {}]",
                sync.lower_bound(),
                sync.upper_bound()
            ))
        }
        UiAction::ToggleInterpolation => {
            let interpolation = state.interpolation().toggled();
            state.set_interpolation(interpolation);
            Ok(format!("{} interpolation", interpolation.label()))
        }
        UiAction::ManualTransform(active) => {
            viewer
                .set_manual_transform_active(active)
                .map_err(describe)?;
            Ok(mode_status("Manual transformation", active))
        }
        UiAction::Nudge([x, y, z]) => {
            let step = AffineTransform3D::translation(x, y, z);
            if viewer.apply_manual_step(&step).map_err(describe)? {
                Ok(format!("Moved by ({x}, {y}, {z})"))
            } else {
                Ok("Enable manual transformation first".to_string())
            }
        }
        UiAction::Reset { single } => {
            viewer.reset_transformation(single).map_err(describe)?;
            Ok(if single {
                "Reset current source".to_string()
            } else {
                "Reset all sources".to_string()
            })
        }
        UiAction::EnableRotation(enabled) => {
            viewer.enable_rotation(enabled);
            Ok(mode_status("Rotation", enabled))
        }
        UiAction::EnableTranslation(enabled) => {
            viewer.enable_translation(enabled);
            Ok(mode_status("Translation", enabled))
        }
    }
}

fn visibility_status(what: &str, visible: bool) -> String {
    if visible {
        format!("{what} visible")
    } else {
        format!("{what} hidden")
    }
}

fn mode_status(what: &str, enabled: bool) -> String {
    if enabled {
        format!("{what} on")
    } else {
        format!("{what} off")
    }
}

fn range_status(lower: f64, upper: f64) -> String {
    format!("Display range [{lower}, {upper}]")
}
