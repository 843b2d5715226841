use serde::{Deserialize, Serialize};

use crate::index::IndexMapper;
use crate::model::{DisplayMode, Interpolation, VisibilityModel};
use crate::viewer::ViewerHandle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSnapshot {
    /// Unique display name.
    pub name: String,
    pub intrinsic_name: String,
    pub pixel_type: Option<String>,
    pub display_range: [f64; 2],
    pub active: bool,
    pub color: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSnapshot {
    pub name: String,
    pub active: bool,
    /// Unique names of the members.
    pub sources: Vec<String>,
}

/// What the control panel currently shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSnapshot {
    pub sources: Vec<SourceSnapshot>,
    pub groups: Vec<GroupSnapshot>,
    pub current_source: Option<String>,
    pub current_group: Option<String>,
    pub display_mode: DisplayMode,
    pub interpolation: Interpolation,
}

impl PanelSnapshot {
    pub fn capture(viewer: &ViewerHandle) -> Self {
        let state = viewer.state();
        let names = viewer.panel().names();

        let sources = state
            .sources()
            .iter()
            .map(|source| {
                let (min, max) = source.setup.display_range();
                SourceSnapshot {
                    name: names.display_name(&source.handle),
                    intrinsic_name: source.handle.name().to_string(),
                    pixel_type: source.handle.pixel_type().map(str::to_string),
                    display_range: [min, max],
                    active: source.active,
                    color: source.setup.color(),
                }
            })
            .collect();

        let groups = state
            .groups()
            .iter()
            .map(|group| GroupSnapshot {
                name: group.name.clone(),
                active: group.active,
                sources: state
                    .group_sources(&group.handle)
                    .iter()
                    .map(|source| names.display_name(source))
                    .collect(),
            })
            .collect();

        Self {
            sources,
            groups,
            current_source: state
                .current_source()
                .map(|source| names.display_name(&source)),
            current_group: state
                .current_group()
                .and_then(|group| state.group_state(&group).ok())
                .map(|group| group.name.clone()),
            display_mode: state.display_mode(),
            interpolation: state.interpolation(),
        }
    }
}
