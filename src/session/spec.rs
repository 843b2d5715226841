use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::controls::ALL_GROUP_NAME;
use crate::index::IndexMapper;
use crate::model::{ConverterSetup, DisplayMode, GroupHandle, Interpolation, SourceHandle};
use crate::range::DEFAULT_SLIDER_LENGTH;
use crate::viewer::ViewerHandle;

use super::{Result, SessionError};

/// A viewer set up ahead of time: which sources it shows, how they are
/// grouped and how the panel looks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionSpec {
    #[serde(default)]
    pub panel: PanelSpec,
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
    #[serde(default)]
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub interpolation: Interpolation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSpec {
    #[serde(default = "default_slider_length")]
    pub slider_length: u32,
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self {
            slider_length: DEFAULT_SLIDER_LENGTH,
        }
    }
}

fn default_slider_length() -> u32 {
    DEFAULT_SLIDER_LENGTH
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceSpec {
    pub name: String,
    #[serde(default)]
    pub pixel_type: Option<String>,
    pub display_range: [f64; 2],
    #[serde(default = "default_true")]
    pub active: bool,
    /// ARGB; sources without one have no colour control.
    #[serde(default)]
    pub color: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSpec {
    pub name: String,
    /// Positions into `sources`.
    #[serde(default)]
    pub sources: Vec<usize>,
    #[serde(default)]
    pub active: bool,
}

impl SessionSpec {
    pub fn validate(&self) -> Result<()> {
        if self.panel.slider_length == 0 {
            return Err(SessionError::Invalid(
                "panel slider length must be positive".to_string(),
            ));
        }
        for (index, source) in self.sources.iter().enumerate() {
            let [min, max] = source.display_range;
            if !min.is_finite() || !max.is_finite() {
                return Err(SessionError::Invalid(format!(
                    "source {index} (`{}`) has a non-finite display range",
                    source.name
                )));
            }
            if min > max {
                return Err(SessionError::Invalid(format!(
                    "source {index} (`{}`) has an inverted display range [{min}, {max}]",
                    source.name
                )));
            }
        }

        let mut names = HashSet::new();
        for group in &self.groups {
            let name = group.name.trim();
            if name.is_empty() {
                return Err(SessionError::Invalid(
                    "group names must not be empty".to_string(),
                ));
            }
            if name == ALL_GROUP_NAME {
                return Err(SessionError::Invalid(format!(
                    "group name `{ALL_GROUP_NAME}` is reserved"
                )));
            }
            if !names.insert(name) {
                return Err(SessionError::Invalid(format!("duplicate group `{name}`")));
            }
            if let Some(&member) = group.sources.iter().find(|&&m| m >= self.sources.len()) {
                return Err(SessionError::Invalid(format!(
                    "group `{name}` refers to source {member}, but only {} are defined",
                    self.sources.len()
                )));
            }
        }
        Ok(())
    }

    /// Builds a viewer showing this session.
    pub fn open(&self) -> Result<ViewerHandle> {
        self.validate()?;
        let mut viewer = ViewerHandle::new(self.panel.slider_length)?;

        let mut handles = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            let handle = SourceHandle::new(source.name.as_str(), source.pixel_type.clone());
            let [min, max] = source.display_range;
            let setup = match source.color {
                Some(argb) => ConverterSetup::with_color(min, max, argb),
                None => ConverterSetup::new(min, max),
            };
            viewer.add_source_with_setup(handle.clone(), setup)?;
            if !source.active {
                viewer.state_mut().set_source_active(&handle, false)?;
            }
            handles.push(handle);
        }

        for group in &self.groups {
            let name = group.name.trim();
            let handle = GroupHandle::new(name);
            let state = viewer.state_mut();
            state.add_group(handle.clone(), name)?;
            for &member in &group.sources {
                state.add_source_to_group(&handles[member], &handle)?;
            }
            state.set_group_active(&handle, group.active)?;
            debug!(group = name, members = group.sources.len(), "session group");
        }

        let state = viewer.state_mut();
        state.set_display_mode(self.display_mode);
        state.set_interpolation(self.interpolation);
        viewer.pump_events();
        Ok(viewer)
    }
}
