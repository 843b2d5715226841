//! Manual transformation of the current source or group.

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use crate::controls::{self, SourceChangeListener};
use crate::index::IndexMapper;
use crate::model::{
    AffineTransform3D, ConverterSetup, Result, SourceHandle, ViewerState, VisibilityModel,
};

pub const BLOCK_ROTATION: &str = "blockRotation";
pub const BLOCK_TRANSLATION: &str = "blockTranslation";

const ROTATION_BEHAVIOURS: &[&str] = &[
    "rotate left",
    "rotate left slow",
    "rotate left fast",
    "rotate right",
    "rotate right slow",
    "rotate right fast",
    "drag rotate",
    "drag rotate slow",
    "drag rotate fast",
    "2d drag rotate",
    "2d scroll rotate",
    "2d scroll rotate slow",
    "2d scroll rotate fast",
    "2d scroll translate",
    "2d rotate left",
    "2d rotate right",
];

const TRANSLATION_BEHAVIOURS: &[&str] = &["drag translate", "2d drag translate"];

/// Tracks whether manual editing is on, which navigation behaviours are
/// blocked, and the last saved transform of every source.
#[derive(Debug, Default)]
pub struct TransformationModel {
    manual_active: bool,
    blocked: BTreeMap<&'static str, &'static [&'static str]>,
    saved: HashMap<SourceHandle, AffineTransform3D>,
}

impl TransformationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_manual_transform_active(&self) -> bool {
        self.manual_active
    }

    /// Leaving manual mode bakes the edited transforms and saves them.
    pub fn set_manual_transform_active(
        &mut self,
        model: &mut ViewerState,
        active: bool,
    ) -> Result<()> {
        if self.manual_active == active {
            return Ok(());
        }
        self.manual_active = active;
        info!(active, "manual transformation");
        if !active {
            self.save_transformation(model)?;
        }
        Ok(())
    }

    /// Applies `step` on top of the incremental transform of every source
    /// being edited. Ignored outside manual mode.
    pub fn apply_manual_step(
        &mut self,
        model: &mut ViewerState,
        step: &AffineTransform3D,
    ) -> Result<bool> {
        if !self.manual_active {
            return Ok(false);
        }
        for index in edited_positions(model) {
            let state = model.source_state_mut(index)?;
            state.incremental_transform = step.concatenate(&state.incremental_transform);
        }
        Ok(true)
    }

    /// In a grouping mode every member of the current group is saved,
    /// otherwise only the current source.
    pub fn save_transformation(&mut self, model: &mut ViewerState) -> Result<()> {
        for index in edited_positions(model) {
            let state = model.source_state_mut(index)?;
            state.fixed_transform = state
                .incremental_transform
                .concatenate(&state.fixed_transform);
            state.incremental_transform = AffineTransform3D::identity();
            debug!(source = state.handle.name(), "saved transformation");
            self.saved
                .insert(state.handle.clone(), state.fixed_transform);
        }
        Ok(())
    }

    pub fn saved_transformation(&self, source: &SourceHandle) -> Option<&AffineTransform3D> {
        self.saved.get(source)
    }

    /// Nothing happens while the current source is a placeholder.
    ///
    /// `single` discards the pending edit of the current source. Otherwise
    /// every source goes back to its last saved transformation.
    pub fn reset(&mut self, model: &mut ViewerState, single: bool) -> Result<()> {
        let Some(current) = model.current_source() else {
            return Ok(());
        };
        if current.is_placeholder() {
            debug!("reset skipped for placeholder source");
            return Ok(());
        }
        if single {
            let index = model.current_source_index();
            model.source_state_mut(index)?.incremental_transform =
                AffineTransform3D::identity();
            return Ok(());
        }
        for index in 0..model.sources().len() {
            let state = model.source_state_mut(index)?;
            state.fixed_transform = AffineTransform3D::identity();
            state.incremental_transform = self
                .saved
                .get(&state.handle)
                .copied()
                .unwrap_or_default();
        }
        Ok(())
    }

    pub fn enable_rotation(&mut self, enabled: bool) {
        self.set_block(BLOCK_ROTATION, ROTATION_BEHAVIOURS, !enabled);
    }

    pub fn enable_translation(&mut self, enabled: bool) {
        self.set_block(BLOCK_TRANSLATION, TRANSLATION_BEHAVIOURS, !enabled);
    }

    pub fn is_rotation_enabled(&self) -> bool {
        !self.blocked.contains_key(BLOCK_ROTATION)
    }

    pub fn is_translation_enabled(&self) -> bool {
        !self.blocked.contains_key(BLOCK_TRANSLATION)
    }

    fn set_block(&mut self, name: &'static str, behaviours: &'static [&'static str], block: bool) {
        if block {
            self.blocked.insert(name, behaviours);
        } else {
            self.blocked.remove(name);
        }
    }

    /// Every behaviour name currently mapped to a no-op.
    pub fn blocked_behaviours(&self) -> Vec<&'static str> {
        self.blocked
            .values()
            .flat_map(|behaviours| behaviours.iter().copied())
            .collect()
    }

    pub fn is_blocked(&self, behaviour: &str) -> bool {
        self.blocked
            .values()
            .any(|behaviours| behaviours.contains(&behaviour))
    }
}

fn edited_positions(model: &ViewerState) -> Vec<usize> {
    if model.is_grouping_enabled() {
        model
            .current_group()
            .and_then(|group| model.group_state(&group).ok())
            .map(|group| group.members.iter().copied().collect())
            .unwrap_or_default()
    } else if model.current_source().is_some() {
        vec![model.current_source_index()]
    } else {
        Vec::new()
    }
}

impl SourceChangeListener for TransformationModel {
    fn source_added(
        &mut self,
        model: &mut ViewerState,
        source: &SourceHandle,
        _setup: &ConverterSetup,
    ) -> controls::Result<()> {
        let initial = model.source_state(source)?.fixed_transform;
        self.saved.insert(source.clone(), initial);
        Ok(())
    }

    fn source_removed(
        &mut self,
        _model: &mut ViewerState,
        source: &SourceHandle,
    ) -> controls::Result<()> {
        self.saved.remove(source);
        Ok(())
    }
}
