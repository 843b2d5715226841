//! Handle-based access to the position-based visibility model.
//!
//! Positions in the viewer's source and group lists shift whenever something
//! is added or removed, so every method here resolves handles against the
//! model's current lists. Nothing is cached between calls.

mod error;


pub use error::{IndexError, Result};

use crate::model::{GroupHandle, GroupState, SourceHandle, SourceState, VisibilityModel};

pub trait IndexMapper: VisibilityModel {
    /// The source at the model's current-source position, if that position
    /// is inside the current list.
    fn current_source(&self) -> Option<SourceHandle> {
        self.sources()
            .get(self.current_source_index())
            .map(|state| state.handle.clone())
    }

    fn current_group(&self) -> Option<GroupHandle> {
        self.groups()
            .get(self.current_group_index())
            .map(|state| state.handle.clone())
    }

    fn source_index(&self, source: &SourceHandle) -> Option<usize> {
        self.sources()
            .iter()
            .position(|state| &state.handle == source)
    }

    fn group_index(&self, group: &GroupHandle) -> Option<usize> {
        self.groups().iter().position(|state| &state.handle == group)
    }

    fn source_state(&self, source: &SourceHandle) -> Result<&SourceState> {
        self.sources()
            .iter()
            .find(|state| &state.handle == source)
            .ok_or_else(|| IndexError::SourceNotFound(source.name().to_string()))
    }

    fn group_state(&self, group: &GroupHandle) -> Result<&GroupState> {
        self.groups()
            .iter()
            .find(|state| &state.handle == group)
            .ok_or_else(|| IndexError::GroupNotFound(group.label().to_string()))
    }

    fn is_source_active(&self, source: &SourceHandle) -> Result<bool> {
        self.source_state(source).map(|state| state.active)
    }

    fn is_group_active(&self, group: &GroupHandle) -> Result<bool> {
        self.group_state(group).map(|state| state.active)
    }

    /// True iff the source's current position is a member of the group.
    /// Unknown handles are never members.
    fn contains(&self, group: &GroupHandle, source: &SourceHandle) -> bool {
        let Some(source_index) = self.source_index(source) else {
            return false;
        };
        self.groups()
            .iter()
            .find(|state| &state.handle == group)
            .is_some_and(|state| state.members.contains(&source_index))
    }

    fn set_current_source(&mut self, source: &SourceHandle) -> Result<()> {
        let index = self
            .source_index(source)
            .ok_or_else(|| IndexError::SourceNotFound(source.name().to_string()))?;
        self.set_current_source_index(index)?;
        Ok(())
    }

    fn set_source_active(&mut self, source: &SourceHandle, active: bool) -> Result<()> {
        let index = self
            .source_index(source)
            .ok_or_else(|| IndexError::SourceNotFound(source.name().to_string()))?;
        self.set_source_active_at(index, active)?;
        Ok(())
    }

    /// Returns `false` without touching the model when the group is unknown.
    fn set_current_group(&mut self, group: &GroupHandle) -> Result<bool> {
        let Some(index) = self.group_index(group) else {
            return Ok(false);
        };
        self.set_current_group_index(index)?;
        Ok(true)
    }

    /// Returns `false` without touching the model when the group is unknown.
    fn set_group_active(&mut self, group: &GroupHandle, active: bool) -> Result<bool> {
        let Some(index) = self.group_index(group) else {
            return Ok(false);
        };
        self.set_group_active_at(index, active)?;
        Ok(true)
    }

    /// Returns `false` without touching the model when either handle is unknown.
    fn add_source_to_group(&mut self, source: &SourceHandle, group: &GroupHandle) -> Result<bool> {
        let (Some(source_index), Some(group_index)) =
            (self.source_index(source), self.group_index(group))
        else {
            return Ok(false);
        };
        self.add_source_to_group_at(source_index, group_index)?;
        Ok(true)
    }

    /// Returns `false` without touching the model when either handle is unknown.
    fn remove_source_from_group(
        &mut self,
        source: &SourceHandle,
        group: &GroupHandle,
    ) -> Result<bool> {
        let (Some(source_index), Some(group_index)) =
            (self.source_index(source), self.group_index(group))
        else {
            return Ok(false);
        };
        self.remove_source_from_group_at(source_index, group_index)?;
        Ok(true)
    }

    /// Handles of the group's members, in source-list order.
    fn group_sources(&self, group: &GroupHandle) -> Vec<SourceHandle> {
        let Ok(state) = self.group_state(group) else {
            return Vec::new();
        };
        state
            .members
            .iter()
            .filter_map(|&index| self.sources().get(index))
            .map(|source| source.handle.clone())
            .collect()
    }
}

impl<M: VisibilityModel + ?Sized> IndexMapper for M {}
