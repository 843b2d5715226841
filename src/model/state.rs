use std::collections::BTreeSet;

use tracing::debug;

use super::{
    AffineTransform3D, ConverterSetup, DisplayMode, GroupHandle, Interpolation, ModelError,
    Result, SourceHandle, VisibilityEvent,
};

#[derive(Debug, Clone)]
pub struct SourceState {
    pub handle: SourceHandle,
    pub active: bool,
    pub setup: ConverterSetup,
    pub fixed_transform: AffineTransform3D,
    pub incremental_transform: AffineTransform3D,
}

impl SourceState {
    pub fn new(handle: SourceHandle, setup: ConverterSetup) -> Self {
        Self {
            handle,
            active: true,
            setup,
            fixed_transform: AffineTransform3D::identity(),
            incremental_transform: AffineTransform3D::identity(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupState {
    pub handle: GroupHandle,
    pub name: String,
    pub active: bool,
    /// Positions into the model's current source list.
    pub members: BTreeSet<usize>,
}

/// Position-based visibility and grouping API of a viewer.
///
/// Positions are only meaningful until the next add or remove; callers that
/// want stable identities go through `IndexMapper`.
pub trait VisibilityModel {
    fn sources(&self) -> &[SourceState];

    fn groups(&self) -> &[GroupState];

    /// May point past the end of `sources()` (for example when empty).
    fn current_source_index(&self) -> usize;

    /// May point past the end of `groups()`.
    fn current_group_index(&self) -> usize;

    fn set_current_source_index(&mut self, index: usize) -> Result<()>;

    fn set_current_group_index(&mut self, index: usize) -> Result<()>;

    fn set_source_active_at(&mut self, index: usize, active: bool) -> Result<()>;

    fn set_group_active_at(&mut self, index: usize, active: bool) -> Result<()>;

    fn add_source_to_group_at(&mut self, source: usize, group: usize) -> Result<()>;

    fn remove_source_from_group_at(&mut self, source: usize, group: usize) -> Result<()>;
}

/// In-memory viewer state: the ordered source list, the group list, the
/// current selection and display mode, plus a queue of change events.
#[derive(Debug, Default)]
pub struct ViewerState {
    sources: Vec<SourceState>,
    groups: Vec<GroupState>,
    current_source: usize,
    current_group: usize,
    display_mode: DisplayMode,
    interpolation: Interpolation,
    events: Vec<VisibilityEvent>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(&mut self, event: VisibilityEvent) {
        debug!(?event, "visibility event");
        self.events.push(event);
    }

    /// Takes every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<VisibilityEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn check_source(&self, index: usize) -> Result<()> {
        if index < self.sources.len() {
            Ok(())
        } else {
            Err(ModelError::SourceIndexOutOfBounds {
                index,
                len: self.sources.len(),
            })
        }
    }

    fn check_group(&self, index: usize) -> Result<()> {
        if index < self.groups.len() {
            Ok(())
        } else {
            Err(ModelError::GroupIndexOutOfBounds {
                index,
                len: self.groups.len(),
            })
        }
    }

    pub fn source_state_mut(&mut self, index: usize) -> Result<&mut SourceState> {
        self.check_source(index)?;
        Ok(&mut self.sources[index])
    }

    pub fn add_source(&mut self, handle: SourceHandle, setup: ConverterSetup) -> Result<usize> {
        if self.sources.iter().any(|state| state.handle == handle) {
            return Err(ModelError::SourceAlreadyPresent(handle.name().to_string()));
        }
        self.sources.push(SourceState::new(handle, setup));
        self.emit(VisibilityEvent::NumSourcesChanged);
        if self.sources.len() == 1 {
            self.current_source = 0;
            self.emit(VisibilityEvent::CurrentSourceChanged);
        }
        Ok(self.sources.len() - 1)
    }

    /// Removes the source and renumbers group membership so that every
    /// remaining member still points at the same source.
    pub fn remove_source(&mut self, handle: &SourceHandle) -> Option<usize> {
        let index = self.sources.iter().position(|state| &state.handle == handle)?;
        self.sources.remove(index);

        let mut assignment_changed = false;
        for group in &mut self.groups {
            let renumbered = group
                .members
                .iter()
                .filter(|&&member| member != index)
                .map(|&member| if member > index { member - 1 } else { member })
                .collect::<BTreeSet<_>>();
            if renumbered.len() != group.members.len() {
                assignment_changed = true;
            }
            group.members = renumbered;
        }

        let current_removed = self.current_source == index;
        if self.current_source > index {
            self.current_source -= 1;
        } else if current_removed && self.current_source >= self.sources.len() {
            self.current_source = self.sources.len().saturating_sub(1);
        }

        self.emit(VisibilityEvent::NumSourcesChanged);
        if assignment_changed {
            self.emit(VisibilityEvent::SourceToGroupAssignmentChanged);
        }
        if current_removed {
            self.emit(VisibilityEvent::CurrentSourceChanged);
        }
        Some(index)
    }

    pub fn add_group(&mut self, handle: GroupHandle, name: impl Into<String>) -> Result<usize> {
        if self.groups.iter().any(|group| group.handle == handle) {
            return Err(ModelError::GroupAlreadyPresent(handle.label().to_string()));
        }
        self.groups.push(GroupState {
            handle,
            name: name.into(),
            active: false,
            members: BTreeSet::new(),
        });
        self.emit(VisibilityEvent::NumGroupsChanged);
        Ok(self.groups.len() - 1)
    }

    pub fn remove_group(&mut self, handle: &GroupHandle) -> Option<usize> {
        let index = self.groups.iter().position(|group| &group.handle == handle)?;
        self.groups.remove(index);
        let current_removed = self.current_group == index;
        if self.current_group > index {
            self.current_group -= 1;
        } else if current_removed && self.current_group >= self.groups.len() {
            self.current_group = self.groups.len().saturating_sub(1);
        }
        self.emit(VisibilityEvent::NumGroupsChanged);
        if current_removed {
            self.emit(VisibilityEvent::CurrentGroupChanged);
        }
        Some(index)
    }

    pub fn set_group_name(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check_group(index)?;
        let name = name.into();
        if self.groups[index].name != name {
            self.groups[index].name = name;
            self.emit(VisibilityEvent::GroupNameChanged);
        }
        Ok(())
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        if self.display_mode != mode {
            self.display_mode = mode;
            self.emit(VisibilityEvent::DisplayModeChanged);
        }
    }

    pub fn is_grouping_enabled(&self) -> bool {
        self.display_mode.is_grouping()
    }

    pub fn set_grouping_enabled(&mut self, enabled: bool) {
        let fused = self.display_mode.is_fused();
        self.set_display_mode(DisplayMode::from_flags(enabled, fused));
    }

    pub fn is_fused_enabled(&self) -> bool {
        self.display_mode.is_fused()
    }

    pub fn set_fused_enabled(&mut self, enabled: bool) {
        let grouping = self.display_mode.is_grouping();
        self.set_display_mode(DisplayMode::from_flags(grouping, enabled));
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        if self.interpolation != interpolation {
            self.interpolation = interpolation;
            self.emit(VisibilityEvent::InterpolationChanged);
        }
    }
}

impl VisibilityModel for ViewerState {
    fn sources(&self) -> &[SourceState] {
        &self.sources
    }

    fn groups(&self) -> &[GroupState] {
        &self.groups
    }

    fn current_source_index(&self) -> usize {
        self.current_source
    }

    fn current_group_index(&self) -> usize {
        self.current_group
    }

    fn set_current_source_index(&mut self, index: usize) -> Result<()> {
        self.check_source(index)?;
        if self.current_source != index {
            self.current_source = index;
            self.emit(VisibilityEvent::CurrentSourceChanged);
        }
        Ok(())
    }

    fn set_current_group_index(&mut self, index: usize) -> Result<()> {
        self.check_group(index)?;
        if self.current_group != index {
            self.current_group = index;
            self.emit(VisibilityEvent::CurrentGroupChanged);
        }
        Ok(())
    }

    fn set_source_active_at(&mut self, index: usize, active: bool) -> Result<()> {
        self.check_source(index)?;
        if self.sources[index].active != active {
            self.sources[index].active = active;
            self.emit(VisibilityEvent::SourceActivityChanged);
        }
        Ok(())
    }

    fn set_group_active_at(&mut self, index: usize, active: bool) -> Result<()> {
        self.check_group(index)?;
        if self.groups[index].active != active {
            self.groups[index].active = active;
            self.emit(VisibilityEvent::GroupActivityChanged);
        }
        Ok(())
    }

    fn add_source_to_group_at(&mut self, source: usize, group: usize) -> Result<()> {
        self.check_source(source)?;
        self.check_group(group)?;
        if self.groups[group].members.insert(source) {
            self.emit(VisibilityEvent::SourceToGroupAssignmentChanged);
        }
        Ok(())
    }

    fn remove_source_from_group_at(&mut self, source: usize, group: usize) -> Result<()> {
        self.check_source(source)?;
        self.check_group(group)?;
        if self.groups[group].members.remove(&source) {
            self.emit(VisibilityEvent::SourceToGroupAssignmentChanged);
        }
        Ok(())
    }
}
