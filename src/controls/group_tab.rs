use tracing::{debug, info};

use crate::index::IndexMapper;
use crate::model::{GroupHandle, SourceHandle, ViewerState, VisibilityEvent, VisibilityModel};

use super::{ControlError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupEntry {
    pub group: GroupHandle,
    pub name: String,
    pub active: bool,
}

/// Sources split by whether they belong to the selected group. Both lists
/// keep source-list order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMembership {
    pub selected: Vec<SourceHandle>,
    pub remaining: Vec<SourceHandle>,
}

impl GroupMembership {
    fn of(model: &ViewerState, group: Option<&GroupHandle>) -> Self {
        let (selected, remaining): (Vec<_>, Vec<_>) = model
            .sources()
            .iter()
            .map(|state| state.handle.clone())
            .partition(|source| group.is_some_and(|group| model.contains(group, source)));
        Self {
            selected,
            remaining,
        }
    }
}

#[derive(Debug)]
pub struct GroupTab {
    all_group: GroupHandle,
    selected: Option<GroupHandle>,
    visible: bool,
    single_group_mode: bool,
    membership: GroupMembership,
    enabled: bool,
}

impl GroupTab {
    pub fn new(model: &ViewerState, all_group: GroupHandle) -> Self {
        let mut tab = Self {
            all_group,
            selected: None,
            visible: false,
            single_group_mode: !model.is_fused_enabled(),
            membership: GroupMembership::default(),
            enabled: true,
        };
        tab.refresh(model);
        tab
    }

    pub fn selected(&self) -> Option<&GroupHandle> {
        self.selected.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn single_group_mode(&self) -> bool {
        self.single_group_mode
    }

    pub fn membership(&self) -> &GroupMembership {
        &self.membership
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The "All" group can never be removed.
    pub fn can_remove_selected(&self) -> bool {
        self.enabled
            && self
                .selected
                .as_ref()
                .is_some_and(|group| group != &self.all_group)
    }

    pub fn entries(&self, model: &ViewerState) -> Vec<GroupEntry> {
        model
            .groups()
            .iter()
            .map(|state| GroupEntry {
                group: state.handle.clone(),
                name: state.name.clone(),
                active: state.active,
            })
            .collect()
    }

    pub fn select_group(&mut self, model: &mut ViewerState, group: &GroupHandle) -> Result<()> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        if !model.set_current_group(group)? {
            return Err(ControlError::NoCurrentGroup);
        }
        self.refresh(model);
        Ok(())
    }

    /// Adds an empty group with the given name and makes it current.
    pub fn create_group(&mut self, model: &mut ViewerState, name: &str) -> Result<GroupHandle> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ControlError::EmptyGroupName);
        }
        if model.groups().iter().any(|group| group.name == name) {
            return Err(ControlError::GroupAlreadyExists(name.to_string()));
        }
        let group = GroupHandle::new(name);
        model.add_group(group.clone(), name)?;
        model.set_current_group(&group)?;
        info!(group = name, "created group");
        self.refresh(model);
        Ok(group)
    }

    pub fn remove_group(&mut self, model: &mut ViewerState, group: &GroupHandle) -> Result<()> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        if group == &self.all_group {
            return Err(ControlError::ProtectedGroup(group.label().to_string()));
        }
        if model.remove_group(group).is_some() {
            info!(group = group.label(), "removed group");
        }
        self.refresh(model);
        Ok(())
    }

    /// Moves the source between the selected and remaining lists of the
    /// current group. Returns whether the source is now a member.
    pub fn toggle_membership(
        &mut self,
        model: &mut ViewerState,
        source: &SourceHandle,
    ) -> Result<bool> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        let group = model.current_group().ok_or(ControlError::NoCurrentGroup)?;
        let member = if model.contains(&group, source) {
            model.remove_source_from_group(source, &group)?;
            false
        } else {
            model.add_source_to_group(source, &group)?;
            true
        };
        self.refresh(model);
        Ok(member)
    }

    pub fn toggle_visibility(&mut self, model: &mut ViewerState) -> Result<bool> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        let group = model.current_group().ok_or(ControlError::NoCurrentGroup)?;
        let active = !model.is_group_active(&group)?;
        model.set_group_active(&group, active)?;
        self.visible = active;
        Ok(active)
    }

    pub fn set_single_group_mode(&mut self, model: &mut ViewerState, single: bool) -> Result<()> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        model.set_fused_enabled(!single);
        self.single_group_mode = single;
        Ok(())
    }

    /// Re-reads selection, visibility and membership from the model.
    pub fn refresh(&mut self, model: &ViewerState) {
        self.selected = model.current_group();
        self.visible = self
            .selected
            .as_ref()
            .and_then(|group| model.is_group_active(group).ok())
            .unwrap_or(false);
        self.membership = GroupMembership::of(model, self.selected.as_ref());
    }

    pub fn handle_event(&mut self, model: &ViewerState, event: VisibilityEvent) {
        match event {
            VisibilityEvent::CurrentGroupChanged
            | VisibilityEvent::GroupActivityChanged
            | VisibilityEvent::NumGroupsChanged
            | VisibilityEvent::NumSourcesChanged
            | VisibilityEvent::SourceToGroupAssignmentChanged => {
                debug!(?event, "group tab refresh");
                self.refresh(model);
            }
            VisibilityEvent::DisplayModeChanged => {
                self.single_group_mode = !model.is_fused_enabled();
            }
            _ => {}
        }
    }
}
