use std::sync::Arc;

use tracing::{debug, info};

use crate::index::IndexMapper;
use crate::model::{
    ConverterSetup, GroupHandle, SourceHandle, ViewerState, VisibilityEvent, VisibilityModel,
};
use crate::names::NameRegistry;

use super::{GroupTab, Result, SourceTab};

pub const ALL_GROUP_NAME: &str = "All";

/// Notified by the viewer after a source joins or leaves it.
pub trait SourceChangeListener {
    fn source_added(
        &mut self,
        model: &mut ViewerState,
        source: &SourceHandle,
        setup: &ConverterSetup,
    ) -> Result<()>;

    fn source_removed(&mut self, model: &mut ViewerState, source: &SourceHandle) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Sources,
    Groups,
}

/// The tabbed source/group control panel.
#[derive(Debug)]
pub struct ControlPanel {
    names: Arc<NameRegistry>,
    source_tab: SourceTab,
    group_tab: GroupTab,
    all_group: GroupHandle,
    active_tab: Tab,
    enabled: bool,
}

impl ControlPanel {
    /// Replaces whatever groups the viewer had with a single active "All"
    /// group and makes it current.
    pub fn new(model: &mut ViewerState, slider_length: u32) -> Result<Self> {
        let existing = model
            .groups()
            .iter()
            .map(|group| group.handle.clone())
            .collect::<Vec<_>>();
        for group in &existing {
            model.remove_group(group);
        }

        let all_group = GroupHandle::new(ALL_GROUP_NAME);
        model.add_group(all_group.clone(), ALL_GROUP_NAME)?;
        model.set_group_active(&all_group, true)?;
        model.set_current_group(&all_group)?;
        debug!(removed = existing.len(), "control panel groups reset");

        let group_tab = GroupTab::new(model, all_group.clone());
        let active_tab = if model.is_grouping_enabled() {
            Tab::Groups
        } else {
            Tab::Sources
        };
        Ok(Self {
            names: Arc::new(NameRegistry::new()),
            source_tab: SourceTab::new(slider_length),
            group_tab,
            all_group,
            active_tab,
            enabled: true,
        })
    }

    pub fn names(&self) -> &Arc<NameRegistry> {
        &self.names
    }

    pub fn all_group(&self) -> &GroupHandle {
        &self.all_group
    }

    pub fn source_tab(&self) -> &SourceTab {
        &self.source_tab
    }

    pub fn source_tab_mut(&mut self) -> &mut SourceTab {
        &mut self.source_tab
    }

    pub fn group_tab(&self) -> &GroupTab {
        &self.group_tab
    }

    pub fn group_tab_mut(&mut self) -> &mut GroupTab {
        &mut self.group_tab
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Choosing the group tab turns grouping on, the source tab turns it off.
    pub fn select_tab(&mut self, model: &mut ViewerState, tab: Tab) {
        self.active_tab = tab;
        model.set_grouping_enabled(tab == Tab::Groups);
    }

    /// Both tabs are locked while a manual transformation is being edited.
    pub fn set_manual_transform_active(&mut self, active: bool) {
        info!(active, "manual transform");
        self.enabled = !active;
        self.source_tab.set_enabled(!active);
        self.group_tab.set_enabled(!active);
    }

    /// Drains the model's queued events into both tabs. Returns how many
    /// events were handled.
    pub fn handle_events(&mut self, model: &mut ViewerState) -> usize {
        let events = model.drain_events();
        for &event in &events {
            if event == VisibilityEvent::DisplayModeChanged {
                self.active_tab = if model.is_grouping_enabled() {
                    Tab::Groups
                } else {
                    Tab::Sources
                };
            }
            self.source_tab.handle_event(model, event);
            self.group_tab.handle_event(model, event);
        }
        events.len()
    }
}

impl SourceChangeListener for ControlPanel {
    fn source_added(
        &mut self,
        model: &mut ViewerState,
        source: &SourceHandle,
        setup: &ConverterSetup,
    ) -> Result<()> {
        let name = self.names.add(source)?;
        debug!(%name, "panel source added");
        self.source_tab.source_added(model, source, setup);
        model.add_source_to_group(source, &self.all_group)?;
        self.group_tab.refresh(model);
        Ok(())
    }

    fn source_removed(&mut self, model: &mut ViewerState, source: &SourceHandle) -> Result<()> {
        if let Some(name) = self.names.remove(source) {
            debug!(%name, "panel source removed");
        }
        self.source_tab.source_removed(model, source);
        self.group_tab.refresh(model);
        Ok(())
    }
}
