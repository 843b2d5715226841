use std::collections::HashMap;

use tracing::debug;

use crate::index::IndexMapper;
use crate::model::{ConverterSetup, SourceHandle, ViewerState, VisibilityEvent};
use crate::names::NameRegistry;
use crate::range::IntensitySlider;

use super::{ControlError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    pub source: SourceHandle,
    pub name: String,
    pub active: bool,
}

/// State behind the "Source Control" tab: the source selector, its
/// visibility toggle, type label, colour and the intensity slider.
#[derive(Debug)]
pub struct SourceTab {
    sources: Vec<SourceHandle>,
    setups: HashMap<SourceHandle, ConverterSetup>,
    selected: Option<SourceHandle>,
    visible: bool,
    single_source_mode: bool,
    type_label: String,
    intensity: IntensitySlider,
    enabled: bool,
}

impl SourceTab {
    pub fn new(slider_length: u32) -> Self {
        Self {
            sources: Vec::new(),
            setups: HashMap::new(),
            selected: None,
            visible: false,
            single_source_mode: false,
            type_label: String::new(),
            intensity: IntensitySlider::new(slider_length),
            enabled: true,
        }
    }

    pub fn selected(&self) -> Option<&SourceHandle> {
        self.selected.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn single_source_mode(&self) -> bool {
        self.single_source_mode
    }

    pub fn type_label(&self) -> &str {
        &self.type_label
    }

    pub fn intensity(&self) -> &IntensitySlider {
        &self.intensity
    }

    pub fn intensity_mut(&mut self) -> &mut IntensitySlider {
        &mut self.intensity
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Also locks the intensity slider.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.intensity.set_enabled(enabled);
    }

    /// Selector items in the order the sources were added.
    pub fn entries(&self, model: &ViewerState, names: &NameRegistry) -> Vec<SourceEntry> {
        self.sources
            .iter()
            .map(|source| SourceEntry {
                source: source.clone(),
                name: names.display_name(source),
                active: model.is_source_active(source).unwrap_or(false),
            })
            .collect()
    }

    /// The first source added becomes the selection.
    pub fn source_added(
        &mut self,
        model: &ViewerState,
        source: &SourceHandle,
        setup: &ConverterSetup,
    ) {
        self.sources.push(source.clone());
        self.setups.insert(source.clone(), setup.clone());
        self.intensity.add_source(source, setup);
        if self.selected.is_none() {
            self.show_source(model, source);
        }
    }

    pub fn source_removed(&mut self, model: &ViewerState, source: &SourceHandle) {
        self.sources.retain(|known| known != source);
        self.setups.remove(source);
        self.intensity.remove_source(source);
        if self.selected.as_ref() == Some(source) {
            self.selected = None;
            self.type_label.clear();
            self.visible = false;
            if let Some(current) = model.current_source() {
                self.show_source(model, &current);
            }
        }
    }

    pub fn select_source(&mut self, model: &mut ViewerState, source: &SourceHandle) -> Result<()> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        model.set_current_source(source)?;
        self.show_source(model, source);
        Ok(())
    }

    fn show_source(&mut self, model: &ViewerState, source: &SourceHandle) {
        debug!(source = source.name(), "source tab selection");
        self.selected = Some(source.clone());
        self.intensity.set_source(source);
        self.type_label = source.pixel_type().unwrap_or("N/A").to_string();
        self.visible = model.is_source_active(source).unwrap_or(false);
    }

    /// Flips the current source's visibility and returns the new state.
    pub fn toggle_visibility(&mut self, model: &mut ViewerState) -> Result<bool> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        let source = model.current_source().ok_or(ControlError::NoCurrentSource)?;
        let active = !model.is_source_active(&source)?;
        model.set_source_active(&source, active)?;
        self.visible = active;
        Ok(active)
    }

    /// Single-source mode is the viewer's non-fused display mode.
    pub fn set_single_source_mode(&mut self, model: &mut ViewerState, single: bool) -> Result<()> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        model.set_fused_enabled(!single);
        self.single_source_mode = single;
        Ok(())
    }

    /// `None` when the selected source does not support colour.
    pub fn color(&self) -> Option<u32> {
        self.selected
            .as_ref()
            .and_then(|source| self.setups.get(source))
            .and_then(ConverterSetup::color)
    }

    /// Returns `false` when the selected source has no colour to change.
    pub fn set_color(&mut self, argb: u32) -> Result<bool> {
        if !self.enabled {
            return Err(ControlError::Disabled);
        }
        let setup = self
            .selected
            .as_ref()
            .and_then(|source| self.setups.get(source))
            .ok_or(ControlError::NoCurrentSource)?;
        if !setup.supports_color() {
            return Ok(false);
        }
        setup.set_color(argb);
        Ok(true)
    }

    pub fn handle_event(&mut self, model: &ViewerState, event: VisibilityEvent) {
        match event {
            VisibilityEvent::CurrentSourceChanged => {
                if let Some(current) = model.current_source() {
                    if self.selected.as_ref() != Some(&current) {
                        self.show_source(model, &current);
                    } else {
                        self.visible = model.is_source_active(&current).unwrap_or(false);
                    }
                }
            }
            VisibilityEvent::SourceActivityChanged => {
                self.visible = self
                    .selected
                    .as_ref()
                    .and_then(|source| model.is_source_active(source).ok())
                    .unwrap_or(false);
            }
            VisibilityEvent::DisplayModeChanged => {
                self.single_source_mode = !model.is_fused_enabled();
            }
            _ => {}
        }
    }
}
