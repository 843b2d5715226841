//! The viewer as the panel sees it: state, control panel and manual
//! transformation kept in step.

#[cfg(test)]
mod tests;

use tracing::{debug, info};

use crate::controls::{ControlPanel, Result, SourceChangeListener};
use crate::model::{AffineTransform3D, ConverterSetup, SourceHandle, ViewerState};
use crate::transform::TransformationModel;

#[derive(Debug)]
pub struct ViewerHandle {
    state: ViewerState,
    panel: ControlPanel,
    transforms: TransformationModel,
}

impl ViewerHandle {
    pub fn new(slider_length: u32) -> Result<Self> {
        let mut state = ViewerState::new();
        let panel = ControlPanel::new(&mut state, slider_length)?;
        let mut viewer = Self {
            state,
            panel,
            transforms: TransformationModel::new(),
        };
        viewer.pump_events();
        Ok(viewer)
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewerState {
        &mut self.state
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut ControlPanel {
        &mut self.panel
    }

    pub fn transforms(&self) -> &TransformationModel {
        &self.transforms
    }

    /// Disjoint borrows for callers driving several parts in one frame.
    pub fn parts_mut(
        &mut self,
    ) -> (
        &mut ViewerState,
        &mut ControlPanel,
        &mut TransformationModel,
    ) {
        (&mut self.state, &mut self.panel, &mut self.transforms)
    }

    /// Creates a source and its display settings and announces it.
    pub fn add_source(
        &mut self,
        name: &str,
        pixel_type: Option<String>,
        display_range: (f64, f64),
    ) -> Result<SourceHandle> {
        let source = SourceHandle::new(name, pixel_type);
        let setup = ConverterSetup::new(display_range.0, display_range.1);
        self.add_source_with_setup(source.clone(), setup)?;
        Ok(source)
    }

    pub fn add_source_with_setup(
        &mut self,
        source: SourceHandle,
        setup: ConverterSetup,
    ) -> Result<()> {
        self.state.add_source(source.clone(), setup.clone())?;
        info!(source = source.name(), "source added");
        let listeners: [&mut dyn SourceChangeListener; 2] =
            [&mut self.panel, &mut self.transforms];
        for listener in listeners {
            listener.source_added(&mut self.state, &source, &setup)?;
        }
        self.pump_events();
        Ok(())
    }

    /// Returns `false` when the source was not part of the viewer.
    pub fn remove_source(&mut self, source: &SourceHandle) -> Result<bool> {
        if self.state.remove_source(source).is_none() {
            return Ok(false);
        }
        info!(source = source.name(), "source removed");
        let listeners: [&mut dyn SourceChangeListener; 2] =
            [&mut self.panel, &mut self.transforms];
        for listener in listeners {
            listener.source_removed(&mut self.state, source)?;
        }
        self.pump_events();
        Ok(true)
    }

    /// Forwards queued model events to the control panel.
    pub fn pump_events(&mut self) -> usize {
        let handled = self.panel.handle_events(&mut self.state);
        if handled > 0 {
            debug!(handled, "pumped viewer events");
        }
        handled
    }

    pub fn set_manual_transform_active(&mut self, active: bool) -> Result<()> {
        self.transforms
            .set_manual_transform_active(&mut self.state, active)?;
        self.panel.set_manual_transform_active(active);
        Ok(())
    }

    pub fn apply_manual_step(&mut self, step: &AffineTransform3D) -> Result<bool> {
        Ok(self.transforms.apply_manual_step(&mut self.state, step)?)
    }

    pub fn reset_transformation(&mut self, single: bool) -> Result<()> {
        self.transforms.reset(&mut self.state, single)?;
        Ok(())
    }

    pub fn enable_rotation(&mut self, enabled: bool) {
        self.transforms.enable_rotation(enabled);
    }

    pub fn enable_translation(&mut self, enabled: bool) {
        self.transforms.enable_translation(enabled);
    }
}
