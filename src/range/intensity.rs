use std::collections::HashMap;

use tracing::debug;

use crate::model::{ConverterSetup, SourceHandle};

use super::{RangeSync, SourceRange};

/// One `RangeSync` panel shared by all sources; switching the current
/// source swaps which `SourceRange` the panel edits.
#[derive(Debug)]
pub struct IntensitySlider {
    ranges: HashMap<SourceHandle, SourceRange>,
    current: Option<SourceHandle>,
    sync: RangeSync<SourceRange>,
}

impl Default for IntensitySlider {
    fn default() -> Self {
        Self::new(super::DEFAULT_SLIDER_LENGTH)
    }
}

impl IntensitySlider {
    pub fn new(slider_length: u32) -> Self {
        Self {
            ranges: HashMap::new(),
            current: None,
            sync: RangeSync::new(slider_length),
        }
    }

    /// Bounds start out as the setup's display range at the time of adding.
    pub fn add_source(&mut self, source: &SourceHandle, setup: &ConverterSetup) {
        self.ranges
            .insert(source.clone(), SourceRange::new(setup.clone()));
    }

    pub fn remove_source(&mut self, source: &SourceHandle) {
        self.ranges.remove(source);
        if self.current.as_ref() == Some(source) {
            self.current = None;
            self.sync.set_range(None);
        }
    }

    /// Returns `false` and detaches the panel for unknown sources.
    pub fn set_source(&mut self, source: &SourceHandle) -> bool {
        let range = self.ranges.get(source).cloned();
        let known = range.is_some();
        debug!(source = source.name(), known, "intensity slider source");
        self.current = known.then(|| source.clone());
        self.sync.set_range(range);
        known
    }

    pub fn current_source(&self) -> Option<&SourceHandle> {
        self.current.as_ref()
    }

    pub fn range_of(&self, source: &SourceHandle) -> Option<&SourceRange> {
        self.ranges.get(source)
    }

    pub fn sync(&self) -> &RangeSync<SourceRange> {
        &self.sync
    }

    pub fn sync_mut(&mut self) -> &mut RangeSync<SourceRange> {
        &mut self.sync
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.sync.set_enabled(enabled);
    }
}
