use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::model::ConverterSetup;

/// The display range the panel edits: the legal span (`*_bound`) and the
/// current selection inside it (`*_value`).
pub trait Range {
    fn lower_bound(&self) -> f64;

    fn set_lower_bound(&mut self, value: f64);

    fn lower_value(&self) -> f64;

    fn set_lower_value(&mut self, value: f64);

    fn upper_bound(&self) -> f64;

    fn set_upper_bound(&mut self, value: f64);

    fn upper_value(&self) -> f64;

    fn set_upper_value(&mut self, value: f64);

    fn set_value_range(&mut self, lower_value: f64, upper_value: f64);
}

/// Range of one source: values live in the source's `ConverterSetup`,
/// bounds are remembered here and shared between clones so they survive
/// switching the panel to another source and back.
#[derive(Debug, Clone)]
pub struct SourceRange {
    setup: ConverterSetup,
    bounds: Arc<Mutex<(f64, f64)>>,
}

impl SourceRange {
    pub fn new(setup: ConverterSetup) -> Self {
        let bounds = setup.display_range();
        Self {
            setup,
            bounds: Arc::new(Mutex::new(bounds)),
        }
    }

    pub fn setup(&self) -> &ConverterSetup {
        &self.setup
    }

    fn bounds(&self) -> MutexGuard<'_, (f64, f64)> {
        self.bounds.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Range for SourceRange {
    fn lower_bound(&self) -> f64 {
        self.bounds().0
    }

    fn set_lower_bound(&mut self, value: f64) {
        self.bounds().0 = value;
    }

    fn lower_value(&self) -> f64 {
        self.setup.display_range_min()
    }

    fn set_lower_value(&mut self, value: f64) {
        let upper = self.upper_value();
        self.setup.set_display_range(value, upper);
    }

    fn upper_bound(&self) -> f64 {
        self.bounds().1
    }

    fn set_upper_bound(&mut self, value: f64) {
        self.bounds().1 = value;
    }

    fn upper_value(&self) -> f64 {
        self.setup.display_range_max()
    }

    fn set_upper_value(&mut self, value: f64) {
        let lower = self.lower_value();
        self.setup.set_display_range(lower, value);
    }

    fn set_value_range(&mut self, lower_value: f64, upper_value: f64) {
        self.setup.set_display_range(lower_value, upper_value);
    }
}
