use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DisplaySettings {
    min: f64,
    max: f64,
    color: Option<u32>,
}

/// Display settings of one source as seen by the renderer: the intensity
/// window and, when the source supports it, an ARGB tint.
///
/// Clones share the same settings, so the viewer and the control panel
/// observe each other's edits.
#[derive(Debug, Clone)]
pub struct ConverterSetup {
    inner: Arc<Mutex<DisplaySettings>>,
}

impl ConverterSetup {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DisplaySettings {
                min,
                max,
                color: None,
            })),
        }
    }

    pub fn with_color(min: f64, max: f64, argb: u32) -> Self {
        let setup = Self::new(min, max);
        setup.set_color(argb);
        setup
    }

    fn settings(&self) -> MutexGuard<'_, DisplaySettings> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn display_range_min(&self) -> f64 {
        self.settings().min
    }

    pub fn display_range_max(&self) -> f64 {
        self.settings().max
    }

    pub fn display_range(&self) -> (f64, f64) {
        let settings = self.settings();
        (settings.min, settings.max)
    }

    pub fn set_display_range(&self, min: f64, max: f64) {
        let mut settings = self.settings();
        settings.min = min;
        settings.max = max;
    }

    pub fn supports_color(&self) -> bool {
        self.settings().color.is_some()
    }

    pub fn color(&self) -> Option<u32> {
        self.settings().color
    }

    /// Alpha is always forced opaque.
    pub fn set_color(&self, argb: u32) {
        self.settings().color = Some(argb | 0xff00_0000);
    }

    pub fn shares_settings_with(&self, other: &ConverterSetup) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
