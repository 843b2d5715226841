use tracing::{debug, warn};

use super::spinner::parse_number;
use super::{Range, SliderMapping, SpinnerModel};

pub const DEFAULT_SLIDER_LENGTH: u32 = 1000;

/// Keeps a two-knob slider, a lower and an upper spinner and an attached
/// `Range` in agreement.
///
/// After every stimulus `lower_bound <= lower_value <= upper_value <=
/// upper_bound` holds: values are clamped back into the bounds on every
/// path, not only when the shrink button is used.
#[derive(Debug)]
pub struct RangeSync<R> {
    range: Option<R>,
    length: u32,
    lower_bound: f64,
    upper_bound: f64,
    lower_value: f64,
    upper_value: f64,
    lower_pos: u32,
    upper_pos: u32,
    min_spinner: SpinnerModel,
    max_spinner: SpinnerModel,
    listening: bool,
    enabled: bool,
}

impl<R: Range> Default for RangeSync<R> {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDER_LENGTH)
    }
}

impl<R: Range> RangeSync<R> {
    pub fn new(slider_length: u32) -> Self {
        let length = slider_length.max(1);
        Self {
            range: None,
            length,
            lower_bound: 0.0,
            upper_bound: 1.0,
            lower_value: 0.0,
            upper_value: 1.0,
            lower_pos: 0,
            upper_pos: length,
            min_spinner: SpinnerModel::new(0.0, 0.0, 1.0),
            max_spinner: SpinnerModel::new(1.0, 0.0, 1.0),
            listening: true,
            enabled: true,
        }
    }

    pub fn slider_length(&self) -> u32 {
        self.length
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn lower_value(&self) -> f64 {
        self.lower_value
    }

    pub fn upper_value(&self) -> f64 {
        self.upper_value
    }

    pub fn lower_position(&self) -> u32 {
        self.lower_pos
    }

    pub fn upper_position(&self) -> u32 {
        self.upper_pos
    }

    pub fn min_spinner(&self) -> &SpinnerModel {
        &self.min_spinner
    }

    pub fn max_spinner(&self) -> &SpinnerModel {
        &self.max_spinner
    }

    /// Editor text of the lower spinner, for toolkits that bind a text field.
    pub fn min_text_mut(&mut self) -> &mut String {
        &mut self.min_spinner.text
    }

    pub fn max_text_mut(&mut self) -> &mut String {
        &mut self.max_spinner.text
    }

    pub fn range(&self) -> Option<&R> {
        self.range.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.range.is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled panel ignores every user stimulus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_consistent(&self) -> bool {
        self.lower_bound <= self.lower_value
            && self.lower_value <= self.upper_value
            && self.upper_value <= self.upper_bound
    }

    pub fn mapping(&self) -> SliderMapping {
        SliderMapping::new(self.lower_bound, self.upper_bound, self.length)
    }

    /// Knobs were dragged to `lower_pos` / `upper_pos`.
    pub fn slider_moved(&mut self, lower_pos: u32, upper_pos: u32) {
        if !self.enabled {
            return;
        }
        let upper_pos = upper_pos.min(self.length);
        let lower_pos = lower_pos.min(upper_pos);
        self.lower_pos = lower_pos;
        self.upper_pos = upper_pos;

        let mapping = self.mapping();
        self.lower_value = mapping.pos_to_value(lower_pos);
        self.upper_value = mapping.pos_to_value(upper_pos);
        self.enforce_order();
        self.refresh_spinners();
        self.push_values();
    }

    /// Enter pressed in the lower spinner. A value below the lower bound
    /// widens the bound; anything else only moves the lower value.
    pub fn commit_min_text(&mut self, text: &str) {
        if !self.enabled || text.trim().is_empty() {
            return;
        }
        let value = match parse_number(text) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "restoring lower spinner text");
                self.min_spinner.reset_text(self.lower_bound);
                return;
            }
        };
        if value < self.lower_bound {
            if !(self.upper_bound - value).is_finite() {
                warn!(value, "lower bound would leave the slider span unbounded");
                self.min_spinner.reset_text(self.lower_value);
                return;
            }
            self.lower_bound = value;
            self.push_bounds();
        }
        self.lower_value = value.min(self.upper_value);
        self.settle();
    }

    /// Enter pressed in the upper spinner. A value above the upper bound
    /// widens the bound; anything else only moves the upper value.
    pub fn commit_max_text(&mut self, text: &str) {
        if !self.enabled || text.trim().is_empty() {
            return;
        }
        let value = match parse_number(text) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "restoring upper spinner text");
                self.max_spinner.reset_text(self.upper_bound);
                return;
            }
        };
        if value > self.upper_bound {
            if !(value - self.lower_bound).is_finite() {
                warn!(value, "upper bound would leave the slider span unbounded");
                self.max_spinner.reset_text(self.upper_value);
                return;
            }
            self.upper_bound = value;
            self.push_bounds();
        }
        self.upper_value = value.max(self.lower_value);
        self.settle();
    }

    /// Lower spinner stepped (arrow keys or buttons). The spinner clamps the
    /// value into the current bounds.
    pub fn min_spinner_changed(&mut self, value: f64) {
        if !self.enabled {
            return;
        }
        if self.min_spinner.set_value(value) {
            self.fire_min_spinner();
        }
    }

    pub fn max_spinner_changed(&mut self, value: f64) {
        if !self.enabled {
            return;
        }
        if self.max_spinner.set_value(value) {
            self.fire_max_spinner();
        }
    }

    /// Collapses the bounds onto the values the spinners currently show and
    /// moves both knobs to the ends of the slider.
    pub fn shrink(&mut self) {
        if !self.enabled {
            return;
        }
        self.lower_bound = self.min_spinner.value();
        self.upper_bound = self.max_spinner.value();
        self.lower_value = self.lower_bound;
        self.upper_value = self.upper_bound;
        self.enforce_order();
        self.push_bounds();
        self.refresh_spinners();
        self.lower_pos = 0;
        self.upper_pos = self.length;
        self.push_values();
    }

    /// Switches to another range, returning the previous one.
    ///
    /// Spinner listeners are detached while the new numbers are copied in;
    /// otherwise narrowing a spinner's span would clamp its stale value and
    /// write that back over the freshly copied one.
    pub fn set_range(&mut self, range: Option<R>) -> Option<R> {
        self.listening = false;
        let previous = std::mem::replace(&mut self.range, range);

        let mut pending_values = false;
        if let Some(range) = &self.range {
            let (lower_value, upper_value) = (range.lower_value(), range.upper_value());
            self.lower_bound = range.lower_bound();
            self.upper_bound = range.upper_bound();
            self.lower_value = lower_value;
            self.upper_value = upper_value;

            let bounds = (self.lower_bound, self.upper_bound);
            self.lower_bound = self.lower_bound.min(self.upper_bound).min(lower_value);
            self.upper_bound = bounds.0.max(bounds.1).max(upper_value);
            self.enforce_order();
            if (self.lower_bound, self.upper_bound) != bounds {
                self.push_bounds();
            }
            pending_values = (self.lower_value, self.upper_value) != (lower_value, upper_value);
        }

        self.refresh_spinners();
        self.render_slider();
        self.listening = true;
        if pending_values {
            self.push_values();
        }
        previous
    }

    fn enforce_order(&mut self) {
        if self.lower_bound > self.upper_bound {
            std::mem::swap(&mut self.lower_bound, &mut self.upper_bound);
        }
        self.lower_value = self.lower_value.clamp(self.lower_bound, self.upper_bound);
        self.upper_value = self.upper_value.clamp(self.lower_value, self.upper_bound);
    }

    fn settle(&mut self) {
        self.enforce_order();
        self.render_slider();
        self.refresh_spinners();
        self.push_values();
    }

    fn render_slider(&mut self) {
        let mapping = self.mapping();
        match (
            mapping.value_to_pos(self.lower_value),
            mapping.value_to_pos(self.upper_value),
        ) {
            (Ok(lower), Ok(upper)) => {
                self.lower_pos = lower;
                self.upper_pos = upper.max(lower);
            }
            (Err(error), _) | (_, Err(error)) => {
                warn!(%error, "knobs span the whole slider");
                self.lower_pos = 0;
                self.upper_pos = self.length;
            }
        }
    }

    /// Spinner spans follow the bounds, spinner values follow the values.
    /// Each spinner whose value moves notifies its listener, as a toolkit
    /// spinner would.
    fn refresh_spinners(&mut self) {
        let (lower, upper) = (self.lower_bound, self.upper_bound);
        if self.min_spinner.set_bounds(lower, upper) {
            self.fire_min_spinner();
        }
        if self.max_spinner.set_bounds(lower, upper) {
            self.fire_max_spinner();
        }
        if self.min_spinner.set_value(self.lower_value) {
            self.fire_min_spinner();
        }
        if self.max_spinner.set_value(self.upper_value) {
            self.fire_max_spinner();
        }
    }

    fn fire_min_spinner(&mut self) {
        if !self.listening {
            return;
        }
        let value = self.min_spinner.value();
        if value != self.lower_value {
            self.lower_value = value.min(self.upper_value);
            self.settle();
        }
    }

    fn fire_max_spinner(&mut self) {
        if !self.listening {
            return;
        }
        let value = self.max_spinner.value();
        if value != self.upper_value {
            self.upper_value = value.max(self.lower_value);
            self.settle();
        }
    }

    fn push_values(&mut self) {
        let (lower, upper) = (self.lower_value, self.upper_value);
        if let Some(range) = self.range.as_mut() {
            debug!(lower, upper, "display range");
            range.set_value_range(lower, upper);
        }
    }

    fn push_bounds(&mut self) {
        let (lower, upper) = (self.lower_bound, self.upper_bound);
        if let Some(range) = self.range.as_mut() {
            debug!(lower, upper, "display range bounds");
            range.set_lower_bound(lower);
            range.set_upper_bound(upper);
        }
    }
}
