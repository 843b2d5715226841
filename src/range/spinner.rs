use super::{RangeError, Result};

/// Numeric spinner state: the committed value, its legal span and the text
/// currently shown in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerModel {
    value: f64,
    minimum: f64,
    maximum: f64,
    pub text: String,
}

impl SpinnerModel {
    pub fn new(value: f64, minimum: f64, maximum: f64) -> Self {
        let (minimum, maximum) = (minimum.min(maximum), maximum.max(minimum));
        let value = value.clamp(minimum, maximum);
        Self {
            value,
            minimum,
            maximum,
            text: format_number(value),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns whether the value moved, which happens when the old value
    /// falls outside the new span.
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> bool {
        self.minimum = minimum.min(maximum);
        self.maximum = maximum.max(minimum);
        self.set_value(self.value)
    }

    /// Clamps into the span and refreshes the text. Returns whether the
    /// value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let clamped = value.clamp(self.minimum, self.maximum);
        let changed = clamped != self.value;
        self.value = clamped;
        self.text = format_number(clamped);
        changed
    }

    pub fn reset_text(&mut self, value: f64) {
        self.text = format_number(value);
    }
}

/// Magnitudes outside `[1e-4, 1e9)` switch to exponent notation.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e9).contains(&magnitude) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Accepts plain decimal or scientific notation, with optional `,` digit
/// grouping. Non-finite results are rejected.
pub fn parse_number(text: &str) -> Result<f64> {
    let cleaned = text.trim().replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RangeError::MalformedInput(text.to_string())),
    }
}
