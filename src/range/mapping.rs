use super::{RangeError, Result};

/// Linear map between integer slider positions `[0, length]` and values in
/// `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderMapping {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub length: u32,
}

impl SliderMapping {
    pub fn new(lower_bound: f64, upper_bound: f64, length: u32) -> Self {
        Self {
            lower_bound,
            upper_bound,
            length: length.max(1),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.upper_bound == self.lower_bound
    }

    fn span(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// A degenerate range maps every position onto its single value. So does
    /// a span too wide to represent, which keeps every result finite.
    pub fn pos_to_value(&self, pos: u32) -> f64 {
        let pos = pos.min(self.length);
        if self.is_degenerate() || !self.span().is_finite() {
            return self.lower_bound;
        }
        f64::from(pos) / f64::from(self.length) * self.span() + self.lower_bound
    }

    /// Values outside the bounds land on the nearest end of the slider.
    pub fn value_to_pos(&self, value: f64) -> Result<u32> {
        if self.is_degenerate() {
            return Err(RangeError::InvalidRange(self.lower_bound));
        }
        let span = self.span();
        if !span.is_finite() {
            return Err(RangeError::UnboundedSpan(self.lower_bound, self.upper_bound));
        }
        let pos = ((value - self.lower_bound) / span * f64::from(self.length)).round();
        if pos.is_nan() {
            return Err(RangeError::UnboundedSpan(self.lower_bound, self.upper_bound));
        }
        Ok(pos.clamp(0.0, f64::from(self.length)) as u32)
    }
}
