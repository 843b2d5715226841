mod error;
mod intensity;
mod mapping;
mod sink;
mod spinner;
mod sync;


pub use error::{RangeError, Result};
pub use intensity::IntensitySlider;
pub use mapping::SliderMapping;
pub use sink::{Range, SourceRange};
pub use spinner::{SpinnerModel, format_number, parse_number};
pub use sync::{DEFAULT_SLIDER_LENGTH, RangeSync};
