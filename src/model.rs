mod affine;
mod error;
mod event;
mod handle;
mod setup;
mod state;

#[cfg(test)]
mod tests;

pub use affine::AffineTransform3D;
pub use error::{ModelError, Result};
pub use event::{DisplayMode, Interpolation, VisibilityEvent};
pub use handle::{GroupHandle, SourceHandle};
pub use setup::ConverterSetup;
pub use state::{GroupState, SourceState, ViewerState, VisibilityModel};
