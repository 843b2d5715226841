mod error;
mod io;
mod snapshot;
mod spec;


pub use error::{Result, SessionError};
pub use io::{load_session, save_snapshot};
pub use snapshot::{GroupSnapshot, PanelSnapshot, SourceSnapshot};
pub use spec::{GroupSpec, PanelSpec, SessionSpec, SourceSpec};
