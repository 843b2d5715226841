//! Source and group tabs of the control panel.
//!
//! Controllers hold only widget state. Everything visible to the viewer goes
//! through `ViewerState`, and tabs catch up with it in `handle_events`.

mod error;
mod group_tab;
mod panel;
mod source_tab;

#[cfg(test)]
mod tests;

pub use error::{ControlError, Result};
pub use group_tab::{GroupEntry, GroupMembership, GroupTab};
pub use panel::{ALL_GROUP_NAME, ControlPanel, SourceChangeListener, Tab};
pub use source_tab::{SourceEntry, SourceTab};
