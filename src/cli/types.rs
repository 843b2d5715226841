use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(
    name = "viewer-panel",
    version,
    about = "Source and group control panel for multi-channel image viewers"
)]
pub(super) struct Cli {
    /// Raise log verbosity; repeat for more detail. `RUST_LOG` overrides it.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(super) verbose: u8,

    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the panel state a session opens into, as JSON.
    Info {
        session: PathBuf,
        /// Also write the snapshot here (`.yaml`/`.yml` or JSON).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validates a session file without opening a window.
    Check { session: PathBuf },
    /// Launches the control window, optionally with a session loaded.
    View { session: Option<PathBuf> },
}

#[derive(Debug, Serialize)]
pub(super) struct CheckReport {
    pub(super) status: &'static str,
    pub(super) sources: usize,
    pub(super) groups: usize,
    pub(super) slider_length: u32,
}
