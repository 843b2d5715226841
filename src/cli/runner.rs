use std::path::Path;

use clap::Parser;

use crate::session::{PanelSnapshot, load_session, save_snapshot};
use crate::telemetry;

use super::types::{CheckReport, Cli, Commands};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    telemetry::init_logging(cli.verbose);

    match cli.command {
        Commands::Info { session, output } => {
            let spec = load_session(&session).map_err(|error| error.to_string())?;
            let viewer = spec.open().map_err(|error| error.to_string())?;
            let snapshot = PanelSnapshot::capture(&viewer);
            if let Some(output) = output {
                save_snapshot(&output, &snapshot).map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&snapshot).map_err(|error| error.to_string())?
            );
        }
        Commands::Check { session } => {
            let spec = load_session(&session).map_err(|error| error.to_string())?;
            let report = CheckReport {
                status: "ok",
                sources: spec.sources.len(),
                groups: spec.groups.len(),
                slider_length: spec.panel.slider_length,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).map_err(|error| error.to_string())?
            );
        }
        Commands::View { session } => {
            launch_control_window(session.as_deref())?;
        }
    }

    Ok(())
}

fn launch_control_window(session: Option<&Path>) -> Result<(), String> {
    crate::ui::run(session.map(Path::to_path_buf))
}
