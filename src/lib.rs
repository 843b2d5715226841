pub mod cli;
pub mod controls;
pub mod index;
pub mod model;
pub mod names;
pub mod range;
pub mod session;
pub mod telemetry;
pub mod transform;
pub mod ui;
pub mod viewer;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
