#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    let result = if std::env::args_os().count() <= 1 {
        viewer_panel_rs::telemetry::init_logging(0);
        viewer_panel_rs::ui::run(None)
    } else {
        viewer_panel_rs::run_cli()
    };

    if let Err(error) = result {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
