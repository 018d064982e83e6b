// GUI binary with a headless mode: `--select` routes to the CLI before any
// window is created.

use canvas_coherence::app::CoherenceApp;
use canvas_coherence::cli;
use canvas_coherence::settings::PanelSettings;
use canvas_coherence::{i18n, logger};

fn main() -> Result<(), eframe::Error> {
    // -- CLI / headless mode ---------------------------------------------
    if cli::CliArgs::is_cli_mode() {
        use clap::Parser;
        let args = cli::CliArgs::parse();
        let code = cli::run(args);
        std::process::exit(if code == std::process::ExitCode::SUCCESS {
            0
        } else {
            1
        });
    }

    // -- GUI mode -----------------------------------------------------

    // Initialize session log (overwrites previous session log)
    logger::init();

    i18n::init();

    let settings = PanelSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title(i18n::translate("app.title")),
        ..Default::default()
    };

    eframe::run_native(
        "CanvasCoherence",
        options,
        Box::new(|cc| Box::new(CoherenceApp::new(cc, settings))),
    )
}
