//! Animated replay of sliding puzzle solutions.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod assets;
mod cli;
mod draw;
mod startup;

const TITLE: &str = "n-puzzle";
const APP_ID: &str = "npuzzle-visual";

/// Process exit code when the viewer cannot start.
const FATAL_EXIT_CODE: i32 = -1;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    logger_builder(env_logger::Env::default()).init();

    if let Some(subcommand) = args.subcommand {
        color_eyre::install().expect("error initializing panic handler");
        if let Err(e) = cli::exec(subcommand) {
            eprintln!("Error: {e:?}");
            std::process::exit(FATAL_EXIT_CODE);
        }
        return Ok(());
    }

    #[cfg(debug_assertions)]
    color_eyre::install().expect("error initializing panic handler");

    let prefs = args.view.load_prefs();
    let startup = match startup::prepare(&prefs) {
        Ok(startup) => startup,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(FATAL_EXIT_CODE);
        }
    };

    Ok(run(prefs, startup)?)
}

fn run(prefs: npuzzle_prefs::Preferences, startup: startup::Startup) -> eframe::Result<()> {
    let window_size = prefs.window_size as f32;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([window_size, window_size])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(app::ReplayApp::new(cc, startup, &prefs)))),
    )
}

fn logger_builder(env: env_logger::Env<'_>) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER))
}
