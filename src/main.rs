use folio::app::FolioApp;
use folio::cli::Args;
use folio::config;
use folio::widgets::sections::Section;

use clap::Parser;
use eframe::egui;
use log::{debug, info, warn};
use std::time::Instant;

fn init_logging(args: &Args, path_config: &config::PathConfig) {
    let log_level = args.log_level();

    if let Some(log_path_opt) = &args.log_file {
        // File logging with specified verbosity level
        let log_path = log_path_opt
            .clone()
            .unwrap_or_else(|| config::data_file(config::LOG_FILE, path_config));

        match std::fs::File::create(&log_path) {
            Ok(file) => {
                env_logger::Builder::new()
                    .filter_level(log_level)
                    .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
                    .filter_module("reqwest", log::LevelFilter::Info)
                    .format_timestamp_millis()
                    .target(env_logger::Target::Pipe(Box::new(file)))
                    .init();
                info!("Logging to file: {} (level: {:?})", log_path.display(), log_level);
                return;
            }
            Err(e) => eprintln!("Warning: Failed to create log file {}: {}", log_path.display(), e),
        }
    }

    // Console logging with specified verbosity level (respects RUST_LOG if set)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level.as_str()))
        .filter_module("egui", log::LevelFilter::Info)
        .filter_module("reqwest", log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();
}

fn main() -> eframe::Result {
    let args = Args::parse();

    // Create path configuration from CLI args and environment
    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    init_logging(&args, &path_config);

    info!("Folio v{} starting...", env!("CARGO_PKG_VERSION"));
    debug!("Command-line args: {:?}", args);

    let settings_path = config::config_file(config::SETTINGS_FILE, &path_config);
    info!("Config path: {}", settings_path.display());

    let start_section = args.section.as_deref().and_then(|name| {
        let section = Section::from_name(name);
        if section.is_none() {
            warn!("Unknown section '{}', starting at the top", name);
        }
        section
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Folio v{} • F1 for help", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([640.0, 480.0])
            .with_resizable(true)
            .with_fullscreen(args.fullscreen),
        persist_window: true,
        persistence_path: Some(settings_path),
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: FolioApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    FolioApp::default()
                });

            // Command line overrides persisted settings
            if args.no_autoplay {
                app.settings.autoplay = false;
            }
            if let Some(interval) = args.interval_ms {
                app.settings.projects_interval_ms = interval;
            }
            app.is_fullscreen = args.fullscreen;
            app.scroll_target = start_section;

            app.start(args.content.clone(), Instant::now());
            Ok(Box::new(app))
        }),
    )
}
