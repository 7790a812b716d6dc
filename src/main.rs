mod app;
mod config;
mod controller;
mod error;
mod history;
mod host;
mod input;
mod model;
mod scroll;
mod state;
mod style;
mod view;

use app::{Portfolio, ShellSettings};
use clap::Parser;
use config::Config;
use eframe::egui;
use model::{Content, TargetList};
use std::path::PathBuf;
use style::Palette;
use tracing::{error, info, warn};

/// A personal portfolio in a sidebar shell.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Location to open at: `#screen-3`, `screen-3` or a URL with a fragment
    location: Option<String>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content file to show instead of the configured or built-in one
    #[arg(long)]
    content: Option<PathBuf>,

    /// Write the default config file if there is none, then exit
    #[arg(long)]
    init_config: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => Config::load_from(path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "using default configuration");
            Config::default()
        }),
        None => Config::load(),
    }
}

fn load_content(cli: &Cli, config: &Config) -> Content {
    let path = cli.content.as_ref().or(config.content_path.as_ref());
    let loaded = match path {
        Some(path) => Content::load(path),
        None => Content::builtin(),
    };
    loaded.unwrap_or_else(|e| {
        error!(error = %e, "using empty content");
        Content {
            nodes: Vec::new(),
            base_dir: PathBuf::from("."),
        }
    })
}

fn settings(cli: &Cli, config: &Config) -> ShellSettings {
    let targets = config.navigation.target_list().unwrap_or_else(|e| {
        warn!(error = %e, "using default navigation targets");
        TargetList::default()
    });
    let palette = config.theme.palette().unwrap_or_else(|e| {
        warn!(error = %e, "using default palette");
        Palette::default()
    });

    ShellSettings {
        targets,
        palette,
        content: load_content(cli, config),
        location: cli.location.clone().unwrap_or_default(),
        scroll_duration: config.navigation.scroll_duration(),
        top_history_mode: config.navigation.top_history_mode,
    }
}

fn main() -> eframe::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.init_config {
        match Config::create_default() {
            Ok(path) => println!("{}", path.display()),
            Err(e) => error!(error = %e, "could not write default configuration"),
        }
        return Ok(());
    }

    let config = load_config(&cli);
    let settings = settings(&cli, &config);
    info!(location = %settings.location, "starting portfolio shell");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(&config.window.title),
        ..Default::default()
    };

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(Portfolio::new(settings)))
        }),
    )
}
