//! Terminal demo for the r-widgets input field and data table
//!
//! Shows both widgets composed on a demo page, and a catalog page listing
//! every variant, size and state of each widget.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! r-widgets --help
//!
//! # launch the catalog with the red theme
//! r-widgets --page catalog --theme Red
//!
//! # show your own rows in the demo table and write debug logs
//! r-widgets --data demos/people.json --debug
//! ```

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use config::ConfigManager;
use directories::ProjectDirs;
use r_widgets::{colors::Theme, record::Row};
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use crate::{
    renderer::Renderer,
    ui::{
        app::App,
        pages::{PageID, catalog::CatalogPage, demo::DemoPage, sample_rows},
    },
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod ui;

const APP_NAME: &str = "r-widgets";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Write debug logs to r-widgets.log in the config directory
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Color theme, saved for future runs
    #[arg(short, long, value_parser = ["Blue", "Emerald", "Indigo", "Red"])]
    theme: Option<String>,

    /// JSON file holding an array of row objects for the demo table
    #[arg(long)]
    data: Option<PathBuf>,

    /// Page shown at startup
    #[arg(long, value_enum, default_value_t = PageID::Demo)]
    page: PageID,
}

#[doc(hidden)]
fn get_project_config_dir() -> Result<PathBuf> {
    let project_dir = ProjectDirs::from("", "", APP_NAME)
        .ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.to_path_buf())
}

// The UI owns the terminal so logs always go to a file.
#[doc(hidden)]
fn initialize_logger(args: &Args, config_dir: &Path) -> Result<()> {
    if !args.debug {
        return Ok(());
    }

    let log_file = File::create(config_dir.join(format!("{APP_NAME}.log")))
        .wrap_err("failed to create log file")?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        log_file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn create_config_manager(config_dir: &Path) -> Result<ConfigManager> {
    let config_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();

    ConfigManager::builder().path(config_path).build()
}

#[doc(hidden)]
fn load_rows(path: Option<&Path>) -> Result<Vec<Row>> {
    let Some(path) = path else {
        return Ok(sample_rows());
    };

    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open {}", path.display()))?;
    let rows: Vec<Row> = serde_json::from_reader(io::BufReader::new(file))
        .wrap_err_with(|| {
            format!("failed to parse rows from {}", path.display())
        })?;

    log::debug!("loaded {} rows from {}", rows.len(), path.display());

    Ok(rows)
}

#[doc(hidden)]
fn resolve_theme(
    args: &Args,
    config_manager: &mut ConfigManager,
) -> Result<Theme> {
    match &args.theme {
        Some(name) => {
            let theme = Theme::from_string(name);
            config_manager.set_theme(theme)?;
            Ok(theme)
        }
        None => Ok(config_manager.theme()),
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let config_dir = get_project_config_dir()?;

    initialize_logger(&args, &config_dir)?;

    let mut config_manager = create_config_manager(&config_dir)?;
    let theme = resolve_theme(&args, &mut config_manager)?;
    let rows = load_rows(args.data.as_deref())?;

    let app = App::new(
        theme,
        Some(config_manager),
        DemoPage::new(rows)?,
        CatalogPage::new()?,
        args.page,
    );

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    Renderer::new(terminal, app).start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
