use dioxus::prelude::*;
use folio_engine::io;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

mod ui;

use folio_config::Config;
use ui::App;

/// Where the content directory came from, for error messages.
enum ContentSource {
    Cli,
    ConfigFile(PathBuf),
}

struct Startup {
    content_path: PathBuf,
    language: String,
    source: ContentSource,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("folio starting up");

    let startup = resolve_startup();

    if let Err(e) = io::validate_content_dir(&startup.content_path) {
        let source = match &startup.source {
            ContentSource::Cli => String::new(),
            ContentSource::ConfigFile(path) => format!(" from config file '{}'", path.display()),
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            startup.content_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!(
        "Launching folio for {} (language: {})",
        startup.content_path.display(),
        startup.language
    );
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(startup.content_path)
        .with_context(LaunchLanguage(startup.language))
        .launch(app_root);
}

/// CLI argument wins over the config file; having neither is a usage error.
fn resolve_startup() -> Startup {
    let config_path = Config::config_path();
    let args: Vec<String> = env::args().collect();
    let program_name = args.first().cloned().unwrap_or_else(|| "folio".to_string());

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {program_name} <content-folder-path>");
            process::exit(1);
        }
    };
    let language = config
        .as_ref()
        .map(|c| c.language.clone())
        .unwrap_or_else(|| folio_config::DEFAULT_LANGUAGE.to_string());

    match args.len() {
        2 => {
            let content_path = PathBuf::from(&args[1]);
            log::info!("Using content path from CLI argument: {}", content_path.display());
            if config.is_none() {
                remember_content_path(&content_path, &config_path);
            }
            Startup {
                content_path,
                language,
                source: ContentSource::Cli,
            }
        }
        1 => match config {
            Some(config) => {
                log::info!(
                    "Loaded content path from config: {}",
                    config.content_path.display()
                );
                Startup {
                    content_path: config.content_path,
                    language,
                    source: ContentSource::ConfigFile(config_path),
                }
            }
            None => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {program_name} <content-folder-path>");
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: {program_name} [content-folder-path]");
            process::exit(1);
        }
    }
}

/// First run with a CLI path and no config file: persist the path so later
/// runs can start without arguments. Failures are logged, not fatal.
fn remember_content_path(content_path: &Path, config_path: &Path) {
    let config = Config::new(content_path);
    match config.save_to_path(config_path) {
        Ok(()) => log::info!(
            "Saved content path to new config file at {}",
            config_path.display()
        ),
        Err(e) => log::warn!("Failed to create config file: {e}"),
    }
}

#[derive(Clone)]
struct LaunchLanguage(String);

fn app_root() -> Element {
    let content_path = use_context::<PathBuf>();
    let LaunchLanguage(language) = use_context::<LaunchLanguage>();

    rsx! {
        App { content_path, language }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("folio")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
