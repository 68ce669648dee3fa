//! Skycast CLI
//!
//! Look up current conditions and a five-day forecast for a city.

#![allow(clippy::print_stdout)]

mod render;
mod repl;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use application::{DisplayAction, DisplayState, SearchService, SubmitStatus};
use clap::{Args, Parser, Subcommand};
use domain::{ColorMode, ThemePalette};
use infrastructure::{AppConfig, OpenWeatherAdapter, init_tracing};
use tracing::info;

use crate::render::{JsonView, render, render_themes};

/// Skycast CLI
#[derive(Parser)]
#[command(name = "skycast")]
#[command(author, version, about = "Weather lookup in the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./skycast.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// OpenWeatherMap API key (overrides the configured key)
    #[arg(long, env = "SKYCAST_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Theme and mode overrides
#[derive(Args, Debug, Default)]
struct DisplayArgs {
    /// Theme palette (classic, ocean, sunset, aurora, night)
    #[arg(long)]
    theme: Option<ThemePalette>,

    /// Use dark mode
    #[arg(long)]
    dark: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the weather for one city
    ///
    /// Example: skycast search "Ho Chi Minh City" --theme ocean
    Search {
        /// City name
        city: String,

        #[command(flatten)]
        display: DisplayArgs,

        /// Print the display state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Interactive {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List available theme palettes
    Themes,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initial display state from configuration and command-line overrides
fn initial_state(config: &AppConfig, args: &DisplayArgs) -> DisplayState {
    let theme = args.theme.unwrap_or(config.display.theme);
    let mode = if args.dark {
        ColorMode::Dark
    } else {
        config.display.mode
    };
    DisplayState::new(theme, mode)
}

/// Apply the command-line API key, validate and build the search service
fn search_service(
    config: &mut AppConfig,
    api_key: Option<String>,
) -> anyhow::Result<SearchService> {
    if let Some(key) = api_key {
        config.weather.set_api_key(key);
    }
    config.validate()?;

    let adapter = OpenWeatherAdapter::with_config(config.weather.to_client_config())
        .context("Failed to create weather client")?;
    Ok(SearchService::new(Arc::new(adapter)).with_max_days(config.display.forecast_days))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&config.telemetry)?;

    match cli.command {
        Commands::Themes => {
            print!("{}", render_themes(config.display.theme, config.display.mode));
            Ok(ExitCode::SUCCESS)
        },

        Commands::Search {
            city,
            display,
            json,
        } => {
            let service = search_service(&mut config, cli.api_key)?;
            let mut state = initial_state(&config, &display);
            state.apply(DisplayAction::EditCity(city));
            let status = service.submit(&mut state).await;
            info!(?status, "Search finished");

            if json {
                let view = JsonView::new(&state, &config.weather.icon_base_url);
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render(&state));
            }

            Ok(match status {
                SubmitStatus::Loaded => ExitCode::SUCCESS,
                SubmitStatus::Skipped | SubmitStatus::Failed => ExitCode::FAILURE,
            })
        },

        Commands::Interactive { display } => {
            let service = search_service(&mut config, cli.api_key)?;
            let mut state = initial_state(&config, &display);
            repl::run(&service, &mut state).await?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(7), "trace");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn display_args_override_config() {
        let mut config = AppConfig::default();
        config.display.theme = ThemePalette::Ocean;

        let state = initial_state(&config, &DisplayArgs::default());
        assert_eq!(state.theme(), ThemePalette::Ocean);
        assert_eq!(state.mode(), ColorMode::Light);

        let args = DisplayArgs {
            theme: Some(ThemePalette::Night),
            dark: true,
        };
        let state = initial_state(&config, &args);
        assert_eq!(state.theme(), ThemePalette::Night);
        assert_eq!(state.mode(), ColorMode::Dark);
    }

    #[test]
    fn search_service_uses_forecast_days() {
        let mut config = AppConfig::default();
        config.display.forecast_days = 3;
        let service = search_service(&mut config, Some("k".to_string())).unwrap();
        assert_eq!(service.max_days(), 3);
        assert!(config.weather.has_api_key());
    }

    #[test]
    fn search_service_requires_api_key() {
        let mut config = AppConfig::default();
        let err = search_service(&mut config, None).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }
}
