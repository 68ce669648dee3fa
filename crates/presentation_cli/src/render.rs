//! Terminal rendering of the display state

use std::fmt::Write as _;

use application::DisplayState;
use console::{Color, Style};
use domain::{ColorMode, CurrentConditions, DailySummary, ThemePalette};
use integration_weather::icon_url;
use serde::Serialize;

/// Styles derived from the active theme and color mode
#[derive(Debug, Clone)]
pub struct Palette {
    accent: Style,
    heading: Style,
    value: Style,
    muted: Style,
    error: Style,
}

impl Palette {
    /// Build the terminal styles for a theme in a color mode
    #[must_use]
    pub fn new(theme: ThemePalette, mode: ColorMode) -> Self {
        let accent = match theme {
            ThemePalette::Classic => Color::Color256(39),
            ThemePalette::Ocean => Color::Color256(36),
            ThemePalette::Sunset => Color::Color256(209),
            ThemePalette::Aurora => Color::Color256(141),
            ThemePalette::Night => Color::Color256(250),
        };
        let (text, muted) = match mode {
            ColorMode::Light => (Color::Color256(236), Color::Color256(244)),
            ColorMode::Dark => (Color::Color256(255), Color::Color256(247)),
        };

        Self {
            accent: Style::new().fg(accent).bold(),
            heading: Style::new().fg(text).bold(),
            value: Style::new().fg(text),
            muted: Style::new().fg(muted),
            error: Style::new().fg(Color::Red).bold(),
        }
    }
}

/// Round half up to whole degrees
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temperature(celsius: f64) -> i64 {
    (celsius + 0.5).floor() as i64
}

/// Rounded temperature with unit, e.g. `21°C`
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{}°C", round_temperature(celsius))
}

/// Uppercase the first letter of every word
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole screen as text
#[must_use]
pub fn render(state: &DisplayState) -> String {
    let palette = Palette::new(state.theme(), state.mode());
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}  {}",
        palette.accent.apply_to(format!("{} Theme", state.theme().name())),
        palette.muted.apply_to(format!("[{} mode]", state.mode())),
    );
    out.push('\n');

    if state.is_loading() {
        let _ = writeln!(
            out,
            "{}",
            palette
                .muted
                .apply_to(format!("Loading weather for {}...", state.city_input().trim()))
        );
        return out;
    }

    if let Some(error) = state.error() {
        let _ = writeln!(out, "{}", palette.error.apply_to(error));
        return out;
    }

    match state.current() {
        Some(current) => {
            render_current(&mut out, &palette, current);
            if !state.daily().is_empty() {
                out.push('\n');
                render_daily(&mut out, &palette, state.daily());
            }
        },
        None => {
            let _ = writeln!(
                out,
                "{}",
                palette
                    .muted
                    .apply_to("Search for a city to see the weather.")
            );
        },
    }

    out
}

fn render_current(out: &mut String, palette: &Palette, current: &CurrentConditions) {
    let _ = writeln!(
        out,
        "{}",
        palette.heading.apply_to(current.location_label())
    );
    let _ = writeln!(
        out,
        "  {}",
        palette
            .muted
            .apply_to(title_case(&current.condition.description))
    );
    let _ = writeln!(
        out,
        "  {}  {}",
        palette
            .accent
            .apply_to(format_temperature(current.temperature)),
        palette.muted.apply_to(format!(
            "feels like {}",
            format_temperature(current.feels_like)
        )),
    );
    let _ = writeln!(
        out,
        "  {}   {}   {}",
        palette
            .value
            .apply_to(format!("Humidity {}", current.humidity)),
        palette
            .value
            .apply_to(format!("Wind {} m/s", current.wind_speed)),
        palette
            .value
            .apply_to(format!("Pressure {} hPa", current.pressure)),
    );
}

fn render_daily(out: &mut String, palette: &Palette, daily: &[DailySummary]) {
    let _ = writeln!(
        out,
        "{}",
        palette
            .heading
            .apply_to(format!("{}-Day Forecast", daily.len()))
    );
    for day in daily {
        let _ = writeln!(
            out,
            "  {}  {:>5}  {}",
            palette.value.apply_to(day.weekday_label()),
            palette
                .accent
                .apply_to(format_temperature(day.representative.temperature)),
            palette
                .muted
                .apply_to(&day.representative.condition.main),
        );
    }
}

/// List all theme palettes, marking the active one
#[must_use]
pub fn render_themes(active: ThemePalette, mode: ColorMode) -> String {
    let mut out = String::new();
    for theme in ThemePalette::ALL {
        let palette = Palette::new(theme, mode);
        let marker = if theme == active { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {:<8} {}",
            palette.accent.apply_to(theme.name()),
            palette.muted.apply_to(theme.gradient()),
        );
    }
    out
}

/// Machine-readable view of the display state
#[derive(Debug, Serialize)]
pub struct JsonView<'a> {
    /// Full display state
    pub state: &'a DisplayState,
    /// Page background for the active theme
    pub theme_gradient: &'static str,
    /// Card background for the current condition and mode
    pub card_background: &'static str,
    /// Large icon for the current condition
    pub current_icon_url: Option<String>,
    /// Large icon for each daily entry, same order as `state.daily`
    pub daily_icon_urls: Vec<String>,
}

impl<'a> JsonView<'a> {
    /// Build the view, resolving icon URLs against `icon_base`
    #[must_use]
    pub fn new(state: &'a DisplayState, icon_base: &str) -> Self {
        Self {
            state,
            theme_gradient: state.theme().gradient(),
            card_background: state.card_background(),
            current_icon_url: state
                .current()
                .map(|current| icon_url(icon_base, &current.condition.icon)),
            daily_icon_urls: state
                .daily()
                .iter()
                .map(|day| icon_url(icon_base, &day.representative.condition.icon))
                .collect(),
        }
    }
}
