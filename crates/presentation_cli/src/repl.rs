//! Interactive line-oriented session

use std::io::Write as _;

use application::{DisplayAction, DisplayState, SearchService, SubmitStatus};
use domain::{ColorMode, ThemePalette};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::render::{render, render_themes};

const HELP: &str = "\
Type a city name and press Enter to look up its weather.

Commands:
  :theme NAME   switch palette (classic, ocean, sunset, aurora, night)
  :mode [MODE]  toggle light/dark mode, or set it (light, dark)
  :themes       list palettes
  :help         show this help
  :quit         leave
";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Look up the weather for the given text
    Search(String),
    /// Switch palette
    Theme(ThemePalette),
    /// Toggle light/dark mode
    ToggleMode,
    /// Switch to a specific color mode
    SetMode(ColorMode),
    /// List palettes
    ListThemes,
    /// Show help
    Help,
    /// Leave the session
    Quit,
    /// Unrecognized or malformed command, with a message for the user
    Invalid(String),
}

/// Parse one input line
///
/// Anything not starting with `:` is a search, including blank lines.
#[must_use]
pub fn parse_input(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return ReplCommand::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    match (name.as_str(), arg) {
        ("theme", Some(arg)) => arg.parse().map_or_else(
            |_| ReplCommand::Invalid(format!("Unknown theme '{arg}'. Try :themes")),
            ReplCommand::Theme,
        ),
        ("theme", None) => ReplCommand::Invalid("Usage: :theme NAME".to_string()),
        ("mode", Some(arg)) => arg.parse().map_or_else(
            |_| ReplCommand::Invalid(format!("Unknown mode '{arg}'. Use light or dark")),
            ReplCommand::SetMode,
        ),
        ("mode", None) => ReplCommand::ToggleMode,
        ("themes", _) => ReplCommand::ListThemes,
        ("help" | "h" | "?", _) => ReplCommand::Help,
        ("quit" | "q" | "exit", _) => ReplCommand::Quit,
        _ => ReplCommand::Invalid(format!("Unknown command ':{name}'. Try :help")),
    }
}

fn prompt() -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "city> ")?;
    stdout.flush()
}

/// Run the session until `:quit` or end of input
pub async fn run(service: &SearchService, state: &mut DisplayState) -> anyhow::Result<()> {
    println!("{}", render(state));
    println!("Type :help for commands.");
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = parse_input(&line);
        debug!(?command, "Input parsed");

        match command {
            ReplCommand::Search(text) => {
                state.apply(DisplayAction::EditCity(text));
                let status = service
                    .submit_with(state, |loading| println!("{}", render(loading)))
                    .await;
                if status != SubmitStatus::Skipped {
                    println!("{}", render(state));
                }
            },
            ReplCommand::Theme(theme) => {
                state.apply(DisplayAction::SelectTheme(theme));
                println!("{}", render(state));
            },
            ReplCommand::ToggleMode => {
                state.apply(DisplayAction::ToggleColorMode);
                println!("{}", render(state));
            },
            ReplCommand::SetMode(mode) => {
                state.apply(DisplayAction::SetColorMode(mode));
                println!("{}", render(state));
            },
            ReplCommand::ListThemes => print!("{}", render_themes(state.theme(), state.mode())),
            ReplCommand::Help => print!("{HELP}"),
            ReplCommand::Quit => return Ok(()),
            ReplCommand::Invalid(message) => println!("{message}"),
        }
        prompt()?;
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_search() {
        assert_eq!(
            parse_input("Ho Chi Minh City"),
            ReplCommand::Search("Ho Chi Minh City".to_string())
        );
    }

    #[test]
    fn blank_line_is_search() {
        assert_eq!(parse_input("   "), ReplCommand::Search("   ".to_string()));
    }

    #[test]
    fn theme_command() {
        assert_eq!(
            parse_input(":theme Sunset"),
            ReplCommand::Theme(ThemePalette::Sunset)
        );
        assert!(matches!(parse_input(":theme neon"), ReplCommand::Invalid(msg) if msg.contains("neon")));
        assert!(matches!(parse_input(":theme"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_input(":mode"), ReplCommand::ToggleMode);
        assert_eq!(parse_input(":mode dark"), ReplCommand::SetMode(ColorMode::Dark));
        assert_eq!(parse_input(":mode Light"), ReplCommand::SetMode(ColorMode::Light));
        assert!(matches!(parse_input(":mode sepia"), ReplCommand::Invalid(msg) if msg.contains("sepia")));
        assert_eq!(parse_input(" :THEMES "), ReplCommand::ListThemes);
        assert_eq!(parse_input(":help"), ReplCommand::Help);
        assert_eq!(parse_input(":q"), ReplCommand::Quit);
        assert_eq!(parse_input(":quit"), ReplCommand::Quit);
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(parse_input(":fly"), ReplCommand::Invalid(msg) if msg.contains(":fly")));
        assert!(matches!(parse_input(":"), ReplCommand::Invalid(_)));
    }
}
