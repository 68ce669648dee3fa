//! Display state for the weather screen
//!
//! All user-visible state lives in one `DisplayState` value. It changes only
//! through [`DisplayState::apply`], one [`DisplayAction`] per user action or
//! search lifecycle event, so transitions can be tested without a renderer.

use domain::{
    CityName, ColorMode, CurrentConditions, DailySummary, ThemePalette, UtcOffset,
    background_gradient,
};
use serde::Serialize;

use crate::error::ApplicationError;

/// The single message shown for any failed search
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Identifies one submitted search
///
/// Results carrying a ticket other than the pending one are stale and ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SearchTicket(u64);

impl SearchTicket {
    #[must_use]
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Result of a successful search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    /// Current conditions snapshot
    pub current: CurrentConditions,
    /// One entry per local day, closest-to-noon sample
    pub daily: Vec<DailySummary>,
    /// Offset used to bucket the forecast
    pub utc_offset: UtcOffset,
}

/// State transitions of the weather screen
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayAction {
    /// City text field edited
    EditCity(String),
    /// Light/dark switch pressed
    ToggleColorMode,
    /// Color mode chosen explicitly
    SetColorMode(ColorMode),
    /// Theme swatch selected
    SelectTheme(ThemePalette),
    /// A search was submitted
    SearchStarted(SearchTicket),
    /// Both fetches succeeded
    SearchSucceeded {
        /// Ticket of the search that produced this outcome
        ticket: SearchTicket,
        /// Fetched and reduced data
        outcome: Box<SearchOutcome>,
    },
    /// At least one fetch failed
    SearchFailed {
        /// Ticket of the failed search
        ticket: SearchTicket,
    },
}

/// Everything the weather screen shows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayState {
    city_input: String,
    mode: ColorMode,
    theme: ThemePalette,
    loading: bool,
    current: Option<CurrentConditions>,
    daily: Vec<DailySummary>,
    utc_offset: UtcOffset,
    error: Option<String>,
    #[serde(skip)]
    pending: Option<SearchTicket>,
    #[serde(skip)]
    last_ticket: SearchTicket,
}

impl DisplayState {
    /// Empty screen with the given theme and mode
    #[must_use]
    pub fn new(theme: ThemePalette, mode: ColorMode) -> Self {
        Self {
            theme,
            mode,
            ..Self::default()
        }
    }

    /// Apply one action
    pub fn apply(&mut self, action: DisplayAction) {
        match action {
            DisplayAction::EditCity(text) => self.city_input = text,
            DisplayAction::ToggleColorMode => self.mode = self.mode.toggle(),
            DisplayAction::SetColorMode(mode) => self.mode = mode,
            DisplayAction::SelectTheme(theme) => self.theme = theme,
            DisplayAction::SearchStarted(ticket) => {
                self.last_ticket = self.last_ticket.max(ticket);
                self.pending = Some(ticket);
                self.loading = true;
                self.error = None;
            },
            DisplayAction::SearchSucceeded { ticket, outcome } => {
                if !self.is_pending(ticket) {
                    return;
                }
                let SearchOutcome {
                    current,
                    daily,
                    utc_offset,
                } = *outcome;
                self.current = Some(current);
                self.daily = daily;
                self.utc_offset = utc_offset;
                self.error = None;
                self.finish();
            },
            DisplayAction::SearchFailed { ticket } => {
                if !self.is_pending(ticket) {
                    return;
                }
                self.current = None;
                self.daily.clear();
                self.utc_offset = UtcOffset::UTC;
                self.error = Some(FETCH_FAILURE_MESSAGE.to_string());
                self.finish();
            },
        }
    }

    /// Start a search for the current city input
    ///
    /// Returns `None` without touching the state when the input is blank or
    /// a search is already in flight.
    pub fn begin_search(&mut self) -> Option<(SearchTicket, CityName)> {
        if self.loading {
            return None;
        }
        let city = CityName::new(&self.city_input).ok()?;
        let ticket = self.last_ticket.next();
        self.apply(DisplayAction::SearchStarted(ticket));
        Some((ticket, city))
    }

    /// Record the result of a search started with [`Self::begin_search`]
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<SearchOutcome, ApplicationError>,
    ) {
        let action = match result {
            Ok(outcome) => DisplayAction::SearchSucceeded {
                ticket,
                outcome: Box::new(outcome),
            },
            Err(_) => DisplayAction::SearchFailed { ticket },
        };
        self.apply(action);
    }

    fn is_pending(&self, ticket: SearchTicket) -> bool {
        self.pending == Some(ticket)
    }

    fn finish(&mut self) {
        self.pending = None;
        self.loading = false;
    }

    /// Text currently in the city field
    #[must_use]
    pub fn city_input(&self) -> &str {
        &self.city_input
    }

    /// Active color mode
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Active theme palette
    #[must_use]
    pub const fn theme(&self) -> ThemePalette {
        self.theme
    }

    /// Whether a search is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current conditions of the last successful search
    #[must_use]
    pub const fn current(&self) -> Option<&CurrentConditions> {
        self.current.as_ref()
    }

    /// Daily forecast of the last successful search
    #[must_use]
    pub fn daily(&self) -> &[DailySummary] {
        &self.daily
    }

    /// Offset the daily forecast was bucketed with
    #[must_use]
    pub const fn utc_offset(&self) -> UtcOffset {
        self.utc_offset
    }

    /// User-visible error, if the last search failed
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether there is anything to show
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.current.is_some()
    }

    /// Background gradient for the current card
    #[must_use]
    pub fn card_background(&self) -> &'static str {
        let main = self
            .current
            .as_ref()
            .map_or("", |current| current.condition.main.as_str());
        background_gradient(main, self.mode)
    }
}
