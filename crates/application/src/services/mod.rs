//! Application services - Use case implementations

mod display;
mod search_service;

pub use display::{
    DisplayAction, DisplayState, FETCH_FAILURE_MESSAGE, SearchOutcome, SearchTicket,
};
pub use search_service::{SearchService, SubmitStatus};
