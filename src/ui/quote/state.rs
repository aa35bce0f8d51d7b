//! State for the quote card.

use crate::quote::Quote;
use crate::ui::mvi::UiState;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// What the quote card shows.
///
/// `quote` keeps the previous value while a new chain is loading; the card
/// hides it until `loading` clears.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteState {
    pub quote: Option<Quote>,
    pub loading: bool,
    /// Advisory shown under a fallback quote.
    pub error: Option<String>,
    /// Retry in progress, 0 while on the first attempt or idle.
    pub retry_attempt: u32,
    /// Failure that triggered the current retry.
    pub last_failure: Option<String>,
    pub animation_tick: u8,
}

impl UiState for QuoteState {}

impl QuoteState {
    /// Whether the card should render quote content.
    pub fn is_displayable(&self) -> bool {
        !self.loading && self.quote.is_some()
    }

    pub fn is_fallback(&self) -> bool {
        !self.loading && self.error.is_some()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.animation_tick as usize % SPINNER.len()]
    }
}
