//! Intents for the quote card.

use crate::quote::{AcquireEvent, Quote};
use crate::ui::mvi::Intent;

/// Transitions reported by an acquisition chain, plus the spinner tick.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteIntent {
    /// A chain began.
    Started,

    /// An attempt failed and another one follows after the retry delay.
    Retrying {
        /// Retry number (1-based).
        attempt: u32,
        /// Why the previous attempt failed.
        error: String,
    },

    /// The endpoint produced a quote.
    Resolved { quote: Quote },

    /// Every allowed attempt failed; a catalog quote is shown instead.
    FellBack { quote: Quote, advisory: String },

    /// Spinner frame advance.
    AnimationTick,
}

impl Intent for QuoteIntent {}

impl QuoteIntent {
    /// True for the intents that end a chain.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved { .. } | Self::FellBack { .. })
    }
}

impl From<AcquireEvent> for QuoteIntent {
    fn from(event: AcquireEvent) -> Self {
        match event {
            AcquireEvent::Started => Self::Started,
            AcquireEvent::Retrying { attempt, error } => Self::Retrying { attempt, error },
            AcquireEvent::Resolved(quote) => Self::Resolved { quote },
            AcquireEvent::FellBack { quote, advisory } => Self::FellBack { quote, advisory },
        }
    }
}
