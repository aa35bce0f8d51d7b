//! Reducer for the quote card.

use crate::ui::mvi::Reducer;

use super::intent::QuoteIntent;
use super::state::QuoteState;

pub struct QuoteReducer;

impl Reducer for QuoteReducer {
    type State = QuoteState;
    type Intent = QuoteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuoteIntent::Started => QuoteState {
                quote: state.quote,
                loading: true,
                error: None,
                retry_attempt: 0,
                last_failure: None,
                animation_tick: 0,
            },

            // The advisory is reserved for the fallback outcome; a retry only
            // records why it is happening.
            QuoteIntent::Retrying { attempt, error } => QuoteState {
                loading: true,
                error: None,
                retry_attempt: attempt,
                last_failure: Some(error),
                ..state
            },

            QuoteIntent::Resolved { quote } => QuoteState {
                quote: Some(quote),
                loading: false,
                error: None,
                retry_attempt: 0,
                last_failure: None,
                animation_tick: state.animation_tick,
            },

            QuoteIntent::FellBack { quote, advisory } => QuoteState {
                quote: Some(quote),
                loading: false,
                error: Some(advisory),
                retry_attempt: 0,
                last_failure: None,
                animation_tick: state.animation_tick,
            },

            QuoteIntent::AnimationTick if state.loading => QuoteState {
                animation_tick: state.animation_tick.wrapping_add(1),
                ..state
            },
            QuoteIntent::AnimationTick => state,
        }
    }
}
