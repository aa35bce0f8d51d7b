//! Quote card feature module.
//!
//! Uses the MVI pattern:
//! - `state.rs` - what the card shows
//! - `intent.rs` - acquisition transitions and spinner ticks
//! - `reducer.rs` - state transitions
//! - `card.rs` - rendering

mod card;
mod intent;
mod reducer;
mod state;

pub use card::render_quote_card;
pub use intent::QuoteIntent;
pub use reducer::QuoteReducer;
pub use state::QuoteState;
