//! Quote acquisition: remote fetch, bounded retry, and local fallback.
//!
//! - `model.rs` - the `Quote` value type
//! - `catalog.rs` - embedded fallback quotes
//! - `source.rs` - `QuoteSource` trait and the HTTP implementation
//! - `error.rs` - fetch error taxonomy
//! - `acquire.rs` - the retry/fallback procedure

mod acquire;
mod catalog;
mod error;
mod model;
mod source;

pub use acquire::{AcquireEvent, Acquirer, Acquisition, RetryPolicy, FALLBACK_ADVISORY};
pub use catalog::FallbackCatalog;
pub use error::FetchError;
pub use model::{Quote, UNKNOWN_AUTHOR};
pub use source::{HttpQuoteSource, QuotePayload, QuoteSource, DEFAULT_ENDPOINT};
