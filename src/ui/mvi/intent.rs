/// Marker for events a reducer folds into state.
///
/// Intents cross from the acquisition worker to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
