/// Marker for view state owned by the UI thread.
///
/// `Default` is the state before anything happened; `PartialEq` lets tests and
/// the render loop compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
