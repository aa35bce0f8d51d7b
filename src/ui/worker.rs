use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::quote::{Acquirer, QuoteSource};
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Serves `UiCommand`s one at a time, forwarding every acquisition
/// transition to the UI loop as [`AppEvent::Quote`].
///
/// Commands are handled sequentially, so chains never overlap. Returns when
/// the command channel closes.
pub async fn acquisition_worker<S: QuoteSource>(
    mut acquirer: Acquirer<S>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchQuote { retry } => {
                let outcome = acquirer
                    .run(retry, |event| {
                        // UI gone means shutdown; the chain still finishes.
                        let _ = events.send(AppEvent::Quote(event.into()));
                    })
                    .await;
                debug!(fallback = outcome.is_fallback(), "Acquisition finished");
            }
        }
    }
    debug!("Acquisition worker stopped");
}
