use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::quote::{Acquirer, FallbackCatalog, HttpQuoteSource};
use crate::share::SystemOpener;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::acquisition_worker;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(120);
const COMMAND_BUFFER: usize = 4;

/// Run the interactive quote screen until the user quits.
pub fn run(config: Config, retry: bool) -> anyhow::Result<()> {
    let source = HttpQuoteSource::new(config.endpoint.url.clone(), config.endpoint.timeout())
        .context("Failed to build HTTP client")?;
    let acquirer = Acquirer::new(source, FallbackCatalog::builtin(), config.retry.policy());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    runtime.spawn(acquisition_worker(acquirer, command_rx, events.sender()));

    let mut app = App::new(
        &config,
        retry,
        Box::new(ClipboardHandler::new()),
        Box::new(SystemOpener::default()),
    );
    app.set_command_sender(command_tx);
    info!(endpoint = %config.endpoint.url, retry, "Starting quote screen");

    // Initial load.
    app.request_quote();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Quote(intent)) => app.apply_quote_intent(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
