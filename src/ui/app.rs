use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::quote::Quote;
use crate::share::{share_url, UrlOpener};
use crate::ui::mvi::Reducer;
use crate::ui::quote::{QuoteIntent, QuoteReducer, QuoteState};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub const COPY_SUCCESS: &str = "Copied to clipboard!";
pub const COPY_FAILURE: &str = "Copy failed. Select and copy manually.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchQuote { retry: bool },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message; the next key press only dismisses it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Retry flag passed to every acquisition this session requests.
    retry: bool,
    /// Quote card state (MVI pattern).
    quote: QuoteState,
    /// A chain was requested and has not reported a terminal intent yet.
    in_flight: bool,
    notice: Option<Notice>,
    share_intent_url: String,
    clipboard: Box<dyn ClipboardSink>,
    opener: Box<dyn UrlOpener>,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(
        config: &Config,
        retry: bool,
        clipboard: Box<dyn ClipboardSink>,
        opener: Box<dyn UrlOpener>,
    ) -> Self {
        Self {
            should_quit: false,
            retry,
            quote: QuoteState::default(),
            in_flight: false,
            notice: None,
            share_intent_url: config.share.intent_url.clone(),
            clipboard,
            opener,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn quote_state(&self) -> &QuoteState {
        &self.quote
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Ask the worker for a new quote.
    ///
    /// Ignored while a chain is in flight, so at most one runs at a time.
    pub fn request_quote(&mut self) -> bool {
        if self.in_flight {
            debug!("Quote request ignored: acquisition already in flight");
            return false;
        }
        let sent = self.send_command(UiCommand::FetchQuote { retry: self.retry });
        self.in_flight = sent;
        sent
    }

    /// Fold a transition reported by the acquisition worker.
    pub fn apply_quote_intent(&mut self, intent: QuoteIntent) {
        if intent.is_terminal() {
            self.in_flight = false;
        }
        dispatch_mvi!(self, quote, QuoteReducer, intent);
    }

    pub fn on_tick(&mut self) {
        if self.quote.loading {
            dispatch_mvi!(self, quote, QuoteReducer, QuoteIntent::AnimationTick);
        }
    }

    /// The quote currently on screen; hidden while a chain is loading.
    pub fn displayed_quote(&self) -> Option<&Quote> {
        if self.quote.loading {
            return None;
        }
        self.quote.quote.as_ref()
    }

    /// Copy the displayed quote. Returns false when there was nothing to copy.
    pub fn copy_quote(&mut self) -> bool {
        let Some(line) = self.displayed_quote().map(Quote::display_line) else {
            return false;
        };

        self.notice = Some(match self.clipboard.set_text(&line) {
            Ok(()) => {
                info!("Quote copied to clipboard");
                Notice {
                    kind: NoticeKind::Info,
                    message: COPY_SUCCESS.to_string(),
                }
            }
            Err(err) => {
                warn!(error = %err, "Clipboard write failed");
                Notice {
                    kind: NoticeKind::Error,
                    message: COPY_FAILURE.to_string(),
                }
            }
        });
        true
    }

    /// Open the share composer for the displayed quote.
    ///
    /// Returns the URL handed to the opener, or `None` without a quote.
    pub fn share_quote(&mut self) -> Option<String> {
        let url = share_url(&self.share_intent_url, self.displayed_quote()?);
        match self.opener.open(&url) {
            Ok(()) => info!(url = %url, "Opened share link"),
            Err(err) => warn!(error = %err, url = %url, "Failed to open share link"),
        }
        Some(url)
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                warn!(error = %err, "Failed to send UI command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
