//! Application state management
//!
//! This module provides the central state for the Jokebox UI: the currently
//! displayed joke, the persisted preferences, and the channels to the fetch
//! tasks and the speech worker.

use crate::jokes::{Category, Joke, JokeClient};
use crate::prefs::Preferences;
use crate::speech::{SpeechCommand, SpeechEvent};
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::{debug, warn};

/// Capacity of the fetch-result channel.
const FETCH_CHANNEL_CAPACITY: usize = 8;

/// Central application state
pub struct AppState {
    /// Persisted user preferences
    pub prefs: Preferences,

    /// The currently displayed joke, replaced wholesale on every fetch
    pub joke: Joke,

    /// Whether the displayed joke has been copied to the clipboard
    pub joke_copied: bool,

    /// Number of fetches currently outstanding. Overlapping fetches are
    /// independent; whichever response lands last wins.
    pub fetches_in_flight: usize,

    /// HTTP client shared by fetch tasks
    client: JokeClient,

    /// Fetch results from background tasks
    fetch_tx: Sender<Joke>,
    fetch_rx: Receiver<Joke>,

    /// Channel to send speech commands
    pub speech_tx: Option<Sender<SpeechCommand>>,

    /// Channel to receive speech events
    pub speech_event_rx: Option<Receiver<SpeechEvent>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(prefs: Preferences, client: JokeClient) -> Self {
        let (fetch_tx, fetch_rx) = bounded(FETCH_CHANNEL_CAPACITY);

        Self {
            prefs,
            joke: Joke::default(),
            joke_copied: false,
            fetches_in_flight: 0,
            client,
            fetch_tx,
            fetch_rx,
            speech_tx: None,
            speech_event_rx: None,
        }
    }

    /// Category currently selected in the picker.
    pub fn selected_category(&self) -> Category {
        Category::from_index(self.prefs.category_index).unwrap_or_default()
    }

    /// Whether the copy button is enabled: there is a joke to copy and it
    /// has not been copied yet.
    pub fn can_copy(&self) -> bool {
        !self.joke.is_empty() && !self.joke_copied
    }

    /// Copy the displayed joke text verbatim to the clipboard.
    pub fn copy_joke(&mut self, ctx: &egui::Context) {
        if !self.can_copy() {
            return;
        }

        ctx.copy_text(self.joke.joke.clone());
        self.joke_copied = true;
    }

    /// Start one fetch for the selected category.
    ///
    /// A second press while one is outstanding starts an independent
    /// overlapping request; results are applied in arrival order. Any
    /// in-progress speech is stopped first.
    pub fn request_joke(&mut self, runtime: &tokio::runtime::Handle, ctx: &egui::Context) {
        self.send_speech(SpeechCommand::Stop);

        let client = self.client.clone();
        let category = self.selected_category();
        let tx = self.fetch_tx.clone();
        let repaint_ctx = ctx.clone();

        self.fetches_in_flight += 1;

        runtime.spawn(async move {
            let joke = client.fetch_random_or_empty(category).await;
            if tx.send(joke).is_ok() {
                repaint_ctx.request_repaint();
            }
        });
    }

    /// Process incoming events from backend channels
    pub fn poll_events(&mut self) {
        // Fetch results: each arriving joke replaces the displayed one and
        // re-arms the copy button.
        while let Ok(joke) = self.fetch_rx.try_recv() {
            self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
            debug!("Joke received (category: {:?})", joke.category);

            if self.prefs.voice_enabled && !joke.is_empty() {
                self.send_speech(SpeechCommand::Speak(joke.joke.clone()));
            }

            self.joke = joke;
            self.joke_copied = false;
        }

        // Speech events are informational only; the UI never surfaces them.
        if let Some(rx) = &self.speech_event_rx {
            while let Ok(event) = rx.try_recv() {
                match event {
                    SpeechEvent::Error(error) => warn!("Speech error: {}", error),
                    SpeechEvent::Shutdown => debug!("Speech worker shut down"),
                }
            }
        }
    }

    /// Enable or disable voice output. Disabling stops any in-progress
    /// speech immediately.
    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.prefs.voice_enabled = enabled;
        if !enabled {
            self.send_speech(SpeechCommand::Stop);
        }
    }

    /// Tell the speech worker to shut down.
    pub fn shutdown_speech(&self) {
        self.send_speech(SpeechCommand::Shutdown);
    }

    fn send_speech(&self, command: SpeechCommand) {
        if let Some(tx) = &self.speech_tx {
            if let Err(e) = tx.try_send(command) {
                warn!("Speech command dropped: {}", e);
            }
        }
    }
}
