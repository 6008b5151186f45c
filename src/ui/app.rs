//! Main application struct and eframe integration
//!
//! This module contains the JokeboxApp that implements eframe::App.

use crate::jokes::{Category, JokeClient};
use crate::prefs::Preferences;
use crate::speech::{SpeechConfig, SpeechPipeline};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use crate::{JokeboxError, Result};
use egui::{self, CentralPanel, ComboBox, RichText, TopBottomPanel};

/// Main Jokebox application
pub struct JokeboxApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
    /// Runtime owning the fetch tasks
    runtime: tokio::runtime::Runtime,
    /// Speech worker thread, joined on exit
    speech_worker: Option<std::thread::JoinHandle<()>>,
}

impl JokeboxApp {
    /// Create a new Jokebox application.
    ///
    /// Loads preferences, starts the fetch runtime, and spawns the speech
    /// worker that owns the synthesizer for the lifetime of the process.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let prefs = Preferences::load(cc.storage);

        let theme = Theme::for_mode(prefs.dark_mode);
        theme.apply(&cc.egui_ctx);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| JokeboxError::RuntimeError(e.to_string()))?;

        let pipeline = SpeechPipeline::new(SpeechConfig::default());
        let mut state = AppState::new(prefs, JokeClient::new()?);
        state.speech_tx = Some(pipeline.command_sender());
        state.speech_event_rx = Some(pipeline.event_receiver());
        let speech_worker = pipeline.start_worker();

        Ok(Self {
            state,
            theme,
            runtime,
            speech_worker: Some(speech_worker),
        })
    }

    /// Show the top header bar: dark-mode toggle, voice toggle, title
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let dark_icon = if self.state.prefs.dark_mode { "💡" } else { "🔅" };
                    if ui.button(dark_icon).on_hover_text("Toggle dark mode").clicked() {
                        self.state.prefs.dark_mode = !self.state.prefs.dark_mode;
                        self.theme = Theme::for_mode(self.state.prefs.dark_mode);
                        self.theme.apply(ctx);
                    }

                    let voice_icon = if self.state.prefs.voice_enabled { "🔊" } else { "🔇" };
                    if ui
                        .button(voice_icon)
                        .on_hover_text("Toggle voice output")
                        .clicked()
                    {
                        let enabled = !self.state.prefs.voice_enabled;
                        self.state.set_voice_enabled(enabled);
                    }

                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Yo Mama Jokes")
                                .size(20.0)
                                .strong()
                                .color(self.theme.text_primary),
                        );
                    });
                });
            });
    }

    /// Show the controls row: category picker and copy button
    fn show_controls(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("controls")
            .frame(egui::Frame::none().inner_margin(self.theme.spacing_sm))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Category:");

                    let selected = self.state.selected_category();
                    ComboBox::from_id_salt("category_picker")
                        .selected_text(selected.as_str())
                        .show_ui(ui, |ui| {
                            for (index, category) in Category::ALL.iter().enumerate() {
                                ui.selectable_value(
                                    &mut self.state.prefs.category_index,
                                    index,
                                    category.as_str(),
                                );
                            }
                        });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.state.joke_copied {
                            "Copied!"
                        } else {
                            "Copy Joke"
                        };

                        let copy = ui.add_enabled(
                            self.state.can_copy(),
                            egui::Button::new(label).rounding(self.theme.button_rounding),
                        );
                        if copy.clicked() {
                            self.state.copy_joke(ctx);
                        }
                    });
                });
            });
    }

    /// Show the bottom fetch button
    fn show_fetch_button(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("fetch")
            .frame(egui::Frame::none().inner_margin(self.theme.spacing))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let label = if self.state.prefs.voice_enabled {
                        "Read me a joke!"
                    } else {
                        "Load me a joke!"
                    };

                    let button = egui::Button::new(RichText::new(label).size(16.0))
                        .rounding(self.theme.button_rounding);

                    if ui.add(button).clicked() {
                        self.state.request_joke(self.runtime.handle(), ctx);
                    }
                });
            });
    }

    /// Show the main content area with the joke text
    fn show_joke(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    if self.state.joke.is_empty() {
                        ui.label(
                            RichText::new("Press the button to fetch a joke")
                                .size(14.0)
                                .color(self.theme.text_muted),
                        );
                    } else {
                        ui.label(
                            RichText::new(&self.state.joke.joke)
                                .size(24.0)
                                .strong()
                                .color(self.theme.text_primary),
                        );
                    }
                });
            });
    }
}

impl eframe::App for JokeboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply fetch results and speech events delivered since last frame
        self.state.poll_events();

        self.show_header(ctx);
        self.show_controls(ctx);
        self.show_fetch_button(ctx);
        self.show_joke(ctx);

        if self.state.fetches_in_flight > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.state.prefs.store(storage);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.shutdown_speech();
        if let Some(handle) = self.speech_worker.take() {
            let _ = handle.join();
        }
    }
}
