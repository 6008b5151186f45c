//! Jokebox - fetches a random joke and reads it aloud
//!
//! Main entry point for the Jokebox application.

use eframe::egui;
use jokebox::ui::JokeboxApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jokebox=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Jokebox");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 560.0])
            .with_min_inner_size([320.0, 400.0])
            .with_title("Yo Mama Jokes"),
        ..Default::default()
    };

    eframe::run_native(
        "jokebox",
        options,
        Box::new(|cc| Ok(Box::new(JokeboxApp::new(cc)?))),
    )
}
