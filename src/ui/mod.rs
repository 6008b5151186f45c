//! User interface: the eframe application, its state, and the theme.

pub mod app;
pub mod state;
pub mod theme;

pub use app::JokeboxApp;
pub use state::AppState;
pub use theme::Theme;
