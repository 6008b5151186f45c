//! Joke fetching: the fixed category list, the wire format, and the HTTP client.

pub mod category;
pub mod client;

pub use category::Category;
pub use client::{random_joke_url, Joke, JokeClient, API_BASE_URL};
