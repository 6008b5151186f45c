//! HTTP client for the remote joke API.
//!
//! The API exposes one endpoint per category returning a random joke as a
//! two-field JSON object. The UI consumes the degraded fetch variant: any
//! transport or decode failure yields an empty joke with no user-visible
//! error, and the failure itself goes to the log.

use crate::jokes::Category;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Base URL of the joke API.
pub const API_BASE_URL: &str = "https://www.yomama-jokes.com/api/v1/jokes";

/// Timeout for a single fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the random-joke endpoint URL for a category.
pub fn random_joke_url(category: Category) -> String {
    format!("{API_BASE_URL}/{}/random/", category.as_str())
}

/// A single fetched joke.
///
/// Created fresh on every successful fetch and replaced wholesale on the
/// next one; never merged or accumulated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub joke: String,
    pub category: String,
}

impl Joke {
    pub fn is_empty(&self) -> bool {
        self.joke.is_empty()
    }

    /// Strict decode of an API response body.
    pub fn decode(bytes: &[u8]) -> Result<Joke> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a response body, degrading to an empty joke on failure.
    pub fn decode_or_empty(bytes: &[u8]) -> Joke {
        match Self::decode(bytes) {
            Ok(joke) => joke,
            Err(e) => {
                warn!("Joke decode failed: {}", e);
                Joke::default()
            }
        }
    }
}

/// Client for the remote joke API.
#[derive(Clone)]
pub struct JokeClient {
    client: reqwest::Client,
}

impl JokeClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a random joke for the category, degrading to an empty joke on
    /// any transport or decode failure.
    pub async fn fetch_random_or_empty(&self, category: Category) -> Joke {
        let url = random_joke_url(category);
        debug!("Fetching joke from {}", url);

        match self.get_body(&url).await {
            Ok(body) => Joke::decode_or_empty(&body),
            Err(e) => {
                warn!("Joke fetch failed for {}: {}", category, e);
                Joke::default()
            }
        }
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_matches_template_for_every_category() {
        let cases = [
            (Category::Bald, "https://www.yomama-jokes.com/api/v1/jokes/Bald/random/"),
            (Category::Fat, "https://www.yomama-jokes.com/api/v1/jokes/Fat/random/"),
            (Category::Hairy, "https://www.yomama-jokes.com/api/v1/jokes/Hairy/random/"),
            (Category::Nasty, "https://www.yomama-jokes.com/api/v1/jokes/Nasty/random/"),
            (Category::Old, "https://www.yomama-jokes.com/api/v1/jokes/Old/random/"),
            (Category::Poor, "https://www.yomama-jokes.com/api/v1/jokes/Poor/random/"),
            (Category::Stupid, "https://www.yomama-jokes.com/api/v1/jokes/Stupid/random/"),
            (Category::Short, "https://www.yomama-jokes.com/api/v1/jokes/Short/random/"),
            (Category::Skinny, "https://www.yomama-jokes.com/api/v1/jokes/Skinny/random/"),
            (Category::Tall, "https://www.yomama-jokes.com/api/v1/jokes/Tall/random/"),
            (Category::Ugly, "https://www.yomama-jokes.com/api/v1/jokes/Ugly/random/"),
        ];

        assert_eq!(cases.len(), Category::ALL.len());
        for (category, expected) in cases {
            assert_eq!(random_joke_url(category), expected);
        }
    }

    #[test]
    fn decode_well_formed_body() {
        let body = br#"{"joke":"Yo mama so bald...","category":"Bald"}"#;
        let joke = Joke::decode(body).unwrap();

        assert_eq!(joke.joke, "Yo mama so bald...");
        assert_eq!(joke.category, "Bald");
        assert!(!joke.is_empty());
    }

    #[test]
    fn decode_ignores_extra_fields() {
        let body = br#"{"joke":"j","category":"Old","rating":5}"#;
        let joke = Joke::decode(body).unwrap();

        assert_eq!(joke.joke, "j");
        assert_eq!(joke.category, "Old");
    }

    #[test]
    fn decode_malformed_body_is_error() {
        assert!(Joke::decode(b"not json").is_err());
        assert!(Joke::decode(br#"{"joke":"missing category"}"#).is_err());
    }

    #[test]
    fn decode_or_empty_degrades_to_empty_joke() {
        let bodies: [&[u8]; 4] = [b"", b"not json", br#"{"unexpected":true}"#, b"[1,2,3]"];
        for body in bodies {
            let joke = Joke::decode_or_empty(body);
            assert_eq!(joke, Joke::default());
            assert!(joke.is_empty());
            assert!(joke.category.is_empty());
        }
    }

    #[test]
    fn decode_or_empty_passes_through_well_formed_body() {
        let joke = Joke::decode_or_empty(br#"{"joke":"ha","category":"Tall"}"#);
        assert_eq!(joke.joke, "ha");
        assert_eq!(joke.category, "Tall");
    }
}
