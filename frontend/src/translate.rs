//! Client half of the translation boundary.
//!
//! One request to the backend per language selection. Any failure —
//! transport, non-success status, undecodable body — resolves to the input
//! pair, so the caller either gets a complete translated pair or exactly
//! what it sent. Selecting English never reaches this module; the root
//! composition restores the source copy directly.

use gloo_net::http::Request;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config;

pub const LANGUAGES: [&str; 5] = ["English", "Spanish", "French", "Japanese", "German"];
pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    headline: &'a str,
    subheadline: &'a str,
    target_language: &'a str,
}

/// Headline and subheadline always travel together; a partial pair cannot
/// be represented.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextPair {
    pub headline: String,
    pub subheadline: String,
}

pub async fn translate(headline: &str, subheadline: &str, target_language: &str) -> TextPair {
    let original = TextPair {
        headline: headline.to_string(),
        subheadline: subheadline.to_string(),
    };

    let request = TranslateRequest {
        headline,
        subheadline,
        target_language,
    };
    let url = format!("{}/api/translate", config::get_backend_url());

    let builder = match Request::post(&url).json(&request) {
        Ok(builder) => builder,
        Err(error) => {
            warn!("failed to encode translation request: {error}");
            return original;
        }
    };

    let response = match builder.send().await {
        Ok(response) => response,
        Err(error) => {
            warn!("translation request failed: {error}");
            return original;
        }
    };

    if !response.ok() {
        warn!("translation endpoint returned status {}", response.status());
        return original;
    }

    match response.json::<TextPair>().await {
        Ok(pair) => pair,
        Err(error) => {
            warn!("undecodable translation response: {error}");
            original
        }
    }
}
