//! Reads the server-embedded flash payload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders flashed messages into a JSON `<script>` block so the
//! chrome can pick them up once at hydration. The snapshot is taken a
//! single time; messages added to the page afterwards are not observed.

#[cfg(test)]
#[path = "flash_data_test.rs"]
mod flash_data_test;

use serde::Deserialize;

use crate::state::flash::FlashLevel;

/// Element id of the embedded payload.
pub const FLASH_DATA_ID: &str = "flash-data";

#[derive(Debug, Deserialize)]
struct RawFlash {
    message: String,
    #[serde(default)]
    category: String,
}

/// Flash messages present in the page at initialization.
///
/// Empty when the payload element is missing or malformed; a page without
/// flashes is the common case, not an error.
#[must_use]
pub fn initial_messages() -> Vec<(String, FlashLevel)> {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Some(el) = doc.get_element_by_id(FLASH_DATA_ID) else {
            return Vec::new();
        };
        parse_payload(&el.text_content().unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Parse the JSON payload into `(text, level)` pairs.
#[must_use]
pub fn parse_payload(raw: &str) -> Vec<(String, FlashLevel)> {
    serde_json::from_str::<Vec<RawFlash>>(raw)
        .map(|items| {
            items
                .into_iter()
                .map(|flash| (flash.message, FlashLevel::from_category(&flash.category)))
                .collect()
        })
        .unwrap_or_default()
}
