//! Data the server embeds in the page for the client to pick up.
//!
//! Signup rules and the profile's saved values arrive as JSON script blocks,
//! the CSRF token as Django's `csrftoken` cookie. Both readers fall back to safe defaults when the
//! source is missing so a page renders even if the template forgot them.

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

use serde::de::DeserializeOwned;
use serde_json::Value;
use widgets::rules::RuleConfig;

/// Id of the `<script type="application/json">` block holding [`RuleConfig`].
pub const RULES_ELEMENT_ID: &str = "signup-rules";

/// Id of the JSON block holding the profile form's stored values.
pub const PROFILE_ELEMENT_ID: &str = "profile-data";

#[cfg(feature = "csr")]
const CSRF_COOKIE: &str = "csrftoken";

/// Decode the embedded rule block, defaulting when it is absent or invalid.
pub fn parse_rule_config(raw: Option<&str>) -> RuleConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return RuleConfig::default();
    };
    match RuleConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring malformed signup rules: {e}");
            RuleConfig::default()
        }
    }
}

/// Text of the element with `id`, if the page has one.
pub fn script_block(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Decode a JSON block into `T`, logging and returning `None` when the block
/// is missing or does not match.
pub fn parse_json_block<T: DeserializeOwned>(id: &str, raw: Option<&str>) -> Option<T> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed #{id} block: {e}");
            None
        }
    }
}

pub fn read_json_block<T: DeserializeOwned>(id: &str) -> Option<T> {
    parse_json_block(id, script_block(id).as_deref())
}

pub fn read_rule_config() -> RuleConfig {
    parse_rule_config(script_block(RULES_ELEMENT_ID).as_deref())
}

/// Flatten a JSON object of stored profile values into form strings.
/// Numbers become their decimal text, `null` becomes empty, and nested values
/// are skipped.
pub fn parse_profile_values(raw: Option<&str>) -> Vec<(String, String)> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let object = match serde_json::from_str::<serde_json::Map<String, Value>>(raw) {
        Ok(object) => object,
        Err(e) => {
            leptos::logging::warn!("ignoring malformed profile data: {e}");
            return Vec::new();
        }
    };
    object
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => return None,
            };
            Some((key, text))
        })
        .collect()
}

pub fn read_profile_values() -> Vec<(String, String)> {
    parse_profile_values(script_block(PROFILE_ELEMENT_ID).as_deref())
}

/// Find `name` in a `document.cookie` style string.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then_some(value)
    })
}

pub fn csrf_token() -> String {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let cookies = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .unwrap_or_default();
        cookie_value(&cookies, CSRF_COOKIE).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
