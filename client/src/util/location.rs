//! Browser location and history access.
//!
//! Pages read their filter state from `location.search` and rewrite it with
//! `history.replaceState` (post-save flag removal) or a full navigation
//! (filter changes, which the server renders). Native builds see an empty
//! query and every write is a no-op.

/// Current query string including the leading `?`, or empty.
pub fn current_query() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Full page navigation.
pub fn set_href(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                leptos::logging::warn!("navigation to {href} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Swap the current history entry's URL without reloading.
pub fn replace_url(href: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(href)) {
            leptos::logging::warn!("history replace failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Blocking browser confirmation dialog. Outside the browser nothing is
/// confirmed.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
