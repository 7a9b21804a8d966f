//! REST helpers for the two endpoints the client calls directly.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report the endpoint as unavailable, so pages and
//! state compile and test without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`AvailabilityError`] or a display string. Callers
//! turn them into notices; nothing here panics or blocks navigation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::{Deserialize, Serialize};
use widgets::availability::{AvailabilityError, UsernameAvailability};

#[cfg(any(test, feature = "csr"))]
const CHECK_USERNAME_PATH: &str = "/accounts/check-username/";
#[cfg(feature = "csr")]
const NEWS_REFRESH_PATH: &str = "/news/refresh/";

/// Give up on an availability lookup after this long.
#[cfg(feature = "csr")]
const AVAILABILITY_TIMEOUT_MS: u32 = 5000;

/// Body of `GET /accounts/check-username/`.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

#[cfg(any(test, feature = "csr"))]
fn check_username_endpoint(username: &str) -> String {
    let mut query = widgets::query::QueryParams::default();
    query.set("username", username);
    format!("{CHECK_USERNAME_PATH}?{}", query.to_query_string())
}

#[cfg(any(test, feature = "csr"))]
fn parse_availability(body: &str) -> Result<bool, AvailabilityError> {
    serde_json::from_str::<AvailabilityResponse>(body)
        .map(|r| r.available)
        .map_err(|e| AvailabilityError::Decode(e.to_string()))
}

/// Keywords the crawler searches for on a manual refresh.
#[cfg(any(test, feature = "csr"))]
const REFRESH_KEYWORDS: &[&str] = &["금융", "경제", "투자"];

/// Body of `POST /news/refresh/`.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    keywords: &'a [&'a str],
}

/// The refresh endpoint answers 200 either way and reports the outcome in
/// the body.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    success: bool,
    #[serde(default)]
    message: String,
}

#[cfg(any(test, feature = "csr"))]
fn refresh_failed_message(status: u16) -> String {
    format!("뉴스 새로고침에 실패했습니다. ({status})")
}

/// Server message on success, user-facing error otherwise.
#[cfg(any(test, feature = "csr"))]
fn parse_refresh(body: &str) -> Result<String, String> {
    let resp: RefreshResponse =
        serde_json::from_str(body).map_err(|e| format!("뉴스 새로고침 응답을 읽을 수 없습니다. ({e})"))?;
    match (resp.success, resp.message.is_empty()) {
        (true, _) => Ok(resp.message),
        (false, true) => Err("뉴스 새로고침에 실패했습니다.".to_owned()),
        (false, false) => Err(resp.message),
    }
}

/// Availability lookup against the account endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAvailability;

#[async_trait::async_trait(?Send)]
impl UsernameAvailability for HttpAvailability {
    async fn check_username_available(&self, username: &str) -> Result<bool, AvailabilityError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};
            use gloo_timers::future::TimeoutFuture;

            let url = check_username_endpoint(username);
            let request = Box::pin(gloo_net::http::Request::get(&url).send());
            let resp = match select(request, Box::pin(TimeoutFuture::new(AVAILABILITY_TIMEOUT_MS))).await {
                Either::Left((sent, _)) => sent.map_err(|e| AvailabilityError::Request(e.to_string()))?,
                Either::Right(((), _)) => return Err(AvailabilityError::Request("timed out".to_owned())),
            };
            if !resp.ok() {
                return Err(AvailabilityError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| AvailabilityError::Decode(e.to_string()))?;
            parse_availability(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = username;
            Err(AvailabilityError::Request("not available outside the browser".to_owned()))
        }
    }
}

/// Ask the server to re-crawl news via `POST /news/refresh/` with a JSON
/// keyword list. The CSRF token is forwarded in the header Django expects.
///
/// # Errors
///
/// Returns a user-facing message when the request fails, the status is not
/// OK, or the body reports `success: false`.
pub async fn refresh_news(csrf_token: &str) -> Result<String, String> {
    #[cfg(feature = "csr")]
    {
        let body = RefreshRequest { keywords: REFRESH_KEYWORDS };
        let resp = gloo_net::http::Request::post(NEWS_REFRESH_PATH)
            .header("X-CSRFToken", csrf_token)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(refresh_failed_message(resp.status()));
        }
        let text = resp.text().await.map_err(|e| e.to_string())?;
        parse_refresh(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = csrf_token;
        Err("not available outside the browser".to_owned())
    }
}
