//! REST API Client
//!
//! Thin typed wrappers over the backend HTTP contract, organized by
//! domain. Every operation is a single request: no batching, no retry,
//! no caching, no cancellation of in-flight calls. Session credentials
//! ride on a cookie, so every request includes credentials.

pub mod auth;
pub mod item;
pub mod tier;
pub mod tierlist;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config;

fn get(path: &str) -> RequestBuilder {
    Request::get(&config::api_url(path)).credentials(RequestCredentials::Include)
}

fn post(path: &str) -> RequestBuilder {
    Request::post(&config::api_url(path)).credentials(RequestCredentials::Include)
}

fn patch(path: &str) -> RequestBuilder {
    Request::patch(&config::api_url(path)).credentials(RequestCredentials::Include)
}

fn delete(path: &str) -> RequestBuilder {
    Request::delete(&config::api_url(path)).credentials(RequestCredentials::Include)
}

/// Decode a JSON response, mapping non-2xx statuses to an error string.
async fn read_json<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T, String> {
    if !resp.ok() {
        return Err(format!("{what} failed: HTTP {}", resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Check a response where only the status matters.
fn read_status(resp: &Response, what: &str) -> Result<(), String> {
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("{what} failed: HTTP {}", resp.status()))
    }
}
