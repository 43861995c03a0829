//! Yew hooks for the album pages.
//!
//! Each hook wraps one backend route and exposes a
//! [`RequestState`](payloads::RequestState) for the component that mounted
//! it. Hooks never share state with each other.

pub mod hooks;
pub mod logs;

use payloads::APIClient;

pub use hooks::*;
pub use logs::init_logging;

/// API client for the album backend.
///
/// The address comes from `BACKEND_URL` at build time, falling back to the
/// origin the page was served from.
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default()
        });

    APIClient::new(address)
}
