//! Client-side request state shared by the native client and the UI hooks.
//!
//! Every operation moves through the same lifecycle:
//!
//! - Idle: not loading, no error.
//! - Pending: loading, error cleared, previous data kept.
//! - Settled: not loading, with either fresh data or an error. A failure
//!   leaves the previous data in place.
//!
//! There is no cancelled state. Overlapping requests are not queued, so
//! whichever response arrives last decides the final state.

use reqwest::StatusCode;

use crate::ClientError;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Distinguishes between data that has not yet been fetched and data that
/// has been fetched (which may be empty).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}

/// A failed request, in a form that can be cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    /// Set when the backend answered with a non-success status.
    pub status: Option<StatusCode>,
    pub message: String,
}

impl RequestError {
    pub fn new(
        status: Option<StatusCode>,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };
        Self { status, message }
    }

    pub fn unknown() -> Self {
        Self::new(None, UNKNOWN_ERROR)
    }
}

impl From<ClientError> for RequestError {
    fn from(e: ClientError) -> Self {
        Self::new(e.status(), e.to_string())
    }
}

/// The (data, is_loading, error) triple tracked per operation.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<RequestError>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> RequestState<T> {
    /// Enter the pending state. Previous data stays visible while loading.
    pub fn start(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self, data: T) {
        self.data = FetchState::Fetched(data);
        self.is_loading = false;
        self.error = None;
    }

    /// Record a failure without touching previously fetched data.
    pub fn fail(&mut self, error: RequestError) {
        self.is_loading = false;
        self.error = Some(error);
    }

    /// Apply the outcome of a request.
    pub fn settle(&mut self, result: Result<T, RequestError>) {
        match result {
            Ok(data) => self.succeed(data),
            Err(e) => self.fail(e),
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading && (self.data.is_fetched() || self.error.is_some())
    }

    /// True while the first request is in flight and nothing has arrived.
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
