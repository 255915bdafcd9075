use crate::domain::request::{ApiRequest, HttpMethod, Payload};
use crate::utils::error::TransportError;
use async_trait::async_trait;

/// Dispatches one request and returns the raw payload. A single attempt per
/// call: no retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> std::result::Result<Payload, TransportError>;
}

/// Observation hooks around every dispatch. They see borrowed data only and
/// cannot change the request or the outcome.
pub trait TransportObserver: Send + Sync {
    fn on_request(&self, method: HttpMethod, path: &str);

    fn on_response(&self, path: &str, status: Option<u16>, error: Option<&str>);
}
