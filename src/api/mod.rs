//! Domain facade over the property-management backend.
//!
//! Every operation builds an [`ApiRequest`], hands it to the [`Transport`] and
//! decodes the answer into a typed value. Nothing is cached or retried here;
//! each call is independent, and duplicate calls (a second check-in, say) are
//! forwarded as-is.

mod admins;
mod calendar;
mod checkinout;
mod cleaning;
mod customers;
mod dashboard;
mod reports;
mod reservations;
mod revenue;
mod room_notes;
mod rooms;

pub use checkinout::DEFAULT_UPCOMING_DAYS;

use crate::config::TransportConfig;
use crate::core::transport::HttpTransport;
use crate::domain::model::Download;
use crate::domain::ports::Transport;
use crate::domain::request::{ApiRequest, Payload};
use crate::utils::error::{DeskError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub struct PropertyApi<T: Transport> {
    transport: T,
}

impl PropertyApi<HttpTransport> {
    /// Facade backed by the reqwest transport.
    pub fn connect(config: TransportConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> PropertyApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let path = request.path_and_query();
        match self.transport.send(request).await? {
            Payload::Structured(bytes) => {
                let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
                serde_json::from_slice(body).map_err(|source| DeskError::Decode { path, source })
            }
            Payload::Binary(_) => Err(DeskError::UnexpectedPayload {
                path,
                expected: "structured JSON",
            }),
        }
    }

    async fn download(&self, request: ApiRequest) -> Result<Download> {
        let path = request.path_and_query();
        match self.transport.send(request.binary()).await? {
            Payload::Binary(download) => Ok(download),
            Payload::Structured(_) => Err(DeskError::UnexpectedPayload {
                path,
                expected: "binary download",
            }),
        }
    }
}

fn with_body<B: Serialize>(request: ApiRequest, body: &B) -> Result<ApiRequest> {
    let path = request.path_and_query();
    request
        .json(body)
        .map_err(|source| DeskError::Encode { path, source })
}
