#![allow(dead_code)]

use async_trait::async_trait;
use motel_desk::domain::request::{ApiRequest, HttpMethod, Payload};
use motel_desk::{Transport, TransportError, TransportObserver};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Captures every request and answers from a queue of canned outcomes.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<Payload, TransportError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json(&self, value: serde_json::Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Payload::json(&value)));
        self
    }

    pub fn respond(&self, payload: Payload) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(payload));
        self
    }

    pub fn fail_with(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Payload, TransportError> {
        let path = request.resolved_path("/api");
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Network {
                path,
                message: "no canned response".to_string(),
            }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    Request {
        method: HttpMethod,
        path: String,
    },
    Response {
        path: String,
        status: Option<u16>,
        error: Option<String>,
    },
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TransportObserver for RecordingObserver {
    fn on_request(&self, method: HttpMethod, path: &str) {
        self.events.lock().unwrap().push(ObservedEvent::Request {
            method,
            path: path.to_string(),
        });
    }

    fn on_response(&self, path: &str, status: Option<u16>, error: Option<&str>) {
        self.events.lock().unwrap().push(ObservedEvent::Response {
            path: path.to_string(),
            status,
            error: error.map(str::to_string),
        });
    }
}

pub fn reservation_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "customer_id": "c-1",
        "room_id": "12",
        "platform_id": "p-1",
        "check_in": "2024-06-01",
        "check_out": "2024-06-03",
        "guests": 2,
        "total_price": 180.0,
        "status": status,
        "booking_reference": format!("REF-{}", id),
        "notes": null,
        "created_at": "2024-05-20"
    })
}

pub fn room_json(id: &str, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "room_number": format!("1{:0>2}", id),
        "room_type": "Standard",
        "max_guests": 2,
        "price_per_night": 90.0,
        "status": status
    })
}

pub fn note_json(id: &str, room_id: &str, note_type: &str, progress: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "room_id": room_id,
        "admin_id": "a-1",
        "note_type": note_type,
        "title": "Check minibar",
        "description": "Guest reported a leak",
        "status": "pending",
        "created_at": "2024-06-01 10:00:00",
        "completed_at": null,
        "reservation_id": null,
        "progress": progress
    })
}
