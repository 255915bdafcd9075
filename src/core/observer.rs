use crate::domain::ports::TransportObserver;
use crate::domain::request::HttpMethod;

/// 預設觀察者：把每個請求與回應寫入 tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TransportObserver for TracingObserver {
    fn on_request(&self, method: HttpMethod, path: &str) {
        tracing::debug!("API Request: {} {}", method, path);
    }

    fn on_response(&self, path: &str, status: Option<u16>, error: Option<&str>) {
        match error {
            None => tracing::debug!("API Response: {} {}", path, status.unwrap_or_default()),
            Some(message) => tracing::warn!(
                "⚠️ API Response Error: {} {:?} {}",
                path,
                status,
                message
            ),
        }
    }
}
