use crate::config::{TransportConfig, DEFAULT_CONTENT_TYPE};
use crate::core::observer::TracingObserver;
use crate::domain::model::Download;
use crate::domain::ports::{Transport, TransportObserver};
use crate::domain::request::{ApiRequest, HttpMethod, Payload, ResponseKind};
use crate::utils::error::{DeskError, Result, TransportError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;

/// reqwest 實作的傳輸層：固定 base path、預設標頭、單一逾時、無重試
pub struct HttpTransport {
    client: Client,
    config: TransportConfig,
    observer: Arc<dyn TransportObserver>,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self> {
        let headers = build_default_headers(&config)?;

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| DeskError::ConfigError {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            config,
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn TransportObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        path: &str,
    ) -> std::result::Result<(u16, Payload), TransportError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);

        let mut builder = self.client.request(to_reqwest_method(request.method), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| classify(path, e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await;
            return Err(status_failure(path, status, body));
        }

        let payload = match request.response_kind {
            ResponseKind::Structured => {
                let bytes = response.bytes().await.map_err(|e| classify(path, e))?;
                Payload::Structured(bytes.to_vec())
            }
            ResponseKind::Binary => {
                let content_type = header_string(response.headers(), &CONTENT_TYPE);
                let filename = header_string(response.headers(), &CONTENT_DISPOSITION)
                    .and_then(|value| disposition_filename(&value));
                let bytes = response.bytes().await.map_err(|e| classify(path, e))?;
                Payload::Binary(Download {
                    bytes: bytes.to_vec(),
                    content_type,
                    filename,
                })
            }
        };

        Ok((status.as_u16(), payload))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<Payload, TransportError> {
        let path = request.resolved_path(&self.config.base_path);
        self.observer.on_request(request.method, &path);

        let outcome = self.dispatch(&request, &path).await;

        match &outcome {
            Ok((status, _)) => self.observer.on_response(&path, Some(*status), None),
            Err(err) => self
                .observer
                .on_response(&path, err.status(), Some(&err.message())),
        }

        outcome.map(|(_, payload)| payload)
    }
}

fn build_default_headers(config: &TransportConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    for (name, value) in &config.headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| DeskError::InvalidConfigValueError {
                field: "transport.headers".to_string(),
                value: name.clone(),
                reason: format!("Invalid header name: {}", e),
            })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|e| DeskError::InvalidConfigValueError {
                field: format!("transport.headers.{}", name),
                value: "<redacted>".to_string(),
                reason: format!("Invalid header value: {}", e),
            })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

fn classify(path: &str, err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            path: path.to_string(),
        }
    } else {
        TransportError::Network {
            path: path.to_string(),
            message: err.to_string(),
        }
    }
}

/// 狀態碼一定保留；錯誤內容讀不到時在訊息中註明
fn status_failure<E: std::fmt::Display>(
    path: &str,
    status: StatusCode,
    body: std::result::Result<String, E>,
) -> TransportError {
    let message = match body {
        Ok(body) => status_message(status, &body),
        Err(e) => format!(
            "{} (error body unreadable: {})",
            status_message(status, ""),
            e
        ),
    };
    TransportError::Status {
        path: path.to_string(),
        status: status.as_u16(),
        message,
    }
}

/// 後端錯誤格式為 {"detail": "..."}；沒有時退回原始內容或狀態說明
fn status_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        match value.get("detail") {
            Some(serde_json::Value::String(detail)) => return detail.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

fn header_string(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn disposition_filename(value: &str) -> Option<String> {
    value
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}
