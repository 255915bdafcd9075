use thiserror::Error;

/// 傳輸層失敗，永遠帶著解析後的請求路徑
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request to {path} timed out")]
    Timeout { path: String },

    #[error("Network failure for {path}: {message}")]
    Network { path: String, message: String },

    #[error("Backend rejected {path} with status {status}: {message}")]
    Status {
        path: String,
        status: u16,
        message: String,
    },
}

impl TransportError {
    pub fn path(&self) -> &str {
        match self {
            Self::Timeout { path } | Self::Network { path, .. } | Self::Status { path, .. } => path,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Timeout { .. } => "request timed out".to_string(),
            Self::Network { message, .. } | Self::Status { message, .. } => message.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum DeskError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected payload from {path}: expected {expected}")]
    UnexpectedPayload { path: String, expected: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

/// 給視圖層使用的粗分類，不會改變錯誤本身
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    TimedOut,
    NoConnection,
    Rejected,
    Malformed,
    Configuration,
    LocalIo,
}

impl FailureKind {
    /// CLI 結束碼：設定 1、遠端失敗 2、本機檔案 3
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration => 1,
            Self::TimedOut | Self::NoConnection | Self::Rejected | Self::Malformed => 2,
            Self::LocalIo => 3,
        }
    }
}

impl DeskError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(TransportError::Timeout { .. }) => FailureKind::TimedOut,
            Self::Transport(TransportError::Network { .. }) => FailureKind::NoConnection,
            Self::Transport(TransportError::Status { .. }) => FailureKind::Rejected,
            Self::Decode { .. } | Self::Encode { .. } | Self::UnexpectedPayload { .. } => {
                FailureKind::Malformed
            }
            Self::IoError(_) => FailureKind::LocalIo,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => FailureKind::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Transport(TransportError::Timeout { path }) => {
                format!("The server did not answer in time ({})", path)
            }
            Self::Transport(TransportError::Network { message, .. }) => {
                format!("No connection to the server: {}", message)
            }
            Self::Transport(TransportError::Status {
                status, message, ..
            }) => format!("Rejected by server ({}): {}", status, message),
            Self::Decode { path, .. } | Self::UnexpectedPayload { path, .. } => {
                format!("The server sent a response we could not read ({})", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
