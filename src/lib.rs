pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use api::PropertyApi;
pub use config::{toml_config::DeskConfig, TransportConfig};
pub use core::{observer::TracingObserver, transport::HttpTransport};
pub use domain::ports::{Transport, TransportObserver};
pub use utils::error::{DeskError, Result, TransportError};
