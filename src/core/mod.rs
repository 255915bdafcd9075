pub mod observer;
pub mod transport;

pub use crate::domain::ports::{Transport, TransportObserver};
pub use crate::utils::error::Result;
