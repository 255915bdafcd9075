// Domain layer: entity model, request envelopes and ports (interfaces).
// No HTTP client types leak in here; adapters live under core.

pub mod model;
pub mod ports;
pub mod request;
