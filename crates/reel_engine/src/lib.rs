//! Reel engine: OMDb gateway, debounce timer and effect execution.
mod config;
mod engine;
mod gateway;
mod timer;
mod wire;

pub use config::{
    ConfigError, GatewayConfig, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_PROXY_MODE,
};
pub use engine::{EngineError, EngineEvent, EngineHandle};
pub use gateway::{GatewayError, MovieGateway, OmdbGateway};
pub use timer::{Debouncer, ScopedTimer};
pub use wire::{available, NOT_AVAILABLE};
