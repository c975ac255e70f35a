//! Shared utilities for the rBridge swap core.

pub mod logging;

pub use logging::{init_logging, try_init_logging, LogFormat};
