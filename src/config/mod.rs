//! Configuration module for confidence estimation
//!
//! Holds the configuration bundle handed to the estimator factory and the
//! file loader that produces it.

pub mod config;

pub use config::{ConfidenceConfig, ConfigError, ConfigLoader, CONFIDENCE_METHOD_KEY};
