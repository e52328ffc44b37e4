//! Core building blocks for the `risk_poc` ClickHouse inspection tool.
//!
//! This crate provides the configuration, error, and logging foundation
//! together with the ClickHouse adapter, table enumeration, and console
//! report rendering used by the CLI binary.
//!
//! # Architecture
//! - `config`: immutable connection parameters with validation
//! - `adapters`: object-safe client trait plus the ClickHouse session
//! - `enumeration`: `SHOW TABLES` metadata queries over the trait
//! - `report`: sink-injected console rendering
//!
//! Credentials are never logged or included in error messages.

pub mod adapters;
pub mod config;
pub mod enumeration;
pub mod error;
pub mod logging;
pub mod report;

// Re-export commonly used types
pub use adapters::{ClickHouseAdapter, DatabaseClient};
pub use config::ConnectionConfig;
pub use error::{Result, RiskPocError};
pub use logging::init_logging;
