//! Core library for the `numbeo` CLI.
//!
//! This crate defines:
//! - The typed data model for the Numbeo city prices payload
//! - The API client (request building, status handling, deserialization)
//! - API-key resolution (CLI override, environment, config file)
//! - The console report formatter
//!
//! It is used by `numbeo-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use client::NumbeoClient;
pub use config::{FileConfig, resolve_api_key};
pub use error::{ConfigError, FetchError};
pub use model::{CityPricesResult, PriceItem, PriceQuery};
pub use report::format_report;
