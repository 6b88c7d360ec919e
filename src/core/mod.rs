//! Core components of the `quandl-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`QdClient`] and its builder.
//! - The provider-fault type [`QdError`] and the [`OperationResult`] envelope.
//! - Shared data models like [`DataSource`] and [`PagingOptions`].
//! - Internal networking and transport-failure policy.

/// The main client (`QdClient`), builder, and configuration.
pub mod client;
/// The provider-fault type (`QdError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;
/// Transport helpers and the per-operation transport-failure policy.
pub mod net;
/// The outcome envelope returned by every operation.
pub mod outcome;
/// Service trait abstracting the four provider operations.
pub mod services;

// convenient re-exports so most code can just `use crate::core::QdClient`
pub use client::{QdClient, QdClientBuilder};
pub use error::QdError;
pub use models::{DataSource, PagingOptions};
pub use net::TransportPolicy;
pub use outcome::{CATALOG_UNAVAILABLE, NO_DATA_FOUND, NO_MARKET_DATA, OperationResult};
pub use services::QuandlProvider;
