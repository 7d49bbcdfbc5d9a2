// ABOUTME: Library entry point for the seatlink profile linking service
// ABOUTME: Links clients to shared subscription accounts through profile seats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

#![deny(unsafe_code)]

//! # Seatlink
//!
//! Profile linking service for shared subscription accounts. A **profile**
//! is one seat on an account, tying a client to it with its own PIN, device
//! type, and pro-rated share of the account price.
//!
//! The crate is the allocation and lifecycle core only: it validates account
//! capacity, prevents duplicate links, allocates collision-free PINs, and
//! snapshots pricing and expiration at link time. Persistence and transport
//! are external collaborators - the service consumes the generic
//! [`store::DocumentStore`] trait and exposes plain async operations for a
//! routing layer to wrap.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use seatlink::config::ServiceConfig;
//! use seatlink::models::LinkRequest;
//! use seatlink::services::LinkingService;
//! use seatlink::store::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     let service = LinkingService::new(store, ServiceConfig::from_env()?);
//!
//!     let outcome = service
//!         .link(LinkRequest {
//!             account_id: "A1".to_owned(),
//!             client_id: "C1".to_owned(),
//!             ..LinkRequest::default()
//!         })
//!         .await?;
//!     println!("{}", outcome.message);
//!     Ok(())
//! }
//! ```

/// Environment-based runtime configuration
pub mod config;

/// Unified error handling with standard error codes and HTTP status mapping
pub mod errors;

/// Structured logging setup built on `tracing`
pub mod logging;

/// Core data models: accounts, clients, profiles, and operation shapes
pub mod models;

/// Domain service layer: link, unlink, list linked clients
pub mod services;

/// Document store abstraction and the in-memory reference backend
pub mod store;
