// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides store seeding, service construction, and logging helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

#![allow(dead_code)]

//! Shared test utilities for `seatlink`
//!
//! Common setup functions to reduce duplication across integration tests.

use chrono::NaiveDate;
use seatlink::config::ServiceConfig;
use seatlink::models::{Account, Client, LinkRequest};
use seatlink::services::LinkingService;
use seatlink::store::MemoryStore;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test store setup
pub fn create_test_store() -> Arc<MemoryStore> {
    init_test_logging();
    Arc::new(MemoryStore::new())
}

/// Service over the given store with default configuration
pub fn create_test_service(store: Arc<MemoryStore>) -> LinkingService<MemoryStore> {
    LinkingService::new(store, ServiceConfig::default())
}

/// Account fixture
pub fn account(id: &str, max_profiles: u32, price: f64, expiration: (i32, u32, u32)) -> Account {
    Account {
        id: id.to_owned(),
        max_profiles,
        price,
        expiration_date: NaiveDate::from_ymd_opt(expiration.0, expiration.1, expiration.2)
            .unwrap(),
    }
}

/// Client fixture
pub fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.to_owned(),
        name: name.to_owned(),
    }
}

/// Minimal link request for the given pair
pub fn link_request(account_id: &str, client_id: &str) -> LinkRequest {
    LinkRequest {
        account_id: account_id.to_owned(),
        client_id: client_id.to_owned(),
        ..LinkRequest::default()
    }
}

/// Seed the reference scenario: account A1 (4 seats, price 40, expires
/// 2025-12-31) and client C1 "Ana"
pub async fn seed_reference_scenario(store: &MemoryStore) {
    store
        .insert_account(account("A1", 4, 40.0, (2025, 12, 31)))
        .await;
    store.insert_client(client("C1", "Ana")).await;
}
