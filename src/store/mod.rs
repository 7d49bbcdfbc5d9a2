// ABOUTME: Document store abstraction consumed by the linking service
// ABOUTME: Trait over account/client/profile lookup, creation, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Document store abstraction layer
//!
//! The linking service talks to persistence only through [`DocumentStore`].
//! Backends return `anyhow::Result`; the service layer converts failures to
//! the public error taxonomy at the operation boundary. Nothing here enforces
//! capacity or PIN uniqueness invariants; a backend MAY add storage-level
//! constraints (unique index on `pin`, serializable check-and-create) without
//! changing this contract, which is how the known check-then-act races on
//! capacity and PIN allocation are meant to be closed.

use crate::models::{Account, Client, NewProfile, Profile, ProfileFilter};
use anyhow::Result;
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryStore;

/// Core document store trait
///
/// All backends implement this trait to provide a consistent interface to
/// the service layer. Filters are exact-match per field and AND-combined.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up an account by document id
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>>;

    /// Look up a client by document id
    async fn find_client(&self, client_id: &str) -> Result<Option<Client>>;

    /// Look up a profile by document id, optionally populating relations
    async fn find_profile(&self, profile_id: &str, populate: bool) -> Result<Option<Profile>>;

    /// Fetch all profiles matching the filter, optionally populating relations
    async fn find_profiles(&self, filter: &ProfileFilter, populate: bool) -> Result<Vec<Profile>>;

    /// Create a profile, returning the stored record with its assigned id
    async fn create_profile(&self, data: NewProfile, populate: bool) -> Result<Profile>;

    /// Delete a profile by document id
    async fn delete_profile(&self, profile_id: &str) -> Result<()>;
}
