// ABOUTME: Profile linking service - seat allocation and lifecycle logic
// ABOUTME: Link, unlink, and list operations over the document store boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Profile linking service
//!
//! Allocates one [`Profile`] seat per (account, client) pair: validates that
//! the account has free capacity and the pair is not already linked, assigns
//! a collision-free PIN, snapshots the pro-rated seat price and the account's
//! expiration, and creates the profile. Unlink deletes unconditionally once
//! the profile is found; relinking is always delete + create since a
//! profile's account and client references never change.
//!
//! The service holds no mutable state of its own. The duplicate-link and
//! capacity checks are read-then-create without a transaction, so two
//! concurrent links near an account's limit can in principle both pass; the
//! store backend is the place to close that window (constraint or
//! serializable check-and-create) without touching this contract.

use crate::config::ServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    LinkOutcome, LinkRequest, LinkedClients, LinkedClientsMeta, NewProfile, Profile,
    ProfileFilter, ProfileStatus, UnlinkOutcome,
};
use crate::services::pin::generate_unique_pin;
use crate::store::DocumentStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};

/// Convert a store failure into the caller-facing taxonomy, logging the cause
fn store_error(operation: &'static str, err: anyhow::Error) -> AppError {
    error!(error = %err, operation, "document store call failed");
    AppError::database("Internal server error")
}

/// Protocol-agnostic linking operations over a [`DocumentStore`] backend
#[derive(Clone)]
pub struct LinkingService<S> {
    store: Arc<S>,
    config: ServiceConfig,
}

impl<S: DocumentStore> LinkingService<S> {
    /// Create a service over the given store backend
    pub fn new(store: Arc<S>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Link a client to an account by allocating a profile seat
    ///
    /// Returns the created profile (populated with its account and client)
    /// plus a confirmation message naming the client and the PIN used.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` when `account_id` or `client_id` is empty
    /// - `ResourceNotFound` when the account or client does not exist
    /// - `AlreadyLinked` when the pair already holds a profile
    /// - `CapacityExceeded` when the account is at its profile limit
    /// - `PinSpaceExhausted` when no free PIN was found within the budget
    /// - `DatabaseError` on any store failure
    pub async fn link(&self, request: LinkRequest) -> AppResult<LinkOutcome> {
        if request.account_id.trim().is_empty() {
            return Err(AppError::missing_field("account_id"));
        }
        if request.client_id.trim().is_empty() {
            return Err(AppError::missing_field("client_id"));
        }

        let account = self
            .store
            .find_account(&request.account_id)
            .await
            .map_err(|e| store_error("find_account", e))?
            .ok_or_else(|| AppError::not_found("account"))?;

        let client = self
            .store
            .find_client(&request.client_id)
            .await
            .map_err(|e| store_error("find_client", e))?
            .ok_or_else(|| AppError::not_found("client"))?;

        let existing_link = self
            .store
            .find_profiles(
                &ProfileFilter::by_link(&request.account_id, &request.client_id),
                false,
            )
            .await
            .map_err(|e| store_error("find_profiles", e))?;
        if !existing_link.is_empty() {
            return Err(AppError::already_linked());
        }

        let occupied = self
            .store
            .find_profiles(&ProfileFilter::by_account(&request.account_id), false)
            .await
            .map_err(|e| store_error("find_profiles", e))?;
        if occupied.len() >= account.max_profiles as usize {
            return Err(AppError::capacity_exceeded(account.max_profiles));
        }

        // A caller-supplied PIN is used verbatim, without a uniqueness
        // re-check; only generated PINs are checked against the store
        let pin = match request.pin {
            Some(pin) => pin,
            None => generate_unique_pin(self.store.as_ref(), self.config.pin_max_attempts).await?,
        };

        let individual_price = account.price / f64::from(account.max_profiles);
        let activation_date = Utc::now().date_naive();

        let profile = self
            .store
            .create_profile(
                NewProfile {
                    account_id: request.account_id,
                    client_id: request.client_id,
                    pin: pin.clone(),
                    profile_name: request
                        .profile_name
                        .unwrap_or_else(|| format!("Profile of {}", client.name)),
                    device_type: request
                        .device_type
                        .unwrap_or_else(|| self.config.default_device_type.clone()),
                    activation_date,
                    expiration_date: account.expiration_date,
                    individual_price,
                    status: ProfileStatus::Active,
                },
                true,
            )
            .await
            .map_err(|e| store_error("create_profile", e))?;

        info!(
            account_id = %profile.account_id,
            client_id = %profile.client_id,
            profile_id = %profile.id,
            "client linked to account"
        );

        let message = format!(
            "Client {} successfully linked to account with PIN: {pin}",
            client.name
        );
        Ok(LinkOutcome {
            data: profile,
            message,
        })
    }

    /// Unlink a client from an account by deleting the profile seat
    ///
    /// Deletion is unconditional once the profile is found: no status check,
    /// no soft delete, no cascade to the account or client.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` when `profile_id` is empty
    /// - `ResourceNotFound` when no profile carries the id
    /// - `DatabaseError` on any store failure
    pub async fn unlink(&self, profile_id: &str) -> AppResult<UnlinkOutcome> {
        if profile_id.trim().is_empty() {
            return Err(AppError::missing_field("profile_id"));
        }

        let profile = self
            .store
            .find_profile(profile_id, true)
            .await
            .map_err(|e| store_error("find_profile", e))?
            .ok_or_else(|| AppError::not_found("profile"))?;

        self.store
            .delete_profile(profile_id)
            .await
            .map_err(|e| store_error("delete_profile", e))?;

        info!(
            account_id = %profile.account_id,
            client_id = %profile.client_id,
            profile_id = %profile.id,
            "client unlinked from account"
        );

        let client_name = profile
            .client
            .as_ref()
            .map_or_else(|| profile.client_id.clone(), |c| c.name.clone());
        Ok(UnlinkOutcome {
            message: format!("Client {client_name} successfully unlinked from account"),
        })
    }

    /// List the profiles (with populated clients) linked to one account
    ///
    /// The account filter is pushed down to the store query; the result is
    /// the profiles on the requested account plus listing metadata.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` when `account_id` is empty
    /// - `DatabaseError` on any store failure
    pub async fn list_linked_clients(&self, account_id: &str) -> AppResult<LinkedClients> {
        if account_id.trim().is_empty() {
            return Err(AppError::missing_field("account_id"));
        }

        let profiles: Vec<Profile> = self
            .store
            .find_profiles(&ProfileFilter::by_account(account_id), true)
            .await
            .map_err(|e| store_error("find_profiles", e))?;

        Ok(LinkedClients {
            meta: LinkedClientsMeta {
                total: profiles.len(),
                account_id: account_id.to_owned(),
            },
            data: profiles,
        })
    }
}
