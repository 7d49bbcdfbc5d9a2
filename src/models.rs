// ABOUTME: Core data models for accounts, clients, and profiles
// ABOUTME: Defines the Profile seat entity plus request/response shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! # Data Models
//!
//! Core data structures for the profile linking service.
//!
//! A [`Profile`] is one allocated seat tying a [`Client`] to an [`Account`],
//! carrying its own PIN, device type, and pricing share. Accounts and clients
//! are owned by external systems and are read-only here.
//!
//! ## Snapshot semantics
//!
//! `individual_price` and `expiration_date` on a profile are snapshots taken
//! at link time. Later changes to the account's price or expiration do NOT
//! propagate to existing profiles. This is the intended contract (seat cost
//! is fixed at allocation time), not a caching artifact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A shared subscription account with a seat limit and a total price.
///
/// Owned externally; this core never mutates accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Document id
    pub id: String,
    /// Maximum number of profiles this account can hold (positive)
    pub max_profiles: u32,
    /// Total account cost, split evenly across seats at link time
    pub price: f64,
    /// Date the subscription runs out
    pub expiration_date: NaiveDate,
}

/// A customer eligible to hold a seat on an account.
///
/// Owned externally; this core never mutates clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Document id
    pub id: String,
    /// Display name
    pub name: String,
}

/// Lifecycle state of a profile
///
/// The linking core only ever sets `Active`; the other states exist so the
/// model round-trips records written by the wider system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// Seat is in use
    #[default]
    Active,
    /// Seat kept but switched off by the account holder
    Inactive,
    /// Seat administratively suspended (e.g. payment issues)
    Suspended,
}

/// One allocated seat linking a client to an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Document id, assigned by the store on creation
    pub id: String,
    /// Owning account reference; immutable after creation
    pub account_id: String,
    /// Seated client reference; immutable after creation
    pub client_id: String,
    /// 4-digit access code, unique across all profiles at assignment time
    pub pin: String,
    /// Display name for the seat
    pub profile_name: String,
    /// Device the seat is intended for
    pub device_type: String,
    /// Date the seat was allocated
    pub activation_date: NaiveDate,
    /// Snapshot of the account's expiration at link time
    pub expiration_date: NaiveDate,
    /// Snapshot of `account.price / account.max_profiles` at link time
    pub individual_price: f64,
    /// Lifecycle state
    pub status: ProfileStatus,
    /// Populated account relation, present when requested from the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    /// Populated client relation, present when requested from the store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Client>,
}

/// Field values for a profile about to be created.
///
/// The store assigns the document id and, when asked, populates the
/// account/client relations on the returned [`Profile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    /// Owning account reference
    pub account_id: String,
    /// Seated client reference
    pub client_id: String,
    /// 4-digit access code
    pub pin: String,
    /// Display name for the seat
    pub profile_name: String,
    /// Device the seat is intended for
    pub device_type: String,
    /// Date the seat was allocated
    pub activation_date: NaiveDate,
    /// Snapshot of the account's expiration
    pub expiration_date: NaiveDate,
    /// Snapshot of the per-seat price
    pub individual_price: f64,
    /// Lifecycle state
    pub status: ProfileStatus,
}

/// Exact-match filter over profiles; set fields are AND-combined
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFilter {
    /// Match profiles on this account
    pub account_id: Option<String>,
    /// Match profiles seating this client
    pub client_id: Option<String>,
    /// Match profiles carrying this PIN
    pub pin: Option<String>,
}

impl ProfileFilter {
    /// Filter by owning account
    #[must_use]
    pub fn by_account(account_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }

    /// Filter by the (account, client) link pair
    #[must_use]
    pub fn by_link(account_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            client_id: Some(client_id.into()),
            pin: None,
        }
    }

    /// Filter by PIN
    #[must_use]
    pub fn by_pin(pin: impl Into<String>) -> Self {
        Self {
            pin: Some(pin.into()),
            ..Self::default()
        }
    }

    /// Whether the given profile matches every set field
    #[must_use]
    pub fn matches(&self, profile: &Profile) -> bool {
        self.account_id
            .as_ref()
            .is_none_or(|id| *id == profile.account_id)
            && self
                .client_id
                .as_ref()
                .is_none_or(|id| *id == profile.client_id)
            && self.pin.as_ref().is_none_or(|pin| *pin == profile.pin)
    }
}

/// Request body for the link operation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkRequest {
    /// Target account (required)
    pub account_id: String,
    /// Client to seat (required)
    pub client_id: String,
    /// Optional display name; defaults to `"Profile of <client.name>"`
    #[serde(default)]
    pub profile_name: Option<String>,
    /// Optional caller-supplied PIN, used verbatim when present
    #[serde(default)]
    pub pin: Option<String>,
    /// Optional device type; defaults from configuration (`"TV"`)
    #[serde(default)]
    pub device_type: Option<String>,
}

/// Successful link result: the created profile plus a confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct LinkOutcome {
    /// The created profile, populated with its account and client
    pub data: Profile,
    /// Human-readable confirmation naming the client and the PIN used
    pub message: String,
}

/// Successful unlink result
#[derive(Debug, Clone, Serialize)]
pub struct UnlinkOutcome {
    /// Human-readable confirmation naming the unlinked client
    pub message: String,
}

/// Profiles linked to one account, with listing metadata
#[derive(Debug, Clone, Serialize)]
pub struct LinkedClients {
    /// Profiles on the requested account, populated with client and account
    pub data: Vec<Profile>,
    /// Listing metadata
    pub meta: LinkedClientsMeta,
}

/// Metadata accompanying a linked-clients listing
#[derive(Debug, Clone, Serialize)]
pub struct LinkedClientsMeta {
    /// Number of profiles returned
    pub total: usize,
    /// The account the listing was requested for
    pub account_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            id: "p1".to_owned(),
            account_id: "A1".to_owned(),
            client_id: "C1".to_owned(),
            pin: "1234".to_owned(),
            profile_name: "Profile of Ana".to_owned(),
            device_type: "TV".to_owned(),
            activation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            individual_price: 10.0,
            status: ProfileStatus::Active,
            account: None,
            client: None,
        }
    }

    #[test]
    fn test_filter_matches_on_set_fields_only() {
        let profile = sample_profile();

        assert!(ProfileFilter::default().matches(&profile));
        assert!(ProfileFilter::by_account("A1").matches(&profile));
        assert!(ProfileFilter::by_link("A1", "C1").matches(&profile));
        assert!(ProfileFilter::by_pin("1234").matches(&profile));

        assert!(!ProfileFilter::by_account("A2").matches(&profile));
        assert!(!ProfileFilter::by_link("A1", "C2").matches(&profile));
        assert!(!ProfileFilter::by_pin("9999").matches(&profile));
    }

    #[test]
    fn test_profile_serialization_skips_absent_relations() {
        let profile = sample_profile();
        let json = serde_json::to_string(&profile).unwrap();

        assert!(!json.contains("\"account\""));
        assert!(!json.contains("\"client\""));
        assert!(json.contains("\"status\":\"active\""));
    }

    #[test]
    fn test_link_request_optional_fields_default() {
        let request: LinkRequest =
            serde_json::from_str(r#"{"account_id":"A1","client_id":"C1"}"#).unwrap();

        assert_eq!(request.account_id, "A1");
        assert!(request.profile_name.is_none());
        assert!(request.pin.is_none());
        assert!(request.device_type.is_none());
    }
}
