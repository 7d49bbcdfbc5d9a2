// ABOUTME: Unique PIN allocation for newly linked profiles
// ABOUTME: Draws random 4-digit candidates and checks them against the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Unique PIN allocation
//!
//! Candidates are independent uniform draws from `[1000, 9999]`, each checked
//! against the store before acceptance. The retry loop is bounded: after
//! `max_attempts` clashing candidates the allocation fails rather than
//! spinning forever in a nearly-exhausted PIN space. Two concurrent
//! allocations can still race between check and create; closing that window
//! is the store layer's job (unique index on `pin`).

use crate::errors::{AppError, AppResult};
use crate::models::ProfileFilter;
use crate::store::DocumentStore;
use rand::Rng;

/// Lowest value in the 4-digit PIN space
const PIN_MIN: u32 = 1000;
/// Highest value in the 4-digit PIN space
const PIN_MAX: u32 = 9999;

/// Allocate a PIN no existing profile carries
///
/// # Errors
///
/// Returns [`crate::errors::ErrorCode::PinSpaceExhausted`] when `max_attempts`
/// candidates all clashed, or a database error when a store query fails.
pub async fn generate_unique_pin<S>(store: &S, max_attempts: u32) -> AppResult<String>
where
    S: DocumentStore + ?Sized,
{
    for _ in 0..max_attempts {
        // ThreadRng is not Send; draw before the await point
        let candidate = rand::thread_rng().gen_range(PIN_MIN..=PIN_MAX).to_string();

        let clashes = store
            .find_profiles(&ProfileFilter::by_pin(&candidate), false)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "PIN uniqueness query failed");
                AppError::database("Internal server error")
            })?;

        if clashes.is_empty() {
            return Ok(candidate);
        }
    }

    tracing::warn!(max_attempts, "PIN generation exhausted its attempt budget");
    Err(AppError::pin_space_exhausted(max_attempts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::{Account, Client, NewProfile, Profile, ProfileStatus};
    use crate::store::MemoryStore;
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    /// Store stub whose PIN space is fully occupied
    struct SaturatedStore;

    #[async_trait]
    impl DocumentStore for SaturatedStore {
        async fn find_account(&self, _: &str) -> Result<Option<Account>> {
            Ok(None)
        }

        async fn find_client(&self, _: &str) -> Result<Option<Client>> {
            Ok(None)
        }

        async fn find_profile(&self, _: &str, _: bool) -> Result<Option<Profile>> {
            Ok(None)
        }

        async fn find_profiles(&self, filter: &ProfileFilter, _: bool) -> Result<Vec<Profile>> {
            // Every candidate PIN reads as taken
            Ok(vec![Profile {
                id: "occupied".to_owned(),
                account_id: "A1".to_owned(),
                client_id: "C1".to_owned(),
                pin: filter.pin.clone().unwrap_or_default(),
                profile_name: "Occupied".to_owned(),
                device_type: "TV".to_owned(),
                activation_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
                individual_price: 1.0,
                status: ProfileStatus::Active,
                account: None,
                client: None,
            }])
        }

        async fn create_profile(&self, _: NewProfile, _: bool) -> Result<Profile> {
            anyhow::bail!("read-only stub")
        }

        async fn delete_profile(&self, _: &str) -> Result<()> {
            anyhow::bail!("read-only stub")
        }
    }

    #[tokio::test]
    async fn test_generated_pin_is_four_digits() {
        let store = MemoryStore::new();
        let pin = generate_unique_pin(&store, 100).await.unwrap();

        assert_eq!(pin.len(), 4);
        let value: u32 = pin.parse().unwrap();
        assert!((1000..=9999).contains(&value));
    }

    #[tokio::test]
    async fn test_exhaustion_after_attempt_budget() {
        let error = generate_unique_pin(&SaturatedStore, 5).await.unwrap_err();

        assert_eq!(error.code, ErrorCode::PinSpaceExhausted);
        assert!(error.message.contains('5'));
    }
}
