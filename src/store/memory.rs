// ABOUTME: In-memory document store backend over tokio RwLock-guarded maps
// ABOUTME: Reference backend for tests and embedding; not a persistence engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! In-memory [`DocumentStore`] backend.
//!
//! Uses `Arc<RwLock<..>>` for shared state so clones of the store observe the
//! same documents, mirroring how a real backend would behave behind a
//! connection pool. Profile ids are uuid v4. Like the trait contract, this
//! backend adds no uniqueness constraints of its own.

use super::DocumentStore;
use crate::models::{Account, Client, NewProfile, Profile, ProfileFilter};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct StoreInner {
    accounts: HashMap<String, Account>,
    clients: HashMap<String, Client>,
    profiles: HashMap<String, Profile>,
}

/// In-memory store for tests and embedded use
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or replace an account document
    pub async fn insert_account(&self, account: Account) {
        let mut inner = self.inner.write().await;
        inner.accounts.insert(account.id.clone(), account);
    }

    /// Seed or replace a client document
    pub async fn insert_client(&self, client: Client) {
        let mut inner = self.inner.write().await;
        inner.clients.insert(client.id.clone(), client);
    }

    /// Number of stored profiles, across all accounts
    pub async fn profile_count(&self) -> usize {
        self.inner.read().await.profiles.len()
    }

    fn populate_relations(inner: &StoreInner, profile: &mut Profile) {
        profile.account = inner.accounts.get(&profile.account_id).cloned();
        profile.client = inner.clients.get(&profile.client_id).cloned();
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_account(&self, account_id: &str) -> Result<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.get(account_id).cloned())
    }

    async fn find_client(&self, client_id: &str) -> Result<Option<Client>> {
        let inner = self.inner.read().await;
        Ok(inner.clients.get(client_id).cloned())
    }

    async fn find_profile(&self, profile_id: &str, populate: bool) -> Result<Option<Profile>> {
        let inner = self.inner.read().await;
        let mut found = inner.profiles.get(profile_id).cloned();
        if populate {
            if let Some(profile) = found.as_mut() {
                Self::populate_relations(&inner, profile);
            }
        }
        Ok(found)
    }

    async fn find_profiles(&self, filter: &ProfileFilter, populate: bool) -> Result<Vec<Profile>> {
        let inner = self.inner.read().await;
        let mut matches: Vec<Profile> = inner
            .profiles
            .values()
            .filter(|profile| filter.matches(profile))
            .cloned()
            .collect();
        if populate {
            for profile in &mut matches {
                Self::populate_relations(&inner, profile);
            }
        }
        // HashMap iteration order is arbitrary; keep listings stable
        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }

    async fn create_profile(&self, data: NewProfile, populate: bool) -> Result<Profile> {
        let mut inner = self.inner.write().await;
        let mut profile = Profile {
            id: Uuid::new_v4().to_string(),
            account_id: data.account_id,
            client_id: data.client_id,
            pin: data.pin,
            profile_name: data.profile_name,
            device_type: data.device_type,
            activation_date: data.activation_date,
            expiration_date: data.expiration_date,
            individual_price: data.individual_price,
            status: data.status,
            account: None,
            client: None,
        };
        // The stored copy keeps relations unset; population is per-read
        inner.profiles.insert(profile.id.clone(), profile.clone());
        if populate {
            Self::populate_relations(&inner, &mut profile);
        }
        Ok(profile)
    }

    async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.profiles.remove(profile_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileStatus;
    use chrono::NaiveDate;

    fn new_profile(account_id: &str, client_id: &str, pin: &str) -> NewProfile {
        NewProfile {
            account_id: account_id.to_owned(),
            client_id: client_id.to_owned(),
            pin: pin.to_owned(),
            profile_name: format!("Profile of {client_id}"),
            device_type: "TV".to_owned(),
            activation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            individual_price: 10.0,
            status: ProfileStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let first = store
            .create_profile(new_profile("A1", "C1", "1111"), false)
            .await
            .unwrap();
        let second = store
            .create_profile(new_profile("A1", "C2", "2222"), false)
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.profile_count().await, 2);
    }

    #[tokio::test]
    async fn test_filter_queries() {
        let store = MemoryStore::new();
        store
            .create_profile(new_profile("A1", "C1", "1111"), false)
            .await
            .unwrap();
        store
            .create_profile(new_profile("A1", "C2", "2222"), false)
            .await
            .unwrap();
        store
            .create_profile(new_profile("A2", "C1", "3333"), false)
            .await
            .unwrap();

        let on_a1 = store
            .find_profiles(&ProfileFilter::by_account("A1"), false)
            .await
            .unwrap();
        assert_eq!(on_a1.len(), 2);

        let pair = store
            .find_profiles(&ProfileFilter::by_link("A2", "C1"), false)
            .await
            .unwrap();
        assert_eq!(pair.len(), 1);
        assert_eq!(pair[0].pin, "3333");

        let by_pin = store
            .find_profiles(&ProfileFilter::by_pin("2222"), false)
            .await
            .unwrap();
        assert_eq!(by_pin.len(), 1);
        assert_eq!(by_pin[0].client_id, "C2");
    }

    #[tokio::test]
    async fn test_populate_fills_relations_when_seeded() {
        let store = MemoryStore::new();
        store
            .insert_account(Account {
                id: "A1".to_owned(),
                max_profiles: 4,
                price: 40.0,
                expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            })
            .await;
        store
            .insert_client(Client {
                id: "C1".to_owned(),
                name: "Ana".to_owned(),
            })
            .await;

        let created = store
            .create_profile(new_profile("A1", "C1", "1111"), true)
            .await
            .unwrap();
        assert_eq!(created.client.as_ref().unwrap().name, "Ana");
        assert_eq!(created.account.as_ref().unwrap().max_profiles, 4);

        let unpopulated = store.find_profile(&created.id, false).await.unwrap().unwrap();
        assert!(unpopulated.account.is_none());
        assert!(unpopulated.client.is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_profile() {
        let store = MemoryStore::new();
        let created = store
            .create_profile(new_profile("A1", "C1", "1111"), false)
            .await
            .unwrap();

        store.delete_profile(&created.id).await.unwrap();
        assert!(store.find_profile(&created.id, false).await.unwrap().is_none());
    }
}
