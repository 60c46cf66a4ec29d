// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity store capability.
//!
//! Two backends, selected once at startup by configuration: a durable
//! Firestore store and an in-process memory store. Handlers never pick a
//! backend themselves and there is no implicit runtime fallback; store
//! failures surface as a single error at the boundary.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{ActivityRecord, User};
use chrono::{DateTime, Utc};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const ACTIVITIES: &str = "activities";
}

#[derive(Clone)]
enum Backend {
    Firestore(FirestoreStore),
    Memory(MemoryStore),
}

/// Store handle shared across request handlers.
#[derive(Clone)]
pub struct Store {
    backend: Backend,
}

impl Store {
    /// In-process store; data is lost on restart.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStore::default()),
        }
    }

    /// Durable Firestore-backed store.
    pub async fn firestore(project_id: &str) -> Result<Self, AppError> {
        Ok(Self {
            backend: Backend::Firestore(FirestoreStore::new(project_id).await?),
        })
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.get_user(user_id).await,
            Backend::Memory(m) => Ok(m.get_user(user_id)),
        }
    }

    /// Look up a user by email (unique).
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.get_user_by_email(email).await,
            Backend::Memory(m) => Ok(m.get_user_by_email(email)),
        }
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.upsert_user(user).await,
            Backend::Memory(m) => {
                m.upsert_user(user);
                Ok(())
            }
        }
    }

    /// All users, in account-creation order.
    ///
    /// The order is what makes leaderboard tie-breaking deterministic.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.list_users().await,
            Backend::Memory(m) => Ok(m.list_users()),
        }
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Persist a newly-created activity record (write-once).
    pub async fn save_activity(&self, record: &ActivityRecord) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.save_activity(record).await,
            Backend::Memory(m) => {
                m.save_activity(record);
                Ok(())
            }
        }
    }

    /// A user's activity records, newest first, optionally bounded below.
    pub async fn activities_for_user(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        match &self.backend {
            Backend::Firestore(f) => f.activities_for_user(user_id, since).await,
            Backend::Memory(m) => Ok(m.activities_for_user(user_id, since)),
        }
    }
}
