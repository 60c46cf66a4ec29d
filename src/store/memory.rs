// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store backend.
//!
//! Backed by concurrent maps so the handle can be cloned freely across
//! request handlers. Used for local development and tests.

use crate::models::{ActivityRecord, User};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory store. Cheap to clone; all clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, User>>,
    /// Activity records keyed by owning user ID.
    activities: Arc<DashMap<String, Vec<ActivityRecord>>>,
}

impl MemoryStore {
    pub fn get_user(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).map(|u| u.clone())
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.clone())
    }

    pub fn upsert_user(&self, user: &User) {
        self.users.insert(user.id.clone(), user.clone());
    }

    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.iter().map(|entry| entry.clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        users
    }

    pub fn save_activity(&self, record: &ActivityRecord) {
        self.activities
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
    }

    pub fn activities_for_user(
        &self,
        user_id: &str,
        since: Option<DateTime<Utc>>,
    ) -> Vec<ActivityRecord> {
        let mut records: Vec<ActivityRecord> = self
            .activities
            .get(user_id)
            .map(|list| {
                list.iter()
                    .filter(|r| since.is_none_or(|s| r.date >= s))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityInput;
    use chrono::Duration;

    fn user(id: &str, email: &str, created_at: DateTime<Utc>) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: email.to_string(),
            password_hash: "x$y".to_string(),
            created_at,
            goals: Default::default(),
            achievements: vec![],
        }
    }

    #[test]
    fn test_user_round_trip() {
        let store = MemoryStore::default();
        let now = Utc::now();
        store.upsert_user(&user("u1", "a@example.com", now));

        assert!(store.get_user("u1").is_some());
        assert!(store.get_user("u2").is_none());
        assert_eq!(
            store.get_user_by_email("a@example.com").unwrap().id,
            "u1"
        );
    }

    #[test]
    fn test_list_users_in_creation_order() {
        let store = MemoryStore::default();
        let now = Utc::now();
        store.upsert_user(&user("u2", "b@example.com", now));
        store.upsert_user(&user("u1", "a@example.com", now - Duration::hours(1)));

        let ids: Vec<String> = store.list_users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["u1", "u2"]);
    }

    #[test]
    fn test_activities_filtered_and_newest_first() {
        let store = MemoryStore::default();
        let now = Utc::now();

        for days_ago in [3, 1, 2] {
            let record = ActivityRecord::new(
                "u1",
                &ActivityInput::default(),
                days_ago as f64,
                now - Duration::days(days_ago),
            );
            store.save_activity(&record);
        }

        let all = store.activities_for_user("u1", None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].total_co2, 1.0);
        assert_eq!(all[2].total_co2, 3.0);

        let recent = store.activities_for_user("u1", Some(now - Duration::days(2)));
        assert_eq!(recent.len(), 2);

        assert!(store.activities_for_user("other", None).is_empty());
    }
}
