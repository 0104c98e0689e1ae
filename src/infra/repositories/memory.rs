//! In-memory user repository.
//!
//! Used by `serve --storage memory` and by tests that need an isolated
//! store without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{User, UserDetails};
use crate::errors::{AppError, AppResult};

/// Records and the identifier counter, locked together so an insert can
/// never observe a stale counter.
#[derive(Debug)]
struct MemoryState {
    users: BTreeMap<i32, User>,
    next_id: i32,
    /// Set once `i32::MAX` has been handed out
    exhausted: bool,
}

/// Process-local user store.
///
/// Identifiers grow monotonically, so iterating the map by key yields
/// insertion order.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                users: BTreeMap::new(),
                next_id: 1,
                exhausted: false,
            }),
        }
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn add(&self, details: UserDetails) -> AppResult<User> {
        let mut state = self.state.write().await;
        if state.exhausted {
            return Err(AppError::internal("User identifier space exhausted"));
        }

        let id = state.next_id;
        match id.checked_add(1) {
            Some(next) => state.next_id = next,
            None => state.exhausted = true,
        }

        let user = User::from_details(id, details);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.state.read().await.users.values().cloned().collect())
    }

    async fn update(&self, id: i32, details: UserDetails) -> AppResult<bool> {
        let mut state = self.state.write().await;
        match state.users.get_mut(&id) {
            Some(user) => {
                user.apply(details);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        Ok(self.state.write().await.users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn alice() -> UserDetails {
        UserDetails::new("Alice", "a@x.com")
    }

    fn bob() -> UserDetails {
        UserDetails::new("Bob", "b@x.com")
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let store = InMemoryUserStore::new();

        assert_eq!(store.add(alice()).await.unwrap().id, 1);
        assert_eq!(store.add(bob()).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryUserStore::new();
        store.add(alice()).await.unwrap();
        let bob = store.add(bob()).await.unwrap();

        assert!(store.delete(bob.id).await.unwrap());
        let carol = store.add(UserDetails::new("Carol", "c@x.com")).await.unwrap();

        assert_eq!(carol.id, 3);
    }

    #[tokio::test]
    async fn test_delete_then_list() {
        let store = InMemoryUserStore::new();
        store.add(alice()).await.unwrap();
        store.add(bob()).await.unwrap();

        assert!(store.delete(1).await.unwrap());
        let users = store.list().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 2);
        assert_eq!(users[0].name, "Bob");
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = InMemoryUserStore::new();
        for name in ["Zed", "Amy", "Mia"] {
            store
                .add(UserDetails::new(name, format!("{}@x.com", name)))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();

        assert_eq!(names, vec!["Zed", "Amy", "Mia"]);
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let store = InMemoryUserStore::new();
        store.add(alice()).await.unwrap();
        let before = store.list().await.unwrap();

        assert!(!store.update(42, bob()).await.unwrap());
        assert!(!store.delete(42).await.unwrap());

        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_get_returns_latest_update() {
        let store = InMemoryUserStore::new();
        let user = store.add(alice()).await.unwrap();

        store
            .update(user.id, UserDetails::new("Alice B", "ab@x.com").with_phone("555"))
            .await
            .unwrap();
        let fetched = store.get(user.id).await.unwrap().unwrap();

        assert_eq!(fetched.name, "Alice B");
        assert_eq!(fetched.phone.as_deref(), Some("555"));
    }

    #[tokio::test]
    async fn test_email_not_unique() {
        let store = InMemoryUserStore::new();
        store.add(alice()).await.unwrap();
        store.add(UserDetails::new("Alice 2", "a@x.com")).await.unwrap();

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_last_identifier_is_not_handed_out_twice() {
        let store = InMemoryUserStore {
            state: RwLock::new(MemoryState {
                users: BTreeMap::new(),
                next_id: i32::MAX,
                exhausted: false,
            }),
        };

        assert_eq!(store.add(alice()).await.unwrap().id, i32::MAX);
        assert!(store.delete(i32::MAX).await.unwrap());

        let result = store.add(bob()).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_distinct_ids() {
        let store = Arc::new(InMemoryUserStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .add(UserDetails::new(format!("user{}", i), "u@x.com"))
                        .await
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
