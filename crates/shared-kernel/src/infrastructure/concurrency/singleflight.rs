// crates/shared-kernel/src/infrastructure/concurrency/singleflight.rs

//! # Singleflight
//!
//! Guarantees that at most one instance of an asynchronous operation runs
//! for a given key at any time inside this process.
//!
//! The first caller for a key (the leader) runs the operation; callers that
//! arrive while it is in flight (followers) wait for the leader's result
//! instead of starting their own. The entry is removed as soon as the leader
//! finishes, so later calls start a fresh operation.
//!
//! Used by the find-or-create resolvers so that two concurrent first uses of
//! the same natural key produce a single insert.

use std::future::Future;
use std::hash::Hash;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::future::{FutureExt, Shared};
use tokio::sync::oneshot;

use crate::errors::{DomainError, Result};

type InFlight<T> = Shared<oneshot::Receiver<Result<T>>>;

pub struct Singleflight<K, T>
where
    K: Hash + Eq,
{
    requests: DashMap<K, InFlight<T>>,
}

impl<K, T> Default for Singleflight<K, T>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Singleflight<K, T>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            requests: DashMap::new(),
        }
    }

    pub async fn execute<F, Fut>(&self, key: K, factory: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Atomic check-and-insert; the shard lock is released before any await
        let role = match self.requests.entry(key.clone()) {
            Entry::Occupied(entry) => Role::Follower(entry.get().clone()),
            Entry::Vacant(entry) => {
                let (tx, rx) = oneshot::channel();
                let _ = entry.insert(rx.shared());
                Role::Leader(tx)
            }
        };

        match role {
            Role::Leader(tx) => self.lead(key, tx, factory).await,
            Role::Follower(shared) => match shared.await {
                Ok(result) => result,
                Err(_) => Err(DomainError::Internal(
                    "Singleflight leader dropped before completing".into(),
                )),
            },
        }
    }

    async fn lead<F, Fut>(&self, key: K, tx: oneshot::Sender<Result<T>>, factory: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        // Removes the entry even if the leader future is cancelled mid-flight
        let _cleanup = RemoveOnDrop {
            requests: &self.requests,
            key: Some(key),
        };

        let result = factory().await;
        let _ = tx.send(result.clone());
        result
    }

    /// Number of keys currently in flight
    pub fn in_flight(&self) -> usize {
        self.requests.len()
    }
}

enum Role<T> {
    Leader(oneshot::Sender<Result<T>>),
    Follower(InFlight<T>),
}

struct RemoveOnDrop<'a, K, T>
where
    K: Hash + Eq,
{
    requests: &'a DashMap<K, InFlight<T>>,
    key: Option<K>,
}

impl<K, T> Drop for RemoveOnDrop<'_, K, T>
where
    K: Hash + Eq,
{
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.requests.remove(&key);
        }
    }
}
