use std::collections::HashMap;

use async_trait::async_trait;
use dealerdesk_application::PermissionSource;
use dealerdesk_core::{AppError, AppResult, DealerId};
use dealerdesk_domain::DealerPermissionSnapshot;
use tokio::sync::RwLock;

/// In-memory permission source implementation.
#[derive(Debug, Default)]
pub struct InMemoryPermissionSource {
    snapshots: RwLock<HashMap<DealerId, DealerPermissionSnapshot>>,
}

impl InMemoryPermissionSource {
    /// Creates an empty in-memory source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    /// Stores or replaces a dealer's snapshot.
    pub async fn upsert(&self, dealer_id: DealerId, snapshot: DealerPermissionSnapshot) {
        self.snapshots.write().await.insert(dealer_id, snapshot);
    }

    /// Removes a dealer's snapshot.
    pub async fn remove(&self, dealer_id: DealerId) -> Option<DealerPermissionSnapshot> {
        self.snapshots.write().await.remove(&dealer_id)
    }
}

#[async_trait]
impl PermissionSource for InMemoryPermissionSource {
    async fn fetch_dealer_permissions(
        &self,
        dealer_id: DealerId,
    ) -> AppResult<DealerPermissionSnapshot> {
        self.snapshots
            .read()
            .await
            .get(&dealer_id)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("no permissions configured for dealer '{dealer_id}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use dealerdesk_application::PermissionSource;
    use dealerdesk_core::{AppError, DealerId};
    use dealerdesk_domain::DealerPermissionSnapshot;

    use super::InMemoryPermissionSource;

    #[tokio::test]
    async fn returns_stored_snapshot() {
        let source = InMemoryPermissionSource::new();
        let dealer_id = DealerId::new();
        let snapshot = DealerPermissionSnapshot {
            allowed_fields: Some(vec!["brand".to_owned()]),
            read_permissions_enabled: true,
            editable_fields: None,
            update_permissions_enabled: false,
        };
        source.upsert(dealer_id, snapshot.clone()).await;

        let fetched = source.fetch_dealer_permissions(dealer_id).await;
        assert!(matches!(fetched, Ok(ref value) if value == &snapshot));
    }

    #[tokio::test]
    async fn unknown_dealer_is_not_found() {
        let source = InMemoryPermissionSource::new();
        let dealer_id = DealerId::new();
        source
            .upsert(dealer_id, DealerPermissionSnapshot::default())
            .await;
        let removed = source.remove(dealer_id).await;
        assert!(removed.is_some());

        let fetched = source.fetch_dealer_permissions(dealer_id).await;
        assert!(matches!(fetched, Err(AppError::NotFound(_))));
    }
}
