use async_trait::async_trait;
use dealerdesk_core::{AppResult, DealerId};
use dealerdesk_domain::DealerPermissionSnapshot;

/// Port for fetching a dealer's field permissions from the system of record.
#[async_trait]
pub trait PermissionSource: Send + Sync {
    /// Returns the current permission snapshot for a dealer.
    async fn fetch_dealer_permissions(
        &self,
        dealer_id: DealerId,
    ) -> AppResult<DealerPermissionSnapshot>;
}
