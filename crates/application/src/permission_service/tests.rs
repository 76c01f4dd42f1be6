use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dealerdesk_core::{AppError, AppResult, DealerId};
use dealerdesk_domain::{DealerPermissionSnapshot, MissingAllowListPolicy, ProductField};

use crate::PermissionSource;

use super::DealerPermissionService;

#[derive(Default)]
struct FakePermissionSource {
    snapshots: HashMap<DealerId, DealerPermissionSnapshot>,
    requests: Mutex<Vec<DealerId>>,
}

#[async_trait]
impl PermissionSource for FakePermissionSource {
    async fn fetch_dealer_permissions(
        &self,
        dealer_id: DealerId,
    ) -> AppResult<DealerPermissionSnapshot> {
        self.requests.lock().await.push(dealer_id);
        self.snapshots
            .get(&dealer_id)
            .cloned()
            .ok_or_else(|| {
                AppError::Internal(format!("permission backend unavailable for '{dealer_id}'"))
            })
    }
}

#[tokio::test]
async fn load_builds_resolvers_from_snapshot() {
    let dealer_id = DealerId::new();
    let source = Arc::new(FakePermissionSource {
        snapshots: HashMap::from([(
            dealer_id,
            DealerPermissionSnapshot {
                allowed_fields: Some(vec!["sku_code".to_owned(), "brand".to_owned()]),
                read_permissions_enabled: true,
                editable_fields: None,
                update_permissions_enabled: true,
            },
        )]),
        requests: Mutex::new(Vec::new()),
    });
    let service = DealerPermissionService::new(source.clone(), MissingAllowListPolicy::AllowAll);

    let loaded = service.load(dealer_id).await;

    assert!(!loaded.is_fallback);
    assert!(loaded.permissions.can_view(ProductField::SkuCode));
    assert!(!loaded.permissions.can_view(ProductField::SellingPrice));
    assert!(loaded.permissions.can_manage());
    assert_eq!(source.requests.lock().await.as_slice(), &[dealer_id]);
}

#[tokio::test]
async fn load_failure_falls_back_to_denied_permissions() {
    let service = DealerPermissionService::new(
        Arc::new(FakePermissionSource::default()),
        MissingAllowListPolicy::AllowAll,
    );

    let loaded = service.load(DealerId::new()).await;

    assert!(loaded.is_fallback);
    assert!(!loaded.permissions.is_field_visible("sku_code"));
    assert!(!loaded.permissions.can_manage());
}

#[tokio::test]
async fn deny_all_policy_applies_to_missing_allow_list() {
    let dealer_id = DealerId::new();
    let service = DealerPermissionService::new(
        Arc::new(FakePermissionSource {
            snapshots: HashMap::from([(
                dealer_id,
                DealerPermissionSnapshot {
                    allowed_fields: None,
                    read_permissions_enabled: true,
                    editable_fields: None,
                    update_permissions_enabled: false,
                },
            )]),
            requests: Mutex::new(Vec::new()),
        }),
        MissingAllowListPolicy::DenyAll,
    );

    let loaded = service.load(dealer_id).await;

    assert!(!loaded.is_fallback);
    assert!(!loaded.permissions.is_field_visible("brand"));
}
