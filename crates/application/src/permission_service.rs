use std::sync::Arc;

use dealerdesk_core::DealerId;
use dealerdesk_domain::{DealerPermissions, MissingAllowListPolicy};
use tracing::{debug, warn};

use crate::PermissionSource;

/// Dealer permissions together with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPermissions {
    /// Resolvers to render with.
    pub permissions: DealerPermissions,
    /// Set when the source failed and the denied fallback is in use.
    pub is_fallback: bool,
}

/// Application service that turns permission snapshots into resolvers.
#[derive(Clone)]
pub struct DealerPermissionService {
    source: Arc<dyn PermissionSource>,
    policy: MissingAllowListPolicy,
}

impl DealerPermissionService {
    /// Creates a new permission service.
    #[must_use]
    pub fn new(source: Arc<dyn PermissionSource>, policy: MissingAllowListPolicy) -> Self {
        Self { source, policy }
    }

    /// Returns the policy applied to snapshots without an allow-list.
    #[must_use]
    pub fn policy(&self) -> MissingAllowListPolicy {
        self.policy
    }

    /// Loads permissions for a dealer.
    ///
    /// A failing source never leaves the caller without permissions: the
    /// denied set is returned instead and flagged as a fallback.
    pub async fn load(&self, dealer_id: DealerId) -> LoadedPermissions {
        match self.source.fetch_dealer_permissions(dealer_id).await {
            Ok(snapshot) => {
                debug!(
                    %dealer_id,
                    read_enabled = snapshot.read_permissions_enabled,
                    update_enabled = snapshot.update_permissions_enabled,
                    allow_list_len = snapshot.allowed_fields.as_ref().map(Vec::len),
                    "resolved dealer permissions"
                );
                if snapshot.allowed_fields.is_none() && snapshot.read_permissions_enabled {
                    debug!(
                        %dealer_id,
                        policy = self.policy.as_str(),
                        "dealer permissions carry no allow-list"
                    );
                }

                LoadedPermissions {
                    permissions: DealerPermissions::from_snapshot(snapshot, self.policy),
                    is_fallback: false,
                }
            }
            Err(error) => {
                warn!(
                    %dealer_id,
                    %error,
                    "failed to load dealer permissions, denying field access"
                );

                LoadedPermissions {
                    permissions: DealerPermissions::denied(),
                    is_fallback: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
