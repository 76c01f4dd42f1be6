use serde::{Deserialize, Serialize};

use crate::{
    AccessContext, FieldAccessResolver, FieldCatalog, FieldGroup, MissingAllowListPolicy,
    ProductField,
};

/// Dealer permission payload as delivered by the permission backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerPermissionSnapshot {
    /// Readable field names, absent when the dealer has no restriction metadata.
    #[serde(default)]
    pub allowed_fields: Option<Vec<String>>,
    /// Master switch for field reads.
    #[serde(default)]
    pub read_permissions_enabled: bool,
    /// Editable field names, absent in payloads that only carry the flag.
    #[serde(default)]
    pub editable_fields: Option<Vec<String>>,
    /// Master switch for edits and management actions.
    #[serde(default)]
    pub update_permissions_enabled: bool,
}

/// Read and update resolvers for one dealer, built from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPermissions {
    read: FieldAccessResolver,
    update: FieldAccessResolver,
}

impl DealerPermissions {
    /// Builds both resolvers from a snapshot under one missing-list policy.
    #[must_use]
    pub fn from_snapshot(snapshot: DealerPermissionSnapshot, policy: MissingAllowListPolicy) -> Self {
        Self {
            read: FieldAccessResolver::new(
                AccessContext::new(snapshot.allowed_fields, snapshot.read_permissions_enabled),
                policy,
            ),
            update: FieldAccessResolver::new(
                AccessContext::new(
                    snapshot.editable_fields,
                    snapshot.update_permissions_enabled,
                ),
                policy,
            ),
        }
    }

    /// Conservative permissions used when the real ones could not be loaded.
    #[must_use]
    pub fn denied() -> Self {
        Self {
            read: FieldAccessResolver::new(AccessContext::disabled(), MissingAllowListPolicy::DenyAll),
            update: FieldAccessResolver::new(
                AccessContext::disabled(),
                MissingAllowListPolicy::DenyAll,
            ),
        }
    }

    /// Returns the read resolver.
    #[must_use]
    pub fn read(&self) -> &FieldAccessResolver {
        &self.read
    }

    /// Returns the update resolver.
    #[must_use]
    pub fn update(&self) -> &FieldAccessResolver {
        &self.update
    }

    /// Returns whether the named field may be displayed.
    #[must_use]
    pub fn is_field_visible(&self, field_name: &str) -> bool {
        self.read.allows(field_name)
    }

    /// Returns whether any of the named fields may be displayed.
    #[must_use]
    pub fn is_group_visible<S: AsRef<str>>(&self, field_names: &[S]) -> bool {
        self.read.allows_any(field_names)
    }

    /// Returns whether the named field may be edited. Hidden fields never are.
    #[must_use]
    pub fn can_edit_field(&self, field_name: &str) -> bool {
        self.is_field_visible(field_name) && self.update.allows(field_name)
    }

    /// Returns whether management actions such as stock updates are allowed.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.update.is_enabled()
    }

    /// Typed form of [`Self::is_field_visible`].
    #[must_use]
    pub fn can_view(&self, field: ProductField) -> bool {
        self.read.allows(field.as_str())
    }

    /// Typed form of [`Self::can_edit_field`].
    #[must_use]
    pub fn can_edit(&self, field: ProductField) -> bool {
        self.can_edit_field(field.as_str())
    }

    /// Returns whether a catalog section has at least one visible member.
    #[must_use]
    pub fn can_view_group(&self, catalog: &FieldCatalog, group: FieldGroup) -> bool {
        catalog
            .group_fields(group)
            .iter()
            .any(|field| self.can_view(*field))
    }
}
