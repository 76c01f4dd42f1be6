use std::collections::BTreeMap;

use crate::{DealerPermissions, FieldCatalog, FieldGroup, ProductField};

/// Per-field access decisions for one render.
///
/// Built once from a catalog and a permission set; group checks read the
/// stored decisions instead of re-resolving every member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityResult {
    order: Vec<ProductField>,
    visible: BTreeMap<ProductField, bool>,
    editable: BTreeMap<ProductField, bool>,
    groups: BTreeMap<FieldGroup, Vec<ProductField>>,
    can_manage: bool,
}

impl VisibilityResult {
    /// Resolves every catalog field against `permissions`.
    #[must_use]
    pub fn resolve(catalog: &FieldCatalog, permissions: &DealerPermissions) -> Self {
        let mut order = Vec::with_capacity(catalog.entries().len());
        let mut visible = BTreeMap::new();
        let mut editable = BTreeMap::new();
        let mut groups: BTreeMap<FieldGroup, Vec<ProductField>> = BTreeMap::new();

        for entry in catalog.entries() {
            let field = entry.field();
            order.push(field);
            visible.insert(field, permissions.can_view(field));
            editable.insert(field, permissions.can_edit(field));
            if let Some(group) = entry.group() {
                groups.entry(group).or_default().push(field);
            }
        }

        Self {
            order,
            visible,
            editable,
            groups,
            can_manage: permissions.can_manage(),
        }
    }

    /// Returns whether `field` is visible. Fields outside the catalog are not.
    #[must_use]
    pub fn is_visible(&self, field: ProductField) -> bool {
        self.visible.get(&field).copied().unwrap_or(false)
    }

    /// Returns whether `field` is editable. Fields outside the catalog are not.
    #[must_use]
    pub fn is_editable(&self, field: ProductField) -> bool {
        self.editable.get(&field).copied().unwrap_or(false)
    }

    /// Returns whether any member of `group` is visible.
    #[must_use]
    pub fn is_group_visible(&self, group: FieldGroup) -> bool {
        self.groups
            .get(&group)
            .is_some_and(|fields| fields.iter().any(|field| self.is_visible(*field)))
    }

    /// Returns whether any of `fields` is visible.
    #[must_use]
    pub fn any_visible(&self, fields: &[ProductField]) -> bool {
        fields.iter().any(|field| self.is_visible(*field))
    }

    /// Returns whether management actions are allowed.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.can_manage
    }

    /// Iterates catalog fields with their visibility, in catalog order.
    pub fn fields(&self) -> impl Iterator<Item = (ProductField, bool)> + '_ {
        self.order
            .iter()
            .map(|field| (*field, self.is_visible(*field)))
    }

    /// Returns visible fields in catalog order.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<ProductField> {
        self.fields()
            .filter_map(|(field, visible)| visible.then_some(field))
            .collect()
    }
}
