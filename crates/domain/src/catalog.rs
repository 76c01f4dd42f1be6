use std::collections::HashSet;
use std::str::FromStr;

use dealerdesk_core::{AppError, AppResult};
use serde::Serialize;

use crate::{FieldAccessResolver, FieldGroup, ProductField};

/// Static catalog entry describing one permissioned field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldCatalogEntry {
    field: ProductField,
    group: Option<FieldGroup>,
}

impl FieldCatalogEntry {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(field: ProductField, group: Option<FieldGroup>) -> Self {
        Self { field, group }
    }

    /// Returns the field identifier.
    #[must_use]
    pub fn field(&self) -> ProductField {
        self.field
    }

    /// Returns the field's wire name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.field.as_str()
    }

    /// Returns the UI section this field belongs to.
    #[must_use]
    pub fn group(&self) -> Option<FieldGroup> {
        self.group
    }
}

/// Ordered set of catalog entries with unique field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCatalog {
    entries: Vec<FieldCatalogEntry>,
}

impl FieldCatalog {
    /// Creates a validated catalog.
    pub fn new(entries: Vec<FieldCatalogEntry>) -> AppResult<Self> {
        let mut seen_fields = HashSet::new();
        for entry in &entries {
            if !seen_fields.insert(entry.field) {
                return Err(AppError::Validation(format!(
                    "duplicate field '{}' in field catalog",
                    entry.name()
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Returns the dealer product catalog used by the product view.
    #[must_use]
    pub fn dealer_products() -> Self {
        use FieldGroup::{BasicInfo, Logistics, PricingAndStock};

        let entries = vec![
            FieldCatalogEntry::new(ProductField::ProductName, None),
            FieldCatalogEntry::new(ProductField::Status, None),
            FieldCatalogEntry::new(ProductField::SkuCode, Some(BasicInfo)),
            FieldCatalogEntry::new(ProductField::Brand, Some(BasicInfo)),
            FieldCatalogEntry::new(ProductField::Category, Some(BasicInfo)),
            FieldCatalogEntry::new(ProductField::HsnCode, Some(BasicInfo)),
            FieldCatalogEntry::new(ProductField::Description, Some(BasicInfo)),
            FieldCatalogEntry::new(ProductField::Mrp, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::MrpWithGst, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::SellingPrice, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::GstPercentage, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::DiscountPercentage, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::StockQuantity, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::MinStockLevel, Some(PricingAndStock)),
            FieldCatalogEntry::new(ProductField::WarehouseLocation, Some(Logistics)),
        ];

        Self { entries }
    }

    /// Returns catalog entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[FieldCatalogEntry] {
        &self.entries
    }

    /// Returns whether the catalog lists `field`.
    #[must_use]
    pub fn contains(&self, field: ProductField) -> bool {
        self.entries.iter().any(|entry| entry.field == field)
    }

    /// Looks up a catalog entry by wire name.
    #[must_use]
    pub fn find(&self, field_name: &str) -> Option<&FieldCatalogEntry> {
        let field = ProductField::from_str(field_name).ok()?;
        self.entries.iter().find(|entry| entry.field == field)
    }

    /// Returns the fields belonging to `group`, in catalog order.
    #[must_use]
    pub fn group_fields(&self, group: FieldGroup) -> Vec<ProductField> {
        self.entries
            .iter()
            .filter(|entry| entry.group == Some(group))
            .map(|entry| entry.field)
            .collect()
    }

    /// Returns the groups referenced by at least one entry, in display order.
    #[must_use]
    pub fn groups(&self) -> Vec<FieldGroup> {
        FieldGroup::all()
            .iter()
            .copied()
            .filter(|group| self.entries.iter().any(|entry| entry.group == Some(*group)))
            .collect()
    }

    /// Resolves a field name against the catalog, failing closed for names
    /// the catalog does not list.
    #[must_use]
    pub fn is_field_visible(&self, resolver: &FieldAccessResolver, field_name: &str) -> bool {
        self.find(field_name)
            .is_some_and(|entry| resolver.allows(entry.name()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{AccessContext, FieldAccessResolver, FieldGroup, MissingAllowListPolicy, ProductField};

    use super::{FieldCatalog, FieldCatalogEntry};

    #[test]
    fn duplicate_field_is_rejected() {
        let catalog = FieldCatalog::new(vec![
            FieldCatalogEntry::new(ProductField::Brand, None),
            FieldCatalogEntry::new(ProductField::Brand, Some(FieldGroup::BasicInfo)),
        ]);
        assert!(catalog.is_err());
    }

    #[test]
    fn dealer_catalog_lists_every_product_field_once() {
        let catalog = FieldCatalog::dealer_products();
        let rebuilt = FieldCatalog::new(catalog.entries().to_vec());
        assert!(rebuilt.is_ok());
        for field in ProductField::all() {
            assert!(catalog.contains(*field), "missing {}", field.as_str());
        }
    }

    #[test]
    fn pricing_group_contains_price_and_stock_fields() {
        let fields = FieldCatalog::dealer_products().group_fields(FieldGroup::PricingAndStock);
        assert!(fields.contains(&ProductField::SellingPrice));
        assert!(fields.contains(&ProductField::StockQuantity));
        assert!(!fields.contains(&ProductField::Brand));
    }

    #[test]
    fn unknown_name_fails_closed_even_without_allow_list() {
        let catalog = FieldCatalog::dealer_products();
        let resolver = FieldAccessResolver::new(
            AccessContext::new(None, true),
            MissingAllowListPolicy::AllowAll,
        );

        assert!(catalog.is_field_visible(&resolver, "brand"));
        assert!(!catalog.is_field_visible(&resolver, "internal_cost"));
        assert!(!catalog.is_field_visible(&resolver, ""));
    }

    #[test]
    fn groups_skip_sections_without_members() {
        let catalog =
            FieldCatalog::new(vec![FieldCatalogEntry::new(ProductField::Brand, Some(FieldGroup::BasicInfo))]);
        assert!(matches!(catalog, Ok(ref value) if value.groups() == vec![FieldGroup::BasicInfo]));
    }
}
