use std::sync::Arc;

use dealerdesk_domain::{
    DealerPermissions, DealerProduct, FieldCatalog, FieldGroup, FieldValue, ProductField,
    VisibilityResult,
};

mod table;

pub use table::{ProductRow, ProductTablePage};

/// What the view shows in a field slot.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDisplay {
    /// The field value.
    Value(FieldValue),
    /// Permission-denied placeholder.
    Restricted,
}

/// One rendered field slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    /// Field identifier.
    pub field: ProductField,
    /// UI label.
    pub label: &'static str,
    /// Section the slot belongs to.
    pub group: Option<FieldGroup>,
    /// Value or placeholder.
    pub display: FieldDisplay,
    /// Whether an edit control is offered.
    pub editable: bool,
}

/// Section container visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView {
    /// Section identifier.
    pub group: FieldGroup,
    /// Whether the container renders at all.
    pub visible: bool,
}

/// Rendered dealer product view.
#[derive(Debug, Clone, PartialEq)]
pub struct DealerProductView {
    /// Field slots in catalog order.
    pub fields: Vec<FieldView>,
    /// Sections in display order.
    pub sections: Vec<SectionView>,
    /// Whether stock update actions are offered.
    pub can_manage_stock: bool,
}

impl DealerProductView {
    /// Returns the slot for `field`, if the catalog lists it.
    #[must_use]
    pub fn field(&self, field: ProductField) -> Option<&FieldView> {
        self.fields.iter().find(|view| view.field == field)
    }

    /// Returns whether `group` renders.
    #[must_use]
    pub fn is_section_visible(&self, group: FieldGroup) -> bool {
        self.sections
            .iter()
            .any(|section| section.group == group && section.visible)
    }
}

/// Access decision for one field, without product data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAccessEntry {
    /// Field identifier.
    pub field: ProductField,
    /// Section the field belongs to.
    pub group: Option<FieldGroup>,
    /// Read access.
    pub visible: bool,
    /// Edit access.
    pub editable: bool,
}

/// Resolved access for every catalog field and section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessSummary {
    /// Per-field decisions in catalog order.
    pub fields: Vec<FieldAccessEntry>,
    /// Per-section decisions in display order.
    pub sections: Vec<SectionView>,
    /// Whether management actions are allowed.
    pub can_manage: bool,
}

/// Application service rendering dealer product view models.
#[derive(Clone)]
pub struct ProductViewService {
    catalog: Arc<FieldCatalog>,
}

impl ProductViewService {
    /// Creates a new product view service over a field catalog.
    #[must_use]
    pub fn new(catalog: Arc<FieldCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns the field catalog.
    #[must_use]
    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Resolves field and section access without rendering a product.
    #[must_use]
    pub fn field_access(&self, permissions: &DealerPermissions) -> FieldAccessSummary {
        let visibility = VisibilityResult::resolve(&self.catalog, permissions);

        FieldAccessSummary {
            fields: self
                .catalog
                .entries()
                .iter()
                .map(|entry| FieldAccessEntry {
                    field: entry.field(),
                    group: entry.group(),
                    visible: visibility.is_visible(entry.field()),
                    editable: visibility.is_editable(entry.field()),
                })
                .collect(),
            sections: self.sections(&visibility),
            can_manage: visibility.can_manage(),
        }
    }

    /// Renders `product`, replacing hidden values with placeholders.
    #[must_use]
    pub fn render(
        &self,
        permissions: &DealerPermissions,
        product: &DealerProduct,
    ) -> DealerProductView {
        let visibility = VisibilityResult::resolve(&self.catalog, permissions);

        let fields = self
            .catalog
            .entries()
            .iter()
            .map(|entry| {
                let field = entry.field();
                let display = if visibility.is_visible(field) {
                    FieldDisplay::Value(field.value_of(product))
                } else {
                    FieldDisplay::Restricted
                };

                FieldView {
                    field,
                    label: field.label(),
                    group: entry.group(),
                    display,
                    editable: visibility.is_editable(field),
                }
            })
            .collect();

        DealerProductView {
            fields,
            sections: self.sections(&visibility),
            can_manage_stock: visibility.can_manage(),
        }
    }

    fn sections(&self, visibility: &VisibilityResult) -> Vec<SectionView> {
        self.catalog
            .groups()
            .into_iter()
            .map(|group| SectionView {
                group,
                visible: visibility.is_group_visible(group),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
