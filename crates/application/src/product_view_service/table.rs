use std::cmp::Ordering;

use dealerdesk_domain::{
    DealerPermissions, DealerProduct, FieldValue, PageWindow, ProductField,
    ProductTableViewState, SortDirection, VisibilityResult,
};

use super::ProductViewService;

const SEARCHABLE_FIELDS: &[ProductField] = &[
    ProductField::ProductName,
    ProductField::SkuCode,
    ProductField::Brand,
    ProductField::Category,
];

/// One table row holding only visible columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    /// Cell values aligned with [`ProductTablePage::columns`].
    pub cells: Vec<FieldValue>,
}

/// One page of the dealer product table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductTablePage {
    /// Effective state after permission restrictions and clamping.
    pub state: ProductTableViewState,
    /// Visible columns in display order.
    pub columns: Vec<ProductField>,
    /// Rows on this page.
    pub rows: Vec<ProductRow>,
    /// Rows matching tab and search across all pages.
    pub total_items: u64,
    /// Row window of this page.
    pub window: PageWindow,
}

impl ProductViewService {
    /// Filters, sorts and paginates `products` for the table.
    ///
    /// Search and sort only consider visible fields, so hidden values cannot
    /// be probed through the table controls.
    #[must_use]
    pub fn list_products(
        &self,
        permissions: &DealerPermissions,
        products: &[DealerProduct],
        state: &ProductTableViewState,
    ) -> ProductTablePage {
        let visibility = VisibilityResult::resolve(self.catalog(), permissions);
        let state = state.restricted_to(&visibility);
        let needle = state.search().to_lowercase();

        let mut matching: Vec<&DealerProduct> = products
            .iter()
            .filter(|product| state.tab().matches(product))
            .filter(|product| needle.is_empty() || matches_search(product, &needle, &visibility))
            .collect();

        if let Some(sort) = state.sort() {
            matching.sort_by(|left, right| {
                compare_values(
                    &sort.field.value_of(left),
                    &sort.field.value_of(right),
                    sort.direction,
                )
            });
        }

        let total_items = matching.len() as u64;
        let state = state.with_page(state.page(), total_items);
        let window = state.page_window(total_items);
        let columns = state.visible_columns(&visibility);

        let rows = matching
            .into_iter()
            .skip(usize::try_from(window.offset).unwrap_or(usize::MAX))
            .take(window.limit as usize)
            .map(|product| ProductRow {
                cells: columns.iter().map(|field| field.value_of(product)).collect(),
            })
            .collect();

        ProductTablePage {
            state,
            columns,
            rows,
            total_items,
            window,
        }
    }
}

fn matches_search(product: &DealerProduct, needle: &str, visibility: &VisibilityResult) -> bool {
    SEARCHABLE_FIELDS
        .iter()
        .filter(|field| visibility.is_visible(**field))
        .any(|field| match field.value_of(product) {
            FieldValue::Text(value) => value.to_lowercase().contains(needle),
            _ => false,
        })
}

// Empty values stay at the bottom in both directions.
fn compare_values(left: &FieldValue, right: &FieldValue, direction: SortDirection) -> Ordering {
    let ordering = match (left, right) {
        (FieldValue::Empty, FieldValue::Empty) => return Ordering::Equal,
        (FieldValue::Empty, _) => return Ordering::Greater,
        (_, FieldValue::Empty) => return Ordering::Less,
        (FieldValue::Text(left), FieldValue::Text(right)) => {
            left.to_lowercase().cmp(&right.to_lowercase())
        }
        (FieldValue::Quantity(left), FieldValue::Quantity(right)) => left.cmp(right),
        (FieldValue::Amount(left), FieldValue::Amount(right))
        | (FieldValue::Percentage(left), FieldValue::Percentage(right)) => left.total_cmp(right),
        _ => Ordering::Equal,
    };

    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
