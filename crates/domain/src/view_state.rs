use std::str::FromStr;

use dealerdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{DealerProduct, ProductField, VisibilityResult};

/// Page sizes offered by the product table.
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 25, 50, 100];

/// Default page size for a fresh table.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Columns of the dealer product table, in display order.
pub const PRODUCT_TABLE_COLUMNS: &[ProductField] = &[
    ProductField::ProductName,
    ProductField::SkuCode,
    ProductField::Brand,
    ProductField::SellingPrice,
    ProductField::MrpWithGst,
    ProductField::StockQuantity,
    ProductField::Status,
];

/// Stock tab of the dealer product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTab {
    /// Every product.
    #[default]
    All,
    /// Products above their reorder threshold.
    InStock,
    /// Products in stock but at or below their reorder threshold.
    LowStock,
    /// Products with no units left.
    OutOfStock,
}

impl ProductTab {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    /// Returns whether `product` belongs under this tab.
    #[must_use]
    pub fn matches(&self, product: &DealerProduct) -> bool {
        let quantity = product.stock_quantity();
        let is_low = quantity > 0
            && product
                .min_stock_level()
                .is_some_and(|level| quantity <= level);

        match self {
            Self::All => true,
            Self::InStock => quantity > 0 && !is_low,
            Self::LowStock => is_low,
            Self::OutOfStock => quantity == 0,
        }
    }
}

impl FromStr for ProductTab {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Self::All),
            "in_stock" => Ok(Self::InStock),
            "low_stock" => Ok(Self::LowStock),
            "out_of_stock" => Ok(Self::OutOfStock),
            _ => Err(AppError::Validation(format!("unknown product tab '{value}'"))),
        }
    }
}

/// Sort direction for the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

/// Active table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSort {
    /// Sorted column.
    pub field: ProductField,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Slice of the result set addressed by the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Zero-based index of the first row.
    pub offset: u64,
    /// Maximum rows on the page.
    pub limit: u32,
    /// Total number of pages, at least one.
    pub total_pages: u32,
}

/// Immutable dealer product table state.
///
/// Every transition returns a new value. Changing what is being looked at
/// (tab, search, page size) always returns to page one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredTableState")]
pub struct ProductTableViewState {
    tab: ProductTab,
    search: String,
    page: u32,
    page_size: u32,
    sort: Option<TableSort>,
}

#[derive(Deserialize)]
struct StoredTableState {
    tab: ProductTab,
    search: String,
    page: u32,
    page_size: u32,
    sort: Option<TableSort>,
}

impl TryFrom<StoredTableState> for ProductTableViewState {
    type Error = AppError;

    fn try_from(value: StoredTableState) -> Result<Self, Self::Error> {
        if value.page == 0 {
            return Err(AppError::Validation(
                "page must be greater than or equal to one".to_owned(),
            ));
        }

        let state = Self::default()
            .with_tab(value.tab)
            .with_search(value.search.as_str())
            .with_page_size(value.page_size)?;

        Ok(Self {
            page: value.page,
            sort: value.sort,
            ..state
        })
    }
}

impl Default for ProductTableViewState {
    fn default() -> Self {
        Self {
            tab: ProductTab::All,
            search: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl ProductTableViewState {
    /// Returns active tab.
    #[must_use]
    pub fn tab(&self) -> ProductTab {
        self.tab
    }

    /// Returns normalized search text.
    #[must_use]
    pub fn search(&self) -> &str {
        self.search.as_str()
    }

    /// Returns one-based page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns active sort.
    #[must_use]
    pub fn sort(&self) -> Option<TableSort> {
        self.sort
    }

    /// Switches tab.
    #[must_use]
    pub fn with_tab(&self, tab: ProductTab) -> Self {
        Self {
            tab,
            page: 1,
            ..self.clone()
        }
    }

    /// Replaces search text.
    #[must_use]
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            search: search.trim().to_owned(),
            page: 1,
            ..self.clone()
        }
    }

    /// Changes page size.
    pub fn with_page_size(&self, page_size: u32) -> AppResult<Self> {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(AppError::Validation(format!(
                "page size must be one of {PAGE_SIZE_OPTIONS:?}, got {page_size}"
            )));
        }

        Ok(Self {
            page_size,
            page: 1,
            ..self.clone()
        })
    }

    /// Jumps to `page`, clamped to the pages available for `total_items`.
    #[must_use]
    pub fn with_page(&self, page: u32, total_items: u64) -> Self {
        let total_pages = self.total_pages(total_items);
        Self {
            page: page.clamp(1, total_pages),
            ..self.clone()
        }
    }

    /// Advances one page, staying on the last page.
    #[must_use]
    pub fn next_page(&self, total_items: u64) -> Self {
        self.with_page(self.page.saturating_add(1), total_items)
    }

    /// Goes back one page, staying on the first page.
    #[must_use]
    pub fn previous_page(&self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self.clone()
        }
    }

    /// Sorts by `field`, toggling direction when it is already sorted.
    #[must_use]
    pub fn with_sort(&self, field: ProductField) -> Self {
        let direction = match self.sort {
            Some(sort) if sort.field == field && sort.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };

        Self {
            sort: Some(TableSort { field, direction }),
            ..self.clone()
        }
    }

    /// Removes the active sort.
    #[must_use]
    pub fn without_sort(&self) -> Self {
        Self {
            sort: None,
            ..self.clone()
        }
    }

    /// Returns the row window for the current page.
    #[must_use]
    pub fn page_window(&self, total_items: u64) -> PageWindow {
        let total_pages = self.total_pages(total_items);
        let page = self.page.clamp(1, total_pages);
        PageWindow {
            offset: u64::from(page - 1) * u64::from(self.page_size),
            limit: self.page_size,
            total_pages,
        }
    }

    /// Returns the table columns whose field is visible.
    #[must_use]
    pub fn visible_columns(&self, visibility: &VisibilityResult) -> Vec<ProductField> {
        PRODUCT_TABLE_COLUMNS
            .iter()
            .copied()
            .filter(|field| visibility.is_visible(*field))
            .collect()
    }

    /// Drops a sort on a column the viewer cannot see.
    #[must_use]
    pub fn restricted_to(&self, visibility: &VisibilityResult) -> Self {
        match self.sort {
            Some(sort) if !visibility.is_visible(sort.field) => self.without_sort(),
            _ => self.clone(),
        }
    }

    fn total_pages(&self, total_items: u64) -> u32 {
        let pages = total_items.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
