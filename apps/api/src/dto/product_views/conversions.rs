use std::str::FromStr;

use dealerdesk_application::{
    DealerProductView, FieldAccessSummary, FieldDisplay, ProductTablePage, SectionView,
};
use dealerdesk_core::{AppError, AppResult, DealerId};
use dealerdesk_domain::{
    DealerProduct, DealerProductInput, FieldValue, ProductField, ProductStatus, ProductTab,
    ProductTableViewState, SortDirection,
};

use super::types::{
    ColumnResponse, DealerProductRequest, FieldAccessEntryResponse, FieldAccessResponse,
    FieldSlotResponse, FieldValueKind, FieldValueResponse, ProductTableRequest,
    ProductTableResponse, ProductViewResponse, SectionResponse,
};

impl TryFrom<DealerProductRequest> for DealerProduct {
    type Error = AppError;

    fn try_from(value: DealerProductRequest) -> Result<Self, Self::Error> {
        let status = value
            .status
            .as_deref()
            .map(ProductStatus::from_str)
            .transpose()?
            .unwrap_or_default();

        DealerProduct::new(DealerProductInput {
            product_name: value.product_name,
            sku_code: value.sku_code,
            brand: value.brand,
            category: value.category,
            description: value.description,
            hsn_code: value.hsn_code,
            mrp: value.mrp,
            mrp_with_gst: value.mrp_with_gst,
            selling_price: value.selling_price,
            gst_percentage: value.gst_percentage,
            discount_percentage: value.discount_percentage,
            stock_quantity: value.stock_quantity,
            min_stock_level: value.min_stock_level,
            warehouse_location: value.warehouse_location,
            status,
        })
    }
}

impl ProductTableRequest {
    /// Applies the requested controls to a fresh table state.
    pub fn view_state(&self) -> AppResult<ProductTableViewState> {
        let mut state = ProductTableViewState::default();

        if let Some(tab) = self.tab.as_deref() {
            state = state.with_tab(ProductTab::from_str(tab)?);
        }
        if let Some(search) = self.search.as_deref() {
            state = state.with_search(search);
        }
        if let Some(page_size) = self.page_size {
            state = state.with_page_size(page_size)?;
        }
        match (self.sort_field.as_deref(), self.sort_direction.as_deref()) {
            (None, None) => {}
            (None, Some(_)) => {
                return Err(AppError::Validation(
                    "sort_direction requires sort_field".to_owned(),
                ));
            }
            (Some(field), direction) => {
                let field = ProductField::from_str(field)?;
                state = state.with_sort(field);
                match direction {
                    None | Some("asc") => {}
                    Some("desc") => state = state.with_sort(field),
                    Some(other) => {
                        return Err(AppError::Validation(format!(
                            "sort_direction must be either 'asc' or 'desc', got '{other}'"
                        )));
                    }
                }
            }
        }
        if let Some(page) = self.page {
            state = state.with_page(page, u64::MAX);
        }

        Ok(state)
    }
}

impl From<&FieldValue> for FieldValueResponse {
    fn from(value: &FieldValue) -> Self {
        let empty = Self {
            kind: FieldValueKind::Empty,
            text: None,
            number: None,
            quantity: None,
        };

        match value {
            FieldValue::Text(text) => Self {
                kind: FieldValueKind::Text,
                text: Some(text.clone()),
                ..empty
            },
            FieldValue::Amount(amount) => Self {
                kind: FieldValueKind::Amount,
                number: Some(*amount),
                ..empty
            },
            FieldValue::Percentage(rate) => Self {
                kind: FieldValueKind::Percentage,
                number: Some(*rate),
                ..empty
            },
            FieldValue::Quantity(quantity) => Self {
                kind: FieldValueKind::Quantity,
                quantity: Some(*quantity),
                ..empty
            },
            FieldValue::Empty => empty,
        }
    }
}

impl From<&SectionView> for SectionResponse {
    fn from(value: &SectionView) -> Self {
        Self {
            group: value.group.as_str().to_owned(),
            title: value.group.title().to_owned(),
            visible: value.visible,
        }
    }
}

impl FieldAccessResponse {
    pub fn from_summary(dealer_id: DealerId, degraded: bool, summary: &FieldAccessSummary) -> Self {
        Self {
            dealer_id: dealer_id.to_string(),
            degraded,
            fields: summary
                .fields
                .iter()
                .map(|entry| FieldAccessEntryResponse {
                    field: entry.field.as_str().to_owned(),
                    group: entry.group.map(|group| group.as_str().to_owned()),
                    visible: entry.visible,
                    editable: entry.editable,
                })
                .collect(),
            sections: summary.sections.iter().map(SectionResponse::from).collect(),
            can_manage: summary.can_manage,
        }
    }
}

impl ProductViewResponse {
    pub fn from_view(dealer_id: DealerId, degraded: bool, view: &DealerProductView) -> Self {
        Self {
            dealer_id: dealer_id.to_string(),
            degraded,
            fields: view
                .fields
                .iter()
                .map(|slot| {
                    let value = match &slot.display {
                        FieldDisplay::Value(value) => Some(FieldValueResponse::from(value)),
                        FieldDisplay::Restricted => None,
                    };

                    FieldSlotResponse {
                        field: slot.field.as_str().to_owned(),
                        label: slot.label.to_owned(),
                        group: slot.group.map(|group| group.as_str().to_owned()),
                        restricted: value.is_none(),
                        value,
                        editable: slot.editable,
                    }
                })
                .collect(),
            sections: view.sections.iter().map(SectionResponse::from).collect(),
            can_manage_stock: view.can_manage_stock,
        }
    }
}

impl ProductTableResponse {
    pub fn from_page(dealer_id: DealerId, degraded: bool, page: &ProductTablePage) -> Self {
        let sort = page.state.sort();

        Self {
            dealer_id: dealer_id.to_string(),
            degraded,
            columns: page
                .columns
                .iter()
                .map(|field| ColumnResponse {
                    field: field.as_str().to_owned(),
                    label: field.label().to_owned(),
                })
                .collect(),
            rows: page
                .rows
                .iter()
                .map(|row| row.cells.iter().map(FieldValueResponse::from).collect())
                .collect(),
            tab: page.state.tab().as_str().to_owned(),
            search: page.state.search().to_owned(),
            page: page.state.page(),
            page_size: page.state.page_size(),
            total_pages: page.window.total_pages,
            total_items: page.total_items,
            sort_field: sort.map(|sort| sort.field.as_str().to_owned()),
            sort_direction: sort.map(|sort| {
                match sort.direction {
                    SortDirection::Asc => "asc",
                    SortDirection::Desc => "desc",
                }
                .to_owned()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use dealerdesk_domain::{FieldValue, ProductField, SortDirection};

    use crate::dto::product_views::types::{
        FieldValueKind, FieldValueResponse, ProductTableRequest,
    };

    fn table_request(
        sort_field: Option<&str>,
        sort_direction: Option<&str>,
    ) -> ProductTableRequest {
        ProductTableRequest {
            products: Vec::new(),
            tab: None,
            search: None,
            page: None,
            page_size: None,
            sort_field: sort_field.map(str::to_owned),
            sort_direction: sort_direction.map(str::to_owned),
        }
    }

    #[test]
    fn sort_direction_without_field_is_rejected() {
        assert!(table_request(None, Some("desc")).view_state().is_err());
        assert!(
            table_request(None, None)
                .view_state()
                .is_ok_and(|state| state.sort().is_none())
        );
    }

    #[test]
    fn descending_sort_is_applied() {
        let state = table_request(Some("selling_price"), Some("desc")).view_state();
        assert!(state.is_ok_and(|state| state.sort().is_some_and(|sort| {
            sort.field == ProductField::SellingPrice && sort.direction == SortDirection::Desc
        })));
        assert!(table_request(Some("selling_price"), Some("down")).view_state().is_err());
    }

    #[test]
    fn large_quantities_are_sent_exactly() {
        let quantity = i64::MAX - 1;
        let response = FieldValueResponse::from(&FieldValue::Quantity(quantity));

        assert_eq!(response.kind, FieldValueKind::Quantity);
        assert_eq!(response.quantity, Some(quantity));
        assert_eq!(response.number, None);
    }
}
