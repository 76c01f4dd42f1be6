use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming dealer product payload.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dealer-product-request.ts"
)]
pub struct DealerProductRequest {
    pub product_name: String,
    pub sku_code: String,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub hsn_code: Option<String>,
    pub mrp: Option<f64>,
    pub mrp_with_gst: Option<f64>,
    pub selling_price: Option<f64>,
    pub gst_percentage: Option<f64>,
    pub discount_percentage: Option<f64>,
    #[ts(type = "number")]
    pub stock_quantity: i64,
    #[ts(type = "number | null")]
    pub min_stock_level: Option<i64>,
    pub warehouse_location: Option<String>,
    #[ts(type = "\"active\" | \"inactive\" | \"draft\" | null")]
    pub status: Option<String>,
}

/// Incoming product table payload.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/product-table-request.ts"
)]
pub struct ProductTableRequest {
    pub products: Vec<DealerProductRequest>,
    #[ts(type = "\"all\" | \"in_stock\" | \"low_stock\" | \"out_of_stock\" | null")]
    pub tab: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_field: Option<String>,
    #[ts(type = "\"asc\" | \"desc\" | null")]
    pub sort_direction: Option<String>,
}

/// Discriminator of a rendered field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-value-kind.ts"
)]
pub enum FieldValueKind {
    Text,
    Amount,
    Percentage,
    Quantity,
    Empty,
}

/// API representation of a field value.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-value-response.ts"
)]
pub struct FieldValueResponse {
    pub kind: FieldValueKind,
    pub text: Option<String>,
    pub number: Option<f64>,
    #[ts(type = "number | null")]
    pub quantity: Option<i64>,
}

/// API representation of one product view slot.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-slot-response.ts"
)]
pub struct FieldSlotResponse {
    pub field: String,
    pub label: String,
    pub group: Option<String>,
    pub restricted: bool,
    pub value: Option<FieldValueResponse>,
    pub editable: bool,
}

/// API representation of section visibility.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/section-response.ts"
)]
pub struct SectionResponse {
    pub group: String,
    pub title: String,
    pub visible: bool,
}

/// API representation of one field access decision.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-access-entry-response.ts"
)]
pub struct FieldAccessEntryResponse {
    pub field: String,
    pub group: Option<String>,
    pub visible: bool,
    pub editable: bool,
}

/// API representation of resolved dealer field access.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/field-access-response.ts"
)]
pub struct FieldAccessResponse {
    pub dealer_id: String,
    pub degraded: bool,
    pub fields: Vec<FieldAccessEntryResponse>,
    pub sections: Vec<SectionResponse>,
    pub can_manage: bool,
}

/// API representation of a rendered dealer product.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/product-view-response.ts"
)]
pub struct ProductViewResponse {
    pub dealer_id: String,
    pub degraded: bool,
    pub fields: Vec<FieldSlotResponse>,
    pub sections: Vec<SectionResponse>,
    pub can_manage_stock: bool,
}

/// API representation of a product table column.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/column-response.ts"
)]
pub struct ColumnResponse {
    pub field: String,
    pub label: String,
}

/// API representation of one product table page.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/product-table-response.ts"
)]
pub struct ProductTableResponse {
    pub dealer_id: String,
    pub degraded: bool,
    pub columns: Vec<ColumnResponse>,
    pub rows: Vec<Vec<FieldValueResponse>>,
    pub tab: String,
    pub search: String,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    #[ts(type = "number")]
    pub total_items: u64,
    pub sort_field: Option<String>,
    #[ts(type = "\"asc\" | \"desc\" | null")]
    pub sort_direction: Option<String>,
}
