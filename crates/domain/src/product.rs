use std::str::FromStr;

use dealerdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::ProductField;

/// Listing status of a dealer product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Visible in the dealer storefront.
    #[default]
    Active,
    /// Hidden from the storefront.
    Inactive,
    /// Awaiting catalog approval.
    Draft,
}

impl ProductStatus {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "draft" => Ok(Self::Draft),
            _ => Err(AppError::Validation(format!(
                "unknown product status '{value}'"
            ))),
        }
    }
}

/// Dealer inventory record for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DealerProductInput")]
pub struct DealerProduct {
    product_name: NonEmptyString,
    sku_code: NonEmptyString,
    brand: Option<String>,
    category: Option<String>,
    description: Option<String>,
    hsn_code: Option<String>,
    mrp: Option<f64>,
    mrp_with_gst: Option<f64>,
    selling_price: Option<f64>,
    gst_percentage: Option<f64>,
    discount_percentage: Option<f64>,
    stock_quantity: i64,
    min_stock_level: Option<i64>,
    warehouse_location: Option<String>,
    status: ProductStatus,
}

/// Unvalidated dealer product fields.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DealerProductInput {
    /// Product display name.
    pub product_name: String,
    /// Stock keeping unit code.
    pub sku_code: String,
    /// Brand name.
    pub brand: Option<String>,
    /// Catalog category.
    pub category: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// HSN tax classification code.
    pub hsn_code: Option<String>,
    /// MRP before tax.
    pub mrp: Option<f64>,
    /// MRP including GST.
    pub mrp_with_gst: Option<f64>,
    /// Dealer selling price.
    pub selling_price: Option<f64>,
    /// GST rate in percent.
    pub gst_percentage: Option<f64>,
    /// Discount in percent.
    pub discount_percentage: Option<f64>,
    /// Units in stock.
    pub stock_quantity: i64,
    /// Reorder threshold.
    pub min_stock_level: Option<i64>,
    /// Warehouse location label.
    pub warehouse_location: Option<String>,
    /// Listing status.
    #[serde(default)]
    pub status: ProductStatus,
}

impl DealerProduct {
    /// Creates a validated dealer product.
    pub fn new(input: DealerProductInput) -> AppResult<Self> {
        for (name, value) in [
            ("mrp", input.mrp),
            ("mrp_with_gst", input.mrp_with_gst),
            ("selling_price", input.selling_price),
        ] {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(AppError::Validation(format!(
                    "{name} must be a non-negative amount"
                )));
            }
        }

        for (name, value) in [
            ("gst_percentage", input.gst_percentage),
            ("discount_percentage", input.discount_percentage),
        ] {
            if let Some(value) = value
                && !(0.0..=100.0).contains(&value)
            {
                return Err(AppError::Validation(format!(
                    "{name} must be between 0 and 100"
                )));
            }
        }

        if input.stock_quantity < 0 {
            return Err(AppError::Validation(
                "stock_quantity must be greater than or equal to zero".to_owned(),
            ));
        }

        if let Some(level) = input.min_stock_level
            && level < 0
        {
            return Err(AppError::Validation(
                "min_stock_level must be greater than or equal to zero".to_owned(),
            ));
        }

        Ok(Self {
            product_name: NonEmptyString::new(input.product_name)?,
            sku_code: NonEmptyString::new(input.sku_code)?,
            brand: normalize_optional(input.brand),
            category: normalize_optional(input.category),
            description: normalize_optional(input.description),
            hsn_code: normalize_optional(input.hsn_code),
            mrp: input.mrp,
            mrp_with_gst: input.mrp_with_gst,
            selling_price: input.selling_price,
            gst_percentage: input.gst_percentage,
            discount_percentage: input.discount_percentage,
            stock_quantity: input.stock_quantity,
            min_stock_level: input.min_stock_level,
            warehouse_location: normalize_optional(input.warehouse_location),
            status: input.status,
        })
    }

    /// Returns product display name.
    #[must_use]
    pub fn product_name(&self) -> &NonEmptyString {
        &self.product_name
    }

    /// Returns SKU code.
    #[must_use]
    pub fn sku_code(&self) -> &NonEmptyString {
        &self.sku_code
    }

    /// Returns units in stock.
    #[must_use]
    pub fn stock_quantity(&self) -> i64 {
        self.stock_quantity
    }

    /// Returns the reorder threshold.
    #[must_use]
    pub fn min_stock_level(&self) -> Option<i64> {
        self.min_stock_level
    }

    /// Returns listing status.
    #[must_use]
    pub fn status(&self) -> ProductStatus {
        self.status
    }
}

impl TryFrom<DealerProductInput> for DealerProduct {
    type Error = AppError;

    fn try_from(value: DealerProductInput) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Typed value read from a dealer product field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Free text.
    Text(String),
    /// Currency amount.
    Amount(f64),
    /// Percentage in the 0..=100 range.
    Percentage(f64),
    /// Unit count.
    Quantity(i64),
    /// Field has no value on this product.
    Empty,
}

impl ProductField {
    /// Reads this field from `product`.
    #[must_use]
    pub fn value_of(&self, product: &DealerProduct) -> FieldValue {
        match self {
            Self::ProductName => FieldValue::Text(product.product_name.as_str().to_owned()),
            Self::SkuCode => FieldValue::Text(product.sku_code.as_str().to_owned()),
            Self::Brand => text(product.brand.as_deref()),
            Self::Category => text(product.category.as_deref()),
            Self::Description => text(product.description.as_deref()),
            Self::HsnCode => text(product.hsn_code.as_deref()),
            Self::Mrp => amount(product.mrp),
            Self::MrpWithGst => amount(product.mrp_with_gst),
            Self::SellingPrice => amount(product.selling_price),
            Self::GstPercentage => percentage(product.gst_percentage),
            Self::DiscountPercentage => percentage(product.discount_percentage),
            Self::StockQuantity => FieldValue::Quantity(product.stock_quantity),
            Self::MinStockLevel => product
                .min_stock_level
                .map_or(FieldValue::Empty, FieldValue::Quantity),
            Self::WarehouseLocation => text(product.warehouse_location.as_deref()),
            Self::Status => FieldValue::Text(product.status.as_str().to_owned()),
        }
    }
}

fn text(value: Option<&str>) -> FieldValue {
    value.map_or(FieldValue::Empty, |value| FieldValue::Text(value.to_owned()))
}

fn amount(value: Option<f64>) -> FieldValue {
    value.map_or(FieldValue::Empty, FieldValue::Amount)
}

fn percentage(value: Option<f64>) -> FieldValue {
    value.map_or(FieldValue::Empty, FieldValue::Percentage)
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim().to_owned();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}
