use std::str::FromStr;

use dealerdesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Known dealer product fields that can be permissioned individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    /// Product display name.
    ProductName,
    /// Stock keeping unit code.
    SkuCode,
    /// Brand name.
    Brand,
    /// Catalog category.
    Category,
    /// Long-form description.
    Description,
    /// HSN tax classification code.
    HsnCode,
    /// Maximum retail price before tax.
    Mrp,
    /// Maximum retail price including GST.
    MrpWithGst,
    /// Dealer selling price.
    SellingPrice,
    /// GST rate applied to the product.
    GstPercentage,
    /// Dealer discount off MRP.
    DiscountPercentage,
    /// Units currently in stock.
    StockQuantity,
    /// Reorder threshold.
    MinStockLevel,
    /// Warehouse bin or location label.
    WarehouseLocation,
    /// Listing status.
    Status,
}

impl ProductField {
    /// Returns the stable wire name used in allow-lists.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductName => "product_name",
            Self::SkuCode => "sku_code",
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Description => "description",
            Self::HsnCode => "hsn_code",
            Self::Mrp => "mrp",
            Self::MrpWithGst => "mrp_with_gst",
            Self::SellingPrice => "selling_price",
            Self::GstPercentage => "gst_percentage",
            Self::DiscountPercentage => "discount_percentage",
            Self::StockQuantity => "stock_quantity",
            Self::MinStockLevel => "min_stock_level",
            Self::WarehouseLocation => "warehouse_location",
            Self::Status => "status",
        }
    }

    /// Returns the default UI label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductName => "Product Name",
            Self::SkuCode => "SKU Code",
            Self::Brand => "Brand",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::HsnCode => "HSN Code",
            Self::Mrp => "MRP",
            Self::MrpWithGst => "MRP (incl. GST)",
            Self::SellingPrice => "Selling Price",
            Self::GstPercentage => "GST %",
            Self::DiscountPercentage => "Discount %",
            Self::StockQuantity => "Stock Quantity",
            Self::MinStockLevel => "Min Stock Level",
            Self::WarehouseLocation => "Warehouse Location",
            Self::Status => "Status",
        }
    }

    /// Returns all known product fields in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[ProductField] = &[
            ProductField::ProductName,
            ProductField::SkuCode,
            ProductField::Brand,
            ProductField::Category,
            ProductField::Description,
            ProductField::HsnCode,
            ProductField::Mrp,
            ProductField::MrpWithGst,
            ProductField::SellingPrice,
            ProductField::GstPercentage,
            ProductField::DiscountPercentage,
            ProductField::StockQuantity,
            ProductField::MinStockLevel,
            ProductField::WarehouseLocation,
            ProductField::Status,
        ];

        ALL
    }
}

impl FromStr for ProductField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown product field '{value}'")))
    }
}

/// UI section that aggregates related product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    /// Identity and classification fields.
    BasicInfo,
    /// Price, tax and stock figures.
    PricingAndStock,
    /// Warehouse details.
    Logistics,
}

impl FieldGroup {
    /// Returns stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BasicInfo => "basic_info",
            Self::PricingAndStock => "pricing_and_stock",
            Self::Logistics => "logistics",
        }
    }

    /// Returns the section heading.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicInfo => "Basic Information",
            Self::PricingAndStock => "Pricing & Stock",
            Self::Logistics => "Logistics",
        }
    }

    /// Returns all groups in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::BasicInfo, Self::PricingAndStock, Self::Logistics]
    }
}

impl FromStr for FieldGroup {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "basic_info" => Ok(Self::BasicInfo),
            "pricing_and_stock" => Ok(Self::PricingAndStock),
            "logistics" => Ok(Self::Logistics),
            _ => Err(AppError::Validation(format!(
                "unknown field group '{value}'"
            ))),
        }
    }
}
