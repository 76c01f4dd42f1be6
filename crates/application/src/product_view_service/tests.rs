use std::sync::Arc;

use dealerdesk_domain::{
    DealerPermissionSnapshot, DealerPermissions, DealerProduct, DealerProductInput, FieldCatalog,
    FieldGroup, FieldValue, MissingAllowListPolicy, ProductField, ProductTab,
    ProductTableViewState,
};

use super::{FieldDisplay, ProductViewService};

fn service() -> ProductViewService {
    ProductViewService::new(Arc::new(FieldCatalog::dealer_products()))
}

fn permissions(allowed: Option<&[&str]>, read: bool, update: bool) -> DealerPermissions {
    DealerPermissions::from_snapshot(
        DealerPermissionSnapshot {
            allowed_fields: allowed
                .map(|fields| fields.iter().map(|field| (*field).to_owned()).collect()),
            read_permissions_enabled: read,
            editable_fields: None,
            update_permissions_enabled: update,
        },
        MissingAllowListPolicy::AllowAll,
    )
}

fn product(name: &str, sku: &str, brand: &str, price: f64, stock: i64) -> DealerProduct {
    let result = DealerProduct::new(DealerProductInput {
        product_name: name.to_owned(),
        sku_code: sku.to_owned(),
        brand: Some(brand.to_owned()),
        selling_price: Some(price),
        mrp_with_gst: Some(price * 1.18),
        gst_percentage: Some(18.0),
        stock_quantity: stock,
        min_stock_level: Some(5),
        ..DealerProductInput::default()
    });
    assert!(result.is_ok());
    match result {
        Ok(product) => product,
        Err(error) => panic!("invalid fixture: {error}"),
    }
}

fn catalogue() -> Vec<DealerProduct> {
    vec![
        product("Brake Pad Set", "BRK-001", "Bosch", 999.0, 12),
        product("Oil Filter", "OIL-204", "Mann", 349.0, 3),
        product("Spark Plug", "SPK-310", "NGK", 189.0, 0),
        product("Brake Disc", "BRK-002", "Brembo", 2450.0, 40),
    ]
}

#[test]
fn render_replaces_hidden_fields_with_placeholder() {
    let view = service().render(
        &permissions(Some(&["sku_code", "brand"]), true, false),
        &product("Brake Pad Set", "BRK-001", "Bosch", 999.0, 12),
    );

    assert_eq!(
        view.field(ProductField::SkuCode).map(|slot| slot.display.clone()),
        Some(FieldDisplay::Value(FieldValue::Text("BRK-001".to_owned())))
    );
    assert_eq!(
        view.field(ProductField::SellingPrice).map(|slot| slot.display.clone()),
        Some(FieldDisplay::Restricted)
    );
    assert!(view.is_section_visible(FieldGroup::BasicInfo));
    assert!(!view.is_section_visible(FieldGroup::PricingAndStock));
    assert!(!view.can_manage_stock);
}

#[test]
fn single_pricing_field_opens_pricing_section() {
    let view = service().render(
        &permissions(Some(&["mrp_with_gst"]), true, true),
        &product("Brake Pad Set", "BRK-001", "Bosch", 1000.0, 12),
    );

    assert!(view.is_section_visible(FieldGroup::PricingAndStock));
    assert_eq!(
        view.field(ProductField::GstPercentage).map(|slot| slot.display.clone()),
        Some(FieldDisplay::Restricted)
    );
    assert!(view.field(ProductField::MrpWithGst).is_some_and(|slot| slot.editable));
    assert!(view.can_manage_stock);
}

#[test]
fn fallback_permissions_restrict_every_slot() {
    let view = service().render(
        &DealerPermissions::denied(),
        &product("Brake Pad Set", "BRK-001", "Bosch", 999.0, 12),
    );

    assert!(view.fields.iter().all(|slot| slot.display == FieldDisplay::Restricted));
    assert!(view.fields.iter().all(|slot| !slot.editable));
    assert!(view.sections.iter().all(|section| !section.visible));
}

#[test]
fn field_access_lists_every_catalog_entry() {
    let summary = service().field_access(&permissions(None, true, false));

    assert_eq!(summary.fields.len(), ProductField::all().len());
    assert!(summary.fields.iter().all(|entry| entry.visible));
    assert!(summary.fields.iter().all(|entry| !entry.editable));
    assert!(summary.sections.iter().all(|section| section.visible));
    assert!(!summary.can_manage);
}

#[test]
fn table_shows_only_visible_columns() {
    let page = service().list_products(
        &permissions(Some(&["product_name", "sku_code"]), true, false),
        &catalogue(),
        &ProductTableViewState::default(),
    );

    assert_eq!(
        page.columns,
        vec![ProductField::ProductName, ProductField::SkuCode]
    );
    assert_eq!(page.total_items, 4);
    assert!(page.rows.iter().all(|row| row.cells.len() == 2));
}

#[test]
fn search_ignores_hidden_fields() {
    let state = ProductTableViewState::default().with_search("bosch");

    let with_brand = service().list_products(
        &permissions(Some(&["product_name", "brand"]), true, false),
        &catalogue(),
        &state,
    );
    let without_brand = service().list_products(
        &permissions(Some(&["product_name"]), true, false),
        &catalogue(),
        &state,
    );

    assert_eq!(with_brand.total_items, 1);
    assert_eq!(without_brand.total_items, 0);
}

#[test]
fn sort_on_hidden_column_is_dropped() {
    let state = ProductTableViewState::default().with_sort(ProductField::SellingPrice);
    let page = service().list_products(
        &permissions(Some(&["product_name"]), true, false),
        &catalogue(),
        &state,
    );

    assert_eq!(page.state.sort(), None);
    assert_eq!(
        page.rows.first().map(|row| row.cells.clone()),
        Some(vec![FieldValue::Text("Brake Pad Set".to_owned())])
    );
}

#[test]
fn table_sorts_filters_and_paginates() {
    let state = ProductTableViewState::default()
        .with_tab(ProductTab::InStock)
        .with_sort(ProductField::SellingPrice)
        .with_sort(ProductField::SellingPrice);
    let page = service().list_products(
        &permissions(Some(&["sku_code", "selling_price"]), true, false),
        &catalogue(),
        &state,
    );

    assert_eq!(page.total_items, 2);
    assert_eq!(page.window.total_pages, 1);
    assert_eq!(
        page.rows.first().map(|row| row.cells.clone()),
        Some(vec![
            FieldValue::Text("BRK-002".to_owned()),
            FieldValue::Amount(2450.0),
        ])
    );
}

#[test]
fn stale_page_is_clamped_after_filtering() {
    let state = ProductTableViewState::default()
        .with_page(4, 40)
        .with_tab(ProductTab::All);
    let state = state.with_page(4, 40);
    let page = service().list_products(&permissions(None, true, false), &catalogue(), &state);

    assert_eq!(page.state.page(), 1);
    assert_eq!(page.rows.len(), 4);
}

#[test]
fn missing_values_sort_last_in_both_directions() {
    let mut products = catalogue();
    let unbranded = DealerProduct::new(DealerProductInput {
        product_name: "Wiper Blade".to_owned(),
        sku_code: "WPR-090".to_owned(),
        stock_quantity: 20,
        ..DealerProductInput::default()
    });
    let Ok(unbranded) = unbranded else {
        panic!("invalid fixture");
    };
    products.insert(0, unbranded);

    let ascending = ProductTableViewState::default().with_sort(ProductField::Brand);
    let descending = ascending.with_sort(ProductField::Brand);

    for state in [ascending, descending] {
        let page = service().list_products(&permissions(None, true, false), &products, &state);
        let brands: Vec<FieldValue> = page
            .rows
            .iter()
            .filter_map(|row| row.cells.get(2).cloned())
            .collect();
        assert_eq!(brands.len(), 5);
        assert_eq!(brands.last(), Some(&FieldValue::Empty));
    }
}
