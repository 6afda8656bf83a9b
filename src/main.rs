use rust_decimal_macros::dec;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

mod domain;
mod insights;
mod listing;
mod store;
mod utils;

use domain::order::{EditingSession, OrderStatus, PaymentMethod, PaymentStatus};
use domain::product::{CatalogSnapshot, Product, StockStatus};
use domain::supplier::{purchase_history, Supplier};
use insights::{
    low_stock_report, orders_by_status, products_by_supplier, sales_by_period,
    top_selling_products, DashboardSnapshot, SalesPeriod,
};
use listing::{filter_page, InventoryFilter, OrderFilter, PageRequest, ProductFilter, SupplierFilter};
use store::{InMemoryOrderStore, OrderStore};
use utils::{format_date, format_date_time, format_money};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,opsdesk=debug")),
        )
        .init();

    tracing::info!("🚀 Starting opsdesk business-operations console demo");

    // === 1. Seed the supplier and product catalog ===
    let acme = Supplier::new(
        Uuid::new_v4(),
        "Acme Industrial",
        "20100011122",
        "sales@acme.example",
        "Main St 100",
    );
    let globex = Supplier::new(
        Uuid::new_v4(),
        "Globex Trading",
        "20599988877",
        "contact@globex.example",
        "Harbor Rd 7",
    );

    let mut products = vec![
        Product::new(
            Uuid::new_v4(),
            "HW-001",
            "Steel Widget",
            "Hardware",
            24,
            dec!(10.00),
            Some(acme.id),
        )?,
        Product::new(
            Uuid::new_v4(),
            "HW-002",
            "Brass Fitting",
            "Hardware",
            4,
            dec!(3.75),
            Some(acme.id),
        )?,
        Product::new(
            Uuid::new_v4(),
            "EL-001",
            "Power Cable",
            "Electrical",
            60,
            dec!(7.20),
            Some(globex.id),
        )?,
    ];
    let widget_id = products[0].id;
    let cable_id = products[2].id;

    // === 2. New-order editing session ===
    let store = InMemoryOrderStore::new();
    let catalog = CatalogSnapshot::from_products(&products);

    let mut session = EditingSession::start(catalog);
    {
        let draft = session.draft_mut();
        draft.customer_name = "Maria Lopez".to_string();
        draft.shipping.address = "Elm St 42".to_string();
        draft.shipping.method = "Courier".to_string();
    }
    session.add_line(widget_id, 2)?;
    session.add_line(cable_id, 1)?;
    // Repeat add merges into the existing widget line.
    session.add_line(widget_id, 3)?;
    session.remove_line(cable_id)?;

    // The order number is still missing, so the first submit is rejected.
    if let Err(e) = session.submit(&store).await {
        tracing::warn!("submit rejected: {e}");
    }
    session.draft_mut().order_number = "ORD-1001".to_string();
    tracing::debug!(state = ?session.state(), "retrying submit");
    let first_order = session.submit(&store).await?;
    tracing::info!(
        order_number = %first_order.order_number,
        total = %format_money(first_order.final_price),
        "✅ Order created"
    );

    // === 3. Edit the order after a catalog price change ===
    // Re-adding the widget refreshes its line to the current price.
    products[0].update_price(dec!(11.50))?;
    let fresh_catalog = CatalogSnapshot::from_products(&products);

    let mut edit = EditingSession::edit(&first_order, fresh_catalog);
    edit.add_line(widget_id, 1)?;
    let first_order = edit.submit(&store).await?;
    tracing::info!(
        order_number = %first_order.order_number,
        total = %format_money(first_order.final_price),
        "✅ Order updated at current catalog pricing"
    );

    // === 4. A second order, paid by card and completed via the inline menu ===
    let mut second = EditingSession::start(CatalogSnapshot::from_products(&products));
    second.draft_mut().order_number = "ORD-1002".to_string();
    second.draft_mut().customer_name = "Ravi Patel".to_string();
    second.draft_mut().payment_status = PaymentStatus::Paid;
    second.draft_mut().payment_method = PaymentMethod::CreditCard;
    second.add_line(cable_id, 4)?;
    let second_order = second.submit(&store).await?;
    let second_order = store
        .change_status(second_order.id, OrderStatus::Completed)
        .await?;
    tracing::info!(
        order_number = %second_order.order_number,
        date = %format_date(second_order.order_date),
        updated = %format_date_time(second_order.updated_at),
        "✅ Order completed"
    );

    // Fulfillment draws the sold units down from stock.
    for line in &second_order.line_items {
        if let Some(product) = products.iter_mut().find(|p| p.id == line.product_id) {
            product.decrease_stock(line.quantity)?;
        }
    }

    // === 5. List screens: filter + paginate ===
    let orders = store.list().await?;
    let order_page = filter_page(
        &orders,
        &OrderFilter {
            search: "ord-".to_string(),
            ..Default::default()
        },
        &PageRequest::first(5),
    );
    tracing::info!(
        matching = order_page.total_items,
        page = order_page.current_page,
        pages = order_page.total_pages,
        "📋 Orders listing"
    );

    let hardware_page = filter_page(
        &products,
        &ProductFilter {
            classification: Some("Hardware".to_string()),
            ..Default::default()
        },
        &PageRequest::first(10),
    );
    tracing::info!(matching = hardware_page.total_items, "🔩 Hardware products");

    let low_stock_page = filter_page(
        &products,
        &InventoryFilter {
            stock_status: Some(StockStatus::Low),
            ..Default::default()
        },
        &PageRequest::first(10),
    );
    for product in &low_stock_page.items {
        tracing::warn!(code = %product.code, stock = product.stock, "⚠️ Low stock");
    }

    let suppliers = vec![acme.clone(), globex.clone()];
    let supplier_page = filter_page(
        &suppliers,
        &SupplierFilter {
            search: "acme".to_string(),
        },
        &PageRequest::first(5),
    );
    tracing::info!(matching = supplier_page.total_items, "🏭 Supplier search");

    // === 6. Dashboard and reports ===
    let dashboard = DashboardSnapshot::compute(&orders, &products);
    tracing::info!(
        total_orders = dashboard.stats.total_orders,
        revenue = %format_money(dashboard.stats.total_revenue),
        stock_units = dashboard.stats.total_stock,
        low_stock = dashboard.stats.low_stock_items,
        "📊 Dashboard"
    );

    for row in orders_by_status(&orders) {
        tracing::info!(status = ?row.status, orders = row.orders, "orders by status");
    }
    for row in top_selling_products(&orders, &products) {
        tracing::info!(product = %row.name, sold = row.quantity_sold, "top seller");
    }
    for row in products_by_supplier(&products, &suppliers) {
        tracing::info!(supplier = %row.supplier, products = row.products, "products by supplier");
    }
    for row in sales_by_period(&orders, SalesPeriod::Month) {
        tracing::info!(period = %row.period, sales = %format_money(row.sales), "monthly sales");
    }
    for product in low_stock_report(&products) {
        tracing::info!(product = %product.name, stock = product.stock, "low stock report row");
    }
    let acme_history = purchase_history(acme.id, &orders, &products);
    tracing::info!(
        supplier = %acme.company_name,
        orders = acme_history.len(),
        "supplier purchase history"
    );

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
