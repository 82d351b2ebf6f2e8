// market-client/examples/shopping_flow.rs
// Walk a full order through its lifecycle against a running order service:
// create, scan, close, then advance it at the cash desk.

use market_client::{CashierClient, NetworkHttpClient, OrderServiceApi, OrderSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Usage: {} <code> <cashier_email> <cashier_password>", args[0]);
        println!(
            "  Example: {} SKU1 ana@store.uy password123",
            args[0]
        );
        return Ok(());
    }

    let code = &args[1];
    let email = &args[2];
    let password = &args[3];

    let base_url =
        std::env::var("MARKET_API_URL").unwrap_or_else(|_| "http://localhost:3001".to_string());

    // ===== Shopper side =====
    let http = NetworkHttpClient::new(&base_url)?;
    let mut session = OrderSession::new(OrderServiceApi::new(http));

    session.start(None).await?;
    tracing::info!(order_id = %session.order().id, "Created draft order");

    let product = session.api().search_product(code).await?;
    tracing::info!(name = %product.name, price = product.price, "Found product");

    session.add_item(&product.code, 2, None).await?;
    tracing::info!(subtotal = session.order().subtotal, "Added to cart");

    let order_id = session.order().id.clone();
    session.close(Some("cash".into()), None).await?;
    tracing::info!(status = %session.order().status, "Order closed");

    // ===== Cash desk side =====
    let mut cashier = CashierClient::new(NetworkHttpClient::new(&base_url)?);
    cashier.login(email, password).await?;

    let order = cashier.get_order(&order_id).await?;
    tracing::info!(status = %order.status, total = order.total, "Order at the desk");

    let order = cashier.verify_order(&order_id).await?;
    tracing::info!(status = %order.status, "Verified");

    let order = cashier.mark_paid(&order_id).await?;
    tracing::info!(status = %order.status, "Paid");

    let order = cashier.mark_ready(&order_id).await?;
    tracing::info!(status = %order.status, "Ready for pickup");

    let order = cashier.mark_delivered(&order_id).await?;
    tracing::info!(status = %order.status, "Delivered");

    Ok(())
}
