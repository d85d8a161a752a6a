//! # Astra Shop CLI
//!
//! Composition root for the cart: wires a [`CartStore`] against the real
//! inventory API and file-backed storage, runs one operation, prints the
//! cart. The persisted cart survives between invocations, so a shopping
//! session looks like:
//!
//! ```text
//! $ astra add 42
//! $ astra add 42
//! $ astra set 42 5
//! $ astra show
//!   CART                                           1 item
//!   Shoe                      x5       $199.99   $999.95
//!   ──────────────────────────────────────────────────────
//!   TOTAL                                         $999.95
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Wire the CartStore collaborators (HTTP client, file storage, sink)
//! 4. Dispatch the subcommand and print the resulting cart

mod config;

use std::error::Error;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use astra_cart::{
    CartStore, FileStorage, HttpInventoryClient, NotificationSink, Severity,
};
use astra_core::Cart;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "astra", version, about = "Astra Shop cart")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the current cart
    Show,
    /// Add one unit of a product to the cart
    Add { product_id: u64 },
    /// Remove a product from the cart
    Remove { product_id: u64 },
    /// Set a product's quantity
    Set { product_id: u64, amount: i64 },
}

/// Routes cart alerts to the terminal, the CLI's stand-in for UI toasts.
struct StderrSink;

impl NotificationSink for StderrSink {
    fn notify(&self, _severity: Severity, message: &str) {
        eprintln!("! {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    info!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "starting");

    let inventory = Arc::new(HttpInventoryClient::new(config.api_url.as_str())?);
    let storage = Arc::new(FileStorage::new(&config.data_dir)?);
    let store = CartStore::new(
        inventory.clone(),
        inventory,
        storage,
        Arc::new(StderrSink),
    );

    match cli.command {
        Command::Show => {}
        Command::Add { product_id } => store.add_item(product_id).await,
        Command::Remove { product_id } => store.remove_item(product_id),
        Command::Set { product_id, amount } => store.set_quantity(product_id, amount).await,
    }

    print_cart(&store.cart());
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=astra=trace` - Show trace for astra crates only
/// - Default: WARN, so cart output stays clean
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Renders the cart as the storefront's cart panel would.
fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("  CART is empty");
        return;
    }

    println!(
        "  CART{:>50}",
        format!(
            "{} item{}",
            cart.item_count(),
            if cart.item_count() == 1 { "" } else { "s" }
        )
    );
    for item in cart.items() {
        println!(
            "  {:<24} x{:<4} {:>10} {:>12}",
            item.name,
            item.amount,
            item.unit_price().to_string(),
            item.line_total().to_string(),
        );
    }
    println!("  {}", "─".repeat(54));
    println!("  {:<30}{:>24}", "TOTAL", cart.subtotal().to_string());
}
