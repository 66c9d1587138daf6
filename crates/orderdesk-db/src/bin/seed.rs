//! # Seed Data Generator
//!
//! Populates the database with sample clients and products for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p orderdesk-db --bin seed
//!
//! # Specify database path
//! cargo run -p orderdesk-db --bin seed -- --db ./data/orderdesk.db
//!
//! # Also fulfill a few sample orders
//! cargo run -p orderdesk-db --bin seed -- --with-orders
//! ```
//!
//! Seeding is skipped when the database already holds clients or products,
//! so it is safe to run on every developer start.

use std::env;

use orderdesk_core::{Client, Product};
use orderdesk_db::{Database, DbConfig, FulfillmentOutcome};

/// Sample clients: name, email, phone, address.
const CLIENTS: &[(&str, &str, &str, &str)] = &[
    (
        "Ada Lovelace",
        "ada@example.com",
        "0123456789",
        "12 Analytical Row",
    ),
    (
        "Grace Hopper",
        "grace@example.com",
        "0987654321",
        "7 Compiler Court",
    ),
    (
        "Edsger Dijkstra",
        "edsger@example.com",
        "0112233445",
        "1 Shortest Path",
    ),
    (
        "Barbara Liskov",
        "barbara@example.com",
        "0556677889",
        "4 Substitution Square",
    ),
];

/// Sample products: name, description, price in cents, stock.
const PRODUCTS: &[(&str, &str, i64, i64)] = &[
    ("Office Chair", "Ergonomic, adjustable height", 12999, 25),
    ("Standing Desk", "Electric, memory presets", 44999, 10),
    ("Desk Lamp", "Warm LED, dimmable", 3499, 60),
    ("Monitor Arm", "Single arm, VESA mount", 7999, 40),
    ("Keyboard", "Tenkeyless, tactile switches", 8999, 35),
    ("Mouse Pad", "", 1299, 100),
    ("Cable Tray", "Under-desk, steel", 2499, 0),
    ("Footrest", "Adjustable tilt", 2999, 15),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./orderdesk_dev.db");
    let mut with_orders = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--with-orders" => {
                with_orders = true;
            }
            "--help" | "-h" => {
                println!("OrderDesk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./orderdesk_dev.db)");
                println!("      --with-orders  Fulfill a few sample orders after seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 OrderDesk Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing data
    let existing_clients = db.clients().find_all().await?.len();
    let existing_products = db.products().find_all().await?.len();
    if existing_clients > 0 || existing_products > 0 {
        println!(
            "⚠ Database already has {} clients and {} products",
            existing_clients, existing_products
        );
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding clients...");
    for (name, email, phone_number, address) in CLIENTS {
        db.clients()
            .insert(&Client {
                client_id: 0,
                name: name.to_string(),
                email: email.to_string(),
                phone_number: phone_number.to_string(),
                address: address.to_string(),
            })
            .await?;
    }
    println!("✓ Seeded {} clients", CLIENTS.len());

    println!("Seeding products...");
    for (name, description, price_cents, stock_quantity) in PRODUCTS {
        db.products()
            .insert(&Product {
                product_id: 0,
                name: name.to_string(),
                description: description.to_string(),
                price_cents: *price_cents,
                stock_quantity: *stock_quantity,
            })
            .await?;
    }
    println!("✓ Seeded {} products", PRODUCTS.len());

    if with_orders {
        println!();
        println!("Fulfilling sample orders...");

        let clients = db.clients().find_all().await?;
        let products = db.products().find_all().await?;
        let fulfillment = db.fulfillment();

        let mut fulfilled = 0;
        for (idx, client) in clients.iter().enumerate() {
            let product = &products[idx % products.len()];
            match fulfillment.fulfill(client, product, 1 + idx as i64).await? {
                FulfillmentOutcome::Completed { remaining_stock } => {
                    fulfilled += 1;
                    println!(
                        "  {} x{} for {} ({} left)",
                        product.name,
                        1 + idx,
                        client.name,
                        remaining_stock
                    );
                }
                FulfillmentOutcome::Rejected { reason } => {
                    println!("  {} for {}: {}", product.name, client.name, reason);
                }
            }
        }
        println!("✓ Fulfilled {} orders", fulfilled);
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
