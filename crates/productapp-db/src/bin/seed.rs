//! # Seed Data Loader
//!
//! Populates an empty database with the sample catalogue used during
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by PRODUCTAPP_DB_PATH (default ./productapp.db)
//! cargo run -p productapp-db --bin seed
//!
//! # Specify database path
//! cargo run -p productapp-db --bin seed -- --db ./data/products.db
//! ```
//!
//! The catalogue is printed as JSON once seeding is done.

use std::env;

use productapp_core::validation::validate_product_create;
use productapp_core::ProductCreate;
use productapp_db::{Database, DbConfig, ProductRepository};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample products: three for one store, one for another.
const SAMPLE_PRODUCTS: &[(&str, f64, f64, &str)] = &[
    ("AirFryer", 3000.0, 22.0, "ABC TECH"),
    ("Ütü", 1500.0, 10.0, "ABC TECH"),
    ("Çamaşır Makinesi", 10000.0, 15.0, "ABC TECH"),
    ("Lambader", 2000.0, 0.0, "Dekorasyon Sarayı"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut config = DbConfig::from_env()?;

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    config.database_path = args[i + 1].clone().into();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("productapp seed data loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: $PRODUCTAPP_DB_PATH or ./productapp.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = %other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let db = Database::new(config).await?;
    let repo = db.products();

    let existing = repo.count().await?;
    if existing > 0 {
        warn!(existing, "Database already has products, skipping seed");
    } else {
        for &(name, price, discount, store) in SAMPLE_PRODUCTS {
            let product = ProductCreate::new(name, price, discount, store);
            validate_product_create(&product)?;
            repo.add_product(&product).await?;
        }
        info!(count = SAMPLE_PRODUCTS.len(), "Seed complete");
    }

    let catalogue = repo.try_get_all_products().await?;
    println!("{}", serde_json::to_string_pretty(&catalogue)?);

    db.close().await;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,productapp=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
