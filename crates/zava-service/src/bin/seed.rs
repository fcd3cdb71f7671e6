//! # Seed Data Generator
//!
//! Populates a data directory with a sample catalogue for development.
//!
//! ## Usage
//! ```bash
//! # Seed the configured data directory (all sample stores)
//! cargo run -p zava-service --bin seed
//!
//! # Custom directory, first 3 stores only
//! cargo run -p zava-service --bin seed -- --data-dir ./data --stores 3
//! ```
//!
//! Everything goes through the services, so ids, SKUs and uniqueness are
//! exactly what a caller would get. Running it twice is safe: records that
//! already exist are reported as duplicates and skipped.

use std::env;
use std::path::PathBuf;

use zava_core::{NewProduct, NewStore};
use zava_service::logging::init_tracing;
use zava_service::{AppConfig, ErrorCode, ZavaInventory};

/// Sample stores: (name, city, country, address)
const STORES: &[(&str, &str, &str, &str)] = &[
    ("Zava Downtown", "Seattle", "USA", "1501 Pike Place"),
    ("Zava Bellevue", "Bellevue", "USA", "500 Bellevue Way NE"),
    ("Zava Tacoma", "Tacoma", "USA", "1938 Pacific Ave"),
    ("Zava Redmond", "Redmond", "USA", "16495 NE 74th St"),
    ("Zava Everett", "Everett", "USA", "2802 Colby Ave"),
    ("Zava Spokane", "Spokane", "USA", "808 W Main Ave"),
    ("Zava Online", "Seattle", "USA", "Warehouse 7, 4th Ave S"),
];

/// Sample products: (name, category, price, description)
const PRODUCTS: &[(&str, &str, f64, &str)] = &[
    ("Interior Latex Paint", "Paint", 34.99, "Low-VOC eggshell finish, 1 gallon"),
    ("Exterior Acrylic Paint", "Paint", 42.50, "Weather resistant satin, 1 gallon"),
    ("Primer and Sealer", "Paint", 24.99, "Stain blocking primer for walls and trim"),
    ("Angled Sash Brush", "Paint Supplies", 11.49, "2.5 inch nylon brush"),
    ("Roller Frame with Cover", "Paint Supplies", 9.99, "9 inch roller for smooth surfaces"),
    ("Painter's Tape", "Paint Supplies", 6.49, "Blue masking tape, 60 yards"),
    ("Cordless Drill", "Power Tools", 129.00, "20V brushless drill with two batteries"),
    ("Circular Saw", "Power Tools", 99.95, "7-1/4 inch blade, 15 amp"),
    ("Claw Hammer", "Hand Tools", 19.99, "16 oz fiberglass handle"),
    ("Tape Measure", "Hand Tools", 14.49, "25 ft with magnetic tip"),
    ("Wood Screws", "Hardware", 8.99, "#8 x 1-1/4 inch, box of 100"),
    ("Drywall Anchors", "Hardware", 5.79, "Self-drilling, pack of 25"),
    ("LED Work Light", "Lighting", 39.00, "Rechargeable, 1500 lumens"),
    ("Garden Hose", "Garden", 29.99, "50 ft kink-free hose"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut data_dir: Option<PathBuf> = None;
    let mut store_count = STORES.len();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--stores" | "-s" => {
                if i + 1 < args.len() {
                    store_count = args[i + 1].parse().unwrap_or(STORES.len()).min(STORES.len());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Zava Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <DIR>  Data directory (default: from config)");
                println!("  -s, --stores <N>      Number of sample stores (default: {})", STORES.len());
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let mut config = AppConfig::load_or_default(None);
    if data_dir.is_some() {
        config.storage.data_dir = data_dir;
    }
    init_tracing(&config.logging.filter);

    let data_config = config.data_config();
    println!("Zava Inventory Seed Data Generator");
    println!("==================================");
    println!("Data directory: {}", data_config.data_dir.display());
    println!("Stores:         {}", store_count);
    println!("Products:       {}", PRODUCTS.len());
    println!();

    let app = ZavaInventory::from_config(&config)?;

    let mut skipped = 0;
    for (name, city, country, address) in &STORES[..store_count] {
        match app.stores().add_store(NewStore::new(*name, *city, *country, *address)) {
            Ok(added) => println!("  + store {:>3}  {}", added.store.id, added.store.name),
            Err(e) if e.code == ErrorCode::Duplicate => skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    for (name, category, price, description) in PRODUCTS {
        let input = NewProduct::new(*name, *category, *price).description(*description);
        match app.products().add_product(input) {
            Ok(added) => println!("  + product {:>3}  {:<10} {}", added.product.id, added.product.sku, name),
            Err(e) if e.code == ErrorCode::Duplicate => skipped += 1,
            Err(e) => return Err(e.into()),
        }
    }

    // Stock every product in every store (deterministic quantities, some 0)
    let stores = app.stores().list_stores()?.stores;
    let products = app.products().list_products()?.products;
    let mut records = 0;
    for store in &stores {
        for entry in &products {
            let product = &entry.product;
            let quantity = (product.id * 7 + store.id * 13) % 60;
            match app.inventory().create_record(product.id, store.id, quantity) {
                Ok(_) => records += 1,
                Err(e) if e.code == ErrorCode::Duplicate => skipped += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    println!();
    println!("✓ {} inventory records created", records);
    if skipped > 0 {
        println!("⚠ {} existing records skipped", skipped);
    }

    Ok(())
}
