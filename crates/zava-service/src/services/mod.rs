//! # Services Module
//!
//! One service per entity. Each call loads the collections it needs,
//! mutates, and saves; nothing is cached between calls.
//!
//! ## Available Services
//!
//! - [`ProductService`] - catalogue CRUD with per-store stock
//! - [`StoreService`] - store CRUD
//! - [`InventoryService`] - stock cells and the joined listings

mod inventory;
mod product;
mod store;

pub use inventory::InventoryService;
pub use product::ProductService;
pub use store::StoreService;
