// src/application/mod.rs
pub mod analyzer;
pub mod coin_cataloguer;
pub mod coin_deleter;
pub mod coin_lister;
pub mod coin_viewer;

pub use analyzer::CoinAnalyzer;
pub use coin_cataloguer::{CoinCataloguer, CoinRepository};
pub use coin_deleter::CoinDeleter;
pub use coin_lister::CoinLister;
pub use coin_viewer::CoinViewer;
