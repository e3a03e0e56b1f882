//! Asset Catalog Module
//!
//! Models the asset lists a wallet manages: assets with per-chain
//! deployments, the flattened single-chain view the UI renders, and an
//! editable catalog with JSON import/export.

mod asset;

pub use asset::{Asset, AssetCatalog, AssetChainView, AssetNetwork};
