//! Asset catalog types.
//!
//! Wallet asset lists ship as JSON documents; this module models the
//! entries, the per-chain flattening the UI consumes, and an editable
//! catalog with the add/replace/remove operations of an asset form.

use crate::base::types::{is_b256, ChainId};
use serde::{Deserialize, Serialize};

/// One network deployment of an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetNetwork {
    /// Chain the deployment lives on.
    pub chain_id: ChainId,
    /// On-chain asset identifier, canonically a B256 string.
    pub asset_id: String,
    /// Display decimals for amounts of this asset.
    pub decimals: u8,
}

/// A wallet asset and its per-chain deployments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub networks: Vec<AssetNetwork>,
}

/// Flattened view of an asset on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetChainView<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub asset_id: &'a str,
    pub decimals: u8,
}

impl Asset {
    /// Returns the flattened view for `chain_id`, if the asset is deployed
    /// there.
    pub fn for_chain(&self, chain_id: ChainId) -> Option<AssetChainView<'_>> {
        self.networks
            .iter()
            .find(|network| network.chain_id == chain_id)
            .map(|network| AssetChainView {
                name: &self.name,
                symbol: &self.symbol,
                asset_id: &network.asset_id,
                decimals: network.decimals,
            })
    }

    /// True when every deployment carries a canonical B256 asset id.
    pub fn canonical(&self) -> bool {
        self.networks
            .iter()
            .all(|network| is_b256(&network.asset_id))
    }
}

/// Editable, ordered asset catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
}

impl AssetCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON array of assets.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the catalog back to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Appends an asset to the catalog.
    pub fn push(&mut self, asset: Asset) {
        self.assets.push(asset);
    }

    /// Replaces the asset at `index`, returning the previous entry.
    ///
    /// Out-of-range indices leave the catalog untouched.
    pub fn replace(&mut self, index: usize, asset: Asset) -> Option<Asset> {
        let slot = self.assets.get_mut(index)?;
        Some(std::mem::replace(slot, asset))
    }

    /// Removes and returns the asset at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Asset> {
        if index < self.assets.len() {
            Some(self.assets.remove(index))
        } else {
            None
        }
    }

    /// Returns the asset at `index`.
    pub fn get(&self, index: usize) -> Option<&Asset> {
        self.assets.get(index)
    }

    /// Number of assets in the catalog.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True when the catalog holds no assets.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Iterates the catalog in order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }
}
