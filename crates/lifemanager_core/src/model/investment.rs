//! Investment holding entity.
//!
//! Profit/loss is derived on read (see `insights::portfolio`), never stored.

use super::record::{Collection, Entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentAsset {
    pub asset_name: String,
    pub quantity: f64,
    /// Price paid per unit.
    pub purchase_price: f64,
    /// Latest price per unit.
    pub current_value: f64,
    pub last_updated: DateTime<Utc>,
}

impl InvestmentAsset {
    pub fn new(
        asset_name: impl Into<String>,
        quantity: f64,
        purchase_price: f64,
        current_value: f64,
    ) -> Self {
        Self {
            asset_name: asset_name.into(),
            quantity,
            purchase_price,
            current_value,
            last_updated: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvestmentPatch {
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl InvestmentPatch {
    /// Patch for a price refresh at `at`.
    pub fn reprice(current_value: f64, at: DateTime<Utc>) -> Self {
        Self {
            current_value: Some(current_value),
            last_updated: Some(at),
            ..Self::default()
        }
    }
}

impl Entity for InvestmentAsset {
    const COLLECTION: Collection = Collection::Investments;
    type Patch = InvestmentPatch;

    fn apply_patch(&mut self, patch: InvestmentPatch) {
        if let Some(asset_name) = patch.asset_name {
            self.asset_name = asset_name;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(purchase_price) = patch.purchase_price {
            self.purchase_price = purchase_price;
        }
        if let Some(current_value) = patch.current_value {
            self.current_value = current_value;
        }
        if let Some(last_updated) = patch.last_updated {
            self.last_updated = last_updated;
        }
    }
}
