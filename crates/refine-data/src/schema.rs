//! Serde data file structs for tier tables and calculation requests.
//!
//! These define the on-disk format. The loader converts them into
//! `refine-core` types, validating along the way.

use refine_core::{Inventory, TierStep};
use serde::Deserialize;

// ===========================================================================
// Tier tables
// ===========================================================================

/// One row of a tier table in a data file.
///
/// `to` may be omitted; it defaults to `from + 1`. Material fields also
/// accept the in-game names (`ori_elu`, `equipment`, `zeny`).
#[derive(Debug, Clone, Deserialize)]
pub struct TierStepData {
    pub from: u32,
    #[serde(default)]
    pub to: Option<u32>,
    #[serde(alias = "ori_elu")]
    pub material_a: u32,
    #[serde(alias = "equipment")]
    pub material_b: u32,
    #[serde(alias = "zeny")]
    pub base_cost: u64,
}

impl TierStepData {
    pub fn to_step(&self) -> TierStep {
        TierStep {
            from_tier: self.from,
            to_tier: self.to.unwrap_or_else(|| self.from.saturating_add(1)),
            material_a_quantity: self.material_a,
            material_b_quantity: self.material_b,
            base_cost: self.base_cost,
        }
    }
}

// ===========================================================================
// Requests
// ===========================================================================

/// A price as written in a data file: either a bare number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl PriceValue {
    /// Text handed to the price parser.
    pub fn as_input(&self) -> String {
        match self {
            PriceValue::Integer(v) => v.to_string(),
            PriceValue::Float(v) => v.to_string(),
            PriceValue::Text(s) => s.clone(),
        }
    }
}

/// A full calculation request, so a run can be driven from a file.
#[derive(Debug, Clone, Deserialize)]
pub struct RefineRequest {
    pub start_tier: u32,
    pub target_tier: u32,
    #[serde(default)]
    pub material_a_price: Option<PriceValue>,
    #[serde(default)]
    pub material_b_price: Option<PriceValue>,
    #[serde(default)]
    pub inventory: Inventory,
    /// Optional tier table file, relative to the request file.
    #[serde(default)]
    pub table: Option<String>,
}

impl RefineRequest {
    pub fn material_a_input(&self) -> Option<String> {
        self.material_a_price.as_ref().map(PriceValue::as_input)
    }

    pub fn material_b_input(&self) -> Option<String> {
        self.material_b_price.as_ref().map(PriceValue::as_input)
    }
}
