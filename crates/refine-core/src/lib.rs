//! Refine Core -- cost engine for guaranteed equipment refining.
//!
//! Given market prices for the two consumed materials and a tier range, the
//! engine prices every step of the refine table inside that range and keeps
//! a running total.
//!
//! ```rust,ignore
//! use refine_core::{RefineCostEngine, UnitPrices, Zeny};
//!
//! let engine = RefineCostEngine::normal();
//! let prices = UnitPrices::new(Zeny::from_num(150_000), Zeny::from_num(50_000))?;
//! let breakdown = engine.compute_costs(4, 7, prices)?;
//! println!("total: {}", breakdown.total_cost);
//! ```
//!
//! # Key Types
//!
//! - [`table::TierTable`] -- validated, contiguous list of [`table::TierStep`]s.
//! - [`engine::RefineCostEngine`] -- the pure cost computation.
//! - [`price::UnitPrices`] -- validated prices; raw text goes through
//!   [`price::parse_price`].
//! - [`calculator::RefineCalculator`] -- recompute-on-change wrapper.
//! - [`inventory::apply_inventory`] -- offsets a breakdown with owned stock.
//! - [`fixed::Zeny`] -- Q64.64 fixed-point currency amount.

pub mod calculator;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod inventory;
pub mod price;
pub mod table;

pub use calculator::{Outcome, RefineCalculator};
pub use engine::{CostBreakdown, CostResult, RefineCostEngine};
pub use error::{CostError, PriceError, PriceField, TableError};
pub use fixed::Zeny;
pub use inventory::{Inventory, InventoryPlan, StockUsage, apply_inventory};
pub use price::{UnitPrices, parse_price};
pub use table::{NORMAL_COST, TierStep, TierTable};
