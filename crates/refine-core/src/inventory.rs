//! Offsetting a cost breakdown against materials already owned.

use serde::{Deserialize, Serialize};

use crate::engine::CostBreakdown;
use crate::error::CostError;
use crate::fixed::{Zeny, checked_add, checked_cost};

/// Materials the player already holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub material_a_owned: u64,
    #[serde(default)]
    pub material_b_owned: u64,
}

/// How the need for one material is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StockUsage {
    pub needed: u64,
    pub from_stock: u64,
    pub to_buy: u64,
}

impl StockUsage {
    fn cover(needed: u64, owned: u64) -> Self {
        let from_stock = needed.min(owned);
        Self {
            needed,
            from_stock,
            to_buy: needed - from_stock,
        }
    }
}

/// Gross cost of a breakdown, and what remains after using owned stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct InventoryPlan {
    pub material_a: StockUsage,
    pub material_b: StockUsage,
    pub gross_cost: Zeny,
    /// Market value of the stock consumed.
    pub stock_savings: Zeny,
    pub net_cost: Zeny,
}

impl InventoryPlan {
    /// Whether any owned stock is consumed.
    pub fn uses_stock(&self) -> bool {
        self.material_a.from_stock > 0 || self.material_b.from_stock > 0
    }
}

/// Apply owned stock to a breakdown.
///
/// Stock covers at most what the range needs; the surplus is left untouched.
/// Savings are valued at the breakdown's unit prices, so for an engine-built
/// breakdown the net cost never drops below the sum of base costs.
pub fn apply_inventory(
    breakdown: &CostBreakdown,
    inventory: &Inventory,
) -> Result<InventoryPlan, CostError> {
    let out_of_range = || CostError::InventoryOutOfRange {
        start_tier: breakdown.start_tier,
        target_tier: breakdown.target_tier,
    };

    let material_a = StockUsage::cover(breakdown.total_material_a, inventory.material_a_owned);
    let material_b = StockUsage::cover(breakdown.total_material_b, inventory.material_b_owned);

    let savings_a = checked_cost(breakdown.prices.material_a(), material_a.from_stock)
        .ok_or_else(out_of_range)?;
    let savings_b = checked_cost(breakdown.prices.material_b(), material_b.from_stock)
        .ok_or_else(out_of_range)?;
    let stock_savings = checked_add(savings_a, savings_b).ok_or_else(out_of_range)?;

    let net_cost = breakdown
        .total_cost
        .checked_sub(stock_savings)
        .filter(|net| *net >= Zeny::ZERO)
        .ok_or_else(out_of_range)?;

    Ok(InventoryPlan {
        material_a,
        material_b,
        gross_cost: breakdown.total_cost,
        stock_savings,
        net_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RefineCostEngine;
    use crate::price::UnitPrices;

    fn breakdown_4_to_7() -> CostBreakdown {
        // 4->7 needs 30 Ori/Elu and 6 equipment; base 790_000.
        let prices = UnitPrices::new(Zeny::from_num(100_000), Zeny::from_num(50_000)).unwrap();
        RefineCostEngine::normal()
            .compute_costs(4, 7, prices)
            .unwrap()
    }

    #[test]
    fn no_inventory_changes_nothing() {
        let b = breakdown_4_to_7();
        let plan = apply_inventory(&b, &Inventory::default()).unwrap();
        assert_eq!(plan.gross_cost, b.total_cost);
        assert_eq!(plan.net_cost, b.total_cost);
        assert_eq!(plan.stock_savings, Zeny::ZERO);
        assert_eq!(plan.material_a.to_buy, 30);
        assert_eq!(plan.material_b.to_buy, 6);
        assert!(!plan.uses_stock());
    }

    #[test]
    fn partial_stock_reduces_purchase() {
        let b = breakdown_4_to_7();
        let plan = apply_inventory(
            &b,
            &Inventory {
                material_a_owned: 25,
                material_b_owned: 2,
            },
        )
        .unwrap();
        assert_eq!(plan.material_a.from_stock, 25);
        assert_eq!(plan.material_a.to_buy, 5);
        assert_eq!(plan.material_b.from_stock, 2);
        assert_eq!(plan.material_b.to_buy, 4);
        assert_eq!(plan.stock_savings, Zeny::from_num(2_600_000));
        assert_eq!(plan.net_cost, b.total_cost - Zeny::from_num(2_600_000));
        assert!(plan.uses_stock());
    }

    #[test]
    fn surplus_stock_is_capped_at_need() {
        let b = breakdown_4_to_7();
        let plan = apply_inventory(
            &b,
            &Inventory {
                material_a_owned: 1_000,
                material_b_owned: 1_000,
            },
        )
        .unwrap();
        assert_eq!(plan.material_a.from_stock, 30);
        assert_eq!(plan.material_a.to_buy, 0);
        assert_eq!(plan.material_b.from_stock, 6);
        assert_eq!(plan.net_cost, b.total_base_cost);
    }

    #[test]
    fn empty_breakdown_has_empty_plan() {
        let plan = apply_inventory(
            &CostBreakdown::default(),
            &Inventory {
                material_a_owned: 10,
                material_b_owned: 10,
            },
        )
        .unwrap();
        assert_eq!(plan, InventoryPlan::default());
    }

    #[test]
    fn hand_built_breakdown_out_of_range_is_an_error() {
        let prices = UnitPrices::new(Zeny::MAX, Zeny::ZERO).unwrap();
        let huge = CostBreakdown {
            start_tier: 4,
            target_tier: 15,
            prices,
            total_cost: Zeny::MAX,
            total_material_a: u64::MAX,
            ..CostBreakdown::default()
        };
        let stock = Inventory {
            material_a_owned: u64::MAX,
            material_b_owned: 0,
        };
        assert_eq!(
            apply_inventory(&huge, &stock),
            Err(CostError::InventoryOutOfRange {
                start_tier: 4,
                target_tier: 15
            })
        );

        // Savings larger than the gross cost would leave a negative net.
        let inconsistent = CostBreakdown {
            prices: UnitPrices::new(Zeny::from_num(100), Zeny::ZERO).unwrap(),
            total_cost: Zeny::from_num(50),
            total_material_a: 1,
            ..CostBreakdown::default()
        };
        let one = Inventory {
            material_a_owned: 1,
            material_b_owned: 0,
        };
        assert!(apply_inventory(&inconsistent, &one).is_err());
    }
}
