//! Property-based tests for the refine cost engine.
//!
//! Uses proptest to generate tier ranges and prices, then verify the
//! structural invariants of every breakdown.

use proptest::prelude::*;
use refine_core::*;

// ===========================================================================
// Generators
// ===========================================================================

/// Tier bounds, including values below and above the shipped table.
fn arb_tier() -> impl Strategy<Value = u32> {
    0..20u32
}

/// Prices in whole zeny up to ten billion, plus a fractional part in 1/4ths.
fn arb_price() -> impl Strategy<Value = Zeny> {
    (0..10_000_000_000i64, 0..4i64).prop_map(|(whole, quarters)| {
        Zeny::from_num(whole) + Zeny::from_num(quarters) / Zeny::from_num(4)
    })
}

fn arb_prices() -> impl Strategy<Value = UnitPrices> {
    (arb_price(), arb_price()).prop_map(|(a, b)| UnitPrices::new(a, b).unwrap())
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Same inputs, same output.
    #[test]
    fn deterministic(start in arb_tier(), target in arb_tier(), prices in arb_prices()) {
        let engine = RefineCostEngine::normal();
        let a = engine.compute_costs(start, target, prices).unwrap();
        let b = engine.compute_costs(start, target, prices).unwrap();
        prop_assert_eq!(a, b);
    }

    /// cumulative[i] == cumulative[i-1] + step_total[i], starting from zero.
    #[test]
    fn cumulative_is_additive(start in arb_tier(), target in arb_tier(), prices in arb_prices()) {
        let out = RefineCostEngine::normal().compute_costs(start, target, prices).unwrap();
        let mut running = Zeny::ZERO;
        for r in &out.results {
            running += r.step_total_cost;
            prop_assert_eq!(r.cumulative_cost, running);
            prop_assert_eq!(
                r.step_total_cost,
                r.base_cost() + r.material_a_cost + r.material_b_cost
            );
        }
        prop_assert_eq!(out.total_cost, running);
    }

    /// Cumulative cost strictly increases when every step costs something,
    /// and results stay in ascending table order.
    #[test]
    fn cumulative_is_monotonic(start in arb_tier(), target in arb_tier(), prices in arb_prices()) {
        let out = RefineCostEngine::normal().compute_costs(start, target, prices).unwrap();
        for pair in out.results.windows(2) {
            prop_assert!(pair[1].from_tier() > pair[0].from_tier());
            prop_assert_eq!(pair[1].from_tier(), pair[0].to_tier());
            if pair[1].step_total_cost > Zeny::ZERO {
                prop_assert!(pair[1].cumulative_cost > pair[0].cumulative_cost);
            } else {
                prop_assert!(pair[1].cumulative_cost >= pair[0].cumulative_cost);
            }
        }
    }

    /// With zero prices each step costs exactly its base fee.
    #[test]
    fn zero_price_identity(start in arb_tier(), target in arb_tier()) {
        let out = RefineCostEngine::normal()
            .compute_costs(start, target, UnitPrices::default())
            .unwrap();
        for r in &out.results {
            prop_assert_eq!(r.step_total_cost, r.base_cost());
        }
        prop_assert_eq!(out.total_cost, out.total_base_cost);
    }

    /// Every selected step lies inside the requested range.
    #[test]
    fn range_is_respected(start in arb_tier(), target in arb_tier(), prices in arb_prices()) {
        let out = RefineCostEngine::normal().compute_costs(start, target, prices).unwrap();
        for r in &out.results {
            prop_assert!(r.from_tier() >= start);
            prop_assert!(r.to_tier() <= target);
        }
        if target <= start {
            prop_assert!(out.is_empty());
            prop_assert_eq!(out.total_cost, Zeny::ZERO);
        }
    }

    /// Unit totals are the sums of the selected quantities.
    #[test]
    fn unit_totals_match_results(start in arb_tier(), target in arb_tier(), prices in arb_prices()) {
        let out = RefineCostEngine::normal().compute_costs(start, target, prices).unwrap();
        let a: u64 = out.results.iter().map(|r| u64::from(r.step.material_a_quantity)).sum();
        let b: u64 = out.results.iter().map(|r| u64::from(r.step.material_b_quantity)).sum();
        prop_assert_eq!(out.total_material_a, a);
        prop_assert_eq!(out.total_material_b, b);
    }

    /// Owned stock never raises the bill nor pushes it below the base fees.
    #[test]
    fn inventory_bounds(
        start in arb_tier(),
        target in arb_tier(),
        prices in arb_prices(),
        owned_a in 0..5_000u64,
        owned_b in 0..500u64,
    ) {
        let out = RefineCostEngine::normal().compute_costs(start, target, prices).unwrap();
        let plan = apply_inventory(&out, &Inventory { material_a_owned: owned_a, material_b_owned: owned_b }).unwrap();
        prop_assert!(plan.net_cost <= plan.gross_cost);
        prop_assert!(plan.net_cost >= out.total_base_cost);
        prop_assert_eq!(plan.material_a.from_stock + plan.material_a.to_buy, out.total_material_a);
        prop_assert_eq!(plan.material_b.from_stock + plan.material_b.to_buy, out.total_material_b);
    }
}
