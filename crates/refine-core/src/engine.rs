//! The refine cost engine.
//!
//! [`RefineCostEngine::compute_costs`] is a pure function of its inputs and
//! the immutable [`TierTable`]: it selects the steps inside the requested
//! tier range, prices each one, and accumulates a running total in table
//! order.

use serde::Serialize;

use crate::error::CostError;
use crate::fixed::{Zeny, checked_add, checked_cost};
use crate::price::UnitPrices;
use crate::table::{TierStep, TierTable};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A priced refine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostResult {
    #[serde(flatten)]
    pub step: TierStep,
    /// `unit price A × material_a_quantity`.
    pub material_a_cost: Zeny,
    /// `unit price B × material_b_quantity`.
    pub material_b_cost: Zeny,
    /// `base_cost + material_a_cost + material_b_cost`.
    pub step_total_cost: Zeny,
    /// Sum of `step_total_cost` over this and every earlier step.
    pub cumulative_cost: Zeny,
}

impl CostResult {
    pub fn from_tier(&self) -> u32 {
        self.step.from_tier
    }

    pub fn to_tier(&self) -> u32 {
        self.step.to_tier
    }

    pub fn base_cost(&self) -> Zeny {
        Zeny::from_num(self.step.base_cost)
    }
}

/// Ordered step results plus the aggregates a consumer displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CostBreakdown {
    pub start_tier: u32,
    pub target_tier: u32,
    pub prices: UnitPrices,
    pub results: Vec<CostResult>,
    /// Cumulative cost of the last step; zero when no step was selected.
    pub total_cost: Zeny,
    pub total_base_cost: Zeny,
    pub total_material_a: u64,
    pub total_material_b: u64,
}

impl CostBreakdown {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn last(&self) -> Option<&CostResult> {
        self.results.last()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Computes refine costs against a fixed tier table.
#[derive(Debug, Clone, Default)]
pub struct RefineCostEngine {
    table: TierTable,
}

impl RefineCostEngine {
    pub fn new(table: TierTable) -> Self {
        Self { table }
    }

    /// Engine over the built-in "Normal Cost" table.
    pub fn normal() -> Self {
        Self::new(TierTable::normal())
    }

    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Price every step between `start_tier` and `target_tier`.
    ///
    /// Steps are selected with [`TierTable::select`]. An empty selection is
    /// not an error: it yields an empty breakdown with zero aggregates.
    pub fn compute_costs(
        &self,
        start_tier: u32,
        target_tier: u32,
        prices: UnitPrices,
    ) -> Result<CostBreakdown, CostError> {
        let mut breakdown = CostBreakdown {
            start_tier,
            target_tier,
            prices,
            ..CostBreakdown::default()
        };

        let mut cumulative = Zeny::ZERO;
        for step in self.table.select(start_tier, target_tier) {
            let priced = price_step(step, &prices, cumulative)?;
            cumulative = priced.cumulative_cost;

            breakdown.total_base_cost += priced.base_cost();
            breakdown.total_material_a += u64::from(step.material_a_quantity);
            breakdown.total_material_b += u64::from(step.material_b_quantity);
            breakdown.results.push(priced);
        }
        breakdown.total_cost = cumulative;

        log::debug!(
            "refine +{start_tier} -> +{target_tier}: {} steps, total {}",
            breakdown.results.len(),
            breakdown.total_cost
        );

        Ok(breakdown)
    }

    /// Validate raw price text and compute.
    ///
    /// If either price is missing or invalid the engine refuses to compute
    /// and returns [`CostError::InvalidPriceInput`].
    pub fn compute_from_input(
        &self,
        start_tier: u32,
        target_tier: u32,
        material_a_price: Option<&str>,
        material_b_price: Option<&str>,
    ) -> Result<CostBreakdown, CostError> {
        let prices = UnitPrices::parse(material_a_price, material_b_price).inspect_err(|e| {
            log::warn!("refusing to compute refine cost: {e}");
        })?;
        self.compute_costs(start_tier, target_tier, prices)
    }
}

fn price_step(
    step: &TierStep,
    prices: &UnitPrices,
    previous_cumulative: Zeny,
) -> Result<CostResult, CostError> {
    let overflow = || CostError::CostOverflow {
        from_tier: step.from_tier,
        to_tier: step.to_tier,
    };

    let base = Zeny::checked_from_num(step.base_cost).ok_or_else(overflow)?;
    let material_a_cost = checked_cost(prices.material_a(), u64::from(step.material_a_quantity))
        .ok_or_else(overflow)?;
    let material_b_cost = checked_cost(prices.material_b(), u64::from(step.material_b_quantity))
        .ok_or_else(overflow)?;
    let step_total_cost = checked_add(base, material_a_cost)
        .and_then(|t| checked_add(t, material_b_cost))
        .ok_or_else(overflow)?;
    let cumulative_cost = checked_add(previous_cumulative, step_total_cost).ok_or_else(overflow)?;

    Ok(CostResult {
        step: *step,
        material_a_cost,
        material_b_cost,
        step_total_cost,
        cumulative_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PriceError, PriceField};

    fn zeny(v: i64) -> Zeny {
        Zeny::from_num(v)
    }

    fn prices(a: i64, b: i64) -> UnitPrices {
        UnitPrices::new(zeny(a), zeny(b)).unwrap()
    }

    #[test]
    fn single_step_scenario() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(4, 5, prices(150_000, 50_000)).unwrap();

        assert_eq!(out.len(), 1);
        let r = &out.results[0];
        assert_eq!(r.from_tier(), 4);
        assert_eq!(r.to_tier(), 5);
        assert_eq!(r.material_a_cost, zeny(750_000));
        assert_eq!(r.material_b_cost, zeny(50_000));
        assert_eq!(r.step_total_cost, zeny(900_000));
        assert_eq!(r.cumulative_cost, zeny(900_000));
        assert_eq!(out.total_cost, zeny(900_000));
        assert_eq!(out.total_material_a, 5);
        assert_eq!(out.total_material_b, 1);
    }

    #[test]
    fn two_step_scenario() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(4, 6, prices(100_000, 0)).unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out.results[0].material_a_cost, zeny(500_000));
        assert_eq!(out.results[0].step_total_cost, zeny(600_000));
        assert_eq!(out.results[0].cumulative_cost, zeny(600_000));
        assert_eq!(out.results[1].material_a_cost, zeny(1_000_000));
        assert_eq!(out.results[1].step_total_cost, zeny(1_220_000));
        assert_eq!(out.results[1].cumulative_cost, zeny(1_820_000));
        assert_eq!(out.total_cost, zeny(1_820_000));
        assert_eq!(out.total_base_cost, zeny(320_000));
        assert_eq!(out.results[1].material_b_cost, Zeny::ZERO);
    }

    #[test]
    fn equal_tiers_yield_empty_breakdown() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(7, 7, prices(1, 1)).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.total_cost, Zeny::ZERO);
        assert_eq!(out.total_material_a, 0);
        assert_eq!(out.total_material_b, 0);
    }

    #[test]
    fn range_start_excludes_lower_steps() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(5, 6, prices(1, 1)).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out.results.iter().all(|r| r.from_tier() != 4));
    }

    #[test]
    fn partially_overlapping_range_keeps_only_inner_steps() {
        let engine = RefineCostEngine::normal();
        // +2 is below the table, +16 above it: only whole steps inside count.
        let out = engine.compute_costs(2, 6, prices(0, 0)).unwrap();
        let froms: Vec<u32> = out.results.iter().map(|r| r.from_tier()).collect();
        assert_eq!(froms, vec![4, 5]);
        let out = engine.compute_costs(13, 16, prices(0, 0)).unwrap();
        let froms: Vec<u32> = out.results.iter().map(|r| r.from_tier()).collect();
        assert_eq!(froms, vec![13, 14]);
    }

    #[test]
    fn custom_table_is_used() {
        let table = TierTable::new(vec![
            TierStep::new(0, 1, 0, 10),
            TierStep::new(1, 2, 1, 20),
        ])
        .unwrap();
        let engine = RefineCostEngine::new(table);
        let out = engine.compute_costs(0, 2, prices(5, 100)).unwrap();
        assert_eq!(out.results[0].step_total_cost, zeny(15));
        assert_eq!(out.results[1].step_total_cost, zeny(130));
        assert_eq!(out.total_cost, zeny(145));
    }

    #[test]
    fn full_table_total() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(4, 15, prices(0, 0)).unwrap();
        assert_eq!(out.len(), 11);
        assert_eq!(out.total_material_a, 2420);
        assert_eq!(out.total_material_b, 290);
        assert_eq!(out.total_cost, zeny(101_320_000));
    }

    #[test]
    fn invalid_input_refuses_to_compute() {
        let engine = RefineCostEngine::normal();
        let err = engine
            .compute_from_input(4, 7, Some("150000"), None)
            .unwrap_err();
        assert_eq!(
            err,
            CostError::InvalidPriceInput(PriceError::Missing {
                field: PriceField::MaterialB
            })
        );
    }

    #[test]
    fn valid_input_computes() {
        let engine = RefineCostEngine::normal();
        let out = engine
            .compute_from_input(4, 5, Some("150000"), Some("50000"))
            .unwrap();
        assert_eq!(out.total_cost, zeny(900_000));
    }

    #[test]
    fn negative_prices_never_reach_the_engine() {
        let from_json = serde_json::from_str::<UnitPrices>(
            r#"{"material_a":"-150000","material_b":"0"}"#,
        );
        assert!(from_json.is_err());

        assert!(UnitPrices::new(zeny(-150_000), Zeny::ZERO).is_err());
        let engine = RefineCostEngine::normal();
        let refused = engine
            .compute_from_input(4, 5, Some("-150000"), Some("0"))
            .unwrap_err();
        assert!(matches!(
            refused,
            CostError::InvalidPriceInput(PriceError::Negative {
                field: PriceField::MaterialA,
                ..
            })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        let engine = RefineCostEngine::normal();
        let huge = UnitPrices::new(Zeny::MAX, Zeny::ZERO).unwrap();
        let err = engine.compute_costs(4, 5, huge).unwrap_err();
        assert_eq!(
            err,
            CostError::CostOverflow {
                from_tier: 4,
                to_tier: 5
            }
        );
    }

    #[test]
    fn breakdown_serializes_to_json() {
        let engine = RefineCostEngine::normal();
        let out = engine.compute_costs(4, 5, prices(150_000, 50_000)).unwrap();
        let json = serde_json::to_value(&out).unwrap();
        let first = &json["results"][0];
        assert_eq!(first["from_tier"], 4);
        assert_eq!(first["material_a_quantity"], 5);
        assert_eq!(first["step_total_cost"], "900000");
    }
}
