//! Tier-transition cost table.
//!
//! A [`TierTable`] is an ordered, contiguous list of [`TierStep`]s. It is
//! validated once on construction and immutable afterwards, so it can be
//! shared freely between threads without synchronization.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// One refine step from `from_tier` to `from_tier + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierStep {
    pub from_tier: u32,
    pub to_tier: u32,
    /// Catalyst units consumed (Ori/Elu).
    pub material_a_quantity: u32,
    /// Duplicate equipment units sacrificed.
    pub material_b_quantity: u32,
    /// Fixed zeny fee, independent of market prices.
    pub base_cost: u64,
}

impl TierStep {
    /// A step from `from_tier` to the next tier. Saturates at `u32::MAX`,
    /// which [`TierTable::new`] then rejects.
    pub const fn new(
        from_tier: u32,
        material_a_quantity: u32,
        material_b_quantity: u32,
        base_cost: u64,
    ) -> Self {
        Self {
            from_tier,
            to_tier: from_tier.saturating_add(1),
            material_a_quantity,
            material_b_quantity,
            base_cost,
        }
    }
}

/// The official "Normal Cost" table for guaranteed (100% success) refines.
pub const NORMAL_COST: [TierStep; 11] = [
    TierStep::new(4, 5, 1, 100_000),
    TierStep::new(5, 10, 2, 220_000),
    TierStep::new(6, 15, 3, 470_000),
    TierStep::new(7, 25, 4, 910_000),
    TierStep::new(8, 50, 6, 1_630_000),
    TierStep::new(9, 80, 10, 2_740_000),
    TierStep::new(10, 135, 22, 5_250_000),
    TierStep::new(11, 225, 30, 9_000_000),
    TierStep::new(12, 375, 45, 14_500_000),
    TierStep::new(13, 600, 69, 24_500_000),
    TierStep::new(14, 900, 98, 42_000_000),
];

/// A validated, contiguous table of refine steps in ascending tier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTable {
    steps: Vec<TierStep>,
}

impl TierTable {
    /// Validate and wrap a list of steps.
    ///
    /// Every step must advance exactly one tier and start where the previous
    /// step ended. Quantities are not required to be monotonic; see
    /// [`TierTable::is_monotonic`].
    pub fn new(steps: Vec<TierStep>) -> Result<Self, TableError> {
        if steps.is_empty() {
            return Err(TableError::Empty);
        }

        for (index, step) in steps.iter().enumerate() {
            let expected = step.from_tier.saturating_add(1);
            if step.from_tier.checked_add(1) != Some(step.to_tier) {
                return Err(TableError::NotSingleStep {
                    index,
                    from_tier: step.from_tier,
                    to_tier: step.to_tier,
                    expected,
                });
            }
        }

        for (index, pair) in steps.windows(2).enumerate() {
            if pair[1].from_tier != pair[0].to_tier {
                return Err(TableError::Gap {
                    index: index + 1,
                    from_tier: pair[1].from_tier,
                    previous_to: pair[0].to_tier,
                });
            }
        }

        Ok(Self { steps })
    }

    /// The built-in guaranteed-refine table.
    pub fn normal() -> Self {
        // NORMAL_COST is contiguous by construction; the unit test below
        // runs it through `new` to keep that true.
        Self {
            steps: NORMAL_COST.to_vec(),
        }
    }

    pub fn steps(&self) -> &[TierStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Lowest tier a refine can start from.
    pub fn min_tier(&self) -> u32 {
        self.steps.first().map_or(0, |s| s.from_tier)
    }

    /// Highest tier a refine can reach.
    pub fn max_tier(&self) -> u32 {
        self.steps.last().map_or(0, |s| s.to_tier)
    }

    /// Tiers a refine may start from, in ascending order.
    pub fn start_tiers(&self) -> impl Iterator<Item = u32> + '_ {
        self.steps.iter().map(|s| s.from_tier)
    }

    /// Tiers reachable from `start`, in ascending order.
    pub fn target_tiers(&self, start: u32) -> impl Iterator<Item = u32> + '_ {
        self.steps
            .iter()
            .map(|s| s.to_tier)
            .filter(move |&t| t > start)
    }

    /// Steps whose boundaries lie inside `[start, target]`.
    ///
    /// This is a boundary filter, not a walk: a `target` that falls between
    /// two boundaries drops the step that straddles it, and a reversed or
    /// out-of-table range yields nothing.
    pub fn select(&self, start: u32, target: u32) -> impl Iterator<Item = &TierStep> + '_ {
        self.steps
            .iter()
            .filter(move |s| s.from_tier >= start && s.to_tier <= target)
    }

    /// Whether quantities and base costs never decrease as tiers rise.
    pub fn is_monotonic(&self) -> bool {
        self.steps.windows(2).all(|pair| {
            pair[1].material_a_quantity >= pair[0].material_a_quantity
                && pair[1].material_b_quantity >= pair[0].material_b_quantity
                && pair[1].base_cost >= pair[0].base_cost
        })
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::normal()
    }
}
