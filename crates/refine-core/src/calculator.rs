//! Recompute-on-change wrapper around [`RefineCostEngine`].
//!
//! The four inputs (start tier, target tier, and the two raw price strings)
//! are the complete trigger set. Setters mark the calculator dirty only when
//! a value actually changes; [`RefineCalculator::outcome`] recomputes lazily
//! once per dirty period.

use crate::engine::{CostBreakdown, RefineCostEngine};
use crate::error::CostError;

/// Result of the most recent computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Prices were valid; the breakdown may still be empty.
    Ready(CostBreakdown),
    /// The engine refused to compute. Consumers show a placeholder.
    Refused(CostError),
}

impl Outcome {
    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        match self {
            Outcome::Ready(b) => Some(b),
            Outcome::Refused(_) => None,
        }
    }
}

/// Holds the current inputs and the cached outcome for them.
#[derive(Debug, Clone)]
pub struct RefineCalculator {
    engine: RefineCostEngine,
    start_tier: u32,
    target_tier: u32,
    material_a_price: String,
    material_b_price: String,
    dirty: bool,
    outcome: Outcome,
    recomputations: u64,
}

impl RefineCalculator {
    /// Default range shown before the user picks one.
    pub const DEFAULT_START: u32 = 4;
    pub const DEFAULT_TARGET: u32 = 7;

    pub fn new(engine: RefineCostEngine) -> Self {
        let mut calc = Self {
            engine,
            start_tier: Self::DEFAULT_START,
            target_tier: Self::DEFAULT_TARGET,
            material_a_price: String::new(),
            material_b_price: String::new(),
            dirty: true,
            outcome: Outcome::Ready(CostBreakdown::default()),
            recomputations: 0,
        };
        calc.refresh();
        calc
    }

    pub fn start_tier(&self) -> u32 {
        self.start_tier
    }

    pub fn target_tier(&self) -> u32 {
        self.target_tier
    }

    pub fn engine(&self) -> &RefineCostEngine {
        &self.engine
    }

    pub fn set_start_tier(&mut self, tier: u32) {
        if self.start_tier != tier {
            self.start_tier = tier;
            self.dirty = true;
        }
    }

    pub fn set_target_tier(&mut self, tier: u32) {
        if self.target_tier != tier {
            self.target_tier = tier;
            self.dirty = true;
        }
    }

    pub fn set_material_a_price(&mut self, raw: &str) {
        if self.material_a_price != raw {
            self.material_a_price = raw.to_string();
            self.dirty = true;
        }
    }

    pub fn set_material_b_price(&mut self, raw: &str) {
        if self.material_b_price != raw {
            self.material_b_price = raw.to_string();
            self.dirty = true;
        }
    }

    /// Returns `true` if an input changed since the last computation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of times the engine has actually run.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The outcome for the current inputs, recomputing first if needed.
    pub fn outcome(&mut self) -> &Outcome {
        self.refresh();
        &self.outcome
    }

    /// Shorthand for the breakdown when prices are valid.
    pub fn breakdown(&mut self) -> Option<&CostBreakdown> {
        self.outcome().breakdown()
    }

    fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        let result = self.engine.compute_from_input(
            self.start_tier,
            self.target_tier,
            Some(self.material_a_price.as_str()),
            Some(self.material_b_price.as_str()),
        );
        self.outcome = match result {
            Ok(breakdown) => Outcome::Ready(breakdown),
            Err(e) => Outcome::Refused(e),
        };
        self.recomputations += 1;
        self.dirty = false;
    }
}

impl Default for RefineCalculator {
    fn default() -> Self {
        Self::new(RefineCostEngine::normal())
    }
}
