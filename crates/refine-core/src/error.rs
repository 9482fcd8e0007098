/// Which of the two priced materials an input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    /// The catalyst consumed per attempt (Ori/Elu).
    MaterialA,
    /// The duplicate equipment sacrificed per attempt.
    MaterialB,
}

impl std::fmt::Display for PriceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceField::MaterialA => f.write_str("material A price"),
            PriceField::MaterialB => f.write_str("material B price"),
        }
    }
}

/// Why a price input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("{field} is missing")]
    Missing { field: PriceField },

    #[error("{field} '{input}' is not a number")]
    NotANumber { field: PriceField, input: String },

    #[error("{field} '{input}' is negative")]
    Negative { field: PriceField, input: String },

    #[error("{field} '{input}' is out of range")]
    OutOfRange { field: PriceField, input: String },
}

impl PriceError {
    /// The field the rejected input belongs to.
    pub fn field(&self) -> PriceField {
        match self {
            PriceError::Missing { field }
            | PriceError::NotANumber { field, .. }
            | PriceError::Negative { field, .. }
            | PriceError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Errors raised while building a [`TierTable`](crate::table::TierTable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("tier table has no steps")]
    Empty,

    #[error("step {index} goes from +{from_tier} to +{to_tier}; expected +{expected}")]
    NotSingleStep {
        index: usize,
        from_tier: u32,
        to_tier: u32,
        expected: u32,
    },

    #[error("step {index} starts at +{from_tier} but the previous step ended at +{previous_to}")]
    Gap {
        index: usize,
        from_tier: u32,
        previous_to: u32,
    },
}

/// Errors that stop a cost computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    /// A price was missing or not a valid non-negative number; nothing is
    /// computed.
    #[error("invalid price input: {0}")]
    InvalidPriceInput(#[from] PriceError),

    /// A step cost or running total does not fit in [`Zeny`](crate::fixed::Zeny).
    #[error("cost overflow at step +{from_tier} -> +{to_tier}")]
    CostOverflow { from_tier: u32, to_tier: u32 },

    /// Owned stock could not be valued against the breakdown: the savings
    /// overflow, or they exceed the gross cost.
    #[error("inventory offset out of range for +{start_tier} -> +{target_tier}")]
    InventoryOutOfRange { start_tier: u32, target_tier: u32 },
}
