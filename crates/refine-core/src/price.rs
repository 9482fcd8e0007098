//! Validation of raw price input.
//!
//! Prices arrive as free-form text from the presentation layer. Both must be
//! present and parse to a finite, non-negative amount before the engine will
//! compute anything.

use serde::{Deserialize, Serialize};

use crate::error::{PriceError, PriceField};
use crate::fixed::{Zeny, f64_to_zeny};

/// Validated market prices for one unit of each material.
///
/// Fields are private: every constructor, deserialization included, rejects
/// negative amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawUnitPrices")]
pub struct UnitPrices {
    material_a: Zeny,
    material_b: Zeny,
}

/// Unchecked wire form of [`UnitPrices`].
#[derive(Deserialize)]
struct RawUnitPrices {
    material_a: Zeny,
    material_b: Zeny,
}

impl TryFrom<RawUnitPrices> for UnitPrices {
    type Error = PriceError;

    fn try_from(raw: RawUnitPrices) -> Result<Self, Self::Error> {
        Self::new(raw.material_a, raw.material_b)
    }
}

impl UnitPrices {
    /// Build from already-numeric prices, rejecting negatives.
    pub fn new(material_a: Zeny, material_b: Zeny) -> Result<Self, PriceError> {
        check_non_negative(material_a, PriceField::MaterialA)?;
        check_non_negative(material_b, PriceField::MaterialB)?;
        Ok(Self {
            material_a,
            material_b,
        })
    }

    /// Parse both raw inputs. `None` or blank text counts as missing.
    pub fn parse(material_a: Option<&str>, material_b: Option<&str>) -> Result<Self, PriceError> {
        let a = parse_price(material_a, PriceField::MaterialA)?;
        let b = parse_price(material_b, PriceField::MaterialB)?;
        Self::new(a, b)
    }

    /// Price of one Ori/Elu.
    pub fn material_a(&self) -> Zeny {
        self.material_a
    }

    /// Price of one duplicate equipment.
    pub fn material_b(&self) -> Zeny {
        self.material_b
    }
}

/// Parse a single price.
///
/// Accepts plain decimals (`150000`, `1250.5`) exactly, and falls back to
/// float syntax (`1.5e5`) for anything else that is finite.
pub fn parse_price(input: Option<&str>, field: PriceField) -> Result<Zeny, PriceError> {
    let raw = match input.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Err(PriceError::Missing { field }),
    };

    let value = match raw.parse::<Zeny>() {
        Ok(v) => v,
        Err(_) => {
            let float: f64 = raw.parse().map_err(|_| PriceError::NotANumber {
                field,
                input: raw.to_string(),
            })?;
            if float.is_nan() {
                return Err(PriceError::NotANumber {
                    field,
                    input: raw.to_string(),
                });
            }
            if float < 0.0 {
                return Err(PriceError::Negative {
                    field,
                    input: raw.to_string(),
                });
            }
            f64_to_zeny(float).ok_or_else(|| PriceError::OutOfRange {
                field,
                input: raw.to_string(),
            })?
        }
    };

    if value < Zeny::ZERO {
        return Err(PriceError::Negative {
            field,
            input: raw.to_string(),
        });
    }
    Ok(value)
}

fn check_non_negative(value: Zeny, field: PriceField) -> Result<(), PriceError> {
    if value < Zeny::ZERO {
        return Err(PriceError::Negative {
            field,
            input: value.to_string(),
        });
    }
    Ok(())
}
