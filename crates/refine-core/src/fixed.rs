use fixed::types::I64F64;

/// Q64.64 fixed-point amount of zeny: 64 integer bits, 64 fractional bits.
///
/// Large enough for the top of the refine table priced at absurd market
/// values, and deterministic so recomputation is bit-identical.
pub type Zeny = I64F64;

/// Convert an f64 to Zeny. Returns `None` for NaN, infinities, and values
/// outside the representable range.
#[inline]
pub fn f64_to_zeny(v: f64) -> Option<Zeny> {
    if !v.is_finite() {
        return None;
    }
    Zeny::checked_from_num(v)
}

/// Price of `quantity` units at `unit_price`, or `None` on overflow.
#[inline]
pub fn checked_cost(unit_price: Zeny, quantity: u64) -> Option<Zeny> {
    unit_price.checked_mul(Zeny::checked_from_num(quantity)?)
}

/// Checked addition for Zeny that returns None on overflow.
#[inline]
pub fn checked_add(a: Zeny, b: Zeny) -> Option<Zeny> {
    a.checked_add(b)
}
