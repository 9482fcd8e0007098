//! Locale-aware number formatting for zeny amounts and unit counts.

use refine_core::Zeny;

use crate::locale::Language;

/// Most fractional digits shown for an amount.
const MAX_FRACTION_DIGITS: u32 = 3;

fn separators(language: Language) -> (char, char) {
    match language {
        Language::Pt => ('.', ','),
        Language::En => (',', '.'),
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Group an integer count, e.g. `2420` -> `2.420` in Portuguese.
pub fn format_units(value: u64, language: Language) -> String {
    let (group, _) = separators(language);
    group_digits(&value.to_string(), group)
}

/// Format an amount with thousands grouping and up to three decimals,
/// trailing zeros dropped, rounding half away from zero.
pub fn format_zeny(amount: Zeny, language: Language) -> String {
    let (group, decimal) = separators(language);
    let scale = 10i128.pow(MAX_FRACTION_DIGITS);

    // Amounts too large to scale lose their fraction, not their integer part.
    let scaled: i128 = amount
        .checked_mul(Zeny::from_num(scale))
        .map(|v| v.saturating_round().to_num::<i128>())
        .unwrap_or_else(|| amount.saturating_round().to_num::<i128>() * scale);

    let negative = scaled < 0;
    let magnitude = scaled.unsigned_abs();
    let whole = magnitude / scale as u128;
    let fraction = magnitude % scale as u128;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&whole.to_string(), group));
    if fraction > 0 {
        let digits = format!("{fraction:0width$}", width = MAX_FRACTION_DIGITS as usize);
        out.push(decimal);
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}
