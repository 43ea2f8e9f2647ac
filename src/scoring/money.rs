//! Currency amount parsing
//!
//! Amounts arrive as decimal strings such as `"35.35"`. Working in integer
//! cents keeps the divisibility checks exact.

/// Converts a decimal amount string to whole cents.
///
/// The fraction is cut to its first two bytes, then a single byte is padded
/// with a zero (`"9.5"` is 950, `"9.999"` is 999) and the result is read as
/// an integer, so one leading sign is allowed (`"1.+5"` is 105). A missing
/// fraction counts as zero cents. Returns None when either part is not
/// numeric, the fraction is empty, or the amount overflows.
pub fn parse_cents(amount: &str) -> Option<i64> {
    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (amount, None),
    };

    let dollars: i64 = whole.parse().ok()?;

    let cents = match fraction {
        None => 0,
        Some(frac) => fraction_cents(frac)?,
    };

    let magnitude = dollars.checked_mul(100)?;
    if whole.starts_with('-') {
        magnitude.checked_sub(cents)
    } else {
        magnitude.checked_add(cents)
    }
}

fn fraction_cents(frac: &str) -> Option<i64> {
    // Non-ASCII within the first two bytes fails here or in the parse below
    let digits = frac.get(..frac.len().min(2))?;
    match digits.len() {
        1 => format!("{}0", digits).parse().ok(),
        _ => digits.parse().ok(),
    }
}
