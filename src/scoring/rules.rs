//! Individual scoring rules
//!
//! Every rule reads only the fields it needs and treats unparseable input as
//! a zero contribution.

use chrono::{Datelike, Timelike};

use crate::models::receipt::{parse_purchase_date, parse_purchase_time};
use crate::models::Item;
use crate::scoring::money::parse_cents;

pub const ROUND_DOLLAR_BONUS: u64 = 50;
pub const QUARTER_MULTIPLE_BONUS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_BONUS: u64 = 6;
pub const AFTERNOON_BONUS: u64 = 10;

/// Only purchases within this hour earn the afternoon bonus.
pub const AFTERNOON_HOUR: u32 = 14;

/// Fraction of an item's price awarded when its description length fits.
pub const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// Bonus when the total has no cents.
pub fn round_dollar_total(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if cents % 100 == 0 => ROUND_DOLLAR_BONUS,
        _ => 0,
    }
}

/// Bonus when the total is a whole number of quarters.
pub fn quarter_multiple_total(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if cents % 25 == 0 => QUARTER_MULTIPLE_BONUS,
        _ => 0,
    }
}

/// Points for every complete pair of items.
pub fn item_pairs(items: &[Item]) -> u64 {
    (items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Price-based bonus for items whose trimmed description length is a
/// multiple of three. Items with an unreadable price are skipped.
///
/// Negative prices reduce the sum; only the rule's total is floored at zero.
pub fn item_descriptions(items: &[Item]) -> u64 {
    let sum = items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .map(|item| price_bonus(&item.price))
        .fold(0i64, i64::saturating_add);
    sum.max(0) as u64
}

/// Signed `ceil(price * 0.2)`. Non-finite results count as zero and
/// absurdly large magnitudes saturate.
fn price_bonus(price: &str) -> i64 {
    let Ok(price) = price.parse::<f64>() else {
        return 0;
    };

    let bonus = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if bonus.is_finite() {
        bonus as i64
    } else {
        0
    }
}

/// Bonus when the purchase day of month is odd.
pub fn odd_purchase_day(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
        _ => 0,
    }
}

/// Bonus when the purchase was made between 14:00 and 14:59.
pub fn afternoon_purchase(purchase_time: &str) -> u64 {
    match parse_purchase_time(purchase_time) {
        Some(time) if time.hour() == AFTERNOON_HOUR => AFTERNOON_BONUS,
        _ => 0,
    }
}
