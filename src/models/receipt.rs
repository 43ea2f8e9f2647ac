//! Receipt model
//!
//! The receipt as submitted by clients, plus input cleanup and field checks.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Accepted purchase date layout
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted purchase time layout (24-hour clock)
pub const TIME_FORMAT: &str = "%H:%M";

/// A purchase receipt.
///
/// Scalar fields stay as the submitted text. Each scoring rule parses only
/// what it needs, so one malformed field cannot spoil the others.
///
/// Field order here is the canonical order used for identifier derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(default)]
    pub retailer: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub purchase_time: String,
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: String,
}

/// A single line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A single validation failure, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// JSON name of the offending field
    pub field: String,
    /// What is wrong with it
    pub error: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            error: error.into(),
        }
    }
}

impl Receipt {
    /// Trims leading and trailing whitespace from every text field.
    pub fn sanitize(&mut self) {
        trim_in_place(&mut self.retailer);
        trim_in_place(&mut self.purchase_date);
        trim_in_place(&mut self.purchase_time);
        trim_in_place(&mut self.total);
        for item in &mut self.items {
            trim_in_place(&mut item.short_description);
            trim_in_place(&mut item.price);
        }
    }

    /// Checks required fields and the purchase date layout.
    ///
    /// Returns every problem found; an empty list means the receipt is valid.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.retailer.is_empty() {
            errors.push(FieldError::new("retailer", "is required"));
        }

        if self.purchase_date.is_empty() {
            errors.push(FieldError::new("purchaseDate", "is required"));
        } else if parse_purchase_date(&self.purchase_date).is_none() {
            errors.push(FieldError::new("purchaseDate", "must match format YYYY-MM-DD"));
        }

        // Only presence is checked; a malformed time scores no afternoon bonus
        if self.purchase_time.is_empty() {
            errors.push(FieldError::new("purchaseTime", "is required"));
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.short_description.is_empty() {
                errors.push(FieldError::new(
                    format!("items[{}].shortDescription", i),
                    "is required",
                ));
            }
            if item.price.is_empty() {
                errors.push(FieldError::new(format!("items[{}].price", i), "is required"));
            }
        }

        if self.total.is_empty() {
            errors.push(FieldError::new("total", "is required"));
        }

        errors
    }
}

/// Parses a `YYYY-MM-DD` date. Every field must be zero-padded.
pub fn parse_purchase_date(value: &str) -> Option<NaiveDate> {
    if !matches_layout(value, b"DDDD-DD-DD") {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parses an `HH:MM` 24-hour time. Both fields must be zero-padded.
pub fn parse_purchase_time(value: &str) -> Option<NaiveTime> {
    if !matches_layout(value, b"DD:DD") {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// `D` in the layout stands for any ASCII digit, other bytes must match.
fn matches_layout(value: &str, layout: &[u8]) -> bool {
    value.len() == layout.len()
        && value.bytes().zip(layout).all(|(b, &l)| match l {
            b'D' => b.is_ascii_digit(),
            _ => b == l,
        })
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}
