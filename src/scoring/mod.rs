//! Scoring Module
//!
//! Turns a receipt into a reward-points total. Scoring is a pure function of
//! the receipt and never fails: a field that does not parse only zeroes the
//! rule that reads it.

pub mod money;
pub mod rules;

use std::fmt;

use crate::models::Receipt;

// == Rule ==
/// The scoring rules, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::RetailerName,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::ItemDescriptions,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    /// Human readable name used in breakdowns.
    pub fn label(self) -> &'static str {
        match self {
            Rule::RetailerName => "Retailer name",
            Rule::RoundDollarTotal => "Round dollar total",
            Rule::QuarterMultipleTotal => "Total is a multiple of $0.25",
            Rule::ItemPairs => "Every two items",
            Rule::ItemDescriptions => "Item descriptions with length a multiple of 3",
            Rule::OddPurchaseDay => "Odd purchase day",
            Rule::AfternoonPurchase => "Purchased between 14:00 and 14:59",
        }
    }

    /// Points this rule awards for `receipt`.
    pub fn apply(self, receipt: &Receipt) -> u64 {
        match self {
            Rule::RetailerName => rules::retailer_name(&receipt.retailer),
            Rule::RoundDollarTotal => rules::round_dollar_total(&receipt.total),
            Rule::QuarterMultipleTotal => rules::quarter_multiple_total(&receipt.total),
            Rule::ItemPairs => rules::item_pairs(&receipt.items),
            Rule::ItemDescriptions => rules::item_descriptions(&receipt.items),
            Rule::OddPurchaseDay => rules::odd_purchase_day(&receipt.purchase_date),
            Rule::AfternoonPurchase => rules::afternoon_purchase(&receipt.purchase_time),
        }
    }
}

// == Score ==
/// Points awarded by a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleScore {
    pub rule: Rule,
    pub points: u64,
}

/// Total points for a receipt with a per-rule breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub points: u64,
    /// One entry per rule, in [`Rule::ALL`] order, zero entries included
    pub breakdown: Vec<RuleScore>,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.breakdown {
            writeln!(f, "{} pts - {}", entry.points, entry.rule.label())?;
        }
        write!(f, "{} pts total", self.points)
    }
}

// == Scoring ==
/// Applies every rule to `receipt` and sums the results.
///
/// Expects text fields to be trimmed already (see [`Receipt::sanitize`]).
pub fn score(receipt: &Receipt) -> Score {
    let breakdown: Vec<RuleScore> = Rule::ALL
        .iter()
        .map(|&rule| RuleScore {
            rule,
            points: rule.apply(receipt),
        })
        .collect();

    let points = breakdown
        .iter()
        .fold(0u64, |total, entry| total.saturating_add(entry.points));

    Score { points, breakdown }
}
