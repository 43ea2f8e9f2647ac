//! Receipt processing
//!
//! Combines identifier derivation and scoring into the single step the
//! process endpoint performs before caching the result.

use tracing::{debug, error};

use crate::error::DerivationError;
use crate::models::Receipt;
use crate::receipt_id::derive_id;
use crate::scoring::score;

/// Outcome of processing one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedReceipt {
    /// Hyphenated lowercase UUID
    pub id: String,
    pub points: u64,
}

/// Derives the receipt's identifier and computes its points.
///
/// The receipt should already be sanitized. Fails only when the identifier
/// cannot be derived; scoring itself cannot fail.
pub fn process_receipt(receipt: &Receipt) -> Result<ProcessedReceipt, DerivationError> {
    let id = derive_id(receipt).map_err(|err| {
        error!("Error generating receipt identifier: {}", err);
        err
    })?;

    let scored = score(receipt);
    debug!(%id, "Scored receipt:\n{}", scored);

    Ok(ProcessedReceipt {
        id: id.to_string(),
        points: scored.points,
    })
}
