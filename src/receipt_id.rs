//! Receipt identifiers
//!
//! Identifiers are content-addressed: a name-based (v5) UUID over the
//! receipt's canonical JSON, so resubmitting the same receipt yields the same
//! id and no randomness or clock is involved.

use uuid::Uuid;

use crate::error::DerivationError;
use crate::models::Receipt;

/// Namespace under which every receipt identifier is derived.
pub const RECEIPT_NAMESPACE: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

/// Serializes a receipt to the bytes its identifier is derived from.
///
/// Compact JSON with fields in declaration order, so equal receipts always
/// produce equal bytes.
pub fn canonical_bytes(receipt: &Receipt) -> Result<Vec<u8>, DerivationError> {
    Ok(serde_json::to_vec(receipt)?)
}

/// Derives the stable identifier for `receipt`.
pub fn derive_id(receipt: &Receipt) -> Result<Uuid, DerivationError> {
    let bytes = canonical_bytes(receipt)?;
    Ok(Uuid::new_v5(&RECEIPT_NAMESPACE, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use uuid::Version;

    fn sample() -> Receipt {
        Receipt {
            retailer: "Walgreens".to_string(),
            purchase_date: "2022-01-02".to_string(),
            purchase_time: "08:13".to_string(),
            items: vec![Item::new("Pepsi - 12-oz", "1.25"), Item::new("Dasani", "1.40")],
            total: "2.65".to_string(),
        }
    }

    #[test]
    fn test_canonical_bytes_field_order() {
        let bytes = canonical_bytes(&sample()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            r#"{"retailer":"Walgreens","purchaseDate":"2022-01-02","purchaseTime":"08:13","items":[{"shortDescription":"Pepsi - 12-oz","price":"1.25"},{"shortDescription":"Dasani","price":"1.40"}],"total":"2.65"}"#
        );
    }

    #[test]
    fn test_derive_id_is_v5() {
        let id = derive_id(&sample()).unwrap();
        assert_eq!(id.get_version(), Some(Version::Sha1));
    }

    #[test]
    fn test_derive_id_is_deterministic() {
        assert_eq!(derive_id(&sample()).unwrap(), derive_id(&sample()).unwrap());
    }

    #[test]
    fn test_derive_id_matches_namespace_hash() {
        let bytes = canonical_bytes(&sample()).unwrap();
        let expected = Uuid::new_v5(&Uuid::NAMESPACE_DNS, &bytes);

        // The namespace constant is the well-known DNS namespace
        assert_eq!(RECEIPT_NAMESPACE, Uuid::NAMESPACE_DNS);
        assert_eq!(derive_id(&sample()).unwrap(), expected);
    }

    #[test]
    fn test_sanitized_receipts_share_id() {
        let mut padded = sample();
        padded.retailer = "  Walgreens  ".to_string();
        padded.items[1].price = " 1.40".to_string();
        padded.sanitize();

        assert_eq!(derive_id(&padded).unwrap(), derive_id(&sample()).unwrap());
    }

    #[test]
    fn test_different_receipts_get_different_ids() {
        let mut other = sample();
        other.total = "2.66".to_string();
        assert_ne!(derive_id(&other).unwrap(), derive_id(&sample()).unwrap());

        let mut reordered = sample();
        reordered.items.reverse();
        assert_ne!(derive_id(&reordered).unwrap(), derive_id(&sample()).unwrap());
    }
}
