//! # Identity
//!
//! Integer id allocation and SKU generation.
//!
//! ## SKU Derivation
//! ```text
//! "The Red Widget", id 3
//!      │
//!      ▼  lowercase + split on whitespace
//! ["the", "red", "widget"]
//!      │
//!      ▼  drop stop words
//! ["red", "widget"]
//!      │
//!      ▼  first letter of up to 3 words, uppercased
//! "RW"
//!      │
//!      ▼  "{abbr}-{id:03}"
//! "RW-003"
//! ```
//!
//! When fewer than two letters survive, the first three characters of the
//! name (spaces removed) are used instead: `"of"` → `"OF"`.

use crate::error::{CoreError, CoreResult};
use crate::types::{Record, RecordId};

/// Words skipped when abbreviating a product name.
pub const SKU_STOP_WORDS: &[&str] = &[
    "and", "the", "a", "an", "with", "for", "of", "in", "on", "at", "to", "from",
];

/// Maximum number of words contributing a letter to the abbreviation.
const SKU_MAX_WORDS: usize = 3;

/// Returns the next free id: max existing id + 1, or 1 for an empty collection.
///
/// Ids are never reused as long as the highest record is not removed and
/// re-added out of band.
///
/// ## Errors
/// `CoreError::IdsExhausted` when the highest stored id is `i64::MAX`.
///
/// ## Example
/// ```rust
/// use zava_core::identity::next_id;
/// use zava_core::Store;
///
/// let stores: Vec<Store> = Vec::new();
/// assert_eq!(next_id(&stores).unwrap(), 1);
/// ```
pub fn next_id<T: Record>(records: &[T]) -> CoreResult<RecordId> {
    let max = records.iter().map(Record::id).max().unwrap_or(0);
    max.checked_add(1).ok_or(CoreError::IdsExhausted { max })
}

/// Derives a SKU from a product name and its assigned id.
///
/// ## Example
/// ```rust
/// use zava_core::identity::generate_sku;
///
/// assert_eq!(generate_sku("The Red Widget", 3), "RW-003");
/// assert_eq!(generate_sku("Blue Pen", 1), "BP-001");
/// assert_eq!(generate_sku("of", 5), "OF-005");
/// ```
pub fn generate_sku(name: &str, id: RecordId) -> String {
    let lowered = name.to_lowercase();

    let mut abbreviation: String = lowered
        .split_whitespace()
        .filter(|word| !SKU_STOP_WORDS.contains(word))
        .take(SKU_MAX_WORDS)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if abbreviation.chars().count() < 2 {
        abbreviation = name
            .chars()
            .filter(|c| *c != ' ')
            .take(3)
            .flat_map(char::to_uppercase)
            .collect();
    }

    format!("{}-{:03}", abbreviation, id)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InventoryRecord;

    fn record(id: RecordId) -> InventoryRecord {
        InventoryRecord {
            id,
            product_id: 1,
            store_id: 1,
            quantity: 0,
        }
    }

    #[test]
    fn test_next_id_empty() {
        let records: Vec<InventoryRecord> = Vec::new();
        assert_eq!(next_id(&records).unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let records = vec![record(3), record(10), record(7)];
        assert_eq!(next_id(&records).unwrap(), 11);
    }

    #[test]
    fn test_next_id_never_repeats_after_adds() {
        let mut records = Vec::new();
        let mut seen = Vec::new();
        for _ in 0..50 {
            let id = next_id(&records).unwrap();
            assert!(!seen.contains(&id));
            seen.push(id);
            records.push(record(id));
        }
        // removing a middle record does not make its id available again
        records.retain(|r| r.id != 25);
        assert_eq!(next_id(&records).unwrap(), 51);
    }

    #[test]
    fn test_next_id_at_max_fails() {
        let records = vec![record(4), record(i64::MAX)];
        assert_eq!(
            next_id(&records).unwrap_err(),
            CoreError::IdsExhausted { max: i64::MAX }
        );
    }

    #[test]
    fn test_sku_drops_stop_words() {
        assert_eq!(generate_sku("The Red Widget", 3), "RW-003");
        assert_eq!(generate_sku("Pen with Cap and Clip for Office", 12), "PCC-012");
    }

    #[test]
    fn test_sku_takes_at_most_three_words() {
        assert_eq!(generate_sku("Large Blue Ceramic Coffee Mug", 1), "LBC-001");
    }

    #[test]
    fn test_sku_fallback_when_abbreviation_too_short() {
        // entirely stop words
        assert_eq!(generate_sku("of", 5), "OF-005");
        assert_eq!(generate_sku("The And", 2), "THE-002");
        // single word
        assert_eq!(generate_sku("Stapler", 8), "STA-008");
        // spaces are stripped before taking three characters
        assert_eq!(generate_sku("a b", 4), "AB-004");
    }

    #[test]
    fn test_sku_id_padding_widens() {
        assert_eq!(generate_sku("Blue Pen", 7), "BP-007");
        assert_eq!(generate_sku("Blue Pen", 1234), "BP-1234");
    }

    #[test]
    fn test_sku_whitespace_runs() {
        assert_eq!(generate_sku("  green   tea  ", 9), "GT-009");
    }
}
