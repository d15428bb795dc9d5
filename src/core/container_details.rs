//! Parsing of the free-text `ContainerDetails` column.
//!
//! The column lists incoming shipments as `<qty> (<label>)` groups separated
//! by commas, e.g. `200 (1/28/26), 250 (1/31/26)`. Callers encode "no data"
//! as one of the literal strings `""`, `"null"` or `"0"`.

use crate::domain::model::ShipmentEntry;
use regex::Regex;
use std::sync::LazyLock;

/// The literal strings callers use to mean "no container details".
pub const NO_DATA_SENTINELS: [&str; 3] = ["", "null", "0"];

static GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*\(([^)]+)\)").expect("container group pattern compiles")
});

/// Whether `details` is exactly one of the no-data sentinels.
pub fn is_no_data(details: &str) -> bool {
    NO_DATA_SENTINELS.contains(&details)
}

/// Extract every well-formed `<qty> (<label>)` group, in order of appearance.
///
/// Text between groups and malformed groups are skipped. Sentinel input and
/// input with no groups both yield an empty vector.
pub fn parse(details: &str) -> Vec<ShipmentEntry> {
    if is_no_data(details) {
        return Vec::new();
    }

    let entries: Vec<ShipmentEntry> = GROUP_PATTERN
        .captures_iter(details)
        .map(|caps| ShipmentEntry::new(&caps[1], caps[2].trim()))
        .collect();
    tracing::trace!("Parsed {} container groups", entries.len());
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_yield_nothing() {
        for sentinel in NO_DATA_SENTINELS {
            assert!(parse(sentinel).is_empty(), "sentinel {:?}", sentinel);
        }
        assert!(!is_no_data("  null "));
        assert!(!is_no_data(" 0 "));
        assert!(!is_no_data("   "));
        assert!(parse("  null ").is_empty());
    }

    #[test]
    fn test_two_groups_in_order() {
        let entries = parse("200 (1/28/26), 250 (1/31/26)");
        assert_eq!(
            entries,
            vec![
                ShipmentEntry::new(200, "1/28/26"),
                ShipmentEntry::new(250, "1/31/26"),
            ]
        );
    }

    #[test]
    fn test_garbage_yields_nothing() {
        assert!(parse("garbage text").is_empty());
        assert!(parse("200 1/28/26").is_empty());
        assert!(parse("(1/28/26)").is_empty());
    }

    #[test]
    fn test_whitespace_is_optional_and_labels_are_trimmed() {
        let entries = parse("40(  TBD  ),7 (\t2/1/26 )");
        assert_eq!(
            entries,
            vec![ShipmentEntry::new(40, "TBD"), ShipmentEntry::new(7, "2/1/26")]
        );
    }

    #[test]
    fn test_oversized_quantity_keeps_its_digits() {
        let entries = parse("99999999999999999999999 (1/1/26), 5 (1/2/26)");
        assert_eq!(
            entries,
            vec![
                ShipmentEntry::new("99999999999999999999999", "1/1/26"),
                ShipmentEntry::new(5, "1/2/26"),
            ]
        );
        assert_eq!(entries[0].quantity_value(), None);
        assert_eq!(entries[1].quantity_value(), Some(5));
    }

    #[test]
    fn test_leading_zeros_are_preserved() {
        let entries = parse("007 (1/1/26)");
        assert_eq!(entries[0].quantity, "007");
        assert_eq!(entries[0].quantity_value(), Some(7));
    }

    #[test]
    fn test_non_ascii_digits_do_not_match() {
        assert!(parse("٣ (1/1/26)").is_empty());
    }
}
