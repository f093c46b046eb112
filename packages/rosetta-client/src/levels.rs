//! Hierarchy level code translation.
//!
//! Archival hierarchies use numeric level codes whose human labels
//! depend on who holds the record: material held by The National
//! Archives follows the Department/Division/Series scheme, everything
//! else the ISAD(G) Fonds scheme. Both tables are fixed.

/// Level name for records held by The National Archives.
pub fn tna_level_name(code: u64) -> Option<&'static str> {
    match code {
        1 => Some("Department"),
        2 => Some("Division"),
        3 => Some("Series"),
        4 => Some("Sub-series"),
        5 => Some("Sub-sub-series"),
        6 => Some("Piece"),
        7 => Some("Item"),
        _ => None,
    }
}

/// Level name for records held elsewhere.
pub fn non_tna_level_name(code: u64) -> Option<&'static str> {
    match code {
        1 => Some("Fonds"),
        2 => Some("Sub-fonds"),
        3 => Some("Sub-sub-fonds"),
        4 => Some("Sub-sub-sub-fonds"),
        5 => Some("Series"),
        6 => Some("Sub-series"),
        7 => Some("Sub-sub-series"),
        8 => Some("Sub-sub-sub-series"),
        9 => Some("File"),
        10 => Some("Item"),
        11 => Some("Sub-item"),
        _ => None,
    }
}

/// Dispatch on group membership.
pub fn level_name(code: u64, is_tna: bool) -> Option<&'static str> {
    if is_tna {
        tna_level_name(code)
    } else {
        non_tna_level_name(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_code_differs_by_group() {
        assert_eq!(level_name(2, true), Some("Division"));
        assert_eq!(level_name(2, false), Some("Sub-fonds"));
    }

    #[test]
    fn test_unknown_code_has_no_name() {
        assert_eq!(level_name(8, true), None);
        assert_eq!(level_name(12, false), None);
        assert_eq!(level_name(0, true), None);
    }
}
