//! Sale condition filtering
//!
//! The vendor tags every print with a condition code. Some codes mark
//! prints that should not appear on a chart (out of sequence, cancelled,
//! odd settlement terms). The table below came from the vendor's condition
//! code reference.

/// Condition codes excluded from display.
pub const EXCLUDED_CONDITIONS: [u16; 20] = [
    2, 3, 4, 5, 13, 14, 16, 18, 30, 32, 34, 57, 58, 59, 63, 71, 72, 102, 105, 145,
];

/// True when a print with this sale condition should be displayed.
pub fn is_displayable_condition(condition: u16) -> bool {
    !EXCLUDED_CONDITIONS.contains(&condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_conditions_displayable() {
        assert!(is_displayable_condition(0));
        assert!(is_displayable_condition(1));
        assert!(is_displayable_condition(100));
    }

    #[test]
    fn test_excluded_conditions_filtered() {
        for code in EXCLUDED_CONDITIONS {
            assert!(!is_displayable_condition(code), "code {} should be excluded", code);
        }
    }
}
