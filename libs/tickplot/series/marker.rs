//! Size-weighted marker areas
//!
//! Maps share size to a marker area so big prints stand out without tiny
//! ones vanishing: linear in steps of 20 shares up to 100, logarithmic
//! above that, doubled at the end.

/// Marker area for a print or quote of the given share size.
///
/// 0 shares map to area 0 (not drawn as a marker).
pub fn size_to_area(size: u64) -> u32 {
    if size == 0 {
        return 0;
    }

    let area = if size < 100 {
        // Ranges 1-5
        (size as f64 / 20.0).ceil()
    } else {
        (size as f64).log10() + 4.0
    };

    (2.0 * area) as u32
}
