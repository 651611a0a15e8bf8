//! Line clear engine - full-row detection, removal and line-clear points.

use crate::board::Board;

/// Remove every full row and return how many were removed.
///
/// Rows are scanned top to bottom. Removing row `r` shifts everything above it
/// down by one and leaves an empty row on top, so index `r` is examined again
/// before the scan moves on. Row count never changes.
pub fn scan_and_clear(board: &mut Board) -> usize {
    let mut cleared = 0;
    let mut r = 0;

    while r < board.rows() {
        if board.is_row_full(r) {
            board.remove_row(r);
            cleared += 1;
        } else {
            r += 1;
        }
    }

    cleared
}

/// Points for clearing `lines` rows at once: `base * 2^(lines - 1)`, or 0.
///
/// Saturates at `u64::MAX`.
pub fn line_clear_points(base: u64, lines: usize) -> u64 {
    if lines == 0 {
        return 0;
    }
    let multiplier = u32::try_from(lines - 1)
        .ok()
        .and_then(|shift| 1u64.checked_shl(shift))
        .unwrap_or(u64::MAX);
    base.saturating_mul(multiplier)
}
