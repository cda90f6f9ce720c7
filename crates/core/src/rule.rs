//! The Life transition rule.

/// Next liveness of a cell given its 3x3 neighborhood tally.
///
/// `live_count` is the number of live cells in the 3x3 block centred on the
/// cell, the cell itself included. In that form the Life rule reads: exactly
/// 3 means alive (birth, or survival with 2 neighbors), exactly 4 means the
/// cell keeps its current state only if it is alive (survival with 3
/// neighbors), anything else means dead.
#[inline(always)]
pub fn next_state(current: bool, live_count: u8) -> bool {
    live_count == 3 || (live_count == 4 && current)
}
