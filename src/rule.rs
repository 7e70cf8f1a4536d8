/// Conway's B3/S23 rule.
///
/// A live cell survives with two or three live neighbors, a dead cell is born
/// with exactly three, everything else is (or stays) dead.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}
