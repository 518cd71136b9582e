// Centralized caps and defaults for graph edits

// Graph size caps
pub const MAX_NODES: usize = 100_000;
pub const MAX_EDGES: usize = 500_000;

// Edge weights are positive integers that fit the stored u32
pub const MIN_WEIGHT: i64 = 1;
pub const MAX_WEIGHT: i64 = u32::MAX as i64;

// Rendered node radius; a position within it hits the node
pub const DEFAULT_PICK_RADIUS: f32 = 20.0;
pub const MAX_PICK_RADIUS: f32 = 1_000.0;

#[inline]
pub fn weight_in_bounds(w: i64) -> bool { (MIN_WEIGHT..=MAX_WEIGHT).contains(&w) }
