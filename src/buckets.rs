/// Payload-size bucket upper bounds, ascending. Half-open: a size belongs
/// to the first bound strictly greater than it.
pub const BUCKET_BOUNDS: [u64; 7] = [100, 200, 400, 800, 1600, 3200, 6400];

/// Classify a payload size, returning the bucket's upper bound. Sizes at or
/// above the last bound belong to no bucket and are reported only in the
/// overall population.
pub fn bucket_for(payload_size: u64) -> Option<u64> {
    BUCKET_BOUNDS.iter().copied().find(|&bound| payload_size < bound)
}
