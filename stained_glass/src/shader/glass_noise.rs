///
/// Deterministic per-pixel noise in the range -1..1
///
/// The value depends only on the global pixel position and the seed, so every tile of an image sees the same noise.
///
#[inline]
pub fn glass_noise(global_x: usize, global_y: usize, seed: u32) -> f64 {
    let mut hash = (global_x as u32).wrapping_mul(0x8da6_b343)
        ^ (global_y as u32).wrapping_mul(0xd816_3841)
        ^ seed.wrapping_mul(0xcb1a_b31f);

    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0x5bd1_e995);
    hash ^= hash >> 15;

    (hash as f64 / u32::MAX as f64) * 2.0 - 1.0
}
