//! Seeded pseudo-random stream (xorshift32) and seed canonicalization.
//!
//! Every rendered frame rebuilds its generator from the current seed, so the
//! whole stream must be a pure function of the seed value. The hash is FNV-1a
//! over the seed's bytes; a numeric seed is used directly.

const FNV_OFFSET: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 16_777_619;

/// Remap target for an all-zero state, which would otherwise lock the
/// xorshift stream at zero forever.
const ZERO_REMAP: u32 = 0x9E37_79B9;

/// FNV-1a over the string's bytes. Total: any string maps into [0, 2^32).
pub fn hash_string_to_int(s: &str) -> u32 {
    let mut h = FNV_OFFSET;
    for b in s.bytes() {
        h ^= b as u32;
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// Deterministic xorshift32 generator. One instance owns its state; it is
/// never shared between frames.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Numeric seed used as the initial state directly.
    pub fn from_u32(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_REMAP } else { seed };
        Self { state }
    }

    /// Textual seed, hashed. Empty input falls back to a fixed literal so
    /// the constructor stays total; the UI layer substitutes a random seed
    /// before an empty one ever reaches a render.
    pub fn from_seed(seed: &str) -> Self {
        let text = if seed.is_empty() { "seed" } else { seed };
        Self::from_u32(hash_string_to_int(text))
    }

    /// One xorshift32 step; returns a value strictly inside [0, 1).
    pub fn next(&mut self) -> f64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x as f64 / 4_294_967_296.0
    }
}
