//! Deterministic random number generation.
//!
//! RULE: Nothing in the analyzer may call any platform RNG.
//! All randomness flows through DrawRng instances derived from the
//! single master seed supplied when the analyzer is built.
//!
//! Each analysis request gets its own RNG stream, seeded
//! deterministically from (master_seed XOR request_sequence). This means:
//!   - Concurrent requests never contend on shared RNG state.
//!   - Any single request is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG stream for a single analysis request.
pub struct DrawRng {
    inner: Pcg64Mcg,
}

impl DrawRng {
    /// Create a request RNG from the master seed and the request's
    /// sequence number within the analyzer.
    pub fn new(master_seed: u64, request_sequence: u64) -> Self {
        let derived_seed =
            master_seed ^ (request_sequence.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform draw from [lo, hi). Callers must pass lo <= hi.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        debug_assert!(lo <= hi, "uniform() called with lo > hi");
        lo + (hi - lo) * self.next_f64()
    }
}

/// Derives per-request RNG streams from one master seed.
pub struct DrawSource {
    master_seed: u64,
}

impl DrawSource {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn for_request(&self, sequence: u64) -> DrawRng {
        DrawRng::new(self.master_seed, sequence)
    }
}
