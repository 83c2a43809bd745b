//! rand-backed randomness source

use eller_application::RandomSource;

/// Randomness source drawing from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn roll(&self) -> f64 {
        rand::random::<f64>()
    }
}
