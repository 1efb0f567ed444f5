use super::Squash;
use crate::genome::{CellParams, Gate};

#[inline]
fn gate(g: &Gate, short: f64, input: f64, squash: Squash) -> f64 {
    squash.apply(g.sum(short, input))
}

/// Advance one cell by a single observation, returning the new `(short, long)` memories
pub fn step(short: f64, long: f64, input: f64, params: &CellParams) -> (f64, f64) {
    let forget = gate(&params.forget, short, input, Squash::Sigmoid);
    let relevance = gate(&params.relevance, short, input, Squash::Sigmoid);
    let candidate = gate(&params.candidate, short, input, Squash::Tanh);
    let long = long * forget + relevance * candidate;

    let output = gate(&params.output, short, input, Squash::Sigmoid);
    (long.tanh() * output, long)
}

/// Stateful memory of one cell while it walks a sequence
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Memory {
    pub short: f64,
    pub long: f64,
}

impl Memory {
    #[inline]
    pub fn step(&mut self, input: f64, params: &CellParams) {
        (self.short, self.long) = step(self.short, self.long, input, params);
    }

    /// Forget everything, as at the start of a new individual's sequence
    #[inline]
    pub fn flush(&mut self) {
        *self = Self::default();
    }

    /// One step ahead prediction of the variable this cell models
    #[inline]
    pub fn output(&self) -> f64 {
        self.short
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, network::activate::sigmoid, random::WyRng};
    use rand::Rng;

    fn random_params(rng: &mut impl Rng) -> CellParams {
        let block: Vec<f64> = (0..12).map(|_| rng.random_range(-3. ..3.)).collect();
        CellParams::from_block(&block)
    }

    #[test]
    fn test_step_by_hand() {
        let params = CellParams::from_block(&[
            0.5, 1., 0., // forget
            -1., 2., 0.5, // relevance
            1., 1., -0.5, // candidate
            0., -1., 1., // output
        ]);
        let (short, long, input) = (0.2, 0.4, 0.3);

        let forget = sigmoid(0.2 * 0.5 + 0.3);
        let relevance = sigmoid(-0.2 + 0.6 + 0.5);
        let candidate = (0.2 + 0.3 - 0.5_f64).tanh();
        let want_long = long * forget + relevance * candidate;
        let want_short = want_long.tanh() * sigmoid(-0.3 + 1.);

        let (have_short, have_long) = step(short, long, input, &params);
        assert_f64_approx!(want_long, have_long);
        assert_f64_approx!(want_short, have_short);
    }

    #[test]
    fn test_step_deterministic() {
        let mut rng = WyRng::seeded(5);
        for _ in 0..100 {
            let params = random_params(&mut rng);
            let (s, l, x) = (
                rng.random_range(-1. ..1.),
                rng.random_range(-3. ..3.),
                rng.random_range(-5. ..5.),
            );
            assert_eq!(step(s, l, x, &params), step(s, l, x, &params));
        }
    }

    #[test]
    fn test_short_memory_bounded() {
        let mut rng = WyRng::seeded(9);
        for _ in 0..100 {
            let params = random_params(&mut rng);
            let mut memory = Memory::default();
            for _ in 0..20 {
                memory.step(rng.random_range(-10. ..10.), &params);
                assert!(memory.output().abs() <= 1.);
            }
        }
    }

    #[test]
    fn test_zero_params_stay_zero() {
        let mut memory = Memory::default();
        memory.step(3., &CellParams::default());
        // forget and relevance gates are 0.5, the candidate tanh(0) is 0
        assert_eq!(Memory::default(), memory);
    }

    #[test]
    fn test_flush() {
        let params = CellParams::from_block(&[1.; 12]);
        let mut memory = Memory::default();
        memory.step(0.5, &params);
        assert_ne!(Memory::default(), memory);
        memory.flush();
        assert_eq!(Memory::default(), memory);
    }
}
