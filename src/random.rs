//! Randomness used by the search. Every stochastic operation takes its rng explicitly, so a
//! search seeded through [WyRng::seeded] is reproducible end to end.

use core::cmp::min;
use rand::{Rng, RngCore};
use std::{
    fs::File,
    io::{self, Read},
};

/// Bernoulli trials against a plain probability.
pub trait Happens: RngCore {
    /// `true` with probability `p`. Never for `p <= 0`, always for `p >= 1`.
    fn happens(&mut self, p: f64) -> bool;
}

impl<T: RngCore + ?Sized> Happens for T {
    fn happens(&mut self, p: f64) -> bool {
        self.random::<f64>() < p
    }
}

#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_ne_bytes()[..lim]);
            idx += lim;
        }
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// A [WyRng] seeded from the os, falling back to the thread rng where there is no urandom
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::rng().next_u64()))
}

/// A [WyRng] seeded with `seed` when given, otherwise [default_rng]
pub fn rng_from_seed(seed: Option<u64>) -> WyRng {
    seed.map_or_else(default_rng, WyRng::seeded)
}
