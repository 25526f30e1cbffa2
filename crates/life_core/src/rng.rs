use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded RNG owned by a session so gambling outcomes replay exactly.
#[derive(Debug, Clone)]
pub struct SimulationRng {
    seed: u64,
    rng: StdRng,
}

impl SimulationRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform over both sides.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_range(1..=2) == 1
    }
}
