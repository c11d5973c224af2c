use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform random choices for the generators.
///
/// Generators draw every random decision through this trait, so a seeded
/// source reproduces the same maze bit for bit.
pub trait RandomSource {
    /// Restarts the stream from `value`.
    fn seed(&mut self, value: u64);

    /// Returns a uniformly distributed integer in `0..bound`.
    ///
    /// # Panics
    /// If `bound` is zero.
    fn next_int(&mut self, bound: usize) -> usize;

    /// Picks a uniformly random element of `items`, or `None` if it is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.next_int(items.len())])
        }
    }
}

/// [`RandomSource`] backed by the standard RNG from `rand`.
#[derive(Debug, Clone)]
pub struct MazeRng {
    inner: StdRng,
}

impl MazeRng {
    /// A reproducible stream starting from `seed`.
    pub fn seeded(seed: u64) -> Self {
        MazeRng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// A non-reproducible stream seeded from the operating system.
    pub fn uninitialized() -> Self {
        MazeRng {
            inner: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, otherwise drawn from the operating system.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => MazeRng::seeded(s),
            None => MazeRng::uninitialized(),
        }
    }
}

impl Default for MazeRng {
    fn default() -> Self {
        MazeRng::uninitialized()
    }
}

impl RandomSource for MazeRng {
    fn seed(&mut self, value: u64) {
        self.inner = StdRng::seed_from_u64(value);
    }

    fn next_int(&mut self, bound: usize) -> usize {
        self.inner.random_range(0..bound)
    }
}
