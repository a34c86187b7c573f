use rand::Rng;
use rand::rngs::StdRng;

/// Source of the index drawn by random selection.
pub trait RandSource: Send {
    /// Index in `0..len`. `len` is never zero; larger values wrap.
    fn next_index(&mut self, len: usize) -> usize;
}

impl RandSource for StdRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Draws from the calling thread's generator. Nothing is shared between
/// calls, so there is nothing to initialise.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandSource for ThreadRngSource {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}
