//! Random ordering and sampling.

use crate::ary::{Ary, renumber};
use crate::error::AryError;
use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index;

impl Ary {
    /// Shuffle in place with the thread-local RNG; keys are renumbered.
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let mut values: Vec<_> = std::mem::take(&mut self.items).into_values().collect();
        values.shuffle(rng);
        let entries = values.into_iter().map(|v| (crate::Key::Int(0), v));
        self.set_val(renumber(entries))
    }

    /// `num` distinct random keys, in their original order.
    pub fn rand(&self, num: usize) -> Result<Ary, AryError> {
        self.rand_with(num, &mut rand::thread_rng())
    }

    pub fn rand_with<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Result<Ary, AryError> {
        let picked = self.sample_positions(num, rng)?;
        Ok(self.derive_list(picked.into_iter().filter_map(|pos| {
            self.items.get_index(pos).map(|(k, _)| k.to_value())
        })))
    }

    /// `num` distinct random values, in their original order, renumbered.
    pub fn random(&self, num: usize) -> Result<Ary, AryError> {
        self.random_with(num, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Result<Ary, AryError> {
        let picked = self.sample_positions(num, rng)?;
        Ok(self.derive_list(
            picked
                .into_iter()
                .filter_map(|pos| self.items.get_index(pos).map(|(_, v)| v.clone())),
        ))
    }

    fn sample_positions<R: Rng + ?Sized>(
        &self,
        num: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, AryError> {
        let len = self.items.len();
        if num == 0 || num > len {
            return Err(AryError::OutOfRange {
                requested: num,
                size: len,
            });
        }
        let mut picked = index::sample(rng, len, num).into_vec();
        picked.sort_unstable();
        tracing::trace!(num, len, "sampled positions");
        Ok(picked)
    }
}
