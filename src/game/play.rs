use super::*;
use crate::*;

/// Anything a side can play: a pure [`Strategy`] or a [`Mixed`] strategy.
///
/// Payoffs only depend on how likely each battlefield is to receive a unit,
/// because the two sides randomize independently. A pure strategy's
/// marginals are exactly 0 or 1.
pub trait Play {
    /// Probability that each of the first `n` battlefields is committed.
    fn marginals(&self, n: usize) -> Vec<Probability>;
}

impl<B: Bits> Play for Strategy<B> {
    fn marginals(&self, n: usize) -> Vec<Probability> {
        (0..n)
            .map(|i| if self.has(i) { 1. } else { 0. })
            .collect()
    }
}

impl<B: Bits> Play for Mixed<B> {
    /// An empty mixture commits nowhere.
    fn marginals(&self, n: usize) -> Vec<Probability> {
        let mut counts = vec![0 as Weight; n];
        for (strategy, weight) in self.plays() {
            for i in strategy.fields().take_while(|i| *i < n) {
                counts[i] += weight;
            }
        }
        let total = self.total().max(1) as Probability;
        counts
            .into_iter()
            .map(|count| count as Probability / total)
            .collect()
    }
}
