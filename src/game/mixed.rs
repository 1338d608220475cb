use super::*;
use crate::*;
use std::collections::BTreeMap;

/// An empirical mixed strategy: how many times each pure strategy was played.
///
/// Mixtures only grow. Probability of a strategy is its weight over the
/// total. Plays are kept in bit-pattern order so that every sum over the
/// support, and every listing written from it, is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mixed<B: Bits> {
    plays: BTreeMap<Strategy<B>, Weight>,
    total: Weight,
}

impl<B: Bits> Default for Mixed<B> {
    fn default() -> Self {
        Self {
            plays: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<B: Bits> Mixed<B> {
    /// Every strategy committing `budget` of `n` battlefields, weight 1 each.
    pub fn uniform(n: usize, budget: usize) -> Result<Self> {
        Self::uniform_within(n, budget, UNIFORM_SUPPORT_LIMIT)
    }

    /// [`Mixed::uniform`], refusing supports larger than `limit`.
    pub fn uniform_within(n: usize, budget: usize, limit: u128) -> Result<Self> {
        if n > B::WIDTH {
            return Err(Error::Overflow {
                n,
                limit: B::WIDTH,
                what: "strategy bit vector",
            });
        }
        if budget > n {
            return Err(Error::malformed(format!(
                "budget {} exceeds {} battlefields",
                budget, n
            )));
        }
        if Subsets::<B>::binomial(n, budget) > limit {
            return Err(Error::Intractable { n, budget, limit });
        }
        Ok(Subsets::<B>::new(n, budget).collect())
    }

    /// Weight 1 per supplied strategy. Every seed must commit exactly `budget` units.
    pub fn seeded<I>(n: usize, budget: usize, seeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = Strategy<B>>,
    {
        let mut mixed = Self::default();
        for seed in seeds {
            if seed.size() != budget {
                return Err(Error::InvalidSeed {
                    strategy: seed.render(n),
                    expected: budget,
                    found: seed.size(),
                });
            }
            mixed.add(seed);
        }
        Ok(mixed)
    }

    /// Record one more play of `strategy`.
    pub fn add(&mut self, strategy: Strategy<B>) {
        *self.plays.entry(strategy).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn total(&self) -> Weight {
        self.total
    }
    /// Number of distinct strategies played.
    pub fn support(&self) -> usize {
        self.plays.len()
    }
    pub fn weight(&self, strategy: &Strategy<B>) -> Weight {
        self.plays.get(strategy).copied().unwrap_or(0)
    }
    pub fn probability(&self, strategy: &Strategy<B>) -> Probability {
        match self.total {
            0 => 0.,
            t => self.weight(strategy) as Probability / t as Probability,
        }
    }
    pub fn plays(&self) -> impl Iterator<Item = (Strategy<B>, Weight)> + '_ {
        self.plays.iter().map(|(s, w)| (*s, *w))
    }

    /// Distinct strategies with their probabilities, most likely first.
    /// Equal probabilities keep bit-pattern order.
    pub fn ranked(&self) -> Vec<(Strategy<B>, Probability)> {
        let mut ranked = self
            .plays()
            .map(|(s, _)| (s, self.probability(&s)))
            .collect::<Vec<_>>();
        ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        ranked
    }
}

impl<B: Bits> FromIterator<Strategy<B>> for Mixed<B> {
    fn from_iter<I: IntoIterator<Item = Strategy<B>>>(iter: I) -> Self {
        let mut mixed = Self::default();
        iter.into_iter().for_each(|s| mixed.add(s));
        mixed
    }
}
