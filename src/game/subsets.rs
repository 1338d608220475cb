use super::*;

/// Every pure strategy committing exactly `k` of `n` battlefields,
/// in ascending order of bit pattern.
///
/// Starts from the lowest pattern `0..k` and steps with [`Bits::successor`],
/// so iteration is O(1) per strategy and allocation-free.
pub struct Subsets<B: Bits> {
    n: usize,
    next: Option<B>,
}

impl<B: Bits> Subsets<B> {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            next: (k <= n && n <= B::WIDTH).then(|| (0..k).fold(B::ZERO, B::with)),
        }
    }

    /// Binomial coefficient C(n, k), saturating at `u128::MAX`.
    pub fn binomial(n: usize, k: usize) -> u128 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k);
        (0..k).try_fold(1u128, |c, i| {
            c.checked_mul((n - i) as u128).map(|c| c / (i + 1) as u128)
        })
        .unwrap_or(u128::MAX)
    }
}

impl<B: Bits> Iterator for Subsets<B> {
    type Item = Strategy<B>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.successor(self.n);
        Some(Strategy::from(current))
    }
}
