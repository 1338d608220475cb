use std::fmt::Debug;
use std::hash::Hash;

/// Machine word backing a [`Strategy`](super::Strategy), one bit per battlefield.
///
/// Implemented for `u32`, `u64` and `u128`. The runner picks the narrowest
/// word that covers a scenario's battlefield count, so mixtures over small
/// games hash and compare single 32-bit words.
pub trait Bits: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Number of battlefields this word can address.
    const WIDTH: usize;
    /// The empty allocation.
    const ZERO: Self;
    /// Whether battlefield `i` is committed. Out-of-range indices are not.
    fn has(self, i: usize) -> bool;
    /// Commit battlefield `i`.
    fn with(self, i: usize) -> Self;
    /// Number of committed battlefields.
    fn ones(self) -> usize;
    /// Next larger word with the same number of ones, all below bit `n`.
    fn successor(self, n: usize) -> Option<Self>;
    /// Lossless widening.
    fn widen(self) -> u128;
    /// Truncating narrowing to the low `WIDTH` bits.
    fn narrow(mask: u128) -> Self;
}

macro_rules! bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            const WIDTH: usize = <$t>::BITS as usize;
            const ZERO: Self = 0;
            fn has(self, i: usize) -> bool {
                i < Self::WIDTH && (self >> i) & 1 == 1
            }
            fn with(self, i: usize) -> Self {
                assert!(i < Self::WIDTH, "battlefield {} out of range", i);
                self | ((1 as $t) << i)
            }
            fn ones(self) -> usize {
                self.count_ones() as usize
            }
            // Gosper's hack
            fn successor(self, n: usize) -> Option<Self> {
                if self == 0 {
                    return None;
                }
                let lowest = self & self.wrapping_neg();
                let ripple = self.checked_add(lowest)?;
                let next = (((ripple ^ self) >> 2) / lowest) | ripple;
                if n < Self::WIDTH && next >> n != 0 {
                    None
                } else {
                    Some(next)
                }
            }
            fn widen(self) -> u128 {
                self as u128
            }
            fn narrow(mask: u128) -> Self {
                mask as $t
            }
        }
    )*};
}

bits!(u32, u64, u128);
