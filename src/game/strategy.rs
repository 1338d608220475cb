use super::*;
use crate::*;

/// A pure strategy: the set of battlefields that receive a unit.
///
/// Bit `i` of the backing word is set iff battlefield `i` is committed.
/// Ordering is the numeric order of the bit pattern, which is also the
/// order [`Subsets`] enumerates in.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strategy<B: Bits>(B);

impl<B: Bits> Strategy<B> {
    pub fn empty() -> Self {
        Self(B::ZERO)
    }
    pub fn has(&self, i: usize) -> bool {
        self.0.has(i)
    }
    pub fn with(self, i: usize) -> Self {
        Self(self.0.with(i))
    }
    /// Number of units committed.
    pub fn size(&self) -> usize {
        self.0.ones()
    }
    /// Committed battlefield indices, ascending.
    pub fn fields(&self) -> impl Iterator<Item = usize> + '_ {
        (0..B::WIDTH).filter(|i| self.has(*i))
    }
    /// Reinterpret in another word width. Battlefields beyond the target
    /// width are dropped, so callers check the battlefield count first.
    pub fn recast<C: Bits>(self) -> Strategy<C> {
        Strategy(C::narrow(self.0.widen()))
    }
    /// `n` characters of '0'/'1', battlefield 0 first.
    pub fn render(&self, n: usize) -> String {
        (0..n).map(|i| if self.has(i) { '1' } else { '0' }).collect()
    }
}

impl<B: Bits> From<B> for Strategy<B> {
    fn from(bits: B) -> Self {
        Self(bits)
    }
}

/// battlefield index set isomorphism
impl<B: Bits> FromIterator<usize> for Strategy<B> {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// '0'/'1' string isomorphism, battlefield 0 first
impl<B: Bits> TryFrom<&str> for Strategy<B> {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        let n = s.chars().count();
        if n > B::WIDTH {
            return Err(Error::Overflow {
                n,
                limit: B::WIDTH,
                what: "strategy bit vector",
            });
        }
        s.chars()
            .enumerate()
            .try_fold(Self::empty(), |strategy, (i, c)| match c {
                '0' => Ok(strategy),
                '1' => Ok(strategy.with(i)),
                _ => Err(Error::malformed(format!(
                    "invalid character {:?} in strategy {:?}",
                    c, s
                ))),
            })
    }
}
