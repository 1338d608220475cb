use crate::game::*;
use crate::*;

/// Payoff against a fixed opponent mixture, as an affine function of
/// which battlefields one side commits to.
///
/// Against independent opposition the payoff of committing to a set S is
/// `base + Σ_{i ∈ S} gain[i]`:
///
/// - attacker: `gain[i] = value[i] · (1 − P(defended i))`, `base = 0`
/// - defender: `gain[i] = −value[i] · P(attacked i)`, `base = Σ value[i] · P(attacked i)`
#[derive(Debug, Clone, PartialEq)]
pub struct Stakes {
    side: Side,
    base: Utility,
    gains: Vec<Utility>,
}

impl Stakes {
    pub fn new<B: Bits>(field: &Field, side: Side, opponent: &Mixed<B>) -> Self {
        let ref opposed = opponent.marginals(field.n());
        let values = field.values().iter().map(|v| *v as Utility);
        match side {
            Side::Attacker => Self {
                side,
                base: 0.,
                gains: values.zip(opposed).map(|(v, q)| v * (1. - q)).collect(),
            },
            Side::Defender => {
                let gains = values.zip(opposed).map(|(v, p)| -v * p).collect::<Vec<_>>();
                Self {
                    side,
                    base: -gains.iter().sum::<Utility>(),
                    gains,
                }
            }
        }
    }

    /// Payoff of committing to `strategy`.
    pub fn value<B: Bits>(&self, strategy: &Strategy<B>) -> Utility {
        self.base
            + strategy
                .fields()
                .take_while(|i| *i < self.gains.len())
                .map(|i| self.gains[i])
                .sum::<Utility>()
    }

    /// Battlefield indices from most to least attractive for this side.
    ///
    /// Equally attractive battlefields are ordered by index: highest first
    /// for the attacker, lowest first for the defender.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order = (0..self.gains.len()).collect::<Vec<_>>();
        order.sort_by(|a, b| {
            let x = self.side.orient(self.gains[*a]);
            let y = self.side.orient(self.gains[*b]);
            y.total_cmp(&x).then_with(|| match self.side {
                Side::Attacker => b.cmp(a),
                Side::Defender => a.cmp(b),
            })
        });
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_matches_payoff() {
        let field = Field::from(vec![2, 7, 1, 8]);
        let attacker = Mixed::<u32>::uniform(4, 2).unwrap();
        let defender = ["1000", "0100", "0100", "0001"]
            .into_iter()
            .map(|s| Strategy::<u32>::try_from(s).unwrap())
            .collect::<Mixed<u32>>();
        let attack = Stakes::new(&field, Side::Attacker, &defender);
        let defend = Stakes::new(&field, Side::Defender, &attacker);
        for s in Subsets::<u32>::new(4, 2) {
            assert!((attack.value(&s) - field.u(&s, &defender)).abs() < 1e-12);
            assert!((defend.value(&s) - field.u(&attacker, &s)).abs() < 1e-12);
        }
    }

    #[test]
    fn ranking_breaks_ties_by_side() {
        let field = Field::from(vec![3, 3, 5, 3]);
        let defender = Mixed::<u32>::uniform(4, 1).unwrap();
        let attack = Stakes::new(&field, Side::Attacker, &defender);
        assert_eq!(attack.ranking(), vec![2, 3, 1, 0]);
        let attacker = Mixed::<u32>::uniform(4, 2).unwrap();
        let defend = Stakes::new(&field, Side::Defender, &attacker);
        assert_eq!(defend.ranking(), vec![2, 0, 1, 3]);
    }
}
