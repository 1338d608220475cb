use super::*;
use crate::*;

/// The ordered battlefield values of a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field(Vec<Value>);

impl Field {
    /// Number of battlefields.
    pub fn n(&self) -> usize {
        self.0.len()
    }
    pub fn values(&self) -> &[Value] {
        &self.0
    }
    /// Upper bound on any payoff.
    pub fn total(&self) -> Utility {
        self.0.iter().map(|v| *v as Utility).sum()
    }

    /// Attacker's expected payoff when `attacker` meets `defender`.
    ///
    /// Pure against pure, this is the value of every battlefield the attacker
    /// holds and the defender leaves open. Mixed arguments give the
    /// play-count-weighted average over both supports.
    pub fn u<A, D>(&self, attacker: &A, defender: &D) -> Utility
    where
        A: Play + ?Sized,
        D: Play + ?Sized,
    {
        let n = self.n();
        self.expectation(&attacker.marginals(n), &defender.marginals(n))
    }

    /// Σ value[i] · P(attacked i) · (1 − P(defended i)).
    pub fn expectation(&self, attacked: &[Probability], defended: &[Probability]) -> Utility {
        self.0
            .iter()
            .zip(attacked.iter().zip(defended.iter()))
            .map(|(v, (p, q))| *v as Utility * p * (1. - q))
            .sum()
    }
}

impl From<Vec<Value>> for Field {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values = self.0.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(" "))
    }
}
