use super::*;
use crate::*;

/// The static contest: battlefield values plus each side's unit budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    field: Field,
    attacker: usize,
    defender: usize,
}

impl Game {
    pub fn new(field: Field, attacker: usize, defender: usize) -> Result<Self> {
        if field.n() > MAX_WIDTH {
            return Err(Error::Overflow {
                n: field.n(),
                limit: MAX_WIDTH,
                what: "widest strategy bit vector",
            });
        }
        for (side, budget) in [(Side::Attacker, attacker), (Side::Defender, defender)] {
            if budget > field.n() {
                return Err(Error::malformed(format!(
                    "{} budget {} exceeds {} battlefields",
                    side,
                    budget,
                    field.n()
                )));
            }
        }
        Ok(Self {
            field,
            attacker,
            defender,
        })
    }
    pub fn field(&self) -> &Field {
        &self.field
    }
    pub fn n(&self) -> usize {
        self.field.n()
    }
    pub fn budget(&self, side: Side) -> usize {
        match side {
            Side::Attacker => self.attacker,
            Side::Defender => self.defender,
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BA = {}, BD = {}, battlefield = {}",
            self.attacker, self.defender, self.field
        )
    }
}
