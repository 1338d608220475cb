use super::*;
use crate::*;
use std::path::Path;
use std::str::FromStr;

/// One problem instance, as read from a scenario file.
///
/// Whitespace-separated tokens, in order:
///
/// ```text
/// iterations  BA  BD  N  value_0 .. value_{N-1}
/// [ count_A  strategy .. ]
/// [ count_D  strategy .. ]
/// ```
///
/// Seed strategies are N characters of '0'/'1', battlefield 0 first. A
/// missing or zero seed count means that side starts from the uniform mixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    iterations: usize,
    game: Game,
    attacker: Vec<Strategy<u128>>,
    defender: Vec<Strategy<u128>>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        std::fs::read_to_string(path)?.parse()
    }
    /// Fictitious-play iteration budget.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    /// Supplied seed strategies, empty when the side starts uniform.
    pub fn seeds(&self, side: Side) -> &[Strategy<u128>] {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }

    /// The side's starting mixture: its seeds, or uniform when none were given.
    pub fn initial<B: Bits>(&self, side: Side) -> Result<Mixed<B>> {
        self.initial_within(side, UNIFORM_SUPPORT_LIMIT)
    }

    /// [`Scenario::initial`], with a uniform start capped at `limit` strategies.
    pub fn initial_within<B: Bits>(&self, side: Side, limit: u128) -> Result<Mixed<B>> {
        let n = self.game.n();
        let budget = self.game.budget(side);
        if n > B::WIDTH {
            return Err(Error::Overflow {
                n,
                limit: B::WIDTH,
                what: "strategy bit vector",
            });
        }
        match self.seeds(side) {
            [] => Mixed::uniform_within(n, budget, limit),
            seeds => Mixed::seeded(n, budget, seeds.iter().map(|s| s.recast())),
        }
    }
}

impl FromStr for Scenario {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let ref mut tokens = Tokens(s.split_whitespace().peekable());
        let iterations = tokens.take::<usize>("iteration count")?;
        if iterations == 0 {
            return Err(Error::malformed("iteration count must be positive"));
        }
        let attacker = tokens.take::<usize>("attacker budget")?;
        let defender = tokens.take::<usize>("defender budget")?;
        let n = tokens.take::<usize>("battlefield count")?;
        if n == 0 {
            return Err(Error::malformed("no battlefields"));
        }
        if n > MAX_WIDTH {
            return Err(Error::Overflow {
                n,
                limit: MAX_WIDTH,
                what: "widest strategy bit vector",
            });
        }
        let values = (0..n)
            .map(|i| match tokens.take::<Value>(&format!("value of battlefield {}", i))? {
                0 => Err(Error::malformed(format!("battlefield {} has no value", i))),
                v => Ok(v),
            })
            .collect::<Result<Vec<_>>>()?;
        let game = Game::new(Field::from(values), attacker, defender)?;
        let attacker = tokens.seeds(Side::Attacker, n, attacker)?;
        let defender = tokens.seeds(Side::Defender, n, defender)?;
        if let Some(extra) = tokens.0.next() {
            return Err(Error::malformed(format!("unexpected trailing token {:?}", extra)));
        }
        Ok(Self {
            iterations,
            game,
            attacker,
            defender,
        })
    }
}

struct Tokens<'a>(std::iter::Peekable<std::str::SplitWhitespace<'a>>);

impl<'a> Tokens<'a> {
    fn take<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .0
            .next()
            .ok_or_else(|| Error::malformed(format!("missing {}", what)))?;
        token
            .parse::<T>()
            .map_err(|_| Error::malformed(format!("invalid {} {:?}", what, token)))
    }

    /// Optional seed block. Absent means none.
    fn seeds(&mut self, side: Side, n: usize, budget: usize) -> Result<Vec<Strategy<u128>>> {
        if self.0.peek().is_none() {
            return Ok(Vec::new());
        }
        let count = self.take::<usize>(&format!("{} seed count", side))?;
        (0..count)
            .map(|i| {
                let token = self.take::<String>(&format!("{} seed {}", side, i))?;
                if token.chars().count() != n {
                    return Err(Error::malformed(format!(
                        "{} seed {:?} does not cover {} battlefields",
                        side, token, n
                    )));
                }
                let strategy = Strategy::<u128>::try_from(token.as_str())?;
                if strategy.size() != budget {
                    return Err(Error::InvalidSeed {
                        strategy: token,
                        expected: budget,
                        found: strategy.size(),
                    });
                }
                Ok(strategy)
            })
            .collect()
    }
}
