use super::*;
use crate::game::*;
use crate::*;
use std::time::Duration;
use std::time::Instant;

/// Fictitious play over a [`Game`].
///
/// Owns both sides' mixtures for the duration of a run. Every iteration,
/// each side best-responds to the other's current mixture (simultaneously,
/// against the same pre-update mixtures), and both responses are appended
/// with weight 1. The mixtures are therefore the time-average of all best
/// responses so far, and after any number of iterations they are a valid
/// approximate equilibrium whose quality is the reported epsilon.
pub struct FictitiousPlay<B: Bits, O: Oracle<B>> {
    game: Game,
    oracle: O,
    attacker: Mixed<B>,
    defender: Mixed<B>,
    epoch: usize,
    timing: bool,
}

impl<B: Bits, O: Oracle<B>> FictitiousPlay<B, O> {
    pub fn new(game: Game, oracle: O, attacker: Mixed<B>, defender: Mixed<B>) -> Result<Self> {
        oracle.check(&game)?;
        for (side, mixed) in [(Side::Attacker, &attacker), (Side::Defender, &defender)] {
            if mixed.total() == 0 {
                return Err(Error::malformed(format!("{} starts with no strategies", side)));
            }
        }
        Ok(Self {
            game,
            oracle,
            attacker,
            defender,
            epoch: 0,
            timing: false,
        })
    }

    /// Attach per-iteration durations to emitted records.
    pub fn timed(mut self, timing: bool) -> Self {
        self.timing = timing;
        self
    }

    /// Iterations completed so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }
    pub fn mixture(&self, side: Side) -> &Mixed<B> {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }
    pub fn into_mixtures(self) -> (Mixed<B>, Mixed<B>) {
        (self.attacker, self.defender)
    }

    /// Attacker's expected payoff under the current mixtures.
    pub fn payoff(&self) -> Utility {
        self.game.field().u(&self.attacker, &self.defender)
    }

    /// Largest gain either side could get by deviating to a best response.
    pub fn exploitability(&self) -> Utility {
        let attack = self.oracle.attacker(&self.game, &self.defender);
        let defend = self.oracle.defender(&self.game, &self.attacker);
        Self::epsilon(self.payoff(), attack.value, defend.value)
    }

    /// Run one iteration and report it.
    pub fn step(&mut self) -> Record {
        self.iterate().0
    }

    /// Run up to `iterations` iterations, feeding each record to `sink`.
    ///
    /// `interrupt` is checked before every iteration; once raised, the run
    /// stops with both mixtures reflecting exactly the completed iterations.
    pub fn solve<S>(&mut self, iterations: usize, interrupt: &Interrupt, sink: &mut S) -> Result<Outcome>
    where
        S: Sink + ?Sized,
    {
        let mut progress = Progress::new(iterations);
        for _ in 0..iterations {
            if interrupt.raised() {
                break;
            }
            let (ref record, computation) = self.iterate();
            progress.tick(computation);
            log::trace!("{}", record);
            sink.record(record)?;
            if let Some(line) = progress.checkpoint(record) {
                log::info!("{}", line);
            }
        }
        Ok(progress.finish())
    }

    fn iterate(&mut self) -> (Record, Duration) {
        let start = Instant::now();
        let payoff = self.payoff();
        let attack = self.oracle.attacker(&self.game, &self.defender);
        let defend = self.oracle.defender(&self.game, &self.attacker);
        let epsilon = Self::epsilon(payoff, attack.value, defend.value);
        self.attacker.add(attack.strategy);
        self.defender.add(defend.strategy);
        self.epoch += 1;
        let elapsed = start.elapsed();
        let record = Record {
            iteration: self.epoch,
            epsilon,
            payoff,
            attacker: attack.value,
            defender: defend.value,
            duration: self.timing.then_some(elapsed),
        };
        (record, elapsed)
    }

    fn epsilon(payoff: Utility, attacker: Utility, defender: Utility) -> Utility {
        0f64.max(attacker - payoff).max(payoff - defender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(values: Vec<Value>, ba: usize, bd: usize) -> FictitiousPlay<u32, Method> {
        let game = Game::new(Field::from(values), ba, bd).unwrap();
        let attacker = Mixed::uniform(game.n(), ba).unwrap();
        let defender = Mixed::uniform(game.n(), bd).unwrap();
        FictitiousPlay::new(game, Method::Auto, attacker, defender).unwrap()
    }

    /// Raises the interrupt once `after` records have arrived.
    struct Tripwire {
        after: usize,
        records: Vec<Record>,
        interrupt: Interrupt,
    }

    impl Sink for Tripwire {
        fn record(&mut self, record: &Record) -> Result<()> {
            self.records.push(*record);
            if self.records.len() == self.after {
                self.interrupt.raise();
            }
            Ok(())
        }
    }

    #[test]
    fn first_iteration_on_three_fields() {
        let mut play = solver(vec![1, 2, 3], 1, 1);
        let record = play.step();
        assert_eq!(record.iteration, 1);
        assert!((record.payoff - 4. / 3.).abs() < 1e-12);
        assert!((record.attacker - 2.).abs() < 1e-12);
        assert!((record.defender - 1.).abs() < 1e-12);
        assert!((record.epsilon - 2. / 3.).abs() < 1e-12);
        assert_eq!(record.duration, None);
        let attacker = play.mixture(Side::Attacker);
        assert_eq!(attacker.total(), 4);
        assert_eq!(attacker.weight(&[2].into_iter().collect()), 2);
    }

    #[test]
    fn exploitability_previews_next_epsilon() {
        let mut play = solver(vec![4, 1, 3, 2, 5], 2, 2);
        for _ in 0..10 {
            let preview = play.exploitability();
            let record = play.step();
            assert!((preview - record.epsilon).abs() < 1e-12);
        }
    }

    #[test]
    fn epsilon_trends_down() {
        let mut play = solver(vec![1, 2, 3, 4, 5, 6], 2, 3);
        let ref mut records = Vec::new();
        let outcome = play
            .solve(3000, &Interrupt::default(), records)
            .unwrap();
        assert!(!outcome.interrupted());
        assert_eq!(records.len(), 3000);
        assert!(records.iter().all(|r| r.epsilon >= 0.));
        let mean = |rs: &[Record]| rs.iter().map(|r| r.epsilon).sum::<Utility>() / rs.len() as Utility;
        let early = mean(&records[..100]);
        let late = mean(&records[2900..]);
        assert!(late < early / 2., "early {} late {}", early, late);
    }

    #[test]
    fn penniless_attacker_never_scores() {
        let mut play = solver(vec![3, 1, 4, 1, 5], 0, 2);
        let ref mut records = Vec::new();
        play.solve(50, &Interrupt::default(), records).unwrap();
        for record in records.iter() {
            assert_eq!(record.payoff, 0.);
            assert_eq!(record.attacker, 0.);
            assert_eq!(record.defender, 0.);
            assert_eq!(record.epsilon, 0.);
        }
    }

    #[test]
    fn penniless_defender_concedes_everything_attacked() {
        let values = vec![3, 1, 4, 1, 5];
        let total = values.iter().sum::<Value>() as Utility;
        let mut play = solver(values, 5, 0);
        let record = play.step();
        assert_eq!(record.payoff, total);
        assert_eq!(record.defender, total);
    }

    #[test]
    fn interrupt_keeps_mixtures_consistent() {
        let mut play = solver(vec![2, 3, 5, 7], 2, 1);
        let (a0, d0) = (
            play.mixture(Side::Attacker).total(),
            play.mixture(Side::Defender).total(),
        );
        let ref mut tripwire = Tripwire {
            after: 17,
            records: Vec::new(),
            interrupt: Interrupt::default(),
        };
        let interrupt = tripwire.interrupt.clone();
        let outcome = play.solve(100, &interrupt, tripwire).unwrap();
        assert!(outcome.interrupted());
        assert_eq!(outcome.completed, 17);
        assert_eq!(tripwire.records.len(), 17);
        assert_eq!(play.epoch(), 17);
        assert_eq!(play.mixture(Side::Attacker).total(), a0 + 17);
        assert_eq!(play.mixture(Side::Defender).total(), d0 + 17);
        assert_eq!(
            tripwire.records.iter().map(|r| r.iteration).collect::<Vec<_>>(),
            (1..=17).collect::<Vec<_>>()
        );
    }

    #[test]
    fn raised_interrupt_runs_nothing() {
        let mut play = solver(vec![1, 1], 1, 1);
        let interrupt = Interrupt::default();
        interrupt.raise();
        let ref mut records = Vec::new();
        let outcome = play.solve(10, &interrupt, records).unwrap();
        assert_eq!(outcome.completed, 0);
        assert!(records.is_empty());
        assert_eq!(play.mixture(Side::Attacker).total(), 2);
    }

    #[test]
    fn seeded_run_grows_from_seed_count() {
        let game = Game::new(Field::from(vec![1, 2, 3, 4]), 2, 2).unwrap();
        let seed = Strategy::<u32>::try_from("1100").unwrap();
        let attacker = Mixed::seeded(4, 2, [seed, seed, seed]).unwrap();
        let defender = Mixed::seeded(4, 2, [seed]).unwrap();
        let mut play = FictitiousPlay::new(game, Greedy, attacker, defender)
            .unwrap()
            .timed(true);
        let ref mut records = Vec::new();
        play.solve(5, &Interrupt::default(), records).unwrap();
        assert!(records.iter().all(|r| r.duration.is_some()));
        let (attacker, defender) = play.into_mixtures();
        assert_eq!(attacker.total(), 8);
        assert_eq!(defender.total(), 6);
        assert!(attacker.plays().chain(defender.plays()).all(|(s, _)| s.size() == 2));
    }

    #[test]
    fn rejects_empty_mixture() {
        let game = Game::new(Field::from(vec![1, 2]), 1, 1).unwrap();
        let attacker = Mixed::<u32>::uniform(2, 1).unwrap();
        assert!(matches!(
            FictitiousPlay::new(game, Greedy, attacker, Mixed::default()),
            Err(Error::Malformed(_))
        ));
    }
}
