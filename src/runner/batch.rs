use crate::game::*;
use crate::save::*;
use crate::solver::*;
use crate::*;
use anyhow::Context;
use std::path::Path;

/// Runs scenario files one after another.
///
/// Scenarios are independent: a failure is logged and skips only that
/// file, and an interrupt stops only the scenario running when it arrives.
/// The interrupt is re-armed as each scenario starts.
#[derive(Debug, Clone)]
pub struct Batch {
    method: Method,
    timing: bool,
    support: u128,
    interrupt: Interrupt,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new(Method::default(), false, Interrupt::default())
    }
}

impl Batch {
    pub fn new(method: Method, timing: bool, interrupt: Interrupt) -> Self {
        Self {
            method,
            timing,
            support: UNIFORM_SUPPORT_LIMIT,
            interrupt,
        }
    }

    /// Cap uniform starting mixtures at `support` strategies.
    pub fn limited(mut self, support: u128) -> Self {
        self.support = support;
        self
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }

    /// Solve every scenario in order. Returns how many failed.
    pub fn run<P: AsRef<Path>>(&self, scenarios: &[P]) -> usize {
        scenarios
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| match self.scenario(path) {
                Ok(_) => false,
                Err(e) => {
                    log::error!("{}: {:#}", path.display(), e);
                    true
                }
            })
            .count()
    }

    /// Solve one scenario file and write its trace and mixtures next to it.
    pub fn scenario(&self, path: &Path) -> anyhow::Result<Outcome> {
        self.interrupt.clear();
        let ref scenario = Scenario::load(path)
            .with_context(|| format!("read scenario {}", path.display()))?;
        log::info!("{} : {}", path.display(), scenario.game());
        match scenario.game().n() {
            n if n <= u32::WIDTH => self.solve::<u32>(path, scenario),
            n if n <= u64::WIDTH => self.solve::<u64>(path, scenario),
            _ => self.solve::<u128>(path, scenario),
        }
    }

    fn solve<B: Bits>(&self, path: &Path, scenario: &Scenario) -> anyhow::Result<Outcome> {
        let game = scenario.game();
        Oracle::<B>::check(&self.method, game)?;
        let attacker = scenario.initial_within::<B>(Side::Attacker, self.support)?;
        let defender = scenario.initial_within::<B>(Side::Defender, self.support)?;
        log::debug!(
            "{} oracle, {}-bit strategies, {} attacker and {} defender starting strategies",
            self.method.resolve(game),
            B::WIDTH,
            attacker.support(),
            defender.support(),
        );
        let ref outputs = Outputs::from(path);
        let mut trace = TraceWriter::create(&outputs.trace, self.timing)
            .with_context(|| format!("create trace {}", outputs.trace.display()))?;
        let mut play = FictitiousPlay::new(game.clone(), self.method, attacker, defender)?
            .timed(self.timing);
        let outcome = play
            .solve(scenario.iterations(), &self.interrupt, &mut trace)
            .with_context(|| format!("write trace {}", outputs.trace.display()))?;
        trace
            .finish()
            .with_context(|| format!("write trace {}", outputs.trace.display()))?;
        match outcome.interrupted() {
            true => log::warn!("{}", outcome),
            false => log::info!("{}", outcome),
        }
        let n = game.n();
        let (attacker, defender) = play.into_mixtures();
        for (side, mixed) in [(Side::Attacker, &attacker), (Side::Defender, &defender)] {
            let file = outputs.mixture(side);
            save_mixture(file, mixed, n)
                .with_context(|| format!("write {} mixture {}", side, file.display()))?;
        }
        log::info!("{}", outcome.timing());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Fresh scratch directory per test.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blotto-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn scenario(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn writes_trace_and_mixtures() {
        let ref dir = scratch("outputs");
        let path = scenario(dir, "small.txt", "25 1 1 3 1 2 3");
        let outcome = Batch::default().scenario(&path).unwrap();
        assert_eq!(outcome.completed, 25);
        assert!(!outcome.interrupted());
        let trace = std::fs::read_to_string(dir.join("small.csv")).unwrap();
        let mut rows = trace.lines();
        assert_eq!(
            rows.next(),
            Some("iteration,epsilon,payoff,attacker_best_response,defender_best_response")
        );
        assert_eq!(rows.next(), Some("1,0.66667,1.33333,2.00000,1.00000"));
        assert_eq!(rows.count(), 24);
        for side in [ATTACKER_EXTENSION, DEFENDER_EXTENSION] {
            let listings = load_mixture(&dir.join("small").with_extension(side)).unwrap();
            let mass = listings.iter().map(|l| l.probability).sum::<Probability>();
            assert!((mass - 1.).abs() < 1e-6);
            assert!(listings.iter().all(|l| l.strategy.size() == 1));
            assert!(listings.windows(2).all(|w| w[0].probability >= w[1].probability));
        }
    }

    #[test]
    fn timing_adds_duration_column() {
        let ref dir = scratch("timing");
        let path = scenario(dir, "timed.txt", "3 2 1 4 4 3 2 1");
        let batch = Batch::new(Method::Greedy, true, Interrupt::default());
        batch.scenario(&path).unwrap();
        let trace = std::fs::read_to_string(dir.join("timed.csv")).unwrap();
        assert!(trace.lines().next().unwrap().ends_with(",duration"));
        assert!(trace.lines().skip(1).all(|row| row.split(',').count() == 6));
    }

    #[test]
    fn seeded_mixtures_start_from_seeds() {
        let ref dir = scratch("seeded");
        let path = scenario(dir, "seeded.txt", "4 2 1 4 1 1 1 1 1 1100 2 1000 0001");
        Batch::default().scenario(&path).unwrap();
        let attacker = load_mixture(&dir.join("seeded.attacker")).unwrap();
        let defender = load_mixture(&dir.join("seeded.defender")).unwrap();
        assert!(attacker.iter().all(|l| l.strategy.size() == 2));
        assert!(defender.iter().all(|l| l.strategy.size() == 1));
    }

    #[test]
    fn failures_are_counted_and_skipped() {
        let ref dir = scratch("failures");
        let good = scenario(dir, "good.txt", "5 1 1 2 1 1");
        let bad = scenario(dir, "bad.txt", "5 3 1 2 1 1");
        let missing = dir.join("missing.txt");
        let failed = Batch::default().run(&[bad, missing, good]);
        assert_eq!(failed, 2);
        assert!(dir.join("good.csv").exists());
        assert!(!dir.join("bad.csv").exists());
    }

    #[test]
    fn exact_refuses_wide_scenarios_before_enumerating() {
        let ref dir = scratch("wide");
        let values = vec!["1"; 40].join(" ");
        let path = scenario(dir, "wide.txt", &format!("1 1 1 40 {}", values));
        let batch = Batch::new(Method::Exact, false, Interrupt::default());
        let error = batch.scenario(&path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Overflow { n: 40, limit: EXACT_WIDTH, .. })
        ));
    }

    #[test]
    fn wide_scenarios_use_wide_strategies() {
        let ref dir = scratch("u128");
        let values = (1..=100).map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        let seed = |ones: usize| "1".repeat(ones) + &"0".repeat(100 - ones);
        let text = format!("3 2 3 100 {} 1 {} 1 {}", values, seed(2), seed(3));
        let path = scenario(dir, "wide.txt", &text);
        let outcome = Batch::default().scenario(&path).unwrap();
        assert_eq!(outcome.completed, 3);
        let attacker = load_mixture(&dir.join("wide.attacker")).unwrap();
        assert!(attacker.iter().any(|l| l.strategy.has(99)));
    }

    #[test]
    fn interrupt_stops_one_scenario_only() {
        let ref dir = scratch("interrupt");
        let first = scenario(dir, "first.txt", &format!("{} 1 1 3 1 2 3", usize::MAX));
        let second = scenario(dir, "second.txt", "10 1 1 3 1 2 3");
        let batch = Batch::default();
        let outcome = std::thread::scope(|s| {
            let running = s.spawn(|| batch.scenario(&first));
            while !dir.join("first.csv").exists() {
                std::thread::sleep(std::time::Duration::from_millis(5));
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
            batch.interrupt().raise();
            running.join().unwrap()
        })
        .unwrap();
        assert!(outcome.interrupted());
        let trace = std::fs::read_to_string(dir.join("first.csv")).unwrap();
        assert_eq!(trace.lines().count(), outcome.completed + 1);
        let listings = load_mixture(&dir.join("first.attacker")).unwrap();
        assert!(!listings.is_empty());
        let outcome = batch.scenario(&second).unwrap();
        assert_eq!(outcome.completed, 10);
        assert!(!outcome.interrupted());
    }

    #[test]
    fn stale_interrupt_is_cleared_on_start() {
        let ref dir = scratch("stale");
        let path = scenario(dir, "stale.txt", "10 1 1 3 1 2 3");
        let batch = Batch::default();
        batch.interrupt().raise();
        let outcome = batch.scenario(&path).unwrap();
        assert_eq!(outcome.completed, 10);
        assert!(!batch.interrupt().raised());
    }

    #[test]
    fn uniform_start_respects_support_limit() {
        let ref dir = scratch("support");
        let path = scenario(dir, "support.txt", "2 3 3 8 1 1 1 1 1 1 1 1");
        let tight = Batch::new(Method::Greedy, false, Interrupt::default()).limited(55);
        let error = tight.scenario(&path).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::Intractable { n: 8, budget: 3, limit: 55 })
        ));
        let exact = Batch::new(Method::Greedy, false, Interrupt::default()).limited(56);
        assert_eq!(exact.scenario(&path).unwrap().completed, 2);
    }
}
