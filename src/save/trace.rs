use crate::solver::*;
use crate::*;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Per-iteration trace as CSV.
///
/// ```text
/// iteration,epsilon,payoff,attacker_best_response,defender_best_response[,duration]
/// ```
///
/// Values carry [`TRACE_PRECISION`] decimals. The `duration` column, in
/// microseconds, is present only when the writer was built with timing.
pub struct TraceWriter<W: Write> {
    out: W,
    timing: bool,
}

impl TraceWriter<BufWriter<File>> {
    pub fn create(path: &Path, timing: bool) -> Result<Self> {
        Self::new(BufWriter::new(File::create(path)?), timing)
    }
}

impl<W: Write> TraceWriter<W> {
    /// Wrap `out` and write the header row.
    pub fn new(mut out: W, timing: bool) -> Result<Self> {
        write!(
            out,
            "iteration,epsilon,payoff,attacker_best_response,defender_best_response"
        )?;
        match timing {
            true => writeln!(out, ",duration")?,
            false => writeln!(out)?,
        }
        Ok(Self { out, timing })
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(self.out.flush()?)
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Sink for TraceWriter<W> {
    fn record(&mut self, record: &Record) -> Result<()> {
        let p = TRACE_PRECISION;
        write!(
            self.out,
            "{},{:.p$},{:.p$},{:.p$},{:.p$}",
            record.iteration, record.epsilon, record.payoff, record.attacker, record.defender,
        )?;
        match (self.timing, record.duration) {
            (true, Some(duration)) => writeln!(self.out, ",{}", duration.as_micros())?,
            (true, None) => writeln!(self.out, ",")?,
            (false, _) => writeln!(self.out)?,
        }
        Ok(())
    }
}
