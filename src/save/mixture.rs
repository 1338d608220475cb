use crate::game::*;
use crate::*;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

const HEADER: &str = "strategy,probability";

/// One row of a mixture file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Listing {
    pub strategy: Strategy<u128>,
    pub probability: Probability,
}

/// Write `mixed` as `strategy,probability` rows, most likely first.
pub fn write_mixture<B, W>(mut out: W, mixed: &Mixed<B>, n: usize) -> Result<()>
where
    B: Bits,
    W: Write,
{
    writeln!(out, "{}", HEADER)?;
    for (strategy, probability) in mixed.ranked() {
        writeln!(
            out,
            "{},{:.p$}",
            strategy.render(n),
            probability,
            p = MIXTURE_PRECISION
        )?;
    }
    Ok(out.flush()?)
}

/// Parse rows written by [`write_mixture`]. Every strategy must have the same length.
pub fn read_mixture<R: BufRead>(input: R) -> Result<Vec<Listing>> {
    let mut lines = input.lines();
    match lines.next().transpose()? {
        Some(ref header) if header.trim() == HEADER => {}
        Some(header) => return Err(Error::malformed(format!("unexpected header {:?}", header))),
        None => return Err(Error::malformed("empty mixture file")),
    }
    let mut width = None;
    let mut listings = Vec::new();
    for line in lines {
        let ref line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (strategy, probability) = line
            .trim()
            .split_once(',')
            .ok_or_else(|| Error::malformed(format!("mixture row {:?} has no comma", line)))?;
        match width.replace(strategy.len()) {
            Some(w) if w != strategy.len() => {
                return Err(Error::malformed(format!(
                    "strategy {} has {} battlefields, expected {}",
                    strategy,
                    strategy.len(),
                    w
                )));
            }
            _ => {}
        }
        listings.push(Listing {
            strategy: Strategy::try_from(strategy)?,
            probability: probability
                .parse()
                .map_err(|_| Error::malformed(format!("bad probability {:?}", probability)))?,
        });
    }
    Ok(listings)
}

pub fn save_mixture<B: Bits>(path: &Path, mixed: &Mixed<B>, n: usize) -> Result<()> {
    write_mixture(BufWriter::new(File::create(path)?), mixed, n)
}

pub fn load_mixture(path: &Path) -> Result<Vec<Listing>> {
    read_mixture(BufReader::new(File::open(path)?))
}
