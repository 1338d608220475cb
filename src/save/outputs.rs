use crate::game::*;
use crate::*;
use std::path::Path;
use std::path::PathBuf;

/// Files written for one scenario, named after it by extension replacement:
/// `dir/name.ext` produces `dir/name.csv`, `dir/name.attacker`, `dir/name.defender`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    pub trace: PathBuf,
    pub attacker: PathBuf,
    pub defender: PathBuf,
}

impl Outputs {
    pub fn mixture(&self, side: Side) -> &Path {
        match side {
            Side::Attacker => &self.attacker,
            Side::Defender => &self.defender,
        }
    }
}

impl From<&Path> for Outputs {
    fn from(scenario: &Path) -> Self {
        Self {
            trace: scenario.with_extension(TRACE_EXTENSION),
            attacker: scenario.with_extension(ATTACKER_EXTENSION),
            defender: scenario.with_extension(DEFENDER_EXTENSION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_extension() {
        let outputs = Outputs::from(Path::new("runs/small.txt"));
        assert_eq!(outputs.trace, Path::new("runs/small.csv"));
        assert_eq!(outputs.mixture(Side::Attacker), Path::new("runs/small.attacker"));
        assert_eq!(outputs.mixture(Side::Defender), Path::new("runs/small.defender"));
    }

    #[test]
    fn appends_when_extensionless() {
        let outputs = Outputs::from(Path::new("scenario"));
        assert_eq!(outputs.trace, Path::new("scenario.csv"));
    }
}
