//! Passenger name source and generation
//!
//! Names are opaque labels. They come from a text file with one name per line,
//! or from the built-in list when no file is configured.

use rand::{RngCore, SeedableRng};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::facility::Building;
use crate::simulation::{RandomSource, SimulationError, SimulationResult};
use crate::types::PassengerId;

const BUILTIN_NAMES: &str = include_str!("../../data/names.txt");

/// A non-empty list of names to draw passenger labels from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSource {
    names: Vec<String>,
}

impl NameSource {
    /// Build from explicit names. Blank entries are dropped.
    pub fn from_names<I, S>(names: I) -> SimulationResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(SimulationError::name_source("name list is empty"));
        }

        Ok(Self { names })
    }

    /// Parse one name per line
    pub fn parse(content: &str) -> SimulationResult<Self> {
        Self::from_names(content.lines())
    }

    /// Load names from a file, one per line
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulationResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SimulationError::name_source(format!("cannot read {}: {}", path.display(), e))
        })?;

        let source = Self::parse(&content)
            .map_err(|_| SimulationError::name_source(format!("{} has no names", path.display())))?;
        info!("Loaded {} names from {}", source.len(), path.display());
        Ok(source)
    }

    /// The list shipped with the simulator
    pub fn builtin() -> Self {
        Self {
            names: BUILTIN_NAMES
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Configured file when given, otherwise the built-in list
    pub fn from_optional_file(path: Option<&str>) -> SimulationResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Number of names available
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Draw one name uniformly, with replacement
    pub fn choose<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.next_below(self.names.len() as u32) as usize;
        &self.names[index.min(self.names.len() - 1)]
    }
}

/// Generator that admits named passengers into a building
pub struct PassengerGenerator {
    names: NameSource,
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for PassengerGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassengerGenerator").field("names", &self.names.len()).finish()
    }
}

impl PassengerGenerator {
    /// Create a new passenger generator
    pub fn new(names: NameSource) -> Self {
        Self { names, rng: Box::new(rand::thread_rng()) }
    }

    /// Create a new passenger generator with a specific seed for reproducible results
    pub fn with_seed(names: NameSource, seed: u64) -> Self {
        Self { names, rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Draw the next passenger name
    pub fn next_name(&mut self) -> String {
        self.names.choose(&mut self.rng).to_string()
    }

    /// Enter `count` newly named passengers at the ground floor of `building`
    pub fn populate(&mut self, building: &mut Building, count: usize) -> Vec<PassengerId> {
        let ids: Vec<PassengerId> = (0..count).map(|_| building.enter(self.next_name())).collect();
        debug!("Entered {} passengers at the ground floor", ids.len());
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::ScriptedRandom;

    #[test]
    fn test_builtin_names_present() {
        let names = NameSource::builtin();
        assert!(!names.is_empty());
        assert!(names.names().iter().all(|n| !n.trim().is_empty()));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let names = NameSource::parse("Ada\n\n  Grace  \n\t\nLinus\n").unwrap();
        assert_eq!(names.names(), &["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(NameSource::parse("\n \n"), Err(SimulationError::NameSource(_))));
        assert!(NameSource::from_names(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_choose_uses_draw() {
        let names = NameSource::from_names(["Ada", "Grace", "Linus"]).unwrap();
        let mut rng = ScriptedRandom::new().with_integers([2, 0]);
        assert_eq!(names.choose(&mut rng), "Linus");
        assert_eq!(names.choose(&mut rng), "Ada");
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Hedy\nRadia").unwrap();
        file.flush().unwrap();

        let names = NameSource::from_file(file.path()).unwrap();
        assert_eq!(names.len(), 2);

        let missing = NameSource::from_file("/no/such/names.txt");
        assert!(matches!(missing, Err(SimulationError::NameSource(_))));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let names = NameSource::builtin();
        let mut a = PassengerGenerator::with_seed(names.clone(), 5);
        let mut b = PassengerGenerator::with_seed(names, 5);
        let first: Vec<String> = (0..10).map(|_| a.next_name()).collect();
        let second: Vec<String> = (0..10).map(|_| b.next_name()).collect();
        assert_eq!(first, second);
    }
}
