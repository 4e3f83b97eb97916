//! Identifier types for the elevator simulator
//!
//! Passengers are addressed by a stable arena index so that floors and the
//! elevator hold identifiers rather than aliasable references. Simulation runs
//! carry a UUID so that reports from separate runs can be told apart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a passenger, indexing the passenger registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassengerId(pub usize);

impl PassengerId {
    /// Index of the passenger record inside the registry
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAX_{:04}", self.0)
    }
}

impl FromStr for PassengerId {
    type Err = String;

    /// Accepts `PAX_0007` as well as a bare index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("PAX_").unwrap_or(s);
        digits
            .parse::<usize>()
            .map(PassengerId)
            .map_err(|e| format!("Invalid passenger id '{}': {}", s, e))
    }
}

impl Serialize for PassengerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PassengerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Unique identifier for one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RUN_{}", self.0.simple())
    }
}

impl Serialize for RunId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("RUN_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for RunId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("RUN_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(RunId(uuid))
        } else {
            // Fallback: accept a bare UUID
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(RunId(uuid))
        }
    }
}
