use std::fmt;
use std::str::FromStr;

use crate::errors::SdkError;

/// A dotted numeric game version such as `1.4` or `1.4.3529`.
///
/// Versions have two to four numeric components. Ordering is component-wise
/// numeric, and a version orders before any longer version it is a prefix of
/// (`1.2` < `1.2.0` < `1.10`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameVersion {
    parts: Vec<u32>,
}

impl GameVersion {
    /// Whether `s` parses as a game version. Used to decide which output
    /// subdirectories count as version folders.
    pub fn is_version_str(s: &str) -> bool {
        s.parse::<GameVersion>().is_ok()
    }
}

impl FromStr for GameVersion {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: Vec<&str> = s.split('.').collect();
        if raw.len() < 2 || raw.len() > 4 {
            return Err(SdkError::InvalidVersion(s.to_string()));
        }
        let mut parts = Vec::with_capacity(raw.len());
        for p in raw {
            // reject empty components and anything u32 won't take ("1..2", "1.x", "1.-2")
            let n: u32 = p
                .parse()
                .map_err(|_| SdkError::InvalidVersion(s.to_string()))?;
            parts.push(n);
        }
        Ok(GameVersion { parts })
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.parts.iter().map(|p| p.to_string()).collect();
        write!(f, "{}", rendered.join("."))
    }
}
