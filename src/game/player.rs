use std::fmt;
use std::str::FromStr;

use crate::error::PlayerError;

pub const MAX_NAME_LENGTH: usize = 15;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub max_name_length: usize,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            max_name_length: MAX_NAME_LENGTH,
        }
    }
}

/// Disc colors a player can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Marker {
    pub const ALL: [Marker; 4] = [Marker::Red, Marker::Blue, Marker::Green, Marker::Yellow];

    /// Get marker name for display
    pub fn name(self) -> &'static str {
        match self {
            Marker::Red => "Red",
            Marker::Blue => "Blue",
            Marker::Green => "Green",
            Marker::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Marker {
    type Err = PlayerError;

    /// Case-insensitive marker name, e.g. `"red"` or `"Yellow"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Marker::ALL
            .into_iter()
            .find(|marker| marker.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlayerError::UnknownMarker(wanted.to_string()))
    }
}

/// Which of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// 1-based seat number for prompts
    pub fn number(self) -> usize {
        self.index() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Player {
            name: name.into(),
            marker,
        }
    }
}

/// A name is 1 to `max_len` characters of ASCII letters, digits, underscores
/// and spaces, with at least one non-space.
pub fn validate_name(name: &str, max_len: usize) -> Result<(), PlayerError> {
    let length = name.chars().count();
    let allowed = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace());

    if length == 0 || length > max_len || !allowed || name.trim().is_empty() {
        return Err(PlayerError::InvalidName {
            name: name.to_string(),
            max_len,
        });
    }
    Ok(())
}

/// Markers still free to pick. Once the first player has chosen, the second
/// player cannot take the same color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPool {
    available: Vec<Marker>,
}

impl MarkerPool {
    pub fn new() -> Self {
        MarkerPool {
            available: Marker::ALL.to_vec(),
        }
    }

    pub fn available(&self) -> &[Marker] {
        &self.available
    }

    pub fn take(&mut self, marker: Marker) -> Result<Marker, PlayerError> {
        let pos = self
            .available
            .iter()
            .position(|&m| m == marker)
            .ok_or(PlayerError::MarkerUnavailable(marker))?;
        Ok(self.available.remove(pos))
    }

    /// Parse a typed marker name and take it from the pool.
    pub fn pick(&mut self, input: &str) -> Result<Marker, PlayerError> {
        let marker = input.parse()?;
        self.take(marker)
    }
}

impl Default for MarkerPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
        assert_eq!(PlayerId::Two.number(), 2);
    }

    #[test]
    fn test_marker_name() {
        assert_eq!(Marker::Red.name(), "Red");
        assert_eq!(Marker::Yellow.to_string(), "Yellow");
    }

    #[test]
    fn test_marker_from_str_ignores_case() {
        assert_eq!("blue".parse::<Marker>().unwrap(), Marker::Blue);
        assert_eq!("GREEN".parse::<Marker>().unwrap(), Marker::Green);
        assert_eq!(" red ".parse::<Marker>().unwrap(), Marker::Red);
        assert_eq!(
            "purple".parse::<Marker>(),
            Err(PlayerError::UnknownMarker("purple".into()))
        );
    }

    #[test]
    fn test_valid_names() {
        for name in ["Alice", "bob_2", "Mary Jane", "x", "abcdefghijklmno"] {
            assert!(validate_name(name, MAX_NAME_LENGTH).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "   ", "abcdefghijklmnop", "semi;colon", "dash-name", "émile"] {
            assert!(validate_name(name, MAX_NAME_LENGTH).is_err(), "{name:?} should be invalid");
        }
    }

    #[test]
    fn test_name_length_is_configurable() {
        assert!(validate_name("abcdef", 5).is_err());
        assert!(validate_name("abcde", 5).is_ok());
    }

    #[test]
    fn test_marker_pool_removes_taken_marker() {
        let mut pool = MarkerPool::new();
        assert_eq!(pool.pick("red"), Ok(Marker::Red));
        assert_eq!(pool.available(), &[Marker::Blue, Marker::Green, Marker::Yellow]);
        assert_eq!(pool.pick("Red"), Err(PlayerError::MarkerUnavailable(Marker::Red)));
        assert_eq!(pool.take(Marker::Green), Ok(Marker::Green));
    }

    #[test]
    fn test_marker_pool_rejects_unknown() {
        let mut pool = MarkerPool::new();
        assert!(pool.pick("orange").is_err());
        assert_eq!(pool.available().len(), 4);
    }
}
