use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Speed level, 1 (slowest) to 5 (fastest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    // ms per tick, indexed by level - 1
    const INTERVALS_MS: [u64; 5] = [1000, 500, 100, 50, 10];

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    pub fn tick_interval(self) -> Duration {
        Duration::from_millis(Self::INTERVALS_MS[usize::from(self.0 - Self::MIN)])
    }

    pub fn harder(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn easier(self) -> Option<Self> {
        Self::new(self.0.checked_sub(1)?)
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or_else(|| {
            format!(
                "difficulty {} outside {}..={}",
                level,
                Self::MIN,
                Self::MAX
            )
        })
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert!(Difficulty::new(0).is_none());
        assert!(Difficulty::new(6).is_none());
        for level in 1..=5 {
            assert_eq!(Difficulty::new(level).unwrap().level(), level);
        }
    }

    #[test]
    fn test_intervals_get_faster() {
        let intervals: Vec<_> = (1..=5)
            .map(|l| Difficulty::new(l).unwrap().tick_interval())
            .collect();
        assert!(intervals.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(Difficulty::default().tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_harder_and_easier_stop_at_bounds() {
        let max = Difficulty::new(5).unwrap();
        let min = Difficulty::new(1).unwrap();
        assert!(max.harder().is_none());
        assert!(min.easier().is_none());
        assert_eq!(Difficulty::default().harder().unwrap().level(), 4);
        assert_eq!(Difficulty::default().easier().unwrap().level(), 2);
    }

    #[test]
    fn test_try_from() {
        assert!(Difficulty::try_from(3).is_ok());
        assert!(Difficulty::try_from(9).is_err());
    }
}
