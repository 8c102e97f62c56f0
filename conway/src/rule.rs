// rule.rs - Survive/born rule sets and "S/B" notation

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rule presets offered by the side panel.
pub const RULE_PRESETS: &[&str] = &["23/3", "234/34", "1357/1357", "245/368"];

/// Largest neighbor count a cell can have on the torus.
pub const MAX_NEIGHBORS: u8 = 8;

/// Set of neighbor counts in `0..=8`, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NeighborSet(u16);

impl NeighborSet {
    pub const EMPTY: Self = Self(0);

    /// Builds a set from counts; anything above 8 is dropped.
    pub fn from_counts(counts: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::EMPTY;
        for n in counts {
            set.insert(n);
        }
        set
    }

    /// Returns `false` if `n` is out of range and was not inserted.
    pub fn insert(&mut self, n: u8) -> bool {
        if n > MAX_NEIGHBORS {
            return false;
        }
        self.0 |= 1 << n;
        true
    }

    #[inline]
    pub fn contains(&self, n: u8) -> bool {
        n <= MAX_NEIGHBORS && self.0 & (1 << n) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=MAX_NEIGHBORS).filter(move |&n| self.contains(n))
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.iter() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Errors from parsing "S/B" rule notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("rule `{0}` has no '/' separating survive and born digits")]
    MissingSeparator(String),

    #[error("rule `{0}` has more than one '/'")]
    ExtraSeparator(String),

    #[error("invalid character {ch:?} in rule `{rule}`")]
    InvalidChar { rule: String, ch: char },

    #[error("neighbor count {digit} in rule `{rule}` is above 8")]
    CountOutOfRange { rule: String, digit: u8 },
}

/// Survive/born counting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Neighbor counts at which a live cell stays alive.
    pub survive: NeighborSet,
    /// Neighbor counts at which a dead cell comes alive.
    pub born: NeighborSet,
}

impl Rule {
    pub fn new(survive: NeighborSet, born: NeighborSet) -> Self {
        Self { survive, born }
    }

    /// Conway's standard rule, "23/3".
    pub fn conway() -> Self {
        Self {
            survive: NeighborSet::from_counts([2, 3]),
            born: NeighborSet::from_counts([3]),
        }
    }

    /// Next state of one cell given its current state and live neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survive.contains(neighbors)
        } else {
            self.born.contains(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.survive, self.born)
    }
}

fn parse_digits(rule: &str, digits: &str) -> Result<NeighborSet, RuleParseError> {
    let mut set = NeighborSet::EMPTY;
    for ch in digits.chars() {
        let digit = ch.to_digit(10).ok_or_else(|| RuleParseError::InvalidChar {
            rule: rule.to_owned(),
            ch,
        })? as u8;
        if !set.insert(digit) {
            return Err(RuleParseError::CountOutOfRange {
                rule: rule.to_owned(),
                digit,
            });
        }
    }
    Ok(set)
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (survive, born) = s
            .split_once('/')
            .ok_or_else(|| RuleParseError::MissingSeparator(s.to_owned()))?;
        if born.contains('/') {
            return Err(RuleParseError::ExtraSeparator(s.to_owned()));
        }
        Ok(Self {
            survive: parse_digits(s, survive)?,
            born: parse_digits(s, born)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_notation() {
        let rule: Rule = "23/3".parse().unwrap();
        assert_eq!(rule, Rule::conway());
        assert!(rule.survive.contains(2) && rule.survive.contains(3));
        assert!(!rule.survive.contains(4));
        assert!(rule.born.contains(3));
    }

    #[test]
    fn every_preset_parses_and_round_trips() {
        for preset in RULE_PRESETS {
            let rule: Rule = preset.parse().unwrap();
            assert_eq!(rule.to_string(), *preset);
        }
    }

    #[test]
    fn empty_sides_are_allowed() {
        let rule: Rule = "/3".parse().unwrap();
        assert!(rule.survive.is_empty());
        assert_eq!(rule.to_string(), "/3");

        let rule: Rule = "23/".parse().unwrap();
        assert!(rule.born.is_empty());
    }

    #[test]
    fn display_is_canonical() {
        let rule: Rule = "332/3".parse().unwrap();
        assert_eq!(rule.to_string(), "23/3");
    }

    #[test]
    fn rejects_malformed_rules() {
        assert_eq!(
            "233".parse::<Rule>(),
            Err(RuleParseError::MissingSeparator("233".into()))
        );
        assert_eq!(
            "2/3/4".parse::<Rule>(),
            Err(RuleParseError::ExtraSeparator("2/3/4".into()))
        );
        assert!(matches!(
            "2a/3".parse::<Rule>(),
            Err(RuleParseError::InvalidChar { ch: 'a', .. })
        ));
        assert!(matches!(
            "29/3".parse::<Rule>(),
            Err(RuleParseError::CountOutOfRange { digit: 9, .. })
        ));
    }

    #[test]
    fn next_state_follows_sets() {
        let rule = Rule::conway();
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        assert!(!rule.next_state(true, 4));
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(false, 2));
    }
}
