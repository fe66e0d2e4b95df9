use std::fmt;
use std::str::FromStr;

use crate::error::RuleParseError;

/// Life-like birth/survival rule.
/// Bit `n` of each mask is set when `n` live neighbors trigger the transition.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut bits = 0u16;
    let mut i = 0;
    while i < counts.len() {
        bits |= 1 << counts[i];
        i += 1;
    }
    bits
}

impl Rule {
    /// Conway's Game of Life (B3/S23)
    pub const CONWAY: Rule = Rule::new_unchecked(&[3], &[2, 3]);

    /// HighLife (B36/S23), home of the replicator
    pub const HIGHLIFE: Rule = Rule::new_unchecked(&[3, 6], &[2, 3]);

    /// Seeds (B2/S), nothing survives
    pub const SEEDS: Rule = Rule::new_unchecked(&[2], &[]);

    /// Day & Night (B3678/S34678)
    pub const DAY_AND_NIGHT: Rule = Rule::new_unchecked(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]);

    const fn new_unchecked(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Dead cell with `neighbors` live neighbors comes alive
    pub const fn is_born(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    /// Live cell with `neighbors` live neighbors stays alive
    pub const fn survives(&self, neighbors: u8) -> bool {
        neighbors <= 8 && self.survival & (1 << neighbors) != 0
    }

    /// Next state for a cell given its current state and neighbor count
    pub const fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives(neighbors)
        } else {
            self.is_born(neighbors)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::CONWAY
    }
}

/// Named rules accepted wherever a rule string is parsed
pub fn named_rules() -> [(&'static str, Rule); 4] {
    [
        ("conway", Rule::CONWAY),
        ("highlife", Rule::HIGHLIFE),
        ("seeds", Rule::SEEDS),
        ("daynight", Rule::DAY_AND_NIGHT),
    ]
}

fn parse_counts(digits: &str, rule: &str) -> Result<u16, RuleParseError> {
    digits.chars().try_fold(0u16, |bits, ch| match ch.to_digit(10) {
        Some(n) if n <= 8 => Ok(bits | 1 << n),
        Some(_) => Err(RuleParseError::BadCount(ch)),
        None => Err(RuleParseError::Malformed(rule.to_owned())),
    })
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim().to_ascii_lowercase();
        if let Some((_, rule)) = named_rules().into_iter().find(|(name, _)| *name == text) {
            return Ok(rule);
        }

        let (birth, survival) = text
            .split_once('/')
            .and_then(|(b, s)| Some((b.strip_prefix('b')?, s.strip_prefix('s')?)))
            .ok_or_else(|| RuleParseError::Malformed(s.to_owned()))?;

        let rule = Rule {
            birth: parse_counts(birth, s)?,
            survival: parse_counts(survival, s)?,
        };
        if rule.is_born(0) {
            return Err(RuleParseError::BirthOnZero);
        }
        Ok(rule)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |bits: u16| -> String {
            (0..=8u8)
                .filter(|n| bits & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };
        write!(f, "B{}/S{}", digits(self.birth), digits(self.survival))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rule = Rule::CONWAY;

        // Underpopulation
        assert!(!rule.evolve(true, 0));
        assert!(!rule.evolve(true, 1));

        // Survival
        assert!(rule.evolve(true, 2));
        assert!(rule.evolve(true, 3));

        // Overpopulation
        assert!(!rule.evolve(true, 4));
        assert!(!rule.evolve(true, 8));

        // Reproduction, and nothing else
        assert!(rule.evolve(false, 3));
        for n in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert!(!rule.evolve(false, n));
        }
    }

    #[test]
    fn test_default_is_conway() {
        assert_eq!(Rule::default(), Rule::CONWAY);
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("B3/S23".parse::<Rule>(), Ok(Rule::CONWAY));
        assert_eq!("b36/s23".parse::<Rule>(), Ok(Rule::HIGHLIFE));
        assert_eq!("B2/S".parse::<Rule>(), Ok(Rule::SEEDS));
        assert_eq!("B3678/S34678".parse::<Rule>(), Ok(Rule::DAY_AND_NIGHT));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("HighLife".parse::<Rule>(), Ok(Rule::HIGHLIFE));
        assert_eq!(" conway ".parse::<Rule>(), Ok(Rule::CONWAY));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!("23/3".parse::<Rule>(), Err(RuleParseError::Malformed(_))));
        assert_eq!("B9/S23".parse::<Rule>(), Err(RuleParseError::BadCount('9')));
        assert_eq!("B03/S23".parse::<Rule>(), Err(RuleParseError::BirthOnZero));
    }

    #[test]
    fn test_parse_reports_stray_characters_as_malformed() {
        assert_eq!(
            "B3/S23/x".parse::<Rule>(),
            Err(RuleParseError::Malformed("B3/S23/x".to_owned()))
        );
        assert_eq!(
            "B3x/S23".parse::<Rule>(),
            Err(RuleParseError::Malformed("B3x/S23".to_owned()))
        );
        assert_eq!(
            RuleParseError::BadCount('9').to_string(),
            "neighbor count '9' is out of range 0-8"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for (_, rule) in named_rules() {
            assert_eq!(rule.to_string().parse::<Rule>(), Ok(rule));
        }
        assert_eq!(Rule::CONWAY.to_string(), "B3/S23");
    }
}
