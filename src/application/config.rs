use std::time::Duration;

use super::Viewport;
use crate::domain::Rule;
use crate::error::ConfigError;

/// Settings for a console run, checked when built.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub area_size: u32,
    pub tick_delay: Duration,
    /// Stop after this many generations; run forever when `None`
    pub generations: Option<u64>,
    pub rule: Rule,
    pub show_coordinates: bool,
    pub show_stats: bool,
    /// Recentre the view on the live cells every frame
    pub follow: bool,
    pub dead_glyph: char,
}

impl RunConfig {
    pub fn new(area_size: u32, tick_delay: Duration) -> Result<Self, ConfigError> {
        // Validate the window shape up front so a bad size never reaches the loop
        Viewport::from_area_size(area_size)?;
        if tick_delay.is_zero() {
            return Err(ConfigError::NonPositiveDelay);
        }
        Ok(Self {
            area_size,
            tick_delay,
            generations: None,
            rule: Rule::default(),
            show_coordinates: false,
            show_stats: false,
            follow: false,
            dead_glyph: ' ',
        })
    }

    pub fn with_generations(mut self, generations: Option<u64>) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_coordinates(mut self, show: bool) -> Self {
        self.show_coordinates = show;
        self
    }

    pub fn with_stats(mut self, show: bool) -> Self {
        self.show_stats = show;
        self
    }

    pub fn with_follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    pub fn with_dead_glyph(mut self, glyph: char) -> Self {
        self.dead_glyph = glyph;
        self
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        Viewport::from_area_size(self.area_size)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            area_size: 5,
            tick_delay: Duration::from_millis(250),
            generations: None,
            rule: Rule::default(),
            show_coordinates: false,
            show_stats: false,
            follow: false,
            dead_glyph: ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_values() {
        let config = RunConfig::new(7, Duration::from_millis(100)).unwrap();
        assert_eq!(config.area_size, 7);
        assert_eq!(config.viewport().unwrap().dimensions(), (56, 21));
        assert_eq!(config.rule, Rule::CONWAY);
    }

    #[test]
    fn test_rejects_zero_delay() {
        let err = RunConfig::new(5, Duration::ZERO).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveDelay);
        assert_eq!(err.to_string(), "tick delay must be bigger than zero");
    }

    #[test]
    fn test_rejects_zero_area() {
        let err = RunConfig::new(0, Duration::from_millis(100)).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveAreaSize);
    }

    #[test]
    fn test_builder_chain() {
        let config = RunConfig::default()
            .with_generations(Some(10))
            .with_rule(Rule::HIGHLIFE)
            .with_coordinates(true)
            .with_stats(true)
            .with_follow(true)
            .with_dead_glyph('-');
        assert_eq!(config.generations, Some(10));
        assert_eq!(config.rule, Rule::HIGHLIFE);
        assert!(config.show_coordinates && config.show_stats && config.follow);
        assert_eq!(config.dead_glyph, '-');
    }

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert!(RunConfig::new(config.area_size, config.tick_delay).is_ok());
    }
}
