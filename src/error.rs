use thiserror::Error;

/// Invalid driver configuration, rejected when the configuration is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("area size must be bigger than zero")]
    NonPositiveAreaSize,

    #[error("area size must be at most {max}")]
    AreaSizeTooLarge { max: u32 },

    #[error("tick delay must be bigger than zero")]
    NonPositiveDelay,

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Failure to read a life-like rule in B/S notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule '{0}' is not in B/S notation (expected e.g. B3/S23)")]
    Malformed(String),

    #[error("neighbor count '{0}' is out of range 0-8")]
    BadCount(char),

    #[error("B0 rules are not supported on an unbounded plane")]
    BirthOnZero,
}

/// Failure to resolve a pattern placement given on the command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern '{0}'")]
    Unknown(String),

    #[error("bad placement '{0}' (expected name@x,y)")]
    BadPlacement(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Rule(#[from] RuleParseError),

    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type Result<T> = std::result::Result<T, Error>;
