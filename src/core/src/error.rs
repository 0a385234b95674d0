use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum SeasonError {
    MonthOutOfRange(usize),
    NoData(&'static str),
    EmptyRoster(String),
    InvalidPerformance(String),
    InvalidConfig(String),
}

impl Display for SeasonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonError::MonthOutOfRange(month) => {
                write!(f, "month index {} is out of range 0..=11", month)
            }
            SeasonError::NoData(query) => {
                write!(f, "no data: {} requires at least one team", query)
            }
            SeasonError::EmptyRoster(team) => write!(f, "team {} has an empty roster", team),
            SeasonError::InvalidPerformance(msg) => write!(f, "invalid performance: {}", msg),
            SeasonError::InvalidConfig(msg) => write!(f, "invalid season config: {}", msg),
        }
    }
}

impl std::error::Error for SeasonError {}

/// Helper type for fallible engine operations
pub type CoreResult<T> = Result<T, SeasonError>;
