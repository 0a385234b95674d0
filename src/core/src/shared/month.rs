use crate::error::{CoreResult, SeasonError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const MONTHS_IN_SEASON: usize = 12;

/// Zero-based calendar month a fixture is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Month(u8);

impl Month {
    pub fn new(index: usize) -> CoreResult<Self> {
        if index >= MONTHS_IN_SEASON {
            return Err(SeasonError::MonthOutOfRange(index));
        }

        Ok(Month(index as u8))
    }

    /// Month of the `n`-th fixture when fixtures are dealt out in calendar order
    pub fn for_fixture(n: usize) -> Self {
        Month((n % MONTHS_IN_SEASON) as u8)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn name(&self) -> &'static str {
        chrono::Month::try_from(self.0 + 1)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range() {
        assert_eq!(Month::new(0).unwrap().index(), 0);
        assert_eq!(Month::new(11).unwrap().index(), 11);
        assert_eq!(Month::new(12), Err(SeasonError::MonthOutOfRange(12)));
    }

    #[test]
    fn test_fixture_months_wrap_after_december() {
        assert_eq!(Month::for_fixture(0).index(), 0);
        assert_eq!(Month::for_fixture(11).index(), 11);
        assert_eq!(Month::for_fixture(12).index(), 0);
        assert_eq!(Month::for_fixture(29).index(), 5);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::new(0).unwrap().name(), "January");
        assert_eq!(Month::new(5).unwrap().to_string(), "June");
    }
}
