use crate::error::{CoreResult, SeasonError};
use rand::Rng;
use serde::Serialize;

pub const MAX_MINUTES_PLAYED: u8 = 90;
pub const MAX_MATCH_GOALS: u8 = 6;
pub const FULL_APPEARANCE_MINUTES: u8 = 60;

/// One player's output in a single match.
///
/// Valid ranges: `minutes_played` 0..=90, `goals` and `assists` 0..=6
/// (a side never scores more than six in a simulated match).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Performance {
    pub minutes_played: u8,
    pub goals: u8,
    pub assists: u8,
}

impl Performance {
    pub fn new(minutes_played: u8, goals: u8, assists: u8) -> CoreResult<Self> {
        let performance = Performance {
            minutes_played,
            goals,
            assists,
        };

        performance.validate()?;

        Ok(performance)
    }

    /// Minutes in 30..=90, goals in 0..=2, assists in 0..=1
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Performance {
            minutes_played: rng.random_range(30..=MAX_MINUTES_PLAYED),
            goals: rng.random_range(0..=2),
            assists: rng.random_range(0..=1),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.minutes_played > MAX_MINUTES_PLAYED {
            return Err(SeasonError::InvalidPerformance(format!(
                "minutes_played {} exceeds {}",
                self.minutes_played, MAX_MINUTES_PLAYED
            )));
        }

        if self.goals > MAX_MATCH_GOALS || self.assists > MAX_MATCH_GOALS {
            return Err(SeasonError::InvalidPerformance(format!(
                "goals {} / assists {} exceed {}",
                self.goals, self.assists, MAX_MATCH_GOALS
            )));
        }

        Ok(())
    }

    #[inline]
    pub fn is_full_appearance(&self) -> bool {
        self.minutes_played >= FULL_APPEARANCE_MINUTES
    }

    #[inline]
    pub fn has_scored(&self) -> bool {
        self.goals > 0
    }
}
