use crate::club::CardType;
use crate::shared::Month;
use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_goals(goals_scored: u32, goals_conceded: u32) -> Self {
        match goals_scored.cmp(&goals_conceded) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// League points for the outcome
    #[inline]
    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }
}

impl Display for MatchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "W"),
            MatchOutcome::Draw => write!(f, "D"),
            MatchOutcome::Loss => write!(f, "L"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl Score {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        Score {
            home_goals,
            away_goals,
        }
    }

    pub fn home_outcome(&self) -> MatchOutcome {
        MatchOutcome::from_goals(self.home_goals, self.away_goals)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home_goals, self.away_goals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardEvent {
    pub team: String,
    pub player_id: u32,
    pub card: CardType,
    pub triggered_suspension: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub month: Month,
    pub score: Score,
    pub cards: Vec<CardEvent>,
    pub suspensions_served: u32,
}

impl MatchResult {
    pub fn cards_for(&self, team: &str) -> impl Iterator<Item = &CardEvent> {
        self.cards.iter().filter(move |c| c.team == team)
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} [{}] ({}, cards {}/{})",
            self.home_team,
            self.score,
            self.away_team,
            self.score.home_outcome(),
            self.month,
            self.cards_for(&self.home_team).count(),
            self.cards_for(&self.away_team).count()
        )
    }
}
