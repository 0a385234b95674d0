use crate::club::TeamSummary;
use crate::league::{CardAwards, LeagueTable, SeasonWinner};
use serde::Serialize;

/// Final state of a simulated season
#[derive(Debug, Clone, Serialize)]
pub struct SeasonResult {
    pub league: String,
    pub fixtures_played: usize,
    pub table: LeagueTable,
    pub winner: SeasonWinner,
    pub awards: CardAwards,
    pub teams: Vec<TeamSummary>,
}

impl SeasonResult {
    /// Each fixture updates exactly two teams
    pub fn results_recorded(&self) -> u32 {
        self.teams
            .iter()
            .map(|t| t.matches_won + t.matches_drawn + t.matches_lost)
            .sum()
    }

    pub fn summary_for(&self, team_name: &str) -> Option<&TeamSummary> {
        self.teams.iter().find(|t| t.name == team_name)
    }
}
