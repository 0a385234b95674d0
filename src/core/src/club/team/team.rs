use crate::club::team::builder::TeamBuilder;
use crate::club::{CardType, Player, PlayerCollection};
use crate::config::{MonthlyPointsMode, RankingWeights};
use crate::error::CoreResult;
use crate::r#match::MatchOutcome;
use crate::shared::{MONTHS_IN_SEASON, Month};
use log::debug;
use serde::Serialize;

pub const GOALS_SCORED_CEILING: u32 = 70;
pub const GOALS_CONCEDED_CEILING: u32 = 30;

#[derive(Debug, Clone)]
pub struct Team {
    pub id: u32,
    pub name: String,

    pub players: PlayerCollection,

    pub matches_won: u32,
    pub matches_drawn: u32,
    pub matches_lost: u32,
    pub matches_played: u32,

    pub total_goals_scored: u32,
    pub total_goals_conceded: u32,

    pub total_match_points: u32,
    pub monthly_points: [u32; MONTHS_IN_SEASON],
    pub monthly_points_mode: MonthlyPointsMode,

    pub total_yellow_cards: u32,
    pub total_red_cards: u32,
    pub total_cards_received: u32,
}

impl Team {
    pub fn new(id: u32, name: String) -> Self {
        Team {
            id,
            name,
            players: PlayerCollection::default(),
            matches_won: 0,
            matches_drawn: 0,
            matches_lost: 0,
            matches_played: 0,
            total_goals_scored: 0,
            total_goals_conceded: 0,
            total_match_points: 0,
            monthly_points: [0; MONTHS_IN_SEASON],
            monthly_points_mode: MonthlyPointsMode::default(),
            total_yellow_cards: 0,
            total_red_cards: 0,
            total_cards_received: 0,
        }
    }

    pub fn builder() -> TeamBuilder {
        TeamBuilder::new()
    }

    /// No-op once the roster holds fifteen players
    pub fn add_player(&mut self, player: Player) -> bool {
        self.players.add(player)
    }

    pub fn add_match_result(
        &mut self,
        goals_scored: u32,
        goals_conceded: u32,
        month: usize,
    ) -> CoreResult<MatchOutcome> {
        let month = Month::new(month)?;

        self.total_goals_scored = self
            .total_goals_scored
            .saturating_add(goals_scored)
            .min(GOALS_SCORED_CEILING);
        self.total_goals_conceded = self
            .total_goals_conceded
            .saturating_add(goals_conceded)
            .min(GOALS_CONCEDED_CEILING);

        let outcome = MatchOutcome::from_goals(goals_scored, goals_conceded);

        match outcome {
            MatchOutcome::Win => self.matches_won += 1,
            MatchOutcome::Draw => self.matches_drawn += 1,
            MatchOutcome::Loss => self.matches_lost += 1,
        }

        self.total_match_points += outcome.points();

        self.monthly_points[month.index()] += match self.monthly_points_mode {
            MonthlyPointsMode::Cumulative => self.total_match_points,
            MonthlyPointsMode::Marginal => outcome.points(),
        };

        self.matches_played += 1;

        debug!(
            "{}: {} {}-{} in {} ({} pts)",
            self.name, outcome, goals_scored, goals_conceded, month, self.total_match_points
        );

        Ok(outcome)
    }

    pub fn calculate_additional_score(&self, weights: &RankingWeights) -> f64 {
        weights.k * self.matches_won as f64 + weights.g * self.total_goals_scored as f64
            - weights.m * self.total_goals_conceded as f64
    }

    /// Composite score used to pick the season winner
    pub fn ranking_score(&self, weights: &RankingWeights) -> f64 {
        self.calculate_additional_score(weights) + self.total_match_points as f64
    }

    pub fn receive_card(&mut self, card: CardType) {
        match card {
            CardType::Yellow => self.total_yellow_cards += 1,
            CardType::Red => self.total_red_cards += 1,
        }

        self.total_cards_received += card.weight();
    }

    /// Sum of fantasy points across the roster
    pub fn calculate_total_points(&self) -> i32 {
        self.players.total_points()
    }

    /// Average of the twelve monthly buckets
    pub fn normalize_points(&self) -> f64 {
        self.monthly_points.iter().sum::<u32>() as f64 / MONTHS_IN_SEASON as f64
    }

    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            name: self.name.clone(),
            matches_played: self.matches_played,
            matches_won: self.matches_won,
            matches_drawn: self.matches_drawn,
            matches_lost: self.matches_lost,
            total_goals_scored: self.total_goals_scored,
            total_goals_conceded: self.total_goals_conceded,
            total_match_points: self.total_match_points,
            monthly_points: self.monthly_points,
            total_yellow_cards: self.total_yellow_cards,
            total_red_cards: self.total_red_cards,
            player_points: self.calculate_total_points(),
            normalized_points: self.normalize_points(),
        }
    }
}

/// Read-only season aggregates for a single team
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub name: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_drawn: u32,
    pub matches_lost: u32,
    pub total_goals_scored: u32,
    pub total_goals_conceded: u32,
    pub total_match_points: u32,
    pub monthly_points: [u32; MONTHS_IN_SEASON],
    pub total_yellow_cards: u32,
    pub total_red_cards: u32,
    pub player_points: i32,
    pub normalized_points: f64,
}
