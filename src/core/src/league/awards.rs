use crate::club::Team;
use crate::config::RankingWeights;
use crate::error::{CoreResult, SeasonError};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonWinner {
    pub team_name: String,
    pub ranking_score: f64,
    pub additional_score: f64,
    pub total_match_points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAward {
    pub team_name: String,
    pub cards: u32,
}

impl CardAward {
    fn new(team: &Team, cards: u32) -> Self {
        CardAward {
            team_name: team.name.clone(),
            cards,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAwards {
    pub most_yellow_cards: CardAward,
    pub least_yellow_cards: CardAward,
    pub most_red_cards: CardAward,
    pub least_red_cards: CardAward,
    /// Fewest weighted cards, yellow counting one and red two
    pub fair_play: CardAward,
}

pub struct LeagueAwards;

impl LeagueAwards {
    /// Team with the best `additional score + league points`; the earlier team wins a tie
    pub fn winner<'t>(teams: &'t [Team], weights: &RankingWeights) -> CoreResult<&'t Team> {
        Self::first_extreme(teams, |team| team.ranking_score(weights), Ordering::Greater)
            .ok_or(SeasonError::NoData("winner"))
    }

    pub fn season_winner(teams: &[Team], weights: &RankingWeights) -> CoreResult<SeasonWinner> {
        let team = Self::winner(teams, weights)?;

        Ok(SeasonWinner {
            team_name: team.name.clone(),
            ranking_score: team.ranking_score(weights),
            additional_score: team.calculate_additional_score(weights),
            total_match_points: team.total_match_points,
        })
    }

    pub fn most_least_carded(teams: &[Team]) -> CoreResult<CardAwards> {
        if teams.is_empty() {
            return Err(SeasonError::NoData("card awards"));
        }

        let award = |key: fn(&Team) -> u32, wanted: Ordering| {
            Self::first_extreme(teams, key, wanted)
                .map(|team| CardAward::new(team, key(team)))
                .ok_or(SeasonError::NoData("card awards"))
        };

        Ok(CardAwards {
            most_yellow_cards: award(|t| t.total_yellow_cards, Ordering::Greater)?,
            least_yellow_cards: award(|t| t.total_yellow_cards, Ordering::Less)?,
            most_red_cards: award(|t| t.total_red_cards, Ordering::Greater)?,
            least_red_cards: award(|t| t.total_red_cards, Ordering::Less)?,
            fair_play: award(|t| t.total_cards_received, Ordering::Less)?,
        })
    }

    /// First team whose key compares `wanted` against every earlier best
    fn first_extreme<K, F>(teams: &[Team], key: F, wanted: Ordering) -> Option<&Team>
    where
        K: PartialOrd,
        F: Fn(&Team) -> K,
    {
        let mut best: Option<(&Team, K)> = None;

        for team in teams {
            let value = key(team);

            let replace = match &best {
                None => true,
                Some((_, best_value)) => value.partial_cmp(best_value) == Some(wanted),
            };

            if replace {
                best = Some((team, value));
            }
        }

        best.map(|(team, _)| team)
    }
}
