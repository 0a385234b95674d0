use crate::error::{CoreResult, SeasonError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MATCHES_PER_TEAM: u32 = 14;
pub const DEFAULT_SUSPENSION_THRESHOLD: u8 = 3;

/// When card penalties hit a player's points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardPolicy {
    /// Deducted once, at the moment the card is shown
    #[default]
    OneShotDeduction,
    /// Deducted when shown, then again every scored match for every card held
    StandingPenalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleMode {
    /// Repeat each unordered pairing until either side reaches its match quota
    #[default]
    CappedRoundRobin,
    /// Every ordered pairing once (home and away), optionally truncated
    FullRoundRobin,
}

/// How a match result lands in the team's monthly bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonthlyPointsMode {
    /// Adds the running season total after the match. A month with several
    /// fixtures counts earlier points more than once.
    #[default]
    Cumulative,
    /// Adds only the points earned in the match
    Marginal,
}

/// Weights of the composite ranking score `k*won + g*scored - m*conceded`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub k: f64,
    pub g: f64,
    pub m: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        RankingWeights {
            k: 1.5,
            g: 1.5,
            m: 0.5,
        }
    }
}

/// Rules a player needs to process cards and scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisciplineRules {
    pub card_policy: CardPolicy,
    pub suspension_threshold: u8,
}

impl Default for DisciplineRules {
    fn default() -> Self {
        DisciplineRules {
            card_policy: CardPolicy::default(),
            suspension_threshold: DEFAULT_SUSPENSION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonConfig {
    pub card_policy: CardPolicy,
    pub suspension_threshold: u8,
    pub schedule_mode: ScheduleMode,
    pub matches_per_team: u32,
    pub fixture_limit: Option<usize>,
    pub ranking_weights: RankingWeights,
    pub monthly_points: MonthlyPointsMode,
    pub seed: Option<u64>,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        SeasonConfig {
            card_policy: CardPolicy::default(),
            suspension_threshold: DEFAULT_SUSPENSION_THRESHOLD,
            schedule_mode: ScheduleMode::default(),
            matches_per_team: DEFAULT_MATCHES_PER_TEAM,
            fixture_limit: None,
            ranking_weights: RankingWeights::default(),
            monthly_points: MonthlyPointsMode::default(),
            seed: None,
        }
    }
}

impl SeasonConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.suspension_threshold == 0 {
            return Err(SeasonError::InvalidConfig(String::from(
                "suspension_threshold must be at least 1",
            )));
        }

        match self.schedule_mode {
            ScheduleMode::CappedRoundRobin if self.matches_per_team == 0 => Err(
                SeasonError::InvalidConfig(String::from("matches_per_team must be positive")),
            ),
            ScheduleMode::FullRoundRobin if self.fixture_limit == Some(0) => Err(
                SeasonError::InvalidConfig(String::from("fixture_limit must be positive")),
            ),
            _ => Ok(()),
        }
    }

    pub fn discipline(&self) -> DisciplineRules {
        DisciplineRules {
            card_policy: self.card_policy,
            suspension_threshold: self.suspension_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_one_shot_capped_schedule() {
        let config = SeasonConfig::default();

        assert_eq!(config.card_policy, CardPolicy::OneShotDeduction);
        assert_eq!(config.schedule_mode, ScheduleMode::CappedRoundRobin);
        assert_eq!(config.matches_per_team, 14);
        assert_eq!(config.suspension_threshold, 3);
        assert_eq!(config.monthly_points, MonthlyPointsMode::Cumulative);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_quota_is_rejected() {
        let config = SeasonConfig {
            matches_per_team: 0,
            ..SeasonConfig::default()
        };

        assert!(matches!(config.validate(), Err(SeasonError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_fixture_limit_is_rejected_only_for_full_round_robin() {
        let mut config = SeasonConfig {
            fixture_limit: Some(0),
            ..SeasonConfig::default()
        };
        assert!(config.validate().is_ok());

        config.schedule_mode = ScheduleMode::FullRoundRobin;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SeasonConfig = serde_json::from_str(
            r#"{"card_policy":"standing-penalty","schedule_mode":"full-round-robin","seed":7}"#,
        )
        .unwrap();

        assert_eq!(config.card_policy, CardPolicy::StandingPenalty);
        assert_eq!(config.schedule_mode, ScheduleMode::FullRoundRobin);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ranking_weights, RankingWeights::default());
    }
}
