use crate::club::Team;
use crate::config::SeasonConfig;
use crate::error::CoreResult;
use crate::league::{CardAwards, LeagueAwards, LeagueTable, Schedule, SeasonResult};
use crate::r#match::MatchEngine;
use crate::utils::Logging;
use log::{debug, info};
use rand::Rng;

#[derive(Debug)]
pub struct League {
    pub name: String,
    pub teams: Vec<Team>,
    pub config: SeasonConfig,
}

impl League {
    pub fn new(name: String, mut teams: Vec<Team>, config: SeasonConfig) -> Self {
        for team in &mut teams {
            team.monthly_points_mode = config.monthly_points;
        }

        League {
            name,
            teams,
            config,
        }
    }

    /// Builds the fixture list, plays it in order and returns the final standings.
    ///
    /// The schedule is consumed by the run and not kept on the league.
    pub fn simulate_season<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CoreResult<SeasonResult> {
        info!("⚽ Simulating league: {} ({} teams)", self.name, self.teams.len());

        let schedule = Schedule::generate(self.teams.len(), &self.config, rng)?;
        let rules = self.config.discipline();

        info!(
            "📅 {} fixtures scheduled ({:?})",
            schedule.len(),
            self.config.schedule_mode
        );

        let mut fixtures_played = 0;

        for item in schedule {
            let (home, away) =
                Self::pair_mut(&mut self.teams, item.home_team_idx, item.away_team_idx);

            let message = &format!("play match: {} vs {} ({})", home.name, away.name, item.month);

            Logging::estimate_result(
                || MatchEngine::play(home, away, item.month, &rules, &mut *rng),
                message,
            )?;

            fixtures_played += 1;
        }

        let result = self.result(fixtures_played)?;

        debug!(
            "{} fixtures played, {} team results recorded",
            fixtures_played,
            result.results_recorded()
        );

        info!(
            "🏆 {} won {} with {} points",
            result.winner.team_name, self.name, result.winner.total_match_points
        );

        Ok(result)
    }

    pub fn most_least_carded(&self) -> CoreResult<CardAwards> {
        LeagueAwards::most_least_carded(&self.teams)
    }

    pub fn table(&self) -> LeagueTable {
        LeagueTable::from_teams(&self.teams)
    }

    pub fn result(&self, fixtures_played: usize) -> CoreResult<SeasonResult> {
        let winner = LeagueAwards::season_winner(&self.teams, &self.config.ranking_weights)?;
        let awards = self.most_least_carded()?;

        debug!("fair play: {} ({} cards)", awards.fair_play.team_name, awards.fair_play.cards);

        Ok(SeasonResult {
            league: self.name.clone(),
            fixtures_played,
            table: self.table(),
            winner,
            awards,
            teams: self.teams.iter().map(Team::summary).collect(),
        })
    }

    fn pair_mut(teams: &mut [Team], home: usize, away: usize) -> (&mut Team, &mut Team) {
        debug_assert_ne!(home, away, "team scheduled against itself");

        if home < away {
            let (left, right) = teams.split_at_mut(away);
            (&mut left[home], &mut right[0])
        } else {
            let (left, right) = teams.split_at_mut(home);
            (&mut right[0], &mut left[away])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerPositionType};
    use crate::club::{GOALS_CONCEDED_CEILING, GOALS_SCORED_CEILING};
    use crate::config::{CardPolicy, MonthlyPointsMode, ScheduleMode};
    use crate::error::SeasonError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TEAM_NAMES: [&str; 12] = [
        "Manchester United",
        "Liverpool",
        "Manchester City",
        "Arsenal",
        "Chelsea",
        "Tottenham Hotspur",
        "FC Barcelona",
        "Real Madrid",
        "Atlético Madrid",
        "Inter Milan",
        "AC Milan",
        "Juventus",
    ];

    fn teams() -> Vec<Team> {
        TEAM_NAMES
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let mut team = Team::new(idx as u32, String::from(*name));
                for i in 0..15u32 {
                    team.add_player(Player::new(
                        idx as u32 * 100 + i,
                        format!("Player {} of {}", i + 1, name),
                        PlayerPositionType::ALL[(i as usize + idx) % 4],
                        String::from(*name),
                    ));
                }
                team
            })
            .collect()
    }

    fn play(config: SeasonConfig, seed: u64) -> (League, SeasonResult) {
        let mut league = League::new(String::from("Test League"), teams(), config);
        let result = league.simulate_season(&mut StdRng::seed_from_u64(seed)).unwrap();
        (league, result)
    }

    #[test]
    fn test_every_fixture_updates_two_teams() {
        let (league, result) = play(SeasonConfig::default(), 1);

        assert_eq!(result.fixtures_played, 84);
        assert_eq!(result.results_recorded(), 84 * 2);
        assert!(league.teams.iter().all(|t| t.matches_played == 14));
    }

    #[test]
    fn test_full_round_robin_season() {
        let config = SeasonConfig {
            schedule_mode: ScheduleMode::FullRoundRobin,
            ..SeasonConfig::default()
        };

        let (league, result) = play(config, 2);

        assert_eq!(result.fixtures_played, 12 * 11);
        assert_eq!(result.results_recorded() as usize, 12 * 11 * 2);
        assert!(league.teams.iter().all(|t| t.matches_played == 22));
    }

    #[test]
    fn test_goal_ceilings_hold_across_season() {
        let config = SeasonConfig {
            schedule_mode: ScheduleMode::FullRoundRobin,
            ..SeasonConfig::default()
        };

        let (league, _) = play(config, 3);

        for team in &league.teams {
            assert!(team.total_goals_scored <= GOALS_SCORED_CEILING);
            assert!(team.total_goals_conceded <= GOALS_CONCEDED_CEILING);
        }
    }

    #[test]
    fn test_same_seed_renders_identical_standings() {
        let (_, first) = play(SeasonConfig::default(), 42);
        let (_, second) = play(SeasonConfig::default(), 42);

        assert_eq!(first.table.to_string(), second.table.to_string());
        assert_eq!(first.winner, second.winner);
        assert_eq!(first.awards, second.awards);
    }

    #[test]
    fn test_winner_matches_awards_query() {
        let (league, result) = play(SeasonConfig::default(), 5);

        let winner = LeagueAwards::winner(&league.teams, &league.config.ranking_weights).unwrap();

        assert_eq!(winner.name, result.winner.team_name);
        assert_eq!(result.summary_for(&winner.name).unwrap().name, winner.name);
        assert_eq!(league.most_least_carded().unwrap(), result.awards);
    }

    #[test]
    fn test_card_tallies_match_weighted_total() {
        let config = SeasonConfig {
            card_policy: CardPolicy::StandingPenalty,
            ..SeasonConfig::default()
        };

        let (league, _) = play(config, 6);

        for team in &league.teams {
            assert!(team.total_yellow_cards + team.total_red_cards >= team.matches_played);
            assert_eq!(
                team.total_cards_received,
                team.total_yellow_cards + 2 * team.total_red_cards
            );
        }
    }

    #[test]
    fn test_marginal_monthly_points_sum_to_league_points() {
        let config = SeasonConfig {
            monthly_points: MonthlyPointsMode::Marginal,
            ..SeasonConfig::default()
        };

        let (league, _) = play(config, 7);

        for team in &league.teams {
            assert_eq!(team.monthly_points.iter().sum::<u32>(), team.total_match_points);
        }
    }

    #[test]
    fn test_empty_league_reports_no_data() {
        let mut league = League::new(String::from("Empty"), Vec::new(), SeasonConfig::default());

        let result = league.simulate_season(&mut StdRng::seed_from_u64(8));

        assert_eq!(result.unwrap_err(), SeasonError::NoData("winner"));
    }

    #[test]
    fn test_invalid_config_stops_before_any_match() {
        let config = SeasonConfig {
            matches_per_team: 0,
            ..SeasonConfig::default()
        };
        let mut league = League::new(String::from("Test League"), teams(), config);

        assert!(league.simulate_season(&mut StdRng::seed_from_u64(9)).is_err());
        assert!(league.teams.iter().all(|t| t.matches_played == 0));
    }
}
