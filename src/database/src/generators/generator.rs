use crate::generators::PlayerGenerator;
use crate::loaders::TeamEntity;
use league_core::{League, MAX_ROSTER_SIZE, SeasonConfig, Team};
use log::debug;
use rand::Rng;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate<R: Rng + ?Sized>(
        league_name: &str,
        teams: &[TeamEntity],
        config: SeasonConfig,
        rng: &mut R,
    ) -> Result<League, String> {
        let teams = teams
            .iter()
            .enumerate()
            .map(|(idx, team)| Self::generate_team(idx, team, &config, rng))
            .collect::<Result<Vec<Team>, String>>()?;

        debug!("generated {} teams for {}", teams.len(), league_name);

        Ok(League::new(String::from(league_name), teams, config))
    }

    /// Player ids are `team position * roster size + shirt number`, unique per league
    fn generate_team<R: Rng + ?Sized>(
        idx: usize,
        team: &TeamEntity,
        config: &SeasonConfig,
        rng: &mut R,
    ) -> Result<Team, String> {
        let players = (1..=MAX_ROSTER_SIZE)
            .map(|number| {
                let id = (idx * MAX_ROSTER_SIZE + number) as u32;
                PlayerGenerator::generate(id, number, &team.name, rng)
            })
            .collect::<Result<Vec<_>, String>>()?;

        Team::builder()
            .id(team.id)
            .name(team.name.clone())
            .players(players)
            .monthly_points_mode(config.monthly_points)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::TeamLoader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn league(rng: &mut StdRng) -> League {
        let data = TeamLoader::load().unwrap();

        DatabaseGenerator::generate(&data.league, &data.teams, SeasonConfig::default(), rng)
            .unwrap()
    }

    #[test]
    fn test_generate_full_rosters() {
        let league = league(&mut StdRng::seed_from_u64(1));

        assert_eq!(league.teams.len(), 12);

        for team in &league.teams {
            assert_eq!(team.players.len(), MAX_ROSTER_SIZE);
            assert!(team.players.players.iter().all(|p| p.team == team.name));
        }

        assert_eq!(league.teams[4].players.players[0].name, "Player 1 of Chelsea");
    }

    #[test]
    fn test_same_seed_same_rosters() {
        let first = league(&mut StdRng::seed_from_u64(3));
        let second = league(&mut StdRng::seed_from_u64(3));

        let roster = |league: &League| {
            league
                .teams
                .iter()
                .flat_map(|t| t.players.players.iter().map(|p| (p.id, p.position)))
                .collect::<Vec<_>>()
        };

        assert_eq!(roster(&first), roster(&second));

        let ids: HashSet<u32> = roster(&first).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 12 * MAX_ROSTER_SIZE);
    }

    #[test]
    fn test_generated_league_plays_a_season() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut league = league(&mut rng);
        let result = league.simulate_season(&mut rng).unwrap();

        assert_eq!(result.results_recorded() as usize, result.fixtures_played * 2);
        assert_eq!(result.table.rows.len(), 12);
    }
}
