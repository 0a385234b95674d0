use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct LeagueEntity {
    pub league: String,
    pub teams: Vec<TeamEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<LeagueEntity, serde_json::Error> {
        serde_json::from_str(STATIC_TEAMS_JSON)
    }
}
