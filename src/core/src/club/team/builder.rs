use crate::config::MonthlyPointsMode;
use crate::{Player, PlayerCollection, Team};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<u32>,
    name: Option<String>,
    players: Option<Vec<Player>>,
    monthly_points_mode: Option<MonthlyPointsMode>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    pub fn monthly_points_mode(mut self, mode: MonthlyPointsMode) -> Self {
        self.monthly_points_mode = Some(mode);
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let mut team = Team::new(
            self.id.ok_or("id is required")?,
            self.name.ok_or("name is required")?,
        );

        team.players = PlayerCollection::new(self.players.ok_or("players is required")?);
        team.monthly_points_mode = self.monthly_points_mode.unwrap_or_default();

        Ok(team)
    }
}
