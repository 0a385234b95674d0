use crate::club::player::player::Player;
use crate::club::player::position::PlayerPositionType;

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    name: Option<String>,
    position: Option<PlayerPositionType>,
    team: Option<String>,
}

impl PlayerBuilder {
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

    pub fn position(mut self, position: PlayerPositionType) -> Self {
        self.position = Some(position);
        self
    }

    pub fn team(mut self, team: String) -> Self {
        self.team = Some(team);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        Ok(Player::new(
            self.id.ok_or("id is required")?,
            self.name.ok_or("name is required")?,
            self.position.ok_or("position is required")?,
            self.team.ok_or("team is required")?,
        ))
    }
}
