use league_core::{Player, PlayerPositionType};
use rand::Rng;
use rand::seq::IndexedRandom;

pub struct PlayerGenerator;

impl PlayerGenerator {
    /// Player `number` of `team_name` with a uniformly drawn position
    pub fn generate<R: Rng + ?Sized>(
        id: u32,
        number: usize,
        team_name: &str,
        rng: &mut R,
    ) -> Result<Player, String> {
        let position = PlayerPositionType::ALL
            .choose(rng)
            .copied()
            .unwrap_or(PlayerPositionType::Midfielder);

        Player::builder()
            .id(id)
            .name(format!("Player {} of {}", number, team_name))
            .position(position)
            .team(String::from(team_name))
            .build()
    }
}
