use crate::club::player::builder::PlayerBuilder;
use crate::club::player::discipline::{
    CardType, RED_CARD_SUSPENSION_GAMES, YELLOW_CARD_SUSPENSION_GAMES,
};
use crate::club::player::performance::Performance;
use crate::club::player::position::PlayerPositionType;
use crate::config::{CardPolicy, DisciplineRules};
use crate::error::CoreResult;
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

pub const MAX_ROSTER_SIZE: usize = 15;

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionType,
    pub team: String,

    pub points: i32,

    //discipline
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub suspended_games: u8,
}

impl Player {
    pub fn new(id: u32, name: String, position: PlayerPositionType, team: String) -> Self {
        Player {
            id,
            name,
            position,
            team,
            points: 0,
            yellow_cards: 0,
            red_cards: 0,
            suspended_games: 0,
        }
    }

    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Scores one match appearance and returns the change applied to `points`.
    ///
    /// Suspension is not checked here: the match simulator decides who plays.
    pub fn update_points(
        &mut self,
        performance: &Performance,
        rules: &DisciplineRules,
    ) -> CoreResult<i32> {
        performance.validate()?;

        let mut delta = if performance.is_full_appearance() { 2 } else { 1 };

        if performance.has_scored() {
            delta += self.position.goal_bonus();
        }

        if rules.card_policy == CardPolicy::StandingPenalty {
            delta -= self.standing_penalty();
        }

        self.points += delta;

        Ok(delta)
    }

    /// Penalty charged every match under the standing-penalty policy
    pub fn standing_penalty(&self) -> i32 {
        self.yellow_cards as i32 * CardType::Yellow.penalty()
            + self.red_cards as i32 * CardType::Red.penalty()
    }

    /// Returns true when the card completed a suspension
    pub fn receive_yellow_card(&mut self, rules: &DisciplineRules) -> bool {
        self.yellow_cards = self.yellow_cards.saturating_add(1);
        self.points -= CardType::Yellow.penalty();

        if self.yellow_cards >= rules.suspension_threshold {
            self.suspended_games = self
                .suspended_games
                .saturating_add(YELLOW_CARD_SUSPENSION_GAMES);
            self.yellow_cards = 0;

            debug!(
                "{} suspended after {} yellow cards",
                self.name, rules.suspension_threshold
            );

            return true;
        }

        false
    }

    pub fn receive_red_card(&mut self) {
        self.red_cards = self.red_cards.saturating_add(1);
        self.points -= CardType::Red.penalty();
        self.suspended_games = self
            .suspended_games
            .saturating_add(RED_CARD_SUSPENSION_GAMES);

        debug!("{} sent off, suspended for {} games", self.name, RED_CARD_SUSPENSION_GAMES);
    }

    /// Returns true when the card leaves the player suspended by it
    pub fn receive_card(&mut self, card: CardType, rules: &DisciplineRules) -> bool {
        match card {
            CardType::Yellow => self.receive_yellow_card(rules),
            CardType::Red => {
                self.receive_red_card();
                true
            }
        }
    }

    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.suspended_games > 0
    }

    /// Sits out one match of an active suspension
    pub fn serve_suspension(&mut self) {
        self.suspended_games = self.suspended_games.saturating_sub(1);
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({}), {}", self.name, self.position.get_short_name(), self.team)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        let mut collection = PlayerCollection {
            players: Vec::with_capacity(MAX_ROSTER_SIZE),
        };

        collection.add_range(players);
        collection
    }

    /// Returns false and drops the player when the roster is full
    pub fn add(&mut self, player: Player) -> bool {
        if self.players.len() >= MAX_ROSTER_SIZE {
            debug!("roster full, player {} not added", player.name);
            return false;
        }

        self.players.push(player);
        true
    }

    pub fn add_range(&mut self, players: Vec<Player>) {
        for player in players {
            self.add(player);
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn total_points(&self) -> i32 {
        self.players.iter().map(|p| p.points).sum()
    }
}
