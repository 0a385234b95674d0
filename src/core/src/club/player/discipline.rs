use rand::Rng;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub const YELLOW_CARD_PENALTY: i32 = 1;
pub const RED_CARD_PENALTY: i32 = 2;
pub const RED_CARD_SUSPENSION_GAMES: u8 = 2;
pub const YELLOW_CARD_SUSPENSION_GAMES: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardType {
    Yellow,
    Red,
}

impl CardType {
    /// Yellow or red with equal probability
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            CardType::Yellow
        } else {
            CardType::Red
        }
    }

    /// Points deducted the moment the card is shown
    #[inline]
    pub fn penalty(&self) -> i32 {
        match self {
            CardType::Yellow => YELLOW_CARD_PENALTY,
            CardType::Red => RED_CARD_PENALTY,
        }
    }

    /// Contribution to the combined fair-play tally
    #[inline]
    pub fn weight(&self) -> u32 {
        match self {
            CardType::Yellow => 1,
            CardType::Red => 2,
        }
    }
}

impl Display for CardType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Yellow => write!(f, "yellow"),
            CardType::Red => write!(f, "red"),
        }
    }
}
