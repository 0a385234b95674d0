use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub const ALL: [PlayerPositionType; 4] = [
        PlayerPositionType::Forward,
        PlayerPositionType::Midfielder,
        PlayerPositionType::Defender,
        PlayerPositionType::Goalkeeper,
    ];

    /// Extra fantasy points for scoring at least once in a match
    #[inline]
    pub fn goal_bonus(&self) -> i32 {
        match self {
            PlayerPositionType::Goalkeeper => 10,
            PlayerPositionType::Defender => 6,
            PlayerPositionType::Midfielder => 5,
            PlayerPositionType::Forward => 4,
        }
    }

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "D",
            PlayerPositionType::Midfielder => "M",
            PlayerPositionType::Forward => "F",
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlayerPositionType::Goalkeeper => "Goalkeeper",
            PlayerPositionType::Defender => "Defender",
            PlayerPositionType::Midfielder => "Midfielder",
            PlayerPositionType::Forward => "Forward",
        };

        write!(f, "{}", name)
    }
}
