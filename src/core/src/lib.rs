pub mod club;
pub mod config;
pub mod error;
pub mod league;
pub mod r#match;
pub mod shared;
pub mod utils;

// Re-export club items
pub use club::{
    // Player exports
    CardType, Performance, Player, PlayerBuilder, PlayerCollection, PlayerPositionType,
    MAX_ROSTER_SIZE,
    // Team exports
    Team, TeamBuilder, TeamSummary,
    GOALS_CONCEDED_CEILING, GOALS_SCORED_CEILING,
};

pub use config::*;
pub use error::*;

// Re-export league items
pub use league::{
    CardAward, CardAwards, League, LeagueAwards, LeagueTable, LeagueTableRow, Schedule,
    ScheduleItem, SeasonResult, SeasonWinner,
};

pub use r#match::{CardEvent, MatchEngine, MatchOutcome, MatchResult, Score};
pub use shared::*;
pub use utils::*;
