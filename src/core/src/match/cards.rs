use crate::club::CardType;
use std::collections::HashMap;

pub const MAX_YELLOW_CARDS_PER_MATCH: u8 = 2;

#[derive(Debug, Clone, Copy, Default)]
struct MatchDiscipline {
    yellow_cards: u8,
    sent_off: bool,
}

/// Cards shown to each player during one match
#[derive(Debug, Default)]
pub struct MatchCardLedger {
    players: HashMap<u32, MatchDiscipline>,
}

impl MatchCardLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// No card after a red, at most two yellows per match
    pub fn allows(&self, player_id: u32, card: CardType) -> bool {
        let discipline = self.players.get(&player_id).copied().unwrap_or_default();

        if discipline.sent_off {
            return false;
        }

        match card {
            CardType::Yellow => discipline.yellow_cards < MAX_YELLOW_CARDS_PER_MATCH,
            CardType::Red => true,
        }
    }

    pub fn record(&mut self, player_id: u32, card: CardType) {
        let discipline = self.players.entry(player_id).or_default();

        match card {
            CardType::Yellow => discipline.yellow_cards += 1,
            CardType::Red => discipline.sent_off = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_yellows_per_match() {
        let mut ledger = MatchCardLedger::new();

        assert!(ledger.allows(7, CardType::Yellow));
        ledger.record(7, CardType::Yellow);
        assert!(ledger.allows(7, CardType::Yellow));
        ledger.record(7, CardType::Yellow);

        assert!(!ledger.allows(7, CardType::Yellow));
        assert!(ledger.allows(7, CardType::Red));
        assert!(ledger.allows(8, CardType::Yellow));
    }

    #[test]
    fn test_nothing_after_red() {
        let mut ledger = MatchCardLedger::new();

        ledger.record(3, CardType::Red);

        assert!(!ledger.allows(3, CardType::Yellow));
        assert!(!ledger.allows(3, CardType::Red));
    }
}
