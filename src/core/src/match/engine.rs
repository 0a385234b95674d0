use crate::club::{CardType, Performance, Team};
use crate::config::DisciplineRules;
use crate::error::{CoreResult, SeasonError};
use crate::r#match::cards::MatchCardLedger;
use crate::r#match::{CardEvent, MatchResult, Score};
use crate::shared::Month;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

pub const MAX_GOALS_PER_MATCH: u32 = 6;
pub const EXTRA_CARD_PROBABILITY: f64 = 0.25;

/// Plays one fixture between two teams and applies the outcome to both.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play<R: Rng + ?Sized>(
        home: &mut Team,
        away: &mut Team,
        month: Month,
        rules: &DisciplineRules,
        rng: &mut R,
    ) -> CoreResult<MatchResult> {
        Self::ensure_roster(home)?;
        Self::ensure_roster(away)?;

        // Players already serving a ban are not on the pitch and cannot be booked
        let home_pool = Self::available(home);
        let away_pool = Self::available(away);

        let score = Score::new(
            rng.random_range(0..=MAX_GOALS_PER_MATCH),
            rng.random_range(0..=MAX_GOALS_PER_MATCH),
        );

        home.add_match_result(score.home_goals, score.away_goals, month.index())?;
        away.add_match_result(score.away_goals, score.home_goals, month.index())?;

        let mut cards = Vec::new();
        let mut home_ledger = MatchCardLedger::new();
        let mut away_ledger = MatchCardLedger::new();

        Self::assign_predefined_cards(home, &home_pool, &mut home_ledger, rules, rng, &mut cards);
        Self::assign_predefined_cards(away, &away_pool, &mut away_ledger, rules, rng, &mut cards);

        Self::assign_random_card(home, &home_pool, &mut home_ledger, rules, rng, &mut cards);
        Self::assign_random_card(away, &away_pool, &mut away_ledger, rules, rng, &mut cards);

        let suspensions_served = Self::process_performances(home, rules, rng)?
            + Self::process_performances(away, rules, rng)?;

        let result = MatchResult {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            month,
            score,
            cards,
            suspensions_served,
        };

        debug!("play match: {}", result);

        Ok(result)
    }

    fn ensure_roster(team: &Team) -> CoreResult<()> {
        if team.players.is_empty() {
            return Err(SeasonError::EmptyRoster(team.name.clone()));
        }

        Ok(())
    }

    fn available(team: &Team) -> Vec<usize> {
        team.players
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| !player.is_suspended())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// One or two distinct players per team are always booked
    fn assign_predefined_cards<R: Rng + ?Sized>(
        team: &mut Team,
        eligible: &[usize],
        ledger: &mut MatchCardLedger,
        rules: &DisciplineRules,
        rng: &mut R,
        cards: &mut Vec<CardEvent>,
    ) {
        if eligible.is_empty() {
            return;
        }

        let amount = rng.random_range(1..=2usize).min(eligible.len());

        for pick in rand::seq::index::sample(rng, eligible.len(), amount) {
            Self::assign_card(team, eligible[pick], ledger, rules, rng, cards);
        }
    }

    fn assign_random_card<R: Rng + ?Sized>(
        team: &mut Team,
        eligible: &[usize],
        ledger: &mut MatchCardLedger,
        rules: &DisciplineRules,
        rng: &mut R,
        cards: &mut Vec<CardEvent>,
    ) {
        if !rng.random_bool(EXTRA_CARD_PROBABILITY) {
            return;
        }

        if let Some(&idx) = eligible.choose(rng) {
            Self::assign_card(team, idx, ledger, rules, rng, cards);
        }
    }

    fn assign_card<R: Rng + ?Sized>(
        team: &mut Team,
        player_idx: usize,
        ledger: &mut MatchCardLedger,
        rules: &DisciplineRules,
        rng: &mut R,
        cards: &mut Vec<CardEvent>,
    ) {
        let card = CardType::random(rng);
        let player = &mut team.players.players[player_idx];

        if !ledger.allows(player.id, card) {
            debug!("{} card withheld from {}", card, player.name);
            return;
        }

        let triggered_suspension = player.receive_card(card, rules);
        let player_id = player.id;

        ledger.record(player_id, card);
        team.receive_card(card);

        cards.push(CardEvent {
            team: team.name.clone(),
            player_id,
            card,
            triggered_suspension,
        });
    }

    /// Runs after the cards: a player sent off in this match is not scored for it.
    /// Returns the number of players who sat out a suspension.
    fn process_performances<R: Rng + ?Sized>(
        team: &mut Team,
        rules: &DisciplineRules,
        rng: &mut R,
    ) -> CoreResult<u32> {
        let mut served = 0;

        for player in team.players.players.iter_mut() {
            if player.is_suspended() {
                player.serve_suspension();
                served += 1;
                continue;
            }

            player.update_points(&Performance::random(rng), rules)?;
        }

        Ok(served)
    }
}
