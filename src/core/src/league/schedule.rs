use crate::config::{ScheduleMode, SeasonConfig};
use crate::error::CoreResult;
use crate::shared::Month;
use itertools::Itertools;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleItem {
    pub home_team_idx: usize,
    pub away_team_idx: usize,
    pub month: Month,
}

impl ScheduleItem {
    pub fn new(home_team_idx: usize, away_team_idx: usize, month: Month) -> Self {
        ScheduleItem {
            home_team_idx,
            away_team_idx,
            month,
        }
    }
}

/// The season's fixture list, in the order it is played
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub items: Vec<ScheduleItem>,
}

impl Schedule {
    pub fn generate<R: Rng + ?Sized>(
        team_count: usize,
        config: &SeasonConfig,
        rng: &mut R,
    ) -> CoreResult<Self> {
        config.validate()?;

        let mut pairings = match config.schedule_mode {
            ScheduleMode::CappedRoundRobin => {
                Self::capped_round_robin(team_count, config.matches_per_team)
            }
            ScheduleMode::FullRoundRobin => {
                Self::full_round_robin(team_count, config.fixture_limit)
            }
        };

        if pairings.is_empty() {
            warn!("no fixtures generated for {} teams", team_count);
        }

        pairings.shuffle(rng);

        let items: Vec<ScheduleItem> = pairings
            .into_iter()
            .enumerate()
            .map(|(n, (home, away))| ScheduleItem::new(home, away, Month::for_fixture(n)))
            .collect();

        debug!("schedule generated: {} fixtures", items.len());

        Ok(Schedule { items })
    }

    /// Repeats each unordered pairing while both sides are under quota
    fn capped_round_robin(team_count: usize, matches_per_team: u32) -> Vec<(usize, usize)> {
        let mut played = vec![0u32; team_count];
        let mut pairings = Vec::new();

        for (i, j) in (0..team_count).tuple_combinations::<(usize, usize)>() {
            while played[i] < matches_per_team && played[j] < matches_per_team {
                pairings.push((i, j));
                played[i] += 1;
                played[j] += 1;
            }
        }

        for (idx, count) in played.iter().enumerate() {
            if *count < matches_per_team {
                warn!(
                    "team #{} scheduled for {} of {} matches",
                    idx, count, matches_per_team
                );
            }
        }

        pairings
    }

    /// Every ordered pairing once, truncated to `fixture_limit`
    fn full_round_robin(team_count: usize, fixture_limit: Option<usize>) -> Vec<(usize, usize)> {
        let pairings = (0..team_count)
            .cartesian_product(0..team_count)
            .filter(|(i, j)| i != j);

        match fixture_limit {
            Some(limit) => pairings.take(limit).collect(),
            None => pairings.collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Schedule {
    type Item = ScheduleItem;
    type IntoIter = std::vec::IntoIter<ScheduleItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
