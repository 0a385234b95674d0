use color_eyre::eyre::eyre;
use database::{DatabaseGenerator, TeamLoader};
use env_logger::Env;
use league_core::utils::TimeEstimation;
use league_core::{SeasonConfig, SeasonResult};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = season_config()?;
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("seeded season: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let (data, estimated) = TimeEstimation::estimate(TeamLoader::load);
    let data = data?;

    info!("teams loaded: {} ms", estimated);

    let mut league = DatabaseGenerator::generate(&data.league, &data.teams, config, &mut rng)
        .map_err(|e| eyre!(e))?;

    let (result, estimated) = TimeEstimation::estimate(|| league.simulate_season(&mut rng));
    let result = result?;

    info!("season simulated: {} ms", estimated);

    if env::var("OUTPUT") == Ok(String::from("json")) {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_season(&result)?;
    }

    Ok(())
}

/// `SEASON_CONFIG` holds inline JSON; `SEED` overrides its seed
fn season_config() -> color_eyre::Result<SeasonConfig> {
    let mut config = match env::var("SEASON_CONFIG") {
        Ok(json) => serde_json::from_str(&json)?,
        Err(_) => SeasonConfig::default(),
    };

    if let Ok(seed) = env::var("SEED") {
        config.seed = Some(seed.trim().parse()?);
    }

    Ok(config)
}

fn print_season(result: &SeasonResult) -> color_eyre::Result<()> {
    print!("{}", result.table);

    let winner = result
        .summary_for(&result.winner.team_name)
        .ok_or_else(|| eyre!("no summary for {}", result.winner.team_name))?;

    println!();
    println!(
        "The winner is: {} with {} ovr",
        winner.name, result.winner.additional_score
    );

    if let Some(position) = result.table.position(&winner.name) {
        println!("Final table position: {}", position);
    }

    println!("Total points scored: {} match points.", winner.total_match_points);
    println!(
        "Goals Scored: {}, Goals Conceded: {}",
        winner.total_goals_scored, winner.total_goals_conceded
    );
    println!(
        "Matches Won: {}, Matches Drawn: {}, Matches Lost: {}",
        winner.matches_won, winner.matches_drawn, winner.matches_lost
    );

    let fair_play = &result.awards.fair_play;

    println!(
        "Fairplay Award: {} with {} cards.",
        fair_play.team_name, fair_play.cards
    );

    Ok(())
}
