use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::PathBuf;

use dice_bingo::game::simulate_game::{simulate_game, PlacementStrategy};
use dice_bingo::logging::setup_logging;
use dice_bingo::ranking::{submit_score, JsonFileRankingStore, PlayerName};
use dice_bingo::recording::{CsvWriter, GameRecord};
use dice_bingo::services::game_controller::GameController;

#[derive(Parser, Debug)]
#[command(name = "dice_bingo", version, about = "Simulate Dice Bingo games and rank the results")]
struct Config {
    /// Number of games to simulate
    #[arg(short = 'g', long, default_value_t = 1000)]
    games: usize,

    /// How cells are chosen
    #[arg(long, value_enum, default_value = "greedy")]
    strategy: PlacementStrategy,

    /// Base seed; game i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file holding the top-5 ranking
    #[arg(long)]
    ranking_file: Option<PathBuf>,

    /// Two-letter name used for the ranking entry
    #[arg(long, default_value = "AI")]
    player_name: String,

    /// Directory receiving one CSV row per placement
    #[arg(long)]
    record_dir: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to rotated files in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn play_batch(config: &Config, base_seed: u64) -> dice_bingo::Result<Vec<GameRecord>> {
    (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            let mut controller = GameController::seeded(seed);
            // Separate stream for cell choices so dice stay the same across strategies.
            let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));
            simulate_game(&mut controller, config.strategy, &mut rng)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    // Validate before spending time on the batch.
    let player_name = PlayerName::parse(&config.player_name)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);

    log::info!(
        "simulating {} games with the {} strategy (seed {})",
        config.games,
        config.strategy.name(),
        base_seed
    );
    let records = play_batch(&config, base_seed)?;

    let scores: Vec<u32> = records.iter().filter_map(|r| r.final_score).collect();
    let Some(&best) = scores.iter().max() else {
        log::warn!("no game finished, nothing to report");
        return Ok(());
    };
    let worst = scores.iter().min().copied().unwrap_or_default();
    let mean = scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64;
    log::info!("scores: mean {:.2}, best {}, worst {}", mean, best, worst);

    if let Some(dir) = &config.record_dir {
        let mut writer = CsvWriter::new(dir)?;
        for record in &records {
            writer.write_game(record)?;
        }
        writer.close()?;
        log::info!("recorded {} games to {}", records.len(), writer.current_path().display());
    }

    if let Some(path) = &config.ranking_file {
        let store = JsonFileRankingStore::new(path);
        match submit_score(&store, player_name.clone(), best)? {
            Some(rank) => log::info!("{} ranked #{} with {}", player_name, rank + 1, best),
            None => log::info!("best score {} did not reach the top 5", best),
        }
    }

    Ok(())
}
