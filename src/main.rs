#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, place_fleet, ui, AiPlayer, CliPlayer, Game, Player, Side, GRID_SIZE,
};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive match against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible match (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Run automated matches and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible matches")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u32,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(make_rng(seed)),
        Commands::Sim { seed, games } => sim(seed, games),
    }
}

#[cfg(feature = "std")]
fn greet() {
    println!("{}", "-".repeat(24));
    println!(" Welcome to Sea Battle ");
    println!();
    println!(" input format: x y");
    println!(" x is the row number");
    println!(" y is the column number");
}

#[cfg(feature = "std")]
fn play(mut rng: SmallRng) -> anyhow::Result<()> {
    greet();

    let yours = place_fleet(&mut rng, GRID_SIZE, false);
    let theirs = place_fleet(&mut rng, GRID_SIZE, true);
    let players: [Box<dyn Player>; 2] = [Box::new(CliPlayer::new()), Box::new(AiPlayer::new())];
    let mut game = Game::new(players, [yours, theirs]);

    let mut move_number = 1;
    loop {
        println!("\n{}", "-".repeat(24));
        println!("Your grid:");
        print!("{}", ui::render_grid(game.grid(Side::One)));
        println!("\nComputer's grid:");
        print!("{}", ui::render_grid(game.grid(Side::Two)));

        if let Some(winner) = game.winner() {
            println!("{}", "-".repeat(24));
            match winner {
                Side::One => println!("\nYou win!\n"),
                Side::Two => println!("\nThe computer wins!\n"),
            }
            return Ok(());
        }

        println!("{}", "-".repeat(24));
        match game.active_side() {
            Side::One => println!("Your turn! Move {}", move_number),
            Side::Two => println!("Computer's turn! Move {}", move_number),
        }
        if let Some(outcome) = game.step(&mut rng) {
            if outcome.side == Side::Two {
                println!(
                    "The computer fires at {} {}",
                    outcome.target.x + 1,
                    outcome.target.y + 1
                );
            }
            println!("{}", ui::describe_shot(outcome.result));
            if !outcome.extra_turn {
                move_number += 1;
            }
        }
    }
}

#[cfg(feature = "std")]
fn sim(seed: Option<u64>, games: u32) -> anyhow::Result<()> {
    let mut wins = [0u32; 2];
    let mut results = Vec::new();
    for i in 0..games {
        let mut rng = match seed {
            Some(s) => SmallRng::seed_from_u64(s.wrapping_add(i as u64)),
            None => make_rng(None),
        };
        let grids = [
            place_fleet(&mut rng, GRID_SIZE, false),
            place_fleet(&mut rng, GRID_SIZE, true),
        ];
        let players: [Box<dyn Player>; 2] = [Box::new(AiPlayer::new()), Box::new(AiPlayer::new())];
        let mut game = Game::new(players, grids);
        let winner = game.play(&mut rng);
        match winner {
            Side::One => wins[0] += 1,
            Side::Two => wins[1] += 1,
        }
        results.push(json!({
            "game": i,
            "winner": winner,
            "shots": game.steps(),
        }));
    }
    let summary = json!({
        "games": games,
        "wins": { "one": wins[0], "two": wins[1] },
        "results": results,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
