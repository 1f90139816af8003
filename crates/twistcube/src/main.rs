//! Terminal frontend for the twistcube engine: parses a move sequence,
//! animates it headlessly with synthetic frame timestamps, and prints the
//! resulting cube as a colored net.

use clap::Parser;
use eyre::{Result, WrapErr};
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use twistcube_core::notation;
use twistcube_view::CubeSimulation;
use web_time::{Duration, Instant};

mod net;

/// Animate a 3×3×3 twisty puzzle and print the result.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
struct Args {
    /// Move sequence in face-turn notation, e.g. `R U R' U2`.
    moves: Vec<String>,

    /// Enqueue N random moves before the move sequence.
    #[arg(long, value_name = "N")]
    shuffle: Option<usize>,

    /// Seed for a reproducible shuffle.
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Undo N moves after the sequence completes.
    #[arg(long, value_name = "N", default_value_t = 0)]
    undo: usize,

    /// Frames per second for the headless animation clock.
    #[arg(long, default_value_t = 120)]
    fps: u32,
}

fn main() -> Result<()> {
    env_logger::builder().init();

    let args = Args::parse();
    let frame = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let mut now = Instant::now();
    let mut sim = CubeSimulation::new();

    if let Some(count) = args.shuffle {
        match args.seed {
            Some(seed) => sim.shuffle_with_rng(count, &mut ChaCha12Rng::seed_from_u64(seed)),
            None => sim.shuffle(count),
        }
        settle(&mut sim, &mut now, frame);
    }

    let sequence = args.moves.join(" ");
    let moves = notation::parse_sequence(&sequence).wrap_err("invalid move sequence")?;
    for (face, modifier) in moves {
        sim.request_modified(face, modifier);
    }
    settle(&mut sim, &mut now, frame);

    for _ in 0..args.undo {
        sim.undo();
        settle(&mut sim, &mut now, frame);
    }

    print!("{}", net::render(sim.cube()));
    if !sim.completed_twists().is_empty() {
        println!("applied: {}", sim.completed_twists().iter().join(" "));
    }
    println!(
        "{}, {} undoable",
        if sim.cube().is_solved() {
            "solved"
        } else {
            "not solved"
        },
        sim.undo_len(),
    );
    Ok(())
}

/// Runs the simulation to completion on a synthetic frame clock.
fn settle(sim: &mut CubeSimulation, now: &mut Instant, frame: Duration) {
    while !sim.is_settled() {
        *now += frame;
        sim.step(*now);
    }
}
