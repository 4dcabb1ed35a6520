//! Command-line driver: build a cube, scramble it, apply moves, print it.

use std::process::ExitCode;

use clap::Parser;

use rubik_engine::{Cube, ScrambleConfig};

#[derive(Parser, Debug)]
#[command(name = "rubik")]
#[command(about = "Turn a 3x3x3 puzzle and print its faces")]
struct Args {
    /// Scramble seed. Scrambling is skipped unless a seed is given.
    #[arg(long)]
    seed: Option<u64>,

    /// Quarter turns in the scramble.
    #[arg(long, default_value_t = rubik_engine::scramble::DEFAULT_ROTATIONS)]
    rotations: usize,

    /// Draw scramble moves from the middle slices too.
    #[arg(long)]
    slices: bool,

    /// Print the scramble in Singmaster notation.
    #[arg(long)]
    show_scramble: bool,

    /// Moves to apply after the scramble, e.g. "R U R' U'".
    #[arg(long)]
    moves: Option<String>,
}

fn run(args: &Args) -> rubik_engine::Result<Cube> {
    let mut cube = Cube::new();

    if let Some(seed) = args.seed {
        let mut config = ScrambleConfig::new(seed).with_rotations(args.rotations);
        if args.slices {
            config = config.with_slices();
        }
        let scramble = cube.scramble(&config)?;
        println!("RandomSeed: {seed}");
        if args.show_scramble {
            println!("Scramble: {scramble}");
        }
    }

    if let Some(moves) = &args.moves {
        cube.apply_notation(moves)?;
    }

    Ok(cube)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(cube) => {
            print!("{cube}");
            let status = if cube.is_solved() { "solved" } else { "not solved" };
            println!("The cube is {status}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rubik: {e}");
            ExitCode::FAILURE
        }
    }
}
