#![deny(clippy::pedantic)]
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crossed_wires::{
	intersection::{self, Crossings},
	wire::{self, Wires},
};

#[derive(Parser)]
struct Args {
	/// Input file path. Defaults to `inputs/Day3.txt`
	#[arg(short, long)]
	input_file: Option<PathBuf>,
}

/// Trace both wires and find where they cross
fn solve(input: &str) -> Result<Crossings> {
	let Wires(first, second) = input.parse::<Wires>()?;

	let first = wire::trace(&first);
	let second = wire::trace(&second);

	Ok(intersection::analyze(&first, &second)?)
}

fn main() -> Result<()> {
	let args = Args::parse();

	let input = match args.input_file {
		Some(path) => puzzle_input::read(path)?,
		None => puzzle_input::read_day(3)?,
	};

	// Both answers are worked out before either is printed
	let crossings = solve(&input)?;

	println!("Part 1: {}", crossings.closest_distance);
	println!("Part 2: {}", crossings.fewest_steps);

	Ok(())
}
