#![deny(clippy::pedantic)]
use std::{path::PathBuf, str::FromStr, time::Duration};

use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

#[derive(Parser)]
struct Args {
	/// Input file path. Defaults to `inputs/Day4.txt`
	#[arg(short, long)]
	input_file: Option<PathBuf>,
}

/// The range of numbers the password is known to be in, inclusive on both ends
#[derive(Debug, PartialEq, Eq)]
struct PasswordRange {
	low: u32,
	high: u32,
}

impl FromStr for PasswordRange {
	type Err = anyhow::Error;

	fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
		// Lazily initialize a static regular expression for parsing a range
		lazy_static! {
			static ref REGEX: Regex = Regex::new("^([[:digit:]]+)-([[:digit:]]+)$").unwrap();
		}

		let captures = REGEX
			.captures(text.trim())
			.ok_or_else(|| anyhow!("Range `{text}` isn't of the form `low-high`"))?;

		let range = PasswordRange {
			low: captures[1].parse()?,
			high: captures[2].parse()?,
		};

		if range.low > range.high {
			return Err(anyhow!("Range `{text}` is backwards"));
		}

		Ok(range)
	}
}

/// Split a number into its digits, most significant first.
/// Passwords are always six digits long, so anything else is `None`.
fn digits(password: u32) -> Option<[u32; 6]> {
	if !(100_000..=999_999).contains(&password) {
		return None;
	}

	let mut digits = [0; 6];
	let mut rest = password;
	for digit in digits.iter_mut().rev() {
		*digit = rest % 10;
		rest /= 10;
	}

	Some(digits)
}

fn never_decreases(digits: &[u32]) -> bool {
	digits.iter().tuple_windows().all(|(l, r)| l <= r)
}

/// Two adjacent digits are the same, as in `122345`
fn has_double(digits: &[u32]) -> bool {
	digits.iter().tuple_windows().any(|(l, r)| l == r)
}

/// Some run of matching digits is exactly two long, as in `111122` but not `123444`
fn has_exact_double(digits: &[u32]) -> bool {
	digits
		.iter()
		.group_by(|digit| **digit)
		.into_iter()
		.any(|(_, run)| run.count() == 2)
}

/// How many numbers pass the rules for each part of the problem
#[derive(Debug, Default, PartialEq, Eq)]
struct Counts {
	/// Part 1, where any double counts
	any_double: usize,
	/// Part 2, where the double can't be part of a longer run
	exact_double: usize,
}

fn count_candidates<I: Iterator<Item = u32>>(passwords: I) -> Counts {
	passwords
		.filter_map(digits)
		.filter(|digits| never_decreases(digits))
		.fold(Counts::default(), |mut counts, digits| {
			counts.any_double += usize::from(has_double(&digits));
			counts.exact_double += usize::from(has_exact_double(&digits));
			counts
		})
}

fn main() -> Result<()> {
	let args = Args::parse();

	let input = match args.input_file {
		Some(path) => puzzle_input::read(path)?,
		None => puzzle_input::read_day(4)?,
	};
	let range: PasswordRange = input.parse()?;

	// Progress bar
	let pb = ProgressBar::new(u64::from(range.high - range.low) + 1).with_style(
		ProgressStyle::with_template(
			"{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {human_pos}/{human_len} ({eta})",
		)?
		.progress_chars("#>-"),
	);
	// Don't redraw for every number checked, every .1 second is plenty
	pb.enable_steady_tick(Duration::from_millis(100));

	let counts = count_candidates(pb.wrap_iter(range.low..=range.high));
	pb.finish_and_clear();

	println!("Part 1: {}", counts.any_double);
	println!("Part 2: {}", counts.exact_double);

	Ok(())
}
