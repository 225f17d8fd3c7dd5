use std::{
	collections::HashMap,
	num::{NonZeroU32, ParseIntError},
	str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
	#[error("empty instruction")]
	EmptyInstruction,
	#[error("unknown direction `{0}`")]
	UnknownDirection(char),
	#[error("invalid magnitude in instruction `{token}`")]
	InvalidMagnitude {
		token: String,
		#[source]
		source: ParseIntError,
	},
	#[error("instruction `{0}` doesn't move anywhere")]
	ZeroMagnitude(String),
	#[error("expected exactly two wires, found {0}")]
	WireCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
	Left,
	Right,
}

impl TryFrom<char> for Direction {
	type Error = ParseError;

	fn try_from(c: char) -> Result<Self, Self::Error> {
		match c {
			'U' => Ok(Direction::Up),
			'D' => Ok(Direction::Down),
			'L' => Ok(Direction::Left),
			'R' => Ok(Direction::Right),
			c => Err(ParseError::UnknownDirection(c)),
		}
	}
}

/// A single move like `R8`: a direction and how many grid squares to go in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
	pub direction: Direction,
	pub magnitude: NonZeroU32,
}

impl FromStr for Instruction {
	type Err = ParseError;

	fn from_str(token: &str) -> Result<Self, Self::Err> {
		let mut chars = token.chars();
		let direction = Direction::try_from(chars.next().ok_or(ParseError::EmptyInstruction)?)?;

		// Parse as u32 first so that `R0` and `R-1` get different errors
		let magnitude: u32 = chars
			.as_str()
			.parse()
			.map_err(|source| ParseError::InvalidMagnitude {
				token: token.to_string(),
				source,
			})?;
		let magnitude =
			NonZeroU32::new(magnitude).ok_or_else(|| ParseError::ZeroMagnitude(token.to_string()))?;

		Ok(Instruction {
			direction,
			magnitude,
		})
	}
}

/// Parse one comma-separated line of instructions, e.g. `R8,U5,L5,D3`
///
/// # Errors
/// The first token that isn't a valid [`Instruction`].
pub fn parse_path(line: &str) -> Result<Vec<Instruction>, ParseError> {
	line.split(',').map(|token| token.trim().parse()).collect()
}

/// The two wires making up a puzzle input, one per line
#[derive(Debug)]
pub struct Wires(pub Vec<Instruction>, pub Vec<Instruction>);

impl FromStr for Wires {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lines: Vec<_> = s.lines().filter(|line| !line.trim().is_empty()).collect();
		match lines[..] {
			[first, second] => Ok(Wires(parse_path(first)?, parse_path(second)?)),
			_ => Err(ParseError::WireCount(lines.len())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
	pub x: i32,
	pub y: i32,
}

impl Point {
	pub const ORIGIN: Point = Point { x: 0, y: 0 };

	#[must_use]
	pub fn step(self, direction: Direction) -> Point {
		match direction {
			Direction::Up => Point {
				y: self.y + 1,
				..self
			},
			Direction::Down => Point {
				y: self.y - 1,
				..self
			},
			Direction::Left => Point {
				x: self.x - 1,
				..self
			},
			Direction::Right => Point {
				x: self.x + 1,
				..self
			},
		}
	}

	/// Manhattan distance from the origin
	#[must_use]
	pub fn manhattan(self) -> u32 {
		self.x.unsigned_abs() + self.y.unsigned_abs()
	}
}

/// Every grid square a wire enters, along with the number of steps it took to get there the first time
pub type Trace = HashMap<Point, u32>;

/// Walk a wire from the origin one square at a time. The origin itself is never recorded.
#[must_use]
pub fn trace(instructions: &[Instruction]) -> Trace {
	let mut visited = Trace::new();
	let mut position = Point::ORIGIN;
	let mut steps = 0;

	for instruction in instructions {
		for _ in 0..instruction.magnitude.get() {
			position = position.step(instruction.direction);
			steps += 1;
			// Wires can pass back through the central port, but it never counts as visited.
			// Revisits keep the step count from the first time through.
			if position != Point::ORIGIN {
				visited.entry(position).or_insert(steps);
			}
		}
	}

	visited
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn path(line: &str) -> Vec<Instruction> {
		parse_path(line).unwrap()
	}

	#[test]
	fn instruction_parse() {
		macro_rules! test {
			($str:expr, $direction:expr, $magnitude:expr) => {
				let instruction: Instruction = $str.parse().unwrap();
				assert_eq!(
					(instruction.direction, instruction.magnitude.get()),
					($direction, $magnitude),
					"\n  text: `{}`",
					$str
				);
			};
		}

		test!("R8", Direction::Right, 8);
		test!("U5", Direction::Up, 5);
		test!("L5", Direction::Left, 5);
		test!("D3", Direction::Down, 3);
		test!("R1005", Direction::Right, 1005);
	}

	#[test]
	fn malformed_instructions() {
		assert!(matches!("".parse::<Instruction>(), Err(ParseError::EmptyInstruction)));
		assert!(matches!("X5".parse::<Instruction>(), Err(ParseError::UnknownDirection('X'))));
		assert!(matches!("u5".parse::<Instruction>(), Err(ParseError::UnknownDirection('u'))));
		assert!(matches!("R".parse::<Instruction>(), Err(ParseError::InvalidMagnitude { .. })));
		assert!(matches!("Rfive".parse::<Instruction>(), Err(ParseError::InvalidMagnitude { .. })));
		assert!(matches!("R-3".parse::<Instruction>(), Err(ParseError::InvalidMagnitude { .. })));
		assert!(matches!("R0".parse::<Instruction>(), Err(ParseError::ZeroMagnitude(_))));

		// One bad token spoils the whole path
		assert!(parse_path("R8,U5,Q5,D3").is_err());
	}

	#[test]
	fn wires_parse() {
		let wires: Wires = "R8,U5,L5,D3\nU7,R6,D4,L4".parse().unwrap();
		assert_eq!(wires.0, path("R8,U5,L5,D3"));
		assert_eq!(wires.1, path("U7,R6,D4,L4"));

		// Windows line endings and a trailing blank line are fine
		let wires: Wires = "R8,U5\r\nU7,R6\r\n\r\n".parse().unwrap();
		assert_eq!(wires.1, path("U7,R6"));

		assert!(matches!("R8,U5".parse::<Wires>(), Err(ParseError::WireCount(1))));
		assert!(matches!("R1\nU1\nL1".parse::<Wires>(), Err(ParseError::WireCount(3))));
		assert!(matches!("".parse::<Wires>(), Err(ParseError::WireCount(0))));
	}

	#[test]
	fn single_step() {
		let visited = trace(&path("U1"));
		assert_eq!(visited.len(), 1);
		assert_eq!(visited[&Point { x: 0, y: 1 }], 1);
	}

	#[test]
	fn directions() {
		let visited = trace(&path("R2,U2,L4,D4"));

		assert_eq!(visited[&Point { x: 2, y: 0 }], 2);
		assert_eq!(visited[&Point { x: 2, y: 2 }], 4);
		assert_eq!(visited[&Point { x: -2, y: 2 }], 8);
		assert_eq!(visited[&Point { x: -2, y: -2 }], 12);
		assert_eq!(visited.len(), 12);
	}

	#[test]
	fn first_visit_wins() {
		// Goes out, comes straight back through the origin, then crosses it again
		let visited = trace(&path("R3,L4,R1"));

		assert_eq!(visited[&Point { x: 1, y: 0 }], 1);
		assert_eq!(visited[&Point { x: 2, y: 0 }], 2);
		assert_eq!(visited[&Point { x: 3, y: 0 }], 3);
		assert_eq!(visited[&Point { x: -1, y: 0 }], 7);
		assert_eq!(visited.len(), 4);
		assert!(!visited.contains_key(&Point::ORIGIN));
	}

	fn arb_instruction() -> impl Strategy<Value = Instruction> {
		(
			prop_oneof![
				Just(Direction::Up),
				Just(Direction::Down),
				Just(Direction::Left),
				Just(Direction::Right),
			],
			1..20u32,
		)
			.prop_map(|(direction, magnitude)| Instruction {
				direction,
				magnitude: NonZeroU32::new(magnitude).unwrap(),
			})
	}

	proptest! {
		#[test]
		fn trace_is_deterministic(instructions in prop::collection::vec(arb_instruction(), 0..30)) {
			prop_assert_eq!(trace(&instructions), trace(&instructions));
		}

		#[test]
		fn origin_never_visited(instructions in prop::collection::vec(arb_instruction(), 0..30)) {
			prop_assert!(!trace(&instructions).contains_key(&Point::ORIGIN));
		}

		#[test]
		fn steps_are_first_occurrence(instructions in prop::collection::vec(arb_instruction(), 1..30)) {
			// Unroll the whole walk into a list, then the first index of each point is its step count
			let mut walk = Vec::new();
			let mut position = Point::ORIGIN;
			for instruction in &instructions {
				for _ in 0..instruction.magnitude.get() {
					position = position.step(instruction.direction);
					walk.push(position);
				}
			}

			let visited = trace(&instructions);
			for (point, steps) in &visited {
				let first = walk.iter().position(|p| p == point).unwrap();
				prop_assert_eq!(*steps as usize, first + 1);
			}
			for point in walk.iter().filter(|p| **p != Point::ORIGIN) {
				prop_assert!(visited.contains_key(point));
			}
		}
	}
}
