use thiserror::Error;

use crate::wire::Trace;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("the wires never cross")]
pub struct NoIntersection;

/// The best crossing points of two wires, by each measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossings {
	/// Manhattan distance from the origin to the nearest crossing
	pub closest_distance: u32,
	/// Fewest steps both wires take, combined, to reach a crossing
	pub fewest_steps: u32,
}

/// Find every square both wires visit, and the best crossing by each measure, in one pass
///
/// # Errors
/// [`NoIntersection`] if the wires share no square other than the origin.
pub fn analyze(a: &Trace, b: &Trace) -> Result<Crossings, NoIntersection> {
	// Look up from the smaller trace into the larger one
	let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

	small
		.iter()
		.filter_map(|(point, steps)| {
			large
				.get(point)
				.map(|other_steps| (point.manhattan(), steps + other_steps))
		})
		.fold(None, |best: Option<Crossings>, (distance, steps)| {
			Some(match best {
				Some(best) => Crossings {
					closest_distance: best.closest_distance.min(distance),
					fewest_steps: best.fewest_steps.min(steps),
				},
				None => Crossings {
					closest_distance: distance,
					fewest_steps: steps,
				},
			})
		})
		.ok_or(NoIntersection)
}

/// # Errors
/// See [`analyze`].
pub fn closest_intersection_distance(a: &Trace, b: &Trace) -> Result<u32, NoIntersection> {
	analyze(a, b).map(|crossings| crossings.closest_distance)
}

/// # Errors
/// See [`analyze`].
pub fn minimal_combined_steps(a: &Trace, b: &Trace) -> Result<u32, NoIntersection> {
	analyze(a, b).map(|crossings| crossings.fewest_steps)
}
