#![deny(clippy::pedantic)]
//! Loads puzzle inputs from disk.
//!
//! Each day's input lives at `inputs/Day{N}.txt` relative to the working directory,
//! unless the caller points somewhere else explicitly.
use std::{
	fs, io,
	path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
	/// Nothing exists at the requested path
	#[error("no puzzle input found at `{}`", path.display())]
	Missing { path: PathBuf },
	/// The file exists but couldn't be read (permissions, not UTF-8, it's a directory, ...)
	#[error("couldn't read puzzle input `{}`", path.display())]
	Unreadable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

/// Where the input for a given day is expected to be
#[must_use]
pub fn day_path(day: u8) -> PathBuf {
	PathBuf::from("inputs").join(format!("Day{day}.txt"))
}

/// Read the input for a given day from its default location
///
/// # Errors
/// See [`read`].
pub fn read_day(day: u8) -> Result<String, InputError> {
	read(day_path(day))
}

/// Read an entire input file into a string, with its trailing line ending removed
///
/// # Errors
/// [`InputError::Missing`] if there is no file at `path`, and [`InputError::Unreadable`]
/// for any other failure to read it.
pub fn read<P: AsRef<Path>>(path: P) -> Result<String, InputError> {
	let path = path.as_ref();
	let mut text = fs::read_to_string(path).map_err(|source| match source.kind() {
		io::ErrorKind::NotFound => InputError::Missing {
			path: path.to_path_buf(),
		},
		_ => InputError::Unreadable {
			path: path.to_path_buf(),
			source,
		},
	})?;

	// Only one line ending is stripped, anything before it is the caller's business
	if text.ends_with('\n') {
		text.pop();
		if text.ends_with('\r') {
			text.pop();
		}
	}

	Ok(text)
}
