// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::date::Date;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// A calendar date plus time of day, microsecond precision.
///
/// Internally stored as microseconds since the Unix epoch; negative values
/// represent instants before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
	micros_since_epoch: i64,
}

impl Timestamp {
	/// Create a timestamp from a date and a time of day. Answers `None`
	/// when the time of day is out of range.
	pub fn new(date: Date, hour: u32, minute: u32, second: u32, micros: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || micros > 999_999 {
			return None;
		}
		let day_micros = ((hour as i64 * 60 + minute as i64) * 60 + second as i64) * MICROS_PER_SECOND
			+ micros as i64;
		Some(Self {
			micros_since_epoch: date.days_since_epoch() as i64 * MICROS_PER_DAY + day_micros,
		})
	}

	pub fn from_micros_since_epoch(micros: i64) -> Self {
		Self {
			micros_since_epoch: micros,
		}
	}

	pub fn micros_since_epoch(&self) -> i64 {
		self.micros_since_epoch
	}

	pub fn date(&self) -> Date {
		Date::from_days_since_epoch(self.micros_since_epoch.div_euclid(MICROS_PER_DAY) as i32)
	}

	/// Microseconds into the day, always non-negative.
	fn micros_of_day(&self) -> i64 {
		self.micros_since_epoch.rem_euclid(MICROS_PER_DAY)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let of_day = self.micros_of_day();
		let seconds = of_day / MICROS_PER_SECOND;
		let micros = of_day % MICROS_PER_SECOND;
		write!(
			f,
			"{} {:02}:{:02}:{:02}.{:06}",
			self.date(),
			seconds / 3600,
			seconds / 60 % 60,
			seconds % 60,
			micros
		)
	}
}
