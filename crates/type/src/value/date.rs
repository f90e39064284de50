// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as days since the Unix epoch (1970-01-01); negative
/// values represent dates before 1970.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date {
	days_since_epoch: i32,
}

impl Date {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	// Civil-from-days and days-from-civil follow Howard Hinnant's
	// calendar algorithms.
	fn ymd_to_days(year: i32, month: u32, day: u32) -> Option<i32> {
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400;
		let doy = (153 * m + 2) / 5 + day as i32 - 1;
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

		Some(era * 146097 + doe - 719468)
	}

	fn days_to_ymd(days: i32) -> (i32, u32, u32) {
		let z = days + 719468;
		let era = if z >= 0 {
			z
		} else {
			z - 146096
		} / 146097;
		let doe = z - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		} as u32;

		if m <= 2 {
			(y + 1, m, d)
		} else {
			(y, m, d)
		}
	}

	/// Create a date from a calendar year, month and day. Answers `None`
	/// when the combination is not a valid civil date.
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub fn from_days_since_epoch(days: i32) -> Self {
		Self {
			days_since_epoch: days,
		}
	}

	pub fn days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub fn year(&self) -> i32 {
		Self::days_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_to_ymd(self.days_since_epoch).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (y, m, d) = Self::days_to_ymd(self.days_since_epoch);
		write!(f, "{:04}-{:02}-{:02}", y, m, d)
	}
}
