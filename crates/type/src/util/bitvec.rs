// SPDX-License-Identifier: MIT
// Copyright (c) 2026 langext

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A bit-packed boolean vector.
///
/// Used as the null-presence map of fixed-width columns: bit `i` set means
/// row `i` carries a logical null. Eight rows per byte keeps the map cheap
/// next to the dense value buffer it annotates.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVec {
	bits: Vec<u8>,
	len: usize,
}

impl BitVec {
	/// Create a bit vector of `len` bits, all set to `value`.
	pub fn new(len: usize, value: bool) -> Self {
		let fill = if value {
			0xff
		} else {
			0x00
		};
		let mut bv = Self {
			bits: vec![fill; len.div_ceil(8)],
			len,
		};
		bv.clear_tail();
		bv
	}

	pub fn empty() -> Self {
		Self {
			bits: Vec::new(),
			len: 0,
		}
	}

	pub fn from_slice(values: &[bool]) -> Self {
		let mut bv = Self::new(values.len(), false);
		for (i, &v) in values.iter().enumerate() {
			if v {
				bv.set(i, true);
			}
		}
		bv
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Read bit `idx`. Out-of-range reads answer `false`.
	pub fn get(&self, idx: usize) -> bool {
		if idx >= self.len {
			return false;
		}
		self.bits[idx / 8] & (1 << (idx % 8)) != 0
	}

	/// Set bit `idx`.
	///
	/// # Panics
	/// Panics if `idx >= len`.
	pub fn set(&mut self, idx: usize, value: bool) {
		assert!(idx < self.len, "bit index {} out of range (len {})", idx, self.len);
		if value {
			self.bits[idx / 8] |= 1 << (idx % 8);
		} else {
			self.bits[idx / 8] &= !(1 << (idx % 8));
		}
	}

	pub fn push(&mut self, value: bool) {
		if self.len % 8 == 0 {
			self.bits.push(0);
		}
		self.len += 1;
		if value {
			self.set(self.len - 1, true);
		}
	}

	pub fn count_ones(&self) -> usize {
		self.bits.iter().map(|b| b.count_ones() as usize).sum()
	}

	/// True if any bit is set, i.e. the column has at least one null row.
	pub fn any_set(&self) -> bool {
		self.bits.iter().any(|&b| b != 0)
	}

	pub fn iter(&self) -> BitVecIter<'_> {
		BitVecIter {
			bv: self,
			idx: 0,
		}
	}

	pub fn to_vec(&self) -> Vec<bool> {
		self.iter().collect()
	}

	// Bits past `len` in the last byte must stay zero so that count_ones
	// and equality stay meaningful.
	fn clear_tail(&mut self) {
		let tail = self.len % 8;
		if tail != 0 {
			if let Some(last) = self.bits.last_mut() {
				*last &= (1 << tail) - 1;
			}
		}
	}
}

impl Debug for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "BitVec[")?;
		for i in 0..self.len {
			write!(f, "{}", self.get(i) as u8)?;
		}
		write!(f, "]")
	}
}

impl Display for BitVec {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Debug::fmt(self, f)
	}
}

impl FromIterator<bool> for BitVec {
	fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
		let mut bv = Self::empty();
		for v in iter {
			bv.push(v);
		}
		bv
	}
}

pub struct BitVecIter<'a> {
	bv: &'a BitVec,
	idx: usize,
}

impl Iterator for BitVecIter<'_> {
	type Item = bool;

	fn next(&mut self) -> Option<bool> {
		if self.idx >= self.bv.len {
			return None;
		}
		let v = self.bv.get(self.idx);
		self.idx += 1;
		Some(v)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let rest = self.bv.len - self.idx;
		(rest, Some(rest))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_all_false() {
		let bv = BitVec::new(10, false);
		assert_eq!(bv.len(), 10);
		assert_eq!(bv.count_ones(), 0);
		assert!(!bv.any_set());
	}

	#[test]
	fn test_new_all_true_clears_tail() {
		let bv = BitVec::new(10, true);
		assert_eq!(bv.count_ones(), 10);
		assert_eq!(bv, BitVec::from_slice(&[true; 10]));
	}

	#[test]
	fn test_set_get() {
		let mut bv = BitVec::new(9, false);
		bv.set(0, true);
		bv.set(8, true);
		assert!(bv.get(0));
		assert!(!bv.get(1));
		assert!(bv.get(8));
		assert_eq!(bv.count_ones(), 2);

		bv.set(0, false);
		assert!(!bv.get(0));
		assert_eq!(bv.count_ones(), 1);
	}

	#[test]
	fn test_get_out_of_range_is_false() {
		let bv = BitVec::new(3, true);
		assert!(!bv.get(3));
		assert!(!bv.get(100));
	}

	#[test]
	#[should_panic(expected = "out of range")]
	fn test_set_out_of_range_panics() {
		let mut bv = BitVec::new(3, false);
		bv.set(3, true);
	}

	#[test]
	fn test_push_and_iter() {
		let mut bv = BitVec::empty();
		for i in 0..17 {
			bv.push(i % 3 == 0);
		}
		assert_eq!(bv.len(), 17);
		let collected: Vec<bool> = bv.iter().collect();
		assert_eq!(collected.len(), 17);
		assert!(collected[0]);
		assert!(!collected[1]);
		assert!(collected[15]);
	}

	#[test]
	fn test_from_slice_round_trip() {
		let values = [true, false, false, true, true, false, true, false, true];
		let bv = BitVec::from_slice(&values);
		assert_eq!(bv.to_vec(), values.to_vec());
	}
}
