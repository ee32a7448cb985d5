use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    iter::Sum,
    ops::{Add, Sub},
};

/// A quantity of bytes, used for sizes, offsets and alignments alike.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
#[display("{units}")]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };
    pub const ONE: Self = Self { units: 1 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    pub fn checked_add(self, rhs: ByteUnits) -> Option<ByteUnits> {
        self.units.checked_add(rhs.units).map(Self::of)
    }

    pub fn checked_mul(self, rhs: u64) -> Option<ByteUnits> {
        self.units.checked_mul(rhs).map(Self::of)
    }

    /// Rounds up to the next multiple of `align`, or `None` if that doesn't fit in 64 bits.
    /// An alignment of zero is treated as no alignment requirement.
    pub fn align_to(&self, align: ByteUnits) -> Option<ByteUnits> {
        let width = self.units;
        let align = align.units;

        if align <= 1 {
            return Some(*self);
        }

        if align.is_power_of_two() {
            let mask = align - 1;
            width.checked_add(mask).map(|end| Self::of(end & !mask))
        } else {
            width.div_ceil(align).checked_mul(align).map(Self::of)
        }
    }

    /// Number of bytes needed to reach the next multiple of `align`.
    pub fn padding_to(&self, align: ByteUnits) -> Option<ByteUnits> {
        self.align_to(align).map(|aligned| aligned - *self)
    }

    pub fn is_aligned_to(&self, align: ByteUnits) -> bool {
        self.padding_to(align).is_some_and(|padding| padding.is_zero())
    }
}

impl Sum for ByteUnits {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Add<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn add(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units + rhs.units,
        }
    }
}

impl Sub<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn sub(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units - rhs.units,
        }
    }
}

#[test]
fn test_align_to_power_of_two() {
    let align = |width, align| ByteUnits::of(width).align_to(ByteUnits::of(align));

    assert_eq!(align(0, 8), Some(ByteUnits::of(0)));
    assert_eq!(align(1, 8), Some(ByteUnits::of(8)));
    assert_eq!(align(9, 4), Some(ByteUnits::of(12)));
    assert_eq!(align(16, 8), Some(ByteUnits::of(16)));
}

#[test]
fn test_align_to_odd_alignment() {
    assert_eq!(ByteUnits::of(4).align_to(ByteUnits::of(3)), Some(ByteUnits::of(6)));
    assert_eq!(ByteUnits::of(6).align_to(ByteUnits::of(3)), Some(ByteUnits::of(6)));
    assert_eq!(ByteUnits::of(5).align_to(ByteUnits::ZERO), Some(ByteUnits::of(5)));
}

#[test]
fn test_align_to_past_u64_is_none() {
    assert_eq!(ByteUnits::of(u64::MAX - 2).align_to(ByteUnits::of(8)), None);
    assert_eq!(ByteUnits::of(u64::MAX).align_to(ByteUnits::of(10)), None);

    let last = ByteUnits::of(u64::MAX - 7);
    assert_eq!(last.align_to(ByteUnits::of(8)), Some(last));
    assert!(!ByteUnits::of(u64::MAX).is_aligned_to(ByteUnits::of(2)));
}

#[test]
fn test_checked_arithmetic() {
    assert_eq!(ByteUnits::of(8).checked_mul(3), Some(ByteUnits::of(24)));
    assert_eq!(ByteUnits::of(8).checked_mul(1 << 62), None);
    assert_eq!(ByteUnits::of(u64::MAX).checked_add(ByteUnits::ONE), None);
    assert_eq!(ByteUnits::of(2).checked_add(ByteUnits::of(3)), Some(ByteUnits::of(5)));
}

#[test]
fn test_padding_to() {
    assert_eq!(ByteUnits::of(1).padding_to(ByteUnits::of(8)), Some(ByteUnits::of(7)));
    assert_eq!(ByteUnits::of(8).padding_to(ByteUnits::of(8)), Some(ByteUnits::ZERO));
    assert!(ByteUnits::of(12).is_aligned_to(ByteUnits::of(4)));
    assert!(!ByteUnits::of(12).is_aligned_to(ByteUnits::of(8)));
}

#[test]
fn test_sum_and_display() {
    let total: ByteUnits = [1, 2, 3].into_iter().map(ByteUnits::of).sum();
    assert_eq!(total, ByteUnits::of(6));
    assert_eq!(total.to_string(), "6");
}
