//! Operator and trait integration for `Num`.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};

use crate::algorithms::add::add_digits;
use crate::algorithms::compare::compare_digits;
use crate::algorithms::multiply::multiply_digits;
use crate::Num;

impl Ord for Num {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digits(self.digits(), other.digits())
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Num {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.digits() == [0]
    }
}

impl One for Num {
    fn one() -> Self {
        Self::from_canonical(vec![1])
    }

    fn is_one(&self) -> bool {
        self.digits() == [1]
    }
}

// Arithmetic operations
impl Add for Num {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Add<&Num> for Num {
    type Output = Self;

    fn add(self, rhs: &Num) -> Self::Output {
        &self + rhs
    }
}

impl Add for &Num {
    type Output = Num;

    fn add(self, rhs: Self) -> Self::Output {
        Num::from_canonical(add_digits(self.digits(), rhs.digits()))
    }
}

impl Mul for Num {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<&Num> for Num {
    type Output = Self;

    fn mul(self, rhs: &Num) -> Self::Output {
        &self * rhs
    }
}

impl Mul for &Num {
    type Output = Num;

    fn mul(self, rhs: Self) -> Self::Output {
        Num::from_canonical(multiply_digits(self.digits(), rhs.digits()))
    }
}

impl Sum for Num {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a Num> for Num {
    fn sum<I: Iterator<Item = &'a Num>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + x)
    }
}

impl Product for Num {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a Num> for Num {
    fn product<I: Iterator<Item = &'a Num>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| &acc * x)
    }
}
