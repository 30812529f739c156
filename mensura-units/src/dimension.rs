//! Base dimensions of a quantity kind
//!
//! Exponents over the 7 SI base dimensions, in the order
//! [length, mass, time, current, temperature, amount, luminous intensity].
//! Each kind declares one constant vector; it is used to assert that two
//! quantities are physically comparable, not to derive new kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LENGTH: usize = 0;
pub const MASS: usize = 1;
pub const TIME: usize = 2;
pub const CURRENT: usize = 3;
pub const TEMPERATURE: usize = 4;
pub const AMOUNT: usize = 5;
pub const LUMINOUS_INTENSITY: usize = 6;

const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "N", "J"];

/// Exponents of the 7 SI base dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseDimensions {
    exponents: [i32; 7],
}

impl BaseDimensions {
    pub const DIMENSIONLESS: BaseDimensions = BaseDimensions::new([0, 0, 0, 0, 0, 0, 0]);
    pub const LENGTH: BaseDimensions = BaseDimensions::new([1, 0, 0, 0, 0, 0, 0]);
    pub const MASS: BaseDimensions = BaseDimensions::new([0, 1, 0, 0, 0, 0, 0]);
    pub const TIME: BaseDimensions = BaseDimensions::new([0, 0, 1, 0, 0, 0, 0]);
    pub const CURRENT: BaseDimensions = BaseDimensions::new([0, 0, 0, 1, 0, 0, 0]);
    pub const TEMPERATURE: BaseDimensions = BaseDimensions::new([0, 0, 0, 0, 1, 0, 0]);
    pub const AMOUNT: BaseDimensions = BaseDimensions::new([0, 0, 0, 0, 0, 1, 0]);
    pub const LUMINOUS_INTENSITY: BaseDimensions = BaseDimensions::new([0, 0, 0, 0, 0, 0, 1]);

    /// [L^2]
    pub const AREA: BaseDimensions = BaseDimensions::new([2, 0, 0, 0, 0, 0, 0]);
    /// [L^3]
    pub const VOLUME: BaseDimensions = BaseDimensions::new([3, 0, 0, 0, 0, 0, 0]);
    /// [L T^-1]
    pub const SPEED: BaseDimensions = BaseDimensions::new([1, 0, -1, 0, 0, 0, 0]);
    /// [L^2 T^-2 Θ^-1]
    pub const SPECIFIC_ENTROPY: BaseDimensions = BaseDimensions::new([2, 0, -2, 0, -1, 0, 0]);

    pub const fn new(exponents: [i32; 7]) -> Self {
        BaseDimensions { exponents }
    }

    pub const fn exponents(&self) -> [i32; 7] {
        self.exponents
    }

    pub fn exponent(&self, index: usize) -> i32 {
        self.exponents[index]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Dimensions of a product (exponents added)
    pub fn multiply(&self, other: &BaseDimensions) -> BaseDimensions {
        self.combine(other, |a, b| a + b)
    }

    /// Dimensions of a quotient (exponents subtracted)
    pub fn divide(&self, other: &BaseDimensions) -> BaseDimensions {
        self.combine(other, |a, b| a - b)
    }

    /// Dimensions raised to an integer power
    pub fn power(&self, exp: i32) -> BaseDimensions {
        BaseDimensions::new(self.exponents.map(|e| e * exp))
    }

    fn combine(&self, other: &BaseDimensions, op: impl Fn(i32, i32) -> i32) -> BaseDimensions {
        let mut exponents = [0i32; 7];
        for (i, slot) in exponents.iter_mut().enumerate() {
            *slot = op(self.exponents[i], other.exponents[i]);
        }
        BaseDimensions { exponents }
    }
}

impl fmt::Display for BaseDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .exponents
            .iter()
            .copied()
            .zip(SYMBOLS)
            .filter(|(exp, _)| *exp != 0)
            .map(|(exp, symbol)| match exp {
                1 => symbol.to_string(),
                _ => format!("{}^{}", symbol, exp),
            })
            .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for BaseDimensions {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
