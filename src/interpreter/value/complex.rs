use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

/// Represents a complex number with real and imaginary parts.
///
/// Equality and hashing go through [`OrderedFloat`], so a complex number can be
/// used as a dict key and `NaN` parts compare equal to themselves.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    /// Renders the number the way it is written in source, e.g. `1+2j`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:+}j", self.real, self.imaginary)
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use gysp::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` if both parts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl From<(f64, f64)> for ComplexNumber {
    fn from((real, imaginary): (f64, f64)) -> Self {
        Self::new(real, imaginary)
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
