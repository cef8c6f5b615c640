//! Characteristic polynomials of 2x2 and 3x3 matrices.

use std::fmt;

use crate::invariants::Invariants;

/// Characteristic polynomial `det(M - λI)` with coefficients stored highest degree first.
///
/// The sign conventions follow the usual textbook forms:
///
/// * 2x2: `λ² - trace·λ + det`, stored as `[1, -trace, det]`.
/// * 3x3: `-λ³ + trace·λ² - minors·λ + det`, stored as `[-1, trace, -minors, det]`, where
///   `minors` is the sum of the 2x2 principal minors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharPoly {
    /// Characteristic polynomial of a 2x2 matrix.
    Quadratic([f64; 3]),
    /// Characteristic polynomial of a 3x3 matrix.
    Cubic([f64; 4]),
}

impl CharPoly {
    /// Characteristic polynomial of a 2x2 matrix from its invariants.
    pub fn quadratic(invariants: &Invariants) -> Self {
        Self::Quadratic([1.0, -invariants.trace, invariants.determinant])
    }

    /// Characteristic polynomial of a 3x3 matrix from its invariants and the sum of its 2x2
    /// principal minors.
    pub fn cubic(invariants: &Invariants, principal_minor_sum: f64) -> Self {
        Self::Cubic([
            -1.0,
            invariants.trace,
            -principal_minor_sum,
            invariants.determinant,
        ])
    }

    /// The coefficients, highest degree first.
    pub fn coefficients(&self) -> &[f64] {
        match self {
            Self::Quadratic(c) => c.as_slice(),
            Self::Cubic(c) => c.as_slice(),
        }
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients().len() - 1
    }

    /// Evaluate the polynomial at `lambda` using Horner's scheme.
    pub fn evaluate(&self, lambda: f64) -> f64 {
        self.coefficients()
            .iter()
            .fold(0.0, |acc, &c| acc * lambda + c)
    }

    /// Discriminant `trace² - 4·det` of the quadratic case, `None` for cubics.
    ///
    /// A negative discriminant means the eigenvalues form a complex conjugate pair.
    pub fn discriminant(&self) -> Option<f64> {
        match self {
            Self::Quadratic([a, b, c]) => Some(b * b - 4.0 * a * c),
            Self::Cubic(_) => None,
        }
    }
}

// -0.0 renders as "-0.00" otherwise.
fn fixed2(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for CharPoly {
    /// Formats the characteristic equation as LaTeX with two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quadratic([_, b, c]) => write!(
                f,
                "\\lambda^2 - {:.2}\\lambda + {:.2} = 0",
                fixed2(-b),
                fixed2(*c)
            ),
            Self::Cubic([_, b, c, d]) => write!(
                f,
                "-\\lambda^3 + {:.2}\\lambda^2 - {:.2}\\lambda + {:.2} = 0",
                fixed2(*b),
                fixed2(-c),
                fixed2(*d)
            ),
        }
    }
}
