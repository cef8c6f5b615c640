//! Real eigenpairs of 2x2 and 3x3 matrices.
//!
//! The 2x2 case is solved in closed form. The 3x3 case scans the characteristic cubic for sign
//! changes over a fixed window and refines each bracket by bisection. Eigenvalues outside the scan
//! window are not reported.

use linlab_algebra::{Mat2F64, Mat3F64, Vec2F64, Vec3F64};

use crate::charpoly::CharPoly;
use crate::color::EigenColor;
use crate::invariants::{principal_minor_sum, Invariants};

/// Below this magnitude an off-diagonal entry of a 2x2 matrix is treated as zero.
pub const EIGENVECTOR_EPSILON_2D: f64 = 1e-4;

/// Below this length a cross product of two rows of `M - λI` is treated as degenerate.
pub const CROSS_PRODUCT_EPSILON: f64 = 1e-3;

/// Largest number of brackets a [`RootScan`] evaluates.
pub const MAX_SCAN_SAMPLES: usize = 1 << 20;

/// A real eigenvalue with one of its eigenvectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eigenpair<V> {
    /// The eigenvalue `λ`.
    pub eigenvalue: f64,
    /// A non-zero vector `v` with `Mv = λv`.
    pub eigenvector: V,
    /// Display tag, cycles with the pair index.
    pub color: EigenColor,
}

/// Parameters of the sampled bisection root finder.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootScan {
    /// Lower end of the scan window.
    pub min: f64,
    /// Last sample of the scan window; its bracket extends one step past it.
    pub max: f64,
    /// Width of every bracket.
    pub step: f64,
    /// Number of interval halvings per bracket.
    pub bisection_iterations: usize,
    /// A root closer than this to the previously recorded root is dropped.
    pub dedup_distance: f64,
}

impl Default for RootScan {
    fn default() -> Self {
        Self {
            min: -20.0,
            max: 20.0,
            step: 0.5,
            bisection_iterations: 10,
            dedup_distance: 0.1,
        }
    }
}

impl RootScan {
    /// Find the real roots of `f` inside the scan window, in ascending order.
    ///
    /// Every bracket `[lo, lo + step]` with `f(lo)·f(lo + step) <= 0` is bisected and its final
    /// midpoint is recorded, unless it lies within `dedup_distance` of the last recorded root.
    /// An invalid window (non-positive or non-finite step, non-finite bounds, `max < min`) or
    /// one needing more than [`MAX_SCAN_SAMPLES`] brackets yields no roots.
    pub fn find_roots(&self, f: impl Fn(f64) -> f64) -> Vec<f64> {
        let mut roots: Vec<f64> = Vec::new();

        let valid_window = self.step > 0.0
            && self.step.is_finite()
            && self.min.is_finite()
            && self.max.is_finite()
            && self.max >= self.min;
        if !valid_window {
            log::warn!("Invalid root scan window: {:?}", self);
            return roots;
        }

        // sample from an integer counter so the grid does not drift
        let num_brackets = ((self.max - self.min) / self.step + 1e-9).floor();
        if num_brackets >= MAX_SCAN_SAMPLES as f64 {
            log::warn!(
                "Root scan window {:?} needs more than {} samples",
                self,
                MAX_SCAN_SAMPLES
            );
            return roots;
        }
        let num_samples = num_brackets as usize + 1;

        for i in 0..num_samples {
            let lo = self.min + i as f64 * self.step;
            let hi = lo + self.step;
            if f(lo) * f(hi) > 0.0 {
                continue;
            }

            let root = self.bisect(&f, lo, hi);
            log::trace!("bracket [{lo}, {hi}] refined to {root}");

            match roots.last() {
                Some(last) if (last - root).abs() <= self.dedup_distance => {}
                _ => roots.push(root),
            }
        }

        roots
    }

    fn bisect(&self, f: &impl Fn(f64) -> f64, mut low: f64, mut high: f64) -> f64 {
        for _ in 0..self.bisection_iterations {
            let mid = (low + high) / 2.0;
            if f(low) * f(mid) <= 0.0 {
                high = mid;
            } else {
                low = mid;
            }
        }
        (low + high) / 2.0
    }
}

/// Real eigenpairs of a 2x2 matrix.
///
/// Returns no pairs when the discriminant is negative. Otherwise returns exactly two pairs,
/// larger eigenvalue first; a repeated eigenvalue is reported twice.
pub fn eigenpairs2(m: &Mat2F64) -> Vec<Eigenpair<Vec2F64>> {
    let invariants = Invariants::from_mat2(m);
    let discriminant = invariants.trace * invariants.trace - 4.0 * invariants.determinant;
    if discriminant < 0.0 {
        return Vec::new();
    }

    let sqrt_disc = discriminant.sqrt();
    let eigenvalues = [
        (invariants.trace + sqrt_disc) / 2.0,
        (invariants.trace - sqrt_disc) / 2.0,
    ];

    eigenvalues
        .into_iter()
        .enumerate()
        .map(|(i, eigenvalue)| Eigenpair {
            eigenvalue,
            eigenvector: eigenvector2(m, eigenvalue),
            color: EigenColor::from_index(i),
        })
        .collect()
}

/// An eigenvector of a 2x2 matrix for the eigenvalue `lambda`.
///
/// The vector is the null vector of the first row of `M - λI` whose off-diagonal entry is
/// non-zero, and is not normalized. A diagonal matrix yields the axis whose diagonal entry is
/// nearest to `lambda`.
pub fn eigenvector2(m: &Mat2F64, lambda: f64) -> Vec2F64 {
    let [[a, b], [c, d]] = m.to_rows();
    if b.abs() > EIGENVECTOR_EPSILON_2D {
        // (a - λ, b) · (b, λ - a) = 0
        Vec2F64::new(b, lambda - a)
    } else if c.abs() > EIGENVECTOR_EPSILON_2D {
        // (c, d - λ) · (λ - d, c) = 0
        Vec2F64::new(lambda - d, c)
    } else if (lambda - a).abs() <= (lambda - d).abs() {
        Vec2F64::X
    } else {
        Vec2F64::Y
    }
}

/// Real eigenpairs of a 3x3 matrix, ascending by eigenvalue.
pub fn eigenpairs3(m: &Mat3F64, scan: &RootScan) -> Vec<Eigenpair<Vec3F64>> {
    let poly = CharPoly::cubic(&Invariants::from_mat3(m), principal_minor_sum(m));
    let roots = scan.find_roots(|lambda| poly.evaluate(lambda));

    roots
        .into_iter()
        .enumerate()
        .map(|(i, eigenvalue)| Eigenpair {
            eigenvalue,
            eigenvector: eigenvector3(m, eigenvalue),
            color: EigenColor::from_index(i),
        })
        .collect()
}

/// A unit eigenvector of a 3x3 matrix for the eigenvalue `lambda`.
///
/// The null space of `M - λI` is orthogonal to its rows, so the cross product of two
/// independent rows spans it. The candidates (r1 × r2), (r1 × r3) and (r2 × r3) are compared
/// and the longest one wins, earlier candidates on ties. When none of them reaches
/// [`CROSS_PRODUCT_EPSILON`] the x axis is returned.
pub fn eigenvector3(m: &Mat3F64, lambda: f64) -> Vec3F64 {
    let shifted = *m - Mat3F64::IDENTITY.scaled(lambda);
    let (r1, r2, r3) = (shifted.row(0), shifted.row(1), shifted.row(2));

    let best = [r1.cross(r2), r1.cross(r3), r2.cross(r3)]
        .into_iter()
        .map(|v| (v, v.length()))
        .filter(|(_, length)| *length >= CROSS_PRODUCT_EPSILON)
        .fold(None, |best: Option<(Vec3F64, f64)>, (v, length)| match best {
            Some((_, best_length)) if best_length >= length => best,
            _ => Some((v, length)),
        });

    best.map_or(Vec3F64::X, |(v, _)| v)
        .normalize_or(Vec3F64::X)
}
