//! Distance metrics used to compare a point against a centroid.
//!
//! Both metrics are normalized by the dimension `d`, so values stay comparable
//! across datasets of different widths.
//!
//! ## Naming note
//!
//! [`Metric::Euclidean`] is the **mean squared difference**:
//!
//! ```text
//! d(a, b) = (1/d) Σ_i (a_i - b_i)²
//! ```
//!
//! There is no square root, so the triangle inequality does not hold. The name is kept
//! for compatibility with existing callers; do not treat it as a true Euclidean norm.
//!
//! Some k-means code in the wild attaches the "Euclidean" label to the mean absolute
//! difference instead, and uses it as the default. When porting such code, select
//! [`Metric::Manhattan`] to keep the same numbers.

use crate::error::{Error, Result};

/// Distance metric selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Mean absolute difference: `(1/d) Σ |a_i - b_i|`.
    #[default]
    Manhattan,
    /// Mean squared difference: `(1/d) Σ (a_i - b_i)²`.
    ///
    /// Not a true Euclidean distance; see the module docs.
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the lengths differ, and with
    /// [`Error::InvalidParameter`] for zero-length vectors.
    pub fn distance(self, a: &[f32], b: &[f32]) -> Result<f32> {
        if a.len() != b.len() {
            return Err(Error::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            });
        }
        if a.is_empty() {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }
        Ok(self.distance_unchecked(a, b))
    }

    /// Same as [`Metric::distance`] without the length checks.
    ///
    /// Callers must guarantee `a.len() == b.len() > 0`.
    #[inline]
    pub(crate) fn distance_unchecked(self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len());
        let sum: f32 = match self {
            Metric::Manhattan => a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum(),
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| {
                    let d = x - y;
                    d * d
                })
                .sum(),
        };
        sum / a.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_is_mean_absolute_difference() {
        let a = [1.0, -1.0, 0.5];
        let b = [0.0, 1.0, 0.5];
        // (1 + 2 + 0) / 3
        let d = Metric::Manhattan.distance(&a, &b).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_euclidean_is_mean_squared_difference() {
        let a = [1.0, -1.0, 0.5];
        let b = [0.0, 1.0, 0.5];
        // (1 + 4 + 0) / 3, no square root
        let d = Metric::Euclidean.distance(&a, &b).unwrap();
        assert!((d - 5.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let a = [0.3, -0.7, 0.9, 0.0];
        let b = [-0.2, 0.4, 0.1, -1.0];
        for metric in [Metric::Manhattan, Metric::Euclidean] {
            assert_eq!(
                metric.distance(&a, &b).unwrap(),
                metric.distance(&b, &a).unwrap()
            );
        }
    }

    #[test]
    fn test_identity_is_zero() {
        let a = [0.25, -0.5, 1.0];
        for metric in [Metric::Manhattan, Metric::Euclidean] {
            assert_eq!(metric.distance(&a, &a).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_no_triangle_inequality_for_euclidean() {
        // 0 -> 2 directly costs 4, via 1 costs 1 + 1.
        let (a, b, c) = ([0.0], [1.0], [2.0]);
        let m = Metric::Euclidean;
        let direct = m.distance(&a, &c).unwrap();
        let via = m.distance(&a, &b).unwrap() + m.distance(&b, &c).unwrap();
        assert!(direct > via);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Metric::Manhattan.distance(&[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = Metric::Euclidean.distance(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "dimension", .. }));
    }

    #[test]
    fn test_default_is_manhattan() {
        assert_eq!(Metric::default(), Metric::Manhattan);
    }
}
