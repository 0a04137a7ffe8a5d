//! The fractional power basis `X^0.5, X^1.5, ... X^5.5` shared by both PARSEC surfaces.
//!
//! The half-integer powers give a rounded leading edge of finite radius while leaving six
//! degrees of freedom to match the crest and trailing edge conditions.

use crate::errors::{ParsecError, Result};
use ncollide2d::na::{Matrix6, Vector6};

/// Exponents of the six basis terms, in coefficient order
pub const EXPONENTS: [f64; 6] = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

/// Builds the 6x6 matrix of the PARSEC surface system for a crest located at `x`. The rows
/// are, in order: value at the trailing edge, value at the crest, slope at the trailing edge,
/// slope at the crest, curvature at the crest, and the leading edge radius term.
///
/// # Arguments
///
/// * `x` - the chordwise location of the surface crest, which must be strictly positive since
/// the curvature row contains `X^-1.5`
pub fn system_matrix(x: f64) -> Result<Matrix6<f64>> {
    if !(x > 0.0 && x.is_finite()) {
        return Err(ParsecError::Domain {
            quantity: "crest X location",
            value: x,
        });
    }

    let mut m = Matrix6::zeros();
    for (j, &p) in EXPONENTS.iter().enumerate() {
        m[(0, j)] = 1.0;
        m[(1, j)] = x.powf(p);
        m[(2, j)] = p;
        m[(3, j)] = p * x.powf(p - 1.0);
        m[(4, j)] = p * (p - 1.0) * x.powf(p - 2.0);
    }
    m[(5, 0)] = 1.0;

    Ok(m)
}

/// Value of the surface polynomial with coefficients `a` at `x`
pub fn surface_z(a: &Vector6<f64>, x: f64) -> f64 {
    EXPONENTS
        .iter()
        .zip(a.iter())
        .map(|(p, c)| c * x.powf(*p))
        .sum()
}

/// First derivative dZ/dX, unbounded as `x` approaches zero
pub fn surface_dz(a: &Vector6<f64>, x: f64) -> f64 {
    EXPONENTS
        .iter()
        .zip(a.iter())
        .map(|(p, c)| c * p * x.powf(p - 1.0))
        .sum()
}

/// Second derivative d2Z/dX2
pub fn surface_d2z(a: &Vector6<f64>, x: f64) -> f64 {
    EXPONENTS
        .iter()
        .zip(a.iter())
        .map(|(p, c)| c * p * (p - 1.0) * x.powf(p - 2.0))
        .sum()
}

/// Evaluates the surface at every station. Stations must be non-negative; a station at exactly
/// zero yields zero.
pub fn evaluate(a: &Vector6<f64>, stations: &[f64]) -> Result<Vec<f64>> {
    stations
        .iter()
        .map(|&x| {
            if x >= 0.0 {
                Ok(surface_z(a, x))
            } else {
                Err(ParsecError::Domain {
                    quantity: "station X",
                    value: x,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn test_matrix_at_unit_chord() {
        let m = system_matrix(1.0).unwrap();
        let curvature = [-0.25, 0.75, 3.75, 8.75, 15.75, 24.75];
        for j in 0..6 {
            assert_eq!(1.0, m[(0, j)]);
            assert_eq!(1.0, m[(1, j)]);
            assert_eq!(EXPONENTS[j], m[(2, j)]);
            assert_eq!(EXPONENTS[j], m[(3, j)]);
            assert_relative_eq!(curvature[j], m[(4, j)], epsilon = 1e-12);
        }
        assert_eq!(1.0, m[(5, 0)]);
        assert_eq!(0.0, m.row(5).iter().skip(1).sum::<f64>());
    }

    #[test]
    fn test_matrix_at_quarter_chord() {
        let m = system_matrix(0.25).unwrap();
        assert_relative_eq!(0.5, m[(1, 0)], epsilon = 1e-12);
        assert_relative_eq!(0.125, m[(1, 1)], epsilon = 1e-12);
        assert_relative_eq!(1.0, m[(3, 0)], epsilon = 1e-12);
        assert_relative_eq!(0.75, m[(3, 1)], epsilon = 1e-12);
        assert_relative_eq!(-2.0, m[(4, 0)], epsilon = 1e-12);
        assert_relative_eq!(1.5, m[(4, 1)], epsilon = 1e-12);
    }

    #[test_case(0.0)]
    #[test_case(-0.3)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_matrix_domain(x: f64) {
        let result = system_matrix(x);
        assert!(matches!(result, Err(ParsecError::Domain { .. })));
    }

    #[test]
    fn test_evaluate_at_leading_edge() {
        let a = Vector6::new(0.1, -0.2, 0.3, -0.4, 0.5, -0.6);
        let z = evaluate(&a, &[0.0]).unwrap();
        assert_eq!(vec![0.0], z);
    }

    #[test]
    fn test_evaluate_at_trailing_edge_is_coefficient_sum() {
        let a = Vector6::new(0.1, -0.2, 0.3, -0.4, 0.5, -0.6);
        assert_relative_eq!(a.sum(), surface_z(&a, 1.0), epsilon = 1e-14);
    }

    #[test_case(-1e-9)]
    #[test_case(f64::NAN)]
    fn test_evaluate_domain(x: f64) {
        let a = Vector6::new(0.1, -0.2, 0.3, -0.4, 0.5, -0.6);
        let result = evaluate(&a, &[0.5, x]);
        assert!(matches!(result, Err(ParsecError::Domain { .. })));
    }

    #[test_case(0.1)]
    #[test_case(0.4)]
    #[test_case(0.9)]
    fn test_derivatives_match_finite_differences(x: f64) {
        let a = Vector6::new(0.13, -0.43, 2.19, -5.02, 4.74, -1.61);
        let h = 1e-5;
        let dz = (surface_z(&a, x + h) - surface_z(&a, x - h)) / (2.0 * h);
        let d2z = (surface_dz(&a, x + h) - surface_dz(&a, x - h)) / (2.0 * h);
        assert_relative_eq!(dz, surface_dz(&a, x), epsilon = 1e-6);
        assert_relative_eq!(d2z, surface_d2z(&a, x), epsilon = 1e-5);
    }
}
