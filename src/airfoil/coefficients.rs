use super::Surface;
use crate::errors::{ParsecError, Result};
use crate::geometry::basis::{surface_d2z, surface_dz, surface_z, system_matrix};
use crate::parameters::ParsecParams;
use ncollide2d::na::{Matrix6, Vector6};

/// Systems with a 2-norm condition number above this are rejected as singular
pub const MAX_CONDITION: f64 = 1e12;

/// The solved polynomial coefficients of both surfaces of a PARSEC airfoil. A value is only
/// ever produced whole from one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCoefficients {
    a_up: Vector6<f64>,
    a_lo: Vector6<f64>,
}

impl SurfaceCoefficients {
    pub fn solve(params: &ParsecParams) -> Result<SurfaceCoefficients> {
        let a_up = upper_coefficients(params)?;
        let a_lo = lower_coefficients(params)?;
        log::debug!("a_up = {:?}, a_lo = {:?}", a_up.as_slice(), a_lo.as_slice());
        Ok(SurfaceCoefficients { a_up, a_lo })
    }

    /// Coefficient vector for the upper surface
    pub fn a_up(&self) -> &Vector6<f64> {
        &self.a_up
    }

    /// Coefficient vector for the lower surface
    pub fn a_lo(&self) -> &Vector6<f64> {
        &self.a_lo
    }

    pub fn surface(&self, surface: Surface) -> &Vector6<f64> {
        match surface {
            Surface::Upper => &self.a_up,
            Surface::Lower => &self.a_lo,
        }
    }

    pub fn z_up(&self, x: f64) -> f64 {
        surface_z(&self.a_up, x)
    }

    pub fn z_lo(&self, x: f64) -> f64 {
        surface_z(&self.a_lo, x)
    }

    pub fn dz(&self, surface: Surface, x: f64) -> f64 {
        surface_dz(self.surface(surface), x)
    }

    pub fn d2z(&self, surface: Surface, x: f64) -> f64 {
        surface_d2z(self.surface(surface), x)
    }
}

fn upper_coefficients(p: &ParsecParams) -> Result<Vector6<f64>> {
    let b = Vector6::new(
        p.z_te + p.dz_te / 2.0,
        p.z_up,
        (p.alpha_te - p.beta_te / 2.0).tan(),
        0.0,
        p.z_xx_up,
        le_term(p.r_le_up)?,
    );
    check_targets(Surface::Upper, &b)?;
    solve_system(Surface::Upper, p.x_up, &b)
}

/// The lower system is solved with negated trailing edge, crest and curvature targets and the
/// whole solution is negated afterwards. The wedge angle term is not negated.
fn lower_coefficients(p: &ParsecParams) -> Result<Vector6<f64>> {
    let b = Vector6::new(
        -p.z_te + p.dz_te / 2.0,
        -p.z_lo,
        (p.alpha_te + p.beta_te / 2.0).tan(),
        0.0,
        -p.z_xx_lo,
        le_term(p.r_le_lo)?,
    );
    check_targets(Surface::Lower, &b)?;
    Ok(-solve_system(Surface::Lower, p.x_lo, &b)?)
}

fn le_term(r_le: f64) -> Result<f64> {
    if r_le >= 0.0 {
        Ok((2.0 * r_le).sqrt())
    } else {
        Err(ParsecError::Domain {
            quantity: "leading edge radius",
            value: r_le,
        })
    }
}

fn check_targets(surface: Surface, b: &Vector6<f64>) -> Result<()> {
    match b.iter().find(|v| !v.is_finite()) {
        None => Ok(()),
        Some(&value) => Err(ParsecError::Domain {
            quantity: match surface {
                Surface::Upper => "upper surface target",
                Surface::Lower => "lower surface target",
            },
            value,
        }),
    }
}

fn condition_number(m: &Matrix6<f64>) -> f64 {
    let (lo, hi) = m
        .singular_values()
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), s| (lo.min(*s), hi.max(*s)));
    hi / lo
}

fn solve_system(surface: Surface, x: f64, b: &Vector6<f64>) -> Result<Vector6<f64>> {
    let m = system_matrix(x)?;

    // The last row is [1, 0, 0, 0, 0, 0], so the smallest singular value is at most 1 and the
    // largest entry is a lower bound on the condition number. Overflowed entries stall the SVD.
    let largest = m.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if !largest.is_finite() || largest > MAX_CONDITION {
        return Err(ParsecError::SingularSystem {
            surface,
            condition: largest,
        });
    }

    let condition = condition_number(&m);
    log::debug!("{} surface: crest x = {}, condition = {:e}", surface, x, condition);

    let singular = ParsecError::SingularSystem { surface, condition };
    if !condition.is_finite() || condition > MAX_CONDITION {
        return Err(singular);
    }

    m.lu().solve(b).ok_or(singular)
}
