//! Chordwise sampling stations. The reference table holds 100 cosine spaced stations per side
//! of a NACA 0012 section; only its X row is used, the Z row is replaced on every evaluation.

use crate::errors::{ParsecError, Result};
use ncollide2d::na::Matrix2xX;
use std::f64::consts::PI;

/// Stations per side in the reference table
pub const REFERENCE_STATIONS: usize = 100;

/// X row of the reference table: upper side from the trailing edge to the leading edge, then
/// lower side back to the trailing edge.
const REFERENCE_X: [f64; 2 * REFERENCE_STATIONS] = [
    0.99975, 0.99901, 0.99778, 0.99606, 0.99384, 0.99114, 0.98796, 0.98429, 0.98015, 0.97553,
    0.97044, 0.96489, 0.95888, 0.95241, 0.9455, 0.93815, 0.93037, 0.92216, 0.91354, 0.90451,
    0.89508, 0.88526, 0.87506, 0.86448, 0.85355, 0.84227, 0.83066, 0.81871, 0.80645, 0.79389,
    0.78104, 0.76791, 0.75452, 0.74088, 0.72699, 0.71289, 0.69857, 0.68406, 0.66937, 0.65451,
    0.6395, 0.62435, 0.60907, 0.59369, 0.57822, 0.56267, 0.54705, 0.53139, 0.5157, 0.5, 0.48429,
    0.4686, 0.45295, 0.43733, 0.42178, 0.40631, 0.39093, 0.37566, 0.3605, 0.34549, 0.33063,
    0.31594, 0.30143, 0.28711, 0.273, 0.25912, 0.24548, 0.23209, 0.21896, 0.20611, 0.19355,
    0.18129, 0.16934, 0.15773, 0.14645, 0.13552, 0.12494, 0.11474, 0.10492, 0.095492, 0.08646,
    0.077836, 0.069629, 0.061847, 0.054497, 0.047586, 0.041123, 0.035112, 0.02956, 0.024472,
    0.019853, 0.015708, 0.012042, 0.008856, 0.006156, 0.003943, 0.002219, 0.000987, 0.000247, 0.0,
    0.000247, 0.000987, 0.002219, 0.003943, 0.006156, 0.008856, 0.012042, 0.015708, 0.019853,
    0.024472, 0.02956, 0.035112, 0.041123, 0.047586, 0.054497, 0.061847, 0.069629, 0.077836,
    0.08646, 0.095492, 0.10492, 0.11474, 0.12494, 0.13552, 0.14645, 0.15773, 0.16934, 0.18129,
    0.19355, 0.20611, 0.21896, 0.23209, 0.24548, 0.25912, 0.273, 0.28711, 0.30143, 0.31594,
    0.33063, 0.34549, 0.3605, 0.37566, 0.39093, 0.40631, 0.42178, 0.43733, 0.45295, 0.4686,
    0.48429, 0.5, 0.5157, 0.53139, 0.54705, 0.56267, 0.57822, 0.59369, 0.60907, 0.62435, 0.6395,
    0.65451, 0.66937, 0.68406, 0.69857, 0.71289, 0.72699, 0.74088, 0.75452, 0.76791, 0.78104,
    0.79389, 0.80645, 0.81871, 0.83066, 0.84227, 0.85355, 0.86448, 0.87506, 0.88526, 0.89508,
    0.90451, 0.91354, 0.92216, 0.93037, 0.93815, 0.9455, 0.95241, 0.95888, 0.96489, 0.97044,
    0.97553, 0.98015, 0.98429, 0.98796, 0.99114, 0.99384, 0.99606, 0.99778, 0.99901, 0.99975, 1.0,
];

/// Z row of the reference table (NACA 0012)
const REFERENCE_Z: [f64; 2 * REFERENCE_STATIONS] = [
    3.6e-05, 0.000143, 0.000322, 0.000572, 0.000891, 0.00128, 0.001737, 0.00226, 0.002849,
    0.003501, 0.004216, 0.00499, 0.005822, 0.00671, 0.007651, 0.008643, 0.009684, 0.01077, 0.0119,
    0.013071, 0.01428, 0.015523, 0.0168, 0.018106, 0.019438, 0.020795, 0.022173, 0.023569,
    0.024981, 0.026405, 0.027838, 0.029279, 0.030723, 0.032168, 0.03361, 0.035048, 0.036478,
    0.037896, 0.0393, 0.040686, 0.042052, 0.043394, 0.044708, 0.045992, 0.047242, 0.048455,
    0.049626, 0.050754, 0.051833, 0.052862, 0.053835, 0.054749, 0.055602, 0.05639, 0.057108,
    0.057755, 0.058326, 0.058819, 0.05923, 0.059557, 0.059797, 0.059947, 0.060006, 0.059971,
    0.059841, 0.059614, 0.059288, 0.058863, 0.058338, 0.057712, 0.056986, 0.056159, 0.055232,
    0.054206, 0.053083, 0.051862, 0.050546, 0.049138, 0.047638, 0.046049, 0.044374, 0.042615,
    0.040776, 0.038859, 0.036867, 0.034803, 0.032671, 0.030473, 0.028213, 0.025893, 0.023517,
    0.021088, 0.018607, 0.016078, 0.013503, 0.010884, 0.008223, 0.005521, 0.002779, 0.0, -0.002779,
    -0.005521, -0.008223, -0.010884, -0.013503, -0.016078, -0.018607, -0.021088, -0.023517,
    -0.025893, -0.028213, -0.030473, -0.032671, -0.034803, -0.036867, -0.038859, -0.040776,
    -0.042615, -0.044374, -0.046049, -0.047638, -0.049138, -0.050546, -0.051862, -0.053083,
    -0.054206, -0.055232, -0.056159, -0.056986, -0.057712, -0.058338, -0.058863, -0.059288,
    -0.059614, -0.059841, -0.059971, -0.060006, -0.059947, -0.059797, -0.059557, -0.05923,
    -0.058819, -0.058326, -0.057755, -0.057108, -0.05639, -0.055602, -0.054749, -0.053835,
    -0.052862, -0.051833, -0.050754, -0.049626, -0.048455, -0.047242, -0.045992, -0.044708,
    -0.043394, -0.042052, -0.040686, -0.0393, -0.037896, -0.036478, -0.035048, -0.03361, -0.032168,
    -0.030723, -0.029279, -0.027838, -0.026405, -0.024981, -0.023569, -0.022173, -0.020795,
    -0.019438, -0.018106, -0.0168, -0.015523, -0.01428, -0.013071, -0.0119, -0.01077, -0.009684,
    -0.008643, -0.007651, -0.00671, -0.005822, -0.00499, -0.004216, -0.003501, -0.002849, -0.00226,
    -0.001737, -0.00128, -0.000891, -0.000572, -0.000322, -0.000143, -3.6e-05, 0.0,
];

/// The [2 x 200] reference curve
pub fn reference_curve() -> Matrix2xX<f64> {
    Matrix2xX::from_fn(2 * REFERENCE_STATIONS, |r, c| {
        if r == 0 {
            REFERENCE_X[c]
        } else {
            REFERENCE_Z[c]
        }
    })
}

/// Cosine spaced stations, `n` per side, following the same rule as the reference table. The
/// upper side runs from one step off the trailing edge down to X = 0, the lower side from one
/// step off the leading edge up to X = 1.
pub fn cosine_stations(n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(ParsecError::StationCount(n));
    }

    let step = PI / n as f64;
    let upper = (1..=n).map(|i| 0.5 * (1.0 + (step * i as f64).cos()));
    let lower = (1..=n).map(|i| 0.5 * (1.0 - (step * i as f64).cos()));
    Ok(upper.chain(lower).collect())
}

/// The [2 x 2n] station matrix used to evaluate an airfoil. For `n` equal to the reference
/// count the reference curve is returned as is, otherwise the X row is resampled and the Z row
/// is left at zero.
pub fn station_curve(n: usize) -> Result<Matrix2xX<f64>> {
    if n == REFERENCE_STATIONS {
        return Ok(reference_curve());
    }

    log::trace!("resampling {} stations per side", n);
    let x = cosine_stations(n)?;
    Ok(Matrix2xX::from_fn(2 * n, |r, c| if r == 0 { x[c] } else { 0.0 }))
}
