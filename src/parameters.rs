//! Normalized genomes and their mapping onto the 12 physical PARSEC parameters.

use crate::errors::{ParsecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Number of values an optimizer supplies.
pub const GENOME_LEN: usize = 10;

/// Number of PARSEC parameter slots.
pub const SLOT_COUNT: usize = 12;

/// The slots filled from a genome, in genome order. Slots 8 and 9 (trailing edge Z and
/// thickness) always keep their baseline value.
pub const FREE_SLOTS: [usize; GENOME_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 10, 11];

/// Normalized RAE 2822 design, used whenever no genome is given.
pub const BASELINE: [f64; SLOT_COUNT] = [
    0.1155, 0.7695, 0.1391, 0.2788, 0.1244, 0.1516, 0.7519, 0.3076, 0.5116, 0.0, 0.2629, 0.7630,
];

const BOUNDS_MIN: [f64; SLOT_COUNT] = [
    0.0037, 0.1500, 0.0440, -1.0000, 0.0037, 0.3000, -0.1200, -1.5000, -0.0100, 0.0020, -10.0000,
    -10.0000,
];

const BOUNDS_MAX: [f64; SLOT_COUNT] = [
    0.0500, 0.5175, 0.1588, 0.3000, 0.0500, 0.6000, -0.0400, -0.3000, 0.0100, 0.0026, 10.0000,
    20.0000,
];

/// A vector of exactly ten normalized values, each nominally between 0.0 and 1.0. Values
/// outside that range are accepted and simply map outside of the parameter envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct NormalizedGenome {
    values: [f64; GENOME_LEN],
}

impl NormalizedGenome {
    pub fn new(values: [f64; GENOME_LEN]) -> NormalizedGenome {
        NormalizedGenome { values }
    }

    pub fn from_slice(values: &[f64]) -> Result<NormalizedGenome> {
        let values: [f64; GENOME_LEN] = values.try_into().map_err(|_| ParsecError::Shape {
            expected: GENOME_LEN,
            actual: values.len(),
        })?;
        Ok(NormalizedGenome { values })
    }

    /// The genome which reproduces the baseline design.
    pub fn baseline() -> NormalizedGenome {
        let mut values = [0.0; GENOME_LEN];
        for (v, &slot) in values.iter_mut().zip(FREE_SLOTS.iter()) {
            *v = BASELINE[slot];
        }
        NormalizedGenome { values }
    }

    pub fn values(&self) -> &[f64; GENOME_LEN] {
        &self.values
    }

    /// Place the genome into the free slots of the baseline vector
    fn to_slots(&self) -> [f64; SLOT_COUNT] {
        let mut slots = BASELINE;
        for (&slot, &v) in FREE_SLOTS.iter().zip(self.values.iter()) {
            slots[slot] = v;
        }
        slots
    }
}

impl TryFrom<Vec<f64>> for NormalizedGenome {
    type Error = ParsecError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        NormalizedGenome::from_slice(&value)
    }
}

impl From<NormalizedGenome> for Vec<f64> {
    fn from(genome: NormalizedGenome) -> Self {
        genome.values.to_vec()
    }
}

/// The (min, max) envelope of every PARSEC slot in engineering units. The two angular slots are
/// in degrees here, the conversion to radians happens after scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    pub min: [f64; SLOT_COUNT],
    pub max: [f64; SLOT_COUNT],
}

impl Default for ParameterBounds {
    fn default() -> Self {
        ParameterBounds {
            min: BOUNDS_MIN,
            max: BOUNDS_MAX,
        }
    }
}

impl ParameterBounds {
    pub fn from_json(text: &str) -> Result<ParameterBounds> {
        Ok(serde_json::from_str(text)?)
    }

    /// Affine map of a single normalized slot value onto its range
    pub fn scale(&self, slot: usize, normalized: f64) -> f64 {
        normalized * (self.max[slot] - self.min[slot]) + self.min[slot]
    }

    pub fn contains(&self, slot: usize, value: f64) -> bool {
        let lo = self.min[slot].min(self.max[slot]);
        let hi = self.min[slot].max(self.max[slot]);
        (lo..=hi).contains(&value)
    }
}

/// The twelve physical PARSEC parameters. Angles are in radians and `z_xx_lo` already carries
/// the sign flip expected by the lower surface system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsecParams {
    /// Upper leading edge radius
    pub r_le_up: f64,
    /// Upper crest location X coordinate
    pub x_up: f64,
    /// Upper crest location Z coordinate
    pub z_up: f64,
    /// Upper crest location curvature
    pub z_xx_up: f64,
    /// Lower leading edge radius
    pub r_le_lo: f64,
    /// Lower crest location X coordinate
    pub x_lo: f64,
    /// Lower crest location Z coordinate
    pub z_lo: f64,
    /// Lower crest location curvature
    pub z_xx_lo: f64,
    /// Trailing edge Z coordinate
    pub z_te: f64,
    /// Trailing edge thickness
    pub dz_te: f64,
    /// Trailing edge direction angle
    pub alpha_te: f64,
    /// Trailing edge wedge angle
    pub beta_te: f64,
}

impl ParsecParams {
    /// Build the parameters from scaled slot values, applying the curvature sign and the degree
    /// to radian conventions.
    pub fn from_slots(p: &[f64; SLOT_COUNT]) -> ParsecParams {
        ParsecParams {
            r_le_up: p[0],
            x_up: p[1],
            z_up: p[2],
            z_xx_up: p[3],
            r_le_lo: p[4],
            x_lo: p[5],
            z_lo: p[6],
            z_xx_lo: -p[7],
            z_te: p[8],
            dz_te: p[9],
            alpha_te: p[10].to_radians(),
            beta_te: p[11].to_radians(),
        }
    }
}

impl Default for ParsecParams {
    /// The RAE 2822 baseline
    fn default() -> Self {
        ParameterMapper::default().map(None)
    }
}

impl Display for ParsecParams {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "PARSEC airfoil parameters:")?;
        writeln!(f, "  Upper leading edge radius      [r_le_up]:  {}", self.r_le_up)?;
        writeln!(f, "  Upper crest X coordinate       [x_up]:     {}", self.x_up)?;
        writeln!(f, "  Upper crest Z coordinate       [z_up]:     {}", self.z_up)?;
        writeln!(f, "  Upper crest curvature          [z_xx_up]:  {}", self.z_xx_up)?;
        writeln!(f, "  Lower leading edge radius      [r_le_lo]:  {}", self.r_le_lo)?;
        writeln!(f, "  Lower crest X coordinate       [x_lo]:     {}", self.x_lo)?;
        writeln!(f, "  Lower crest Z coordinate       [z_lo]:     {}", self.z_lo)?;
        writeln!(f, "  Lower crest curvature          [z_xx_lo]:  {}", self.z_xx_lo)?;
        writeln!(f, "  Trailing edge Z coordinate     [z_te]:     {}", self.z_te)?;
        writeln!(f, "  Trailing edge thickness        [dz_te]:    {}", self.dz_te)?;
        writeln!(f, "  Trailing edge direction angle  [alpha_te]: {}", self.alpha_te)?;
        write!(f, "  Trailing edge wedge angle      [beta_te]:  {}", self.beta_te)
    }
}

/// Maps normalized genomes onto physical parameters using a fixed bounds table.
#[derive(Debug, Clone, Default)]
pub struct ParameterMapper {
    bounds: ParameterBounds,
}

impl ParameterMapper {
    pub fn with_bounds(bounds: ParameterBounds) -> ParameterMapper {
        ParameterMapper { bounds }
    }

    pub fn bounds(&self) -> &ParameterBounds {
        &self.bounds
    }

    /// Returns the twelve scaled slot values in engineering units, before the curvature sign
    /// flip and the radian conversion. Without a genome the baseline design is scaled.
    pub fn scale(&self, genome: Option<&NormalizedGenome>) -> [f64; SLOT_COUNT] {
        let slots = match genome {
            Some(g) => {
                if g.values.iter().any(|v| !(0.0..=1.0).contains(v)) {
                    log::warn!("genome {:?} lies outside the unit envelope", g.values);
                }
                g.to_slots()
            }
            None => BASELINE,
        };

        let mut scaled = [0.0; SLOT_COUNT];
        for (i, v) in scaled.iter_mut().enumerate() {
            *v = self.bounds.scale(i, slots[i]);
        }
        scaled
    }

    pub fn map(&self, genome: Option<&NormalizedGenome>) -> ParsecParams {
        ParsecParams::from_slots(&self.scale(genome))
    }
}
