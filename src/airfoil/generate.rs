use crate::airfoil::coefficients::SurfaceCoefficients;
use crate::airfoil::AirfoilCoordinates;
use crate::errors::Result;
use crate::geometry::basis::evaluate;
use crate::geometry::stations::station_curve;
use crate::parameters::{NormalizedGenome, ParameterMapper, ParsecParams};
use rayon::prelude::*;

/// Stations per side used when the caller has no preference
pub const DEFAULT_STATIONS: usize = 100;

/// A PARSEC airfoil generator. It owns the physical parameters of the current design and solves
/// a fresh set of surface coefficients every time coordinates are requested, so no state other
/// than the parameters carries over between evaluations.
#[derive(Debug, Clone)]
pub struct ParsecAirfoil {
    mapper: ParameterMapper,
    params: ParsecParams,
}

impl ParsecAirfoil {
    /// Create a new generator from a normalized genome, or from the RAE 2822 baseline if no
    /// genome is given.
    pub fn new(genome: Option<&NormalizedGenome>) -> ParsecAirfoil {
        ParsecAirfoil::with_mapper(ParameterMapper::default(), genome)
    }

    pub fn with_mapper(mapper: ParameterMapper, genome: Option<&NormalizedGenome>) -> ParsecAirfoil {
        let params = mapper.map(genome);
        ParsecAirfoil { mapper, params }
    }

    /// Create a generator directly from physical parameters, bypassing the mapping.
    pub fn from_params(params: ParsecParams) -> ParsecAirfoil {
        ParsecAirfoil {
            mapper: ParameterMapper::default(),
            params,
        }
    }

    pub fn params(&self) -> &ParsecParams {
        &self.params
    }

    pub fn coefficients(&self) -> Result<SurfaceCoefficients> {
        SurfaceCoefficients::solve(&self.params)
    }

    /// Replaces the current parameters with those mapped from `genome` (the baseline if `None`)
    /// and returns the coordinates of the new design.
    ///
    /// # Arguments
    ///
    /// * `genome` - the normalized design vector, or `None` for the baseline design
    ///
    /// * `n_pts` - stations per side. The reference table is used for 100, any other count of
    /// at least 2 is resampled with the same cosine spacing.
    pub fn express(
        &mut self,
        genome: Option<&NormalizedGenome>,
        n_pts: usize,
    ) -> Result<AirfoilCoordinates> {
        self.params = self.mapper.map(genome);
        self.coordinates(n_pts)
    }

    /// Evaluates the current parameters at `n_pts` stations per side.
    pub fn coordinates(&self, n_pts: usize) -> Result<AirfoilCoordinates> {
        let mut foil = station_curve(n_pts)?;
        let coeff = self.coefficients()?;

        let x: Vec<f64> = foil.row(0).iter().copied().collect();
        let z_up = evaluate(coeff.a_up(), &x[..n_pts])?;
        let z_lo = evaluate(coeff.a_lo(), &x[n_pts..])?;

        for (c, z) in z_up.into_iter().chain(z_lo).enumerate() {
            foil[(1, c)] = z;
        }

        Ok(AirfoilCoordinates::new(foil, n_pts))
    }
}

impl Default for ParsecAirfoil {
    fn default() -> Self {
        ParsecAirfoil::new(None)
    }
}

/// Stateless evaluation of a raw genome slice, which must hold exactly ten values if present.
pub fn express(genome: Option<&[f64]>, n_pts: usize) -> Result<AirfoilCoordinates> {
    let genome = genome.map(NormalizedGenome::from_slice).transpose()?;
    ParsecAirfoil::new(genome.as_ref()).coordinates(n_pts)
}

/// Evaluates every genome independently on the rayon thread pool. Results are returned in the
/// same order as the genomes, and a failed design does not affect the others.
pub fn express_batch(
    genomes: &[NormalizedGenome],
    n_pts: usize,
) -> Vec<Result<AirfoilCoordinates>> {
    genomes
        .par_iter()
        .map(|g| ParsecAirfoil::new(Some(g)).coordinates(n_pts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParsecError;
    use crate::parameters::GENOME_LEN;
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use test_case::test_case;

    #[test]
    fn test_default_layout() {
        let foil = express(None, DEFAULT_STATIONS).unwrap();
        let m = foil.matrix();
        assert_eq!(2, m.nrows());
        assert_eq!(200, m.ncols());
        assert_relative_eq!(1.0, m[(0, 0)], epsilon = 1e-3);
        assert_eq!(0.0, m[(0, 99)]);
        assert_relative_eq!(0.0, m[(0, 100)], epsilon = 1e-3);
        assert_eq!(1.0, m[(0, 199)]);
    }

    #[test]
    fn test_default_is_deterministic() {
        let a = express(None, DEFAULT_STATIONS).unwrap();
        let b = express(None, DEFAULT_STATIONS).unwrap();
        let mut airfoil = ParsecAirfoil::default();
        let c = airfoil.express(None, DEFAULT_STATIONS).unwrap();
        let d = airfoil.express(None, DEFAULT_STATIONS).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(c, d);
    }

    #[test]
    fn test_default_surface_shape() {
        let foil = express(None, DEFAULT_STATIONS).unwrap();
        let z = foil.z();
        let x = foil.x();

        // The nose sits on the origin
        assert_eq!(0.0, z[99]);

        // The upper surface is above the chord everywhere but the nose
        assert!(z[..99].iter().all(|v| *v > 0.0));

        // The lower surface is below the chord up to the aft loading region
        for (xi, zi) in x[100..].iter().zip(z[100..].iter()) {
            if *xi < 0.7 {
                assert!(*zi < 0.0, "x = {}, z = {}", xi, zi);
            }
        }

        // The upper crest is the highest point
        let z_max = z[..100].iter().copied().fold(f64::MIN, f64::max);
        let p = ParsecParams::default();
        assert!(z_max <= p.z_up + 1e-12);
        assert_relative_eq!(p.z_up, z_max, epsilon = 1e-4);
    }

    #[test]
    fn test_upper_surface_single_crest() {
        // Walking from the trailing edge to the nose the upper surface rises to the crest and
        // then falls, with no additional turning points
        let foil = express(None, DEFAULT_STATIONS).unwrap();
        let z = foil.z();
        let turns = z[..100]
            .iter()
            .tuple_windows()
            .map(|(a, b)| b > a)
            .dedup()
            .count();
        assert_eq!(2, turns);
    }

    #[test]
    fn test_trailing_edge_thickness() {
        let foil = express(None, DEFAULT_STATIONS).unwrap();
        let p = ParsecParams::default();
        assert_relative_eq!(p.z_te - p.dz_te / 2.0, foil.z()[199], epsilon = 1e-12);
    }

    #[test]
    fn test_genome_changes_shape() {
        let base = express(None, DEFAULT_STATIONS).unwrap();
        let mut values = *NormalizedGenome::baseline().values();
        values[2] = 0.9;
        let thick = express(Some(&values[..]), DEFAULT_STATIONS).unwrap();

        assert_eq!(base.x(), thick.x());
        assert!(thick.z()[50] > base.z()[50]);
        assert_eq!(base.z()[150], thick.z()[150]);
    }

    #[test]
    fn test_reevaluation_replaces_params() {
        let mut airfoil = ParsecAirfoil::default();
        let genome = NormalizedGenome::new([0.5; GENOME_LEN]);
        airfoil.express(Some(&genome), DEFAULT_STATIONS).unwrap();
        assert_eq!(ParameterMapper::default().map(Some(&genome)), *airfoil.params());

        airfoil.express(None, DEFAULT_STATIONS).unwrap();
        assert_eq!(ParsecParams::default(), *airfoil.params());
    }

    #[test]
    fn test_symmetric_airfoil() {
        let params = ParsecParams {
            r_le_up: 0.0155,
            x_up: 0.3,
            z_up: 0.06,
            z_xx_up: -0.45,
            r_le_lo: 0.0155,
            x_lo: 0.3,
            z_lo: -0.06,
            z_xx_lo: 0.45,
            z_te: 0.0,
            dz_te: 0.0025,
            alpha_te: 0.0,
            beta_te: 0.0,
        };
        let foil = ParsecAirfoil::from_params(params)
            .coordinates(DEFAULT_STATIONS)
            .unwrap();
        let x = foil.x();
        let z = foil.z();
        for i in 0..99 {
            assert_eq!(x[i], x[198 - i]);
            assert_eq!(z[i], -z[198 - i]);
        }
    }

    #[test_case(2)]
    #[test_case(40)]
    #[test_case(301)]
    fn test_resampled_station_count(n: usize) {
        let foil = express(None, n).unwrap();
        assert_eq!(2 * n, foil.matrix().ncols());
        assert_eq!(n, foil.upper().len());
        assert_eq!(n, foil.lower().len());

        let c = ParsecAirfoil::default().coefficients().unwrap();
        for p in foil.upper() {
            assert_eq!(c.z_up(p.x), p.y);
        }
        for p in foil.lower() {
            assert_eq!(c.z_lo(p.x), p.y);
        }
    }

    #[test]
    fn test_station_count_rejected() {
        let result = express(None, 1);
        assert!(matches!(result, Err(ParsecError::StationCount(1))));
    }

    #[test]
    fn test_short_genome() {
        let result = express(Some(&[0.5; 9][..]), DEFAULT_STATIONS);
        assert!(matches!(
            result,
            Err(ParsecError::Shape {
                expected: 10,
                actual: 9
            })
        ));
    }

    #[test]
    fn test_degenerate_genome() {
        // A normalized crest location far outside the envelope puts the crest ahead of the nose
        let mut values = *NormalizedGenome::baseline().values();
        values[1] = -1.0;
        let result = express(Some(&values[..]), DEFAULT_STATIONS);
        assert!(matches!(result, Err(ParsecError::Domain { .. })));
    }

    #[test]
    fn test_non_finite_genome() {
        let mut values = *NormalizedGenome::baseline().values();
        values[2] = f64::NAN;
        let result = express(Some(&values[..]), DEFAULT_STATIONS);
        assert!(matches!(result, Err(ParsecError::Domain { .. })));

        let mut values = *NormalizedGenome::baseline().values();
        values[1] = 3e60;
        let result = express(Some(&values[..]), DEFAULT_STATIONS);
        assert!(matches!(result, Err(ParsecError::SingularSystem { .. })));
    }

    #[test]
    fn test_batch_matches_serial() {
        let genomes = vec![
            NormalizedGenome::baseline(),
            NormalizedGenome::new([0.25; GENOME_LEN]),
            NormalizedGenome::new([0.75; GENOME_LEN]),
        ];
        let batch = express_batch(&genomes, DEFAULT_STATIONS);
        assert_eq!(3, batch.len());
        for (g, r) in genomes.iter().zip(batch.iter()) {
            let serial = express(Some(&g.values()[..]), DEFAULT_STATIONS).unwrap();
            assert_eq!(&serial, r.as_ref().unwrap());
        }
    }

    #[test]
    fn test_batch_isolates_failures() {
        let mut bad = *NormalizedGenome::baseline().values();
        bad[5] = -2.0;
        let genomes = vec![NormalizedGenome::baseline(), NormalizedGenome::new(bad)];
        let batch = express_batch(&genomes, DEFAULT_STATIONS);
        assert!(batch[0].is_ok());
        assert!(matches!(batch[1], Err(ParsecError::Domain { .. })));
    }
}
