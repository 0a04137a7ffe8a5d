//! PARSEC airfoil generation: maps a normalized design vector onto the twelve PARSEC shape
//! parameters, solves the polynomial coefficients of both surfaces and evaluates them at
//! chordwise stations.

pub mod airfoil;
pub mod errors;
pub mod geometry;
pub mod parameters;
pub mod serialize;

pub use airfoil::coefficients::SurfaceCoefficients;
pub use airfoil::generate::{express, express_batch, ParsecAirfoil, DEFAULT_STATIONS};
pub use airfoil::{AirfoilCoordinates, AirfoilSection, Surface};
pub use errors::{ParsecError, Result};
pub use parameters::{NormalizedGenome, ParameterBounds, ParameterMapper, ParsecParams};
