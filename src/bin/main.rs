use ncollide2d::na::Point2;
use parsec_airfoil::{
    NormalizedGenome, ParameterBounds, ParameterMapper, ParsecAirfoil, DEFAULT_STATIONS,
};
use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::Write;

#[derive(Deserialize, Default)]
#[serde(default)]
struct RunConfig {
    genome: Option<NormalizedGenome>,
    n_pts: Option<usize>,
    bounds: Option<ParameterBounds>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config: RunConfig = match std::env::args().nth(1) {
        Some(path) => serde_json::from_reader(File::open(path)?)?,
        None => RunConfig::default(),
    };

    let mapper = ParameterMapper::with_bounds(config.bounds.unwrap_or_default());
    let airfoil = ParsecAirfoil::with_mapper(mapper, config.genome.as_ref());
    log::info!("{}", airfoil.params());

    let foil = airfoil.coordinates(config.n_pts.unwrap_or(DEFAULT_STATIONS))?;
    write_points(&foil.upper(), "side0.txt")?;
    write_points(&foil.lower(), "side1.txt")?;
    println!("{}", foil.to_section().to_json()?);

    Ok(())
}

fn write_points(v: &[Point2<f64>], file_name: &str) -> std::io::Result<()> {
    let mut file = File::create(file_name)?;
    for p in v.iter() {
        writeln!(file, "{}, {}", &p.x, &p.y)?;
    }

    Ok(())
}
