use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct PointRecord(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a list of points as `[{"x": .., "y": ..}, ...]`
pub fn points<S: Serializer>(v: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(v.iter().map(|p| PointRecord(*p)))
}
