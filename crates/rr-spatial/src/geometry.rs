//! Representative points for feature geometries.
//!
//! | Geometry       | Point used                                             |
//! |----------------|--------------------------------------------------------|
//! | `Point`        | the point                                              |
//! | `LineString`   | length-weighted centroid                               |
//! | `Polygon`      | area centroid, holes subtracted                        |
//! | `MultiPolygon` | area-weighted centroid of the members                  |
//!
//! Zero-area polygons and zero-length lines fall back to the centroid of
//! their lower-dimensional shape, which is what `geo::Centroid` does.  A
//! geometry with any non-finite vertex, or whose centroid overflows, is
//! [`GeometryDefect::NonFinite`].

use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};

use rr_core::{Coordinate, FeatureGeometry};

use crate::GeometryDefect;

/// The point a feature is resolved from.
pub fn representative_point(geometry: &FeatureGeometry) -> Result<Coordinate, GeometryDefect> {
    let centroid = match geometry {
        FeatureGeometry::Point(p) => {
            finite(p)?;
            return Ok(Coordinate::from(*p));
        }
        FeatureGeometry::LineString(coords) => {
            if coords.is_empty() {
                return Err(GeometryDefect::Empty);
            }
            coords.iter().try_for_each(finite)?;
            line(coords).centroid()
        }
        FeatureGeometry::Polygon(rings) => polygon(rings)?.centroid(),
        FeatureGeometry::MultiPolygon(members) => {
            let polygons = members
                .iter()
                .map(|rings| polygon(rings))
                .collect::<Result<Vec<_>, _>>()?;
            if polygons.is_empty() {
                return Err(GeometryDefect::Empty);
            }
            MultiPolygon::new(polygons).centroid()
        }
    };

    let point = centroid
        .map(|p| Coordinate::new(p.x(), p.y()))
        .ok_or(GeometryDefect::NoCentroid)?;
    if !point.is_finite() {
        return Err(GeometryDefect::NonFinite);
    }
    Ok(point)
}

fn finite(&[x, y]: &[f64; 2]) -> Result<(), GeometryDefect> {
    if x.is_finite() && y.is_finite() { Ok(()) } else { Err(GeometryDefect::NonFinite) }
}

fn line(coords: &[[f64; 2]]) -> LineString<f64> {
    coords.iter().map(|&[x, y]| Coord { x, y }).collect()
}

/// First ring is the exterior, the rest are holes.  `Polygon::new` closes
/// open rings.
fn polygon(rings: &[Vec<[f64; 2]>]) -> Result<Polygon<f64>, GeometryDefect> {
    let (exterior, holes) = rings.split_first().ok_or(GeometryDefect::Empty)?;
    if exterior.is_empty() {
        return Err(GeometryDefect::Empty);
    }
    rings.iter().flatten().try_for_each(finite)?;
    Ok(Polygon::new(
        line(exterior),
        holes.iter().filter(|h| !h.is_empty()).map(|h| line(h)).collect(),
    ))
}
