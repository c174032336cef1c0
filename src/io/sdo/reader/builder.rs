use crate::error::{FormatError, Result, SdoError};
use crate::io::sdo::reader::Shape;
use crate::io::sdo::{RingRole, SdoGeometryKind};
use crate::scalar::*;

/// A top-level component of the output geometry, after rings have been grouped into polygons.
#[derive(Debug, Clone, PartialEq)]
enum Part {
    Point(Coord),
    Cluster(Vec<Coord>),
    Line(Curve),
    Polygon(Polygon),
}

impl Part {
    fn describe(&self) -> &'static str {
        match self {
            Part::Point(_) => "point",
            Part::Cluster(_) => "point cluster",
            Part::Line(_) => "line",
            Part::Polygon(_) => "polygon",
        }
    }

    fn into_geometry(self) -> Geometry {
        match self {
            Part::Point(coord) => Geometry::Point(Point::new(coord)),
            Part::Cluster(coords) => Geometry::MultiPoint(points(coords)),
            Part::Line(curve) => curve.into(),
            Part::Polygon(polygon) => Geometry::Polygon(polygon),
        }
    }
}

fn points(coords: Vec<Coord>) -> MultiPoint {
    MultiPoint::new(coords.into_iter().map(Point::new).collect())
}

/// Group rings into polygons: an exterior ring starts a polygon and the interior rings that
/// follow it become its holes.
fn group_rings(kind: SdoGeometryKind, shapes: Vec<Shape>) -> Result<Vec<Part>> {
    let mut parts = Vec::with_capacity(shapes.len());
    let mut polygon: Option<(Curve, Vec<Curve>)> = None;

    let flush = |polygon: &mut Option<(Curve, Vec<Curve>)>, parts: &mut Vec<Part>| {
        if let Some((exterior, interiors)) = polygon.take() {
            parts.push(Part::Polygon(Polygon::new(exterior, interiors)));
        }
    };

    for shape in shapes {
        match shape {
            Shape::Ring {
                role: RingRole::Exterior,
                ring,
                ..
            } => {
                flush(&mut polygon, &mut parts);
                polygon = Some((ring, vec![]));
            }
            Shape::Ring {
                role: RingRole::Interior,
                ring,
                index,
            } => match polygon.as_mut() {
                Some((_, interiors)) => interiors.push(ring),
                None => {
                    return Err(mismatch(
                        kind,
                        format!("interior ring at element {index} has no exterior ring"),
                    ))
                }
            },
            Shape::Point(coord) => {
                flush(&mut polygon, &mut parts);
                parts.push(Part::Point(coord));
            }
            Shape::Cluster(coords) => {
                flush(&mut polygon, &mut parts);
                parts.push(Part::Cluster(coords));
            }
            Shape::Line(curve) => {
                flush(&mut polygon, &mut parts);
                parts.push(Part::Line(curve));
            }
        }
    }
    flush(&mut polygon, &mut parts);
    Ok(parts)
}

fn mismatch(kind: SdoGeometryKind, reason: String) -> SdoError {
    FormatError::ShapeCountMismatch { kind, reason }.into()
}

fn single(kind: SdoGeometryKind, mut parts: Vec<Part>) -> Result<Part> {
    if parts.len() != 1 {
        return Err(mismatch(
            kind,
            format!("expected exactly one part, found {}", parts.len()),
        ));
    }
    Ok(parts.remove(0))
}

fn wrong_part(kind: SdoGeometryKind, part: &Part) -> SdoError {
    mismatch(kind, format!("unexpected {}", part.describe()))
}

/// The empty geometry of a kind, for an `SDO_GEOMETRY` without elements.
pub(crate) fn empty_geometry(kind: SdoGeometryKind) -> Geometry {
    match kind {
        SdoGeometryKind::Point => Geometry::Point(Point::empty()),
        SdoGeometryKind::Line => Geometry::LineString(LineString::default()),
        SdoGeometryKind::Polygon => Geometry::Polygon(Polygon::empty()),
        SdoGeometryKind::Collection => Geometry::GeometryCollection(GeometryCollection::default()),
        SdoGeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::default()),
        SdoGeometryKind::MultiLine => Geometry::MultiLineString(MultiLineString::default()),
        SdoGeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::default()),
    }
}

/// Build the geometry of the declared kind from the assembled shapes.
pub(crate) fn build_geometry(kind: SdoGeometryKind, shapes: Vec<Shape>) -> Result<Geometry> {
    let parts = group_rings(kind, shapes)?;

    match kind {
        SdoGeometryKind::Point => match single(kind, parts)? {
            Part::Point(coord) => Ok(Geometry::Point(Point::new(coord))),
            Part::Cluster(coords) if coords.len() == 1 => {
                Ok(Geometry::Point(Point::new(coords[0])))
            }
            other => Err(wrong_part(kind, &other)),
        },
        SdoGeometryKind::Line => match single(kind, parts)? {
            Part::Line(curve) => Ok(curve.into()),
            other => Err(wrong_part(kind, &other)),
        },
        SdoGeometryKind::Polygon => match single(kind, parts)? {
            Part::Polygon(polygon) => Ok(Geometry::Polygon(polygon)),
            other => Err(wrong_part(kind, &other)),
        },
        SdoGeometryKind::MultiPoint => {
            let mut coords = vec![];
            for part in parts {
                match part {
                    Part::Point(coord) => coords.push(coord),
                    Part::Cluster(cluster) => coords.extend(cluster),
                    other => return Err(wrong_part(kind, &other)),
                }
            }
            Ok(Geometry::MultiPoint(points(coords)))
        }
        SdoGeometryKind::MultiLine => {
            let curves = parts
                .into_iter()
                .map(|part| match part {
                    Part::Line(curve) => Ok(curve),
                    other => Err(wrong_part(kind, &other)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(curves_to_multi_geometry(curves))
        }
        SdoGeometryKind::MultiPolygon => {
            let polygons = parts
                .into_iter()
                .map(|part| match part {
                    Part::Polygon(polygon) => Ok(polygon),
                    other => Err(wrong_part(kind, &other)),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Geometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        SdoGeometryKind::Collection => Ok(Geometry::GeometryCollection(GeometryCollection::new(
            parts.into_iter().map(Part::into_geometry).collect(),
        ))),
    }
}
