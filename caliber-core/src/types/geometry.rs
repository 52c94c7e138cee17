use crate::{Error, Result, Value, configuration_error, separated_by, validation_error, write_number};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    /// SQL and WKT keyword.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// GeoJSON `type` member.
    pub const fn geojson_name(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    fn from_geojson(name: &str) -> Option<Self> {
        Some(match name {
            "Point" => GeometryKind::Point,
            "LineString" => GeometryKind::LineString,
            "Polygon" => GeometryKind::Polygon,
            "MultiPoint" => GeometryKind::MultiPoint,
            "MultiLineString" => GeometryKind::MultiLineString,
            "MultiPolygon" => GeometryKind::MultiPolygon,
            "GeometryCollection" => GeometryKind::GeometryCollection,
            _ => return None,
        })
    }

    /// Array nesting of `coordinates` above a single position.
    const fn depth(&self) -> usize {
        match self {
            GeometryKind::Point => 0,
            GeometryKind::LineString | GeometryKind::MultiPoint => 1,
            GeometryKind::Polygon | GeometryKind::MultiLineString => 2,
            GeometryKind::MultiPolygon => 3,
            GeometryKind::GeometryCollection => 0,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPoint,
            GeometryKind::MultiLineString,
            GeometryKind::MultiPolygon,
            GeometryKind::GeometryCollection,
        ]
        .into_iter()
        .find(|v| v.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| configuration_error(format!("'{s}' is not a valid geometry type")))
    }
}

/// Options of GEOMETRY and GEOGRAPHY.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GeometryType {
    pub kind: Option<GeometryKind>,
    pub srid: Option<u32>,
}

impl GeometryType {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn kind(mut self, kind: GeometryKind) -> Self {
        self.kind = Some(kind);
        self
    }
    pub fn srid(mut self, srid: u32) -> Self {
        self.srid = Some(srid);
        self
    }

    /// `NAME[(KIND[,srid])]`.
    pub(crate) fn write_sql(&self, out: &mut String, name: &str) {
        out.push_str(name);
        if let Some(kind) = self.kind {
            out.push('(');
            out.push_str(kind.as_str());
            if let Some(srid) = self.srid {
                out.push(',');
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(srid));
            }
            out.push(')');
        }
    }

    pub(crate) fn validate(&self, value: &Value, name: &str) -> Result<()> {
        let kind = assert_geojson(value).map_err(|e| {
            validation_error(format!("{value} is not a valid {name}: {e}"), value)
        })?;
        let Some(expected) = self.kind else {
            return Ok(());
        };
        if expected != kind {
            return Err(validation_error(
                format!(
                    "{value} is not a valid {name}: expected a {} but got a {}",
                    expected.geojson_name(),
                    kind.geojson_name()
                ),
                value,
            ));
        }
        Ok(())
    }
}

/// Structural GeoJSON geometry check, returns the geometry kind.
pub fn assert_geojson(value: &Value) -> Result<GeometryKind> {
    let Value::Map(object) = value else {
        return Err(Error::msg("a GeoJSON geometry must be an object"));
    };
    let name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::msg("the `type` member is missing"))?;
    let kind = GeometryKind::from_geojson(name)
        .ok_or_else(|| Error::msg(format!("`{name}` is not a GeoJSON geometry type")))?;
    if kind == GeometryKind::GeometryCollection {
        let Some(Value::Array(geometries)) = object.get("geometries") else {
            return Err(Error::msg("the `geometries` member must be an array"));
        };
        for geometry in geometries {
            assert_geojson(geometry)?;
        }
    } else {
        let coordinates = object
            .get("coordinates")
            .ok_or_else(|| Error::msg("the `coordinates` member is missing"))?;
        assert_coordinates(coordinates, kind.depth())?;
    }
    Ok(kind)
}

fn assert_coordinates(value: &Value, depth: usize) -> Result<()> {
    let Value::Array(items) = value else {
        return Err(Error::msg(format!("{value} is not a coordinates array")));
    };
    if depth == 0 {
        if items.len() < 2 || !items.iter().all(|v| matches!(v, Value::Number(n) if n.is_finite()))
        {
            return Err(Error::msg(format!("{value} is not a valid position")));
        }
        return Ok(());
    }
    items
        .iter()
        .try_for_each(|item| assert_coordinates(item, depth - 1))
}

/// Well-known text of a GeoJSON geometry.
pub fn to_wkt(value: &Value) -> Result<String> {
    let kind = assert_geojson(value)?;
    let mut out = String::new();
    write_wkt(&mut out, value, kind);
    Ok(out)
}

fn write_wkt(out: &mut String, value: &Value, kind: GeometryKind) {
    let Value::Map(object) = value else {
        return;
    };
    out.push_str(kind.as_str());
    out.push('(');
    if kind == GeometryKind::GeometryCollection {
        if let Some(Value::Array(geometries)) = object.get("geometries") {
            separated_by(
                out,
                geometries,
                |out, v| {
                    if let Ok(kind) = assert_geojson(v) {
                        write_wkt(out, v, kind);
                    }
                },
                ",",
            );
        }
    } else if let Some(coordinates) = object.get("coordinates") {
        match kind {
            GeometryKind::Point => write_position(out, coordinates),
            // MULTIPOINT((1 2),(3 4))
            GeometryKind::MultiPoint => write_nested(out, coordinates, 1, true),
            _ => write_nested(out, coordinates, kind.depth(), false),
        }
    }
    out.push(')');
}

fn write_nested(out: &mut String, value: &Value, depth: usize, wrap_positions: bool) {
    let Value::Array(items) = value else {
        return;
    };
    separated_by(
        out,
        items,
        |out, v| {
            if depth == 1 {
                if wrap_positions {
                    out.push('(');
                }
                write_position(out, v);
                if wrap_positions {
                    out.push(')');
                }
            } else {
                out.push('(');
                write_nested(out, v, depth - 1, wrap_positions);
                out.push(')');
            }
        },
        ",",
    );
}

fn write_position(out: &mut String, value: &Value) {
    if let Value::Array(items) = value {
        separated_by(
            out,
            items,
            |out, v| {
                if let Value::Number(v) = v {
                    write_number(out, *v);
                }
            },
            " ",
        );
    }
}
